// Host-side tests for derived question-screen geometry.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
#[path = "../src/core/mod.rs"]
mod core;

use crate::core::layout::{progress, Layout, Stacking, Viewport};

const MAX: usize = 8;

fn approx(a: f32, b: f32) {
    assert!((a - b).abs() < 1e-3, "{a} != {b}");
}

fn desktop() -> Viewport {
    Viewport::new(1024.0, 768.0)
}

#[test]
fn progress_endpoints_and_clamp() {
    assert_eq!(progress(0, MAX), 0.0);
    assert_eq!(progress(MAX, MAX), 1.0);
    assert_eq!(progress(MAX + 5, MAX), 1.0);
    approx(progress(2, MAX), 0.25);
    assert_eq!(progress(0, 0), 1.0);
}

#[test]
fn initial_desktop_layout() {
    let l = Layout::derive(0, MAX, desktop());
    assert_eq!(l.stacking, Stacking::Row);
    approx(l.gap, 24.0);
    approx(l.yes.x, 160.0);
    approx(l.yes.y, 60.0);
    let no = l.no.expect("no button at step 0");
    approx(no.x, 140.0);
    approx(no.y, 56.0);
    approx(l.buttons_top, 144.0);
    approx(l.buttons_height, 60.0);
    // 144 - 20 gap - 48 title height
    approx(l.title_top, 76.0);
    approx(l.title_scale, 1.0);
    approx(l.gif_top, 144.0 + 60.0 + 12.0);
    approx(l.gif_scale, 1.0);
}

#[test]
fn yes_grows_linearly_with_progress() {
    let l = Layout::derive(2, MAX, desktop());
    approx(l.yes.x, 160.0 + 0.25 * (1024.0 - 160.0));
    approx(l.yes.y, 60.0 + 0.25 * 768.0 * 0.6);

    let full = Layout::derive(MAX, MAX, desktop());
    approx(full.yes.x, 1024.0);
    approx(full.yes.y, 60.0 + 768.0 * 0.6);
}

#[test]
fn yes_width_never_shrinks_below_minimum_on_tiny_viewports() {
    let l = Layout::derive(MAX, MAX, Viewport::new(100.0, 200.0));
    approx(l.yes.x, 160.0);
}

#[test]
fn no_button_narrows_and_grows_taller_before_stacking() {
    let l1 = Layout::derive(1, MAX, desktop());
    let l2 = Layout::derive(2, MAX, desktop());
    assert_eq!(l2.stacking, Stacking::Row);
    let (n1, n2) = (l1.no.unwrap(), l2.no.unwrap());
    approx(n1.x, 130.0);
    approx(n1.y, 66.0);
    approx(n2.x, 120.0);
    approx(n2.y, 76.0);
}

#[test]
fn stacking_switches_above_threshold() {
    // 2/8 = 0.25 keeps the row, 3/8 = 0.375 stacks
    assert_eq!(Layout::derive(2, MAX, desktop()).stacking, Stacking::Row);
    let l = Layout::derive(3, MAX, desktop());
    assert_eq!(l.stacking, Stacking::Column);
    approx(l.gap, 8.0);
    let no = l.no.unwrap();
    approx(no.x, 200.0);
    approx(no.y, 56.0);
    approx(l.buttons_height, l.yes.y + 56.0 + 8.0);
}

#[test]
fn stacked_no_width_is_capped() {
    let no = Layout::derive(7, MAX, desktop()).no.unwrap();
    approx(no.x, 260.0);
}

#[test]
fn row_no_width_has_a_floor() {
    // a long script keeps the row for more steps than the floor allows
    let no = Layout::derive(7, 40, desktop()).no.unwrap();
    approx(no.x, 80.0);
    approx(no.y, 56.0 + 70.0);
}

#[test]
fn exhausted_script_drops_no_from_height() {
    let l = Layout::derive(MAX, MAX, desktop());
    assert!(l.no.is_none());
    approx(l.buttons_height, l.yes.y);
    approx(l.title_scale, 0.85);
    approx(l.gif_scale, 0.8);
}

#[test]
fn title_height_follows_breakpoints() {
    let at = |w: f32| Layout::derive(0, MAX, Viewport::new(w, 800.0)).title_top;
    approx(at(375.0), 112.0 - 12.0 - 32.0);
    approx(at(700.0), 144.0 - 20.0 - 40.0);
    approx(at(1280.0), 144.0 - 20.0 - 48.0);
}

#[test]
fn mobile_gif_gap_tightens_after_third_step() {
    let vp = Viewport::new(375.0, 667.0);
    let early = Layout::derive(2, MAX, vp);
    let late = Layout::derive(3, MAX, vp);
    approx(early.gif_top, 112.0 + early.buttons_height + 64.0);
    approx(late.gif_top, 112.0 + late.buttons_height + 40.0);
}

#[test]
fn resize_to_mobile_moves_title_and_gif_but_not_no_button() {
    let wide = Layout::derive(2, MAX, desktop());
    let narrow = Layout::derive(2, MAX, Viewport::new(375.0, 667.0));

    assert!(!wide.is_mobile);
    assert!(narrow.is_mobile);
    approx(wide.title_top, 76.0);
    approx(narrow.title_top, 68.0);
    approx(narrow.gif_top, 112.0 + narrow.buttons_height + 64.0);
    assert_ne!(wide.gif_top, narrow.gif_top);

    assert_eq!(wide.stacking, narrow.stacking);
    assert_eq!(wide.no, narrow.no);
    approx(wide.gap, narrow.gap);
    approx(wide.title_scale, narrow.title_scale);
    approx(wide.gif_scale, narrow.gif_scale);
}

#[test]
fn zero_viewport_falls_back_for_sizing() {
    let l = Layout::derive(MAX, MAX, Viewport::default());
    approx(l.yes.x, 360.0);
    approx(l.yes.y, 60.0 + 640.0 * 0.6);
    assert!(l.is_mobile);
}

#[test]
fn stacking_css_direction() {
    assert_eq!(Stacking::Row.css_direction(), "row");
    assert_eq!(Stacking::Column.css_direction(), "column");
}

// Host-side tests for tween and spring interpolation.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
#[path = "../src/core/mod.rs"]
mod core;

use crate::core::motion::{Channel, Ease, Interpolate, Transition};

const FRAME: f32 = 1.0 / 60.0;

fn run(ch: &mut Channel, t: &Transition, target: f32, frames: usize) {
    for _ in 0..frames {
        ch.drive(t, target, FRAME);
    }
}

#[test]
fn ease_endpoints() {
    for ease in [Ease::Linear, Ease::EaseOut] {
        assert_eq!(ease.apply(0.0), 0.0);
        assert_eq!(ease.apply(1.0), 1.0);
        assert_eq!(ease.apply(2.0), 1.0);
    }
    assert!(Ease::EaseOut.apply(0.5) > Ease::Linear.apply(0.5));
}

#[test]
fn tween_reaches_target_after_duration() {
    let t = Transition::tween(1.0);
    let mut ch = Channel::at(0.0);
    for _ in 0..5 {
        ch.drive(&t, 1.0, 0.1);
    }
    assert!((ch.value - Ease::EaseOut.apply(0.5)).abs() < 1e-3);
    assert!(!ch.is_settled());
    for _ in 0..6 {
        ch.drive(&t, 1.0, 0.1);
    }
    assert_eq!(ch.value, 1.0);
    assert!(ch.is_settled());
}

#[test]
fn tween_retarget_starts_from_current_value() {
    let t = Transition::Tween {
        duration_sec: 1.0,
        ease: Ease::Linear,
    };
    let mut ch = Channel::at(0.0);
    for _ in 0..5 {
        ch.drive(&t, 1.0, 0.1);
    }
    let mid = ch.value;
    ch.drive(&t, 0.0, 0.0);
    assert!((ch.value - mid).abs() < 1e-6, "retarget must not jump");
    for _ in 0..11 {
        ch.drive(&t, 0.0, 0.1);
    }
    assert_eq!(ch.value, 0.0);
}

#[test]
fn zero_duration_tween_snaps() {
    let ch = Transition::tween(0.0).interpolate(Channel::at(3.0), 7.0, FRAME);
    assert_eq!(ch.value, 7.0);
}

#[test]
fn spring_settles_exactly_on_target() {
    let t = Transition::spring(140.0);
    let mut ch = Channel::at(0.0);
    run(&mut ch, &t, 100.0, 600);
    assert_eq!(ch.value, 100.0);
    assert_eq!(ch.velocity, 0.0);
    assert!(ch.is_settled());
}

#[test]
fn lightly_damped_spring_overshoots() {
    let t = Transition::spring(140.0);
    let mut ch = Channel::at(0.0);
    let mut peak = 0.0_f32;
    for _ in 0..120 {
        peak = peak.max(ch.drive(&t, 1.0, FRAME));
    }
    assert!(peak > 1.0);
}

#[test]
fn damped_springs_converge_for_every_preset() {
    for (k, c) in [(160.0, 18.0), (150.0, 20.0), (200.0, 18.0)] {
        let t = Transition::spring_damped(k, c);
        let mut ch = Channel::at(60.0);
        run(&mut ch, &t, 420.0, 600);
        assert_eq!(ch.value, 420.0, "spring ({k}, {c}) did not settle");
    }
}

#[test]
fn long_frame_gaps_are_clamped() {
    let t = Transition::spring(120.0);
    let mut ch = Channel::at(0.0);
    ch.drive(&t, 1.0, 5.0);
    assert!(ch.value.is_finite());
    assert!(ch.value.abs() < 2.0);
}

#[test]
fn resting_channel_stays_put() {
    let mut ch = Channel::at(12.0);
    ch.drive(&Transition::spring(100.0), 12.0, FRAME);
    assert_eq!(ch.value, 12.0);
    assert!(ch.is_settled());
}

// Host-side tests for the screen hand-off sequence.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
#[path = "../src/core/mod.rs"]
mod core;

use crate::core::stage::{Stage, StageEvent};

#[test]
fn full_sequence() {
    let s = Stage::Intro
        .next(StageEvent::IntroDone)
        .next(StageEvent::IntroFadedOut)
        .next(StageEvent::Accepted);
    assert_eq!(s, Stage::Celebration);
    assert!(s.is_terminal());
}

#[test]
fn question_waits_for_intro_fade() {
    let leaving = Stage::Intro.next(StageEvent::IntroDone);
    assert_eq!(leaving, Stage::LeavingIntro);
    assert_eq!(leaving.next(StageEvent::Accepted), Stage::LeavingIntro);
    assert_eq!(leaving.next(StageEvent::IntroDone), Stage::LeavingIntro);
}

#[test]
fn intro_ignores_later_events() {
    assert_eq!(Stage::Intro.next(StageEvent::IntroFadedOut), Stage::Intro);
    assert_eq!(Stage::Intro.next(StageEvent::Accepted), Stage::Intro);
}

#[test]
fn celebration_has_no_way_out() {
    for ev in [
        StageEvent::IntroDone,
        StageEvent::IntroFadedOut,
        StageEvent::Accepted,
    ] {
        assert_eq!(Stage::Celebration.next(ev), Stage::Celebration);
    }
    assert!(!Stage::Question.is_terminal());
}

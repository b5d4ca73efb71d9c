// Host-side tests for the question flow state machine.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
#[path = "../src/core/mod.rs"]
mod core;

use crate::core::flow::{Answer, FlowPhase, QuestionFlow};
use crate::core::layout::Viewport;
use crate::core::script::RefusalScript;

fn desktop() -> Viewport {
    Viewport::new(1024.0, 768.0)
}

fn new_flow() -> QuestionFlow {
    QuestionFlow::new(RefusalScript::default(), desktop())
}

fn flow_at(step: usize) -> QuestionFlow {
    let mut flow = new_flow();
    for _ in 0..step {
        flow.answer(Answer::No);
    }
    flow
}

#[test]
fn starts_asking_at_step_zero() {
    let flow = new_flow();
    assert_eq!(flow.phase(), FlowPhase::Asking(0));
    assert_eq!(flow.max_step(), 8);
    assert!(!flow.is_accepted());
    assert_eq!(flow.no_label(), Some("No"));
}

#[test]
fn no_advances_one_step_and_saturates_at_max() {
    let max = new_flow().max_step();
    for step in 0..=max {
        let mut flow = flow_at(step);
        assert_eq!(flow.step(), step);
        let phase = flow.answer(Answer::No);
        assert_eq!(phase, FlowPhase::Asking((step + 1).min(max)));
    }
    let mut flow = flow_at(max);
    flow.answer(Answer::No);
    flow.answer(Answer::No);
    assert_eq!(flow.step(), max);
}

#[test]
fn yes_accepts_from_every_step() {
    for step in 0..=new_flow().max_step() {
        let mut flow = flow_at(step);
        assert_eq!(flow.answer(Answer::Yes), FlowPhase::Accepted);
        assert!(flow.is_accepted());
    }
}

#[test]
fn accepted_is_terminal() {
    let mut flow = flow_at(3);
    flow.answer(Answer::Yes);
    assert_eq!(flow.answer(Answer::No), FlowPhase::Accepted);
    assert_eq!(flow.answer(Answer::Yes), FlowPhase::Accepted);
    assert_eq!(flow.step(), 3, "step must not move after acceptance");
    assert!(!flow.no_button_visible());
}

#[test]
fn labels_follow_the_script() {
    let script = RefusalScript::default();
    let mut flow = new_flow();
    for step in 0..script.max_step() {
        assert_eq!(flow.no_label(), Some(script.line(step)));
        flow.answer(Answer::No);
    }
    assert_eq!(flow.no_label(), None);
}

#[test]
fn no_button_present_strictly_before_max_step() {
    let max = new_flow().max_step();
    for step in 0..max {
        let flow = flow_at(step);
        assert!(flow.no_button_visible(), "missing at step {step}");
        assert!(flow.layout().no.is_some());
    }
    let flow = flow_at(max);
    assert!(!flow.no_button_visible());
    assert!(flow.layout().no.is_none());
}

#[test]
fn eight_refusals_leave_only_yes_then_accept() {
    let mut flow = new_flow();
    for _ in 0..8 {
        flow.answer(Answer::No);
    }
    assert_eq!(flow.step(), 8);
    assert_eq!(flow.step(), flow.max_step());
    assert!(!flow.no_button_visible());
    assert_eq!(flow.answer(Answer::Yes), FlowPhase::Accepted);
}

#[test]
fn immediate_yes_skips_the_script() {
    let mut flow = new_flow();
    assert_eq!(flow.answer(Answer::Yes), FlowPhase::Accepted);
    assert_eq!(flow.step(), 0);
}

#[test]
fn progress_is_monotonic_and_bounded() {
    let max = new_flow().max_step();
    let mut prev = -1.0_f32;
    for step in 0..=max {
        let p = flow_at(step).progress();
        assert!((0.0..=1.0).contains(&p));
        assert!(p >= prev, "progress decreased at step {step}");
        prev = p;
    }
    assert_eq!(flow_at(0).progress(), 0.0);
    assert_eq!(flow_at(max).progress(), 1.0);
}

#[test]
fn single_line_script_starts_exhausted() {
    let script = RefusalScript::new(vec!["No".to_string()]).unwrap();
    let mut flow = QuestionFlow::new(script, desktop());
    assert_eq!(flow.max_step(), 0);
    assert_eq!(flow.progress(), 1.0);
    assert!(!flow.no_button_visible());
    assert_eq!(flow.answer(Answer::No), FlowPhase::Asking(0));
}

#[test]
fn resize_updates_viewport_only() {
    let mut flow = flow_at(2);
    flow.resize(Viewport::new(375.0, 667.0));
    assert_eq!(flow.viewport(), Viewport::new(375.0, 667.0));
    assert_eq!(flow.step(), 2);
    assert!(flow.layout().is_mobile);
}

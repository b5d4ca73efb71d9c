use super::layout::{progress, Layout, Viewport};
use super::script::RefusalScript;

/// User answer delivered by the question screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Answer {
    No,
    Yes,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlowPhase {
    Asking(usize),
    Accepted,
}

/// State machine behind the question screen.
///
/// `step` counts refusals and only grows while the flow is still asking.
/// Accepting is terminal: once accepted, further answers are ignored.
#[derive(Clone, Debug)]
pub struct QuestionFlow {
    script: RefusalScript,
    step: usize,
    accepted: bool,
    viewport: Viewport,
}

impl QuestionFlow {
    pub fn new(script: RefusalScript, viewport: Viewport) -> Self {
        Self {
            script,
            step: 0,
            accepted: false,
            viewport,
        }
    }

    #[inline]
    pub fn step(&self) -> usize {
        self.step
    }

    #[inline]
    pub fn max_step(&self) -> usize {
        self.script.max_step()
    }

    #[inline]
    pub fn is_accepted(&self) -> bool {
        self.accepted
    }

    #[inline]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn phase(&self) -> FlowPhase {
        if self.accepted {
            FlowPhase::Accepted
        } else {
            FlowPhase::Asking(self.step)
        }
    }

    pub fn progress(&self) -> f32 {
        progress(self.step, self.max_step())
    }

    /// Apply an answer and return the resulting phase.
    pub fn answer(&mut self, answer: Answer) -> FlowPhase {
        if !self.accepted {
            match answer {
                Answer::No => self.step = (self.step + 1).min(self.max_step()),
                Answer::Yes => self.accepted = true,
            }
        }
        self.phase()
    }

    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// The No button disappears once the script has run out.
    #[inline]
    pub fn no_button_visible(&self) -> bool {
        !self.accepted && self.step < self.max_step()
    }

    pub fn no_label(&self) -> Option<&str> {
        self.no_button_visible()
            .then(|| self.script.line(self.step))
    }

    pub fn layout(&self) -> Layout {
        Layout::derive(self.step, self.max_step(), self.viewport)
    }
}

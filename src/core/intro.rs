//! Timed intro sequence.
//!
//! The intro is a fixed list of [`Cue`]s, each a delay paired with the
//! reveals it performs. A [`CueScheduler`] hands every cue to a
//! [`TimerHost`] up front and cancels whatever has not fired yet when it is
//! dropped, so a torn-down intro never receives a stale callback.

use super::constants::{INTRO_HELLO_AT_MS, INTRO_HINT_AT_MS, INTRO_LOADING_AT_MS};
use smallvec::{smallvec, SmallVec};
use std::rc::Rc;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reveal {
    ShowHello,
    ShowLoading,
    HideLoading,
    ShowGif,
    ShowHint,
    EnableContinue,
    /// Not a visual change: asks the audio unlocker to try starting music.
    UnlockAudio,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Cue {
    pub at_ms: u32,
    pub reveals: SmallVec<[Reveal; 4]>,
}

pub fn intro_cues() -> Vec<Cue> {
    vec![
        Cue {
            at_ms: INTRO_HELLO_AT_MS,
            reveals: smallvec![Reveal::ShowHello],
        },
        Cue {
            at_ms: INTRO_LOADING_AT_MS,
            reveals: smallvec![Reveal::ShowLoading, Reveal::ShowGif, Reveal::UnlockAudio],
        },
        Cue {
            at_ms: INTRO_HINT_AT_MS,
            reveals: smallvec![
                Reveal::HideLoading,
                Reveal::ShowHint,
                Reveal::EnableContinue
            ],
        },
    ]
}

/// Visibility flags for the intro. Each flag only ever turns on, except the
/// loading line which is shown and later hidden.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct IntroState {
    pub hello_shown: bool,
    pub loading_shown: bool,
    pub gif_shown: bool,
    pub hint_shown: bool,
    pub can_continue: bool,
}

impl IntroState {
    pub fn apply(&mut self, reveal: Reveal) {
        match reveal {
            Reveal::ShowHello => self.hello_shown = true,
            Reveal::ShowLoading => self.loading_shown = true,
            Reveal::HideLoading => self.loading_shown = false,
            Reveal::ShowGif => self.gif_shown = true,
            Reveal::ShowHint => self.hint_shown = true,
            Reveal::EnableContinue => self.can_continue = true,
            Reveal::UnlockAudio => {}
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tap {
    Ignored,
    Continue,
}

/// Intro state plus the one-shot hand-off to the question screen.
#[derive(Clone, Debug, Default)]
pub struct IntroGate {
    state: IntroState,
    done: bool,
}

impl IntroGate {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn state(&self) -> IntroState {
        self.state
    }

    #[inline]
    pub fn is_done(&self) -> bool {
        self.done
    }

    pub fn apply(&mut self, reveal: Reveal) {
        self.state.apply(reveal);
    }

    /// Taps before the hint appears are ignored; the first tap afterwards
    /// continues, and every later tap is ignored again.
    pub fn on_tap(&mut self) -> Tap {
        if !self.state.can_continue || self.done {
            return Tap::Ignored;
        }
        self.done = true;
        Tap::Continue
    }
}

/// One-shot delayed callbacks with cancellation.
pub trait TimerHost {
    type Handle;

    fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Self::Handle;

    /// Cancelling a handle that already fired must be harmless.
    fn cancel(&self, handle: Self::Handle);
}

pub struct CueScheduler<H: TimerHost> {
    host: H,
    pending: Vec<H::Handle>,
}

impl<H: TimerHost> CueScheduler<H> {
    /// Schedule every cue; `sink` receives each reveal in cue order.
    pub fn start(host: H, cues: &[Cue], sink: Rc<dyn Fn(Reveal)>) -> Self {
        let pending = cues
            .iter()
            .map(|cue| {
                let sink = sink.clone();
                let reveals = cue.reveals.clone();
                let at_ms = cue.at_ms;
                host.schedule(
                    at_ms,
                    Box::new(move || {
                        log::debug!("[intro] cue at {}ms: {:?}", at_ms, reveals.as_slice());
                        for r in reveals {
                            sink(r);
                        }
                    }),
                )
            })
            .collect();
        Self { host, pending }
    }

    pub fn cancel_all(&mut self) {
        for handle in self.pending.drain(..) {
            self.host.cancel(handle);
        }
    }
}

impl<H: TimerHost> Drop for CueScheduler<H> {
    fn drop(&mut self) {
        self.cancel_all();
    }
}

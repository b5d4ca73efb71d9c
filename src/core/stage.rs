/// Which screen the card is on. Every hand-off is one-way.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    Intro,
    /// Intro tapped through, fading out before the question mounts.
    LeavingIntro,
    Question,
    Celebration,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StageEvent {
    IntroDone,
    IntroFadedOut,
    Accepted,
}

impl Stage {
    /// Next stage for `event`; events that do not apply leave the stage as is.
    pub fn next(self, event: StageEvent) -> Stage {
        match (self, event) {
            (Stage::Intro, StageEvent::IntroDone) => Stage::LeavingIntro,
            (Stage::LeavingIntro, StageEvent::IntroFadedOut) => Stage::Question,
            (Stage::Question, StageEvent::Accepted) => Stage::Celebration,
            (stage, _) => stage,
        }
    }

    #[inline]
    pub fn is_terminal(self) -> bool {
        self == Stage::Celebration
    }
}

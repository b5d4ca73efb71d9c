pub mod audio;
pub mod config;
pub mod confetti;
pub mod constants;
pub mod flow;
pub mod intro;
pub mod layout;
pub mod motion;
pub mod script;
pub mod stage;

pub use audio::{AudioUnlocker, Track};
pub use config::CardConfig;
pub use flow::{Answer, FlowPhase, QuestionFlow};
pub use intro::{intro_cues, CueScheduler, IntroGate, Reveal, Tap, TimerHost};
pub use layout::{Layout, Viewport};
pub use motion::{Channel, Transition};
pub use stage::{Stage, StageEvent};

use super::constants::MUSIC_VOLUME;
use super::script::RefusalScript;
use thiserror::Error;

/// Escalating replies shown on the "No" button, one per refusal.
pub const DEFAULT_REFUSALS: [&str; 9] = [
    "No",
    "Are you sure?",
    "Really sure?",
    "Are you positive?",
    "Pookie please...",
    "Just think about it",
    "If you say no, I will be really sad",
    "I will be very sad",
    "I will be very very very sad...",
];

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("refusal script must contain at least one line")]
    EmptyScript,
    #[error("music volume {0} is outside 0..=1")]
    VolumeOutOfRange(f64),
    #[error("music volume {0:?} is not a number")]
    InvalidVolume(String),
}

/// Where the bundled media lives. File names are joined onto `base`.
#[derive(Clone, Debug, PartialEq)]
pub struct AssetPaths {
    pub base: String,
    pub background: String,
    pub gif_main: String,
    pub gif_yes: String,
    pub gif_intro: String,
    pub music: String,
}

impl Default for AssetPaths {
    fn default() -> Self {
        Self {
            base: "assets/".to_string(),
            background: "background.svg".to_string(),
            gif_main: "gif-main.gif".to_string(),
            gif_yes: "gif-yes.gif".to_string(),
            gif_intro: "gif-intro.gif".to_string(),
            music: "bg-music.mp3".to_string(),
        }
    }
}

impl AssetPaths {
    pub fn url(&self, file: &str) -> String {
        if self.base.is_empty() || self.base.ends_with('/') {
            format!("{}{}", self.base, file)
        } else {
            format!("{}/{}", self.base, file)
        }
    }
}

/// Everything the card shows or plays. Built once at start-up and shared
/// read-only by every screen.
#[derive(Clone, Debug, PartialEq)]
pub struct CardConfig {
    pub recipient: String,
    pub question: String,
    pub accepted_headline: String,
    pub loading_text: String,
    pub hint_text: String,
    pub yes_label: String,
    pub refusals: Vec<String>,
    pub assets: AssetPaths,
    pub music_volume: f64,
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            recipient: "Narcisa".to_string(),
            question: "Will you go on a date with me?".to_string(),
            accepted_headline: "Knew you would say yes 💖".to_string(),
            loading_text: "Please wait… your page is being loaded...".to_string(),
            hint_text: "please tap anywhere to continue...".to_string(),
            yes_label: "Yes".to_string(),
            refusals: DEFAULT_REFUSALS.iter().map(|s| s.to_string()).collect(),
            assets: AssetPaths::default(),
            music_volume: MUSIC_VOLUME,
        }
    }
}

impl CardConfig {
    /// Apply string overrides (e.g. `data-*` attributes on the mount element).
    ///
    /// Recognised keys: `recipient`, `asset-base`, `volume`. A volume that
    /// fails to parse or lies outside 0..=1 is ignored with a warning.
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(name) = lookup("recipient").filter(|s| !s.trim().is_empty()) {
            self.recipient = name.trim().to_string();
        }
        if let Some(base) = lookup("asset-base") {
            self.assets.base = base;
        }
        if let Some(raw) = lookup("volume") {
            match parse_volume(&raw) {
                Ok(v) => self.music_volume = v,
                Err(e) => log::warn!("[config] ignoring volume override: {}", e),
            }
        }
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.refusals.is_empty() {
            return Err(ConfigError::EmptyScript);
        }
        check_volume(self.music_volume)
    }

    pub fn greeting(&self) -> String {
        format!("Hello {}", self.recipient)
    }

    pub fn script(&self) -> Result<RefusalScript, ConfigError> {
        RefusalScript::new(self.refusals.clone())
    }
}

fn check_volume(v: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&v) {
        Ok(())
    } else {
        Err(ConfigError::VolumeOutOfRange(v))
    }
}

fn parse_volume(raw: &str) -> Result<f64, ConfigError> {
    let v: f64 = raw
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidVolume(raw.to_string()))?;
    check_volume(v)?;
    Ok(v)
}

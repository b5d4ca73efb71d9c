use super::config::ConfigError;

/// Fixed, ordered list of refusal messages. The number of lines bounds how
/// many times "No" can be pressed: `max_step = len - 1`.
#[derive(Clone, Debug, PartialEq)]
pub struct RefusalScript {
    lines: Vec<String>,
}

impl RefusalScript {
    pub fn new(lines: Vec<String>) -> Result<Self, ConfigError> {
        if lines.is_empty() {
            return Err(ConfigError::EmptyScript);
        }
        Ok(Self { lines })
    }

    #[inline]
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[inline]
    pub fn max_step(&self) -> usize {
        self.lines.len() - 1
    }

    /// Line for `step`, clamped to the last line.
    pub fn line(&self, step: usize) -> &str {
        &self.lines[step.min(self.max_step())]
    }
}

impl Default for RefusalScript {
    fn default() -> Self {
        Self {
            lines: super::config::DEFAULT_REFUSALS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

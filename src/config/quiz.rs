//! Quiz configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Quiz configuration
#[derive(Debug, Clone, Deserialize)]
pub struct QuizConfig {
    /// Seconds shown on the per-question countdown
    #[serde(default = "default_timer_secs")]
    pub timer_secs: u64,
}

impl QuizConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.timer_secs == 0 {
            return Err(ValidationError::InvalidTimer);
        }
        Ok(())
    }
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            timer_secs: default_timer_secs(),
        }
    }
}

fn default_timer_secs() -> u64 {
    30
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiz_config_defaults() {
        assert_eq!(QuizConfig::default().timer_secs, 30);
        assert!(QuizConfig::default().validate().is_ok());
    }

    #[test]
    fn test_zero_timer_is_invalid() {
        let config = QuizConfig { timer_secs: 0 };
        assert_eq!(config.validate(), Err(ValidationError::InvalidTimer));
    }
}

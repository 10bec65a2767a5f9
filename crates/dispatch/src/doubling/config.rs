use thiserror::Error;

/// The most terms a doubling sequence can hold before any start other than
/// zero overflows an `i64`.
const MAX_STEPS: usize = 64;

/// Configuration for a doubling sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    steps: usize,
}

/// Errors that can occur when validating a doubling config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("steps must be at least 1")]
    ZeroSteps,

    #[error("steps must be at most 64, got {0}")]
    TooManySteps(usize),
}

impl Default for Config {
    fn default() -> Self {
        Self { steps: 5 }
    }
}

impl Config {
    /// Creates a new config with a validated number of steps.
    ///
    /// # Errors
    ///
    /// Returns an error if `steps` is zero or larger than 64.
    pub fn new(steps: usize) -> Result<Self, ConfigError> {
        if steps == 0 {
            return Err(ConfigError::ZeroSteps);
        }
        if steps > MAX_STEPS {
            return Err(ConfigError::TooManySteps(steps));
        }

        Ok(Self { steps })
    }

    /// Returns the number of terms in the sequence.
    #[must_use]
    pub fn steps(&self) -> usize {
        self.steps
    }
}

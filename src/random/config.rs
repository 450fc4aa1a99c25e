//! Randomized solver configuration.

use crate::error::{KnapsackError, Result};

/// Configuration shared by the randomized solvers.
///
/// # Examples
///
/// ```
/// use u_knapsack::random::RandomConfig;
///
/// let config = RandomConfig::default()
///     .with_trials(250)
///     .with_seed(42);
/// assert_eq!(config.trials, 250);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RandomConfig {
    /// Number of trials (restarts or perturbations). Must be positive.
    pub trials: usize,

    /// Seed used by `run`. `None` draws one from the OS.
    pub seed: Option<u64>,
}

impl Default for RandomConfig {
    fn default() -> Self {
        Self {
            trials: 1000,
            seed: None,
        }
    }
}

impl RandomConfig {
    pub fn new(trials: usize) -> Self {
        Self {
            trials,
            ..Self::default()
        }
    }

    pub fn with_trials(mut self, trials: usize) -> Self {
        self.trials = trials;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.trials == 0 {
            return Err(KnapsackError::InvalidConfig("trials must be positive".into()));
        }
        Ok(())
    }
}

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Configuration for a `train_loop` run.
///
/// # Fields
/// - `epochs`    — total number of full passes over the training data
/// - `log_every` — emit an `info` line every this many epochs; the final
///                 epoch is always logged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainConfig {
    pub epochs: usize,
    #[serde(default = "default_log_every")]
    pub log_every: usize,
}

fn default_log_every() -> usize {
    1000
}

impl Default for TrainConfig {
    fn default() -> Self {
        TrainConfig::new(50_000)
    }
}

impl TrainConfig {
    /// Creates a `TrainConfig` that logs every 1000 epochs.
    pub fn new(epochs: usize) -> Self {
        TrainConfig { epochs, log_every: default_log_every() }
    }

    pub fn with_log_every(mut self, log_every: usize) -> Self {
        self.log_every = log_every;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.epochs == 0 {
            return Err(Error::InvalidConfig("epochs must be at least 1".into()));
        }
        if self.log_every == 0 {
            return Err(Error::InvalidConfig("log_every must be at least 1".into()));
        }
        Ok(())
    }
}

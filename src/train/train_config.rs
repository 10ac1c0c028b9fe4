use serde::{Deserialize, Serialize};

use crate::error::{NetworkError, Result};

/// When to hand the mean absolute output error to the training observer.
///
/// With `enabled` set, a report is emitted on every epoch index that is a
/// multiple of `frequency` (epoch 0 included).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportConfig {
    pub enabled: bool,
    pub frequency: usize,
}

impl ReportConfig {
    pub fn every(frequency: usize) -> Self {
        ReportConfig { enabled: true, frequency }
    }

    pub fn disabled() -> Self {
        ReportConfig { enabled: false, ..ReportConfig::default() }
    }

    pub(crate) fn is_due(&self, epoch: usize) -> bool {
        self.enabled && epoch % self.frequency == 0
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.enabled && self.frequency == 0 {
            return Err(NetworkError::Configuration(
                "report frequency must be positive when reporting is enabled".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        ReportConfig { enabled: true, frequency: 10_000 }
    }
}

/// Configuration for a training run.
///
/// # Fields
/// - `epochs`        : number of full passes over the dataset; `0` is a no-op
/// - `learning_rate` : step size applied to every weight and bias delta
/// - `report`        : diagnostic reporting schedule
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainConfig {
    pub epochs: usize,
    pub learning_rate: f64,
    pub report: ReportConfig,
}

impl TrainConfig {
    pub fn new(epochs: usize, learning_rate: f64) -> Self {
        TrainConfig { epochs, learning_rate, ..TrainConfig::default() }
    }

    pub fn with_epochs(mut self, epochs: usize) -> Self {
        self.epochs = epochs;
        self
    }

    pub fn with_learning_rate(mut self, learning_rate: f64) -> Self {
        self.learning_rate = learning_rate;
        self
    }

    pub fn with_report(mut self, frequency: usize) -> Self {
        self.report = ReportConfig::every(frequency);
        self
    }

    pub fn without_report(mut self) -> Self {
        self.report.enabled = false;
        self
    }
}

impl Default for TrainConfig {
    fn default() -> Self {
        TrainConfig {
            epochs: 100_000,
            learning_rate: 0.1,
            report: ReportConfig::default(),
        }
    }
}

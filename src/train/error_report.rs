/// Diagnostic emitted by the trainer on reporting epochs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ErrorReport {
    /// 0-based epoch index.
    pub epoch: usize,
    /// mean(|target - output|) over every sample and output of this epoch's
    /// forward pass, taken before the epoch's update.
    pub mean_abs_error: f64,
}

/// Outcome of a completed training run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrainSummary {
    pub epochs_run: usize,
    /// Mean absolute error of the last epoch; `None` when no epoch ran.
    pub final_mean_abs_error: Option<f64>,
}

pub mod error_report;
pub mod train_config;
pub mod trainer;

pub use error_report::{ErrorReport, TrainSummary};
pub use train_config::{ReportConfig, TrainConfig};
pub use trainer::{train, train_with_observer};

pub mod math;
pub mod activation;
pub mod error;
pub mod layers;
pub mod network;
pub mod loss;
pub mod optim;
pub mod train;

// Convenience re-exports
pub use math::matrix::Matrix;
pub use activation::sigmoid::Sigmoid;
pub use error::{NetworkError, Result};
pub use layers::dense::Layer;
pub use network::network::Network;
pub use network::topology::Topology;
pub use loss::mae::MaeLoss;
pub use optim::sgd::Sgd;
pub use train::{train, train_with_observer, ErrorReport, ReportConfig, TrainConfig, TrainSummary};

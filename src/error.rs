/// Errors surfaced by network construction, evaluation and training.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum NetworkError {
    /// Invalid topology or training configuration.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Data whose shape disagrees with the network's declared widths.
    #[error("dimension mismatch in {context}: expected {expected}, got {actual}")]
    DimensionMismatch {
        context: &'static str,
        expected: usize,
        actual: usize,
    },
}

impl NetworkError {
    pub(crate) fn mismatch(context: &'static str, expected: usize, actual: usize) -> NetworkError {
        NetworkError::DimensionMismatch { context, expected, actual }
    }
}

pub type Result<T> = std::result::Result<T, NetworkError>;

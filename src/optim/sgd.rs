use crate::{error::Result, layers::dense::Layer, math::matrix::Matrix};

/// Plain gradient step: parameters move by `learning_rate * delta`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sgd {
    pub learning_rate: f64,
}

impl Sgd {
    pub fn new(learning_rate: f64) -> Sgd {
        Sgd { learning_rate }
    }

    /// Applies one update to a layer given its weight delta.
    pub fn step(&self, layer: &mut Layer, weights_delta: &Matrix) -> Result<()> {
        layer.apply_delta(weights_delta, self.learning_rate)
    }
}

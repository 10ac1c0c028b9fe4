use rand::Rng;

use crate::{activation::sigmoid::Sigmoid, error::Result, math::matrix::Matrix};

/// One fully connected transition between two consecutive layers.
///
/// `weights` is `(input_size, size)`; `biases` is a `1 x size` row that is
/// broadcast across every sample of a batch.
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    weights: Matrix,
    biases: Matrix,
}

impl Layer {
    /// Draws the weights first, then the biases, from `rng`.
    pub fn new<R: Rng + ?Sized>(input_size: usize, size: usize, rng: &mut R) -> Layer {
        let weights = Matrix::random(input_size, size, rng);
        let biases = Matrix::random(1, size, rng);

        Layer { weights, biases }
    }

    pub fn input_size(&self) -> usize {
        self.weights.rows()
    }

    pub fn size(&self) -> usize {
        self.weights.cols()
    }

    pub fn weights(&self) -> &Matrix {
        &self.weights
    }

    pub fn biases(&self) -> &Matrix {
        &self.biases
    }

    /// Pre-activation sum `z = a · W + b` for a batch of activations.
    pub fn weighted_sum(&self, input: &Matrix) -> Result<Matrix> {
        input.dot(&self.weights)?.add_row(&self.biases)
    }

    /// `sigmoid(a · W + b)`.
    pub fn feed_from(&self, input: &Matrix) -> Result<Matrix> {
        Ok(Sigmoid::apply(&self.weighted_sum(input)?))
    }

    /// Adds `lr * weights_delta` to the weights and `lr * column_mean(weights_delta)`
    /// to the biases.
    pub fn apply_delta(&mut self, weights_delta: &Matrix, lr: f64) -> Result<()> {
        let biases_delta = weights_delta.column_means();
        self.weights.add_scaled(weights_delta, lr)?;
        self.biases.add_scaled(&biases_delta, lr)
    }

    pub fn is_finite(&self) -> bool {
        self.weights.is_finite() && self.biases.is_finite()
    }
}

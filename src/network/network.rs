use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::{
    error::{NetworkError, Result},
    layers::dense::Layer,
    math::matrix::Matrix,
    network::topology::Topology,
};

/// A multilayer perceptron with sigmoid activations on every non-input layer.
///
/// The network exclusively owns its parameters. Inference borrows it
/// immutably; training (see `train::trainer`) borrows it mutably.
#[derive(Debug, Clone, PartialEq)]
pub struct Network {
    topology: Topology,
    layers: Vec<Layer>,
}

impl Network {
    /// Builds a network with parameters drawn from the thread-local RNG.
    pub fn new(layer_sizes: &[usize]) -> Result<Network> {
        Network::with_rng(layer_sizes, &mut rand::thread_rng())
    }

    /// Builds a reproducible network from a seed.
    pub fn from_seed(layer_sizes: &[usize], seed: u64) -> Result<Network> {
        Network::with_rng(layer_sizes, &mut StdRng::seed_from_u64(seed))
    }

    /// Builds a network drawing every weight and bias uniformly from [-1, 1).
    ///
    /// The topology is validated before `rng` is touched.
    pub fn with_rng<R: Rng + ?Sized>(layer_sizes: &[usize], rng: &mut R) -> Result<Network> {
        let topology = Topology::new(layer_sizes)?;
        let layers = topology
            .transitions()
            .map(|(input_size, size)| Layer::new(input_size, size, &mut *rng))
            .collect();

        Ok(Network { topology, layers })
    }

    pub fn topology(&self) -> &Topology {
        &self.topology
    }

    pub fn layer_sizes(&self) -> &[usize] {
        self.topology.sizes()
    }

    pub fn input_size(&self) -> usize {
        self.topology.input_size()
    }

    pub fn output_size(&self) -> usize {
        self.topology.output_size()
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub(crate) fn layers_mut(&mut self) -> &mut [Layer] {
        &mut self.layers
    }

    /// Weight matrices, one per layer transition.
    pub fn weights(&self) -> Vec<&Matrix> {
        self.layers.iter().map(Layer::weights).collect()
    }

    /// Bias rows, one per non-input layer.
    pub fn biases(&self) -> Vec<&Matrix> {
        self.layers.iter().map(Layer::biases).collect()
    }

    /// True when every weight and bias is finite.
    pub fn is_finite(&self) -> bool {
        self.layers.iter().all(Layer::is_finite)
    }

    /// Forward pass for a single input vector.
    pub fn forward(&self, input: &[f64]) -> Result<Vec<f64>> {
        self.check_input_width(input.len())?;
        let output = self.propagate(Matrix::row_vector(input.to_vec()))?;
        Ok(output.into_rows().swap_remove(0))
    }

    /// Forward pass for a batch; one sample per row.
    pub fn forward_batch(&self, inputs: &Matrix) -> Result<Matrix> {
        self.check_input_width(inputs.cols())?;
        self.propagate(inputs.clone())
    }

    fn propagate(&self, input: Matrix) -> Result<Matrix> {
        let mut current = input;
        for layer in &self.layers {
            current = layer.feed_from(&current)?;
        }
        Ok(current)
    }

    fn check_input_width(&self, width: usize) -> Result<()> {
        if width != self.input_size() {
            return Err(NetworkError::mismatch("input width", self.input_size(), width));
        }
        Ok(())
    }
}

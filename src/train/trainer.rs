use log::{debug, info};

use crate::{
    activation::sigmoid::Sigmoid,
    error::{NetworkError, Result},
    loss::mae::MaeLoss,
    math::matrix::Matrix,
    network::network::Network,
    optim::sgd::Sgd,
    train::error_report::{ErrorReport, TrainSummary},
    train::train_config::TrainConfig,
};

// ---------------------------------------------------------------------------
// Public entry points
// ---------------------------------------------------------------------------

/// Trains `network` in place on the full dataset for `config.epochs` epochs.
///
/// Equivalent to `train_with_observer` with an observer that ignores every
/// report.
pub fn train(
    network: &mut Network,
    inputs: &Matrix,
    targets: &Matrix,
    config: &TrainConfig,
) -> Result<TrainSummary> {
    train_with_observer(network, inputs, targets, config, |_| {})
}

/// Trains `network` in place and hands an `ErrorReport` to `observer` on every
/// epoch selected by `config.report`.
///
/// # Arguments
/// - `inputs`  : one sample per row, `layer_sizes[0]` columns
/// - `targets` : one target per row, `layer_sizes[L-1]` columns
///
/// # Errors
/// Fails with `DimensionMismatch` if the dataset is empty, the row counts
/// differ or a width does not match the network, and with `Configuration` if reporting is enabled with a
/// zero frequency. Both checks run before any epoch, so on error the network is
/// left untouched.
pub fn train_with_observer<F>(
    network: &mut Network,
    inputs: &Matrix,
    targets: &Matrix,
    config: &TrainConfig,
    mut observer: F,
) -> Result<TrainSummary>
where
    F: FnMut(ErrorReport),
{
    check_dataset(network, inputs, targets)?;
    config.report.validate()?;

    info!(
        "training {:?} on {} samples for {} epochs (learning rate {})",
        network.layer_sizes(),
        inputs.rows(),
        config.epochs,
        config.learning_rate
    );

    let optimizer = Sgd::new(config.learning_rate);
    let mut final_mean_abs_error = None;

    for epoch in 0..config.epochs {
        let mean_abs_error = run_one_epoch(network, inputs, targets, &optimizer)?;
        final_mean_abs_error = Some(mean_abs_error);

        if config.report.is_due(epoch) {
            debug!("epoch {epoch}: mean absolute error = {mean_abs_error:.6}");
            observer(ErrorReport { epoch, mean_abs_error });
        }
    }

    if let Some(err) = final_mean_abs_error {
        info!("training finished after {} epochs, mean absolute error = {err:.6}", config.epochs);
    }

    Ok(TrainSummary {
        epochs_run: config.epochs,
        final_mean_abs_error,
    })
}

// ---------------------------------------------------------------------------
// Private helpers
// ---------------------------------------------------------------------------

/// Pre-activation sums and activations of every layer for one batch.
///
/// `sums[0]` is the raw input and `activations[0]` is `sigmoid(input)`:
/// training squashes the input before the first product, inference does not.
struct ForwardTrace {
    sums: Vec<Matrix>,
    activations: Vec<Matrix>,
}

impl ForwardTrace {
    fn record(network: &Network, inputs: &Matrix) -> Result<ForwardTrace> {
        let mut sums = vec![inputs.clone()];
        let mut activations = vec![Sigmoid::apply(inputs)];

        for (i, layer) in network.layers().iter().enumerate() {
            let z = layer.weighted_sum(&activations[i])?;
            activations.push(Sigmoid::apply(&z));
            sums.push(z);
        }

        Ok(ForwardTrace { sums, activations })
    }

    fn output(&self) -> &Matrix {
        &self.activations[self.activations.len() - 1]
    }
}

/// One forward pass, backward pass and update over the whole dataset.
/// Returns the mean absolute output error of the forward pass.
fn run_one_epoch(
    network: &mut Network,
    inputs: &Matrix,
    targets: &Matrix,
    optimizer: &Sgd,
) -> Result<f64> {
    let trace = ForwardTrace::record(network, inputs)?;
    let errors = layer_errors(network, targets.sub(trace.output())?)?;
    let mean_abs_error = MaeLoss::of_residuals(&errors[errors.len() - 1]);

    // Every error term above was computed from this epoch's weights; only now
    // do the layers change.
    for (i, layer) in network.layers_mut().iter_mut().enumerate() {
        let grad = errors[i].hadamard(&Sigmoid::apply_derivative(&trace.sums[i + 1]))?;
        let weights_delta = trace.activations[i].transpose().dot(&grad)?;
        optimizer.step(layer, &weights_delta)?;
    }

    Ok(mean_abs_error)
}

/// Propagates the raw output residual back through the transposed weights.
///
/// Returns one error matrix per non-input layer: entry `i` belongs to layer
/// `i + 1`, so it lines up with `network.layers()[i]`.
fn layer_errors(network: &Network, output_error: Matrix) -> Result<Vec<Matrix>> {
    let layers = network.layers();
    let mut errors = Vec::with_capacity(layers.len());
    errors.push(output_error);

    for i in (1..layers.len()).rev() {
        let next = errors[errors.len() - 1].dot(&layers[i].weights().transpose())?;
        errors.push(next);
    }

    errors.reverse();
    Ok(errors)
}

fn check_dataset(network: &Network, inputs: &Matrix, targets: &Matrix) -> Result<()> {
    if inputs.rows() == 0 {
        return Err(NetworkError::mismatch("sample count", 1, 0));
    }
    if inputs.rows() != targets.rows() {
        return Err(NetworkError::mismatch("target row count", inputs.rows(), targets.rows()));
    }
    if inputs.cols() != network.input_size() {
        return Err(NetworkError::mismatch("input width", network.input_size(), inputs.cols()));
    }
    if targets.cols() != network.output_size() {
        return Err(NetworkError::mismatch("target width", network.output_size(), targets.cols()));
    }
    Ok(())
}

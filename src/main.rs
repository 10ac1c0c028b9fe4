// Demo binary: trains a small perceptron on the pattern "first column predicts
// the target" and prints what it learned.
//
//   RUST_LOG=debug cargo run -- [run.json]
//
// `run.json` is optional, e.g.
//   { "layer_sizes": [3, 4, 1], "seed": 7, "train": { "epochs": 20000 } }
use log::{error, info};
use serde::Deserialize;

use sigmoid_perceptron::{train_with_observer, MaeLoss, Matrix, Network, Topology, TrainConfig};

const DEFAULT_LAYER_SIZES: [usize; 3] = [3, 4, 1];

/// A topology in the file is validated while it is parsed.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RunConfig {
    layer_sizes: Option<Topology>,
    seed: Option<u64>,
    train: TrainConfig,
}

impl RunConfig {
    fn layer_sizes(&self) -> &[usize] {
        self.layer_sizes
            .as_ref()
            .map_or(&DEFAULT_LAYER_SIZES[..], Topology::sizes)
    }
}

fn load_run_config(path: &str) -> std::io::Result<RunConfig> {
    let file = std::fs::File::open(path)?;
    let reader = std::io::BufReader::new(file);
    serde_json::from_reader(reader)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run() {
        error!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = match std::env::args().nth(1) {
        Some(path) => {
            info!("loading run configuration from {path}");
            load_run_config(&path)?
        }
        None => RunConfig::default(),
    };

    let sizes = config.layer_sizes();
    let mut network = match config.seed {
        Some(seed) => Network::from_seed(sizes, seed)?,
        None => Network::new(sizes)?,
    };

    let inputs = Matrix::from_rows(vec![
        vec![0.0, 0.0, 1.0],
        vec![0.0, 1.0, 1.0],
        vec![1.0, 0.0, 0.0],
        vec![1.0, 1.0, 0.0],
        vec![1.0, 1.0, 1.0],
    ])?;
    let targets = Matrix::from_rows(vec![vec![0.0], vec![0.0], vec![1.0], vec![1.0], vec![1.0]])?;

    train_with_observer(&mut network, &inputs, &targets, &config.train, |report| {
        info!("Error: {:.6} (epoch {})", report.mean_abs_error, report.epoch);
    })?;

    let predictions = network.forward_batch(&inputs)?;
    for (input, (output, target)) in inputs
        .data()
        .iter()
        .zip(predictions.data().iter().zip(targets.data()))
    {
        println!(
            "Input: {:?} -> Output: {:.4} (mae {:.4})",
            input,
            output[0],
            MaeLoss::loss(output, target)
        );
    }

    let query = [1.0, 0.0, 1.0];
    println!("Input: {:?} -> Output: {:.4}", query, network.forward(&query)?[0]);

    Ok(())
}

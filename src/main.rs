use std::{env, fs};

use anyhow::{Context, Result};
use log::{debug, info};
use rand::{Rng, SeedableRng, rngs::StdRng};
use rand_distr::{Distribution, Normal};
use sgd_net::{Example, Network, TrainConfig, Trainer};

const DEFAULT_SEED: u64 = 42;
const TOPOLOGY: [usize; 3] = [2, 8, 2];

/// Noisy points around the four corners of a square, opposite corners share a class.
fn xor_blobs<R: Rng>(rng: &mut R, n: usize) -> Result<Vec<Example>> {
    const CENTERS: [(f32, f32); 4] = [(-1., -1.), (1., 1.), (-1., 1.), (1., -1.)];
    let noise = Normal::<f32>::new(0., 0.35)?;

    (0..n)
        .map(|i| -> Result<Example> {
            let corner = i % CENTERS.len();
            let (cx, cy) = CENTERS[corner];
            let values = vec![cx + noise.sample(&mut *rng), cy + noise.sample(&mut *rng)];
            Ok(Example::new(values, corner / 2, 2)?)
        })
        .collect()
}

fn load_config() -> Result<TrainConfig> {
    let Some(path) = env::args().nth(1) else {
        return Ok(TrainConfig::new(30, 10, 3.)?);
    };

    let raw = fs::read_to_string(&path).with_context(|| format!("failed to read {path}"))?;
    let config: TrainConfig =
        serde_json::from_str(&raw).with_context(|| format!("invalid config in {path}"))?;
    config.validate()?;

    Ok(config)
}

fn main() -> Result<()> {
    env_logger::init();

    let config = load_config()?;
    let seed = match env::var("SEED") {
        Ok(seed) => seed.parse().context("SEED must be an unsigned integer")?,
        Err(_) => DEFAULT_SEED,
    };
    info!(seed = seed; "training with {config:?}");

    let mut rng = StdRng::seed_from_u64(seed);
    let train = xor_blobs(&mut rng, 400)?;
    let test = xor_blobs(&mut rng, 100)?;

    let mut net = Network::with_rng(&TOPOLOGY, &mut rng)?;
    info!("untrained accuracy: {}", net.evaluate(&test)?);

    let mut trainer = Trainer::new(config, rng)?;
    let stats = trainer.train(&mut net, &train, Some(&test))?;
    debug!("{net}");

    if let Some(accuracy) = stats.last().and_then(|s| s.accuracy()) {
        println!("accuracy after {} epochs: {accuracy}", stats.len());
    }

    Ok(())
}

//! Times selection, insertion, merge and quick sort on growing random inputs.

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{ensure, Context};
use clap::{Parser, ValueEnum};
use rand::prelude::*;
use serde::Serialize;

use classic_sorts::{stable, unstable};

const DEFAULT_SIZES: [usize; 6] = [10_000, 30_000, 50_000, 100_000, 300_000, 500_000];

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "snake_case")]
enum Algorithm {
    Selection,
    Insertion,
    Merge,
    Quick,
}

impl Algorithm {
    const ALL: [Algorithm; 4] = [
        Algorithm::Selection,
        Algorithm::Insertion,
        Algorithm::Merge,
        Algorithm::Quick,
    ];

    fn label(self) -> &'static str {
        match self {
            Algorithm::Selection => "selection sort",
            Algorithm::Insertion => "insertion sort",
            Algorithm::Merge => "merge sort",
            Algorithm::Quick => "quick sort",
        }
    }

    fn sort(self, v: &mut [i64]) {
        match self {
            Algorithm::Selection => unstable::rust_selection_sort::sort(v),
            Algorithm::Insertion => stable::rust_insertion_sort::sort(v),
            Algorithm::Merge => {
                stable::rust_merge_sort::sort(v);
            }
            Algorithm::Quick => unstable::rust_quick_sort::sort(v),
        }
    }
}

#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Input sizes to measure, comma separated.
    #[arg(long, value_delimiter = ',', default_values_t = DEFAULT_SIZES)]
    sizes: Vec<usize>,

    /// Algorithms to measure, comma separated.
    #[arg(long, value_enum, value_delimiter = ',', default_values_t = Algorithm::ALL)]
    algorithms: Vec<Algorithm>,

    /// Seed for the input generator, random if not given.
    #[arg(long)]
    seed: Option<u64>,

    /// Also write all measurements as JSON to this file.
    #[arg(long)]
    json: Option<PathBuf>,

    /// Pin the process to this core before measuring.
    #[arg(long)]
    pin_core: Option<usize>,
}

#[derive(Serialize)]
struct Measurement {
    algorithm: Algorithm,
    size: usize,
    seconds: f64,
}

#[derive(Serialize)]
struct Report {
    seed: u64,
    measurements: Vec<Measurement>,
}

/// `len` values drawn uniformly from `0..=len * 10`.
fn random_input(rng: &mut StdRng, len: usize) -> Vec<i64> {
    let max = len as i64 * 10;
    (0..len).map(|_| rng.gen_range(0..=max)).collect()
}

fn measure(algorithm: Algorithm, input: &[i64]) -> anyhow::Result<Duration> {
    let mut v = input.to_vec();

    let start = Instant::now();
    algorithm.sort(&mut v);
    let elapsed = start.elapsed();

    ensure!(
        v.windows(2).all(|w| w[0] <= w[1]),
        "{} produced unsorted output for len {}",
        algorithm.label(),
        input.len()
    );

    Ok(elapsed)
}

fn pin_to_core(core: usize) -> anyhow::Result<()> {
    let core_ids = core_affinity::get_core_ids().context("failed to query core ids")?;
    let core_id = core_ids
        .into_iter()
        .find(|core_id| core_id.id == core)
        .with_context(|| format!("core {core} does not exist"))?;

    ensure!(
        core_affinity::set_for_current(core_id),
        "failed to pin to core {core}"
    );
    log::debug!("pinned to core {core}");

    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    if let Some(core) = args.pin_core {
        pin_to_core(core)?;
    }

    let seed = args.seed.unwrap_or_else(|| thread_rng().gen());
    log::info!("seed: {seed}");
    let mut rng = StdRng::seed_from_u64(seed);

    let mut measurements = Vec::new();

    for &size in &args.sizes {
        println!("--- size: {size} ---");

        let input = random_input(&mut rng, size);

        for &algorithm in &args.algorithms {
            let elapsed = measure(algorithm, &input)?;
            println!("'{}' took {:.4} s", algorithm.label(), elapsed.as_secs_f64());

            measurements.push(Measurement {
                algorithm,
                size,
                seconds: elapsed.as_secs_f64(),
            });
        }

        println!();
    }

    if let Some(path) = args.json {
        let file = File::create(&path)
            .with_context(|| format!("failed to create {}", path.display()))?;
        let report = Report { seed, measurements };
        serde_json::to_writer_pretty(BufWriter::new(file), &report)
            .with_context(|| format!("failed to write {}", path.display()))?;
        log::info!("wrote {}", path.display());
    }

    Ok(())
}

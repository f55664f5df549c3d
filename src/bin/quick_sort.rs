use std::io;

use anyhow::Context;
use clap::Parser;

use classic_sorts::program;

/// Quick sorts a fixed sample array and prints it before and after.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Sort these values instead of the built-in sample.
    #[arg(allow_negative_numbers = true)]
    values: Vec<i64>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut values = if args.values.is_empty() {
        program::SAMPLE.to_vec()
    } else {
        args.values
    };

    program::run_quick_sort(io::stdout().lock(), &mut values).context("quick sort failed")?;

    Ok(())
}

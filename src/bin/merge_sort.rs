use std::io;

use anyhow::Context;
use clap::Parser;

use classic_sorts::program::{self, InputLimits};

/// Reads a count `n` and `n` integers from stdin, prints them sorted and the merge work.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Largest element count accepted on stdin.
    #[arg(long, default_value_t = program::DEFAULT_MAX_LEN)]
    max_len: usize,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let limits = InputLimits {
        max_len: args.max_len,
    };
    log::debug!("{limits:?}");

    program::run_merge_sort(io::stdin().lock(), io::stdout().lock(), limits)
        .context("merge sort failed")?;

    Ok(())
}

use std::env;
use std::fs::File;
use std::io;

use anyhow::{Context, Result};
use rewards_engine::process_transactions;

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    anyhow::ensure!(
        (2..=4).contains(&args.len()),
        "Usage: {} <transactions.json> [start-date] [end-date]",
        args.first().map(String::as_str).unwrap_or("rewards-engine")
    );

    let filename = &args[1];
    let start_date = args.get(2).map(String::as_str);
    let end_date = args.get(3).map(String::as_str);

    let file = File::open(filename)
        .with_context(|| format!("Failed to open input file '{}'", filename))?;

    process_transactions(file, io::stdout(), start_date, end_date)
        .context("Failed to compute rewards report")?;

    Ok(())
}

//! Run projections for every scenario in a CSV file
//!
//! Outputs one summary row per scenario

use anyhow::Context;
use clap::Parser;
use compound_interest::{
    inputs::{load_inputs, DEFAULT_SCENARIO_PATH},
    projection::{project_batch, summarize, write_summary_csv},
};
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Debug, Parser)]
#[command(about = "Project every scenario in a CSV file")]
struct Args {
    /// Scenario CSV with deposit,contribution,years,rate[,contributionFrequency,inflation]
    #[arg(default_value = DEFAULT_SCENARIO_PATH)]
    scenarios: PathBuf,

    /// Summary CSV to write
    #[arg(long, short, default_value = "batch_projection_output.csv")]
    output: PathBuf,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();
    let start = Instant::now();
    println!("Loading scenarios from {}...", args.scenarios.display());

    let inputs = load_inputs(&args.scenarios)
        .with_context(|| format!("Failed to load scenarios from {}", args.scenarios.display()))?;
    println!("Loaded {} scenarios in {:?}", inputs.len(), start.elapsed());

    println!("Running projections...");
    let proj_start = Instant::now();
    let results = project_batch(&inputs);
    println!("Projections complete in {:?}", proj_start.elapsed());

    let summaries = summarize(&inputs, &results);
    let file = File::create(&args.output)
        .with_context(|| format!("Failed to create {}", args.output.display()))?;
    write_summary_csv(&summaries, BufWriter::new(file))?;
    println!("Output written to {}", args.output.display());

    if let Some(best) = summaries
        .iter()
        .max_by(|a, b| a.total.total_cmp(&b.total))
    {
        println!("\nBatch Summary:");
        println!("  Scenarios: {}", summaries.len());
        println!(
            "  Highest total: scenario {} at {:.0} ({:.0} contributed, {:.0} interest)",
            best.scenario, best.total, best.total_contributions, best.total_interest
        );
    }

    println!("\nTotal time: {:?}", start.elapsed());
    Ok(())
}

//! Project a single scenario and print the summary and yearly table
//!
//! Inputs come from flags or from a JSON scenario file (`--input`).

use anyhow::Context;
use clap::{Parser, ValueEnum};
use compound_interest::{
    inputs::load_input,
    project,
    projection::{
        write_yearly_csv, DEFAULT_ANNUAL_RATE_PERCENT, DEFAULT_CONTRIBUTION, DEFAULT_DEPOSIT,
        DEFAULT_YEARS,
    },
    ContributionFrequency, ProjectionInput, ProjectionResult,
};
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Table,
    Csv,
    Json,
}

#[derive(Debug, Parser)]
#[command(about = "Project compound interest growth year by year")]
struct Args {
    /// Initial deposit
    #[arg(long, default_value_t = DEFAULT_DEPOSIT)]
    deposit: f64,

    /// Contribution paid each period
    #[arg(long, default_value_t = DEFAULT_CONTRIBUTION)]
    contribution: f64,

    /// Number of years to project
    #[arg(long, default_value_t = DEFAULT_YEARS)]
    years: u32,

    /// Annual interest rate in percent
    #[arg(long, default_value_t = DEFAULT_ANNUAL_RATE_PERCENT)]
    rate: f64,

    /// How often contributions are made
    #[arg(long, value_enum, default_value_t = ContributionFrequency::Monthly)]
    frequency: ContributionFrequency,

    /// Annual inflation rate in percent, applied to contributions
    #[arg(long, default_value_t = 0.0)]
    inflation: f64,

    /// JSON scenario file; overrides the numeric flags
    #[arg(long)]
    input: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    /// Write output to a file instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,
}

impl Args {
    fn projection_input(&self) -> anyhow::Result<ProjectionInput> {
        if let Some(path) = &self.input {
            return load_input(path)
                .with_context(|| format!("Failed to load scenario {}", path.display()));
        }

        let input = ProjectionInput::new(self.deposit, self.contribution, self.years, self.rate)
            .with_frequency(self.frequency)
            .with_inflation(self.inflation);
        input
            .validated()
            .map_err(|errors| anyhow::anyhow!("Invalid input:\n{}", errors))
    }
}

fn write_table<W: Write>(
    input: &ProjectionInput,
    result: &ProjectionResult,
    out: &mut W,
) -> io::Result<()> {
    writeln!(out, "Compound Interest Projection")?;
    writeln!(
        out,
        "  Deposit {:.2}, contribution {:.2} {}, {} years at {}%, inflation {}%",
        input.deposit,
        input.periodic_contribution,
        input.contribution_frequency,
        input.years,
        input.annual_rate_percent,
        input.inflation_rate_percent,
    )?;
    writeln!(out)?;
    writeln!(out, "  Total Value:           {:.0}", result.total)?;
    writeln!(out, "  Total Contributions:   {:.0}", result.total_contributions)?;
    writeln!(out, "  Total Interest Earned: {:.0}", result.total_interest)?;
    writeln!(out)?;
    writeln!(out, "{:<6} {:>16} {:>16} {:>16}", "Year", "Balance", "Contributions", "Interest")?;
    for row in &result.yearly_data {
        writeln!(
            out,
            "{:<6} {:>16.0} {:>16.0} {:>16.0}",
            row.year, row.balance, row.contributions, row.interest
        )?;
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();
    let input = args.projection_input()?;
    let result = project(&input);

    let mut out: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(
            File::create(path).with_context(|| format!("Failed to create {}", path.display()))?,
        ),
        None => Box::new(io::stdout().lock()),
    };

    match args.format {
        OutputFormat::Table => write_table(&input, &result, &mut out)?,
        OutputFormat::Csv => write_yearly_csv(&result, &mut out)?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, &result)?;
            writeln!(out)?;
        }
    }
    out.flush()?;

    if let Some(path) = &args.output {
        log::info!("Output written to {}", path.display());
    }
    Ok(())
}

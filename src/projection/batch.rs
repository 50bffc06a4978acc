//! Batch projection across many scenarios

use rayon::prelude::*;
use serde::Serialize;
use std::io::Write;

use super::engine::project;
use super::results::ProjectionResult;
use crate::inputs::{ContributionFrequency, ProjectionInput};

/// Project every scenario in parallel, results in input order
pub fn project_batch(inputs: &[ProjectionInput]) -> Vec<ProjectionResult> {
    log::info!("Projecting {} scenarios", inputs.len());
    inputs.par_iter().map(project).collect()
}

/// One row of the batch summary: inputs alongside final totals
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioSummary {
    /// 1-based scenario number
    pub scenario: usize,
    pub deposit: f64,
    pub contribution: f64,
    pub frequency: ContributionFrequency,
    pub years: u32,
    pub rate: f64,
    pub inflation: f64,
    pub total: f64,
    pub total_contributions: f64,
    pub total_interest: f64,
}

impl ScenarioSummary {
    pub fn new(scenario: usize, input: &ProjectionInput, result: &ProjectionResult) -> Self {
        Self {
            scenario,
            deposit: input.deposit,
            contribution: input.periodic_contribution,
            frequency: input.contribution_frequency,
            years: input.years,
            rate: input.annual_rate_percent,
            inflation: input.inflation_rate_percent,
            total: result.total,
            total_contributions: result.total_contributions,
            total_interest: result.total_interest,
        }
    }
}

/// Pair inputs with their results, numbering scenarios from 1
///
/// `results` must be the output of `project_batch(inputs)`, one per input.
pub fn summarize(inputs: &[ProjectionInput], results: &[ProjectionResult]) -> Vec<ScenarioSummary> {
    debug_assert_eq!(inputs.len(), results.len(), "one result per scenario");
    inputs
        .iter()
        .zip(results)
        .enumerate()
        .map(|(idx, (input, result))| ScenarioSummary::new(idx + 1, input, result))
        .collect()
}

/// Write batch summaries as CSV with a header row
pub fn write_summary_csv<W: Write>(summaries: &[ScenarioSummary], writer: W) -> Result<(), csv::Error> {
    let mut wtr = csv::Writer::from_writer(writer);
    for row in summaries {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

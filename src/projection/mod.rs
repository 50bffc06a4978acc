//! Projection engine for single and batch compound interest projections

mod engine;
mod results;
mod batch;

pub use engine::{project, round_to_unit};
pub use results::{write_yearly_csv, ProjectionResult, YearlyRecord};
pub use batch::{project_batch, summarize, write_summary_csv, ScenarioSummary};

// ============================================================================
// Default Scenario
// ============================================================================
// Used by the `project` binary when no arguments are given.

/// Default initial deposit
pub const DEFAULT_DEPOSIT: f64 = 10_000.0;

/// Default monthly contribution
pub const DEFAULT_CONTRIBUTION: f64 = 500.0;

/// Default projection length in years
pub const DEFAULT_YEARS: u32 = 20;

/// Default annual interest rate (7%)
pub const DEFAULT_ANNUAL_RATE_PERCENT: f64 = 7.0;

//! Compound Interest - projection engine for savings growth with periodic contributions
//!
//! This library provides:
//! - Typed projection inputs with contribution frequency and inflation
//! - Input validation matching the calculator form rules
//! - Year-by-year balance projections and summary totals
//! - Parallel batch projection and CSV export of result tables

pub mod error;
pub mod inputs;
pub mod projection;

// Re-export commonly used types
pub use error::{CalculatorError, Result};
pub use inputs::{ContributionFrequency, ProjectionInput, ValidationError, ValidationErrors};
pub use projection::{project, project_batch, ProjectionResult, YearlyRecord};

//! Projection inputs, validation and scenario loading

mod data;
pub mod validation;
pub mod loader;

pub use data::{ContributionFrequency, ProjectionInput};
pub use validation::{validate, Field, ValidationError, ValidationErrors, MAX_YEARS};
pub use loader::{load_input, load_inputs, load_inputs_from_reader, DEFAULT_SCENARIO_PATH};

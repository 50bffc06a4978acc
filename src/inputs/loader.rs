//! Scenario loading from JSON and CSV files

use std::fs::File;
use std::io::Read;
use std::path::Path;

use super::ProjectionInput;
use crate::error::{CalculatorError, Result};

/// Scenario file used by the batch runner when no path is given
pub const DEFAULT_SCENARIO_PATH: &str = "data/scenarios.csv";

fn open(path: &Path) -> Result<File> {
    File::open(path).map_err(|source| CalculatorError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Load a single validated scenario from a JSON file
pub fn load_input(path: impl AsRef<Path>) -> Result<ProjectionInput> {
    let path = path.as_ref();
    let input: ProjectionInput = serde_json::from_reader(open(path)?)?;
    let input = input.validated()?;
    log::debug!("Loaded scenario from {}", path.display());
    Ok(input)
}

/// Load validated scenarios from a CSV file
pub fn load_inputs(path: impl AsRef<Path>) -> Result<Vec<ProjectionInput>> {
    let path = path.as_ref();
    let inputs = load_inputs_from_reader(open(path)?)?;
    log::info!("Loaded {} scenarios from {}", inputs.len(), path.display());
    Ok(inputs)
}

/// Load validated scenarios from any CSV source
///
/// Expects a header row using the serialized field names:
/// `deposit,contribution,years,rate,contributionFrequency,inflation`.
/// The last two columns may be omitted.
pub fn load_inputs_from_reader<R: Read>(reader: R) -> Result<Vec<ProjectionInput>> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut inputs = Vec::new();
    for (idx, record) in rdr.deserialize::<ProjectionInput>().enumerate() {
        let input = record?;
        let row = idx + 1;
        match input.validated() {
            Ok(input) => inputs.push(input),
            Err(errors) => {
                log::warn!("Rejected scenario {}: {} rule(s) failed", row, errors.len());
                return Err(CalculatorError::InvalidScenario { row, errors });
            }
        }
    }

    Ok(inputs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inputs::{ContributionFrequency, Field};

    #[test]
    fn test_load_from_reader() {
        let data = "\
deposit,contribution,years,rate,contributionFrequency,inflation
10000,500,20,7,monthly,0
2500, 300, 10, 5.5, quarterly, 2
0,1200,30,6,annually,0
";
        let inputs = load_inputs_from_reader(data.as_bytes()).expect("Failed to load");

        assert_eq!(inputs.len(), 3);
        assert_eq!(inputs[0], ProjectionInput::new(10_000.0, 500.0, 20, 7.0));
        assert_eq!(inputs[1].contribution_frequency, ContributionFrequency::Quarterly);
        assert_eq!(inputs[1].inflation_rate_percent, 2.0);
        assert_eq!(inputs[2].contribution_frequency, ContributionFrequency::Annually);
    }

    #[test]
    fn test_optional_columns_default() {
        let data = "deposit,contribution,years,rate\n1000,100,5,4\n";
        let inputs = load_inputs_from_reader(data.as_bytes()).expect("Failed to load");

        assert_eq!(inputs, vec![ProjectionInput::new(1000.0, 100.0, 5, 4.0)]);
    }

    #[test]
    fn test_invalid_row_reports_row_number() {
        let data = "\
deposit,contribution,years,rate
1000,100,5,4
1000,100,0,4
";
        match load_inputs_from_reader(data.as_bytes()) {
            Err(CalculatorError::InvalidScenario { row, errors }) => {
                assert_eq!(row, 2);
                assert!(errors.has_field(Field::Years));
            }
            other => panic!("expected invalid scenario, got {:?}", other),
        }
    }

    #[test]
    fn test_unparseable_row_is_csv_error() {
        let data = "deposit,contribution,years,rate\n1000,abc,5,4\n";
        let result = load_inputs_from_reader(data.as_bytes());
        assert!(matches!(result, Err(CalculatorError::Csv(_))));
    }

    #[test]
    fn test_missing_file() {
        let result = load_inputs("does/not/exist.csv");
        assert!(matches!(result, Err(CalculatorError::Io { .. })));
    }
}

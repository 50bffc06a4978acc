//! Input validation
//!
//! Applies the calculator form rules to a `ProjectionInput` before it is
//! projected. The projection engine itself never validates; callers are
//! expected to run these checks first.

use std::fmt;

use super::ProjectionInput;

/// Longest projection accepted, in years
pub const MAX_YEARS: u32 = 1_000;

/// Input fields, named by their form labels in error messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Deposit,
    Contribution,
    Years,
    Rate,
    Inflation,
}

impl Field {
    pub fn label(self) -> &'static str {
        match self {
            Field::Deposit => "Initial Deposit",
            Field::Contribution => "Contribution",
            Field::Years => "Years",
            Field::Rate => "Interest Rate",
            Field::Inflation => "Inflation Rate",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("{field} must be a number")]
    NotFinite { field: Field },

    #[error("{field} must not be negative (got {value})")]
    Negative { field: Field, value: f64 },

    #[error("{field} must be positive (got {value})")]
    NotPositive { field: Field, value: f64 },

    #[error("{field} is out of range (got {value}): {reason}")]
    OutOfRange { field: Field, value: f64, reason: &'static str },
}

impl ValidationError {
    pub fn field(&self) -> Field {
        match self {
            ValidationError::NotFinite { field }
            | ValidationError::Negative { field, .. }
            | ValidationError::NotPositive { field, .. }
            | ValidationError::OutOfRange { field, .. } => *field,
        }
    }
}

/// Every rule violated by one input, in field order
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{}", display_errors(.0))]
pub struct ValidationErrors(pub Vec<ValidationError>);

fn display_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| format!("  - {}", e))
        .collect::<Vec<_>>()
        .join("\n")
}

impl ValidationErrors {
    pub fn iter(&self) -> impl Iterator<Item = &ValidationError> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn has_field(&self, field: Field) -> bool {
        self.0.iter().any(|e| e.field() == field)
    }
}

/// Validate all fields, collecting every violation
pub fn validate(input: &ProjectionInput) -> Result<(), ValidationErrors> {
    let mut errors = Vec::new();

    check_non_negative(Field::Deposit, input.deposit, &mut errors);
    check_non_negative(Field::Contribution, input.periodic_contribution, &mut errors);

    if input.years == 0 {
        errors.push(ValidationError::NotPositive { field: Field::Years, value: 0.0 });
    } else if input.years > MAX_YEARS {
        errors.push(ValidationError::OutOfRange {
            field: Field::Years,
            value: input.years as f64,
            reason: "must be at most 1000",
        });
    }

    if !input.annual_rate_percent.is_finite() {
        errors.push(ValidationError::NotFinite { field: Field::Rate });
    } else if input.annual_rate_percent <= 0.0 {
        errors.push(ValidationError::NotPositive {
            field: Field::Rate,
            value: input.annual_rate_percent,
        });
    }

    let inflation = input.inflation_rate_percent;
    if !inflation.is_finite() {
        errors.push(ValidationError::NotFinite { field: Field::Inflation });
    } else if inflation < 0.0 {
        errors.push(ValidationError::Negative { field: Field::Inflation, value: inflation });
    } else if inflation >= 100.0 {
        errors.push(ValidationError::OutOfRange {
            field: Field::Inflation,
            value: inflation,
            reason: "must be below 100%",
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ValidationErrors(errors))
    }
}

fn check_non_negative(field: Field, value: f64, errors: &mut Vec<ValidationError>) {
    if !value.is_finite() {
        errors.push(ValidationError::NotFinite { field });
    } else if value < 0.0 {
        errors.push(ValidationError::Negative { field, value });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_input() -> ProjectionInput {
        ProjectionInput::new(10_000.0, 500.0, 20, 7.0)
    }

    #[test]
    fn test_valid_input_passes() {
        assert!(validate(&valid_input()).is_ok());
        assert!(valid_input().with_inflation(2.5).validated().is_ok());
    }

    #[test]
    fn test_zero_deposit_and_contribution_allowed() {
        let input = ProjectionInput::new(0.0, 0.0, 5, 5.0);
        assert!(validate(&input).is_ok());
    }

    #[test]
    fn test_zero_years_rejected() {
        let input = ProjectionInput { years: 0, ..valid_input() };
        let errors = validate(&input).unwrap_err();

        assert_eq!(errors.len(), 1);
        assert!(errors.has_field(Field::Years));
    }

    #[test]
    fn test_years_upper_bound() {
        let at_limit = ProjectionInput { years: MAX_YEARS, ..valid_input() };
        assert!(validate(&at_limit).is_ok());

        for years in [MAX_YEARS + 1, u32::MAX] {
            let input = ProjectionInput { years, ..valid_input() };
            let errors = input.validated().unwrap_err();
            assert_eq!(
                errors.0,
                vec![ValidationError::OutOfRange {
                    field: Field::Years,
                    value: years as f64,
                    reason: "must be at most 1000",
                }]
            );
        }
    }

    #[test]
    fn test_rate_must_be_positive() {
        for rate in [0.0, -3.0] {
            let input = ProjectionInput { annual_rate_percent: rate, ..valid_input() };
            let errors = validate(&input).unwrap_err();
            assert_eq!(
                errors.0,
                vec![ValidationError::NotPositive { field: Field::Rate, value: rate }]
            );
        }
    }

    #[test]
    fn test_non_finite_rejected() {
        let input = ProjectionInput { deposit: f64::NAN, ..valid_input() };
        let errors = validate(&input).unwrap_err();
        assert_eq!(errors.0, vec![ValidationError::NotFinite { field: Field::Deposit }]);
    }

    #[test]
    fn test_inflation_range() {
        assert!(validate(&valid_input().with_inflation(-1.0)).is_err());
        assert!(validate(&valid_input().with_inflation(100.0)).is_err());
        assert!(validate(&valid_input().with_inflation(99.0)).is_ok());
    }

    #[test]
    fn test_collects_all_violations() {
        let input = ProjectionInput {
            deposit: -1.0,
            periodic_contribution: -50.0,
            years: 0,
            annual_rate_percent: 0.0,
            ..valid_input()
        };
        let errors = validate(&input).unwrap_err();

        assert_eq!(errors.len(), 4);
        assert!(errors.has_field(Field::Deposit));
        assert!(errors.has_field(Field::Contribution));
        assert!(errors.has_field(Field::Years));
        assert!(errors.has_field(Field::Rate));
        assert!(!errors.has_field(Field::Inflation));

        let message = errors.to_string();
        assert!(message.starts_with("  - Initial Deposit must not be negative"));
        assert_eq!(message.lines().count(), 4);
        assert!(message.contains("Interest Rate must be positive"));
    }
}

use super::results::{ProjectionResult, YearlyRecord};
use crate::inputs::{ProjectionInput, MAX_YEARS};

/// Round to the nearest whole unit, halves toward positive infinity
pub fn round_to_unit(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

/// Project a balance year by year
///
/// Each year the (inflation-deflated) contributions are added first and the
/// annual rate is then applied to the whole balance, so contributions earn
/// interest in the year they are made. Running values stay unrounded;
/// only the emitted records and final totals are rounded.
///
/// The input is not validated here; see `inputs::validate`.
pub fn project(input: &ProjectionInput) -> ProjectionResult {
    let growth = input.growth_factor();

    let mut balance = input.deposit;
    let mut contributions = input.deposit;
    // Unvalidated inputs can carry any year count; capacity stays bounded
    let mut yearly_data = Vec::with_capacity(input.years.min(MAX_YEARS) as usize);

    for year_index in 0..input.years {
        let year_contribution = input.year_contribution(year_index);
        contributions += year_contribution;
        balance = (balance + year_contribution) * growth;

        yearly_data.push(YearlyRecord {
            year: year_index + 1,
            balance: round_to_unit(balance),
            contributions: round_to_unit(contributions),
            interest: round_to_unit(balance - contributions),
        });
    }

    log::debug!(
        "Projected {} years at {}% ({}): balance {:.2}, contributions {:.2}",
        input.years,
        input.annual_rate_percent,
        input.contribution_frequency,
        balance,
        contributions
    );

    ProjectionResult {
        total: round_to_unit(balance),
        total_contributions: round_to_unit(contributions),
        total_interest: round_to_unit(balance - contributions),
        yearly_data,
    }
}

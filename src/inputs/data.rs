use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::validation::{validate, ValidationErrors};

/// How often the periodic contribution is paid within a year
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ContributionFrequency {
    #[default]
    Monthly,
    Quarterly,
    Annually,
}

impl ContributionFrequency {
    /// Number of contributions made per simulated year
    pub fn periods_per_year(self) -> u32 {
        match self {
            ContributionFrequency::Monthly => 12,
            ContributionFrequency::Quarterly => 4,
            ContributionFrequency::Annually => 1,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ContributionFrequency::Monthly => "monthly",
            ContributionFrequency::Quarterly => "quarterly",
            ContributionFrequency::Annually => "annually",
        }
    }
}

impl fmt::Display for ContributionFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContributionFrequency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "monthly" => Ok(ContributionFrequency::Monthly),
            "quarterly" => Ok(ContributionFrequency::Quarterly),
            "annually" | "annual" | "yearly" => Ok(ContributionFrequency::Annually),
            other => Err(format!("unknown contribution frequency: {}", other)),
        }
    }
}

/// Parameters for a single projection
///
/// Field names on the wire follow the calculator form values, so a JSON
/// scenario looks like `{"deposit": 10000, "contribution": 500, "years": 20, "rate": 7}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionInput {
    /// Initial deposit, also counted as the first contribution
    pub deposit: f64,

    /// Amount paid each contribution period
    #[serde(rename = "contribution")]
    pub periodic_contribution: f64,

    /// Number of simulated years
    pub years: u32,

    /// Annual interest rate in percent (7.0 = 7%)
    #[serde(rename = "rate")]
    pub annual_rate_percent: f64,

    /// Default: monthly
    #[serde(rename = "contributionFrequency", default)]
    pub contribution_frequency: ContributionFrequency,

    /// Annual inflation rate in percent, applied to contributions only
    /// Default: 0
    #[serde(rename = "inflation", default = "default_inflation")]
    pub inflation_rate_percent: f64,
}

fn default_inflation() -> f64 { 0.0 }

impl ProjectionInput {
    /// Monthly contributions with no inflation adjustment
    pub fn new(deposit: f64, periodic_contribution: f64, years: u32, annual_rate_percent: f64) -> Self {
        Self {
            deposit,
            periodic_contribution,
            years,
            annual_rate_percent,
            contribution_frequency: ContributionFrequency::default(),
            inflation_rate_percent: default_inflation(),
        }
    }

    pub fn with_frequency(mut self, frequency: ContributionFrequency) -> Self {
        self.contribution_frequency = frequency;
        self
    }

    pub fn with_inflation(mut self, inflation_rate_percent: f64) -> Self {
        self.inflation_rate_percent = inflation_rate_percent;
        self
    }

    /// Run the input through validation, handing it back when every rule passes
    pub fn validated(self) -> Result<Self, ValidationErrors> {
        validate(&self)?;
        Ok(self)
    }

    /// Contribution paid per period in year `year_index` (0-based),
    /// deflated by the inflation rate
    pub fn effective_contribution(&self, year_index: u32) -> f64 {
        let deflator = 1.0 - self.inflation_rate_percent / 100.0;
        let exponent = i32::try_from(year_index).unwrap_or(i32::MAX);
        self.periodic_contribution * deflator.powi(exponent)
    }

    /// Total contributed during year `year_index` (0-based)
    pub fn year_contribution(&self, year_index: u32) -> f64 {
        self.effective_contribution(year_index) * self.contribution_frequency.periods_per_year() as f64
    }

    /// Growth factor applied once per simulated year
    pub fn growth_factor(&self) -> f64 {
        1.0 + self.annual_rate_percent / 100.0
    }
}

use serde::{Deserialize, Serialize};
use std::io::Write;

/// One simulated year, amounts rounded to whole units
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YearlyRecord {
    /// 1-based year index
    pub year: u32,
    /// Balance at end of year, after interest
    pub balance: f64,
    /// Cumulative contributions including the initial deposit
    pub contributions: f64,
    /// Interest earned to date (balance - contributions)
    pub interest: f64,
}

/// Complete projection output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionResult {
    pub total: f64,
    pub total_contributions: f64,
    pub total_interest: f64,
    /// One record per simulated year, in year order
    pub yearly_data: Vec<YearlyRecord>,
}

impl ProjectionResult {
    pub fn years(&self) -> usize {
        self.yearly_data.len()
    }

    /// Record for a 1-based year, if it was simulated
    pub fn year(&self, year: u32) -> Option<&YearlyRecord> {
        let idx = (year as usize).checked_sub(1)?;
        self.yearly_data.get(idx)
    }
}

/// Write the yearly table as CSV with a header row
pub fn write_yearly_csv<W: Write>(result: &ProjectionResult, writer: W) -> Result<(), csv::Error> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(["Year", "Balance", "Contributions", "Interest"])?;
    for row in &result.yearly_data {
        wtr.write_record(&[
            row.year.to_string(),
            format!("{:.0}", row.balance),
            format!("{:.0}", row.contributions),
            format!("{:.0}", row.interest),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

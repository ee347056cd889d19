//! Rendering and export of projection results
//!
//! Formatting helpers for console tables, plus CSV and JSON exports. Export
//! failures are returned to the caller; the result being exported is only
//! ever borrowed.

use crate::error::Result;
use crate::params::{AnnualParameters, SimulationParameters};
use crate::projection::{AnnualProjection, LeverEntry, ProjectionResult};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io::Write;

/// Format a currency amount with thousands separators and two decimals
///
/// `format_currency(1234567.891, ',')` gives `"1,234,567.89"`.
pub fn format_currency(value: f64, separator: char) -> String {
    let cents = (value.abs() * 100.0).round() as u128;
    let sign = if value < 0.0 && cents > 0 { "-" } else { "" };
    format!(
        "{}{}.{:02}",
        sign,
        group_thousands(cents / 100, separator),
        cents % 100
    )
}

/// Format a volume as a whole number with thousands separators
pub fn format_volume(value: i64, separator: char) -> String {
    let sign = if value < 0 { "-" } else { "" };
    format!("{}{}", sign, group_thousands(value.unsigned_abs() as u128, separator))
}

fn group_thousands(value: u128, separator: char) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(ch);
    }
    out
}

/// Plain-text lever table for terminals
pub fn render_table(result: &ProjectionResult) -> String {
    let mut out = String::new();
    out.push_str(&format!("{:<24} {:>12} {:>16}\n", "Lever", "Volume", "Gain (EUR)"));
    out.push_str(&format!("{}\n", "-".repeat(54)));
    for entry in &result.lever_breakdown {
        out.push_str(&format!(
            "{:<24} {:>12} {:>16}\n",
            entry.label,
            format_volume(entry.volume, ','),
            format_currency(entry.gain, ',')
        ));
    }
    out.push_str(&format!("{}\n", "-".repeat(54)));
    out.push_str(&format!(
        "{:<24} {:>12} {:>16}\n",
        "Total",
        "",
        format_currency(result.total_gain, ',')
    ));
    out
}

/// Plain-text baseline vs plus table for the annual projection
pub fn render_annual_table(projection: &AnnualProjection) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:<24} {:>16} {:>16} {:>9}\n",
        "Lever", "Baseline (EUR)", "Plus (EUR)", "ROI (%)"
    ));
    out.push_str(&format!("{}\n", "-".repeat(68)));
    for c in &projection.comparison {
        out.push_str(&format!(
            "{:<24} {:>16} {:>16} {:>9.1}\n",
            c.label,
            format_currency(c.baseline_gain, ','),
            format_currency(c.plus_gain, ','),
            c.roi_pct
        ));
    }
    out.push_str(&format!("{}\n", "-".repeat(68)));
    out.push_str(&format!(
        "{:<24} {:>16} {:>16} {:>9.1}\n",
        "Total",
        format_currency(projection.total_baseline, ','),
        format_currency(projection.total_plus, ','),
        projection.total_roi_pct
    ));
    out
}

#[derive(Serialize)]
struct CsvLeverRow<'a> {
    #[serde(rename = "Lever")]
    lever: &'a str,
    #[serde(rename = "Volume")]
    volume: Option<i64>,
    #[serde(rename = "Gain")]
    gain: String,
}

impl<'a> From<&'a LeverEntry> for CsvLeverRow<'a> {
    fn from(entry: &'a LeverEntry) -> Self {
        Self {
            lever: &entry.label,
            volume: Some(entry.volume),
            gain: format!("{:.2}", entry.gain),
        }
    }
}

/// Write the lever table as CSV, followed by a `Total` row
pub fn write_lever_csv<W: Write>(writer: W, result: &ProjectionResult) -> Result<()> {
    let mut csv = csv::Writer::from_writer(writer);
    for entry in &result.lever_breakdown {
        csv.serialize(CsvLeverRow::from(entry))?;
    }
    csv.serialize(CsvLeverRow {
        lever: "Total",
        volume: None,
        gain: format!("{:.2}", result.total_gain),
    })?;
    csv.flush()?;
    Ok(())
}

/// Serializable report wrapping inputs and outputs
#[derive(Debug, Serialize)]
pub struct ProjectionReport<'a> {
    pub generated_at: DateTime<Utc>,
    pub parameters: &'a SimulationParameters,
    pub result: &'a ProjectionResult,
}

impl<'a> ProjectionReport<'a> {
    pub fn new(parameters: &'a SimulationParameters, result: &'a ProjectionResult) -> Self {
        Self {
            generated_at: Utc::now(),
            parameters,
            result,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn write_json<W: Write>(&self, writer: W) -> Result<()> {
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }
}

/// Serializable report for the annual projection
#[derive(Debug, Serialize)]
pub struct AnnualReport<'a> {
    pub generated_at: DateTime<Utc>,
    pub parameters: &'a AnnualParameters,
    pub projection: &'a AnnualProjection,
}

impl<'a> AnnualReport<'a> {
    pub fn new(parameters: &'a AnnualParameters, projection: &'a AnnualProjection) -> Self {
        Self {
            generated_at: Utc::now(),
            parameters,
            projection,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::compute_projection;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(1_234_567.891, ','), "1,234,567.89");
        assert_eq!(format_currency(484_787.0, ' '), "484 787.00");
        assert_eq!(format_currency(999.995, ','), "1,000.00");
        assert_eq!(format_currency(0.0, ','), "0.00");
        assert_eq!(format_currency(-1_500.5, ','), "-1,500.50");
        assert_eq!(format_currency(-0.001, ','), "0.00");
    }

    #[test]
    fn test_format_volume() {
        assert_eq!(format_volume(38_000, ','), "38,000");
        assert_eq!(format_volume(840, ','), "840");
        assert_eq!(format_volume(-1_234, '.'), "-1.234");
    }

    #[test]
    fn test_lever_csv() {
        let result = compute_projection(&SimulationParameters::new(
            40_000,
            5.0,
            8.0,
            70.0,
            Default::default(),
        ));
        let mut buf = Vec::new();
        write_lever_csv(&mut buf, &result).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "Lever,Volume,Gain");
        assert_eq!(lines[1], "Specialist opinions,2660,65329.60");
        assert_eq!(lines[5], "UHCD mono-RUM bonus,2240,44800.00");
        assert_eq!(lines[6], "Total,,484787.00");
    }

    #[test]
    fn test_json_report_contains_result() {
        let params = SimulationParameters::default();
        let result = compute_projection(&params);
        let json = ProjectionReport::new(&params, &result).to_json().unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(value["generated_at"].is_string());
        assert_eq!(value["parameters"]["total_visits"], 40_000);
        assert_eq!(value["result"]["lever_breakdown"].as_array().unwrap().len(), 5);
    }

    #[test]
    fn test_table_has_total() {
        let table = render_table(&compute_projection(&SimulationParameters::default()));
        assert!(table.lines().last().unwrap().starts_with("Total"));
        assert_eq!(table.lines().count(), 9);
    }
}

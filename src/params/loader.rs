//! Load batches of simulation scenarios from CSV

use super::SimulationParameters;
use crate::error::{Result, RevenueError};
use crate::tariffs::{PricingAssumptions, Tariffs};
use csv::Reader;
use std::path::Path;

/// Default path to the scenario batch file
pub const DEFAULT_SCENARIOS_PATH: &str = "data/scenarios.csv";

/// Raw CSV row; empty tariff cells fall back to the supplied pricing
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "ScenarioId")]
    scenario_id: u32,
    #[serde(rename = "TotalVisits")]
    total_visits: u64,
    #[serde(rename = "CurrentRatePct")]
    current_rate_pct: f64,
    #[serde(rename = "TargetRatePct")]
    target_rate_pct: f64,
    #[serde(rename = "MonoRecordPct")]
    mono_record_pct: f64,
    #[serde(rename = "OpinionPrice", default)]
    opinion_price: Option<f64>,
    #[serde(rename = "Ccmu2Price", default)]
    ccmu2_price: Option<f64>,
    #[serde(rename = "Ccmu3Price", default)]
    ccmu3_price: Option<f64>,
    #[serde(rename = "ObservationPrice", default)]
    observation_price: Option<f64>,
    #[serde(rename = "MonoRecordBonusPct", default)]
    mono_record_bonus_pct: Option<f64>,
}

/// A scenario read from a batch file
#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    pub scenario_id: u32,
    pub params: SimulationParameters,
}

impl CsvRow {
    fn into_scenario(self, fallback: &PricingAssumptions) -> Result<Scenario> {
        check_pct("CurrentRatePct", self.current_rate_pct)?;
        check_pct("TargetRatePct", self.target_rate_pct)?;
        check_pct("MonoRecordPct", self.mono_record_pct)?;

        let pricing = PricingAssumptions {
            tariffs: Tariffs {
                specialist_opinion: self
                    .opinion_price
                    .unwrap_or(fallback.tariffs.specialist_opinion),
                ccmu2: self.ccmu2_price.unwrap_or(fallback.tariffs.ccmu2),
                ccmu3: self.ccmu3_price.unwrap_or(fallback.tariffs.ccmu3),
                observation_stay: self
                    .observation_price
                    .unwrap_or(fallback.tariffs.observation_stay),
            },
            mono_record_bonus_pct: self
                .mono_record_bonus_pct
                .unwrap_or(fallback.mono_record_bonus_pct),
        };
        check_amount("OpinionPrice", pricing.tariffs.specialist_opinion)?;
        check_amount("Ccmu2Price", pricing.tariffs.ccmu2)?;
        check_amount("Ccmu3Price", pricing.tariffs.ccmu3)?;
        check_amount("ObservationPrice", pricing.tariffs.observation_stay)?;
        check_pct("MonoRecordBonusPct", pricing.mono_record_bonus_pct)?;

        Ok(Scenario {
            scenario_id: self.scenario_id,
            params: SimulationParameters::new(
                self.total_visits,
                self.current_rate_pct,
                self.target_rate_pct,
                self.mono_record_pct,
                pricing,
            ),
        })
    }
}

/// Percentages in batch files must lie in [0, 100]
fn check_pct(field: &str, value: f64) -> Result<()> {
    if (0.0..=100.0).contains(&value) {
        Ok(())
    } else {
        Err(RevenueError::InvalidValue {
            field: field.to_string(),
            value: value.to_string(),
        })
    }
}

/// Prices in batch files must be finite and non-negative
fn check_amount(field: &str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(RevenueError::InvalidValue {
            field: field.to_string(),
            value: value.to_string(),
        })
    }
}

/// Load all scenarios from a CSV file
pub fn load_scenarios<P: AsRef<Path>>(
    path: P,
    fallback: &PricingAssumptions,
) -> Result<Vec<Scenario>> {
    let reader = Reader::from_path(path)?;
    collect_scenarios(reader, fallback)
}

/// Load scenarios from any reader (e.g., string buffer, request body)
pub fn load_scenarios_from_reader<R: std::io::Read>(
    reader: R,
    fallback: &PricingAssumptions,
) -> Result<Vec<Scenario>> {
    collect_scenarios(Reader::from_reader(reader), fallback)
}

fn collect_scenarios<R: std::io::Read>(
    mut reader: Reader<R>,
    fallback: &PricingAssumptions,
) -> Result<Vec<Scenario>> {
    let mut scenarios = Vec::new();
    for result in reader.deserialize() {
        let row: CsvRow = result?;
        scenarios.push(row.into_scenario(fallback)?);
    }
    Ok(scenarios)
}

//! CSV-based tariff loader
//!
//! Reads `lever,price` rows from data/tariffs.csv

use super::{PricingAssumptions, Tariffs};
use crate::error::{Result, RevenueError};
use log::{info, warn};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Default path to the tariff file
pub const DEFAULT_TARIFFS_PATH: &str = "data/tariffs.csv";

/// Load pricing assumptions from a tariff CSV file
pub fn load_pricing(path: &Path) -> Result<PricingAssumptions> {
    let file = File::open(path)?;
    let pricing = load_pricing_from_reader(file)?;
    info!("loaded tariffs from {}", path.display());
    Ok(pricing)
}

/// Load pricing assumptions from any reader
///
/// All four prices and the mono-RUM surcharge are required. Unknown
/// rows are skipped.
pub fn load_pricing_from_reader<R: Read>(reader: R) -> Result<PricingAssumptions> {
    let mut reader = csv::Reader::from_reader(reader);

    let mut specialist_opinion = None;
    let mut ccmu2 = None;
    let mut ccmu3 = None;
    let mut observation_stay = None;
    let mut mono_record_bonus_pct = None;

    for result in reader.records() {
        let record = result?;
        let key = record.get(0).unwrap_or("").trim();
        let raw = record.get(1).unwrap_or("").trim();

        let slot = match key {
            "specialist_opinion" => &mut specialist_opinion,
            "ccmu2" => &mut ccmu2,
            "ccmu3" => &mut ccmu3,
            "observation_stay" => &mut observation_stay,
            "mono_record_bonus_pct" => &mut mono_record_bonus_pct,
            other => {
                warn!("ignoring unknown tariff entry {:?}", other);
                continue;
            }
        };
        *slot = Some(parse_amount(key, raw)?);
    }

    Ok(PricingAssumptions {
        tariffs: Tariffs {
            specialist_opinion: specialist_opinion
                .ok_or(RevenueError::MissingTariff("specialist_opinion"))?,
            ccmu2: ccmu2.ok_or(RevenueError::MissingTariff("ccmu2"))?,
            ccmu3: ccmu3.ok_or(RevenueError::MissingTariff("ccmu3"))?,
            observation_stay: observation_stay
                .ok_or(RevenueError::MissingTariff("observation_stay"))?,
        },
        mono_record_bonus_pct: mono_record_bonus_pct
            .ok_or(RevenueError::MissingTariff("mono_record_bonus_pct"))?,
    })
}

/// Parse a non-negative, finite amount
fn parse_amount(field: &str, raw: &str) -> Result<f64> {
    let invalid = || RevenueError::InvalidValue {
        field: field.to_string(),
        value: raw.to_string(),
    };
    let value: f64 = raw.parse().map_err(|_| invalid())?;
    if !value.is_finite() || value < 0.0 {
        return Err(invalid());
    }
    Ok(value)
}

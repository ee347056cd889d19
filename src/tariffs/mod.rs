//! Unit tariffs and pricing assumptions for the billable levers

pub mod loader;

pub use loader::DEFAULT_TARIFFS_PATH;

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Unit prices (EUR) for each billable act
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tariffs {
    /// Specialist opinion add-on
    pub specialist_opinion: f64,

    /// CCMU 2+ consultation add-on
    pub ccmu2: f64,

    /// CCMU 3+ consultation add-on
    pub ccmu3: f64,

    /// One UHCD (observation unit) stay
    pub observation_stay: f64,
}

impl Default for Tariffs {
    fn default() -> Self {
        Self {
            specialist_opinion: 24.56,
            ccmu2: 14.53,
            ccmu3: 19.38,
            observation_stay: 400.0,
        }
    }
}

/// Container for everything priced: tariffs plus the mono-RUM surcharge
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricingAssumptions {
    pub tariffs: Tariffs,

    /// Surcharge on mono-RUM observation stays, in percent (0-100)
    pub mono_record_bonus_pct: f64,
}

impl PricingAssumptions {
    /// Published tariffs with the 5% mono-RUM surcharge
    pub fn default_pricing() -> Self {
        Self {
            tariffs: Tariffs::default(),
            mono_record_bonus_pct: 5.0,
        }
    }

    /// Load pricing from a specific tariff file
    pub fn from_csv_path(path: &Path) -> Result<Self> {
        loader::load_pricing(path)
    }
}

impl Default for PricingAssumptions {
    fn default() -> Self {
        Self::default_pricing()
    }
}

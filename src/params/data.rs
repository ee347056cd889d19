//! Simulation input structures

use crate::tariffs::{PricingAssumptions, Tariffs};
use serde::{Deserialize, Serialize};

/// Default share of visits currently routed to UHCD (%)
pub const DEFAULT_CURRENT_RATE_PCT: f64 = 5.0;

/// Upper bound on the UHCD rate offered by the input layer (%)
pub const MAX_OBSERVATION_RATE_PCT: f64 = 50.0;

/// Default improvement over the current UHCD rate (percentage points)
pub const DEFAULT_RATE_UPLIFT_PCT: f64 = 6.0;

pub const DEFAULT_MONO_RECORD_PCT: f64 = 70.0;
pub const DEFAULT_TOTAL_VISITS: u64 = 40_000;

/// Inputs for one revenue projection
///
/// Values are expected to be already validated by the input layer:
/// percentages in [0, 100], non-negative counts and prices.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationParameters {
    /// Total emergency department visits over the period
    pub total_visits: u64,

    /// Share of visits currently routed to UHCD (%)
    pub current_rate_pct: f64,

    /// Share of visits routed to UHCD under the improvement scenario (%)
    pub target_rate_pct: f64,

    /// Share of UHCD stays billable as mono-RUM (%)
    pub mono_record_pct: f64,

    /// Unit prices
    pub tariffs: Tariffs,

    /// Mono-RUM surcharge (%)
    pub mono_record_bonus_pct: f64,
}

impl SimulationParameters {
    pub fn new(
        total_visits: u64,
        current_rate_pct: f64,
        target_rate_pct: f64,
        mono_record_pct: f64,
        pricing: PricingAssumptions,
    ) -> Self {
        Self {
            total_visits,
            current_rate_pct,
            target_rate_pct,
            mono_record_pct,
            tariffs: pricing.tariffs,
            mono_record_bonus_pct: pricing.mono_record_bonus_pct,
        }
    }

    /// Target rate suggested for a given current rate: six points higher, capped at 50%
    pub fn default_target_for(current_rate_pct: f64) -> f64 {
        (current_rate_pct + DEFAULT_RATE_UPLIFT_PCT).min(MAX_OBSERVATION_RATE_PCT)
    }

    /// Copy with a different target rate
    pub fn with_target_rate(mut self, target_rate_pct: f64) -> Self {
        self.target_rate_pct = target_rate_pct;
        self
    }
}

impl Default for SimulationParameters {
    fn default() -> Self {
        Self::new(
            DEFAULT_TOTAL_VISITS,
            DEFAULT_CURRENT_RATE_PCT,
            Self::default_target_for(DEFAULT_CURRENT_RATE_PCT),
            DEFAULT_MONO_RECORD_PCT,
            PricingAssumptions::default_pricing(),
        )
    }
}

pub const DEFAULT_MONTHLY_OBSERVATION_STAYS: u64 = 100;
pub const DEFAULT_MONTHLY_EXTERNAL_CONSULTATIONS: u64 = 1_000;
pub const DEFAULT_MONTHLY_ADDITIONAL_STAYS: u64 = 20;

/// Largest monthly count accepted from a shareable link
pub const MAX_MONTHLY_COUNT: u64 = 100_000;

/// One month of observed activity, the input of the annual projection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyActivity {
    /// UHCD stays actually valorized this month
    pub observation_stays: u64,

    /// Visits not routed to UHCD this month
    pub external_consultations: u64,

    /// Extra UHCD stays identified by the coding optimization
    pub additional_observation_stays: u64,
}

impl MonthlyActivity {
    pub fn new(
        observation_stays: u64,
        external_consultations: u64,
        additional_observation_stays: u64,
    ) -> Self {
        Self {
            observation_stays,
            external_consultations,
            additional_observation_stays,
        }
    }

    /// Total monthly visits (UHCD stays + external consultations)
    pub fn total_visits(&self) -> u64 {
        self.observation_stays.saturating_add(self.external_consultations)
    }

    /// Valorized UHCD stays once the additional stays are counted
    pub fn observation_stays_plus(&self) -> u64 {
        self.observation_stays.saturating_add(self.additional_observation_stays)
    }
}

impl Default for MonthlyActivity {
    fn default() -> Self {
        Self::new(
            DEFAULT_MONTHLY_OBSERVATION_STAYS,
            DEFAULT_MONTHLY_EXTERNAL_CONSULTATIONS,
            DEFAULT_MONTHLY_ADDITIONAL_STAYS,
        )
    }
}

/// Inputs for the monthly-to-annual projection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnnualParameters {
    pub activity: MonthlyActivity,

    /// Annual visit total to project onto; `None` keeps the naive 12x figure
    pub projected_annual_total: Option<u64>,

    /// Share of UHCD stays billable as mono-RUM (%)
    pub mono_record_pct: f64,

    pub pricing: PricingAssumptions,
}

impl AnnualParameters {
    pub fn new(activity: MonthlyActivity, projected_annual_total: Option<u64>) -> Self {
        Self {
            activity,
            projected_annual_total,
            mono_record_pct: DEFAULT_MONO_RECORD_PCT,
            pricing: PricingAssumptions::default_pricing(),
        }
    }
}

impl Default for AnnualParameters {
    fn default() -> Self {
        Self::new(MonthlyActivity::default(), None)
    }
}

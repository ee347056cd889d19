//! Lever output structures for projections

use super::rounding::{round_currency, round_volume};
use super::volumes::ObservationVolumes;
use serde::{Deserialize, Serialize};

/// A billable revenue lever
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Lever {
    /// Specialist opinion add-on on external consultations
    SpecialistOpinion,
    /// CCMU 2+ consultation add-on
    Ccmu2,
    /// CCMU 3+ consultation add-on
    Ccmu3,
    /// Incremental mono-RUM UHCD stays
    ObservationBase,
    /// Mono-RUM surcharge
    ObservationBonus,
    /// All valorized UHCD stays (annual projection only)
    ObservationStays,
}

impl Lever {
    pub fn label(&self) -> &'static str {
        match self {
            Lever::SpecialistOpinion => "Specialist opinions",
            Lever::Ccmu2 => "CCMU 2+",
            Lever::Ccmu3 => "CCMU 3+",
            Lever::ObservationBase => "UHCD mono-RUM base",
            Lever::ObservationBonus => "UHCD mono-RUM bonus",
            Lever::ObservationStays => "UHCD stays",
        }
    }

    /// Whether the lever bills observation-unit stays
    pub fn is_observation(&self) -> bool {
        matches!(
            self,
            Lever::ObservationBase | Lever::ObservationBonus | Lever::ObservationStays
        )
    }
}

/// One row of the lever table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeverEntry {
    pub lever: Lever,
    pub label: String,

    /// Volume, commercially rounded
    pub volume: i64,

    /// Gain in EUR, rounded to cents
    pub gain: f64,

    /// Unrounded volume
    pub exact_volume: f64,

    /// Unrounded gain
    pub exact_gain: f64,
}

impl LeverEntry {
    /// Price a volume at a unit tariff
    pub fn priced(lever: Lever, volume: f64, unit_price: f64) -> Self {
        Self::with_gain(lever, volume, volume * unit_price)
    }

    /// Entry with an already computed gain
    pub fn with_gain(lever: Lever, volume: f64, gain: f64) -> Self {
        Self {
            lever,
            label: lever.label().to_string(),
            volume: round_volume(volume),
            gain: round_currency(gain),
            exact_volume: volume,
            exact_gain: gain,
        }
    }
}

/// Sum of the displayed (cent-rounded) gains
///
/// Summing the rounded values keeps the total equal to the table rows.
pub fn total_gain(entries: &[LeverEntry]) -> f64 {
    round_currency(entries.iter().map(|e| e.gain).sum())
}

/// Complete projection result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionResult {
    /// Lever table, in display order
    pub lever_breakdown: Vec<LeverEntry>,

    /// Total gain in EUR, rounded to cents
    pub total_gain: f64,

    /// Intermediate volumes behind the table
    pub volumes: ObservationVolumes,
}

impl ProjectionResult {
    pub fn new(lever_breakdown: Vec<LeverEntry>, volumes: ObservationVolumes) -> Self {
        let total_gain = total_gain(&lever_breakdown);
        Self {
            lever_breakdown,
            total_gain,
            volumes,
        }
    }

    /// Entry for a given lever, if present
    pub fn lever(&self, lever: Lever) -> Option<&LeverEntry> {
        self.lever_breakdown.iter().find(|e| e.lever == lever)
    }

    /// Rounded gain for a lever (0 if absent)
    pub fn gain(&self, lever: Lever) -> f64 {
        self.lever(lever).map(|e| e.gain).unwrap_or(0.0)
    }

    /// Headline KPIs: UHCD base and bonus grouped together
    pub fn summary(&self) -> ProjectionSummary {
        let observation: f64 = self
            .lever_breakdown
            .iter()
            .filter(|e| e.lever.is_observation())
            .map(|e| e.gain)
            .sum();

        ProjectionSummary {
            specialist_opinion_gain: self.gain(Lever::SpecialistOpinion),
            ccmu2_gain: self.gain(Lever::Ccmu2),
            ccmu3_gain: self.gain(Lever::Ccmu3),
            observation_gain: round_currency(observation),
            total_gain: self.total_gain,
        }
    }
}

/// Summary KPIs for a projection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionSummary {
    pub specialist_opinion_gain: f64,
    pub ccmu2_gain: f64,
    pub ccmu3_gain: f64,
    pub observation_gain: f64,
    pub total_gain: f64,
}

//! Core projection engine for emergency department revenue levers

use super::levers::{Lever, LeverEntry, ProjectionResult};
use super::rounding::percent_of;
use super::volumes::ObservationVolumes;
use crate::params::SimulationParameters;
use crate::tariffs::Tariffs;
use log::debug;
use serde::{Deserialize, Serialize};

/// Share of external consultations eligible for a specialist opinion
pub const DEFAULT_OPINION_RATIO: f64 = 0.07;

/// Legacy specialist opinion ratio
pub const HISTORICAL_OPINION_RATIO: f64 = 0.05;

/// Share of external consultations billable at CCMU 2+ and CCMU 3+
pub const DEFAULT_CCMU_RATIO: f64 = 0.03;

/// Configuration for a projection run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionConfig {
    /// Fraction of external consultations with a specialist opinion
    pub opinion_ratio: f64,

    /// Fraction of external consultations billable at CCMU 2+
    pub ccmu2_ratio: f64,

    /// Fraction of external consultations billable at CCMU 3+
    pub ccmu3_ratio: f64,
}

impl ProjectionConfig {
    /// Legacy ratios (5% specialist opinions)
    pub fn historical() -> Self {
        Self {
            opinion_ratio: HISTORICAL_OPINION_RATIO,
            ..Self::default()
        }
    }
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            opinion_ratio: DEFAULT_OPINION_RATIO,
            ccmu2_ratio: DEFAULT_CCMU_RATIO,
            ccmu3_ratio: DEFAULT_CCMU_RATIO,
        }
    }
}

/// Main projection engine
#[derive(Debug, Clone, Default)]
pub struct ProjectionEngine {
    config: ProjectionConfig,
}

impl ProjectionEngine {
    pub fn new(config: ProjectionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ProjectionConfig {
        &self.config
    }

    /// Run the projection for one parameter set
    pub fn project(&self, params: &SimulationParameters) -> ProjectionResult {
        let volumes = ObservationVolumes::from_params(params);
        let tariffs = &params.tariffs;

        let mut levers = self.consultation_levers(volumes.external_consultations, tariffs);

        // Base revenue counts only the incremental mono-RUM stays; the
        // surcharge applies to the whole mono-RUM population.
        levers.push(LeverEntry::priced(
            Lever::ObservationBase,
            volumes.mono_record_new,
            tariffs.observation_stay,
        ));
        levers.push(LeverEntry::with_gain(
            Lever::ObservationBonus,
            volumes.mono_record_total(),
            percent_of(
                volumes.mono_record_total() * tariffs.observation_stay,
                params.mono_record_bonus_pct,
            ),
        ));

        let result = ProjectionResult::new(levers, volumes);
        debug!(
            "projected {} visits ({}% -> {}%): total gain {:.2}",
            params.total_visits,
            params.current_rate_pct,
            params.target_rate_pct,
            result.total_gain
        );
        result
    }

    /// Specialist opinion and CCMU levers over a population of external consultations
    pub(crate) fn consultation_levers(&self, external: f64, tariffs: &Tariffs) -> Vec<LeverEntry> {
        vec![
            LeverEntry::priced(
                Lever::SpecialistOpinion,
                external * self.config.opinion_ratio,
                tariffs.specialist_opinion,
            ),
            LeverEntry::priced(Lever::Ccmu2, external * self.config.ccmu2_ratio, tariffs.ccmu2),
            LeverEntry::priced(Lever::Ccmu3, external * self.config.ccmu3_ratio, tariffs.ccmu3),
        ]
    }
}

/// Run a projection with the default lever ratios
pub fn compute_projection(params: &SimulationParameters) -> ProjectionResult {
    ProjectionEngine::default().project(params)
}

//! Derived activity volumes for a single projection

use super::rounding::percent_of;
use crate::params::SimulationParameters;
use serde::{Deserialize, Serialize};

/// Unrounded volumes derived from the simulation parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObservationVolumes {
    /// UHCD stays at the current rate
    pub observation_current: f64,

    /// UHCD stays at the target rate
    pub observation_target: f64,

    /// Incremental UHCD stays (never negative)
    pub observation_new: f64,

    /// Mono-RUM stays among the current UHCD stays
    pub mono_record_current: f64,

    /// Mono-RUM stays among the incremental UHCD stays
    pub mono_record_new: f64,

    /// Visits not routed to UHCD at the current rate
    pub external_consultations: f64,
}

impl ObservationVolumes {
    pub fn from_params(params: &SimulationParameters) -> Self {
        let total = params.total_visits as f64;

        let observation_current = percent_of(total, params.current_rate_pct);
        let observation_target = percent_of(total, params.target_rate_pct);
        // A target below the current rate yields no new stays
        let observation_new = (observation_target - observation_current).max(0.0);

        Self {
            observation_current,
            observation_target,
            observation_new,
            mono_record_current: percent_of(observation_current, params.mono_record_pct),
            mono_record_new: percent_of(observation_new, params.mono_record_pct),
            external_consultations: total - observation_current,
        }
    }

    /// Whole mono-RUM population after the improvement
    pub fn mono_record_total(&self) -> f64 {
        self.mono_record_current + self.mono_record_new
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_below_current_clamps() {
        let params = SimulationParameters::default().with_target_rate(3.0);
        let volumes = ObservationVolumes::from_params(&params);
        assert_eq!(volumes.observation_current, 2_000.0);
        assert_eq!(volumes.observation_target, 1_200.0);
        assert_eq!(volumes.observation_new, 0.0);
        assert_eq!(volumes.mono_record_new, 0.0);
        assert_eq!(volumes.mono_record_total(), volumes.mono_record_current);
    }
}

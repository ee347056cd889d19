//! Scenario runner for batch and what-if projections
//!
//! Holds one engine configuration and runs many parameter sets against it.
//! Each projection is independent, so batches run in parallel.

use crate::params::{AnnualParameters, Scenario, SimulationParameters};
use crate::projection::{AnnualProjection, ProjectionConfig, ProjectionEngine, ProjectionResult};
use log::{info, warn};
use rayon::prelude::*;

/// Upper bound on the number of points in one target-rate sweep
pub const MAX_SWEEP_POINTS: usize = 10_001;

/// Pre-configured runner for batch projections
///
/// # Example
/// ```
/// use ed_revenue::{ScenarioRunner, SimulationParameters};
///
/// let runner = ScenarioRunner::new();
/// let sweep = runner.sweep_target_rates(&SimulationParameters::default(), 20.0, 1.0);
/// assert_eq!(sweep.len(), 16);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScenarioRunner {
    engine: ProjectionEngine,
}

/// One point of a target-rate sweep
#[derive(Debug, Clone, PartialEq)]
pub struct SweepPoint {
    pub target_rate_pct: f64,
    pub result: ProjectionResult,
}

impl ScenarioRunner {
    /// Runner with the default lever ratios
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ProjectionConfig) -> Self {
        Self {
            engine: ProjectionEngine::new(config),
        }
    }

    pub fn config(&self) -> &ProjectionConfig {
        self.engine.config()
    }

    /// Run a single projection
    pub fn run(&self, params: &SimulationParameters) -> ProjectionResult {
        self.engine.project(params)
    }

    /// Run the annual projection
    pub fn run_annual(&self, params: &AnnualParameters) -> AnnualProjection {
        self.engine.project_annual(params)
    }

    /// Run many parameter sets; results keep the input order
    pub fn run_batch(&self, params: &[SimulationParameters]) -> Vec<ProjectionResult> {
        params.par_iter().map(|p| self.engine.project(p)).collect()
    }

    /// Run loaded scenarios, pairing each result with its scenario id
    pub fn run_scenarios(&self, scenarios: &[Scenario]) -> Vec<(u32, ProjectionResult)> {
        info!("running {} scenarios", scenarios.len());
        scenarios
            .par_iter()
            .map(|s| (s.scenario_id, self.engine.project(&s.params)))
            .collect()
    }

    /// Project every target rate from the current rate up to `max_target_pct`
    ///
    /// Targets stop at 100%. A non-positive or non-finite step, or a NaN
    /// bound, yields only the current rate. At most `MAX_SWEEP_POINTS`
    /// points are produced.
    pub fn sweep_target_rates(
        &self,
        base: &SimulationParameters,
        max_target_pct: f64,
        step_pct: f64,
    ) -> Vec<SweepPoint> {
        let start = base.current_rate_pct;
        let max_target_pct = max_target_pct.min(100.0);
        let valid = start.is_finite() && step_pct.is_finite() && step_pct > 0.0;

        let steps = if valid && max_target_pct > start {
            let steps = ((max_target_pct - start) / step_pct + 1e-9).floor();
            if steps >= (MAX_SWEEP_POINTS - 1) as f64 {
                warn!(
                    "sweep {}% -> {}% by {} truncated to {} points",
                    start, max_target_pct, step_pct, MAX_SWEEP_POINTS
                );
                MAX_SWEEP_POINTS - 1
            } else {
                steps as usize
            }
        } else {
            0
        };

        (0..=steps)
            .into_par_iter()
            .map(|i| {
                let target_rate_pct = start + i as f64 * step_pct;
                SweepPoint {
                    target_rate_pct,
                    result: self.engine.project(&base.with_target_rate(target_rate_pct)),
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::{Lever, HISTORICAL_OPINION_RATIO};

    #[test]
    fn test_sweep_is_ordered_and_monotonic() {
        let runner = ScenarioRunner::new();
        let sweep = runner.sweep_target_rates(&SimulationParameters::default(), 15.0, 2.5);

        let rates: Vec<f64> = sweep.iter().map(|p| p.target_rate_pct).collect();
        assert_eq!(rates, vec![5.0, 7.5, 10.0, 12.5, 15.0]);

        // Higher target rate never lowers the total
        for pair in sweep.windows(2) {
            assert!(pair[1].result.total_gain >= pair[0].result.total_gain);
        }
        assert_eq!(sweep[0].result.gain(Lever::ObservationBase), 0.0);
    }

    #[test]
    fn test_sweep_with_invalid_step() {
        let runner = ScenarioRunner::new();
        let sweep = runner.sweep_target_rates(&SimulationParameters::default(), 15.0, 0.0);
        assert_eq!(sweep.len(), 1);
        assert_eq!(sweep[0].target_rate_pct, 5.0);
    }

    #[test]
    fn test_sweep_stops_at_full_rate() {
        let runner = ScenarioRunner::new();
        let base = SimulationParameters::default();

        let sweep = runner.sweep_target_rates(&base, f64::INFINITY, 1.0);
        assert_eq!(sweep.len(), 96);
        assert_eq!(sweep.last().unwrap().target_rate_pct, 100.0);

        assert_eq!(runner.sweep_target_rates(&base, 250.0, 5.0).len(), 20);
    }

    #[test]
    fn test_sweep_with_non_finite_inputs() {
        let runner = ScenarioRunner::new();
        let base = SimulationParameters::default();

        assert_eq!(runner.sweep_target_rates(&base, f64::NAN, 1.0).len(), 1);
        assert_eq!(runner.sweep_target_rates(&base, 20.0, f64::NAN).len(), 1);
        assert_eq!(runner.sweep_target_rates(&base, 20.0, f64::INFINITY).len(), 1);

        let nan_start = SimulationParameters {
            current_rate_pct: f64::NAN,
            ..base
        };
        assert_eq!(runner.sweep_target_rates(&nan_start, 20.0, 1.0).len(), 1);
    }

    #[test]
    fn test_tiny_step_is_capped() {
        let runner = ScenarioRunner::new();
        let sweep = runner.sweep_target_rates(&SimulationParameters::default(), 20.0, 1e-12);

        assert_eq!(sweep.len(), MAX_SWEEP_POINTS);
        assert_eq!(sweep[0].target_rate_pct, 5.0);
        assert!(sweep.last().unwrap().target_rate_pct < 5.0 + 1e-6);
    }

    #[test]
    fn test_batch_matches_single_runs() {
        let runner = ScenarioRunner::with_config(ProjectionConfig::historical());
        assert_eq!(runner.config().opinion_ratio, HISTORICAL_OPINION_RATIO);

        let params: Vec<_> = [0_u64, 10_000, 40_000, 85_000]
            .iter()
            .map(|&visits| SimulationParameters {
                total_visits: visits,
                ..SimulationParameters::default()
            })
            .collect();

        let batch = runner.run_batch(&params);
        assert_eq!(batch.len(), 4);
        for (p, r) in params.iter().zip(&batch) {
            assert_eq!(&runner.run(p), r);
        }
        assert!(batch[3].total_gain > batch[2].total_gain);
    }
}

//! Monthly-to-annual UHCD projection with volume rescaling and ROI
//!
//! Monthly counts are annualized (x12), then rescaled onto a projected annual
//! visit total. Each rescaled volume is rounded after scaling, and the
//! improved ("plus") UHCD volume is scaled as a single figure, so rounding
//! never compounds between the baseline and plus scenarios.

use super::engine::ProjectionEngine;
use super::levers::{total_gain, Lever, LeverEntry};
use super::roi::roi_pct;
use super::rounding::{percent_of, round_count, round_currency, share_pct};
use crate::params::AnnualParameters;
use crate::tariffs::PricingAssumptions;
use log::debug;
use serde::{Deserialize, Serialize};

pub const MONTHS_PER_YEAR: f64 = 12.0;

/// Annual volumes for the two scenarios
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnnualVolumes {
    /// UHCD stays currently valorized
    pub observation_current: f64,

    /// UHCD stays after the optimization (current + additional)
    pub observation_plus: f64,

    pub external_consultations: f64,

    /// UHCD stays + external consultations
    pub total_visits: f64,
}

impl AnnualVolumes {
    fn scaled(&self, scale: f64) -> Self {
        Self {
            observation_current: round_count(self.observation_current * scale),
            observation_plus: round_count(self.observation_plus * scale),
            external_consultations: round_count(self.external_consultations * scale),
            total_visits: round_count(self.total_visits * scale),
        }
    }
}

/// Baseline vs plus comparison for one lever
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeverComparison {
    pub lever: Lever,
    pub label: String,
    pub baseline_gain: f64,
    pub plus_gain: f64,
    pub gain_delta: f64,
    pub roi_pct: f64,
}

/// Result of the annual projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnualProjection {
    /// Monthly visits (UHCD stays + external consultations)
    pub monthly_total: u64,

    /// Share of monthly visits valorized as UHCD (%)
    pub monthly_rate_pct: f64,

    /// Same share once the additional stays are valorized (%)
    pub monthly_rate_plus_pct: f64,

    /// Monthly volumes x12, unscaled
    pub naive: AnnualVolumes,

    /// Annual visit total the volumes were rescaled onto
    pub projected_annual_total: f64,

    /// `projected_annual_total / naive.total_visits`, 0 if the naive total is 0
    pub scale: f64,

    /// Rescaled and rounded volumes
    pub volumes: AnnualVolumes,

    pub baseline: Vec<LeverEntry>,
    pub plus: Vec<LeverEntry>,
    pub comparison: Vec<LeverComparison>,

    pub total_baseline: f64,
    pub total_plus: f64,
    pub total_roi_pct: f64,
}

impl AnnualProjection {
    pub fn comparison_for(&self, lever: Lever) -> Option<&LeverComparison> {
        self.comparison.iter().find(|c| c.lever == lever)
    }

    /// Annual UHCD revenue gained by the optimization
    pub fn observation_revenue_gain(&self) -> f64 {
        self.comparison_for(Lever::ObservationStays)
            .map(|c| c.gain_delta)
            .unwrap_or(0.0)
    }
}

impl ProjectionEngine {
    /// Annualize one month of activity and compare baseline and plus scenarios
    pub fn project_annual(&self, params: &AnnualParameters) -> AnnualProjection {
        let activity = &params.activity;
        let monthly_total = activity.total_visits();
        let observation_plus_monthly = activity.observation_stays_plus() as f64;

        let monthly_rate_pct = share_pct(activity.observation_stays as f64, monthly_total as f64);
        let monthly_rate_plus_pct = share_pct(observation_plus_monthly, monthly_total as f64);

        let naive = AnnualVolumes {
            observation_current: activity.observation_stays as f64 * MONTHS_PER_YEAR,
            observation_plus: observation_plus_monthly * MONTHS_PER_YEAR,
            external_consultations: activity.external_consultations as f64 * MONTHS_PER_YEAR,
            total_visits: monthly_total as f64 * MONTHS_PER_YEAR,
        };

        let projected_annual_total = params
            .projected_annual_total
            .map(|total| total as f64)
            .unwrap_or(naive.total_visits);
        let scale = if naive.total_visits == 0.0 {
            0.0
        } else {
            projected_annual_total / naive.total_visits
        };

        let volumes = naive.scaled(scale);

        let baseline = self.annual_levers(
            volumes.observation_current,
            volumes.external_consultations,
            params.mono_record_pct,
            &params.pricing,
        );
        let plus = self.annual_levers(
            volumes.observation_plus,
            volumes.external_consultations,
            params.mono_record_pct,
            &params.pricing,
        );

        let comparison = baseline
            .iter()
            .zip(&plus)
            .map(|(b, p)| LeverComparison {
                lever: b.lever,
                label: b.label.clone(),
                baseline_gain: b.gain,
                plus_gain: p.gain,
                gain_delta: round_currency(p.gain - b.gain),
                roi_pct: roi_pct(b.gain, p.gain),
            })
            .collect();

        let total_baseline = total_gain(&baseline);
        let total_plus = total_gain(&plus);

        debug!(
            "annual projection: scale {:.6}, UHCD {} -> {}, total {:.2} -> {:.2}",
            scale, volumes.observation_current, volumes.observation_plus, total_baseline, total_plus
        );

        AnnualProjection {
            monthly_total,
            monthly_rate_pct,
            monthly_rate_plus_pct,
            naive,
            projected_annual_total,
            scale,
            volumes,
            baseline,
            plus,
            comparison,
            total_baseline,
            total_plus,
            total_roi_pct: roi_pct(total_baseline, total_plus),
        }
    }

    /// Lever table for one annual scenario
    fn annual_levers(
        &self,
        observation: f64,
        external: f64,
        mono_record_pct: f64,
        pricing: &PricingAssumptions,
    ) -> Vec<LeverEntry> {
        let tariffs = &pricing.tariffs;
        let mono_record = percent_of(observation, mono_record_pct);

        let mut levers = self.consultation_levers(external, tariffs);
        levers.push(LeverEntry::priced(
            Lever::ObservationStays,
            observation,
            tariffs.observation_stay,
        ));
        levers.push(LeverEntry::with_gain(
            Lever::ObservationBonus,
            mono_record,
            percent_of(mono_record * tariffs.observation_stay, pricing.mono_record_bonus_pct),
        ));
        levers
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::MonthlyActivity;
    use approx::assert_abs_diff_eq;

    fn engine() -> ProjectionEngine {
        ProjectionEngine::default()
    }

    #[test]
    fn test_default_month_annualized() {
        let params = AnnualParameters::default();
        let result = engine().project_annual(&params);

        assert_eq!(result.monthly_total, 1_100);
        assert_abs_diff_eq!(result.monthly_rate_pct, 100.0 / 1_100.0 * 100.0, epsilon = 1e-12);
        assert_abs_diff_eq!(
            result.monthly_rate_plus_pct,
            120.0 / 1_100.0 * 100.0,
            epsilon = 1e-12
        );

        assert_eq!(result.naive.observation_current, 1_200.0);
        assert_eq!(result.naive.observation_plus, 1_440.0);
        assert_eq!(result.naive.external_consultations, 12_000.0);
        assert_eq!(result.scale, 1.0);
        assert_eq!(result.volumes, result.naive);

        // 1200 -> 1440 stays at 400 EUR
        let stays = result.comparison_for(Lever::ObservationStays).unwrap();
        assert_abs_diff_eq!(stays.baseline_gain, 480_000.0, epsilon = 1e-6);
        assert_abs_diff_eq!(stays.plus_gain, 576_000.0, epsilon = 1e-6);
        assert_abs_diff_eq!(stays.roi_pct, 20.0, epsilon = 1e-9);
        assert_abs_diff_eq!(result.observation_revenue_gain(), 96_000.0, epsilon = 1e-6);

        // Consultation levers do not move between scenarios
        let opinions = result.comparison_for(Lever::SpecialistOpinion).unwrap();
        assert_eq!(opinions.baseline_gain, opinions.plus_gain);
        assert_eq!(opinions.roi_pct, 0.0);
    }

    #[test]
    fn test_rescaling_onto_projected_total() {
        // 13 200 naive visits projected onto 40 000
        let params = AnnualParameters::new(MonthlyActivity::default(), Some(40_000));
        let result = engine().project_annual(&params);

        assert_abs_diff_eq!(result.scale, 40_000.0 / 13_200.0, epsilon = 1e-12);
        // 1200 * 3.0303.. = 3636.36 -> 3636
        assert_eq!(result.volumes.observation_current, 3_636.0);
        // 1440 * 3.0303.. = 4363.64 -> 4364
        assert_eq!(result.volumes.observation_plus, 4_364.0);
        // 12000 * 3.0303.. = 36363.64 -> 36364
        assert_eq!(result.volumes.external_consultations, 36_364.0);
        assert_eq!(result.volumes.total_visits, 40_000.0);
    }

    #[test]
    fn test_scale_applied_before_rounding() {
        // Naive: 12 current, 12 additional, 48 external, 60 total; scale 62/60.
        // Scaled separately the parts give 12.4 + 12.4 -> 12 + 12 = 24;
        // the combined plus volume 24.8 rounds to 25.
        let params = AnnualParameters::new(MonthlyActivity::new(1, 4, 1), Some(62));
        let result = engine().project_annual(&params);

        assert_eq!(result.volumes.observation_current, 12.0);
        assert_eq!(result.volumes.observation_plus, 25.0);
        assert_eq!(result.volumes.external_consultations, 50.0);

        let stays = result.comparison_for(Lever::ObservationStays).unwrap();
        assert_abs_diff_eq!(stays.baseline_gain, 4_800.0, epsilon = 1e-6);
        assert_abs_diff_eq!(stays.plus_gain, 10_000.0, epsilon = 1e-6);
    }

    #[test]
    fn test_projected_equal_to_naive_keeps_volumes() {
        let activity = MonthlyActivity::new(137, 2_911, 23);
        let naive_total = activity.total_visits() * 12;
        let scaled = engine().project_annual(&AnnualParameters::new(activity, Some(naive_total)));
        let unscaled = engine().project_annual(&AnnualParameters::new(activity, None));

        assert_eq!(scaled.scale, 1.0);
        assert_eq!(scaled.volumes, scaled.naive);
        assert_eq!(scaled.baseline, unscaled.baseline);
        assert_eq!(scaled.total_plus, unscaled.total_plus);
    }

    #[test]
    fn test_empty_month_is_all_zero() {
        let params = AnnualParameters::new(MonthlyActivity::new(0, 0, 0), Some(40_000));
        let result = engine().project_annual(&params);

        assert_eq!(result.monthly_rate_pct, 0.0);
        assert_eq!(result.scale, 0.0);
        assert_eq!(result.total_baseline, 0.0);
        assert_eq!(result.total_plus, 0.0);
        assert_eq!(result.total_roi_pct, 0.0);
        for c in &result.comparison {
            assert_eq!(c.roi_pct, 0.0, "{}", c.label);
        }
    }

    #[test]
    fn test_extreme_counts_do_not_overflow() {
        let params = AnnualParameters::new(MonthlyActivity::new(u64::MAX, 1, u64::MAX), None);
        let result = engine().project_annual(&params);

        assert_eq!(result.monthly_total, u64::MAX);
        assert_eq!(result.scale, 1.0);
        assert!(result.monthly_rate_plus_pct.is_finite());
    }

    #[test]
    fn test_no_current_stays_guards_roi() {
        // No valorized stays yet: UHCD baseline is zero, ROI reported as 0
        let params = AnnualParameters::new(MonthlyActivity::new(0, 1_000, 20), None);
        let result = engine().project_annual(&params);

        let stays = result.comparison_for(Lever::ObservationStays).unwrap();
        assert_eq!(stays.baseline_gain, 0.0);
        assert!(stays.plus_gain > 0.0);
        assert_eq!(stays.roi_pct, 0.0);
        assert!(result.total_roi_pct.is_finite());
    }
}

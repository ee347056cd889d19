//! Projection engine for lever revenue and annual UHCD projections

mod annual;
mod engine;
mod levers;
mod roi;
pub mod rounding;
mod volumes;

pub use annual::{AnnualProjection, AnnualVolumes, LeverComparison, MONTHS_PER_YEAR};
pub use engine::{
    compute_projection, ProjectionConfig, ProjectionEngine, DEFAULT_CCMU_RATIO,
    DEFAULT_OPINION_RATIO, HISTORICAL_OPINION_RATIO,
};
pub use levers::{total_gain, Lever, LeverEntry, ProjectionResult, ProjectionSummary};
pub use roi::roi_pct;
pub use volumes::ObservationVolumes;

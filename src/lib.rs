//! ED Revenue - revenue projection engine for emergency department billing levers
//!
//! This library provides:
//! - Lever projections for specialist opinions, CCMU 2+/3+ consultations and
//!   UHCD mono-RUM stays (base revenue and surcharge)
//! - Monthly-to-annual UHCD projections with volume rescaling and ROI
//! - Batch and target-rate sweep runs
//! - Tariff/scenario loading, shareable-link encoding, CSV/JSON export

pub mod error;
pub mod params;
pub mod projection;
pub mod report;
pub mod scenario;
pub mod tariffs;

// Re-export commonly used types
pub use error::RevenueError;
pub use params::{AnnualParameters, MonthlyActivity, SimulationParameters};
pub use projection::{
    compute_projection, AnnualProjection, Lever, LeverEntry, ProjectionConfig, ProjectionEngine,
    ProjectionResult,
};
pub use scenario::ScenarioRunner;
pub use tariffs::{PricingAssumptions, Tariffs};

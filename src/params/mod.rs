//! Simulation inputs, batch loading and shareable-link encoding

mod data;
pub mod link;
pub mod loader;

pub use data::{
    AnnualParameters, MonthlyActivity, SimulationParameters, DEFAULT_CURRENT_RATE_PCT,
    DEFAULT_MONO_RECORD_PCT, DEFAULT_TOTAL_VISITS, MAX_OBSERVATION_RATE_PCT,
};
pub use loader::{load_scenarios, load_scenarios_from_reader, Scenario};

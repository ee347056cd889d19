//! Sweep the target UHCD rate and write the projected gains per rate
//!
//! Usage: cargo run --bin sweep_targets -- --max-target 30 --step 0.5
//! With --scenarios, runs every row of a scenario CSV instead. --tariffs
//! replaces the built-in prices in both modes.

use anyhow::{Context, Result};
use clap::Parser;
use ed_revenue::{
    params::{load_scenarios, DEFAULT_TOTAL_VISITS, MAX_OBSERVATION_RATE_PCT},
    projection::Lever,
    PricingAssumptions, ScenarioRunner, SimulationParameters,
};
use log::info;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Debug, Parser)]
#[command(about = "Target-rate sweep of the ED revenue projection")]
struct Args {
    #[arg(long, default_value_t = DEFAULT_TOTAL_VISITS)]
    total_visits: u64,

    #[arg(long, default_value_t = 5.0)]
    current_rate: f64,

    #[arg(long, default_value_t = 70.0)]
    mono_record: f64,

    /// Highest target rate to project (%)
    #[arg(long, default_value_t = MAX_OBSERVATION_RATE_PCT)]
    max_target: f64,

    /// Target rate increment (percentage points)
    #[arg(long, default_value_t = 1.0)]
    step: f64,

    /// Tariff file (lever,price rows); built-in tariffs when absent.
    /// Also fills blank tariff cells of a scenario CSV.
    #[arg(long, env = "TARIFFS_CSV")]
    tariffs: Option<PathBuf>,

    /// Scenario CSV to run instead of a sweep
    #[arg(long)]
    scenarios: Option<PathBuf>,

    #[arg(long, default_value = "target_sweep_output.csv")]
    output: PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let runner = ScenarioRunner::new();
    let pricing = match &args.tariffs {
        Some(path) => PricingAssumptions::from_csv_path(path)
            .with_context(|| format!("loading tariffs from {}", path.display()))?,
        None => PricingAssumptions::default_pricing(),
    };

    let start = Instant::now();
    let mut file = File::create(&args.output)
        .with_context(|| format!("creating {}", args.output.display()))?;

    if let Some(path) = &args.scenarios {
        let scenarios = load_scenarios(path, &pricing)
            .with_context(|| format!("loading scenarios from {}", path.display()))?;
        let results = runner.run_scenarios(&scenarios);

        writeln!(file, "ScenarioId,TotalVisits,CurrentRatePct,TargetRatePct,TotalGain")?;
        for (scenario, (id, result)) in scenarios.iter().zip(&results) {
            writeln!(
                file,
                "{},{},{},{},{:.2}",
                id,
                scenario.params.total_visits,
                scenario.params.current_rate_pct,
                scenario.params.target_rate_pct,
                result.total_gain
            )?;
        }
        println!("Ran {} scenarios in {:?}", results.len(), start.elapsed());
    } else {
        let base = SimulationParameters::new(
            args.total_visits,
            args.current_rate,
            args.current_rate,
            args.mono_record,
            pricing,
        );
        let sweep = runner.sweep_target_rates(&base, args.max_target, args.step);

        writeln!(
            file,
            "TargetRatePct,NewStays,SpecialistOpinion,Ccmu2,Ccmu3,UhcdBase,UhcdBonus,TotalGain"
        )?;
        for point in &sweep {
            let r = &point.result;
            writeln!(
                file,
                "{:.2},{:.0},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2}",
                point.target_rate_pct,
                r.volumes.observation_new.round(),
                r.gain(Lever::SpecialistOpinion),
                r.gain(Lever::Ccmu2),
                r.gain(Lever::Ccmu3),
                r.gain(Lever::ObservationBase),
                r.gain(Lever::ObservationBonus),
                r.total_gain,
            )?;
        }

        if let (Some(first), Some(last)) = (sweep.first(), sweep.last()) {
            println!(
                "Target {:.1}% -> {:.1}%: total gain {:.2} -> {:.2} EUR",
                first.target_rate_pct,
                last.target_rate_pct,
                first.result.total_gain,
                last.result.total_gain
            );
        }
        println!("Projected {} target rates in {:?}", sweep.len(), start.elapsed());
    }

    info!("sweep written to {}", args.output.display());
    println!("Results written to: {}", args.output.display());
    Ok(())
}

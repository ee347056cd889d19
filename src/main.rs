//! ED Revenue CLI
//!
//! Computes the lever projection for one set of parameters and prints the table

use anyhow::{Context, Result};
use clap::Parser;
use ed_revenue::{
    params::{DEFAULT_CURRENT_RATE_PCT, DEFAULT_MONO_RECORD_PCT, DEFAULT_TOTAL_VISITS},
    report::{self, ProjectionReport},
    PricingAssumptions, ProjectionConfig, ProjectionEngine, SimulationParameters,
};
use log::info;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "ed_revenue", version, about = "Emergency department revenue projection")]
struct Args {
    /// Total emergency department visits over the period
    #[arg(long, env = "TOTAL_VISITS", default_value_t = DEFAULT_TOTAL_VISITS)]
    total_visits: u64,

    /// Current UHCD rate (%)
    #[arg(long, env = "CURRENT_RATE_PCT", default_value_t = DEFAULT_CURRENT_RATE_PCT)]
    current_rate: f64,

    /// Target UHCD rate (%), defaults to current + 6 capped at 50
    #[arg(long, env = "TARGET_RATE_PCT")]
    target_rate: Option<f64>,

    /// Share of UHCD stays billable as mono-RUM (%)
    #[arg(long, env = "MONO_RECORD_PCT", default_value_t = DEFAULT_MONO_RECORD_PCT)]
    mono_record: f64,

    /// Tariff file (lever,price rows); built-in tariffs when absent
    #[arg(long, env = "TARIFFS_CSV")]
    tariffs: Option<PathBuf>,

    /// Use the legacy 5% specialist opinion ratio
    #[arg(long)]
    historical_ratio: bool,

    /// Write the lever table to this CSV file
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Write a JSON report to this file
    #[arg(long)]
    json: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let pricing = match &args.tariffs {
        Some(path) => PricingAssumptions::from_csv_path(path)
            .with_context(|| format!("loading tariffs from {}", path.display()))?,
        None => PricingAssumptions::default_pricing(),
    };
    let config = if args.historical_ratio {
        ProjectionConfig::historical()
    } else {
        ProjectionConfig::default()
    };

    let target_rate = args
        .target_rate
        .unwrap_or_else(|| SimulationParameters::default_target_for(args.current_rate));
    let params = SimulationParameters::new(
        args.total_visits,
        args.current_rate.clamp(0.0, 100.0),
        target_rate.clamp(0.0, 100.0),
        args.mono_record.clamp(0.0, 100.0),
        pricing,
    );

    let result = ProjectionEngine::new(config).project(&params);

    println!("ED Revenue Projection");
    println!("=====================\n");
    println!(
        "  Total visits:     {}",
        report::format_volume(params.total_visits as i64, ',')
    );
    println!(
        "  UHCD rate:        {:.1}% -> {:.1}%",
        params.current_rate_pct, params.target_rate_pct
    );
    println!("  Mono-RUM share:   {:.1}%", params.mono_record_pct);
    println!("  Mono-RUM bonus:   {:.1}%", params.mono_record_bonus_pct);
    println!();
    print!("{}", report::render_table(&result));

    let summary = result.summary();
    println!("\nKey indicators (EUR):");
    let indicators = [
        ("Specialist opinions:", summary.specialist_opinion_gain),
        ("CCMU 2+:", summary.ccmu2_gain),
        ("CCMU 3+:", summary.ccmu3_gain),
        ("UHCD:", summary.observation_gain),
    ];
    for (label, gain) in indicators {
        println!("  {:<20} {}", label, report::format_currency(gain, ','));
    }

    if let Some(path) = &args.csv {
        let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
        report::write_lever_csv(BufWriter::new(file), &result)?;
        info!("lever table written to {}", path.display());
        println!("\nLever table written to: {}", path.display());
    }

    if let Some(path) = &args.json {
        let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
        ProjectionReport::new(&params, &result).write_json(BufWriter::new(file))?;
        println!("JSON report written to: {}", path.display());
    }

    Ok(())
}

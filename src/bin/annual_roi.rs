//! Annual UHCD projection and ROI from one month of activity
//!
//! Accepts config via flags or environment variables:
//!   UHCD_MONTH, CONSULT_MONTH, UHCD_PLUS_MONTH, PROJECTED_ANNUAL_TOTAL,
//!   MONO_RECORD_PCT, TARIFFS_CSV
//! `--link "uhcd=..&consult=..&uhcd_plus=.."` reads the monthly counts from a
//! shareable link instead. Supports JSON output via --json.

use anyhow::{Context, Result};
use clap::Parser;
use ed_revenue::{
    params::DEFAULT_MONO_RECORD_PCT,
    report::{self, AnnualReport},
    AnnualParameters, MonthlyActivity, PricingAssumptions, ScenarioRunner,
};
use log::warn;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(about = "Monthly-to-annual UHCD projection with ROI")]
struct Args {
    /// UHCD stays valorized per month
    #[arg(long, env = "UHCD_MONTH", default_value_t = 100)]
    uhcd: u64,

    /// External consultations per month
    #[arg(long, env = "CONSULT_MONTH", default_value_t = 1_000)]
    consult: u64,

    /// Additional UHCD stays per month after optimization
    #[arg(long, env = "UHCD_PLUS_MONTH", default_value_t = 20)]
    uhcd_plus: u64,

    /// Shareable-link query string; overrides the monthly counts
    #[arg(long)]
    link: Option<String>,

    /// Annual visit total to rescale onto (defaults to 12x the month)
    #[arg(long, env = "PROJECTED_ANNUAL_TOTAL")]
    projected_total: Option<u64>,

    #[arg(long, env = "MONO_RECORD_PCT", default_value_t = DEFAULT_MONO_RECORD_PCT)]
    mono_record: f64,

    #[arg(long, env = "TARIFFS_CSV")]
    tariffs: Option<PathBuf>,

    /// Print a JSON report instead of tables
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let activity = match &args.link {
        Some(query) => MonthlyActivity::from_query(query),
        None => MonthlyActivity::new(args.uhcd, args.consult, args.uhcd_plus),
    };
    let pricing = match &args.tariffs {
        Some(path) => PricingAssumptions::from_csv_path(path)
            .with_context(|| format!("loading tariffs from {}", path.display()))?,
        None => PricingAssumptions::default_pricing(),
    };

    let params = AnnualParameters {
        activity,
        projected_annual_total: args.projected_total,
        mono_record_pct: args.mono_record.clamp(0.0, 100.0),
        pricing,
    };
    if activity.total_visits() == 0 {
        warn!("monthly activity is empty; every annual figure will be zero");
    }

    let projection = ScenarioRunner::new().run_annual(&params);

    if args.json {
        println!("{}", AnnualReport::new(&params, &projection).to_json()?);
        return Ok(());
    }

    println!("Annual UHCD Projection");
    println!("======================\n");
    println!("Share link: ?{}", activity.to_query());
    println!("\nMonthly:");
    println!("  Visits:                 {}", projection.monthly_total);
    println!("  UHCD rate:              {:.2} %", projection.monthly_rate_pct);
    println!("  UHCD rate after optim.: {:.2} %", projection.monthly_rate_plus_pct);

    println!("\nAnnual (scale {:.4}):", projection.scale);
    println!("  UHCD/year (x12):        {:.0}", projection.naive.observation_current);
    println!("  UHCD/year projected:    {:.0}", projection.volumes.observation_current);
    println!("  UHCD/year after optim.: {:.0}", projection.volumes.observation_plus);
    println!("  External consultations: {:.0}", projection.volumes.external_consultations);
    println!();
    print!("{}", report::render_annual_table(&projection));
    println!(
        "\nUHCD revenue gain: {} EUR",
        report::format_currency(projection.observation_revenue_gain(), ',')
    );

    Ok(())
}

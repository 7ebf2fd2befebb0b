use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use earnings_estimator::calculation::calculate;
use earnings_estimator::config::ConfigLoader;
use earnings_estimator::form::{FormRequest, RawForm};
use earnings_estimator::models::{CalculationMode, CalculationOutcome, InputSnapshot};
use earnings_estimator::report::{Breakdown, ChartData, ExportReport};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Estimate earnings from a per-session price or an hourly rate, or work out
/// how many days a savings goal needs.
///
/// Numeric arguments are read leniently: anything that is not a number
/// counts as zero and negative values are treated as zero.
#[derive(Parser, Debug)]
#[command(name = "estimate")]
#[command(version, about, long_about = None)]
struct Args {
    /// Directory containing currency.yaml and presets.yaml (built-in defaults if omitted)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Print the outcome, chart data and report as JSON
    #[arg(long, global = true, default_value_t = false)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Earnings from a price per session
    Session {
        /// Price per session
        #[arg(long, default_value = "")]
        price: String,
        /// Sessions per day
        #[arg(long, default_value = "")]
        sessions: String,
        /// Working days per week (0-7)
        #[arg(long, default_value = "")]
        days: String,
        /// Monthly living cost
        #[arg(long, default_value = "")]
        living_cost: String,
    },
    /// Earnings from an hourly rate, waiting time paid at half rate
    Hourly {
        /// Hourly rate
        #[arg(long, default_value = "")]
        rate: String,
        /// Work hours per day
        #[arg(long, default_value = "")]
        work_hours: String,
        /// Waiting hours per day
        #[arg(long, default_value = "")]
        waiting_hours: String,
        /// Working days per week (0-7)
        #[arg(long, default_value = "")]
        days: String,
        /// Monthly living cost
        #[arg(long, default_value = "")]
        living_cost: String,
    },
    /// Working days needed to reach a savings goal
    Goal {
        /// Amount to save
        #[arg(long, default_value = "")]
        amount: String,
        /// Months to save it over
        #[arg(long, default_value = "")]
        months: String,
        /// Price per session
        #[arg(long, default_value = "")]
        price: String,
        /// Sessions per day
        #[arg(long, default_value = "")]
        sessions: String,
        /// Monthly living cost
        #[arg(long, default_value = "")]
        living_cost: String,
    },
    /// Per-session estimate from a named preset
    Preset {
        /// Preset name (see `presets`)
        name: String,
    },
    /// List the available presets
    Presets,
    /// Calculate from a JSON form submission (`-` reads stdin)
    Form {
        /// Path to the JSON file
        file: PathBuf,
    },
}

fn read_form(file: &Path) -> Result<FormRequest> {
    let payload = if file.as_os_str() == "-" {
        let mut payload = String::new();
        io::stdin()
            .read_to_string(&mut payload)
            .context("Failed to read form from stdin")?;
        payload
    } else {
        fs::read_to_string(file).with_context(|| format!("Failed to open: {}", file.display()))?
    };

    FormRequest::from_json(&payload)
        .with_context(|| format!("Failed to decode form: {}", file.display()))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let loader = match &args.config {
        Some(dir) => ConfigLoader::load(dir)
            .with_context(|| format!("Failed to load configuration from: {}", dir.display()))?,
        None => ConfigLoader::builtin(),
    };

    let (mode, snapshot) = match args.command {
        Command::Presets => {
            for (name, preset) in loader.config().presets() {
                println!("{name:<10} {}", preset.description);
            }
            return Ok(());
        }
        Command::Preset { name } => {
            let inputs = loader.get_preset(&name)?;
            info!(preset = %name, "Using preset");
            (CalculationMode::Session, InputSnapshot::from(inputs))
        }
        Command::Form { file } => {
            let request = read_form(&file)?;
            (request.mode, request.snapshot())
        }
        Command::Session {
            price,
            sessions,
            days,
            living_cost,
        } => {
            let form = RawForm {
                price_per_session: Some(price),
                sessions_per_day: Some(sessions),
                days_per_week: Some(days),
                living_cost: Some(living_cost),
                ..RawForm::default()
            };
            (CalculationMode::Session, form.snapshot())
        }
        Command::Hourly {
            rate,
            work_hours,
            waiting_hours,
            days,
            living_cost,
        } => {
            let form = RawForm {
                hourly_rate: Some(rate),
                work_hours: Some(work_hours),
                waiting_hours: Some(waiting_hours),
                days_per_week_hourly: Some(days),
                living_cost: Some(living_cost),
                ..RawForm::default()
            };
            (CalculationMode::Hourly, form.snapshot())
        }
        Command::Goal {
            amount,
            months,
            price,
            sessions,
            living_cost,
        } => {
            let form = RawForm {
                goal_amount: Some(amount),
                goal_months: Some(months),
                price_per_session: Some(price),
                sessions_per_day: Some(sessions),
                living_cost: Some(living_cost),
                ..RawForm::default()
            };
            (CalculationMode::Goal, form.snapshot())
        }
    };

    let formatter = loader.currency_formatter();
    let outcome = calculate(mode, &snapshot);
    let report = ExportReport::build(mode, &snapshot, &outcome, &formatter);

    if args.json {
        let chart = outcome
            .as_projection()
            .map(|projection| ChartData::from_projection(projection, snapshot.living_cost(mode)));
        let document = serde_json::json!({
            "mode": mode,
            "currency": formatter.symbol(),
            "outcome": outcome,
            "chart": chart,
            "report": report,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&document).context("Failed to serialize output")?
        );
        return Ok(());
    }

    if let CalculationOutcome::Projection(projection) = &outcome {
        let breakdown = match mode {
            CalculationMode::Hourly => Breakdown::hourly(&snapshot.hourly, projection, &formatter),
            _ => Breakdown::session(&snapshot.session, projection, &formatter),
        };
        for row in &breakdown.rows {
            println!("{:<16} {}", row.label, row.value);
        }
        println!();
    }

    print!("{}", report.render_text());
    Ok(())
}

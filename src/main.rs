use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use eoq_calculator::{app, config, inventory::InventoryParameters, logging, ui_cli};

/// Economic order quantity calculator (text mode).
///
/// With all three cost inputs given, prints the report once and exits.
/// Otherwise starts the interactive menu.
#[derive(Debug, Parser)]
#[command(name = "eoq_calculator_cli", version, about, allow_negative_numbers = true)]
struct Cli {
    /// Annual demand D [unit/year]
    #[arg(short = 'd', long)]
    demand: Option<f64>,
    /// Fixed cost per order S
    #[arg(short = 's', long)]
    order_cost: Option<f64>,
    /// Holding cost per unit per year H
    #[arg(short = 'H', long)]
    holding_cost: Option<f64>,
    /// Also print the sampled cost curve
    #[arg(long)]
    curve: bool,
    /// Export the sampled cost curve to this CSV file
    #[arg(long, value_name = "PATH")]
    csv: Option<PathBuf>,
    /// Debug-level logging
    #[arg(short, long)]
    verbose: bool,
}

/// Entry point: loads the settings, then runs once or interactively.
fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    match try_run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn try_run(cli: Cli) -> Result<(), app::AppError> {
    let mut cfg = config::load_or_default()?;
    match (cli.demand, cli.order_cost, cli.holding_cost) {
        (Some(d), Some(s), Some(h)) => {
            let params = InventoryParameters::new(d, s, h)?;
            ui_cli::print_report(&cfg, &params);
            if cli.curve {
                ui_cli::print_curve_table(&cfg, params.cost_curve(), ui_cli::CURVE_TABLE_ROWS);
            }
            if let Some(path) = cli.csv {
                ui_cli::export_curve(&path, params.cost_curve())?;
            }
            Ok(())
        }
        (None, None, None) => app::run(&mut cfg),
        _ => {
            tracing::warn!("partial inputs on the command line; falling back to the menu");
            app::run(&mut cfg)
        }
    }
}

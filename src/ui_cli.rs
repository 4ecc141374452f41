use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::app::AppError;
use crate::config::Config;
use crate::export;
use crate::inventory::{CostCurve, InventoryParameters};
use crate::report::{self, format_amount, Labels};

/// Rows printed for a cost curve table before it is thinned out.
pub const CURVE_TABLE_ROWS: usize = 20;

/// Main menu entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Compute,
    CostCurve,
    Export,
    Settings,
    Exit,
}

/// Shows the main menu and returns the selection.
pub fn main_menu() -> Result<MenuChoice, AppError> {
    println!("\n=== EOQ Calculator ===");
    println!("1) Compute EOQ");
    println!("2) Cost curve table");
    println!("3) Export cost curve (CSV)");
    println!("4) Settings");
    println!("0) Exit");
    loop {
        let sel = read_line("Select: ")?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::Compute),
            "2" => return Ok(MenuChoice::CostCurve),
            "3" => return Ok(MenuChoice::Export),
            "4" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("Invalid selection, try again."),
        }
    }
}

/// Prompts for D, S and H and prints the full report.
pub fn handle_compute(cfg: &Config) -> Result<(), AppError> {
    println!("\n-- Compute EOQ --");
    if let Some(params) = read_params(cfg)? {
        print_report(cfg, &params);
    }
    Ok(())
}

/// Prompts for D, S and H and prints a thinned cost curve table.
pub fn handle_cost_curve(cfg: &Config) -> Result<(), AppError> {
    println!("\n-- Cost curve --");
    if let Some(params) = read_params(cfg)? {
        print_curve_table(cfg, params.cost_curve(), CURVE_TABLE_ROWS);
    }
    Ok(())
}

/// Prompts for D, S, H and a file path, then writes the curve as CSV.
pub fn handle_export(cfg: &Config) -> Result<(), AppError> {
    println!("\n-- Export cost curve --");
    let Some(params) = read_params(cfg)? else {
        return Ok(());
    };
    let default_path = default_export_path(cfg);
    let input = read_line(&format!("Output file [{}]: ", default_path.display()))?;
    let path = match input.trim() {
        "" => default_path,
        p => PathBuf::from(p),
    };
    export_curve(&path, params.cost_curve())
}

/// Writes the curve to `path` and reports the row count.
pub fn export_curve(path: &Path, curve: CostCurve) -> Result<(), AppError> {
    let rows = export::write_cost_curve_csv(path, curve)?;
    println!("Wrote {rows} rows to '{}'.", path.display());
    Ok(())
}

/// Settings menu: labels and the default inputs.
pub fn handle_settings(cfg: &mut Config) -> Result<(), AppError> {
    println!("\n-- Settings --");
    println!("(press enter to keep the current value)");
    let currency = read_line(&format!("Currency label [{}]: ", cfg.currency_label))?;
    if !currency.trim().is_empty() {
        cfg.currency_label = currency.trim().to_string();
    }
    let quantity = read_line(&format!("Quantity label [{}]: ", cfg.quantity_label))?;
    if !quantity.trim().is_empty() {
        cfg.quantity_label = quantity.trim().to_string();
    }
    let d = read_f64_or("Default annual demand", cfg.defaults.demand)?;
    let s = read_f64_or("Default cost per order", cfg.defaults.order_cost)?;
    let h = read_f64_or("Default holding cost per unit per year", cfg.defaults.holding_cost)?;
    match InventoryParameters::new(d, s, h) {
        Ok(_) => {
            cfg.defaults.demand = d;
            cfg.defaults.order_cost = s;
            cfg.defaults.holding_cost = h;
            println!("Settings updated.");
        }
        Err(e) => println!("{e}; default inputs unchanged."),
    }
    Ok(())
}

/// Prints the EOQ report for `params`.
pub fn print_report(cfg: &Config, params: &InventoryParameters) {
    let result = params.compute();
    tracing::debug!(?params, ?result, "computed EOQ");
    println!("\n{}", report::render_report(params, &result, Labels::from_config(cfg)));
}

/// Prints at most about `max_rows` evenly spaced samples, always including the last one.
///
/// Skips between rows through the curve's O(1) `nth`, so large demand stays cheap.
pub fn print_curve_table(cfg: &Config, curve: CostCurve, max_rows: usize) {
    let labels = Labels::from_config(cfg);
    let len = curve.len();
    if len == 0 {
        println!("Annual demand below 1 {}: no samples.", labels.quantity);
        return;
    }
    let step = table_step(len, max_rows);
    println!(
        "{:>12} | {:>18} | {:>18} | {:>18}",
        labels.quantity, "holding", "ordering", "total"
    );
    let mut last_printed = 0;
    for s in curve.clone().step_by(step) {
        print_row(s.quantity, s.holding_cost, s.ordering_cost, s.total_cost);
        last_printed = s.quantity;
    }
    if let Some(s) = curve.last().filter(|s| s.quantity != last_printed) {
        print_row(s.quantity, s.holding_cost, s.ordering_cost, s.total_cost);
    }
    if step > 1 {
        println!("{}", thinning_note(step, len, labels.currency));
    }
}

fn thinning_note(step: usize, len: usize, currency: &str) -> String {
    format!("(1 of every {step} samples shown out of {len}, amounts in {currency})")
}

fn demand_prompt(cfg: &Config) -> String {
    format!("Annual demand [{}/year]", cfg.quantity_label)
}

/// Stride that keeps a table of `len` samples near `max_rows` rows.
fn table_step(len: usize, max_rows: usize) -> usize {
    len.div_ceil(max_rows.max(1)).max(1)
}

fn print_row(q: u64, holding: f64, ordering: f64, total: f64) {
    println!(
        "{:>12} | {:>18} | {:>18} | {:>18}",
        q,
        format_amount(holding, 2),
        format_amount(ordering, 2),
        format_amount(total, 2)
    );
}

fn default_export_path(cfg: &Config) -> PathBuf {
    Path::new(&cfg.export_dir).join("eoq_cost_curve.csv")
}

/// Reads D, S and H. Returns None (after telling the user) when they are rejected.
fn read_params(cfg: &Config) -> Result<Option<InventoryParameters>, AppError> {
    let d = read_f64_or(&demand_prompt(cfg), cfg.defaults.demand)?;
    let s = read_f64_or(
        &format!("Cost per order [{}]", cfg.currency_label),
        cfg.defaults.order_cost,
    )?;
    let h = read_f64_or(
        &format!("Holding cost per unit per year [{}]", cfg.currency_label),
        cfg.defaults.holding_cost,
    )?;
    match InventoryParameters::new(d, s, h) {
        Ok(p) => Ok(Some(p)),
        Err(e) => {
            tracing::warn!(demand = d, order_cost = s, holding_cost = h, "rejected inputs");
            println!("{e}");
            Ok(None)
        }
    }
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush().map_err(AppError::Io)?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf).map_err(AppError::Io)?;
    Ok(buf)
}

fn read_f64_or(prompt: &str, default: f64) -> Result<f64, AppError> {
    loop {
        let s = read_line(&format!("{prompt} [{default}]: "))?;
        let s = s.trim();
        if s.is_empty() {
            return Ok(default);
        }
        match parse_number(s) {
            Some(v) => return Ok(v),
            None => println!("Please enter a number."),
        }
    }
}

/// Accepts "50000", "50,000" and "50_000".
fn parse_number(s: &str) -> Option<f64> {
    let cleaned: String = s.chars().filter(|c| !matches!(c, ',' | '_')).collect();
    cleaned.parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_grouped_numbers() {
        assert_eq!(parse_number("50,000"), Some(50_000.0));
        assert_eq!(parse_number("1_000.5"), Some(1000.5));
        assert_eq!(parse_number("abc"), None);
    }

    #[test]
    fn table_step_keeps_rows_bounded() {
        assert_eq!(table_step(5, 20), 1);
        assert_eq!(table_step(1000, 20), 50);
        assert_eq!(table_step(usize::MAX, 20), usize::MAX.div_ceil(20));
        assert_eq!(table_step(10, 0), 10);
    }

    #[test]
    fn thinned_rows_stay_cheap_for_huge_demand() {
        let curve = InventoryParameters::new(1e18, 1.0, 1.0).unwrap().cost_curve();
        let step = table_step(curve.len(), CURVE_TABLE_ROWS);
        let rows: Vec<u64> = curve.clone().step_by(step).map(|s| s.quantity).collect();
        assert!(rows.len() <= CURVE_TABLE_ROWS);
        assert_eq!(curve.last().map(|s| s.quantity), Some(1_000_000_000_000_000_000));
    }

    #[test]
    fn prompts_and_notes_follow_configured_labels() {
        let cfg = Config {
            quantity_label: "box".into(),
            ..Config::default()
        };
        assert_eq!(demand_prompt(&cfg), "Annual demand [box/year]");
        assert_eq!(
            thinning_note(2, 40, "EUR"),
            "(1 of every 2 samples shown out of 40, amounts in EUR)"
        );
    }

    #[test]
    fn export_path_uses_configured_dir() {
        let cfg = Config {
            export_dir: "out".into(),
            ..Config::default()
        };
        assert_eq!(default_export_path(&cfg), Path::new("out").join("eoq_cost_curve.csv"));
    }
}

use crate::config::{Config, ConfigError};
use crate::export::ExportError;
use crate::inventory::EoqError;
use crate::ui_cli;
use crate::ui_cli::MenuChoice;

/// Errors that can stop the CLI.
#[derive(Debug)]
pub enum AppError {
    /// Terminal or file I/O failure
    Io(std::io::Error),
    /// Settings load/save failure
    Config(ConfigError),
    /// Inputs rejected by the EOQ engine
    Eoq(EoqError),
    /// CSV export failure
    Export(ExportError),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(e) => write!(f, "I/O error: {e}"),
            AppError::Config(e) => write!(f, "settings error: {e}"),
            AppError::Eoq(e) => write!(f, "EOQ error: {e}"),
            AppError::Export(e) => write!(f, "export error: {e}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        AppError::Io(value)
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        AppError::Config(value)
    }
}

impl From<EoqError> for AppError {
    fn from(value: EoqError) -> Self {
        AppError::Eoq(value)
    }
}

impl From<ExportError> for AppError {
    fn from(value: ExportError) -> Self {
        AppError::Export(value)
    }
}

/// Main loop of the interactive CLI.
pub fn run(config: &mut Config) -> Result<(), AppError> {
    loop {
        match ui_cli::main_menu()? {
            MenuChoice::Compute => ui_cli::handle_compute(config)?,
            MenuChoice::CostCurve => ui_cli::handle_cost_curve(config)?,
            MenuChoice::Export => ui_cli::handle_export(config)?,
            MenuChoice::Settings => {
                ui_cli::handle_settings(config)?;
                config.save()?;
            }
            MenuChoice::Exit => {
                config.save()?;
                println!("Bye.");
                break;
            }
        }
    }
    Ok(())
}

use std::fs;
use std::path::Path;

use crate::inventory::CostCurve;

/// Errors raised while exporting the cost curve.
#[derive(Debug)]
pub enum ExportError {
    /// File I/O failure
    Io(std::io::Error),
    /// CSV writer failure
    Csv(csv::Error),
}

impl std::fmt::Display for ExportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportError::Io(e) => write!(f, "file I/O error: {e}"),
            ExportError::Csv(e) => write!(f, "CSV error: {e}"),
        }
    }
}

impl std::error::Error for ExportError {}

impl From<std::io::Error> for ExportError {
    fn from(value: std::io::Error) -> Self {
        ExportError::Io(value)
    }
}

impl From<csv::Error> for ExportError {
    fn from(value: csv::Error) -> Self {
        ExportError::Csv(value)
    }
}

/// Writes one CSV row per curve sample and returns the number of rows written.
///
/// Header: `quantity,holding_cost,ordering_cost,total_cost`. Missing parent
/// directories are created.
pub fn write_cost_curve_csv(path: impl AsRef<Path>, curve: CostCurve) -> Result<usize, ExportError> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let mut wtr = csv::Writer::from_path(path)?;
    let mut rows = 0;
    for sample in curve {
        wtr.serialize(sample)?;
        rows += 1;
    }
    // an empty curve still gets its header
    if rows == 0 {
        wtr.write_record(["quantity", "holding_cost", "ordering_cost", "total_cost"])?;
    }
    wtr.flush()?;
    tracing::info!(path = %path.display(), rows, "exported cost curve");
    Ok(rows)
}

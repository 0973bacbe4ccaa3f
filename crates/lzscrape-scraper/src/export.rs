//! Output of collected rows: the CSV artifact and a console table.

use std::fmt::Write as _;
use std::path::Path;

use lzscrape_core::{ProductField, ProductRecord};

use crate::error::ScraperError;

/// Longest cell rendered in the console table before it is cut with `...`.
const MAX_CELL_WIDTH: usize = 40;

/// Writes `records` to `path` as CSV with a header row, replacing any
/// existing file. Returns the number of data rows written.
///
/// The header is written even when `records` is empty.
///
/// # Errors
///
/// Returns [`ScraperError::Csv`] if the file cannot be created or a row
/// cannot be written, and [`ScraperError::Io`] if the final flush fails.
pub fn write_csv(path: &Path, records: &[ProductRecord]) -> Result<usize, ScraperError> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(ProductField::ALL.map(ProductField::column_header))?;
    for record in records {
        writer.write_record(record.values())?;
    }
    writer.flush().map_err(|e| ScraperError::Io {
        path: path.display().to_string(),
        source: e,
    })?;

    tracing::info!(path = %path.display(), rows = records.len(), "CSV written");
    Ok(records.len())
}

/// Renders `records` as a fixed-width text table with a leading row number
/// column and a trailing row count.
#[must_use]
pub fn render_table(records: &[ProductRecord]) -> String {
    let index_width = records.len().saturating_sub(1).to_string().len().max(1);

    let widths: Vec<usize> = ProductField::ALL
        .iter()
        .map(|&field| {
            records
                .iter()
                .map(|r| r.get(field).chars().count())
                .chain(std::iter::once(field.column_header().chars().count()))
                .max()
                .unwrap_or(0)
                .min(MAX_CELL_WIDTH)
        })
        .collect();

    let mut out = String::new();

    let _ = write!(out, "{:<index_width$}", "");
    for (field, width) in ProductField::ALL.iter().zip(&widths) {
        let _ = write!(out, "  {:<width$}", field.column_header());
    }
    out.push('\n');

    for (row, record) in records.iter().enumerate() {
        let _ = write!(out, "{row:<index_width$}");
        for (value, width) in record.values().iter().zip(&widths) {
            let _ = write!(out, "  {:<width$}", truncate(value, *width));
        }
        out.push('\n');
    }

    let _ = write!(out, "\n[{} rows x {} columns]", records.len(), widths.len());
    out
}

fn truncate(value: &str, width: usize) -> String {
    if value.chars().count() > width {
        let keep = width.saturating_sub(3);
        format!("{}...", value.chars().take(keep).collect::<String>())
    } else {
        value.to_owned()
    }
}

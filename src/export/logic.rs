// src/export/logic.rs

use crate::core::aggregate::chart_series;
use crate::core::view::{ViewLogic, ViewQuery};
use crate::db::SessionStore;
use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::{ChartExport, EntryExport};
use crate::ui::messages::warning;
use crate::utils::path::expand_tilde;
use std::io::BufRead;
use tracing::debug;

/// Logica di alto livello per l'export.
pub struct ExportLogic;

impl ExportLogic {
    /// Export the filtered view.
    ///
    /// - `chart == false`: one row per entry, with derived duration
    /// - `chart == true`: one row per `(date, habit)` total
    ///
    /// Returns the number of rows written (0 when the view is empty and no
    /// file is created).
    pub fn export<R: BufRead>(
        store: &SessionStore,
        query: &ViewQuery,
        format: ExportFormat,
        file: &str,
        chart: bool,
        force: bool,
        input: &mut R,
    ) -> AppResult<usize> {
        let path = expand_tilde(file);

        let entries = ViewLogic::load(store, query)?;
        if entries.is_empty() {
            warning("No entries found for selected filters, nothing exported.");
            return Ok(0);
        }

        ensure_writable(&path, force, input)?;
        debug!(format = format.as_str(), chart, path = %path.display(), "exporting view");

        if chart {
            let rows: Vec<ChartExport> = chart_series(&entries).iter().map(Into::into).collect();
            write_rows(&rows, format, &path)?;
            Ok(rows.len())
        } else {
            let rows: Vec<EntryExport> = entries.iter().map(Into::into).collect();
            write_rows(&rows, format, &path)?;
            Ok(rows.len())
        }
    }
}

fn write_rows<T: serde::Serialize>(
    rows: &[T],
    format: ExportFormat,
    path: &std::path::Path,
) -> AppResult<()> {
    match format {
        ExportFormat::Csv => export_csv(rows, path),
        ExportFormat::Json => export_json(rows, path),
    }
}

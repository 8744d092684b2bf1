// src/export/logic.rs

use crate::core::events::EventBook;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::EventExport;
use crate::ui::messages::warning;
use crate::utils::date::parse_period;
use crate::utils::path::{expand_tilde, is_absolute};

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Rows selected by `range` (`None`, `"all"`, or a period expression).
    pub fn collect(book: &EventBook, range: Option<&str>) -> AppResult<Vec<EventExport>> {
        let bounds = match range {
            None => None,
            Some(r) => parse_period(r)?,
        };

        Ok(book
            .list(bounds)
            .into_iter()
            .map(|(i, e)| EventExport::from_event(i, e))
            .collect())
    }

    /// Export events.
    ///
    /// - `format`: csv | json
    /// - `file`: absolute output path
    /// - `range`: `None`, `"all"` or `YYYY`, `YYYY-MM`, `YYYY-MM-DD` and
    ///   `start:end` ranges of the same shape
    ///
    /// Returns the number of exported rows.
    pub fn export(
        book: &EventBook,
        format: ExportFormat,
        file: &str,
        range: Option<&str>,
        force: bool,
    ) -> AppResult<usize> {
        if !is_absolute(file) {
            return Err(AppError::Export(format!(
                "output file path must be absolute: {file}"
            )));
        }
        let path = expand_tilde(file);

        let rows = Self::collect(book, range)?;
        if rows.is_empty() {
            warning("No events found for selected range.");
            return Ok(0);
        }

        ensure_writable(&path, force)?;

        match format {
            ExportFormat::Csv => export_csv(&rows, &path)?,
            ExportFormat::Json => export_json(&rows, &path)?,
        }

        Ok(rows.len())
    }
}

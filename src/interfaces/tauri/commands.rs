//! The four button-triggered actions. Each command checks its
//! precondition, delegates to a use case, and stores the result back
//! into shared state; the frontend turns return values and errors
//! into pop-ups.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use tauri::{AppHandle, State};
use tauri_plugin_dialog::DialogExt;
use tracing::{info, warn};

use crate::domain::chart::ChartData;
use crate::domain::error::{AppError, Result};
use crate::domain::schema::SUMMARY_TABLE;

use super::types::{LoadReport, TransformReport};
use super::AppState;

/// Open a native file dialog filtered to CSV files. Returns the chosen
/// path, or None when the user cancels. The dialog result is mirrored
/// into state either way: cancelling clears any previous selection.
#[tauri::command]
pub async fn select_source_file(
    app: AppHandle,
    state: State<'_, Arc<AppState>>,
) -> Result<Option<String>> {
    let picked = app
        .dialog()
        .file()
        .add_filter("CSV files", &["csv"])
        .set_title("Choose a CSV file")
        .blocking_pick_file();

    let Some(file) = picked else {
        warn!("File selection cancelled");
        record_selection(&state.selected_path, None);
        return Ok(None);
    };

    let path = file
        .into_path()
        .map_err(|e| AppError::IoError(format!("Unusable dialog selection: {}", e)))?;

    info!(path = %path.display(), "Source file selected");
    Ok(record_selection(&state.selected_path, Some(path)))
}

/// Overwrite the shared selection with the dialog result, so a cancel
/// leaves no stale path behind for a later transform to re-use.
fn record_selection(slot: &Mutex<Option<PathBuf>>, picked: Option<PathBuf>) -> Option<String> {
    let display = picked.as_ref().map(|p| p.display().to_string());
    *slot.lock().unwrap() = picked;
    display
}

/// Parse, clean, filter and aggregate the selected file, overwriting
/// any previously transformed summary.
#[tauri::command]
pub async fn transform_data(state: State<'_, Arc<AppState>>) -> Result<TransformReport> {
    let path = state
        .selected_path
        .lock()
        .unwrap()
        .clone()
        .ok_or_else(|| AppError::Precondition("Please upload a CSV file first".to_string()))?;

    let outcome = state.transform_use_case.execute(&path).map_err(|e| {
        warn!(path = %path.display(), error = %e, "Transform failed");
        e
    })?;

    info!(
        source_rows = outcome.source_rows,
        dropped_rows = outcome.dropped_rows,
        groups = outcome.table.len(),
        "Data transformed"
    );
    if outcome.table.is_empty() {
        warn!("Category filter matched no rows; summary is empty");
    }

    let report = TransformReport {
        source_rows: outcome.source_rows,
        dropped_rows: outcome.dropped_rows,
        group_count: outcome.table.len(),
    };
    *state.summary.lock().unwrap() = Some(outcome.table);

    Ok(report)
}

/// Write the summary into SQLite, replacing any prior table.
#[tauri::command]
pub async fn load_data(state: State<'_, Arc<AppState>>) -> Result<LoadReport> {
    let table = state
        .summary
        .lock()
        .unwrap()
        .clone()
        .ok_or_else(|| AppError::Precondition("Please transform the data first".to_string()))?;

    let rows_written = state.load_use_case.execute(&table).await.map_err(|e| {
        warn!(error = %e, "Load failed");
        e
    })?;

    info!(rows_written, table = SUMMARY_TABLE, "Summary loaded into SQLite");

    Ok(LoadReport {
        table_name: SUMMARY_TABLE.to_string(),
        rows_written,
    })
}

/// Build the top-5 bar chart payload for the frontend to render.
#[tauri::command]
pub async fn visualize_data(state: State<'_, Arc<AppState>>) -> Result<ChartData> {
    let table = state
        .summary
        .lock()
        .unwrap()
        .clone()
        .ok_or_else(|| AppError::Precondition("Please transform the data first".to_string()))?;

    let chart = state.visualize_use_case.execute(&table);
    info!(bars = chart.bars.len(), "Chart data prepared");

    Ok(chart)
}

#[cfg(test)]
mod tests {
    use super::record_selection;
    use std::path::PathBuf;
    use std::sync::Mutex;

    #[test]
    fn test_cancel_clears_previous_selection() {
        let slot = Mutex::new(Some(PathBuf::from("/data/old.csv")));

        assert_eq!(record_selection(&slot, None), None);
        assert!(slot.lock().unwrap().is_none());
    }

    #[test]
    fn test_selection_overwrites_previous_path() {
        let slot = Mutex::new(Some(PathBuf::from("/data/old.csv")));

        let shown = record_selection(&slot, Some(PathBuf::from("/data/new.csv")));
        assert_eq!(shown.as_deref(), Some("/data/new.csv"));
        assert_eq!(*slot.lock().unwrap(), Some(PathBuf::from("/data/new.csv")));
    }
}

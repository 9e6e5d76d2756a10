use std::fs;
use std::path::{Path, PathBuf};
use tauri::{AppHandle, Manager};

pub fn resolve_app_data_dir(app_handle: &AppHandle) -> std::io::Result<PathBuf> {
    let app_data_dir = app_handle
        .path()
        .app_data_dir()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e.to_string()))?;
    ensure_dir(&app_data_dir)?;
    Ok(app_data_dir)
}

/// sqlx connection URL for a SQLite file path.
pub fn database_url(db_path: &Path) -> String {
    let db_path_str = db_path.to_string_lossy().replace('\\', "/");
    format!("sqlite://{}", db_path_str)
}

fn ensure_dir(path: &Path) -> std::io::Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}

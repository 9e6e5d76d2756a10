mod application;
mod domain;
mod infrastructure;
mod interfaces;

use crate::interfaces::tauri::{load_data, select_source_file, transform_data, visualize_data};

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    let _ = tracing_subscriber::fmt().with_env_filter("info").try_init();

    tauri::Builder::default()
        .plugin(tauri_plugin_dialog::init())
        .setup(|app| crate::infrastructure::bootstrap::setup(app))
        .invoke_handler(tauri::generate_handler![
            select_source_file,
            transform_data,
            load_data,
            visualize_data
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}

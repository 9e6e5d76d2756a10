use std::error::Error;
use std::sync::{Arc, Mutex};

use tauri::Manager;
use tracing::{error, info};

use crate::application::{LoadUseCase, TransformUseCase, VisualizeUseCase};
use crate::domain::schema::{DATABASE_FILE, TOP_GROUP_LIMIT};
use crate::infrastructure::csv::CsvParser;
use crate::infrastructure::db::sqlite::SummaryRepository;
use crate::infrastructure::storage::{database_url, resolve_app_data_dir};
use crate::interfaces::tauri::AppState;

pub fn setup(app: &mut tauri::App) -> Result<(), Box<dyn Error>> {
    let app_handle = app.handle().clone();

    let app_data_dir = resolve_app_data_dir(&app_handle).map_err(|err| {
        error!(error = %err, "Failed to resolve app data dir");
        err
    })?;

    let db_path = app_data_dir.join(DATABASE_FILE);
    let db_url = database_url(&db_path);

    tauri::async_runtime::block_on(async move {
        let repository = SummaryRepository::init(&db_url)
            .await
            .expect("Failed to initialize database");
        let repository = Arc::new(repository);

        info!(db = %db_path.display(), "Database ready");

        let state = AppState {
            transform_use_case: TransformUseCase::new(CsvParser::new()),
            load_use_case: LoadUseCase::new(repository),
            visualize_use_case: VisualizeUseCase::new(TOP_GROUP_LIMIT),
            selected_path: Mutex::new(None),
            summary: Mutex::new(None),
        };
        app_handle.manage(Arc::new(state));
    });

    Ok(())
}

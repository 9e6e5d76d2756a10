use std::path::PathBuf;
use std::sync::Mutex;

use crate::application::{LoadUseCase, TransformUseCase, VisualizeUseCase};
use crate::domain::summary::SummaryTable;

/// Process-wide state shared by the four actions. At most one in-flight
/// source path and one summary table at a time; re-invoking a stage
/// overwrites what is here.
pub struct AppState {
    pub transform_use_case: TransformUseCase,
    pub load_use_case: LoadUseCase,
    pub visualize_use_case: VisualizeUseCase,
    pub selected_path: Mutex<Option<PathBuf>>,
    pub summary: Mutex<Option<SummaryTable>>,
}

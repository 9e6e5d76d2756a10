pub(crate) mod commands;
pub(crate) mod state;
pub mod types;

pub use commands::{load_data, select_source_file, transform_data, visualize_data};
pub use state::AppState;

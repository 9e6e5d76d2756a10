use serde::{Deserialize, Serialize};

/// What the transform stage tells the user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransformReport {
    pub source_rows: usize,
    pub dropped_rows: usize,
    pub group_count: usize,
}

/// What the load stage tells the user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadReport {
    pub table_name: String,
    pub rows_written: u64,
}

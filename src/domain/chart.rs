use serde::{Deserialize, Serialize};

/// A single bar: entity name and its aggregated value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartBar {
    pub label: String,
    pub value: f64,
}

/// Presentational payload for the bar chart. The frontend renders it
/// as-is; nothing here is persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartData {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    /// Degrees to rotate the category labels by.
    pub label_rotation: u32,
    pub bars: Vec<ChartBar>,
}

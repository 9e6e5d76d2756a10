use std::cmp::Ordering;

use crate::domain::chart::{ChartBar, ChartData};
use crate::domain::summary::SummaryTable;

/// Build the bar-chart payload: groups sorted descending by value,
/// capped at `limit`. Presentational only.
pub struct VisualizeUseCase {
    limit: usize,
}

impl VisualizeUseCase {
    pub fn new(limit: usize) -> Self {
        Self { limit }
    }

    pub fn execute(&self, table: &SummaryTable) -> ChartData {
        let mut sorted: Vec<_> = table.rows.iter().collect();
        // Stable sort: ties keep their group order.
        sorted.sort_by(|a, b| b.value.partial_cmp(&a.value).unwrap_or(Ordering::Equal));

        let bars = sorted
            .into_iter()
            .take(self.limit)
            .map(|row| ChartBar {
                label: row.entity.clone(),
                value: row.value,
            })
            .collect();

        ChartData {
            title: format!("Top {} Industries by Total Income", self.limit),
            x_label: "Industry".to_string(),
            y_label: "Total Income (Millions)".to_string(),
            label_rotation: 45,
            bars,
        }
    }
}

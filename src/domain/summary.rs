use serde::{Deserialize, Serialize};

/// One aggregated group: the summed value for a (period, entity) pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryRow {
    pub period: String,
    pub entity: String,
    pub value: f64,
}

/// The in-memory aggregated table shared between the transform, load
/// and visualize stages. Rows are kept in ascending (period, entity)
/// key order as produced by the transformer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SummaryTable {
    pub rows: Vec<SummaryRow>,
}

impl SummaryTable {
    pub fn new(rows: Vec<SummaryRow>) -> Self {
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

use std::sync::Arc;

use crate::domain::error::Result;
use crate::domain::summary::SummaryTable;
use crate::infrastructure::db::sqlite::SummaryRepository;

/// Write the aggregated table to SQLite, replacing the previous one.
pub struct LoadUseCase {
    repository: Arc<SummaryRepository>,
}

impl LoadUseCase {
    pub fn new(repository: Arc<SummaryRepository>) -> Self {
        Self { repository }
    }

    /// Returns the number of rows written.
    pub async fn execute(&self, table: &SummaryTable) -> Result<u64> {
        self.repository.replace_summary(table).await
    }
}

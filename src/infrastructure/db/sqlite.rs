use crate::domain::error::{AppError, Result};
use crate::domain::schema::SUMMARY_TABLE;
use crate::domain::summary::{SummaryRow, SummaryTable};
use sqlx::{
    sqlite::{SqliteConnectOptions, SqlitePool},
    Pool, Sqlite,
};
use std::str::FromStr;

/// Repository for the aggregated summary table. The pool is created
/// once at bootstrap; every load replaces the table wholesale.
pub struct SummaryRepository {
    pool: Pool<Sqlite>,
}

impl SummaryRepository {
    pub async fn init(database_url: &str) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(database_url)
            .map_err(|e| {
                AppError::DatabaseError(format!("Failed to parse connection string: {}", e))
            })?
            .create_if_missing(true);

        let pool = SqlitePool::connect_with(options)
            .await
            .map_err(|e| AppError::DatabaseError(format!("Failed to connect: {}", e)))?;

        Ok(Self { pool })
    }

    /// Drop and recreate the summary table, then insert every row.
    /// Invoking this twice leaves exactly one table with the latest
    /// content. Returns the number of rows written.
    pub async fn replace_summary(&self, table: &SummaryTable) -> Result<u64> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| AppError::DatabaseError(format!("Failed to begin transaction: {}", e)))?;

        sqlx::query(&format!("DROP TABLE IF EXISTS {}", SUMMARY_TABLE))
            .execute(&mut *tx)
            .await
            .map_err(|e| AppError::DatabaseError(format!("Failed to drop old table: {}", e)))?;

        sqlx::query(&format!(
            "CREATE TABLE {} (
                Year TEXT NOT NULL,
                Industry_name_NZSIOC TEXT NOT NULL,
                Value REAL NOT NULL
            )",
            SUMMARY_TABLE
        ))
        .execute(&mut *tx)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to create table: {}", e)))?;

        let mut written = 0u64;
        for row in &table.rows {
            sqlx::query(&format!(
                "INSERT INTO {} (Year, Industry_name_NZSIOC, Value) VALUES (?, ?, ?)",
                SUMMARY_TABLE
            ))
            .bind(&row.period)
            .bind(&row.entity)
            .bind(row.value)
            .execute(&mut *tx)
            .await
            .map_err(|e| AppError::DatabaseError(format!("Failed to insert row: {}", e)))?;
            written += 1;
        }

        tx.commit()
            .await
            .map_err(|e| AppError::DatabaseError(format!("Failed to commit: {}", e)))?;

        Ok(written)
    }

    /// Read the stored summary back, in key order.
    pub async fn fetch_summary(&self) -> Result<Vec<SummaryRow>> {
        sqlx::query_as::<_, SummaryEntity>(&format!(
            "SELECT Year, Industry_name_NZSIOC, Value FROM {} ORDER BY Year, Industry_name_NZSIOC",
            SUMMARY_TABLE
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to fetch summary: {}", e)))
        .map(|entities| entities.into_iter().map(|e| e.into()).collect())
    }
}

// Internal entity for database mapping
#[derive(sqlx::FromRow)]
struct SummaryEntity {
    #[sqlx(rename = "Year")]
    year: String,
    #[sqlx(rename = "Industry_name_NZSIOC")]
    industry_name_nzsioc: String,
    #[sqlx(rename = "Value")]
    value: f64,
}

impl From<SummaryEntity> for SummaryRow {
    fn from(e: SummaryEntity) -> Self {
        Self {
            period: e.year,
            entity: e.industry_name_nzsioc,
            value: e.value,
        }
    }
}

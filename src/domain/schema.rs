// ============================================================
// SOURCE SCHEMA
// ============================================================
// Column names and literals the pipeline expects verbatim in the
// source CSV, plus the output table layout.

/// Column holding the category label a row belongs to.
pub const CATEGORY_COLUMN: &str = "Variable_name";

/// Column holding the raw (possibly non-numeric) value.
pub const VALUE_COLUMN: &str = "Value";

/// Column holding the temporal grouping key.
pub const PERIOD_COLUMN: &str = "Year";

/// Column holding the entity grouping key.
pub const ENTITY_COLUMN: &str = "Industry_name_NZSIOC";

/// Only rows with this category value are aggregated.
pub const CATEGORY_FILTER: &str = "Total income";

/// SQLite database file name, created under the app data directory.
pub const DATABASE_FILE: &str = "etl_database.db";

/// Name of the table the loader writes. Always replaced, never appended.
pub const SUMMARY_TABLE: &str = "total_income_summary";

/// How many groups the visualizer keeps after sorting by value.
pub const TOP_GROUP_LIMIT: usize = 5;

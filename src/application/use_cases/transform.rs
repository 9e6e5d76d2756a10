// ============================================================
// TRANSFORM USE CASE
// ============================================================
// Parse the selected CSV, clean it, filter to the fixed category and
// aggregate values per (period, entity) group. Pure except for the
// file read; the interactive layer only invokes and displays.

use std::collections::BTreeMap;
use std::path::Path;

use tracing::debug;

use crate::domain::error::{AppError, Result};
use crate::domain::schema::{
    CATEGORY_COLUMN, CATEGORY_FILTER, ENTITY_COLUMN, PERIOD_COLUMN, VALUE_COLUMN,
};
use crate::domain::summary::{SummaryRow, SummaryTable};
use crate::infrastructure::csv::{CsvParser, CsvTable};

/// Result of one transform run.
#[derive(Debug, Clone)]
pub struct TransformOutcome {
    pub table: SummaryTable,
    /// Data rows read from the source file.
    pub source_rows: usize,
    /// Rows discarded for a non-numeric value or missing grouping key.
    pub dropped_rows: usize,
}

pub struct TransformUseCase {
    parser: CsvParser,
}

impl TransformUseCase {
    pub fn new(parser: CsvParser) -> Self {
        Self { parser }
    }

    pub fn execute(&self, path: &Path) -> Result<TransformOutcome> {
        let table = self.parser.parse_file(path)?;
        Self::aggregate(&table)
    }

    /// Clean, filter and aggregate an already-parsed table.
    pub fn aggregate(table: &CsvTable) -> Result<TransformOutcome> {
        let category_col = require_column(table, CATEGORY_COLUMN)?;
        let value_col = require_column(table, VALUE_COLUMN)?;
        let period_col = require_column(table, PERIOD_COLUMN)?;
        let entity_col = require_column(table, ENTITY_COLUMN)?;

        let mut dropped_rows = 0usize;
        let mut groups: BTreeMap<(String, String), f64> = BTreeMap::new();

        for row in &table.rows {
            let value = table.field(row, value_col).and_then(parse_numeric);
            let entity = table.field(row, entity_col).unwrap_or("");
            let period = table.field(row, period_col).unwrap_or("");

            let Some(value) = value else {
                debug!(row = row.index, "Dropped row: non-numeric value");
                dropped_rows += 1;
                continue;
            };
            if entity.is_empty() || period.is_empty() {
                debug!(row = row.index, "Dropped row: missing grouping key");
                dropped_rows += 1;
                continue;
            }

            if table.field(row, category_col) != Some(CATEGORY_FILTER) {
                continue;
            }

            *groups
                .entry((period.to_string(), entity.to_string()))
                .or_insert(0.0) += value;
        }

        // BTreeMap iteration gives ascending key order, one row per group.
        let rows = groups
            .into_iter()
            .map(|((period, entity), value)| SummaryRow {
                period,
                entity,
                value,
            })
            .collect();

        Ok(TransformOutcome {
            table: SummaryTable::new(rows),
            source_rows: table.rows.len(),
            dropped_rows,
        })
    }
}

/// Coerce a raw field to a number; anything unparsable is missing.
/// A literal "NaN" parses in Rust but would poison its group sum, so
/// it counts as missing too.
fn parse_numeric(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| !v.is_nan())
}

fn require_column(table: &CsvTable, name: &str) -> Result<usize> {
    table.column(name).ok_or_else(|| {
        AppError::ParseError(format!("CSV is missing expected column '{}'", name))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "Year,Industry_name_NZSIOC,Variable_name,Value";

    fn aggregate(content: &str) -> TransformOutcome {
        let table = CsvParser::new().parse_content(content).unwrap();
        TransformUseCase::aggregate(&table).unwrap()
    }

    #[test]
    fn test_worked_example_sums_matching_rows() {
        let outcome = aggregate(&format!(
            "{HEADER}\n\
             2022,Retail,Total income,100\n\
             2022,Retail,Total income,50\n\
             2022,Retail,Expenses,30"
        ));

        assert_eq!(
            outcome.table.rows,
            vec![SummaryRow {
                period: "2022".to_string(),
                entity: "Retail".to_string(),
                value: 150.0,
            }]
        );
        assert_eq!(outcome.source_rows, 3);
        assert_eq!(outcome.dropped_rows, 0);
    }

    #[test]
    fn test_non_numeric_values_are_dropped() {
        let outcome = aggregate(&format!(
            "{HEADER}\n\
             2022,Retail,Total income,abc\n\
             2022,Retail,Total income,75"
        ));

        assert_eq!(outcome.table.len(), 1);
        assert_eq!(outcome.table.rows[0].value, 75.0);
        assert_eq!(outcome.dropped_rows, 1);
    }

    #[test]
    fn test_nan_values_are_dropped() {
        let outcome = aggregate(&format!(
            "{HEADER}\n\
             2022,Retail,Total income,NaN\n\
             2022,Retail,Total income,nan\n\
             2022,Retail,Total income,100"
        ));

        assert_eq!(outcome.table.len(), 1);
        assert_eq!(outcome.table.rows[0].value, 100.0);
        assert_eq!(outcome.dropped_rows, 2);
    }

    #[test]
    fn test_missing_entity_is_dropped() {
        let outcome = aggregate(&format!(
            "{HEADER}\n\
             2022,,Total income,10\n\
             2022,Mining,Total income,20"
        ));

        assert_eq!(outcome.table.len(), 1);
        assert_eq!(outcome.table.rows[0].entity, "Mining");
        assert_eq!(outcome.dropped_rows, 1);
    }

    #[test]
    fn test_one_row_per_distinct_group() {
        let outcome = aggregate(&format!(
            "{HEADER}\n\
             2022,Retail,Total income,1\n\
             2023,Retail,Total income,2\n\
             2022,Mining,Total income,3\n\
             2022,Retail,Total income,4"
        ));

        let keys: Vec<(&str, &str)> = outcome
            .table
            .rows
            .iter()
            .map(|r| (r.period.as_str(), r.entity.as_str()))
            .collect();
        assert_eq!(
            keys,
            vec![("2022", "Mining"), ("2022", "Retail"), ("2023", "Retail")]
        );
        assert_eq!(outcome.table.rows[1].value, 5.0);
    }

    #[test]
    fn test_aggregation_is_order_independent() {
        let forward = aggregate(&format!(
            "{HEADER}\n\
             2022,Retail,Total income,100\n\
             2023,Mining,Total income,7\n\
             2022,Retail,Total income,50"
        ));
        let shuffled = aggregate(&format!(
            "{HEADER}\n\
             2022,Retail,Total income,50\n\
             2022,Retail,Total income,100\n\
             2023,Mining,Total income,7"
        ));

        assert_eq!(forward.table, shuffled.table);
    }

    #[test]
    fn test_unmatched_category_yields_empty_table() {
        let outcome = aggregate(&format!(
            "{HEADER}\n\
             2022,Retail,Expenses,30"
        ));

        assert!(outcome.table.is_empty());
        assert_eq!(outcome.dropped_rows, 0);
    }

    #[test]
    fn test_missing_column_is_a_parse_error() {
        let table = CsvParser::new()
            .parse_content("Year,Variable_name,Value\n2022,Total income,1")
            .unwrap();
        let err = TransformUseCase::aggregate(&table).unwrap_err();
        match err {
            AppError::ParseError(msg) => assert!(msg.contains("Industry_name_NZSIOC")),
            other => panic!("expected ParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_execute_reads_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("source.csv");
        std::fs::write(
            &path,
            format!("{HEADER}\n2022,Retail,Total income,100.5"),
        )
        .unwrap();

        let use_case = TransformUseCase::new(CsvParser::new());
        let outcome = use_case.execute(&path).unwrap();
        assert_eq!(outcome.table.rows[0].value, 100.5);
    }
}

// ============================================================
// CSV INFRASTRUCTURE LAYER
// ============================================================
// CSV file parsing with encoding fallback

mod csv_parser;

pub use csv_parser::{CsvParser, CsvRow, CsvTable};

// ============================================================
// CSV PARSER
// ============================================================
// Parse the whole source file into memory. Header names are kept
// verbatim; the transformer looks columns up by their exact name.

use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};

use crate::domain::error::AppError;

/// One parsed row. Values are aligned with the table headers.
#[derive(Debug, Clone)]
pub struct CsvRow {
    pub index: usize,
    values: Vec<String>,
}

/// A fully parsed CSV file: the header record plus every data row.
#[derive(Debug, Clone)]
pub struct CsvTable {
    pub headers: Vec<String>,
    pub rows: Vec<CsvRow>,
}

impl CsvTable {
    /// Position of a header, matched verbatim.
    pub fn column(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Value of `column` in `row`, or None when the row is short.
    pub fn field<'a>(&self, row: &'a CsvRow, column: usize) -> Option<&'a str> {
        row.values.get(column).map(String::as_str)
    }
}

/// CSV parser with encoding fallback
pub struct CsvParser {
    /// Delimiter character (default: comma)
    delimiter: u8,

    /// Whether to trim whitespace from values
    trim: bool,
}

impl Default for CsvParser {
    fn default() -> Self {
        Self {
            delimiter: b',',
            trim: true,
        }
    }
}

impl CsvParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a CSV file and return the full table
    pub fn parse_file(&self, path: &Path) -> Result<CsvTable, AppError> {
        let content = self.read_with_encoding_fallback(path)?;
        self.parse_content(&content)
    }

    /// Parse CSV content from a string
    pub fn parse_content(&self, content: &str) -> Result<CsvTable, AppError> {
        let mut reader = ReaderBuilder::new()
            .delimiter(self.delimiter)
            .trim(if self.trim { Trim::All } else { Trim::None })
            .flexible(true) // Allow rows with different lengths
            .from_reader(content.as_bytes());

        let headers = reader
            .headers()
            .map_err(|e| AppError::ParseError(format!("Failed to read CSV headers: {}", e)))?
            .clone();

        let mut rows = Vec::new();
        for (index, result) in reader.records().enumerate() {
            let record = result.map_err(|e| {
                AppError::ParseError(format!("Failed to parse CSV row {}: {}", index + 1, e))
            })?;
            rows.push(Self::to_row(index, &headers, &record));
        }

        Ok(CsvTable {
            headers: headers.iter().map(str::to_string).collect(),
            rows,
        })
    }

    /// Read the file as UTF-8, falling back to Windows-1252 for the
    /// legacy exports that are not valid UTF-8.
    fn read_with_encoding_fallback(&self, path: &Path) -> Result<String, AppError> {
        let bytes = std::fs::read(path)
            .map_err(|e| AppError::IoError(format!("Failed to read file: {}", e)))?;

        match String::from_utf8(bytes) {
            Ok(content) => Ok(content),
            Err(err) => {
                let (content, _, _) = encoding_rs::WINDOWS_1252.decode(err.as_bytes());
                Ok(content.into_owned())
            }
        }
    }

    fn to_row(index: usize, headers: &StringRecord, record: &StringRecord) -> CsvRow {
        let values = (0..headers.len())
            .map(|idx| record.get(idx).unwrap_or("").to_string())
            .collect();
        CsvRow { index, values }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_csv() {
        let content = "name,age,city\nAlice,30,NYC\nBob,25,LA";
        let parser = CsvParser::new();
        let table = parser.parse_content(content).unwrap();

        assert_eq!(table.headers, vec!["name", "age", "city"]);
        assert_eq!(table.rows.len(), 2);
        let age = table.column("age").unwrap();
        assert_eq!(table.field(&table.rows[0], age), Some("30"));
    }

    #[test]
    fn test_short_rows_pad_with_empty() {
        let content = "a,b,c\n1,2";
        let table = CsvParser::new().parse_content(content).unwrap();
        let c = table.column("c").unwrap();
        assert_eq!(table.field(&table.rows[0], c), Some(""));
    }

    #[test]
    fn test_values_are_trimmed() {
        let content = "a,b\n x , y ";
        let table = CsvParser::new().parse_content(content).unwrap();
        let a = table.column("a").unwrap();
        assert_eq!(table.field(&table.rows[0], a), Some("x"));
    }

    #[test]
    fn test_windows_1252_fallback() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("latin.csv");
        // "café" in Windows-1252: 0xE9 is not valid UTF-8
        std::fs::write(&path, b"name\ncaf\xe9").unwrap();

        let table = CsvParser::new().parse_file(&path).unwrap();
        let name = table.column("name").unwrap();
        assert_eq!(table.field(&table.rows[0], name), Some("caf\u{e9}"));
    }
}

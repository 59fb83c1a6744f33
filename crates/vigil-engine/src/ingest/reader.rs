//! Raw sheet reading — header extraction at a fixed offset.
//!
//! The upstream export prepends one non-header artifact row; the true
//! header sits below it and column names arrive padded with whitespace.

use vigil_core::collections::FxHashSet;
use vigil_core::config::IngestConfig;
use vigil_core::errors::IngestError;

/// A raw sheet: trimmed, unique column names plus positional data rows.
///
/// This loose row shape exists only inside the ingestion adapter; the
/// decoder is its sole consumer.
#[derive(Debug)]
pub struct RawSheet {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Read a delimited byte stream into a `RawSheet`.
///
/// Rows above `config.header_row` are discarded, the header row is
/// trimmed and checked for duplicates, and everything below it becomes
/// data rows.
pub fn read_sheet(bytes: &[u8], config: &IngestConfig) -> Result<RawSheet, IngestError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(config.delimiter as u8)
        .from_reader(bytes);

    let mut raw_rows: Vec<Vec<String>> = Vec::new();
    for result in reader.records() {
        let record = result.map_err(|e| IngestError::Malformed {
            message: e.to_string(),
        })?;
        raw_rows.push(record.iter().map(str::to_string).collect());
    }

    if raw_rows.len() <= config.header_row {
        return Err(IngestError::NotEnoughRows { rows: raw_rows.len() });
    }

    let columns: Vec<String> = raw_rows[config.header_row]
        .iter()
        .map(|name| name.trim().to_string())
        .collect();

    let mut seen = FxHashSet::default();
    for name in &columns {
        if !seen.insert(name.as_str()) {
            return Err(IngestError::DuplicateColumn {
                column: name.clone(),
            });
        }
    }

    let rows = raw_rows.split_off(config.header_row + 1);
    Ok(RawSheet { columns, rows })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> IngestConfig {
        IngestConfig::default()
    }

    #[test]
    fn header_comes_from_second_row() {
        let bytes = b"export artifact,,\n a ,b, c \n1,2,3\n";
        let sheet = read_sheet(bytes, &config()).unwrap();
        assert_eq!(sheet.columns, vec!["a", "b", "c"]);
        assert_eq!(sheet.rows, vec![vec!["1", "2", "3"]]);
    }

    #[test]
    fn single_row_sheet_is_rejected() {
        let err = read_sheet(b"only one row\n", &config()).unwrap_err();
        assert!(matches!(err, IngestError::NotEnoughRows { rows: 1 }));
    }

    #[test]
    fn empty_sheet_is_rejected() {
        let err = read_sheet(b"", &config()).unwrap_err();
        assert!(matches!(err, IngestError::NotEnoughRows { rows: 0 }));
    }

    #[test]
    fn duplicate_trimmed_columns_are_rejected() {
        let bytes = b"artifact,\nstatus, status \nx,y\n";
        let err = read_sheet(bytes, &config()).unwrap_err();
        match err {
            IngestError::DuplicateColumn { column } => assert_eq!(column, "status"),
            other => panic!("expected DuplicateColumn, got {other:?}"),
        }
    }

    #[test]
    fn header_only_sheet_yields_no_rows() {
        let bytes = b"artifact\nstatus,systemName\n";
        let sheet = read_sheet(bytes, &config()).unwrap();
        assert!(sheet.rows.is_empty());
    }
}

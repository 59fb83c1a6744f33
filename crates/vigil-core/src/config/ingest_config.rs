use serde::{Deserialize, Serialize};

use super::defaults;

/// Ingestion subsystem configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IngestConfig {
    /// Zero-based index of the true header row.
    pub header_row: usize,
    /// Cell delimiter of the uploaded sheet.
    pub delimiter: char,
    /// Columns that must be present after header trimming.
    pub required_columns: Vec<String>,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            header_row: defaults::DEFAULT_HEADER_ROW,
            delimiter: defaults::DEFAULT_DELIMITER,
            required_columns: defaults::DEFAULT_REQUIRED_COLUMNS
                .iter()
                .map(|c| (*c).to_string())
                .collect(),
        }
    }
}

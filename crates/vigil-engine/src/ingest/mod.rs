//! Ingestion adapter — uploaded tabular bytes in, typed records out.
//!
//! All-or-nothing: any failure aborts the whole attempt and the caller
//! re-uploads a corrected file.

pub mod decode;
pub mod export;
pub mod reader;
pub mod schema;

pub use export::export_snapshot;
pub use reader::RawSheet;
pub use schema::ColumnIndex;

use tracing::debug;
use vigil_core::config::IngestConfig;
use vigil_core::errors::IngestError;
use vigil_core::models::AlertRecord;

/// Parse an uploaded byte stream into records.
///
/// Reads rows with the header at the configured offset, validates the
/// required columns, then decodes every data row. The returned records
/// still carry raw identities; alias normalization happens afterwards.
pub fn parse_sheet(bytes: &[u8], config: &IngestConfig) -> Result<Vec<AlertRecord>, IngestError> {
    let sheet = reader::read_sheet(bytes, config)?;
    schema::validate_required(&sheet.columns, &config.required_columns)?;

    let records = decode::decode_rows(&sheet);
    debug!(rows = records.len(), columns = sheet.columns.len(), "sheet decoded");
    Ok(records)
}

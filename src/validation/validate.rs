//! Column-count checks for headers and data rows.

use crate::config::MIN_COLUMNS;
use crate::error::{FixError, Result};
use crate::model::PositionFile;
use csv::StringRecord;

/// Check that the header carries at least [`MIN_COLUMNS`] fields.
///
/// Only the count is checked; the header text itself is never used.
pub fn validate_header(file: &PositionFile) -> Result<()> {
    let found = file.header_len();
    if found < MIN_COLUMNS {
        return Err(FixError::MalformedHeader {
            path: file.path.clone(),
            found,
            expected: MIN_COLUMNS,
        });
    }
    Ok(())
}

/// Whether a data row has enough fields to be projected.
#[inline]
pub fn is_complete_row(record: &StringRecord) -> bool {
    record.len() >= MIN_COLUMNS
}

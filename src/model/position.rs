//! Raw contents of a position export.

use csv::StringRecord;
use std::path::PathBuf;

/// A position file as read from disk: the header plus all following rows.
///
/// Rows keep whatever width they had in the file, short ones included.
#[derive(Debug, Clone)]
pub struct PositionFile {
    /// Path the file was read from.
    pub path: PathBuf,
    /// First row of the file.
    pub header: StringRecord,
    /// Every row after the header, in file order.
    pub rows: Vec<StringRecord>,
}

impl PositionFile {
    /// Number of fields in the header row.
    pub fn header_len(&self) -> usize {
        self.header.len()
    }

    /// Number of data rows (header excluded).
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

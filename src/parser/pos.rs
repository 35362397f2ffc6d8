//! KiCad position (`.pos` as CSV) reader.

use crate::error::{FixError, Result};
use crate::model::PositionFile;
use csv::{ReaderBuilder, StringRecord};
use std::path::Path;

/// Read every record from CSV text.
///
/// The first row is returned like any other; rows may have any width. Blank
/// lines come back as zero-field records in their original position.
pub fn read_position_records(content: &str) -> Result<Vec<StringRecord>> {
    let bytes = content.as_bytes();
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(bytes);

    let mut records = Vec::new();
    let mut record = StringRecord::new();
    loop {
        // The csv reader drops blank lines, so recover them from the bytes it
        // consumed in front of each record.
        let start = reader.position().byte() as usize;
        let more = reader.read_record(&mut record)?;
        let end = if more {
            reader.position().byte() as usize
        } else {
            bytes.len()
        };

        for _ in 0..count_blank_lines(bytes, start, end) {
            records.push(StringRecord::new());
        }
        if !more {
            break;
        }
        records.push(record.clone());
    }
    Ok(records)
}

/// Count empty lines at the start of `bytes[start..end]`.
fn count_blank_lines(bytes: &[u8], start: usize, end: usize) -> usize {
    let end = end.min(bytes.len());
    let mut pos = start;

    // Second half of a CRLF that ended the previous record.
    if pos > 0 && pos < end && bytes[pos - 1] == b'\r' && bytes[pos] == b'\n' {
        pos += 1;
    }

    let mut count = 0;
    while pos < end {
        match bytes[pos] {
            b'\n' => pos += 1,
            b'\r' => {
                pos += 1;
                if pos < end && bytes[pos] == b'\n' {
                    pos += 1;
                }
            }
            _ => break,
        }
        count += 1;
    }
    count
}

/// Parse a position file from a path.
///
/// Fails with [`FixError::EmptyFile`] when the file holds no rows at all.
pub fn parse_position_file(path: &Path) -> Result<PositionFile> {
    let content = std::fs::read_to_string(path)?;
    let mut records = read_position_records(&content)?.into_iter();

    let header = records.next().ok_or_else(|| FixError::EmptyFile {
        path: path.to_path_buf(),
    })?;

    Ok(PositionFile {
        path: path.to_path_buf(),
        header,
        rows: records.collect(),
    })
}

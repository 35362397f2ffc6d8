//! CSV writer for the JLCPCB CPL layout.

use crate::config::OUTPUT_HEADER;
use crate::error::{FixError, Result};
use crate::model::Placement;
use csv::{QuoteStyle, Terminator, WriterBuilder};
use std::io::Write;
use std::path::Path;

/// Write the fixed header and all placements to any sink.
///
/// Fields are quoted only when they contain a delimiter, quote or newline.
/// Rows end in CRLF.
pub fn write_placements_to<W: Write>(sink: W, placements: &[Placement]) -> csv::Result<()> {
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Necessary)
        .terminator(Terminator::CRLF)
        .from_writer(sink);

    writer.write_record(OUTPUT_HEADER)?;
    for placement in placements {
        writer.write_record(placement.fields())?;
    }
    writer.flush()?;
    Ok(())
}

/// Write placements to `path`, replacing any existing file.
///
/// Failing to create or fill the file is reported as [`FixError::WriteFailed`].
pub fn write_placements(path: &Path, placements: &[Placement]) -> Result<()> {
    std::fs::File::create(path)
        .map_err(csv::Error::from)
        .and_then(|file| write_placements_to(file, placements))
        .map_err(|source| FixError::WriteFailed {
            path: path.to_path_buf(),
            source,
        })
}

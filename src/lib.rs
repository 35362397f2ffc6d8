//! jlc-pos-fix - Convert KiCad pick-and-place exports to the JLCPCB CPL layout.
//!
//! KiCad writes component positions as `<board>-all-pos.csv` with the columns
//! `Ref, Val, Package, PosX, PosY, Rot, Side`. JLCPCB expects
//! `Designator, Mid X, Mid Y, Layer, Rotation`. This crate finds the export in a
//! directory, writes `<board>.csv` next to it and removes the original.
//!
//! # Example
//!
//! ```no_run
//! use jlc_pos_fix::fix_position_file;
//! use std::path::Path;
//!
//! let report = fix_position_file(Path::new("Manufacturing")).unwrap();
//! println!("{} placements written", report.rows_written);
//! ```

pub mod config;
pub mod error;
pub mod generator;
pub mod locate;
pub mod model;
pub mod parser;
pub mod transform;
pub mod validation;

// Re-exports for convenience
pub use config::{COLUMN_MAP, MANUFACTURING_DIR, MIN_COLUMNS, OUTPUT_HEADER};
pub use error::{ErrorCode, FixError, Result};
pub use generator::write_placements;
pub use locate::{derive_output_name, find_position_file, remove_position_file};
pub use model::{ColumnMap, Placement, PositionFile};
pub use parser::parse_position_file;
pub use transform::{project_row, project_rows, Projection};
pub use validation::validate_header;

use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Summary of a completed conversion.
#[derive(Debug, Clone, Serialize)]
pub struct FixReport {
    /// Export that was converted (no longer on disk).
    pub input: PathBuf,
    /// File that was written.
    pub output: PathBuf,
    /// Data rows in the input, header excluded.
    pub rows_read: usize,
    /// Placement rows in the output, header excluded.
    pub rows_written: usize,
    /// Data rows dropped for having too few fields.
    pub rows_skipped: usize,
}

/// Convert the position export found in `dir`.
///
/// This is the full pipeline:
/// 1. Locate the `*-all-pos*.csv` file
/// 2. Parse and validate it
/// 3. Project rows onto the CPL columns
/// 4. Write the output next to the input
/// 5. Delete the input
///
/// Nothing is written or deleted unless the input is found, non-empty and has
/// a valid header. The input is only deleted once the output is complete.
pub fn fix_position_file(dir: &Path) -> Result<FixReport> {
    let input = find_position_file(dir)?;
    let input_name = input
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or_default()
        .to_string();
    info!("Found file: {}", input_name);

    let output_name = derive_output_name(&input_name);
    let output = dir.join(&output_name);

    let file = parse_position_file(&input)?;
    validate_header(&file)?;

    let projection = project_rows(&file.rows);
    debug!(
        "Projected {} of {} rows ({} skipped)",
        projection.placements.len(),
        file.row_count(),
        projection.skipped
    );

    write_placements(&output, &projection.placements)?;

    info!("Successfully processed and saved to: {}", output_name);
    info!("Removed columns: {}", config::REMOVED_COLUMNS.join(", "));
    info!("Reordered columns: {}", OUTPUT_HEADER.join(", "));

    remove_position_file(&input)?;

    Ok(FixReport {
        input,
        output,
        rows_read: file.row_count(),
        rows_written: projection.placements.len(),
        rows_skipped: projection.skipped,
    })
}

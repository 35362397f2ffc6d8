//! Fixed settings for the position file conversion.

use crate::model::ColumnMap;

/// Name of the directory, next to the executable, that holds the exports.
pub const MANUFACTURING_DIR: &str = "Manufacturing";

/// Marker that identifies a KiCad "all sides" position export.
pub const POS_MARKER: &str = "-all-pos";

/// Extension of candidate input files.
pub const CSV_EXTENSION: &str = ".csv";

/// Minimum number of fields for the header and for a usable data row.
pub const MIN_COLUMNS: usize = 7;

/// Source column indices for each output field.
///
/// KiCad exports `Ref, Val, Package, PosX, PosY, Rot, Side`.
pub const COLUMN_MAP: ColumnMap = ColumnMap {
    designator: 0,
    mid_x: 3,
    mid_y: 4,
    layer: 6,
    rotation: 5,
};

/// Header written to every output file, regardless of the source header.
pub const OUTPUT_HEADER: [&str; 5] = ["Designator", "Mid X", "Mid Y", "Layer", "Rotation"];

/// Source columns that are dropped by the conversion.
pub const REMOVED_COLUMNS: [&str; 2] = ["Val", "Package"];

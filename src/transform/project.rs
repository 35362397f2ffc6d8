//! Row projection onto the fixed output columns.

use crate::config::COLUMN_MAP;
use crate::model::{ColumnMap, Placement};
use crate::validation::is_complete_row;
use csv::StringRecord;
use tracing::debug;

/// Placements produced from a set of data rows.
#[derive(Debug, Default)]
pub struct Projection {
    /// Projected rows, in source order.
    pub placements: Vec<Placement>,
    /// Rows dropped for having too few fields.
    pub skipped: usize,
}

/// Project a single row with an explicit column map.
///
/// Returns `None` if the row lacks any mapped column.
pub fn project_row_with(record: &StringRecord, map: &ColumnMap) -> Option<Placement> {
    Some(Placement {
        designator: record.get(map.designator)?.to_string(),
        mid_x: record.get(map.mid_x)?.to_string(),
        mid_y: record.get(map.mid_y)?.to_string(),
        layer: record.get(map.layer)?.to_string(),
        rotation: record.get(map.rotation)?.to_string(),
    })
}

/// Project a single row using the fixed column map.
pub fn project_row(record: &StringRecord) -> Option<Placement> {
    if !is_complete_row(record) {
        return None;
    }
    project_row_with(record, &COLUMN_MAP)
}

/// Project all data rows, silently dropping incomplete ones.
pub fn project_rows(rows: &[StringRecord]) -> Projection {
    let mut projection = Projection::default();

    for (idx, record) in rows.iter().enumerate() {
        match project_row(record) {
            Some(placement) => projection.placements.push(placement),
            None => {
                debug!("Skipping row {} ({} fields)", idx + 2, record.len());
                projection.skipped += 1;
            }
        }
    }

    projection
}

//! Data model types for position file conversion.

mod placement;
mod position;

pub use placement::{ColumnMap, Placement};
pub use position::PositionFile;

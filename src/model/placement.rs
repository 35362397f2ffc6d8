//! Placement row in the JLCPCB CPL layout.

/// Zero-based source indices for each output field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnMap {
    /// Reference designator column (`Ref`).
    pub designator: usize,
    /// X position column (`PosX`).
    pub mid_x: usize,
    /// Y position column (`PosY`).
    pub mid_y: usize,
    /// Board side column (`Side`).
    pub layer: usize,
    /// Rotation column (`Rot`).
    pub rotation: usize,
}

impl ColumnMap {
    /// Highest source index referenced by the map.
    pub fn max_index(&self) -> usize {
        [
            self.designator,
            self.mid_x,
            self.mid_y,
            self.layer,
            self.rotation,
        ]
        .into_iter()
        .max()
        .unwrap_or(0)
    }
}

/// A single component placement, written as one output row.
///
/// Values are carried through verbatim; no numeric parsing is done.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Placement {
    pub designator: String,
    pub mid_x: String,
    pub mid_y: String,
    pub layer: String,
    pub rotation: String,
}

impl Placement {
    /// Number of fields in an output row.
    pub const FIELD_COUNT: usize = 5;

    /// Create a new placement.
    pub fn new(
        designator: impl Into<String>,
        mid_x: impl Into<String>,
        mid_y: impl Into<String>,
        layer: impl Into<String>,
        rotation: impl Into<String>,
    ) -> Self {
        Self {
            designator: designator.into(),
            mid_x: mid_x.into(),
            mid_y: mid_y.into(),
            layer: layer.into(),
            rotation: rotation.into(),
        }
    }

    /// Fields in output column order.
    pub fn fields(&self) -> [&str; Self::FIELD_COUNT] {
        [
            self.designator.as_str(),
            self.mid_x.as_str(),
            self.mid_y.as_str(),
            self.layer.as_str(),
            self.rotation.as_str(),
        ]
    }
}

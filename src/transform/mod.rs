//! Column projection from the KiCad layout to the CPL layout.

mod project;

pub use project::*;

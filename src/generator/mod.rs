//! CPL file generator module.

mod writer;

pub use writer::{write_placements, write_placements_to};

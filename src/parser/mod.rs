//! Position file parser module.

mod pos;

pub use pos::{parse_position_file, read_position_records};

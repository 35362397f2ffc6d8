//! Validation of position file structure.

mod validate;

pub use validate::{is_complete_row, validate_header};

//! CSV reading for both source modes.

mod names;
mod source;
mod table;

pub use names::load_country_names;
pub use source::{check_source, validate_encoding};
pub use table::load_country_table;

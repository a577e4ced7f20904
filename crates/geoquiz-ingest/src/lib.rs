//! Country source ingestion.
//!
//! Two loading modes read the same CSV format, chosen by the caller:
//!
//! - **With header**: [`load_country_table`] reads every column into a typed
//!   [`CountryTable`](geoquiz_model::CountryTable). Column types are inferred
//!   from the whole file (integer, real, otherwise text).
//! - **Without header**: [`load_country_names`] reads the first column of
//!   every row as a bare display name.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use geoquiz_ingest::{load_country_names, load_country_table};
//! use geoquiz_model::SourceOptions;
//!
//! let table = load_country_table(Path::new("countries_data.csv"), &SourceOptions::default())?;
//! let names = load_country_names(Path::new("countries.csv"))?;
//! ```

mod csv;
mod error;
mod values;

pub use csv::{check_source, load_country_names, load_country_table, validate_encoding};
pub use error::{IngestError, Result};

//! CLI library components for geoquiz.

pub mod logging;
pub mod summary;

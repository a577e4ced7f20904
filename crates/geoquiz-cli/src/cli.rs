//! CLI argument definitions for geoquiz.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use geoquiz_model::{
    DEFAULT_DATABASE_FILE, DEFAULT_MANIFEST_FILE, DEFAULT_NAME_PROPERTY, DEFAULT_OUTPUT_FOLDER,
    DEFAULT_TABLE_NAME,
};

#[derive(Parser)]
#[command(
    name = "geoquiz",
    version,
    about = "Geography quiz asset builder - country outlines and a country database",
    long_about = "Build the assets of a geography quiz.\n\n\
                  `maps` renders one outline PNG per country and lists the misses.\n\
                  `database` copies the country table into SQLite with image paths."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Render one outline image per country in a headerless name list.
    Maps(MapsArgs),

    /// Load a country table with a header row into SQLite.
    Database(DatabaseArgs),

    /// Print the first rows of a materialized table.
    Preview(PreviewArgs),
}

#[derive(Parser)]
pub struct MapsArgs {
    /// CSV whose first column holds country display names (no header row).
    #[arg(value_name = "SOURCE")]
    pub source: PathBuf,

    /// GeoJSON feature collection of country boundaries.
    #[arg(value_name = "BOUNDARIES")]
    pub boundaries: PathBuf,

    /// Folder the images are written to.
    #[arg(long = "output-dir", value_name = "DIR", default_value = DEFAULT_OUTPUT_FOLDER)]
    pub output_dir: PathBuf,

    /// File listing the countries that produced no image.
    #[arg(long = "manifest", value_name = "PATH", default_value = DEFAULT_MANIFEST_FILE)]
    pub manifest: PathBuf,

    /// Feature property holding the country name.
    #[arg(long = "name-property", default_value = DEFAULT_NAME_PROPERTY)]
    pub name_property: String,

    /// Length in pixels of the longer side of each outline.
    #[arg(long = "size", default_value_t = 1024)]
    pub size: u32,

    /// Transparent margin in pixels around each outline.
    #[arg(long = "padding", default_value_t = 16)]
    pub padding: u32,
}

#[derive(Parser)]
pub struct DatabaseArgs {
    /// CSV with a header row, one country per row.
    #[arg(value_name = "SOURCE")]
    pub source: PathBuf,

    /// Folder the image paths are planned under.
    #[arg(long = "output-dir", value_name = "DIR", default_value = DEFAULT_OUTPUT_FOLDER)]
    pub output_dir: PathBuf,

    /// SQLite database file.
    #[arg(long = "database", value_name = "PATH", default_value = DEFAULT_DATABASE_FILE)]
    pub database: PathBuf,

    /// Table receiving the rows.
    #[arg(long = "table", default_value = DEFAULT_TABLE_NAME)]
    pub table: String,

    /// Header of the display name column (default: first column).
    #[arg(long = "name-column", value_name = "HEADER")]
    pub name_column: Option<String>,

    /// Drop and recreate the table instead of appending rows.
    #[arg(long = "replace")]
    pub replace: bool,
}

#[derive(Parser)]
pub struct PreviewArgs {
    /// SQLite database file.
    #[arg(long = "database", value_name = "PATH", default_value = DEFAULT_DATABASE_FILE)]
    pub database: PathBuf,

    /// Table to read.
    #[arg(long = "table", default_value = DEFAULT_TABLE_NAME)]
    pub table: String,

    /// Maximum number of rows to print.
    #[arg(long = "limit", default_value_t = 5)]
    pub limit: usize,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

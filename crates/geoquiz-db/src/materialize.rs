//! Copies the country table into SQLite.

use std::path::{Path, PathBuf};

use rusqlite::types::Value;
use rusqlite::{Connection, params_from_iter};
use serde::{Deserialize, Serialize};
use tracing::{info, info_span};

use geoquiz_ingest::load_country_table;
use geoquiz_model::{
    ArtifactPathPlanner, CellValue, CountryTable, DEFAULT_DATABASE_FILE, DEFAULT_OUTPUT_FOLDER,
    DEFAULT_TABLE_NAME, InsertMode, SourceOptions,
};

use crate::error::{DatabaseError, Result};
use crate::schema::TableSchema;

/// Inputs of a materialization run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaterializeJob {
    pub source_path: PathBuf,
    pub source: SourceOptions,
    pub database_path: PathBuf,
    pub table_name: String,
    /// Folder the image paths are planned under.
    pub output_folder: PathBuf,
    pub insert_mode: InsertMode,
}

impl MaterializeJob {
    pub fn new(source_path: impl Into<PathBuf>) -> Self {
        Self {
            source_path: source_path.into(),
            source: SourceOptions::default(),
            database_path: PathBuf::from(DEFAULT_DATABASE_FILE),
            table_name: DEFAULT_TABLE_NAME.to_string(),
            output_folder: PathBuf::from(DEFAULT_OUTPUT_FOLDER),
            insert_mode: InsertMode::default(),
        }
    }

    pub fn with_source(mut self, source: SourceOptions) -> Self {
        self.source = source;
        self
    }

    pub fn with_database(mut self, path: impl Into<PathBuf>) -> Self {
        self.database_path = path.into();
        self
    }

    pub fn with_table(mut self, table: impl Into<String>) -> Self {
        self.table_name = table.into();
        self
    }

    pub fn with_output_folder(mut self, folder: impl Into<PathBuf>) -> Self {
        self.output_folder = folder.into();
        self
    }

    pub fn with_insert_mode(mut self, mode: InsertMode) -> Self {
        self.insert_mode = mode;
        self
    }
}

/// Outcome of a successful materialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaterializeReport {
    pub database: PathBuf,
    pub table: String,
    pub schema: TableSchema,
    pub inserted: usize,
    pub insert_mode: InsertMode,
}

/// Loads the source named by `job` and writes it to the database.
pub fn materialize(job: &MaterializeJob) -> Result<MaterializeReport> {
    let table = load_country_table(&job.source_path, &job.source)?;
    let planner = ArtifactPathPlanner::new(&job.output_folder);
    materialize_table(
        &table,
        &planner,
        &job.database_path,
        &job.table_name,
        job.insert_mode,
    )
}

/// Writes an already loaded table to `database`.
///
/// All statements run in one transaction, so a failure leaves the database
/// as it was before the call.
pub fn materialize_table(
    table: &CountryTable,
    planner: &ArtifactPathPlanner,
    database: &Path,
    table_name: &str,
    insert_mode: InsertMode,
) -> Result<MaterializeReport> {
    let span = info_span!("materialize", database = %database.display(), table = table_name);
    let _guard = span.enter();

    let schema = TableSchema::for_source(table_name, table)?;
    let sqlite = |e: rusqlite::Error| DatabaseError::sqlite(database, e);

    let mut conn = Connection::open(database).map_err(sqlite)?;
    let tx = conn.transaction().map_err(sqlite)?;
    if insert_mode == InsertMode::Replace {
        tx.execute_batch(&schema.drop_sql()).map_err(sqlite)?;
    }
    tx.execute_batch(&schema.create_sql()).map_err(sqlite)?;

    let mut inserted = 0usize;
    {
        let mut stmt = tx.prepare(&schema.insert_sql()).map_err(sqlite)?;
        for record in &table.records {
            let image_path = planner.plan_string(record.display_name());
            let values = record
                .cells()
                .iter()
                .map(cell_to_value)
                .chain(std::iter::once(Value::Text(image_path)));
            stmt.execute(params_from_iter(values)).map_err(sqlite)?;
            inserted += 1;
        }
    }
    tx.commit().map_err(sqlite)?;
    conn.close().map_err(|(_, e)| sqlite(e))?;

    info!(
        rows = inserted,
        columns = schema.columns.len(),
        mode = ?insert_mode,
        "materialized country table"
    );
    Ok(MaterializeReport {
        database: database.to_path_buf(),
        table: table_name.to_string(),
        schema,
        inserted,
        insert_mode,
    })
}

fn cell_to_value(cell: &CellValue) -> Value {
    match cell {
        CellValue::Integer(v) => Value::Integer(*v),
        CellValue::Real(v) => Value::Real(*v),
        CellValue::Text(v) => Value::Text(v.clone()),
        CellValue::Null => Value::Null,
    }
}

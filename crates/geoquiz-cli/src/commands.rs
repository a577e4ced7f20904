use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use geoquiz_boundary::BoundaryOptions;
use geoquiz_core::{MapJob, MapOptions, MapReport, generate_maps};
use geoquiz_db::{MaterializeJob, MaterializeReport, TablePreview, materialize, preview_table};
use geoquiz_model::{InsertMode, SourceOptions};
use geoquiz_render::RenderOptions;

use crate::cli::{DatabaseArgs, MapsArgs, PreviewArgs};

pub fn run_maps(args: &MapsArgs) -> Result<MapReport> {
    let span = info_span!("maps", source = %args.source.display());
    let _guard = span.enter();
    let started = Instant::now();

    let job = MapJob {
        source_path: args.source.clone(),
        boundary_path: args.boundaries.clone(),
        boundary: BoundaryOptions::default().with_name_property(&args.name_property),
        render: RenderOptions {
            size: args.size,
            padding: args.padding,
            ..RenderOptions::default()
        },
        options: MapOptions::default()
            .with_output_folder(&args.output_dir)
            .with_manifest_path(&args.manifest),
    };
    let report = generate_maps(&job).with_context(|| {
        format!(
            "generate maps from {} and {}",
            args.source.display(),
            args.boundaries.display()
        )
    })?;

    info!(
        rendered = report.rendered_count(),
        missing = report.missing.len(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "map generation finished"
    );
    Ok(report)
}

pub fn run_database(args: &DatabaseArgs) -> Result<MaterializeReport> {
    let span = info_span!("database", source = %args.source.display());
    let _guard = span.enter();
    let started = Instant::now();

    let mut source = SourceOptions::new();
    if let Some(column) = &args.name_column {
        source = source.with_name_column(column);
    }
    let insert_mode = if args.replace {
        InsertMode::Replace
    } else {
        InsertMode::Append
    };
    let job = MaterializeJob::new(&args.source)
        .with_source(source)
        .with_database(&args.database)
        .with_table(&args.table)
        .with_output_folder(&args.output_dir)
        .with_insert_mode(insert_mode);
    let report = materialize(&job).with_context(|| {
        format!(
            "materialize {} into {}",
            args.source.display(),
            args.database.display()
        )
    })?;

    info!(
        rows = report.inserted,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "database materialization finished"
    );
    Ok(report)
}

pub fn run_preview(args: &PreviewArgs) -> Result<TablePreview> {
    preview_table(&args.database, &args.table, args.limit).with_context(|| {
        format!(
            "read table {} from {}",
            args.table,
            args.database.display()
        )
    })
}

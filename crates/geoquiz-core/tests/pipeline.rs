//! Integration tests for the map generation pipeline.

use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};

use geoquiz_boundary::{BoundaryEntity, BoundaryIndex, Point, Polygon};
use geoquiz_core::{
    CountryState, MapGenerationPipeline, MapJob, MapOptions, PipelineError, generate_maps,
    read_manifest,
};
use geoquiz_ingest::IngestError;
use geoquiz_model::ArtifactPathPlanner;
use geoquiz_render::{RenderError, Renderer};
use tempfile::TempDir;

/// Writes a placeholder file and remembers what it was asked to draw.
#[derive(Default)]
struct RecordingRenderer {
    calls: RefCell<Vec<(Vec<String>, PathBuf)>>,
    fail_for: Vec<&'static str>,
}

impl Renderer for RecordingRenderer {
    fn render(&self, entities: &[&BoundaryEntity], destination: &Path) -> Result<(), RenderError> {
        let names: Vec<String> = entities.iter().map(|e| e.name.clone()).collect();
        self.calls
            .borrow_mut()
            .push((names.clone(), destination.to_path_buf()));
        if names.iter().any(|n| self.fail_for.contains(&n.as_str())) {
            return Err(RenderError::EmptyGeometry {
                name: names.join(", "),
            });
        }
        fs::write(destination, b"png").map_err(|e| RenderError::Encode {
            path: destination.to_path_buf(),
            message: e.to_string(),
        })
    }
}

fn square(name: &str) -> BoundaryEntity {
    BoundaryEntity::new(
        name,
        vec![Polygon::new(vec![vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(0.0, 0.0),
        ]])],
    )
}

fn options(dir: &TempDir) -> MapOptions {
    MapOptions::default()
        .with_output_folder(dir.path().join("stylized_maps"))
        .with_manifest_path(dir.path().join("missing.txt"))
}

fn png_names(folder: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(folder)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[test]
fn renders_matches_and_records_misses_in_order() {
    let dir = TempDir::new().unwrap();
    let index = BoundaryIndex::from_entities(vec![square("United States"), square("Canada")]);
    let renderer = RecordingRenderer::default();
    let options = options(&dir);

    let report = MapGenerationPipeline::new(&index, &renderer, options.clone())
        .run(&["United States", "Canada", "Atlantis"])
        .expect("run");

    assert_eq!(
        png_names(&options.output_folder),
        vec!["canada.png", "united_states.png"]
    );
    assert_eq!(report.missing, vec!["Atlantis"]);
    assert_eq!(report.manifest.as_deref(), Some(options.manifest_path.as_path()));
    assert_eq!(
        fs::read_to_string(&options.manifest_path).unwrap(),
        "Atlantis\n"
    );
    assert_eq!(report.rendered_count(), 2);
    assert_eq!(report.unmatched_count(), 1);
    assert_eq!(report.outcomes[2].state, CountryState::Unmatched);
}

#[test]
fn destinations_come_from_the_shared_planner() {
    let dir = TempDir::new().unwrap();
    let index = BoundaryIndex::from_entities(vec![square("Congo (Dem. Rep.)")]);
    let renderer = RecordingRenderer::default();
    let options = options(&dir);
    let planner = ArtifactPathPlanner::new(&options.output_folder);

    let report = MapGenerationPipeline::new(&index, &renderer, options)
        .run(&["Congo (Dem. Rep.)"])
        .unwrap();

    let calls = renderer.calls.borrow();
    assert_eq!(calls[0].1, planner.plan("Congo (Dem. Rep.)"));
    assert_eq!(
        report.outcomes[0].destination.to_string_lossy(),
        planner.plan_string("Congo (Dem. Rep.)")
    );
    assert!(calls[0].1.ends_with("congo_dem_rep.png"));
}

#[test]
fn matching_ignores_case_and_passes_every_match() {
    let dir = TempDir::new().unwrap();
    let index = BoundaryIndex::from_entities(vec![
        square("France"),
        square("Spain"),
        square("FRANCE"),
    ]);
    let renderer = RecordingRenderer::default();

    let report = MapGenerationPipeline::new(&index, &renderer, options(&dir))
        .run(&["france"])
        .unwrap();

    assert!(report.missing.is_empty());
    let calls = renderer.calls.borrow();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, vec!["France", "FRANCE"]);
}

#[test]
fn render_failures_are_missing_but_do_not_abort() {
    let dir = TempDir::new().unwrap();
    let index = BoundaryIndex::from_entities(vec![
        square("Chad"),
        square("Niger"),
        square("Mali"),
    ]);
    let renderer = RecordingRenderer {
        fail_for: vec!["Niger"],
        ..RecordingRenderer::default()
    };
    let options = options(&dir);

    let report = MapGenerationPipeline::new(&index, &renderer, options.clone())
        .run(&["Chad", "Atlantis", "Niger", "Mali"])
        .unwrap();

    assert_eq!(report.missing, vec!["Atlantis", "Niger"]);
    assert_eq!(report.failed_count(), 1);
    assert!(matches!(
        report.outcomes[2].state,
        CountryState::RenderFailed { .. }
    ));
    assert_eq!(read_manifest(&options.manifest_path).unwrap(), report.missing);
    assert_eq!(png_names(&options.output_folder), vec!["chad.png", "mali.png"]);
}

#[test]
fn duplicate_source_names_stay_duplicated_in_manifest() {
    let dir = TempDir::new().unwrap();
    let index = BoundaryIndex::from_entities(vec![square("Chad")]);
    let renderer = RecordingRenderer::default();
    let options = options(&dir);

    let report = MapGenerationPipeline::new(&index, &renderer, options.clone())
        .run(&["Atlantis", "Chad", "Atlantis"])
        .unwrap();

    assert_eq!(report.missing, vec!["Atlantis", "Atlantis"]);
    assert_eq!(
        fs::read_to_string(&options.manifest_path).unwrap(),
        "Atlantis\nAtlantis\n"
    );
}

#[test]
fn clean_run_removes_stale_manifest() {
    let dir = TempDir::new().unwrap();
    let options = options(&dir);
    fs::write(&options.manifest_path, "Atlantis\n").unwrap();
    let index = BoundaryIndex::from_entities(vec![square("Chad")]);
    let renderer = RecordingRenderer::default();

    let report = MapGenerationPipeline::new(&index, &renderer, options.clone())
        .run(&["Chad"])
        .unwrap();

    assert!(report.manifest.is_none());
    assert!(!options.manifest_path.exists());
}

#[test]
fn rerun_overwrites_existing_images() {
    let dir = TempDir::new().unwrap();
    let options = options(&dir);
    fs::create_dir_all(&options.output_folder).unwrap();
    let stale = options.output_folder.join("chad.png");
    fs::write(&stale, b"stale").unwrap();
    let index = BoundaryIndex::from_entities(vec![square("Chad")]);
    let renderer = RecordingRenderer::default();

    MapGenerationPipeline::new(&index, &renderer, options)
        .run(&["Chad"])
        .unwrap();

    assert_eq!(fs::read(&stale).unwrap(), b"png");
}

const BOUNDARIES: &str = r#"{"type":"FeatureCollection","features":[
  {"type":"Feature","properties":{"name":"United States"},
   "geometry":{"type":"Polygon","coordinates":[[[-125,25],[-67,25],[-67,49],[-125,49],[-125,25]]]}},
  {"type":"Feature","properties":{"name":"Canada"},
   "geometry":{"type":"MultiPolygon","coordinates":[[[[-140,49],[-52,49],[-52,70],[-140,70],[-140,49]]],
                                                     [[[-90,72],[-70,72],[-70,80],[-90,80],[-90,72]]]]}}
]}"#;

#[test]
fn generate_maps_end_to_end() {
    let dir = TempDir::new().unwrap();
    let source = dir.path().join("countries.csv");
    let boundaries = dir.path().join("countries.geojson");
    fs::write(&source, "United States\nCanada\nAtlantis\n").unwrap();
    fs::write(&boundaries, BOUNDARIES).unwrap();

    let mut job = MapJob::new(&source, &boundaries);
    job.options = options(&dir);
    job.render.size = 64;
    let report = generate_maps(&job).expect("generate maps");

    assert_eq!(
        png_names(&job.options.output_folder),
        vec!["canada.png", "united_states.png"]
    );
    assert_eq!(
        fs::read_to_string(&job.options.manifest_path).unwrap(),
        "Atlantis\n"
    );
    assert_eq!(report.rendered_count(), 2);
}

#[test]
fn missing_source_aborts_before_rendering() {
    let dir = TempDir::new().unwrap();
    let boundaries = dir.path().join("countries.geojson");
    fs::write(&boundaries, BOUNDARIES).unwrap();
    let mut job = MapJob::new(dir.path().join("absent.csv"), &boundaries);
    job.options = options(&dir);

    let result = generate_maps(&job);

    assert!(matches!(
        result,
        Err(PipelineError::Ingest(IngestError::NotFound { .. }))
    ));
    assert!(!job.options.output_folder.exists());
}

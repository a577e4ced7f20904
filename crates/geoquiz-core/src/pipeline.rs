//! The map generation run.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, info_span, warn};

use geoquiz_boundary::{BoundaryIndex, BoundaryOptions};
use geoquiz_ingest::load_country_names;
use geoquiz_model::{
    ArtifactPathPlanner, CanonicalIdentifier, DEFAULT_MANIFEST_FILE, DEFAULT_OUTPUT_FOLDER,
};
use geoquiz_render::{OutlineRenderer, RenderOptions, Renderer};

use crate::error::{PipelineError, Result};
use crate::manifest::sync_manifest;
use crate::state::{CountryOutcome, CountryState};

/// Output locations of a map generation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapOptions {
    pub output_folder: PathBuf,
    pub manifest_path: PathBuf,
}

impl Default for MapOptions {
    fn default() -> Self {
        Self {
            output_folder: PathBuf::from(DEFAULT_OUTPUT_FOLDER),
            manifest_path: PathBuf::from(DEFAULT_MANIFEST_FILE),
        }
    }
}

impl MapOptions {
    pub fn with_output_folder(mut self, folder: impl Into<PathBuf>) -> Self {
        self.output_folder = folder.into();
        self
    }

    pub fn with_manifest_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.manifest_path = path.into();
        self
    }
}

/// Result of a map generation run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapReport {
    /// One outcome per source name, in source order.
    pub outcomes: Vec<CountryOutcome>,
    /// Names that produced no image, in source order.
    pub missing: Vec<String>,
    /// Manifest written by this run; `None` when nothing was missing.
    pub manifest: Option<PathBuf>,
}

impl MapReport {
    pub fn rendered_count(&self) -> usize {
        self.count(|state| matches!(state, CountryState::Rendered))
    }

    pub fn unmatched_count(&self) -> usize {
        self.count(|state| matches!(state, CountryState::Unmatched))
    }

    pub fn failed_count(&self) -> usize {
        self.count(|state| matches!(state, CountryState::RenderFailed { .. }))
    }

    fn count(&self, predicate: impl Fn(&CountryState) -> bool) -> usize {
        self.outcomes.iter().filter(|o| predicate(&o.state)).count()
    }
}

/// Matches display names against a boundary index and renders the hits.
pub struct MapGenerationPipeline<'a, R: Renderer + ?Sized> {
    index: &'a BoundaryIndex,
    renderer: &'a R,
    planner: ArtifactPathPlanner,
    options: MapOptions,
}

impl<'a, R: Renderer + ?Sized> MapGenerationPipeline<'a, R> {
    pub fn new(index: &'a BoundaryIndex, renderer: &'a R, options: MapOptions) -> Self {
        Self {
            index,
            renderer,
            planner: ArtifactPathPlanner::new(&options.output_folder),
            options,
        }
    }

    pub fn planner(&self) -> &ArtifactPathPlanner {
        &self.planner
    }

    /// Processes every name in order, then updates the manifest.
    ///
    /// Matched countries are re-rendered on every run, overwriting previous
    /// images. A render failure is recorded as missing and the run goes on.
    pub fn run<S: AsRef<str>>(&self, names: &[S]) -> Result<MapReport> {
        let output_folder = &self.options.output_folder;
        if !output_folder.is_dir() {
            fs::create_dir_all(output_folder).map_err(|source| PipelineError::OutputDir {
                path: output_folder.clone(),
                source,
            })?;
            info!(output_folder = %output_folder.display(), "created output folder");
        }

        let started = Instant::now();
        let mut outcomes = Vec::with_capacity(names.len());
        let mut missing = Vec::new();
        for name in names {
            let outcome = self.process(name.as_ref());
            if outcome.state.is_missing() {
                missing.push(outcome.display_name.clone());
            }
            outcomes.push(outcome);
        }

        let manifest = sync_manifest(&self.options.manifest_path, &missing)?;
        let report = MapReport {
            outcomes,
            missing,
            manifest,
        };
        info!(
            countries = report.outcomes.len(),
            rendered = report.rendered_count(),
            unmatched = report.unmatched_count(),
            failed = report.failed_count(),
            duration_ms = started.elapsed().as_millis(),
            "map generation complete"
        );
        Ok(report)
    }

    fn process(&self, display_name: &str) -> CountryOutcome {
        let canonical = CanonicalIdentifier::from_display_name(display_name);
        let destination = self.planner.plan(display_name);
        let span = info_span!("country", name = %display_name, canonical = %canonical);
        let _guard = span.enter();

        let matches = self.index.find_all(display_name);
        let mut state = CountryState::Pending.after_lookup(matches.len());
        if let CountryState::Matched { matches: count } = state {
            debug!(matches = count, destination = %destination.display(), "matched boundary");
            let result = self
                .renderer
                .render(&matches, &destination)
                .map_err(|e| e.to_string());
            state = state.after_render(result);
        } else {
            warn!("not found in boundary dataset");
        }
        match &state {
            CountryState::Rendered => {
                info!(destination = %destination.display(), "generated outline");
            }
            CountryState::RenderFailed { reason } => {
                warn!(reason = %reason, "failed to render outline");
            }
            _ => {}
        }

        CountryOutcome {
            display_name: display_name.to_string(),
            canonical,
            destination,
            state,
        }
    }
}

/// Inputs of a complete map generation run, loaded from disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapJob {
    /// Headerless CSV of display names.
    pub source_path: PathBuf,
    /// GeoJSON feature collection.
    pub boundary_path: PathBuf,
    pub boundary: BoundaryOptions,
    pub render: RenderOptions,
    pub options: MapOptions,
}

impl MapJob {
    pub fn new(source_path: impl Into<PathBuf>, boundary_path: impl Into<PathBuf>) -> Self {
        Self {
            source_path: source_path.into(),
            boundary_path: boundary_path.into(),
            boundary: BoundaryOptions::default(),
            render: RenderOptions::default(),
            options: MapOptions::default(),
        }
    }
}

/// Loads the names and boundaries of `job` and runs the pipeline with the
/// tiny-skia outline renderer.
pub fn generate_maps(job: &MapJob) -> Result<MapReport> {
    let names = load_country_names(&job.source_path)?;
    info!(
        source = %job.source_path.display(),
        countries = names.len(),
        "loaded country names"
    );
    let index = BoundaryIndex::load(&job.boundary_path, &job.boundary)?;
    let renderer = OutlineRenderer::new(job.render);
    MapGenerationPipeline::new(&index, &renderer, job.options.clone()).run(names.as_slice())
}

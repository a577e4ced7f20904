//! Display name canonicalization and image path planning.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// File extension of rendered outline images.
pub const IMAGE_EXTENSION: &str = "png";

/// Characters deleted from a display name after case folding.
const STRIPPED_CHARS: [char; 3] = ['(', ')', '.'];

/// Derives the filesystem-safe identifier for a display name.
///
/// Lowercases, replaces each space with `_`, then deletes `(`, `)` and `.`.
/// Accents, hyphens and surrounding whitespace are left untouched.
pub fn canonicalize(display_name: &str) -> String {
    display_name
        .to_lowercase()
        .chars()
        .filter_map(|ch| match ch {
            ' ' => Some('_'),
            c if STRIPPED_CHARS.contains(&c) => None,
            c => Some(c),
        })
        .collect()
}

/// Canonical identifier of a display name, used as an image filename stem.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CanonicalIdentifier(String);

impl CanonicalIdentifier {
    pub fn from_display_name(display_name: &str) -> Self {
        Self(canonicalize(display_name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Image filename for this identifier, e.g. `united_states.png`.
    pub fn file_name(&self) -> String {
        format!("{}.{IMAGE_EXTENSION}", self.0)
    }
}

impl fmt::Display for CanonicalIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Computes where the outline image for a display name lives.
///
/// This is the only place image paths are built. The database materializer
/// stores [`ArtifactPathPlanner::plan_string`] and the map pipeline renders to
/// [`ArtifactPathPlanner::plan`]; both come from the same join.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPathPlanner {
    output_folder: PathBuf,
}

impl ArtifactPathPlanner {
    pub fn new(output_folder: impl Into<PathBuf>) -> Self {
        Self {
            output_folder: output_folder.into(),
        }
    }

    pub fn output_folder(&self) -> &Path {
        &self.output_folder
    }

    /// `<output_folder>/<canonical>.png`
    pub fn plan(&self, display_name: &str) -> PathBuf {
        self.output_folder
            .join(CanonicalIdentifier::from_display_name(display_name).file_name())
    }

    /// [`plan`](Self::plan) rendered as the text stored in the database.
    pub fn plan_string(&self, display_name: &str) -> String {
        self.plan(display_name).to_string_lossy().into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonicalize_applies_fold_replace_and_strip() {
        assert_eq!(canonicalize("United States"), "united_states");
        assert_eq!(canonicalize("Congo (Dem. Rep.)"), "congo_dem_rep");
        assert_eq!(canonicalize("St. Lucia"), "st_lucia");
        assert_eq!(canonicalize("FRANCE"), "france");
    }

    #[test]
    fn canonicalize_leaves_other_characters_alone() {
        assert_eq!(canonicalize("Côte d'Ivoire"), "côte_d'ivoire");
        assert_eq!(canonicalize("Guinea-Bissau"), "guinea-bissau");
        assert_eq!(canonicalize(" Chad "), "_chad_");
        assert_eq!(canonicalize(""), "");
    }

    #[test]
    fn identifier_file_name_uses_png_extension() {
        let id = CanonicalIdentifier::from_display_name("Sri Lanka");
        assert_eq!(id.as_str(), "sri_lanka");
        assert_eq!(id.file_name(), "sri_lanka.png");
        assert_eq!(id.to_string(), "sri_lanka");
    }

    #[test]
    fn planner_joins_folder_and_file_name() {
        let planner = ArtifactPathPlanner::new("stylized_maps");
        assert_eq!(
            planner.plan("France"),
            Path::new("stylized_maps").join("france.png")
        );
        assert_eq!(
            planner.plan_string("France"),
            Path::new("stylized_maps")
                .join("france.png")
                .to_string_lossy()
        );
    }
}

//! Per-country progress through the map pipeline.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use geoquiz_model::CanonicalIdentifier;

/// Where a country is in `Pending -> Matched -> Rendered | RenderFailed`
/// or `Pending -> Unmatched`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CountryState {
    Pending,
    /// Found in the boundary dataset; `matches` entities share the name.
    Matched { matches: usize },
    Rendered,
    RenderFailed { reason: String },
    Unmatched,
}

impl CountryState {
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            Self::Rendered | Self::RenderFailed { .. } | Self::Unmatched
        )
    }

    /// Terminal states that produce a manifest entry.
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::RenderFailed { .. } | Self::Unmatched)
    }

    /// Lookup result: `Matched` when any entity shares the name.
    pub fn after_lookup(self, matches: usize) -> Self {
        debug_assert_eq!(self, Self::Pending);
        if matches == 0 {
            Self::Unmatched
        } else {
            Self::Matched { matches }
        }
    }

    /// Render result for a matched country.
    pub fn after_render(self, result: Result<(), String>) -> Self {
        debug_assert!(matches!(self, Self::Matched { .. }));
        match result {
            Ok(()) => Self::Rendered,
            Err(reason) => Self::RenderFailed { reason },
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Matched { .. } => "matched",
            Self::Rendered => "rendered",
            Self::RenderFailed { .. } => "render failed",
            Self::Unmatched => "unmatched",
        }
    }
}

impl fmt::Display for CountryState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RenderFailed { reason } => write!(f, "render failed: {reason}"),
            other => f.write_str(other.label()),
        }
    }
}

/// Final state of one source row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryOutcome {
    pub display_name: String,
    pub canonical: CanonicalIdentifier,
    pub destination: PathBuf,
    pub state: CountryState,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_path() {
        let state = CountryState::Pending.after_lookup(1);
        assert_eq!(state, CountryState::Matched { matches: 1 });
        assert!(!state.is_terminal());
        let state = state.after_render(Ok(()));
        assert!(state.is_terminal());
        assert!(!state.is_missing());
    }

    #[test]
    fn failure_paths_are_missing() {
        let unmatched = CountryState::Pending.after_lookup(0);
        assert_eq!(unmatched, CountryState::Unmatched);
        assert!(unmatched.is_missing());

        let failed = CountryState::Pending
            .after_lookup(2)
            .after_render(Err("disk full".to_string()));
        assert!(failed.is_terminal());
        assert!(failed.is_missing());
        assert_eq!(failed.to_string(), "render failed: disk full");
    }
}

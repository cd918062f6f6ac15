//! Whole-play processing.

use serde::{Deserialize, Serialize};

use cast_rules::PlayConfig;

use crate::coappearance::CoappearanceGraph;
use crate::stage::{Diagnostic, SceneReport, Stage, StageError};

/// One act of a play, already split into scene texts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Act {
    /// Roman numeral label ("I", "II", ...).
    pub label: String,
    /// Scene texts in order, each starting with its scene marker.
    pub scenes: Vec<String>,
}

impl Act {
    /// Create an act from its label and scene texts.
    pub fn new<I, S>(label: impl Into<String>, scenes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            label: label.into(),
            scenes: scenes.into_iter().map(Into::into).collect(),
        }
    }
}

/// Result of processing a whole play.
#[derive(Debug, Clone)]
pub struct PlayReport {
    pub graph: CoappearanceGraph,
    /// One report per scene, in play order.
    pub scenes: Vec<SceneReport>,
}

impl PlayReport {
    /// All diagnostics raised across the play.
    pub fn diagnostics(&self) -> impl Iterator<Item = &Diagnostic> {
        self.scenes.iter().flat_map(|s| s.diagnostics.iter())
    }
}

/// Run every scene of every act, in order, into a fresh graph.
pub fn process_play(config: &PlayConfig, acts: &[Act]) -> Result<PlayReport, StageError> {
    let stage = Stage::new(config);
    let mut graph = CoappearanceGraph::new(config.cast.clone());
    let mut scenes = Vec::new();

    for act in acts {
        for text in &act.scenes {
            scenes.push(stage.process_scene(&act.label, text, &mut graph)?);
        }
    }

    let report = PlayReport { graph, scenes };
    log::info!(
        "processed {} scenes of '{}': {} linked pairs, {} diagnostics",
        report.scenes.len(),
        config.title,
        report.graph.pairs().count(),
        report.diagnostics().count()
    );
    Ok(report)
}

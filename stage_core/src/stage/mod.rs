//! The stage - a presence state machine driven by stage directions.
//!
//! For each scene the stage works as follows:
//! 1. **Extract**: Pull typed directions out of the scene text
//! 2. **Open**: The first scene marker names the scene and seeds anyone
//!    the opening text describes as already asleep on stage
//! 3. **Track**: Entrances, exits, speaker headings and sleep directions
//!    update the on-stage and asleep sets, in order, once each
//! 4. **Record**: Every entrance records co-appearances between the
//!    newcomers and between newcomers and everyone already on stage
//!
//! Presence never carries over between scenes; only the graph does.

mod diagnostic;
mod presence;

pub use diagnostic::*;
pub use presence::*;

use cast_rules::{AliasResolver, PlayConfig};

use crate::coappearance::{CoappearanceGraph, SceneId};
use crate::directions::{extract, proper_nouns, scene_intro, SleepSubject, StageDirection};

/// Outcome of processing one scene.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SceneReport {
    /// None if the scene never had a usable marker.
    pub scene: Option<SceneId>,
    /// Number of directions processed.
    pub directions: usize,
    pub diagnostics: Vec<Diagnostic>,
    /// Characters still on stage when the text ran out.
    pub on_stage: Vec<String>,
}

/// Per-scene state, discarded when the scene ends.
struct SceneState<'t> {
    act: &'t str,
    intro: &'t str,
    on_stage: OnStage,
    speaker: Option<String>,
    previous_speaker: Option<String>,
    scene: Option<SceneId>,
    /// Set by the first entrance; sleepers are only seeded before it.
    entered: bool,
    directions: usize,
    diagnostics: Vec<Diagnostic>,
}

impl<'t> SceneState<'t> {
    fn new(act: &'t str, intro: &'t str) -> Self {
        Self {
            act,
            intro,
            on_stage: OnStage::new(),
            speaker: None,
            previous_speaker: None,
            scene: None,
            entered: false,
            directions: 0,
            diagnostics: Vec::new(),
        }
    }

    fn label(&self) -> String {
        match &self.scene {
            Some(scene) => scene.to_string(),
            None => format!("{}?", self.act),
        }
    }

    fn report(&mut self, diagnostic: Diagnostic) {
        match diagnostic {
            Diagnostic::UnresolvedAlias { .. } => log::debug!("[{}] {}", self.label(), diagnostic),
            _ => log::warn!("[{}] {}", self.label(), diagnostic),
        }
        self.diagnostics.push(diagnostic);
    }

    fn remove(&mut self, name: &str) {
        if let Err(PresenceError::NotOnStage(character)) = self.on_stage.remove(name) {
            self.report(Diagnostic::AbsentExit { character });
        }
    }

    fn fall_asleep(&mut self, name: &str) {
        if let Err(PresenceError::NotOnStage(character)) = self.on_stage.fall_asleep(name) {
            self.report(Diagnostic::AbsentSleeper { character });
        }
    }

    fn finish(self) -> SceneReport {
        SceneReport {
            scene: self.scene,
            directions: self.directions,
            diagnostics: self.diagnostics,
            on_stage: self.on_stage.present().to_vec(),
        }
    }
}

/// Processes scenes of one play against its configuration.
pub struct Stage<'c> {
    config: &'c PlayConfig,
    resolver: AliasResolver<'c>,
}

impl<'c> Stage<'c> {
    /// Create a stage for the given play.
    pub fn new(config: &'c PlayConfig) -> Self {
        Self {
            config,
            resolver: config.resolver(),
        }
    }

    /// Run one scene's text through the stage, recording into `graph`.
    ///
    /// Anomalies in the directions are returned in the report and never stop
    /// the scene. Only a scene that cannot be processed at all is an error.
    pub fn process_scene(
        &self,
        act: &str,
        text: &str,
        graph: &mut CoappearanceGraph,
    ) -> Result<SceneReport, StageError> {
        if text.trim().is_empty() {
            return Err(StageError::EmptyScene {
                act: act.to_string(),
            });
        }

        let mut state = SceneState::new(act, scene_intro(text));
        for direction in extract(text) {
            log::debug!("[{}] {}", state.label(), direction.kind());
            self.apply(&mut state, direction, graph)?;
            state.directions += 1;
        }

        Ok(state.finish())
    }

    fn apply(
        &self,
        state: &mut SceneState<'_>,
        direction: StageDirection,
        graph: &mut CoappearanceGraph,
    ) -> Result<(), StageError> {
        match direction {
            StageDirection::SceneMarker { numeral } => self.open_scene(state, &numeral, graph),
            StageDirection::Entrance { phrase, names } => {
                let scene = state.scene.clone().ok_or_else(|| StageError::MissingSceneMarker {
                    act: state.act.to_string(),
                })?;
                let entering = match self.config.entrance_groups.get(&phrase) {
                    Some(group) => group.iter().map(|c| c.to_string()).collect(),
                    None => names,
                };
                self.record_arrival(state, &entering, &scene, graph);
                state.on_stage.enter(&entering);
                state.entered = true;
            }
            StageDirection::Speaker { name } => {
                if let Some(current) = state.speaker.take() {
                    state.previous_speaker = Some(current);
                }
                state.on_stage.wake(&name);
                state.speaker = Some(name);
            }
            StageDirection::Exit => self.speaker_exits(state),
            StageDirection::ExeuntAll => {
                let left = state.on_stage.exeunt_awake();
                log::debug!("[{}] exeunt {:?}", state.label(), left);
            }
            StageDirection::NamedExit { names } => {
                for name in &names {
                    self.named_exit(state, name);
                }
            }
            StageDirection::ExitAndSleep { exiting, sleepers } => {
                for name in &exiting {
                    self.named_exit(state, name);
                }
                for name in &sleepers {
                    state.fall_asleep(name);
                }
            }
            StageDirection::ExeuntAllBut { names } => {
                let left = state.on_stage.retain_only(&names);
                log::debug!("[{}] exeunt all but {:?}: {:?}", state.label(), names, left);
            }
            StageDirection::Sleep { subject } => {
                let mut sleepers: Vec<String> = state.speaker.iter().cloned().collect();
                if subject == SleepSubject::SpeakerAndPrevious {
                    sleepers.extend(state.previous_speaker.iter().cloned());
                }
                for name in &sleepers {
                    state.fall_asleep(name);
                }
            }
        }

        Ok(())
    }

    /// Name the scene, unless the marker is a false match mid-scene.
    fn open_scene(&self, state: &mut SceneState<'_>, numeral: &str, graph: &mut CoappearanceGraph) {
        if !state.on_stage.is_empty() {
            log::debug!("[{}] ignoring scene marker {} on an occupied stage", state.label(), numeral);
            return;
        }

        let scene = SceneId::new(state.act, numeral);
        state.scene = Some(scene.clone());

        if !state.entered {
            self.seed_sleepers(state, &scene, graph);
        }
    }

    /// Put anyone the opening text leaves asleep on stage.
    fn seed_sleepers(&self, state: &mut SceneState<'_>, scene: &SceneId, graph: &mut CoappearanceGraph) {
        if !state.intro.contains("asleep") {
            return;
        }

        let mut sleepers: Vec<String> = self
            .config
            .sleeper_titles
            .iter()
            .filter(|(title, _)| state.intro.contains(title.as_str()))
            .map(|(_, character)| character.to_string())
            .collect();

        if sleepers.is_empty() {
            let last_line = state.intro.lines().last().unwrap_or("").trim();
            sleepers = proper_nouns(last_line);
        }

        self.record_arrival(state, &sleepers, scene, graph);
        state.on_stage.enter(&sleepers);
        for name in &sleepers {
            state.fall_asleep(name);
        }
        log::debug!("[{}] already asleep: {:?}", scene, sleepers);
    }

    /// Record co-appearances for characters arriving on stage.
    ///
    /// Contextual aliases are settled for the newcomers only. Whoever is
    /// already on stage gets fixed aliases and roles substituted, so an
    /// earlier unsettled alias stays unsettled.
    fn record_arrival(
        &self,
        state: &mut SceneState<'_>,
        arriving: &[String],
        scene: &SceneId,
        graph: &mut CoappearanceGraph,
    ) {
        let arriving = self.resolver.resolve(arriving);
        let present = self.resolver.resolve_fixed(state.on_stage.present());

        for alias in arriving.unresolved {
            state.report(Diagnostic::UnresolvedAlias { alias });
        }

        graph.record(&arriving.names, &arriving.names, scene);
        graph.record(&present, &arriving.names, scene);
    }

    /// "Exit." - the current speaker leaves, or the character playing them.
    fn speaker_exits(&self, state: &mut SceneState<'_>) {
        let Some(speaker) = state.speaker.clone() else {
            state.report(Diagnostic::ExitWithoutSpeaker);
            return;
        };

        if state.on_stage.contains(&speaker) {
            state.remove(&speaker);
        } else if let Some(actor) = self.config.internal_cast.outer_identity(&speaker) {
            state.remove(actor.as_str());
        } else {
            state.report(Diagnostic::UnmappedActor { speaker });
        }
    }

    /// One name from an exit direction, which may stand for a group.
    fn named_exit(&self, state: &mut SceneState<'_>, name: &str) {
        match self.config.exit_groups.get(name) {
            Some(group) => {
                let departing: Vec<String> = group
                    .departing(state.on_stage.present())
                    .into_iter()
                    .map(str::to_string)
                    .collect();
                for member in &departing {
                    state.remove(member);
                }
            }
            None => state.remove(name),
        }
    }
}

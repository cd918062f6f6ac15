//! Recoverable anomalies and hard scene failures.

use thiserror::Error;

/// Something in a scene's directions did not fit the stage. Processing
/// carries on after every one of these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Diagnostic {
    #[error("{character} exits but is not on stage")]
    AbsentExit { character: String },

    #[error("{character} falls asleep but is not on stage")]
    AbsentSleeper { character: String },

    #[error("speaker {speaker} exits but is neither on stage nor a known role")]
    UnmappedActor { speaker: String },

    #[error("exit with no current speaker")]
    ExitWithoutSpeaker,

    #[error("could not resolve {alias} from the names entering with it")]
    UnresolvedAlias { alias: String },
}

/// A scene that cannot be processed at all.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StageError {
    #[error("act {act}: scene text is empty")]
    EmptyScene { act: String },

    #[error("act {act}: characters enter before any scene marker")]
    MissingSceneMarker { act: String },
}

//! Stage directions - typed tokens pulled out of raw scene text.
//!
//! The extractor matches surface patterns in the text and classifies every
//! match immediately, so the stage only ever sees one of these variants.

mod extract;

pub use extract::*;

use serde::{Deserialize, Serialize};

/// Who a subjectless sleep direction refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SleepSubject {
    /// "Sleeps." / "Lies down and sleeps."
    Speaker,
    /// "They sleep." - the current and the previous speaker.
    SpeakerAndPrevious,
}

/// A stage direction, in the order it appears in the scene.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum StageDirection {
    /// Scene number, e.g. "II." carries numeral "II".
    SceneMarker { numeral: String },

    /// "Enter Theseus, Hippolyta, Philostrate, with Attendants."
    Entrance {
        /// Text after "Enter", without the closing period.
        phrase: String,
        names: Vec<String>,
    },

    /// An all-caps speaker heading, title-cased ("QUINCE." -> "Quince").
    Speaker { name: String },

    /// "Exit." - the current speaker leaves.
    Exit,

    /// "Exeunt." - everyone awake leaves.
    ExeuntAll,

    /// "Exit Puck." / "Exeunt Lysander and Hermia."
    NamedExit { names: Vec<String> },

    /// "Exeunt all but Bottom."
    ExeuntAllBut { names: Vec<String> },

    /// "Exeunt Fairies. Titania sleeps."
    ExitAndSleep {
        exiting: Vec<String>,
        sleepers: Vec<String>,
    },

    /// A sleep direction with no explicit subject.
    Sleep { subject: SleepSubject },
}

impl StageDirection {
    /// Short label for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            StageDirection::SceneMarker { .. } => "scene_marker",
            StageDirection::Entrance { .. } => "entrance",
            StageDirection::Speaker { .. } => "speaker",
            StageDirection::Exit => "exit",
            StageDirection::ExeuntAll => "exeunt_all",
            StageDirection::NamedExit { .. } => "named_exit",
            StageDirection::ExeuntAllBut { .. } => "exeunt_all_but",
            StageDirection::ExitAndSleep { .. } => "exit_and_sleep",
            StageDirection::Sleep { .. } => "sleep",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_kind() {
        assert_eq!(StageDirection::Exit.kind(), "exit");
        assert_eq!(
            StageDirection::Sleep {
                subject: SleepSubject::Speaker
            }
            .kind(),
            "sleep"
        );
        assert_eq!(
            StageDirection::NamedExit {
                names: vec!["Puck".into()]
            }
            .kind(),
            "named_exit"
        );
    }
}

//! Scene identifiers.

use serde::{Deserialize, Serialize};

/// Opaque tag for one scene of the play.
///
/// Built from the act label followed by the lower-cased scene numeral, so
/// act "II" scene "I." becomes `IIi`. Only equality matters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SceneId(String);

impl SceneId {
    /// Compose a scene id from an act label and a scene numeral.
    pub fn new(act: &str, numeral: &str) -> Self {
        let numeral = numeral.trim_end_matches('.').to_lowercase();
        Self(format!("{}{}", act, numeral))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SceneId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

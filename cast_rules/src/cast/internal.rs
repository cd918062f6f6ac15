//! The cast of a play-within-a-play.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::Character;

/// Maps a role in an embedded play to the character performing it.
///
/// Speakers and exits inside the embedded play use the role name
/// ("Pyramus", "Wall"); co-appearances are always recorded against the
/// outer identity ("Bottom", "Snout").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct InternalCast {
    roles: BTreeMap<String, Character>,
}

impl InternalCast {
    /// Create an empty internal cast.
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign a role to a character.
    pub fn with_role(mut self, role: impl Into<String>, actor: impl Into<Character>) -> Self {
        self.roles.insert(role.into(), actor.into());
        self
    }

    /// Get the character playing a role.
    pub fn outer_identity(&self, role: &str) -> Option<&Character> {
        self.roles.get(role)
    }

    /// Iterate over (role, actor) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Character)> {
        self.roles.iter().map(|(role, actor)| (role.as_str(), actor))
    }

    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }
}

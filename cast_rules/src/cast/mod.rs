//! Character definitions for the play.

mod internal;

pub use internal::*;

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;

/// Canonical identifier for a character, as it appears in the cast list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Character(String);

impl Character {
    /// Create a character identifier from a name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Character {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Character {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl AsRef<str> for Character {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Character {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Character {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Character {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl std::fmt::Display for Character {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The recognized cast of a play.
///
/// Only members of the cast ever accumulate co-appearances. Order is the
/// order the cast was supplied in and duplicates are dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(from = "Vec<Character>", into = "Vec<Character>")]
pub struct Cast {
    members: Vec<Character>,
}

impl Cast {
    /// Create an empty cast.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a character. Returns false if they were already listed.
    pub fn add(&mut self, character: impl Into<Character>) -> bool {
        let character = character.into();
        if self.members.contains(&character) {
            return false;
        }
        self.members.push(character);
        true
    }

    /// Check if a name belongs to the cast.
    pub fn contains(&self, name: &str) -> bool {
        self.members.iter().any(|c| c == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Character> {
        self.members.iter()
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

impl From<Vec<Character>> for Cast {
    fn from(members: Vec<Character>) -> Self {
        members.into_iter().collect()
    }
}

impl From<Cast> for Vec<Character> {
    fn from(cast: Cast) -> Self {
        cast.members
    }
}

impl<C: Into<Character>> FromIterator<C> for Cast {
    fn from_iter<I: IntoIterator<Item = C>>(iter: I) -> Self {
        let mut cast = Cast::new();
        for character in iter {
            cast.add(character);
        }
        cast
    }
}

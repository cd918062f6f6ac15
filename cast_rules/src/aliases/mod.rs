//! Alias tables: collective nouns, contextual names and group exits.

mod resolver;

pub use resolver::*;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::cast::Character;

/// Fixed mapping from collective or alternate names to canonical characters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct AliasTable {
    entries: BTreeMap<String, Character>,
}

impl AliasTable {
    /// Create an empty alias table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an alias.
    pub fn with_alias(mut self, alias: impl Into<String>, canonical: impl Into<Character>) -> Self {
        self.entries.insert(alias.into(), canonical.into());
        self
    }

    /// Get the canonical name for an alias.
    pub fn canonical(&self, alias: &str) -> Option<&Character> {
        self.entries.get(alias)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Character)> {
        self.entries.iter().map(|(alias, c)| (alias.as_str(), c))
    }
}

/// A name whose canonical character depends on who else is named with it.
///
/// Rules are tried in order and the first one whose `when_any` list shares a
/// name with the surrounding list wins. When no rule applies the alias is
/// left as is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextualAlias {
    pub alias: String,
    pub rules: Vec<ContextRule>,
}

/// One branch of a contextual alias.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextRule {
    /// Names whose presence selects this rule.
    pub when_any: Vec<String>,
    pub resolve_to: Character,
}

impl ContextualAlias {
    /// Create a contextual alias with no rules.
    pub fn new(alias: impl Into<String>) -> Self {
        Self {
            alias: alias.into(),
            rules: Vec::new(),
        }
    }

    /// Add a rule.
    pub fn when_any<I, S>(mut self, names: I, resolve_to: impl Into<Character>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rules.push(ContextRule {
            when_any: names.into_iter().map(Into::into).collect(),
            resolve_to: resolve_to.into(),
        });
        self
    }

    /// Pick the canonical character given the other names in a list.
    pub fn select<'a, S: AsRef<str>>(&'a self, context: &[S]) -> Option<&'a Character> {
        self.rules
            .iter()
            .find(|rule| {
                rule.when_any
                    .iter()
                    .any(|name| context.iter().any(|c| c.as_ref() == name.as_str()))
            })
            .map(|rule| &rule.resolve_to)
    }
}

/// How a group name in an exit direction maps onto stage members.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum ExitGroup {
    /// Remove the first listed member that is on stage.
    FirstPresent { members: Vec<String> },
    /// Remove every listed member that is on stage.
    AllPresent { members: Vec<String> },
    /// The name does not remove anyone.
    Ignore,
}

impl ExitGroup {
    /// Names this group removes from the given on-stage list.
    pub fn departing<'a, S: AsRef<str>>(&'a self, on_stage: &[S]) -> Vec<&'a str> {
        let present = |name: &&String| on_stage.iter().any(|s| s.as_ref() == name.as_str());
        match self {
            ExitGroup::FirstPresent { members } => members
                .iter()
                .find(present)
                .map(|m| vec![m.as_str()])
                .unwrap_or_default(),
            ExitGroup::AllPresent { members } => {
                members.iter().filter(present).map(|m| m.as_str()).collect()
            }
            ExitGroup::Ignore => Vec::new(),
        }
    }
}

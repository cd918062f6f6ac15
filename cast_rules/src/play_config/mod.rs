//! Play configuration - every table the stage engine consults for one play.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use thiserror::Error;

use crate::aliases::{AliasResolver, AliasTable, ContextualAlias, ExitGroup};
use crate::cast::{Cast, Character, InternalCast};

const MIDSUMMER_TOML: &str = include_str!("../../plays/midsummer.toml");

/// Errors raised while loading a play configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read play config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse play config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("{table} refers to {name}, who is not in the cast")]
    UnknownCharacter { table: &'static str, name: String },
}

/// All immutable data describing one play.
///
/// Nothing in here changes while scenes are processed.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PlayConfig {
    #[serde(default)]
    pub title: String,

    /// The recognized cast. Names outside it never accumulate.
    pub cast: Cast,

    /// Collective nouns and alternate names.
    #[serde(default)]
    pub aliases: AliasTable,

    /// Names resolved by who else shares the direction.
    #[serde(default)]
    pub contextual_aliases: Vec<ContextualAlias>,

    /// Roles in the play-within-a-play.
    #[serde(default)]
    pub internal_cast: InternalCast,

    /// Group names that exit directions use for several characters.
    #[serde(default)]
    pub exit_groups: BTreeMap<String, ExitGroup>,

    /// Entrance phrases that stand for a fixed list of characters.
    #[serde(default)]
    pub entrance_groups: BTreeMap<String, Vec<Character>>,

    /// Titles used in opening directions in place of a character's name.
    #[serde(default)]
    pub sleeper_titles: BTreeMap<String, Character>,
}

impl PlayConfig {
    /// Parse and validate a configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: PlayConfig = toml::from_str(text)?;
        config.validate()?;
        log::debug!(
            "loaded play config '{}' with {} characters",
            config.title,
            config.cast.len()
        );
        Ok(config)
    }

    /// Load a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// The bundled configuration for A Midsummer Night's Dream.
    pub fn midsummer() -> Result<Self, ConfigError> {
        Self::from_toml_str(MIDSUMMER_TOML)
    }

    /// A configuration with only a cast and no substitution tables.
    pub fn with_cast<I, C>(cast: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Character>,
    {
        Self {
            cast: cast.into_iter().collect(),
            ..Default::default()
        }
    }

    /// Resolver over this play's alias tables.
    pub fn resolver(&self) -> AliasResolver<'_> {
        AliasResolver::new(&self.aliases, &self.contextual_aliases, &self.internal_cast)
    }

    /// Check that every table only points at cast members.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let check = |table: &'static str, name: &Character| {
            if self.cast.contains(name.as_str()) {
                Ok(())
            } else {
                Err(ConfigError::UnknownCharacter {
                    table,
                    name: name.to_string(),
                })
            }
        };

        for (_, canonical) in self.aliases.iter() {
            check("aliases", canonical)?;
        }
        for contextual in &self.contextual_aliases {
            for rule in &contextual.rules {
                check("contextual_aliases", &rule.resolve_to)?;
            }
        }
        for (_, actor) in self.internal_cast.iter() {
            check("internal_cast", actor)?;
        }
        for members in self.entrance_groups.values() {
            for member in members {
                check("entrance_groups", member)?;
            }
        }
        for character in self.sleeper_titles.values() {
            check("sleeper_titles", character)?;
        }

        Ok(())
    }
}

//! Alias resolution - turns stage-direction names into canonical characters.

use super::{AliasTable, ContextualAlias};
use crate::cast::InternalCast;

/// Result of resolving a list of names.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Resolution {
    /// Names in their original order with aliases replaced.
    pub names: Vec<String>,
    /// Contextual aliases that no rule could settle. They are also left in
    /// `names` unchanged.
    pub unresolved: Vec<String>,
}

/// Resolves collective nouns, contextual aliases and embedded-play roles.
///
/// The resolver only reads its tables; it never changes them.
#[derive(Debug, Clone, Copy)]
pub struct AliasResolver<'a> {
    aliases: &'a AliasTable,
    contextual: &'a [ContextualAlias],
    internal_cast: &'a InternalCast,
}

impl<'a> AliasResolver<'a> {
    /// Create a resolver over the given tables.
    pub fn new(
        aliases: &'a AliasTable,
        contextual: &'a [ContextualAlias],
        internal_cast: &'a InternalCast,
    ) -> Self {
        Self {
            aliases,
            contextual,
            internal_cast,
        }
    }

    /// Resolve a list of names.
    ///
    /// Fixed aliases and internal-cast roles are substituted first, in place
    /// (see [`AliasResolver::resolve_fixed`]). Contextual aliases are then
    /// settled against the substituted list.
    pub fn resolve<S: AsRef<str>>(&self, names: &[S]) -> Resolution {
        let mut resolved = self.resolve_fixed(names);

        let mut unresolved = Vec::new();
        for contextual in self.contextual {
            let Some(index) = resolved.iter().position(|r| *r == contextual.alias) else {
                continue;
            };

            match contextual.select(&resolved) {
                Some(canonical) => {
                    if resolved.iter().any(|r| r == canonical.as_str()) {
                        resolved.remove(index);
                    } else {
                        resolved[index] = canonical.to_string();
                    }
                }
                None => unresolved.push(contextual.alias.clone()),
            }
        }

        Resolution {
            names: resolved,
            unresolved,
        }
    }

    /// Substitute fixed aliases and internal-cast roles only.
    ///
    /// A substitution whose canonical name is already in the list drops the
    /// alias instead of duplicating it. Contextual aliases are left as
    /// written.
    pub fn resolve_fixed<S: AsRef<str>>(&self, names: &[S]) -> Vec<String> {
        let mut resolved: Vec<String> = Vec::with_capacity(names.len());

        for name in names {
            let name = name.as_ref();
            let canonical = self
                .aliases
                .canonical(name)
                .or_else(|| self.internal_cast.outer_identity(name))
                .map(|c| c.as_str())
                .unwrap_or(name);

            if !resolved.iter().any(|r| r == canonical) {
                resolved.push(canonical.to_string());
            }
        }

        resolved
    }
}

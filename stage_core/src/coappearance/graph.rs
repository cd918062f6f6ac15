//! Co-appearance graph - the symmetric "who shared the stage with whom" relation.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::SceneId;
use cast_rules::{Cast, Character};

/// Scenes in which one character shared the stage with a partner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coappearance {
    pub partner: Character,
    /// In the order they were first recorded, without duplicates.
    pub scenes: Vec<SceneId>,
}

/// The co-appearance relation for a whole play.
///
/// Rows exist for every recognized cast member and for nobody else. Every
/// update is applied in both directions, so `scenes(a, b)` always equals
/// `scenes(b, a)`. Nothing is ever removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct CoappearanceGraph {
    cast: Cast,

    /// Adjacency list: character -> partners with shared scenes.
    rows: BTreeMap<Character, Vec<Coappearance>>,
}

impl CoappearanceGraph {
    /// Create an empty graph over the given cast.
    pub fn new(cast: Cast) -> Self {
        let rows = cast.iter().map(|c| (c.clone(), Vec::new())).collect();
        Self { cast, rows }
    }

    /// An empty graph over the same cast, for processing a scene separately
    /// before merging it back.
    pub fn empty_like(&self) -> Self {
        Self::new(self.cast.clone())
    }

    /// The recognized cast.
    pub fn cast(&self) -> &Cast {
        &self.cast
    }

    /// Check if a name can accumulate co-appearances.
    pub fn is_member(&self, name: &str) -> bool {
        self.rows.contains_key(name)
    }

    /// Record that every source shared the stage with every target in a scene.
    ///
    /// Pairs of a character with themselves and pairs involving anyone
    /// outside the cast are skipped. Returns the number of new (directed)
    /// entries.
    pub fn record<S, T>(&mut self, sources: &[S], targets: &[T], scene: &SceneId) -> usize
    where
        S: AsRef<str>,
        T: AsRef<str>,
    {
        let mut added = 0;

        for source in sources {
            let source = source.as_ref();
            if !self.is_member(source) {
                continue;
            }

            for target in targets {
                let target = target.as_ref();
                if target == source || !self.is_member(target) {
                    continue;
                }

                added += self.add_scene(source, target, scene);
                added += self.add_scene(target, source, scene);
            }
        }

        added
    }

    /// Append a scene to one direction of a pair. Returns 1 if it was new.
    fn add_scene(&mut self, from: &str, to: &str, scene: &SceneId) -> usize {
        let Some(row) = self.rows.get_mut(from) else {
            return 0;
        };

        let entry = match row.iter().position(|c| c.partner == to) {
            Some(index) => &mut row[index],
            None => {
                row.push(Coappearance {
                    partner: Character::new(to),
                    scenes: Vec::new(),
                });
                let last = row.len() - 1;
                &mut row[last]
            }
        };

        if entry.scenes.contains(scene) {
            0
        } else {
            entry.scenes.push(scene.clone());
            1
        }
    }

    /// Scenes two characters shared.
    pub fn scenes(&self, a: &str, b: &str) -> &[SceneId] {
        self.partners(a)
            .iter()
            .find(|c| c.partner == b)
            .map(|c| c.scenes.as_slice())
            .unwrap_or(&[])
    }

    /// Number of scenes two characters shared.
    pub fn count(&self, a: &str, b: &str) -> usize {
        self.scenes(a, b).len()
    }

    /// Everyone a character has shared the stage with.
    pub fn partners(&self, name: &str) -> &[Coappearance] {
        self.rows.get(name).map(|v| v.as_slice()).unwrap_or(&[])
    }

    /// Each linked pair once, as (a, b, scenes) with `a < b`.
    pub fn pairs(&self) -> impl Iterator<Item = (&Character, &Character, &[SceneId])> {
        self.rows.iter().flat_map(|(a, row)| {
            row.iter()
                .filter(move |c| *a < c.partner)
                .map(move |c| (a, &c.partner, c.scenes.as_slice()))
        })
    }

    /// Full cast-by-cast matrix of shared scene counts, zeros included.
    pub fn counts(&self) -> BTreeMap<Character, BTreeMap<Character, usize>> {
        self.cast
            .iter()
            .map(|a| {
                let row = self
                    .cast
                    .iter()
                    .filter(|b| *b != a)
                    .map(|b| (b.clone(), self.count(a.as_str(), b.as_str())))
                    .collect();
                (a.clone(), row)
            })
            .collect()
    }

    /// Fold another graph's entries into this one.
    ///
    /// Scenes are appended in the other graph's order and duplicates are
    /// skipped, so merging per-scene graphs in scene order gives the same
    /// result as recording into one graph.
    pub fn merge(&mut self, other: &CoappearanceGraph) {
        for (from, row) in &other.rows {
            if !self.is_member(from.as_str()) {
                continue;
            }
            for coappearance in row {
                if !self.is_member(coappearance.partner.as_str()) {
                    continue;
                }
                for scene in &coappearance.scenes {
                    self.add_scene(from.as_str(), coappearance.partner.as_str(), scene);
                }
            }
        }
    }

    /// Check that every entry has an identical mirror entry.
    pub fn is_symmetric(&self) -> bool {
        self.rows.iter().all(|(a, row)| {
            row.iter()
                .all(|c| self.scenes(c.partner.as_str(), a.as_str()) == c.scenes.as_slice())
        })
    }
}

//! Insertion-ordered, first-write-wins skill registries.

use std::collections::HashMap;

use tracing::trace;

use super::metadata::resolve;
use super::skill::{HardSkillMeta, RegistryEntry, SkillKind};

/// Registry keyed by entry id that remembers insertion order.
///
/// Inserting an id that is already present leaves the stored entry untouched.
/// Iteration and [`into_entries`](Self::into_entries) follow first-insertion
/// order; serialized registries depend on that.
#[derive(Debug, Clone)]
pub struct OrderedRegistry<T> {
    entries: Vec<T>,
    index: HashMap<String, usize>,
}

impl<T> Default for OrderedRegistry<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<T: RegistryEntry> OrderedRegistry<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `entry` unless its id is already registered.
    ///
    /// Returns `true` when the entry was stored.
    pub fn insert(&mut self, entry: T) -> bool {
        if self.index.contains_key(entry.registry_id()) {
            return false;
        }
        self.index
            .insert(entry.registry_id().to_string(), self.entries.len());
        self.entries.push(entry);
        true
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&T> {
        self.index.get(id).map(|&pos| &self.entries[pos])
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.entries.iter()
    }

    #[must_use]
    pub fn into_entries(self) -> Vec<T> {
        self.entries
    }
}

impl<T: RegistryEntry> FromIterator<T> for OrderedRegistry<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut registry = Self::new();
        for entry in iter {
            registry.insert(entry);
        }
        registry
    }
}

pub type HardSkillRegistry = OrderedRegistry<HardSkillMeta>;

/// Collects hard-skill occurrences across every job into one registry.
#[derive(Debug, Default)]
pub struct HardSkillAccumulator {
    registry: HardSkillRegistry,
    occurrences: usize,
}

impl HardSkillAccumulator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one raw name. Later spellings of a known id are discarded.
    pub fn observe(&mut self, raw: &str, kind: SkillKind) {
        self.occurrences += 1;
        let meta = resolve(raw, kind);
        let id = meta.id.clone();
        if !self.registry.insert(meta) {
            trace!(id = %id, raw, kind = %kind, "hard skill already registered");
        }
    }

    /// Total names observed, duplicates included.
    #[must_use]
    pub const fn occurrences(&self) -> usize {
        self.occurrences
    }

    /// Occurrences that collapsed onto an existing entry.
    #[must_use]
    pub fn duplicates(&self) -> usize {
        self.occurrences - self.registry.len()
    }

    #[must_use]
    pub const fn registry(&self) -> &HardSkillRegistry {
        &self.registry
    }

    #[must_use]
    pub fn finish(self) -> HardSkillRegistry {
        self.registry
    }
}

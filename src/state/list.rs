//! Ordered list of entries with append and remove-by-id.

use super::ids::{IdGenerator, RandomIdGenerator};
use serde::{Deserialize, Serialize};

/// One item in a user-maintained list, such as a todo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub id: String,
    pub text: String,
}

/// Owns an ordered sequence of [`Entry`] values.
///
/// Every operation is total: appending always succeeds and removing an id
/// that is not present leaves the list untouched. Ids come from the
/// generator and are never reused within one list.
#[derive(Debug, Clone, Default)]
pub struct EntryList<G: IdGenerator = RandomIdGenerator> {
    entries: Vec<Entry>,
    generator: G,
}

impl EntryList<RandomIdGenerator> {
    /// Create an empty list with random ids.
    pub fn new() -> Self {
        Self::with_generator(RandomIdGenerator::new())
    }
}

impl<G: IdGenerator> EntryList<G> {
    /// Create an empty list that draws ids from `generator`.
    pub fn with_generator(generator: G) -> Self {
        Self {
            entries: Vec::new(),
            generator,
        }
    }

    /// Append a new entry holding `text` and return the updated sequence.
    pub fn append(&mut self, text: impl Into<String>) -> &[Entry] {
        let mut id = self.generator.generate();
        // A colliding random id is astronomically unlikely, but ids must stay unique.
        while self.contains(&id) {
            id = self.generator.generate();
        }
        self.entries.push(Entry { id, text: text.into() });
        &self.entries
    }

    /// Remove the entry with `id`, if any, and return the updated sequence.
    pub fn remove(&mut self, id: &str) -> &[Entry] {
        self.entries.retain(|entry| entry.id != id);
        &self.entries
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn get(&self, id: &str) -> Option<&Entry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.entries.iter().position(|entry| entry.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

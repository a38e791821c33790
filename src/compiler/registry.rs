//! Placeholder occurrences for one compilation.

use std::collections::HashMap;

/// Maps each placeholder occurrence to a 0-based position, in the
/// left-to-right order the placeholders appear in the emitted SQL. A name
/// may occur more than once and then owns several positions.
#[derive(Debug, Default, Clone)]
pub struct PlaceholderRegistry {
    position_to_name: Vec<String>,
    name_to_positions: HashMap<String, Vec<usize>>,
}

impl PlaceholderRegistry {
    /// Record one occurrence and return its position.
    pub(crate) fn insert(&mut self, name: &str) -> usize {
        let position = self.position_to_name.len();
        self.position_to_name.push(name.to_string());
        self.name_to_positions
            .entry(name.to_string())
            .or_default()
            .push(position);
        position
    }

    /// Total number of placeholder occurrences.
    pub fn len(&self) -> usize {
        self.position_to_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.position_to_name.is_empty()
    }

    /// Number of distinct placeholder names.
    pub fn distinct_names(&self) -> usize {
        self.name_to_positions.len()
    }

    /// The name bound at a position.
    pub fn name_of(&self, position: usize) -> Option<&str> {
        self.position_to_name.get(position).map(String::as_str)
    }

    /// Every position a name occupies, in emission order.
    pub fn positions_of(&self, name: &str) -> Option<&[usize]> {
        self.name_to_positions.get(name).map(Vec::as_slice)
    }

    /// Names by position, in emission order (with repeats).
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.position_to_name.iter().map(String::as_str)
    }
}

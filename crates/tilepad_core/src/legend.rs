//! The identifier-to-name legend persisted with a level

use std::collections::BTreeMap;

use crate::TileId;

/// Identifier -> canonical-name mapping saved alongside the grid.
///
/// Backed by a `BTreeMap` so iteration, and therefore file emission, is
/// always ascending by identifier, keeping saved levels diff-friendly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Legend {
    entries: BTreeMap<TileId, String>,
}

impl Legend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace an entry.
    pub fn insert(&mut self, id: TileId, name: impl Into<String>) {
        self.entries.insert(id, name.into());
    }

    /// Name bound to `id`, if the legend knows it.
    pub fn name_of(&self, id: TileId) -> Option<&str> {
        self.entries.get(&id).map(String::as_str)
    }

    /// Entries in ascending identifier order.
    pub fn iter(&self) -> impl Iterator<Item = (TileId, &str)> {
        self.entries.iter().map(|(id, name)| (*id, name.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iteration_is_ascending_by_identifier() {
        let mut legend = Legend::new();
        legend.insert(9, "lava");
        legend.insert(1, "wall");
        legend.insert(4, "floor");

        let entries: Vec<(TileId, &str)> = legend.iter().collect();
        assert_eq!(entries, [(1, "wall"), (4, "floor"), (9, "lava")]);
    }

    #[test]
    fn test_insert_replaces_existing_entry() {
        let mut legend = Legend::new();
        legend.insert(1, "wall");
        legend.insert(1, "brick");

        assert_eq!(legend.len(), 1);
        assert_eq!(legend.name_of(1), Some("brick"));
    }

    #[test]
    fn test_name_of_unknown_identifier() {
        let legend = Legend::new();
        assert_eq!(legend.name_of(3), None);
    }
}

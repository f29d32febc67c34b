//! Texture registry: canonical names, identifiers, and the pending list

use std::collections::{BTreeMap, HashMap, HashSet};

use crate::{Legend, TextureRecord, TileId};

/// Session-lifetime bookkeeping for imported textures.
///
/// Every assigned record lives in `assigned` under its identifier and is
/// mirrored in `name_to_id`; unassigned records wait in `unassigned`, in
/// import order, until the user binds them. `name_to_id` can also carry
/// entries from a loaded legend whose image files are not currently imported,
/// so their identifiers survive a load/save cycle intact.
#[derive(Debug, Default)]
pub struct TextureRegistry {
    name_to_id: HashMap<String, TileId>,
    assigned: BTreeMap<TileId, TextureRecord>,
    unassigned: Vec<TextureRecord>,
}

impl TextureRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take in a freshly decoded record.
    ///
    /// If the canonical name already has an identifier (from a previously
    /// loaded legend), the record resumes that slot immediately. Otherwise it
    /// joins the pending list. Importing the same canonical name twice is an
    /// overwrite: the last record wins, keeping the earlier record's position
    /// when both are pending.
    pub fn import(&mut self, mut record: TextureRecord) {
        if let Some(&id) = self.name_to_id.get(&record.name) {
            record.id = Some(id);
            self.assigned.insert(id, record);
        } else if let Some(pos) = self.unassigned.iter().position(|r| r.name == record.name) {
            record.id = None;
            self.unassigned[pos] = record;
        } else {
            record.id = None;
            self.unassigned.push(record);
        }
    }

    /// Import a whole batch, preserving its order in the pending list.
    pub fn import_all<I>(&mut self, records: I)
    where
        I: IntoIterator<Item = TextureRecord>,
    {
        for record in records {
            self.import(record);
        }
    }

    /// Bind the smallest identifier not already in use (counting up from 1)
    /// to the pending record with this canonical name.
    ///
    /// Identifiers are never freed, so assignment keeps them densely packed.
    /// Returns `None` if no pending record has this name (the caller handed
    /// us a stale reference) or if every identifier is already bound; either
    /// way the pending list is left untouched.
    pub fn assign(&mut self, name: &str) -> Option<TileId> {
        let pos = self.unassigned.iter().position(|r| r.name == name)?;
        let id = self.next_free_id()?;
        let mut record = self.unassigned.remove(pos);
        record.id = Some(id);
        self.name_to_id.insert(record.name.clone(), id);
        self.assigned.insert(id, record);
        Some(id)
    }

    /// Smallest identifier no name is bound to, or `None` once all of them
    /// are taken. Scans `name_to_id` rather than `assigned` so identifiers
    /// held by legend entries whose image files are missing this session are
    /// still treated as taken.
    fn next_free_id(&self) -> Option<TileId> {
        let used: HashSet<TileId> = self.name_to_id.values().copied().collect();
        (1..=TileId::MAX).find(|id| !used.contains(id))
    }

    /// Rebuild the name map from a loaded legend, then re-partition every
    /// imported record against it, exactly as if each had been imported
    /// fresh.
    pub fn reconcile(&mut self, legend: &Legend) {
        self.name_to_id = legend
            .iter()
            .map(|(id, name)| (name.to_string(), id))
            .collect();
        let records: Vec<TextureRecord> = std::mem::take(&mut self.assigned)
            .into_values()
            .chain(std::mem::take(&mut self.unassigned))
            .collect();
        for record in records {
            self.import(record);
        }
    }

    /// Snapshot of the current name <-> identifier map, sorted ascending by
    /// identifier, ready to be written into a level file.
    pub fn legend(&self) -> Legend {
        let mut legend = Legend::new();
        for (name, &id) in &self.name_to_id {
            legend.insert(id, name.clone());
        }
        legend
    }

    /// Record assigned to `id`, if any.
    pub fn texture(&self, id: TileId) -> Option<&TextureRecord> {
        self.assigned.get(&id)
    }

    /// Identifier bound to a canonical name, if any.
    pub fn id_of(&self, name: &str) -> Option<TileId> {
        self.name_to_id.get(name).copied()
    }

    /// Assigned records in ascending identifier order (palette order).
    pub fn assigned(&self) -> impl Iterator<Item = (TileId, &TextureRecord)> {
        self.assigned.iter().map(|(id, record)| (*id, record))
    }

    /// Pending records in import order.
    pub fn unassigned(&self) -> &[TextureRecord] {
        &self.unassigned
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(path: &str) -> TextureRecord {
        TextureRecord::new(path, 16, 16, 4)
    }

    #[test]
    fn test_fresh_import_goes_to_pending() {
        let mut registry = TextureRegistry::new();
        registry.import_all([record("wall.png"), record("floor.png")]);

        assert!(registry.assigned().next().is_none());
        let pending: Vec<&str> = registry.unassigned().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(pending, ["wall", "floor"]);
    }

    #[test]
    fn test_assign_builds_legend_in_call_order() {
        let mut registry = TextureRegistry::new();
        registry.import_all([record("wall.png"), record("floor.png")]);

        assert_eq!(registry.assign("wall"), Some(1));
        assert_eq!(registry.assign("floor"), Some(2));
        assert!(registry.unassigned().is_empty());

        let mut expected = Legend::new();
        expected.insert(1, "wall");
        expected.insert(2, "floor");
        assert_eq!(registry.legend(), expected);
    }

    #[test]
    fn test_assigned_identifiers_are_densely_packed() {
        let mut registry = TextureRegistry::new();
        registry.import_all([record("a.png"), record("b.png"), record("c.png")]);

        registry.assign("c");
        registry.assign("a");
        registry.assign("b");

        let ids: Vec<TileId> = registry.assigned().map(|(id, _)| id).collect();
        assert_eq!(ids, [1, 2, 3]);
    }

    #[test]
    fn test_import_resumes_identifier_from_loaded_legend() {
        let mut legend = Legend::new();
        legend.insert(5, "wall");

        let mut registry = TextureRegistry::new();
        registry.reconcile(&legend);
        registry.import(record("tiles/wall.png"));

        assert!(registry.unassigned().is_empty());
        let texture = registry.texture(5).unwrap();
        assert_eq!(texture.name, "wall");
        assert_eq!(texture.id, Some(5));
    }

    #[test]
    fn test_duplicate_name_in_batch_last_wins() {
        let mut registry = TextureRegistry::new();
        registry.import(TextureRecord::new("old/wall.png", 16, 16, 4));
        registry.import(record("floor.png"));
        registry.import(TextureRecord::new("new/wall.png", 32, 32, 3));

        let pending: Vec<(&str, u32)> = registry
            .unassigned()
            .iter()
            .map(|r| (r.name.as_str(), r.width))
            .collect();
        assert_eq!(pending, [("wall", 32), ("floor", 16)]);
    }

    #[test]
    fn test_assign_unknown_name_returns_none() {
        let mut registry = TextureRegistry::new();
        registry.import(record("wall.png"));

        assert_eq!(registry.assign("door"), None);
        assert_eq!(registry.unassigned().len(), 1);
    }

    #[test]
    fn test_assign_stops_when_identifiers_run_out() {
        // Legend occupying every identifier except one
        let mut legend = Legend::new();
        for id in 1..=TileId::MAX {
            if id != 40000 {
                legend.insert(id, format!("t{id}"));
            }
        }

        let mut registry = TextureRegistry::new();
        registry.reconcile(&legend);
        registry.import_all([record("extra_a.png"), record("extra_b.png")]);

        assert_eq!(registry.assign("extra_a"), Some(40000));
        assert_eq!(registry.assign("extra_b"), None);
        // The failed assignment leaves the record pending
        assert_eq!(registry.unassigned().len(), 1);
        assert_eq!(registry.unassigned()[0].name, "extra_b");
    }

    #[test]
    fn test_assign_skips_identifiers_held_by_missing_textures() {
        // A loaded legend can reference textures that are not imported this
        // session; their identifiers must not be handed out again.
        let mut legend = Legend::new();
        legend.insert(1, "wall");

        let mut registry = TextureRegistry::new();
        registry.reconcile(&legend);
        registry.import(record("floor.png"));

        assert_eq!(registry.assign("floor"), Some(2));
    }

    #[test]
    fn test_legend_keeps_entries_for_missing_textures() {
        let mut legend = Legend::new();
        legend.insert(1, "wall");
        legend.insert(2, "door");

        let mut registry = TextureRegistry::new();
        registry.reconcile(&legend);
        registry.import(record("wall.png"));

        // "door" has no imported image this session but keeps its slot
        assert_eq!(registry.legend(), legend);
        assert_eq!(registry.texture(2), None);
    }

    #[test]
    fn test_reconcile_partitions_like_a_fresh_import() {
        let textures = || {
            vec![
                record("tiles/wall.png"),
                record("tiles/floor.png"),
                record("tiles/lava.png"),
            ]
        };

        let mut prior = Legend::new();
        prior.insert(4, "wall");
        prior.insert(9, "lava");

        // Import against the prior legend, then save its successor
        let mut first = TextureRegistry::new();
        first.reconcile(&prior);
        first.import_all(textures());
        let saved = first.legend();

        // A later session imports the same set, then loads the saved legend
        let mut second = TextureRegistry::new();
        second.import_all(textures());
        second.reconcile(&saved);

        let partition = |r: &TextureRegistry| {
            let assigned: Vec<(TileId, String)> =
                r.assigned().map(|(id, t)| (id, t.name.clone())).collect();
            let pending: Vec<String> =
                r.unassigned().iter().map(|t| t.name.clone()).collect();
            (assigned, pending)
        };
        assert_eq!(partition(&first), partition(&second));
        assert_eq!(first.id_of("wall"), Some(4));
        assert_eq!(first.id_of("lava"), Some(9));
        assert_eq!(first.id_of("floor"), None);
    }
}

//! Loadout - worn/not-worn toggle state per equipment slot

use std::collections::HashMap;

use crate::catalog::{Catalog, EquipmentSpec};

/// Current worn state, keyed by equipment id
///
/// `toggle` is the only mutation path. Ids outside the catalog are
/// absorbed without error; the resolver iterates the catalog, so stray
/// keys can never surface in the visible set.
#[derive(Debug, Clone, Default)]
pub struct Loadout {
    equipped: HashMap<String, bool>,
}

impl Loadout {
    /// New loadout with every catalog slot unequipped
    pub fn new(catalog: &Catalog) -> Self {
        Self {
            equipped: catalog
                .slots()
                .iter()
                .map(|slot| (slot.id.clone(), false))
                .collect(),
        }
    }

    /// Flip the worn state for `id`, leaving all other entries unchanged
    pub fn toggle(&mut self, id: &str) {
        let worn = self.equipped.entry(id.to_string()).or_insert(false);
        *worn = !*worn;
    }

    /// Whether `id` is currently worn; absent keys read as false
    pub fn is_equipped(&self, id: &str) -> bool {
        self.equipped.get(id).copied().unwrap_or(false)
    }

    /// Resolve the visible equipment set: worn catalog slots, in
    /// catalog order
    pub fn equipped_slots<'a>(
        &'a self,
        catalog: &'a Catalog,
    ) -> impl Iterator<Item = &'a EquipmentSpec> {
        catalog.slots().iter().filter(|slot| self.is_equipped(&slot.id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_all_unequipped() {
        let catalog = Catalog::builtin();
        let loadout = Loadout::new(&catalog);

        for slot in catalog.slots() {
            assert!(!loadout.is_equipped(&slot.id));
        }
        assert_eq!(loadout.equipped_slots(&catalog).count(), 0);
    }

    #[test]
    fn test_toggle_is_an_involution() {
        let catalog = Catalog::builtin();
        let mut loadout = Loadout::new(&catalog);
        loadout.toggle("sword");

        let before = loadout.clone();
        loadout.toggle("helmet");
        loadout.toggle("helmet");

        for slot in catalog.slots() {
            assert_eq!(loadout.is_equipped(&slot.id), before.is_equipped(&slot.id));
        }
    }

    #[test]
    fn test_toggle_touches_only_one_key() {
        let catalog = Catalog::builtin();
        let mut loadout = Loadout::new(&catalog);

        loadout.toggle("chestplate");
        assert!(loadout.is_equipped("chestplate"));
        for slot in catalog.slots() {
            if slot.id != "chestplate" {
                assert!(!loadout.is_equipped(&slot.id));
            }
        }
    }

    #[test]
    fn test_unknown_id_never_affects_visible_set() {
        let catalog = Catalog::builtin();
        let mut loadout = Loadout::new(&catalog);

        loadout.toggle("jetpack");
        assert!(loadout.is_equipped("jetpack"));
        assert_eq!(loadout.equipped_slots(&catalog).count(), 0);
    }

    #[test]
    fn test_helmet_scenario() {
        let catalog = Catalog::builtin();
        let mut loadout = Loadout::new(&catalog);

        loadout.toggle("helmet");
        let visible: Vec<_> = loadout.equipped_slots(&catalog).collect();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].label, "Шлем");
        assert_eq!(visible[0].color, "#A0A0A0");
        assert_eq!(visible[0].offset, [0.0, 1.4, 0.0]);
        assert_eq!(visible[0].size, [1.05, 1.05, 1.05]);

        loadout.toggle("helmet");
        assert_eq!(loadout.equipped_slots(&catalog).count(), 0);
    }

    #[test]
    fn test_full_loadout_resolves_every_slot() {
        let catalog = Catalog::builtin();
        let mut loadout = Loadout::new(&catalog);

        for slot in catalog.slots() {
            let id = slot.id.clone();
            loadout.toggle(&id);
        }

        let visible: Vec<_> = loadout.equipped_slots(&catalog).collect();
        assert_eq!(visible.len(), 5);
        let ids: Vec<_> = visible.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["helmet", "chestplate", "leggings", "boots", "sword"]);
    }
}

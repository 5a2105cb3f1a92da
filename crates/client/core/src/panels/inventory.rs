//! Inventory list with category filtering.
use protocol::{InstanceKey, ItemKind, Snapshot};
use strum::{Display, EnumIter};

use crate::view_state::ViewState;

/// Inventory category cycle. `All` additionally admits entries whose base
/// id fails to resolve; those never appear under a typed category.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Display, EnumIter)]
pub enum ItemFilter {
    #[default]
    All,
    Weapon,
    Consumable,
    Currency,
    Important,
    Material,
}

impl ItemFilter {
    /// Next category in display order, wrapping.
    pub fn next(self) -> Self {
        match self {
            ItemFilter::All => ItemFilter::Weapon,
            ItemFilter::Weapon => ItemFilter::Consumable,
            ItemFilter::Consumable => ItemFilter::Currency,
            ItemFilter::Currency => ItemFilter::Important,
            ItemFilter::Important => ItemFilter::Material,
            ItemFilter::Material => ItemFilter::All,
        }
    }

    fn admits(self, kind: ItemKind) -> bool {
        match self {
            ItemFilter::All => true,
            ItemFilter::Weapon => kind == ItemKind::Weapon,
            ItemFilter::Consumable => kind == ItemKind::Consumable,
            ItemFilter::Currency => kind == ItemKind::Currency,
            ItemFilter::Important => kind == ItemKind::Important,
            ItemFilter::Material => kind == ItemKind::Material,
        }
    }
}

/// One line in the inventory list.
#[derive(Clone, Debug, PartialEq)]
pub struct InventoryEntry {
    pub key: InstanceKey,

    /// Display name, with a `+N` suffix for upgraded weapons.
    pub label: String,

    /// `None` marks an entry whose base id has no definition; it cannot be
    /// opened.
    pub kind: Option<ItemKind>,

    pub equipped: bool,
}

/// Which placeholder an empty list shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EmptyReason {
    BagEmpty,
    CategoryEmpty,
}

#[derive(Clone, Debug, PartialEq)]
pub struct InventoryModel {
    pub filter: ItemFilter,

    /// Equipped weapon first, then inventory in acquisition order.
    pub entries: Vec<InventoryEntry>,

    pub empty: Option<EmptyReason>,
}

pub fn build(view: &ViewState) -> InventoryModel {
    let snapshot = view.snapshot();
    let player = &snapshot.player_state;
    let filter = view.filter;

    let mut entries = Vec::new();
    if let Some(weapon_key) = &player.equipment.weapon {
        push_entry(&mut entries, snapshot, filter, weapon_key, true);
    }
    for key in &player.inventory {
        push_entry(&mut entries, snapshot, filter, key, false);
    }

    let empty = if entries.is_empty() {
        if player.inventory.is_empty() && player.equipment.weapon.is_none() {
            Some(EmptyReason::BagEmpty)
        } else {
            Some(EmptyReason::CategoryEmpty)
        }
    } else {
        None
    };

    InventoryModel {
        filter,
        entries,
        empty,
    }
}

fn push_entry(
    entries: &mut Vec<InventoryEntry>,
    snapshot: &Snapshot,
    filter: ItemFilter,
    key: &InstanceKey,
    equipped: bool,
) {
    match snapshot.item_definition(key) {
        Some(def) => {
            if !filter.admits(def.kind) {
                return;
            }
            let level = snapshot.player_state.weapon_level(key);
            let label = if def.kind == ItemKind::Weapon && level > 0 {
                format!("{} +{level}", def.name)
            } else {
                def.name.clone()
            };
            entries.push(InventoryEntry {
                key: key.clone(),
                label,
                kind: Some(def.kind),
                equipped,
            });
        }
        None => {
            if filter != ItemFilter::All {
                return;
            }
            tracing::warn!(key = %key, "inventory entry has no item definition");
            entries.push(InventoryEntry {
                key: key.clone(),
                label: format!("{key} (no data)"),
                kind: None,
                equipped,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_cycle_visits_every_category_once() {
        let mut seen = vec![ItemFilter::All];
        let mut current = ItemFilter::All;
        loop {
            current = current.next();
            if current == ItemFilter::All {
                break;
            }
            seen.push(current);
        }
        assert_eq!(seen.len(), 6);
    }

    #[test]
    fn all_admits_every_kind() {
        for kind in [
            ItemKind::Weapon,
            ItemKind::Consumable,
            ItemKind::Currency,
            ItemKind::Important,
            ItemKind::Material,
        ] {
            assert!(ItemFilter::All.admits(kind));
        }
        assert!(!ItemFilter::Currency.admits(ItemKind::Weapon));
    }
}

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::archive::ArchiveEntry;
use crate::enemy::{EnemyDefinition, EnemyId};
use crate::item::{InstanceKey, ItemDefinition, ItemId};
use crate::location::{ConnectedLocation, LocationDefinition, LocationId};
use crate::player::PlayerState;

/// Server-computed effective stats, base plus equipment contributions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DerivedStats {
    pub attack: u32,
}

/// One complete, authoritative description of game state.
///
/// Returned whole by every server round trip and replaced whole on the
/// client; nothing inside it survives independently across round trips.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub player_state: PlayerState,
    pub stats: DerivedStats,

    /// Definition of the player's current location.
    pub location_info: LocationDefinition,

    /// Neighbours of the current location, names pre-resolved.
    #[serde(default)]
    pub connected_locations: Vec<ConnectedLocation>,

    #[serde(default)]
    pub all_locations: BTreeMap<LocationId, LocationDefinition>,

    #[serde(default)]
    pub item_definitions: BTreeMap<ItemId, ItemDefinition>,

    #[serde(default)]
    pub enemy_definitions: BTreeMap<EnemyId, EnemyDefinition>,

    #[serde(default)]
    pub archive_entries: Vec<ArchiveEntry>,
}

impl Snapshot {
    /// Definition behind an owned item copy, resolved through its base id.
    pub fn item_definition(&self, key: &InstanceKey) -> Option<&ItemDefinition> {
        self.item_definitions.get(key.base_id())
    }

    pub fn location(&self, id: &str) -> Option<&LocationDefinition> {
        self.all_locations.get(id)
    }

    pub fn enemy(&self, id: &str) -> Option<&EnemyDefinition> {
        self.enemy_definitions.get(id)
    }
}

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::action::UpgradeTrack;
use crate::item::InstanceKey;
use crate::location::LocationId;

/// Player survival status. Fully determines which actions are valid; the
/// client never transitions it locally.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerStatus {
    Normal,
    Combat,
    Dead,
}

/// Equipped gear. The equipped weapon's key is removed from `inventory`
/// while it is worn.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Equipment {
    #[serde(default)]
    pub weapon: Option<InstanceKey>,
}

/// Present only while `status` is `combat`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CombatContext {
    pub enemy_name: String,
}

/// Permanent stat-upgrade levels, one independent track per stat.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpgradeLevels {
    #[serde(default)]
    pub hp: u32,
    #[serde(default)]
    pub atk: u32,
    #[serde(default)]
    pub evasion: u32,
}

impl UpgradeLevels {
    pub fn level(&self, track: UpgradeTrack) -> u32 {
        match track {
            UpgradeTrack::Hp => self.hp,
            UpgradeTrack::Atk => self.atk,
            UpgradeTrack::Evasion => self.evasion,
        }
    }
}

/// The player's slice of the snapshot.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerState {
    /// Signed: the server applies combat damage before the death check, so
    /// a killing blow can leave a negative value on the wire.
    pub hp: i64,
    pub max_hp: i64,
    pub level: u32,
    pub exp: u32,
    pub max_exp: u32,

    /// Revival and upgrade currency.
    #[serde(default)]
    pub heart_fragments: u32,

    pub status: PlayerStatus,
    pub current_location_id: LocationId,

    /// Owned item copies in acquisition order. Order is display order.
    #[serde(default)]
    pub inventory: Vec<InstanceKey>,

    #[serde(default)]
    pub equipment: Equipment,

    /// Per-copy weapon upgrade levels. Entries for non-weapon keys carry no
    /// meaning.
    #[serde(default)]
    pub weapon_levels: BTreeMap<InstanceKey, u32>,

    #[serde(default)]
    pub upgrade_levels: UpgradeLevels,

    /// Key-gated locations this player may see unmasked.
    #[serde(default)]
    pub unlocked_location_ids: BTreeSet<LocationId>,

    /// Server-authored event log, oldest first.
    #[serde(default)]
    pub logs: Vec<String>,

    #[serde(default)]
    pub combat_context: Option<CombatContext>,
}

impl PlayerState {
    /// Upgrade level for one owned weapon copy, zero when untouched.
    pub fn weapon_level(&self, key: &InstanceKey) -> u32 {
        self.weapon_levels.get(key).copied().unwrap_or(0)
    }

    pub fn is_equipped(&self, key: &InstanceKey) -> bool {
        self.equipment.weapon.as_ref() == Some(key)
    }
}

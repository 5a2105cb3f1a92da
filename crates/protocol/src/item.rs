use core::fmt;

use serde::{Deserialize, Serialize};

use crate::location::LocationId;

/// Identifier of an item definition in `itemDefinitions`.
pub type ItemId = String;

/// Identifier of one owned item copy.
///
/// Either a bare base id (`"rusty_pipe"`) or a base id with an instance
/// discriminator (`"rusty_pipe:2"`), so several copies of one definition can
/// carry independent upgrade levels. Only the base id resolves in
/// `itemDefinitions`; the full key is never a definition id itself.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InstanceKey(String);

impl InstanceKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Base item id with any `:instance` discriminator stripped.
    pub fn base_id(&self) -> &str {
        match self.0.split_once(':') {
            Some((base, _)) => base,
            None => &self.0,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InstanceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for InstanceKey {
    fn from(key: &str) -> Self {
        Self(key.to_owned())
    }
}

impl From<String> for InstanceKey {
    fn from(key: String) -> Self {
        Self(key)
    }
}

/// Item definition as served in `itemDefinitions`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemDefinition {
    pub id: ItemId,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ItemKind,

    /// Attack contribution while equipped. Weapons only.
    #[serde(default)]
    pub power: Option<u32>,

    /// HP restored on use. Consumables only.
    #[serde(default)]
    pub heal: Option<u32>,

    /// Chance in `[0, 1]` of finding this item when searching one of its
    /// drop locations. Zero marks items acquired by other means.
    #[serde(default)]
    pub drop_rate: f64,

    /// Locations whose searches can yield this item. Empty means any
    /// searchable location qualifies.
    #[serde(default)]
    pub drop_location_ids: Vec<LocationId>,

    #[serde(default)]
    pub description: Option<String>,
}

/// Item categories, used for inventory filtering and action gating.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    /// Equippable; contributes `power` to attack while equipped.
    Weapon,

    /// Single-use; restores `heal` HP.
    Consumable,

    /// Spendable resource (heart fragments and kin). Not usable directly.
    Currency,

    /// Quest or key item. Cannot be discarded.
    Important,

    /// Weapon-upgrade feedstock. Counted in bulk, not used directly.
    Material,
}

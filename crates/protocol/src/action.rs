use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};
use strum::EnumIter;

use crate::item::InstanceKey;
use crate::location::LocationId;

/// One player intent, serialized as the server's flat `{"type", "target"}`
/// pair. Targetless intents omit the `target` field entirely.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    Move(LocationId),
    Search,
    Attack,
    Run,
    UseItem(InstanceKey),
    UnequipItem(InstanceKey),
    DiscardItem(InstanceKey),
    DisassembleWeapon(InstanceKey),
    UpgradeWeapon(InstanceKey),
    Upgrade(UpgradeTrack),
    Revive(ReviveMode),
}

impl Action {
    /// Wire name of the action type.
    pub fn kind(&self) -> &'static str {
        match self {
            Action::Move(_) => "move",
            Action::Search => "search",
            Action::Attack => "attack",
            Action::Run => "run",
            Action::UseItem(_) => "useItem",
            Action::UnequipItem(_) => "unequipItem",
            Action::DiscardItem(_) => "discardItem",
            Action::DisassembleWeapon(_) => "disassembleWeapon",
            Action::UpgradeWeapon(_) => "upgradeWeapon",
            Action::Upgrade(_) => "upgrade",
            Action::Revive(_) => "revive",
        }
    }

    /// Wire target string, when the action carries one.
    pub fn target(&self) -> Option<&str> {
        match self {
            Action::Move(location_id) => Some(location_id),
            Action::Search | Action::Attack | Action::Run => None,
            Action::UseItem(key)
            | Action::UnequipItem(key)
            | Action::DiscardItem(key)
            | Action::DisassembleWeapon(key)
            | Action::UpgradeWeapon(key) => Some(key.as_str()),
            Action::Upgrade(track) => Some(track.as_target()),
            Action::Revive(mode) => Some(mode.as_target()),
        }
    }
}

impl Serialize for Action {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let target = self.target();
        let mut s = serializer.serialize_struct("Action", 1 + usize::from(target.is_some()))?;
        s.serialize_field("type", self.kind())?;
        if let Some(target) = target {
            s.serialize_field("target", target)?;
        }
        s.end()
    }
}

/// Permanent stat-upgrade tracks sold by the upgrade store.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UpgradeTrack {
    Hp,
    Atk,
    Evasion,
}

impl UpgradeTrack {
    pub fn as_target(&self) -> &'static str {
        match self {
            UpgradeTrack::Hp => "hp",
            UpgradeTrack::Atk => "atk",
            UpgradeTrack::Evasion => "evasion",
        }
    }
}

/// How a dead player comes back.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviveMode {
    /// Spend heart fragments, `5 * level` of them.
    Fragment,

    /// Consume a first-aid kit from the inventory.
    Kit,

    /// Start over. Wipes all progression; the client must confirm first.
    Reset,
}

impl ReviveMode {
    pub fn as_target(&self) -> &'static str {
        match self {
            ReviveMode::Fragment => "fragment",
            ReviveMode::Kit => "kit",
            ReviveMode::Reset => "reset",
        }
    }
}

/// Application-level rejection body the server mixes into 2xx responses.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ErrorReply {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn targeted_action_serializes_type_and_target() {
        let action = Action::Move("sewer".to_owned());
        let value = serde_json::to_value(&action).unwrap();
        assert_eq!(value, json!({"type": "move", "target": "sewer"}));
    }

    #[test]
    fn targetless_action_omits_target_field() {
        let value = serde_json::to_value(Action::Search).unwrap();
        assert_eq!(value, json!({"type": "search"}));
    }

    #[test]
    fn item_actions_carry_the_full_instance_key() {
        let action = Action::UpgradeWeapon(InstanceKey::from("sword:2"));
        let value = serde_json::to_value(&action).unwrap();
        assert_eq!(value, json!({"type": "upgradeWeapon", "target": "sword:2"}));
    }

    #[test]
    fn upgrade_and_revive_spell_their_targets() {
        let upgrade = serde_json::to_value(Action::Upgrade(UpgradeTrack::Evasion)).unwrap();
        assert_eq!(upgrade, json!({"type": "upgrade", "target": "evasion"}));

        let revive = serde_json::to_value(Action::Revive(ReviveMode::Reset)).unwrap();
        assert_eq!(revive, json!({"type": "revive", "target": "reset"}));
    }
}

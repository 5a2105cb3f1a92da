use serde::{Deserialize, Serialize};

use crate::enemy::EnemyId;

/// Identifier of a location in `allLocations`.
pub type LocationId = String;

/// Fixed grid position of a location on the district map.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coordinates {
    pub x: u16,
    pub y: u16,
}

/// Three-way combat-risk classification for a location.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DangerLevel {
    Safe,
    Normal,
    Danger,
}

/// Location definition as served in `allLocations` and `locationInfo`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationDefinition {
    pub id: LocationId,
    pub name: String,
    pub coordinates: Coordinates,
    pub danger_level: DangerLevel,

    /// When set, the location is masked everywhere until its id appears in
    /// the player's `unlockedLocationIds`.
    #[serde(default)]
    pub requires_key: bool,

    #[serde(default)]
    pub searchable: bool,

    /// Chance in `[0, 1]` of a search yielding an item here.
    #[serde(default)]
    pub item_chance: f64,

    /// Enemies that can ambush here. Meaningless when `danger_level` is safe.
    #[serde(default)]
    pub spawn_enemy_ids: Vec<EnemyId>,

    #[serde(default)]
    pub description: Option<String>,
}

/// Neighbour reference with the display name pre-resolved by the server.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectedLocation {
    pub id: LocationId,
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_camel_case_wire_fields() {
        let json = r#"{
            "id": "sewer",
            "name": "Flooded Sewer",
            "coordinates": {"x": 2, "y": 1},
            "dangerLevel": "danger",
            "requiresKey": true,
            "searchable": true,
            "itemChance": 0.35,
            "spawnEnemyIds": ["ghoul"]
        }"#;
        let loc: LocationDefinition = serde_json::from_str(json).unwrap();
        assert_eq!(loc.danger_level, DangerLevel::Danger);
        assert!(loc.requires_key);
        assert_eq!(loc.spawn_enemy_ids, vec!["ghoul".to_owned()]);
        assert_eq!(loc.description, None);
    }

    #[test]
    fn optional_flags_default_to_off() {
        let json = r#"{
            "id": "shelter",
            "name": "Shelter",
            "coordinates": {"x": 0, "y": 0},
            "dangerLevel": "safe"
        }"#;
        let loc: LocationDefinition = serde_json::from_str(json).unwrap();
        assert!(!loc.requires_key);
        assert!(!loc.searchable);
        assert_eq!(loc.item_chance, 0.0);
        assert!(loc.spawn_enemy_ids.is_empty());
    }
}

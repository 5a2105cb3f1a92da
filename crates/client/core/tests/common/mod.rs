//! Snapshot fixtures for engine tests.
#![allow(dead_code)]
use protocol::{
    ConnectedLocation, Coordinates, DangerLevel, DerivedStats, EnemyDefinition, Equipment,
    InstanceKey, ItemDefinition, ItemKind, LocationDefinition, PlayerState, PlayerStatus,
    Snapshot, UpgradeLevels,
};

pub fn location(id: &str, name: &str, x: u16, y: u16, danger: DangerLevel) -> LocationDefinition {
    LocationDefinition {
        id: id.to_owned(),
        name: name.to_owned(),
        coordinates: Coordinates { x, y },
        danger_level: danger,
        requires_key: false,
        searchable: false,
        item_chance: 0.0,
        spawn_enemy_ids: Vec::new(),
        description: None,
    }
}

pub fn weapon(id: &str, name: &str, power: u32) -> ItemDefinition {
    ItemDefinition {
        id: id.to_owned(),
        name: name.to_owned(),
        kind: ItemKind::Weapon,
        power: Some(power),
        heal: None,
        drop_rate: 0.0,
        drop_location_ids: Vec::new(),
        description: None,
    }
}

pub fn consumable(id: &str, name: &str, heal: u32) -> ItemDefinition {
    ItemDefinition {
        id: id.to_owned(),
        name: name.to_owned(),
        kind: ItemKind::Consumable,
        power: None,
        heal: Some(heal),
        drop_rate: 0.0,
        drop_location_ids: Vec::new(),
        description: None,
    }
}

pub fn item_of(id: &str, name: &str, kind: ItemKind) -> ItemDefinition {
    ItemDefinition {
        id: id.to_owned(),
        name: name.to_owned(),
        kind,
        power: None,
        heal: None,
        drop_rate: 0.0,
        drop_location_ids: Vec::new(),
        description: None,
    }
}

pub struct SnapshotBuilder {
    snapshot: Snapshot,
}

impl SnapshotBuilder {
    /// A healthy level-1 player standing in a safe shelter.
    pub fn new() -> Self {
        let shelter = location("shelter", "Shelter", 0, 0, DangerLevel::Safe);
        let player = PlayerState {
            hp: 100,
            max_hp: 100,
            level: 1,
            exp: 0,
            max_exp: 100,
            heart_fragments: 0,
            status: PlayerStatus::Normal,
            current_location_id: "shelter".to_owned(),
            inventory: Vec::new(),
            equipment: Equipment::default(),
            weapon_levels: Default::default(),
            upgrade_levels: UpgradeLevels::default(),
            unlocked_location_ids: Default::default(),
            logs: Vec::new(),
            combat_context: None,
        };

        let mut snapshot = Snapshot {
            player_state: player,
            stats: DerivedStats { attack: 10 },
            location_info: shelter.clone(),
            connected_locations: Vec::new(),
            all_locations: Default::default(),
            item_definitions: Default::default(),
            enemy_definitions: Default::default(),
            archive_entries: Vec::new(),
        };
        snapshot.all_locations.insert(shelter.id.clone(), shelter);

        Self { snapshot }
    }

    pub fn player(mut self, edit: impl FnOnce(&mut PlayerState)) -> Self {
        edit(&mut self.snapshot.player_state);
        self
    }

    pub fn attack(mut self, attack: u32) -> Self {
        self.snapshot.stats.attack = attack;
        self
    }

    pub fn location(mut self, def: LocationDefinition) -> Self {
        self.snapshot.all_locations.insert(def.id.clone(), def);
        self
    }

    /// Make a known location the current one.
    pub fn standing_in(mut self, id: &str) -> Self {
        let def = self.snapshot.all_locations[id].clone();
        self.snapshot.player_state.current_location_id = def.id.clone();
        self.snapshot.location_info = def;
        self
    }

    /// Connect a known location as a reachable neighbour.
    pub fn connect(mut self, id: &str) -> Self {
        let name = self.snapshot.all_locations[id].name.clone();
        self.snapshot.connected_locations.push(ConnectedLocation {
            id: id.to_owned(),
            name,
        });
        self
    }

    pub fn item(mut self, def: ItemDefinition) -> Self {
        self.snapshot.item_definitions.insert(def.id.clone(), def);
        self
    }

    pub fn enemy(mut self, id: &str, name: &str, grade: u32) -> Self {
        self.snapshot.enemy_definitions.insert(
            id.to_owned(),
            EnemyDefinition {
                id: id.to_owned(),
                name: name.to_owned(),
                grade,
            },
        );
        self
    }

    pub fn note(mut self, title: &str, content: &str) -> Self {
        self.snapshot.archive_entries.push(protocol::ArchiveEntry {
            title: title.to_owned(),
            content: content.to_owned(),
        });
        self
    }

    pub fn build(self) -> Snapshot {
        self.snapshot
    }
}

pub fn key(raw: &str) -> InstanceKey {
    InstanceKey::from(raw)
}

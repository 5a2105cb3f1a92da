//! Detail view for one owned item copy.
use protocol::{Action, InstanceKey, ItemDefinition, ItemKind};

use crate::panels::actions::ButtonCommand;
use crate::rules;
use crate::view_state::ViewState;

const NO_DESCRIPTION: &str = "No description on file.";

#[derive(Clone, Debug, PartialEq)]
pub struct ItemDetailModel {
    pub key: InstanceKey,
    pub name: String,
    pub kind: ItemKind,
    pub description: String,
    pub stats: StatLine,

    /// Gated actions in display order: primary, discard, and for weapons
    /// disassemble and upgrade.
    pub buttons: Vec<DetailButton>,

    /// Holdings and thresholds for the next weapon upgrade. Weapons only.
    pub upgrade: Option<UpgradeReadout>,

    pub drops: DropIntel,
}

/// Stat readout per item kind.
#[derive(Clone, Debug, PartialEq)]
pub enum StatLine {
    /// Base power plus the upgrade bonus, broken out explicitly.
    Weapon { base: u32, bonus: u32, total: u32 },
    Consumable { heal: u32 },

    /// Currency, important and material items do nothing by themselves.
    Inert,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DetailButton {
    pub label: String,

    /// `None` when the button exists only to show why nothing can happen.
    pub command: Option<ButtonCommand>,

    pub enabled: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct UpgradeReadout {
    pub level: u32,
    pub materials_needed: u32,
    pub materials_have: u32,
    pub fragments_needed: u32,
    pub fragments_have: u32,
}

impl UpgradeReadout {
    pub fn affordable(&self) -> bool {
        self.materials_have >= self.materials_needed
            && self.fragments_have >= self.fragments_needed
    }
}

/// Where and how often the item drops.
#[derive(Clone, Debug, PartialEq)]
pub struct DropIntel {
    pub rate: DropRate,
    pub locations: DropLocations,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DropRate {
    /// Zero drop rate: acquired some other way, never shown as "0%".
    Special,

    /// Rounded percentage.
    Chance(u8),
}

#[derive(Clone, Debug, PartialEq)]
pub enum DropLocations {
    Anywhere,

    /// Resolved display names, lock masking applied.
    Named(Vec<String>),
}

/// Build the detail model, or nothing when the base id does not resolve.
pub fn build(view: &ViewState, key: &InstanceKey) -> Option<ItemDetailModel> {
    let snapshot = view.snapshot();
    let def = snapshot.item_definition(key)?;
    let player = &snapshot.player_state;
    let equipped = player.is_equipped(key);
    let level = player.weapon_level(key);

    let stats = match def.kind {
        ItemKind::Weapon => {
            let base = def.power.unwrap_or(0);
            let bonus = rules::weapon_bonus(level);
            StatLine::Weapon {
                base,
                bonus,
                total: base + bonus,
            }
        }
        ItemKind::Consumable => StatLine::Consumable {
            heal: def.heal.unwrap_or(0),
        },
        ItemKind::Currency | ItemKind::Important | ItemKind::Material => StatLine::Inert,
    };

    let upgrade = (def.kind == ItemKind::Weapon).then(|| UpgradeReadout {
        level,
        materials_needed: rules::weapon_upgrade_materials(level),
        materials_have: rules::material_count(snapshot),
        fragments_needed: rules::weapon_upgrade_fragments(level),
        fragments_have: player.heart_fragments,
    });

    let mut buttons = vec![
        primary_button(def.kind, key, equipped),
        discard_button(def, key, equipped),
    ];
    if def.kind == ItemKind::Weapon {
        buttons.push(disassemble_button(def, key, equipped));
    }
    if let Some(readout) = &upgrade {
        buttons.push(upgrade_button(key, readout));
    }

    Some(ItemDetailModel {
        key: key.clone(),
        name: def.name.clone(),
        kind: def.kind,
        description: def
            .description
            .clone()
            .unwrap_or_else(|| NO_DESCRIPTION.to_owned()),
        stats,
        buttons,
        upgrade,
        drops: drop_intel(view, def),
    })
}

fn primary_button(kind: ItemKind, key: &InstanceKey, equipped: bool) -> DetailButton {
    match kind {
        ItemKind::Weapon if equipped => DetailButton {
            label: "Unequip".to_owned(),
            command: Some(ButtonCommand::Dispatch(Action::UnequipItem(key.clone()))),
            enabled: true,
        },
        ItemKind::Weapon => DetailButton {
            label: "Equip".to_owned(),
            command: Some(ButtonCommand::Dispatch(Action::UseItem(key.clone()))),
            enabled: true,
        },
        ItemKind::Consumable => DetailButton {
            label: "Use".to_owned(),
            command: Some(ButtonCommand::Dispatch(Action::UseItem(key.clone()))),
            enabled: true,
        },
        ItemKind::Currency | ItemKind::Important | ItemKind::Material => DetailButton {
            label: "Not usable".to_owned(),
            command: None,
            enabled: false,
        },
    }
}

fn discard_button(def: &ItemDefinition, key: &InstanceKey, equipped: bool) -> DetailButton {
    let blocked = equipped || def.kind == ItemKind::Important;
    DetailButton {
        label: "Discard".to_owned(),
        command: (!blocked).then(|| ButtonCommand::Confirm {
            action: Action::DiscardItem(key.clone()),
            prompt: format!("Discard {}? It will be gone for good.", def.name),
        }),
        enabled: !blocked,
    }
}

fn disassemble_button(def: &ItemDefinition, key: &InstanceKey, equipped: bool) -> DetailButton {
    DetailButton {
        label: "Disassemble".to_owned(),
        command: (!equipped).then(|| ButtonCommand::Confirm {
            action: Action::DisassembleWeapon(key.clone()),
            prompt: format!(
                "Break {} down for materials? The weapon is destroyed.",
                def.name
            ),
        }),
        enabled: !equipped,
    }
}

fn upgrade_button(key: &InstanceKey, readout: &UpgradeReadout) -> DetailButton {
    DetailButton {
        label: format!("Upgrade to +{}", readout.level + 1),
        command: Some(ButtonCommand::Dispatch(Action::UpgradeWeapon(key.clone()))),
        enabled: readout.affordable(),
    }
}

fn drop_intel(view: &ViewState, def: &ItemDefinition) -> DropIntel {
    let rate = if def.drop_rate <= 0.0 {
        DropRate::Special
    } else {
        DropRate::Chance((def.drop_rate * 100.0).round() as u8)
    };

    let locations = if def.drop_location_ids.is_empty() {
        DropLocations::Anywhere
    } else {
        DropLocations::Named(
            def.drop_location_ids
                .iter()
                .map(|id| match view.snapshot().location(id) {
                    Some(location) => view.display_name(location).to_owned(),
                    None => id.clone(),
                })
                .collect(),
        )
    };

    DropIntel { rate, locations }
}

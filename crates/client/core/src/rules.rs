//! Progression formulas recomputed client-side for display and gating.
//!
//! The server stays authoritative for acceptance; these exist so the UI can
//! show costs and disable the unaffordable without an extra round trip.
use protocol::{ItemKind, PlayerState, Snapshot, UpgradeTrack};

/// Base id of the consumable that allows a kit revive.
pub const FIRST_AID_KIT_ID: &str = "first_aid_kit";

/// Max-HP gain per level of the hp track.
pub const TRACK_HP_PER_LEVEL: u32 = 5;

/// Attack gain per level of the atk track.
pub const TRACK_ATK_PER_LEVEL: u32 = 1;

/// Evade-chance gain in percentage points per level of the evasion track.
pub const TRACK_EVASION_PP_PER_LEVEL: f64 = 0.1;

/// Heart fragments needed to revive at a given player level.
pub fn revive_fragment_cost(level: u32) -> u32 {
    level * 5
}

/// Materials consumed to upgrade a weapon from `level` to `level + 1`.
pub fn weapon_upgrade_materials(level: u32) -> u32 {
    (level + 1) * 2
}

/// Heart fragments consumed to upgrade a weapon from `level` to `level + 1`.
pub fn weapon_upgrade_fragments(level: u32) -> u32 {
    (level + 1) * 5
}

/// Attack bonus a weapon gains from its upgrade level.
pub fn weapon_bonus(level: u32) -> u32 {
    level * 2
}

/// Heart-fragment price of buying the next level on any upgrade track.
pub fn track_cost(level: u32) -> u32 {
    5 + level * 2
}

/// Total effect of an upgrade track at a given level, in that track's unit
/// (max HP, attack points, or tenths of a percentage point of evasion).
pub fn track_total(track: UpgradeTrack, level: u32) -> u32 {
    match track {
        UpgradeTrack::Hp => TRACK_HP_PER_LEVEL * level,
        UpgradeTrack::Atk => TRACK_ATK_PER_LEVEL * level,
        UpgradeTrack::Evasion => level,
    }
}

/// Whether the inventory holds a first-aid kit, matched by base id.
pub fn has_first_aid_kit(player: &PlayerState) -> bool {
    player
        .inventory
        .iter()
        .any(|key| key.base_id() == FIRST_AID_KIT_ID)
}

/// Count of owned instances whose definition is a material. Unresolvable
/// keys count for nothing.
pub fn material_count(snapshot: &Snapshot) -> u32 {
    snapshot
        .player_state
        .inventory
        .iter()
        .filter(|key| {
            snapshot
                .item_definition(key)
                .is_some_and(|def| def.kind == ItemKind::Material)
        })
        .count() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn revive_cost_scales_with_level() {
        assert_eq!(revive_fragment_cost(1), 5);
        assert_eq!(revive_fragment_cost(7), 35);
    }

    #[test]
    fn weapon_upgrade_thresholds_scale_with_next_level() {
        assert_eq!(weapon_upgrade_materials(0), 2);
        assert_eq!(weapon_upgrade_fragments(0), 5);
        assert_eq!(weapon_upgrade_materials(3), 8);
        assert_eq!(weapon_upgrade_fragments(3), 20);
    }

    #[test]
    fn weapon_bonus_is_twice_the_level() {
        assert_eq!(weapon_bonus(0), 0);
        assert_eq!(weapon_bonus(3), 6);
    }

    #[test]
    fn track_cost_curve_is_strictly_increasing() {
        let costs: Vec<u32> = (0..6).map(track_cost).collect();
        assert_eq!(costs, vec![5, 7, 9, 11, 13, 15]);
        assert!(costs.windows(2).all(|pair| pair[0] < pair[1]));
    }
}

//! End-to-end panel checks for the states players actually hit.
mod common;

use client_core::panels::actions::ButtonCommand;
use client_core::panels::item_detail::StatLine;
use client_core::panels::location_detail::LocationBody;
use client_core::{MASKED_LABEL, ViewState, panels};
use common::{SnapshotBuilder, key, location, weapon};
use protocol::{Action, DangerLevel, PlayerStatus, ReviveMode, UpgradeTrack};

#[test]
fn death_with_empty_pockets_leaves_only_the_restart() {
    let snapshot = SnapshotBuilder::new()
        .player(|player| {
            player.status = PlayerStatus::Dead;
            player.hp = 0;
            player.heart_fragments = 3;
        })
        .build();

    let panel = panels::actions::build(&ViewState::new(snapshot));
    assert_eq!(panel.buttons.len(), 3);

    let fragment = &panel.buttons[0];
    assert!(!fragment.enabled);
    assert_eq!(fragment.hint.as_deref(), Some("needs 5, have 3"));

    let kit = &panel.buttons[1];
    assert!(!kit.enabled);
    assert_eq!(kit.hint.as_deref(), Some("none carried"));

    let restart = &panel.buttons[2];
    assert!(restart.enabled);
    assert!(matches!(
        &restart.command,
        ButtonCommand::Confirm {
            action: Action::Revive(ReviveMode::Reset),
            ..
        }
    ));
}

#[test]
fn upgraded_weapon_shows_base_bonus_and_total_power() {
    let snapshot = SnapshotBuilder::new()
        .item(weapon("sword", "Rusted Sword", 4))
        .player(|player| {
            player.inventory = vec![key("sword:2")];
            player.weapon_levels.insert(key("sword:2"), 3);
        })
        .build();

    let detail = panels::item_detail::build(&ViewState::new(snapshot), &key("sword:2")).unwrap();
    assert_eq!(
        detail.stats,
        StatLine::Weapon {
            base: 4,
            bonus: 6,
            total: 10,
        }
    );

    let readout = detail.upgrade.unwrap();
    assert_eq!(readout.level, 3);
    assert_eq!(readout.materials_needed, 8);
    assert_eq!(readout.fragments_needed, 20);
    assert!(
        detail
            .buttons
            .iter()
            .any(|button| button.label == "Upgrade to +4")
    );
}

#[test]
fn third_vitality_rank_costs_nine_fragments() {
    let at = |fragments: u32| {
        let snapshot = SnapshotBuilder::new()
            .player(|player| {
                player.heart_fragments = fragments;
                player.upgrade_levels.hp = 2;
            })
            .build();
        let model = panels::upgrades::build(&ViewState::new(snapshot));
        model
            .tracks
            .into_iter()
            .find(|track| track.track == UpgradeTrack::Hp)
            .unwrap()
    };

    let short = at(8);
    assert_eq!(short.cost, 9);
    assert!(!short.affordable);

    let exact = at(9);
    assert!(exact.affordable);
}

#[test]
fn a_locked_neighbour_reveals_nothing_but_its_cell() {
    let mut vault = location("vault", "Sealed Vault", 1, 0, DangerLevel::Danger);
    vault.requires_key = true;
    vault.description = Some("Rows of locked cabinets.".to_owned());
    vault.spawn_enemy_ids = vec!["stalker".to_owned()];

    let view = ViewState::new(
        SnapshotBuilder::new()
            .location(vault)
            .connect("vault")
            .enemy("stalker", "Stalker", 4)
            .build(),
    );

    // the move is still offered, only the label is withheld
    let panel = panels::actions::build(&view);
    let go = panel
        .buttons
        .iter()
        .find(|button| button.label == format!("Go to {MASKED_LABEL}"))
        .unwrap();
    assert!(go.enabled);
    assert_eq!(
        go.command,
        ButtonCommand::Dispatch(Action::Move("vault".to_owned()))
    );

    let map = panels::map::build(&view);
    let node = map.nodes.iter().find(|node| node.id == "vault").unwrap();
    assert_eq!(node.label, "??");

    let detail = panels::location_detail::build(&view, "vault").unwrap();
    assert_eq!(detail.name, MASKED_LABEL);
    assert_eq!(detail.body, LocationBody::Masked);

    // nothing behind the lock may leak into the model at all
    let dump = format!("{detail:?}");
    assert!(!dump.contains("Sealed Vault"));
    assert!(!dump.contains("Stalker"));
    assert!(!dump.contains("cabinets"));
}

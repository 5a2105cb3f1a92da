//! The complete derived frame.
//!
//! One call per render: every panel model is rebuilt from the same
//! `ViewState`, so two builds over unchanged state are equal.
use crate::panels::actions::{self, ActionPanel};
use crate::panels::archive::{self, ArchiveModel};
use crate::panels::hud::{self, HudModel};
use crate::panels::inventory::{self, InventoryModel};
use crate::panels::item_detail::{self, ItemDetailModel};
use crate::panels::location_detail::{self, LocationDetailModel};
use crate::panels::map::{self, MapModel};
use crate::panels::upgrades::{self, UpgradeStoreModel};
use crate::view_state::{Overlay, ViewState};

#[derive(Clone, Debug, PartialEq)]
pub struct UiFrame {
    pub hud: HudModel,
    pub actions: ActionPanel,
    pub inventory: InventoryModel,
    pub map: MapModel,
    pub overlay: Option<OverlayModel>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum OverlayModel {
    ItemDetail(ItemDetailModel),
    LocationDetail(LocationDetailModel),
    UpgradeStore(UpgradeStoreModel),
    Archive(ArchiveModel),
    Confirm(ConfirmModel),
}

#[derive(Clone, Debug, PartialEq)]
pub struct ConfirmModel {
    pub prompt: String,
}

impl UiFrame {
    pub fn build(view: &ViewState) -> Self {
        Self {
            hud: hud::build(view),
            actions: actions::build(view),
            inventory: inventory::build(view),
            map: map::build(view),
            overlay: build_overlay(view),
        }
    }
}

fn build_overlay(view: &ViewState) -> Option<OverlayModel> {
    match view.overlay()? {
        Overlay::ItemDetail(key) => match item_detail::build(view, key) {
            Some(model) => Some(OverlayModel::ItemDetail(model)),
            None => {
                // replace() validates overlays, so this is a logic bug
                tracing::warn!(key = %key, "open item detail stopped resolving");
                None
            }
        },
        Overlay::LocationDetail(id) => match location_detail::build(view, id) {
            Some(model) => Some(OverlayModel::LocationDetail(model)),
            None => {
                tracing::warn!(id, "open location detail stopped resolving");
                None
            }
        },
        Overlay::UpgradeStore => Some(OverlayModel::UpgradeStore(upgrades::build(view))),
        Overlay::Archive => Some(OverlayModel::Archive(archive::build(view))),
        Overlay::Confirm(pending) => Some(OverlayModel::Confirm(ConfirmModel {
            prompt: pending.prompt.clone(),
        })),
    }
}

//! Single-owner store for the latest snapshot plus ephemeral UI state.
//!
//! Renderers receive `&ViewState` and derive everything; the only fields a
//! user event may touch directly are the inventory filter and the overlay.
//! A completed round trip replaces the snapshot wholesale, never patches it.
use protocol::{Action, InstanceKey, LocationDefinition, LocationId, Snapshot};

use crate::panels::inventory::ItemFilter;

/// Placeholder shown anywhere a lock-masked location's name would appear.
pub const MASKED_LABEL: &str = "???";

/// A modal surface layered over the standard panels.
#[derive(Clone, Debug, PartialEq)]
pub enum Overlay {
    ItemDetail(InstanceKey),
    LocationDetail(LocationId),
    UpgradeStore,
    Archive,
    Confirm(PendingAction),
}

/// An intent held back until the player explicitly confirms it.
#[derive(Clone, Debug, PartialEq)]
pub struct PendingAction {
    pub action: Action,
    pub prompt: String,
}

pub struct ViewState {
    snapshot: Snapshot,

    /// Active inventory category. Survives snapshot replacement; only an
    /// explicit user event changes it.
    pub filter: ItemFilter,

    overlay: Option<Overlay>,
}

impl ViewState {
    pub fn new(snapshot: Snapshot) -> Self {
        Self {
            snapshot,
            filter: ItemFilter::default(),
            overlay: None,
        }
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    pub fn overlay(&self) -> Option<&Overlay> {
        self.overlay.as_ref()
    }

    /// Install the next authoritative snapshot.
    ///
    /// The filter persists. An overlay persists only while its subject still
    /// exists in the new snapshot; a pending confirmation never persists,
    /// since its prompt was written against the state that just died.
    pub fn replace(&mut self, snapshot: Snapshot) {
        self.snapshot = snapshot;

        let keep = match &self.overlay {
            None => true,
            Some(Overlay::ItemDetail(key)) => self.owns_readable_item(key),
            Some(Overlay::LocationDetail(id)) => self.snapshot.location(id).is_some(),
            Some(Overlay::UpgradeStore) | Some(Overlay::Archive) => true,
            Some(Overlay::Confirm(_)) => false,
        };

        if !keep {
            tracing::debug!("closing overlay whose subject left the snapshot");
            self.overlay = None;
        }
    }

    /// Open the detail view for an owned, resolvable item copy.
    ///
    /// Returns false without opening when the key is not owned or its base
    /// id has no definition; unreadable entries stay list-only.
    pub fn open_item_detail(&mut self, key: InstanceKey) -> bool {
        if !self.owns_readable_item(&key) {
            tracing::warn!(key = %key, "refusing detail view for unresolvable or unowned item");
            return false;
        }
        self.overlay = Some(Overlay::ItemDetail(key));
        true
    }

    pub fn open_location_detail(&mut self, id: LocationId) -> bool {
        if self.snapshot.location(&id).is_none() {
            tracing::warn!(id, "refusing detail view for unknown location");
            return false;
        }
        self.overlay = Some(Overlay::LocationDetail(id));
        true
    }

    pub fn open_upgrade_store(&mut self) {
        self.overlay = Some(Overlay::UpgradeStore);
    }

    pub fn open_archive(&mut self) {
        self.overlay = Some(Overlay::Archive);
    }

    /// Hold an intent behind an explicit confirmation prompt.
    pub fn request_confirm(&mut self, action: Action, prompt: impl Into<String>) {
        self.overlay = Some(Overlay::Confirm(PendingAction {
            action,
            prompt: prompt.into(),
        }));
    }

    /// Release the held intent, if a confirmation is open.
    pub fn take_confirmed(&mut self) -> Option<Action> {
        match self.overlay.take() {
            Some(Overlay::Confirm(pending)) => Some(pending.action),
            other => {
                self.overlay = other;
                None
            }
        }
    }

    pub fn close_overlay(&mut self) {
        self.overlay = None;
    }

    /// Lock-masking rule, applied identically on every surface: a location
    /// is masked while it requires a key the player has not turned.
    pub fn location_masked(&self, location: &LocationDefinition) -> bool {
        location.requires_key
            && !self
                .snapshot
                .player_state
                .unlocked_location_ids
                .contains(&location.id)
    }

    /// Display name with masking applied.
    pub fn display_name<'a>(&self, location: &'a LocationDefinition) -> &'a str {
        if self.location_masked(location) {
            MASKED_LABEL
        } else {
            &location.name
        }
    }

    fn owns_readable_item(&self, key: &InstanceKey) -> bool {
        let owned = self.snapshot.player_state.inventory.contains(key)
            || self.snapshot.player_state.is_equipped(key);
        owned && self.snapshot.item_definition(key).is_some()
    }
}

#[cfg(test)]
mod tests {
    use protocol::Snapshot;
    use serde_json::json;

    use super::*;

    fn snapshot(inventory: &[&str]) -> Snapshot {
        serde_json::from_value(json!({
            "playerState": {
                "hp": 100, "maxHp": 100, "level": 1, "exp": 0, "maxExp": 100,
                "status": "normal", "currentLocationId": "shelter",
                "inventory": inventory,
            },
            "stats": {"attack": 10},
            "locationInfo": {
                "id": "shelter", "name": "Shelter",
                "coordinates": {"x": 0, "y": 0}, "dangerLevel": "safe"
            },
            "allLocations": {
                "shelter": {
                    "id": "shelter", "name": "Shelter",
                    "coordinates": {"x": 0, "y": 0}, "dangerLevel": "safe"
                }
            },
            "itemDefinitions": {
                "knife": {"id": "knife", "name": "Kitchen Knife", "type": "weapon", "power": 2}
            }
        }))
        .unwrap()
    }

    #[test]
    fn filter_survives_replacement() {
        let mut view = ViewState::new(snapshot(&["knife"]));
        view.filter = ItemFilter::Weapon;
        view.replace(snapshot(&[]));
        assert_eq!(view.filter, ItemFilter::Weapon);
    }

    #[test]
    fn item_overlay_follows_its_subject() {
        let mut view = ViewState::new(snapshot(&["knife:1"]));
        assert!(view.open_item_detail(InstanceKey::from("knife:1")));

        view.replace(snapshot(&["knife:1"]));
        assert!(matches!(view.overlay(), Some(Overlay::ItemDetail(_))));

        view.replace(snapshot(&[]));
        assert_eq!(view.overlay(), None);
    }

    #[test]
    fn unresolvable_item_cannot_open() {
        let mut view = ViewState::new(snapshot(&["mystery"]));
        assert!(!view.open_item_detail(InstanceKey::from("mystery")));
        assert_eq!(view.overlay(), None);
    }

    #[test]
    fn confirm_never_survives_replacement() {
        let mut view = ViewState::new(snapshot(&[]));
        view.request_confirm(Action::Search, "really?");
        view.replace(snapshot(&[]));
        assert_eq!(view.overlay(), None);
    }

    #[test]
    fn take_confirmed_pops_only_confirmations() {
        let mut view = ViewState::new(snapshot(&[]));
        view.open_archive();
        assert_eq!(view.take_confirmed(), None);
        assert!(matches!(view.overlay(), Some(Overlay::Archive)));

        view.request_confirm(Action::Search, "really?");
        assert_eq!(view.take_confirmed(), Some(Action::Search));
        assert_eq!(view.overlay(), None);
    }

    #[test]
    fn masking_follows_unlocks() {
        let view = ViewState::new(snapshot(&[]));
        let mut vault = view.snapshot().location("shelter").unwrap().clone();
        vault.id = "vault".to_owned();
        vault.name = "Sealed Vault".to_owned();
        vault.requires_key = true;

        assert!(view.location_masked(&vault));
        assert_eq!(view.display_name(&vault), MASKED_LABEL);
    }
}

//! The action panel: one button set per player status.
//!
//! Transitions between sets are driven only by the next snapshot; pressing
//! a button never changes the set locally.
use protocol::{Action, PlayerState, PlayerStatus, ReviveMode};

use crate::rules;
use crate::view_state::ViewState;

/// Confirmation shown before the irreversible restart revive.
const RESET_PROMPT: &str =
    "Abandon everything and start over? Level, stats and items are all wiped. \
     This cannot be undone.";

#[derive(Clone, Debug, PartialEq)]
pub struct ActionPanel {
    pub buttons: Vec<ActionButton>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ActionButton {
    pub label: String,

    /// Short affordability or holdings readout under the label.
    pub hint: Option<String>,

    pub command: ButtonCommand,
    pub enabled: bool,
}

/// What activating a button does: dispatch at once, or ask first.
#[derive(Clone, Debug, PartialEq)]
pub enum ButtonCommand {
    Dispatch(Action),
    Confirm { action: Action, prompt: String },
}

pub fn build(view: &ViewState) -> ActionPanel {
    let player = &view.snapshot().player_state;
    match player.status {
        PlayerStatus::Dead => dead_buttons(player),
        PlayerStatus::Combat => combat_buttons(),
        PlayerStatus::Normal => normal_buttons(view),
    }
}

fn dead_buttons(player: &PlayerState) -> ActionPanel {
    let cost = rules::revive_fragment_cost(player.level);
    let affordable = player.heart_fragments >= cost;
    let has_kit = rules::has_first_aid_kit(player);

    let mut buttons = vec![
        ActionButton {
            label: "Spend heart fragments".to_owned(),
            hint: Some(format!("needs {cost}, have {}", player.heart_fragments)),
            command: ButtonCommand::Dispatch(Action::Revive(ReviveMode::Fragment)),
            enabled: affordable,
        },
        ActionButton {
            label: "Use first-aid kit".to_owned(),
            hint: Some(if has_kit { "carrying one" } else { "none carried" }.to_owned()),
            command: ButtonCommand::Dispatch(Action::Revive(ReviveMode::Kit)),
            enabled: has_kit,
        },
    ];

    // Last resort, offered only once both ordinary revives are out of reach.
    if !affordable && !has_kit {
        buttons.push(ActionButton {
            label: "Abandon everything".to_owned(),
            hint: Some("wipes all progression".to_owned()),
            command: ButtonCommand::Confirm {
                action: Action::Revive(ReviveMode::Reset),
                prompt: RESET_PROMPT.to_owned(),
            },
            enabled: true,
        });
    }

    ActionPanel { buttons }
}

fn combat_buttons() -> ActionPanel {
    ActionPanel {
        buttons: vec![
            ActionButton {
                label: "Attack".to_owned(),
                hint: None,
                command: ButtonCommand::Dispatch(Action::Attack),
                enabled: true,
            },
            ActionButton {
                label: "Run".to_owned(),
                hint: None,
                command: ButtonCommand::Dispatch(Action::Run),
                enabled: true,
            },
        ],
    }
}

fn normal_buttons(view: &ViewState) -> ActionPanel {
    let snapshot = view.snapshot();
    let mut buttons = Vec::new();

    for neighbour in &snapshot.connected_locations {
        // The label is masked exactly like the map node; the move itself
        // stays available and the server rules on it.
        let name = match snapshot.location(&neighbour.id) {
            Some(def) => view.display_name(def).to_owned(),
            None => neighbour.name.clone(),
        };
        buttons.push(ActionButton {
            label: format!("Go to {name}"),
            hint: None,
            command: ButtonCommand::Dispatch(Action::Move(neighbour.id.clone())),
            enabled: true,
        });
    }

    if snapshot.location_info.searchable {
        buttons.push(ActionButton {
            label: "Search the area".to_owned(),
            hint: None,
            command: ButtonCommand::Dispatch(Action::Search),
            enabled: true,
        });
    }

    ActionPanel { buttons }
}

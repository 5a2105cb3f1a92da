//! District map layout.
//!
//! Every location with coordinates gets one node at its fixed grid cell.
//! Coordinate collisions are a content-authoring problem, not handled here.
use protocol::LocationId;

use crate::view_state::ViewState;

#[derive(Clone, Debug, PartialEq)]
pub struct MapModel {
    pub nodes: Vec<MapNode>,

    /// Grid cell of the current location, for centering the viewport.
    pub focus: Option<(u16, u16)>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct MapNode {
    pub id: LocationId,
    pub x: u16,
    pub y: u16,

    /// Two-character tag: a name prefix, the player marker, or the masked
    /// placeholder.
    pub label: String,

    pub marker: NodeMarker,
    pub masked: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeMarker {
    Current,
    Reachable,
    Inert,
}

const PLAYER_TAG: &str = "ME";
const MASKED_TAG: &str = "??";

pub fn build(view: &ViewState) -> MapModel {
    let snapshot = view.snapshot();
    let current_id = &snapshot.player_state.current_location_id;

    let mut focus = None;
    let mut nodes = Vec::with_capacity(snapshot.all_locations.len());

    for (id, location) in &snapshot.all_locations {
        let marker = if id == current_id {
            NodeMarker::Current
        } else if snapshot
            .connected_locations
            .iter()
            .any(|neighbour| &neighbour.id == id)
        {
            NodeMarker::Reachable
        } else {
            NodeMarker::Inert
        };

        let masked = view.location_masked(location);
        let label = match marker {
            NodeMarker::Current => PLAYER_TAG.to_owned(),
            _ if masked => MASKED_TAG.to_owned(),
            _ => location.name.chars().take(2).collect(),
        };

        if marker == NodeMarker::Current {
            focus = Some((location.coordinates.x, location.coordinates.y));
        }

        nodes.push(MapNode {
            id: id.clone(),
            x: location.coordinates.x,
            y: location.coordinates.y,
            label,
            marker,
            masked,
        });
    }

    MapModel { nodes, focus }
}

//! Detail view for one map location.
use protocol::{Coordinates, DangerLevel, LocationId};

use crate::view_state::{MASKED_LABEL, ViewState};

const NO_DESCRIPTION: &str = "No field notes on this sector.";

#[derive(Clone, Debug, PartialEq)]
pub struct LocationDetailModel {
    pub id: LocationId,

    /// Masked placeholder when the viewer lacks the key.
    pub name: String,

    /// Shown even for masked locations; a dot on the map hides nothing.
    pub coordinates: Coordinates,

    pub body: LocationBody,
}

#[derive(Clone, Debug, PartialEq)]
pub enum LocationBody {
    /// Access denied: no danger data, threats, or description leak out.
    Masked,

    Open {
        danger: DangerLevel,
        description: String,
        threats: ThreatReport,
        search: SearchIntel,
    },
}

#[derive(Clone, Debug, PartialEq)]
pub enum ThreatReport {
    /// Safe zones show no threat section at all.
    Suppressed,

    /// Dangerous ground with an empty spawn list still says so out loud.
    NoneDetected,

    Detected(Vec<ThreatBadge>),
}

#[derive(Clone, Debug, PartialEq)]
pub struct ThreatBadge {
    pub name: String,
    pub tier: ThreatTier,
}

/// Escalating badge tiers by enemy grade.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThreatTier {
    Base,

    /// Grade 3 and up.
    Elite,

    /// Grade 4 and up.
    Lethal,
}

impl ThreatTier {
    fn from_grade(grade: u32) -> Self {
        if grade >= 4 {
            ThreatTier::Lethal
        } else if grade >= 3 {
            ThreatTier::Elite
        } else {
            ThreatTier::Base
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchIntel {
    NotSearchable,

    /// Rounded percentage.
    Chance(u8),
}

/// Build the detail model, or nothing when the id is unknown.
pub fn build(view: &ViewState, id: &str) -> Option<LocationDetailModel> {
    let snapshot = view.snapshot();
    let location = snapshot.location(id)?;

    if view.location_masked(location) {
        return Some(LocationDetailModel {
            id: location.id.clone(),
            name: MASKED_LABEL.to_owned(),
            coordinates: location.coordinates,
            body: LocationBody::Masked,
        });
    }

    let threats = if location.danger_level == DangerLevel::Safe {
        ThreatReport::Suppressed
    } else {
        let badges: Vec<ThreatBadge> = location
            .spawn_enemy_ids
            .iter()
            .filter_map(|enemy_id| snapshot.enemy(enemy_id))
            .map(|enemy| ThreatBadge {
                name: enemy.name.clone(),
                tier: ThreatTier::from_grade(enemy.grade),
            })
            .collect();
        if badges.is_empty() {
            ThreatReport::NoneDetected
        } else {
            ThreatReport::Detected(badges)
        }
    };

    let search = if location.searchable && location.item_chance > 0.0 {
        SearchIntel::Chance((location.item_chance * 100.0).round() as u8)
    } else {
        SearchIntel::NotSearchable
    };

    Some(LocationDetailModel {
        id: location.id.clone(),
        name: location.name.clone(),
        coordinates: location.coordinates,
        body: LocationBody::Open {
            danger: location.danger_level,
            description: location
                .description
                .clone()
                .unwrap_or_else(|| NO_DESCRIPTION.to_owned()),
            threats,
            search,
        },
    })
}

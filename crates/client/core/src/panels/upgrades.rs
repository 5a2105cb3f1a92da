//! Upgrade store: three independent stat tracks.
use protocol::UpgradeTrack;
use strum::IntoEnumIterator;

use crate::rules;
use crate::view_state::ViewState;

#[derive(Clone, Debug, PartialEq)]
pub struct UpgradeStoreModel {
    /// Shared balance every track draws from.
    pub heart_fragments: u32,

    pub tracks: Vec<TrackView>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TrackView {
    pub track: UpgradeTrack,
    pub title: &'static str,
    pub level: u32,

    /// Fragments for the next level; a pure function of this track's level.
    pub cost: u32,

    pub current_effect: String,
    pub next_effect: String,
    pub affordable: bool,
}

pub fn build(view: &ViewState) -> UpgradeStoreModel {
    let player = &view.snapshot().player_state;
    let fragments = player.heart_fragments;

    let tracks = UpgradeTrack::iter()
        .map(|track| {
            let level = player.upgrade_levels.level(track);
            let cost = rules::track_cost(level);
            TrackView {
                track,
                title: title(track),
                level,
                cost,
                current_effect: effect_text(track, level),
                next_effect: effect_text(track, level + 1),
                affordable: fragments >= cost,
            }
        })
        .collect();

    UpgradeStoreModel {
        heart_fragments: fragments,
        tracks,
    }
}

fn title(track: UpgradeTrack) -> &'static str {
    match track {
        UpgradeTrack::Hp => "Vitality",
        UpgradeTrack::Atk => "Strike Power",
        UpgradeTrack::Evasion => "Reflexes",
    }
}

fn effect_text(track: UpgradeTrack, level: u32) -> String {
    match track {
        UpgradeTrack::Hp => format!("+{} max HP", rules::track_total(track, level)),
        UpgradeTrack::Atk => format!("+{} attack", rules::track_total(track, level)),
        UpgradeTrack::Evasion => format!(
            "+{:.1}% evade chance",
            level as f64 * rules::TRACK_EVASION_PP_PER_LEVEL
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn effect_text_reads_in_track_units() {
        assert_eq!(effect_text(UpgradeTrack::Hp, 2), "+10 max HP");
        assert_eq!(effect_text(UpgradeTrack::Atk, 3), "+3 attack");
        assert_eq!(effect_text(UpgradeTrack::Evasion, 4), "+0.4% evade chance");
    }
}

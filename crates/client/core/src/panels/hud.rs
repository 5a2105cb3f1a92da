//! Status bar values and the server log pane.
use protocol::PlayerStatus;

use crate::view_state::ViewState;

#[derive(Clone, Debug, PartialEq)]
pub struct HudModel {
    pub hp: i64,
    pub max_hp: i64,
    pub attack: u32,
    pub level: u32,
    pub exp: u32,
    pub max_exp: u32,

    /// Experience progress clamped to `0..=100`.
    pub exp_percent: u16,

    pub heart_fragments: u32,
    pub banner: Banner,

    /// Server-authored log, oldest first. The log pane keeps its scroll
    /// pinned to the newest line.
    pub log_lines: Vec<String>,
}

/// Headline over the HUD, driven entirely by player status.
#[derive(Clone, Debug, PartialEq)]
pub enum Banner {
    /// Current location's display name.
    Exploring(String),

    /// Enemy display name.
    Fighting(String),

    Incapacitated,
}

pub fn build(view: &ViewState) -> HudModel {
    let snapshot = view.snapshot();
    let player = &snapshot.player_state;

    let banner = match player.status {
        PlayerStatus::Normal => Banner::Exploring(snapshot.location_info.name.clone()),
        PlayerStatus::Combat => Banner::Fighting(
            player
                .combat_context
                .as_ref()
                .map(|context| context.enemy_name.clone())
                .unwrap_or_else(|| "unknown enemy".to_owned()),
        ),
        PlayerStatus::Dead => Banner::Incapacitated,
    };

    HudModel {
        hp: player.hp.max(0),
        max_hp: player.max_hp,
        attack: snapshot.stats.attack,
        level: player.level,
        exp: player.exp,
        max_exp: player.max_exp,
        exp_percent: exp_percent(player.exp, player.max_exp),
        heart_fragments: player.heart_fragments,
        banner,
        log_lines: player.logs.clone(),
    }
}

fn exp_percent(exp: u32, max_exp: u32) -> u16 {
    if max_exp == 0 {
        return 0;
    }
    ((exp as f64 / max_exp as f64) * 100.0).min(100.0) as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exp_percent_clamps_at_full() {
        assert_eq!(exp_percent(50, 100), 50);
        assert_eq!(exp_percent(250, 100), 100);
        assert_eq!(exp_percent(0, 0), 0);
    }
}

//! Upgrade store overlay: three stat tracks over one fragment balance.
use client_core::panels::upgrades::UpgradeStoreModel;
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::state::AppState;
use crate::theme;

pub fn render(frame: &mut Frame, area: Rect, model: &UpgradeStoreModel, app: &AppState) {
    let mut lines = vec![
        Line::from(Span::styled(
            format!("Fragments {}", model.heart_fragments),
            theme::fragments(),
        )),
        Line::from(""),
    ];

    for (idx, track) in model.tracks.iter().enumerate() {
        let selected = idx == app.overlay_cursor;
        let mut style = theme::button(track.affordable);
        if selected {
            style = theme::selected(style);
        }
        let prefix = if selected { "> " } else { "  " };

        lines.push(Line::from(Span::styled(
            format!(
                "{prefix}{}  Lv {}  (next costs {})",
                track.title, track.level, track.cost
            ),
            style,
        )));
        lines.push(Line::from(Span::styled(
            format!("      {} -> {}", track.current_effect, track.next_effect),
            theme::dim(),
        )));
        lines.push(Line::from(""));
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Upgrades ")
            .border_style(theme::focus_border(true)),
    );
    frame.render_widget(paragraph, area);
}

//! Status bar: banner, vitals, and progression readouts.
use client_core::panels::hud::{Banner, HudModel};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::theme;

pub fn render(frame: &mut Frame, area: Rect, model: &HudModel) {
    let banner = match &model.banner {
        Banner::Exploring(name) => Line::from(vec![
            Span::styled("AREA ", theme::dim()),
            Span::styled(
                name.clone(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Banner::Fighting(enemy) => Line::from(Span::styled(
            format!("ENGAGED - {enemy}"),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Banner::Incapacitated => Line::from(Span::styled(
            "SYSTEM CRITICAL - vital signs lost",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
    };

    let vitals = Line::from(vec![
        Span::styled("HP ", Style::default().fg(Color::White)),
        Span::styled(
            format!("{}/{}", model.hp, model.max_hp),
            theme::health(model.hp, model.max_hp),
        ),
        Span::raw("   ATK "),
        Span::raw(model.attack.to_string()),
        Span::raw("   LV "),
        Span::raw(model.level.to_string()),
    ]);

    let progress = Line::from(vec![
        Span::raw(format!(
            "EXP {}/{} ({}%)",
            model.exp, model.max_exp, model.exp_percent
        )),
        Span::raw("   "),
        Span::styled(
            format!("Fragments {}", model.heart_fragments),
            theme::fragments(),
        ),
    ]);

    let paragraph = Paragraph::new(vec![banner, vitals, progress]).block(
        Block::default()
            .borders(Borders::ALL)
            .title(Span::styled(" Grey City ", theme::title())),
    );

    frame.render_widget(paragraph, area);
}

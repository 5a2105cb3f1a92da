//! Item detail overlay: stats, intel, and the gated action list.
use client_core::panels::item_detail::{
    DropLocations, DropRate, ItemDetailModel, StatLine, UpgradeReadout,
};
use protocol::ItemKind;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::state::AppState;
use crate::theme;

pub fn render(frame: &mut Frame, area: Rect, model: &ItemDetailModel, app: &AppState) {
    let mut lines = vec![
        Line::from(vec![
            Span::styled(model.name.clone(), theme::title()),
            Span::styled(format!("  [{}]", kind_tag(model.kind)), theme::dim()),
        ]),
        Line::from(""),
        stat_line(&model.stats),
        Line::from(""),
        Line::from(model.description.clone()),
        Line::from(""),
    ];

    if let Some(readout) = &model.upgrade {
        lines.extend(upgrade_lines(readout));
        lines.push(Line::from(""));
    }

    lines.extend(drop_lines(model));
    lines.push(Line::from(""));

    for (idx, button) in model.buttons.iter().enumerate() {
        let selected = idx == app.overlay_cursor;
        let mut style = theme::button(button.enabled);
        if selected {
            style = theme::selected(style);
        }
        let prefix = if selected { "> " } else { "  " };
        lines.push(Line::from(Span::styled(
            format!("{prefix}{}", button.label),
            style,
        )));
    }

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Item ")
            .border_style(theme::focus_border(true)),
    );
    frame.render_widget(paragraph, area);
}

fn stat_line(stats: &StatLine) -> Line<'static> {
    match stats {
        StatLine::Weapon { base, bonus, total } => Line::from(vec![
            Span::styled(format!("Power {total}"), Style::default().fg(Color::White)),
            Span::styled(format!("  ({base} base + {bonus} upgrade)"), theme::dim()),
        ]),
        StatLine::Consumable { heal } => Line::from(Span::styled(
            format!("Restores {heal} HP"),
            Style::default().fg(Color::Green),
        )),
        StatLine::Inert => Line::from(Span::styled("No direct use.", theme::dim())),
    }
}

fn upgrade_lines(readout: &UpgradeReadout) -> Vec<Line<'static>> {
    let holdings_style = |have: u32, needed: u32| {
        if have >= needed {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::LightRed)
        }
    };

    vec![
        Line::from(Span::raw(format!("Upgrade level +{}", readout.level))),
        Line::from(vec![
            Span::raw("Next: materials "),
            Span::styled(
                format!("{}/{}", readout.materials_have, readout.materials_needed),
                holdings_style(readout.materials_have, readout.materials_needed),
            ),
            Span::raw("  fragments "),
            Span::styled(
                format!("{}/{}", readout.fragments_have, readout.fragments_needed),
                holdings_style(readout.fragments_have, readout.fragments_needed),
            ),
        ]),
    ]
}

fn drop_lines(model: &ItemDetailModel) -> Vec<Line<'static>> {
    let rate = match model.drops.rate {
        DropRate::Special => Span::styled("Acquired through special means.", theme::dim()),
        DropRate::Chance(percent) => Span::raw(format!("Drop rate {percent}%")),
    };

    let locations = match &model.drops.locations {
        DropLocations::Anywhere => Span::raw("Found anywhere.".to_owned()),
        DropLocations::Named(names) => Span::raw(format!("Found in: {}", names.join(", "))),
    };

    vec![Line::from(rate), Line::from(locations)]
}

fn kind_tag(kind: ItemKind) -> &'static str {
    match kind {
        ItemKind::Weapon => "weapon",
        ItemKind::Consumable => "consumable",
        ItemKind::Currency => "currency",
        ItemKind::Important => "important",
        ItemKind::Material => "material",
    }
}

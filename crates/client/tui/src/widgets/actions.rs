//! Action panel: the current status's button set.
use client_core::panels::actions::ActionPanel;
use ratatui::{
    Frame,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};

use crate::state::{AppState, PanelFocus};
use crate::theme;

pub fn render(frame: &mut Frame, area: Rect, panel: &ActionPanel, app: &AppState) {
    let focused = app.focus == PanelFocus::Actions;
    let title = if app.pending {
        " Actions (transmitting...) "
    } else {
        " Actions "
    };

    let items: Vec<ListItem> = panel
        .buttons
        .iter()
        .enumerate()
        .map(|(idx, button)| {
            let selected = focused && idx == app.action_cursor;
            let mut style = theme::button(button.enabled);
            if app.pending {
                style = style.add_modifier(Modifier::DIM);
            }
            if selected {
                style = theme::selected(style);
            }

            let prefix = if selected { "> " } else { "  " };
            let mut spans = vec![Span::styled(format!("{prefix}{}", button.label), style)];
            if let Some(hint) = &button.hint {
                spans.push(Span::styled(format!("  ({hint})"), theme::dim()));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(theme::focus_border(focused)),
    );

    frame.render_widget(list, area);
}

//! Inventory list under the active category filter.
use client_core::panels::inventory::{EmptyReason, InventoryModel};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

use crate::state::{AppState, PanelFocus};
use crate::theme;

pub fn render(frame: &mut Frame, area: Rect, model: &InventoryModel, app: &AppState) {
    let focused = app.focus == PanelFocus::Inventory;
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" Stash [{}] ", model.filter))
        .border_style(theme::focus_border(focused));

    if let Some(reason) = model.empty {
        let text = match reason {
            EmptyReason::BagEmpty => "Your pack is empty.",
            EmptyReason::CategoryEmpty => "Nothing in this category.",
        };
        let placeholder = Paragraph::new(Span::styled(text, theme::dim())).block(block);
        frame.render_widget(placeholder, area);
        return;
    }

    let items: Vec<ListItem> = model
        .entries
        .iter()
        .enumerate()
        .map(|(idx, entry)| {
            let selected = focused && idx == app.inventory_cursor;
            let mut style = match entry.kind {
                Some(_) => Style::default().fg(Color::White),
                // entries with no definition are visible but inert
                None => theme::masked(),
            };
            if selected {
                style = theme::selected(style);
            }

            let prefix = if selected { "> " } else { "  " };
            let mut spans = vec![Span::styled(format!("{prefix}{}", entry.label), style)];
            if entry.equipped {
                spans.push(Span::styled(" [equipped]", Style::default().fg(Color::Cyan)));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();

    let list = List::new(items).block(block);
    frame.render_widget(list, area);
}

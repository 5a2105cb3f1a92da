//! District map: fixed grid cells, viewport centered on the player.
use client_core::panels::map::MapModel;
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::state::{AppState, PanelFocus};
use crate::theme;

/// Printed width of one grid cell: `[XX] `.
const CELL_WIDTH: u16 = 5;
/// One node row plus one spacer row.
const CELL_HEIGHT: u16 = 2;

pub fn render(frame: &mut Frame, area: Rect, model: &MapModel, app: &AppState) {
    let focused = app.focus == PanelFocus::Map;
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" District Map ")
        .border_style(theme::focus_border(focused));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if model.nodes.is_empty() {
        let placeholder = Paragraph::new(Span::styled("No mapped sectors.", theme::dim()));
        frame.render_widget(placeholder, inner);
        return;
    }

    let max_x = model.nodes.iter().map(|node| node.x).max().unwrap_or(0);
    let max_y = model.nodes.iter().map(|node| node.y).max().unwrap_or(0);

    let mut lines = Vec::new();
    for row in 0..=max_y {
        let mut spans = Vec::new();
        for col in 0..=max_x {
            match model
                .nodes
                .iter()
                .position(|node| node.x == col && node.y == row)
            {
                Some(idx) => {
                    let node = &model.nodes[idx];
                    let mut style = theme::marker(node.marker, node.masked);
                    if focused && idx == app.map_cursor {
                        style = theme::selected(style);
                    }
                    spans.push(Span::styled(format!("[{:<2}]", node.label), style));
                    spans.push(Span::raw(" "));
                }
                None => spans.push(Span::raw("     ")),
            }
        }
        lines.push(Line::from(spans));
        if row < max_y {
            lines.push(Line::from(""));
        }
    }

    let paragraph = Paragraph::new(lines).scroll(scroll_offsets(model.focus, inner));
    frame.render_widget(paragraph, inner);
}

/// Offsets that put the focused cell near the middle of the viewport.
fn scroll_offsets(focus: Option<(u16, u16)>, inner: Rect) -> (u16, u16) {
    let Some((fx, fy)) = focus else {
        return (0, 0);
    };
    let px = fx * CELL_WIDTH;
    let py = fy * CELL_HEIGHT;
    (
        py.saturating_sub(inner.height / 2),
        px.saturating_sub(inner.width / 2),
    )
}

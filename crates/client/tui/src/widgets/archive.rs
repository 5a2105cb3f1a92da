//! Archive overlay: collected records, newest first.
use client_core::panels::archive::ArchiveModel;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::theme;

pub fn render(frame: &mut Frame, area: Rect, model: &ArchiveModel) {
    let mut lines = Vec::new();

    if model.notes.is_empty() {
        lines.push(Line::from(Span::styled(
            "No records collected yet.",
            theme::dim(),
        )));
    }

    for note in &model.notes {
        lines.push(Line::from(Span::styled(
            note.title.clone(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            format!("\"{}\"", note.content),
            theme::dim(),
        )));
        lines.push(Line::from(""));
    }

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Archive ")
            .border_style(theme::focus_border(true)),
    );
    frame.render_widget(paragraph, area);
}

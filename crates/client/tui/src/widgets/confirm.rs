//! Confirmation prompt overlay.
use client_core::frame::ConfirmModel;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    text::Line,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::theme;

pub fn render(frame: &mut Frame, area: Rect, model: &ConfirmModel) {
    let lines = vec![
        Line::from(""),
        Line::from(model.prompt.clone()),
        Line::from(""),
        Line::styled("[y] proceed      [n] back", theme::dim()),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Confirm ")
                .border_style(theme::focus_border(true)),
        );
    frame.render_widget(paragraph, area);
}

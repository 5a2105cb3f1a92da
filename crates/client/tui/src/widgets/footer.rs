//! Footer: latest client notice plus context-sensitive key bindings.
use client_core::OverlayModel;
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};

use super::RenderContext;
use crate::theme;

pub fn render(frame: &mut Frame, area: Rect, ctx: &RenderContext) {
    let notice_line = match ctx.notices.recent(1).next() {
        Some(notice) => Line::from(Span::styled(
            notice.text.clone(),
            theme::notice(notice.level),
        )),
        None => Line::from(""),
    };

    let overlay = ctx.frame.and_then(|ui| ui.overlay.as_ref());
    let hints = match overlay {
        Some(OverlayModel::Confirm(_)) => "[y] Confirm | [n/Esc] Cancel | [q] Quit",
        Some(_) => "[Up/Down] Select | [Enter] Act | [Esc] Close | [q] Quit",
        None => {
            "[Tab] Panel | [Up/Down] Select | [Enter] Act | [f] Filter | \
             [u] Upgrades | [n] Archive | [q] Quit"
        }
    };

    let paragraph = Paragraph::new(vec![notice_line, Line::from(Span::styled(hints, theme::dim()))]);
    frame.render_widget(paragraph, area);
}

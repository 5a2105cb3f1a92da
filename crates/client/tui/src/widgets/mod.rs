//! UI composition: one frame in, one full screen out.
//!
//! Each widget is a pure paint function over its view-model. This module
//! owns the screen layout and routes the open overlay to its widget on top
//! of the standard three-panel base.
pub mod actions;
pub mod archive;
pub mod confirm;
pub mod footer;
pub mod hud;
pub mod inventory;
pub mod item_detail;
pub mod location_detail;
pub mod log;
pub mod map;
pub mod upgrades;

use anyhow::Result;
use client_core::{NoticeLog, OverlayModel, UiFrame};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::state::AppState;
use crate::terminal::Tui;
use crate::theme;

const HUD_HEIGHT: u16 = 5;
const LOG_PANEL_HEIGHT: u16 = 7;
const FOOTER_HEIGHT: u16 = 2;

/// Everything a paint pass reads. `frame` is `None` until the opening
/// snapshot lands.
pub struct RenderContext<'a> {
    pub frame: Option<&'a UiFrame>,
    pub notices: &'a NoticeLog,
    pub app: &'a AppState,
}

pub fn render(terminal: &mut Tui, ctx: &RenderContext) -> Result<()> {
    terminal.draw(|frame| draw(frame, ctx))?;
    Ok(())
}

fn draw(frame: &mut Frame, ctx: &RenderContext) {
    let Some(ui) = ctx.frame else {
        draw_connecting(frame, ctx.notices);
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HUD_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(LOG_PANEL_HEIGHT),
            Constraint::Length(FOOTER_HEIGHT),
        ])
        .split(frame.area());

    hud::render(frame, chunks[0], &ui.hud);

    let middle = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(28),
            Constraint::Percentage(44),
            Constraint::Percentage(28),
        ])
        .split(chunks[1]);

    actions::render(frame, middle[0], &ui.actions, ctx.app);
    map::render(frame, middle[1], &ui.map, ctx.app);
    inventory::render(frame, middle[2], &ui.inventory, ctx.app);

    log::render(frame, chunks[2], &ui.hud.log_lines);
    footer::render(frame, chunks[3], ctx);

    if let Some(overlay) = &ui.overlay {
        draw_overlay(frame, overlay, ctx.app);
    }
}

fn draw_overlay(frame: &mut Frame, overlay: &OverlayModel, app: &AppState) {
    let area = match overlay {
        OverlayModel::Confirm(_) => centered_rect(52, 32, frame.area()),
        _ => centered_rect(62, 72, frame.area()),
    };
    frame.render_widget(Clear, area);

    match overlay {
        OverlayModel::ItemDetail(model) => item_detail::render(frame, area, model, app),
        OverlayModel::LocationDetail(model) => location_detail::render(frame, area, model),
        OverlayModel::UpgradeStore(model) => upgrades::render(frame, area, model, app),
        OverlayModel::Archive(model) => archive::render(frame, area, model),
        OverlayModel::Confirm(model) => confirm::render(frame, area, model),
    }
}

/// Splash shown while the opening load is in flight. A failed load leaves
/// this screen up, so the latest notice is surfaced here too.
fn draw_connecting(frame: &mut Frame, notices: &NoticeLog) {
    let area = centered_rect(50, 30, frame.area());
    let mut lines = vec![
        Line::from(""),
        Line::styled("GREY CITY", theme::title()),
        Line::from(""),
        Line::styled("establishing uplink...", theme::dim()),
    ];
    if let Some(notice) = notices.recent(1).next() {
        lines.push(Line::from(""));
        lines.push(Line::styled(notice.text.clone(), theme::notice(notice.level)));
    }
    let splash = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(splash, area);
}

/// Create a centered rectangle for modal overlays.
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

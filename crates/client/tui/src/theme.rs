//! Styling rules shared by every widget.
//!
//! Keeping the color decisions here means a widget never hardcodes a
//! severity-to-color mapping twice.
use client_core::NoticeLevel;
use client_core::panels::location_detail::ThreatTier;
use client_core::panels::map::NodeMarker;
use protocol::DangerLevel;
use ratatui::style::{Color, Modifier, Style};

/// Health readout color by remaining percent band.
pub fn health(current: i64, maximum: i64) -> Style {
    if maximum <= 0 {
        return Style::default().fg(Color::Gray);
    }

    let percent = (current.max(0) * 100) / maximum;
    let color = match percent {
        75..=100 => Color::Green,
        50..=74 => Color::Yellow,
        25..=49 => Color::LightRed,
        _ => Color::Red,
    };

    Style::default().fg(color)
}

pub fn danger(level: DangerLevel) -> Style {
    match level {
        DangerLevel::Safe => Style::default().fg(Color::Green),
        DangerLevel::Normal => Style::default().fg(Color::Yellow),
        DangerLevel::Danger => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
    }
}

pub fn threat(tier: ThreatTier) -> Style {
    match tier {
        ThreatTier::Base => Style::default().fg(Color::White),
        ThreatTier::Elite => Style::default().fg(Color::Yellow),
        ThreatTier::Lethal => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
    }
}

pub fn notice(level: NoticeLevel) -> Style {
    match level {
        NoticeLevel::Info => Style::default().fg(Color::White),
        NoticeLevel::Warning => Style::default().fg(Color::Yellow),
        NoticeLevel::Error => Style::default().fg(Color::LightRed),
    }
}

pub fn marker(marker: NodeMarker, masked: bool) -> Style {
    if masked {
        return self::masked();
    }
    match marker {
        NodeMarker::Current => Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        NodeMarker::Reachable => Style::default().fg(Color::Cyan),
        NodeMarker::Inert => Style::default().fg(Color::DarkGray),
    }
}

/// Lock-masked content: present on screen, unreadable on purpose.
pub fn masked() -> Style {
    Style::default().fg(Color::Magenta).add_modifier(Modifier::DIM)
}

pub fn button(enabled: bool) -> Style {
    if enabled {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

/// Highlight for the line the cursor sits on.
pub fn selected(base: Style) -> Style {
    base.bg(Color::DarkGray).add_modifier(Modifier::BOLD)
}

/// Border style marking the focused panel.
pub fn focus_border(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::Gray)
    }
}

pub fn title() -> Style {
    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
}

pub fn dim() -> Style {
    Style::default().fg(Color::DarkGray)
}

pub fn fragments() -> Style {
    Style::default().fg(Color::Magenta)
}

//! Location detail overlay.
use client_core::panels::location_detail::{
    LocationBody, LocationDetailModel, SearchIntel, ThreatReport, ThreatTier,
};
use protocol::DangerLevel;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::theme;

pub fn render(frame: &mut Frame, area: Rect, model: &LocationDetailModel) {
    let name_style = match model.body {
        LocationBody::Masked => theme::masked(),
        LocationBody::Open { .. } => theme::title(),
    };

    let mut lines = vec![
        Line::from(Span::styled(model.name.clone(), name_style)),
        Line::from(Span::styled(
            format!("Grid ({}, {})", model.coordinates.x, model.coordinates.y),
            theme::dim(),
        )),
        Line::from(""),
    ];

    match &model.body {
        LocationBody::Masked => {
            lines.push(Line::from(Span::styled(
                "ACCESS DENIED",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from("A key is required to enter this sector."));
        }
        LocationBody::Open {
            danger,
            description,
            threats,
            search,
        } => {
            lines.push(Line::from(vec![
                Span::raw("Threat level: "),
                Span::styled(danger_tag(*danger), theme::danger(*danger)),
            ]));
            lines.push(Line::from(""));
            lines.push(Line::from(description.clone()));
            lines.push(Line::from(""));
            lines.extend(threat_lines(threats));
            lines.push(search_line(*search));
        }
    }

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Sector ")
            .border_style(theme::focus_border(true)),
    );
    frame.render_widget(paragraph, area);
}

fn danger_tag(danger: DangerLevel) -> &'static str {
    match danger {
        DangerLevel::Safe => "SAFE",
        DangerLevel::Normal => "UNSTABLE",
        DangerLevel::Danger => "HOSTILE",
    }
}

fn threat_lines(threats: &ThreatReport) -> Vec<Line<'static>> {
    match threats {
        ThreatReport::Suppressed => Vec::new(),
        ThreatReport::NoneDetected => {
            vec![Line::from(Span::styled("No threats detected.", theme::dim()))]
        }
        ThreatReport::Detected(badges) => {
            let mut lines = vec![Line::from("Known threats:")];
            for badge in badges {
                let tier_tag = match badge.tier {
                    ThreatTier::Base => "",
                    ThreatTier::Elite => "  [ELITE]",
                    ThreatTier::Lethal => "  [LETHAL]",
                };
                lines.push(Line::from(Span::styled(
                    format!("  {}{tier_tag}", badge.name),
                    theme::threat(badge.tier),
                )));
            }
            lines
        }
    }
}

fn search_line(search: SearchIntel) -> Line<'static> {
    match search {
        SearchIntel::NotSearchable => {
            Line::from(Span::styled("Nothing to scavenge here.", theme::dim()))
        }
        SearchIntel::Chance(percent) => Line::from(format!("Scavenge odds {percent}%")),
    }
}

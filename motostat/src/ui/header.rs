//! Top header with the endpoint, last update time and the alert badge.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::dashboard::Dashboard;
use crate::ui::theme::{tone_color, BADGE_FG, MUTED};

pub fn header_line<'a>(dash: &'a Dashboard, endpoint: &'a str) -> Line<'a> {
    let mut spans = vec![Span::raw(format!("motostat | {endpoint}"))];

    let content = dash.panel.as_ref().and_then(|p| p.content.as_ref());
    match content {
        None => spans.push(Span::styled(
            "  waiting for first snapshot...",
            Style::default().fg(MUTED),
        )),
        Some(c) => {
            if let Some(at) = c.updated_at {
                spans.push(Span::styled(
                    format!("  | atualizado {}", at.format("%H:%M:%S")),
                    Style::default().fg(MUTED),
                ));
            }
        }
    }

    if let Some(b) = dash.badge.as_ref().filter(|b| b.visible) {
        let bg = b.tone.map(tone_color).unwrap_or(MUTED);
        spans.push(Span::raw("  Motos "));
        spans.push(Span::styled(
            format!(" {} ", b.text),
            Style::default()
                .fg(BADGE_FG)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ));
        if let Some(tip) = b.tooltip.as_deref() {
            spans.push(Span::styled(format!(" {tip}"), Style::default().fg(MUTED)));
        }
    }

    spans.push(Span::raw("  (press 'q' to quit)"));
    Line::from(spans)
}

pub fn draw_header(f: &mut ratatui::Frame<'_>, area: Rect, dash: &Dashboard, endpoint: &str) {
    let p = Paragraph::new(header_line(dash, endpoint)).block(Block::default().borders(Borders::BOTTOM));
    f.render_widget(p, area);
}

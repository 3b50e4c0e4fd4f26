//! Indicator panel: one card per stat tile plus the alert banner underneath.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use crate::dashboard::{Panel, StatTile};
use crate::ui::theme::{tone_color, MUTED};

// Same proportions as the web grid: 2/2/2/3/3 of 12 columns.
const TILE_COLS: [Constraint; 5] = [
    Constraint::Ratio(2, 12),
    Constraint::Ratio(2, 12),
    Constraint::Ratio(2, 12),
    Constraint::Ratio(3, 12),
    Constraint::Ratio(3, 12),
];

pub fn draw_panel(f: &mut ratatui::Frame<'_>, area: Rect, panel: Option<&Panel>) {
    let Some(panel) = panel else { return };
    let Some(content) = panel.content.as_ref() else {
        f.render_widget(
            Paragraph::new("Carregando indicadores...")
                .style(Style::default().fg(MUTED))
                .block(Block::default().borders(Borders::ALL).title("Indicadores")),
            area,
        );
        return;
    };

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(TILE_COLS)
        .split(rows[0]);
    for (tile, slot) in content.tiles.iter().zip(cols.iter()) {
        draw_tile(f, *slot, tile);
    }

    let color = tone_color(content.banner.tone);
    let banner = Paragraph::new(content.banner.text.as_str())
        .style(Style::default().fg(color))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color)),
        );
    f.render_widget(banner, rows[1]);
}

fn draw_tile(f: &mut ratatui::Frame<'_>, area: Rect, tile: &StatTile) {
    let value = Line::styled(
        tile.value.as_str(),
        Style::default()
            .fg(tone_color(tile.tone))
            .add_modifier(Modifier::BOLD),
    );
    let label = Line::styled(tile.label, Style::default().fg(MUTED));
    let card = Paragraph::new(vec![label, value])
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(card, area);
}

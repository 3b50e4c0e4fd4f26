//! Shared UI theme: tone -> color.

use ratatui::style::Color;

use crate::dashboard::Tone;

pub const BADGE_FG: Color = Color::White;
pub const MUTED: Color = Color::Rgb(170, 170, 180);

pub fn tone_color(t: Tone) -> Color {
    match t {
        Tone::Neutral => Color::Reset,
        Tone::Success => Color::Green,
        Tone::Primary => Color::Blue,
        Tone::Warning => Color::Yellow,
        Tone::Secondary => Color::Gray,
        Tone::Danger => Color::Red,
    }
}

//! Plain-text rendering of the dashboard, used by `--once` and in tests.

use std::fmt::Write;

use crate::dashboard::{Dashboard, Tone};

fn tone_tag(t: Tone) -> &'static str {
    match t {
        Tone::Neutral => "neutral",
        Tone::Success => "success",
        Tone::Primary => "primary",
        Tone::Warning => "warning",
        Tone::Secondary => "secondary",
        Tone::Danger => "danger",
    }
}

pub fn render_text(dash: &Dashboard) -> String {
    let mut out = String::new();

    if let Some(b) = dash.badge.as_ref() {
        if b.visible {
            let tone = b.tone.map(tone_tag).unwrap_or("neutral");
            let _ = writeln!(out, "badge: {} [{tone}]", b.text);
        } else {
            let _ = writeln!(out, "badge: hidden");
        }
    }

    if let Some(p) = dash.panel.as_ref() {
        match p.content.as_ref() {
            None => {
                let _ = writeln!(out, "panel: empty");
            }
            Some(c) => {
                for t in &c.tiles {
                    let _ = writeln!(out, "{:<12} {:>6}", t.label, t.value);
                }
                let _ = writeln!(out, "[{}] {}", tone_tag(c.banner.tone), c.banner.text);
            }
        }
    }
    out
}

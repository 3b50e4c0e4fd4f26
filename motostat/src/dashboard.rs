//! Dashboard regions (badge + panel) and the two operations that rewrite them.
//!
//! A region set to `None` is not mounted; updates to it are skipped silently.

use chrono::NaiveDateTime;
use tracing::{debug, warn};

use crate::error::FetchError;
use crate::types::IndicatorSnapshot;

/// Visual tone of a badge, tile or banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Neutral,
    Success,
    Primary,
    Warning,
    Secondary,
    Danger,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Badge {
    pub visible: bool,
    pub text: String,
    pub tone: Option<Tone>,
    pub tooltip: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatTile {
    pub label: &'static str,
    pub value: String,
    pub tone: Tone,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub tone: Tone,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelContent {
    pub tiles: Vec<StatTile>,
    pub banner: Banner,
    pub updated_at: Option<NaiveDateTime>,
}

/// Panel container. `content` stays `None` until the first successful render.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Panel {
    pub content: Option<PanelContent>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dashboard {
    pub badge: Option<Badge>,
    pub panel: Option<Panel>,
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::new()
    }
}

impl Dashboard {
    /// Both regions mounted, badge hidden, panel empty.
    pub fn new() -> Self {
        Self {
            badge: Some(Badge::default()),
            panel: Some(Panel::default()),
        }
    }

    pub fn update_badge(&mut self, alert_count: u64) {
        let Some(badge) = self.badge.as_mut() else {
            return;
        };
        if alert_count > 0 {
            badge.text = alert_count.to_string();
            badge.visible = true;
            badge.tone = Some(Tone::Danger);
            badge.tooltip = Some(format!("{alert_count} alerta(s) ativo(s)"));
        } else {
            badge.text.clear();
            badge.visible = false;
        }
    }

    /// Full replacement of the panel content; nothing is carried over.
    pub fn render_panel(&mut self, snapshot: &IndicatorSnapshot, alert_count: u64) {
        let Some(panel) = self.panel.as_mut() else {
            return;
        };
        panel.content = Some(panel_content(snapshot, alert_count));
    }

    pub fn apply_snapshot(&mut self, snapshot: &IndicatorSnapshot) {
        let alerts = snapshot.alert_count();
        debug!(alerts, total = snapshot.total_motos, "applying indicators snapshot");
        self.update_badge(alerts);
        self.render_panel(snapshot, alerts);
    }

    /// Failures only reset the badge. The panel keeps its last render.
    pub fn apply_outcome(&mut self, outcome: Result<IndicatorSnapshot, FetchError>) {
        match outcome {
            Ok(snapshot) => self.apply_snapshot(&snapshot),
            Err(e) => {
                warn!(error = %e, "indicators fetch failed");
                self.update_badge(0);
            }
        }
    }
}

pub fn panel_content(s: &IndicatorSnapshot, alert_count: u64) -> PanelContent {
    let tile = |label: &'static str, value: u64, tone: Tone| StatTile {
        label,
        value: value.to_string(),
        tone,
    };
    PanelContent {
        tiles: vec![
            tile("Total", s.total_motos, Tone::Neutral),
            tile("Disponível", s.disponivel, Tone::Success),
            tile("Em uso", s.em_uso, Tone::Primary),
            tile("Manutenção", s.manutencao, Tone::Warning),
            tile("Inativa", s.inativa, Tone::Secondary),
        ],
        banner: banner_for(alert_count),
        updated_at: s.atualizado_em,
    }
}

pub fn banner_for(alert_count: u64) -> Banner {
    if alert_count > 0 {
        Banner {
            tone: Tone::Danger,
            text: format!("{alert_count} alerta(s) ativo(s) em Motos"),
        }
    } else {
        Banner {
            tone: Tone::Success,
            text: "Nenhum alerta ativo".into(),
        }
    }
}

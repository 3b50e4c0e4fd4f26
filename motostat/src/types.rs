//! Types that mirror the agent's JSON schema.

use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer};

/// One fetched set of fleet counts. Missing or `null` counts decode as zero.
#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct IndicatorSnapshot {
    #[serde(deserialize_with = "count_or_zero")]
    pub total_motos: u64,
    #[serde(deserialize_with = "count_or_zero")]
    pub disponivel: u64,
    #[serde(deserialize_with = "count_or_zero")]
    pub em_uso: u64,
    #[serde(deserialize_with = "count_or_zero")]
    pub manutencao: u64,
    #[serde(deserialize_with = "count_or_zero")]
    pub inativa: u64,
    // server clock, informational only
    pub atualizado_em: Option<NaiveDateTime>,
}

fn count_or_zero<'de, D: Deserializer<'de>>(d: D) -> Result<u64, D::Error> {
    Option::<u64>::deserialize(d).map(Option::unwrap_or_default)
}

impl IndicatorSnapshot {
    pub fn alert_count(&self) -> u64 {
        derive_alert_count(self)
    }
}

/// Motos that need attention: maintenance plus inactive.
/// The server also reports `alertasAtivos`, but it is never trusted.
pub fn derive_alert_count(s: &IndicatorSnapshot) -> u64 {
    s.manutencao.saturating_add(s.inativa)
}

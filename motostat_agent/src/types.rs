//! Data types on the wire: the fleet file format and the indicators payload.
//! Indicator field names are what the dashboard client decodes; status labels match the fleet file.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MotoStatus {
    Disponivel,
    EmUso,
    Manutencao,
    Inativa,
    // any other label: counted in the total only
    #[serde(other)]
    Outro,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Moto {
    pub id: u64,
    pub placa: String,
    #[serde(default)]
    pub modelo: String,
    pub status: MotoStatus,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Indicadores {
    pub total_motos: u64,
    pub disponivel: u64,
    pub em_uso: u64,
    pub manutencao: u64,
    pub inativa: u64,
    pub alertas_ativos: u64,
    pub atualizado_em: NaiveDateTime,
}

impl Indicadores {
    pub fn from_fleet(motos: &[Moto], now: NaiveDateTime) -> Self {
        let count = |s: MotoStatus| motos.iter().filter(|m| m.status == s).count() as u64;
        let manutencao = count(MotoStatus::Manutencao);
        let inativa = count(MotoStatus::Inativa);
        Self {
            total_motos: motos.len() as u64,
            disponivel: count(MotoStatus::Disponivel),
            em_uso: count(MotoStatus::EmUso),
            manutencao,
            inativa,
            alertas_ativos: manutencao + inativa,
            atualizado_em: now,
        }
    }

    /// Served when the fleet cannot be read, so the dashboard keeps working.
    pub fn zeroed(now: NaiveDateTime) -> Self {
        Self::from_fleet(&[], now)
    }
}

//! HTTP routes. `/api/indicadores` always answers 200; a broken fleet source yields zeros.

use axum::{extract::State, http::header, response::IntoResponse, routing::get, Json, Router};
use chrono::Local;
use tracing::{debug, error};

use crate::state::AppState;
use crate::types::Indicadores;

pub const INDICATORS_PATH: &str = "/api/indicadores";

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(INDICATORS_PATH, get(indicadores_handler))
        .with_state(state)
}

pub async fn indicadores_handler(State(state): State<AppState>) -> impl IntoResponse {
    let now = Local::now().naive_local();
    let body = match state.fleet.load().await {
        Ok(motos) => {
            let ind = Indicadores::from_fleet(&motos, now);
            debug!(total = ind.total_motos, alerts = ind.alertas_ativos, "indicators computed");
            ind
        }
        Err(e) => {
            error!(error = %e, "failed to compute indicators");
            Indicadores::zeroed(now)
        }
    };
    ([(header::CACHE_CONTROL, "no-store")], Json(body))
}

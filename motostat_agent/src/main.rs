//! motostat_agent: serves fleet indicators at /api/indicadores.

use std::{env, net::SocketAddr};

use motostat_agent::api::router;
use motostat_agent::config::{parse_args, FleetChoice};
use motostat_agent::fleet::{demo_fleet, FleetSource};
use motostat_agent::sampler::spawn_rotation_sampler;
use motostat_agent::state::AppState;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cfg = match parse_args(env::args()) {
        Ok(cfg) => cfg,
        Err(msg) if msg.starts_with("Usage:") => {
            eprintln!("{msg}");
            return Ok(());
        }
        Err(msg) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("motostat_agent=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let fleet = match &cfg.fleet {
        FleetChoice::File(path) => {
            info!(path = %path.display(), "serving fleet file");
            FleetSource::File(path.clone())
        }
        FleetChoice::Demo { rotate } => {
            let src = FleetSource::memory(demo_fleet());
            if let (Some(period), FleetSource::Memory(shared)) = (rotate, &src) {
                info!(period_ms = period.as_millis() as u64, "demo fleet rotation enabled");
                spawn_rotation_sampler(shared.clone(), *period);
            } else {
                info!("serving static demo fleet");
            }
            src
        }
    };

    let app = router(AppState::new(fleet));

    let addr = SocketAddr::from(([0, 0, 0, 0], cfg.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("motostat_agent listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}

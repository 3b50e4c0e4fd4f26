//! Entry point for the motostat TUI. Parses args and runs the App.

use std::env;
use std::process::{Child, Command, Stdio};
use std::sync::Arc;

use motostat::app::{fetch_once, App};
use motostat::config::{parse_args, ArgsError, ClientConfig, Mode, DEMO_PORT};
use motostat::http::HttpSource;
use motostat::logging::init_logging;
use motostat::ui::text::render_text;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cfg = match parse_args(env::args()).and_then(ClientConfig::from_env) {
        Ok(cfg) => cfg,
        Err(ArgsError::Help(usage)) => {
            eprintln!("{usage}");
            return Ok(());
        }
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(2);
        }
    };
    init_logging(cfg.mode);

    let source = Arc::new(HttpSource::new(&cfg.base_url, cfg.timeout)?);
    let endpoint = source.endpoint().to_string();
    info!(%endpoint, mode = ?cfg.mode, "starting motostat");

    match cfg.mode {
        Mode::Once => {
            let (dash, ok) = fetch_once(source.as_ref()).await;
            print!("{}", render_text(&dash));
            if !ok {
                std::process::exit(1);
            }
            Ok(())
        }
        Mode::Tui => {
            let mut app = App::new(endpoint);
            app.run(source, cfg.interval).await
        }
        Mode::Demo => {
            let _agent = spawn_demo_agent(DEMO_PORT)?;
            // Give the agent a brief moment to bind; early misses are retried by the next tick.
            tokio::time::sleep(std::time::Duration::from_millis(300)).await;
            let mut app = App::new(endpoint);
            tokio::select! {
                res = app.run(source, cfg.interval) => res,
                _ = tokio::signal::ctrl_c() => Ok(()),
            }
        }
    }
}

// --- Demo Mode ---

// Kills the spawned agent when dropped.
struct DemoGuard(Child);

impl Drop for DemoGuard {
    fn drop(&mut self) {
        let _ = self.0.kill();
        let _ = self.0.wait();
    }
}

fn spawn_demo_agent(port: u16) -> anyhow::Result<DemoGuard> {
    let child = Command::new(find_agent_executable())
        .arg("--port")
        .arg(port.to_string())
        .arg("--demo")
        .env("RUST_LOG", "off")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;
    Ok(DemoGuard(child))
}

fn find_agent_executable() -> std::path::PathBuf {
    #[cfg(windows)]
    let name = "motostat_agent.exe";
    #[cfg(not(windows))]
    let name = "motostat_agent";

    if let Some(parent) = env::current_exe().ok().and_then(|exe| exe.parent().map(|p| p.to_path_buf())) {
        let candidate = parent.join(name);
        if candidate.exists() {
            return candidate;
        }
    }
    // Fallback to relying on PATH
    std::path::PathBuf::from(name)
}

//! Tracing setup. The TUI owns the terminal, so it only logs to a file when
//! MOTOSTAT_LOG_FILE is set; `--once` logs to stderr.

use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::Mode;

fn filter(default_directive: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive))
}

pub fn init_logging(mode: Mode) {
    match mode {
        Mode::Once => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter("motostat=warn"))
                .with_writer(std::io::stderr)
                .try_init();
        }
        Mode::Tui | Mode::Demo => {
            let Some(path) = std::env::var_os("MOTOSTAT_LOG_FILE") else {
                return;
            };
            match OpenOptions::new().create(true).append(true).open(&path) {
                Ok(file) => {
                    let _ = tracing_subscriber::fmt()
                        .with_env_filter(filter("motostat=info"))
                        .with_ansi(false)
                        .with_writer(Mutex::new(file))
                        .try_init();
                }
                Err(e) => eprintln!("cannot open log file {}: {e}", path.to_string_lossy()),
            }
        }
    }
}

//! Command-line parsing and client configuration.
//! Flags win over env vars (MOTOSTAT_URL, MOTOSTAT_INTERVAL_MS), which win over defaults.

use std::time::Duration;

use crate::poller::DEFAULT_INTERVAL;

pub const DEFAULT_URL: &str = "http://127.0.0.1:3000";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(5000);
pub const DEMO_PORT: u16 = 3231;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ArgsError {
    /// `--help` was requested; carries the usage text.
    #[error("{0}")]
    Help(String),
    #[error("{0}")]
    Invalid(String),
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct ParsedArgs {
    pub url: Option<String>,
    pub interval_ms: Option<u64>,
    pub timeout_ms: Option<u64>,
    pub once: bool,
    pub demo: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Tui,
    Once,
    Demo,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub interval: Duration,
    pub timeout: Duration,
    pub mode: Mode,
}

fn usage(prog: &str) -> String {
    format!(
        "Usage: {prog} [--interval-ms N|-i N] [--timeout-ms N] [--once] [--demo] [http://HOST:PORT]"
    )
}

fn parse_ms(flag: &str, v: Option<String>) -> Result<u64, ArgsError> {
    let v = v.ok_or_else(|| ArgsError::Invalid(format!("{flag} needs a value")))?;
    match v.parse::<u64>() {
        Ok(0) => Err(ArgsError::Invalid(format!("{flag} must be greater than zero"))),
        Ok(n) => Ok(n),
        Err(_) => Err(ArgsError::Invalid(format!("{flag}: not a number: {v}"))),
    }
}

pub fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Result<ParsedArgs, ArgsError> {
    let mut it = args.into_iter();
    let prog = it.next().unwrap_or_else(|| "motostat".into());
    let mut parsed = ParsedArgs::default();

    while let Some(arg) = it.next() {
        match arg.as_str() {
            "-h" | "--help" => return Err(ArgsError::Help(usage(&prog))),
            "--interval-ms" | "-i" => {
                parsed.interval_ms = Some(parse_ms("--interval-ms", it.next())?);
            }
            "--timeout-ms" => {
                parsed.timeout_ms = Some(parse_ms("--timeout-ms", it.next())?);
            }
            "--once" => parsed.once = true,
            "--demo" => parsed.demo = true,
            _ if arg.starts_with("--interval-ms=") => {
                let v = arg.split_once('=').map(|(_, v)| v.to_string());
                parsed.interval_ms = Some(parse_ms("--interval-ms", v)?);
            }
            _ if arg.starts_with("--timeout-ms=") => {
                let v = arg.split_once('=').map(|(_, v)| v.to_string());
                parsed.timeout_ms = Some(parse_ms("--timeout-ms", v)?);
            }
            _ if arg.starts_with('-') => {
                return Err(ArgsError::Invalid(format!(
                    "Unknown flag {arg}. {}",
                    usage(&prog)
                )));
            }
            _ => {
                if parsed.url.is_none() {
                    parsed.url = Some(arg);
                } else {
                    return Err(ArgsError::Invalid(format!(
                        "Unexpected argument. {}",
                        usage(&prog)
                    )));
                }
            }
        }
    }
    Ok(parsed)
}

impl ClientConfig {
    pub fn from_env(parsed: ParsedArgs) -> Result<Self, ArgsError> {
        Self::resolve(parsed, |k| std::env::var(k).ok())
    }

    pub fn resolve<F>(parsed: ParsedArgs, env: F) -> Result<Self, ArgsError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mode = if parsed.demo {
            Mode::Demo
        } else if parsed.once {
            Mode::Once
        } else {
            Mode::Tui
        };

        // Demo always targets the agent it spawns.
        let base_url = if mode == Mode::Demo {
            format!("http://127.0.0.1:{DEMO_PORT}")
        } else {
            parsed
                .url
                .or_else(|| env("MOTOSTAT_URL").filter(|v| !v.is_empty()))
                .unwrap_or_else(|| DEFAULT_URL.to_string())
        };

        let interval_ms = match parsed.interval_ms {
            Some(ms) => Some(ms),
            None => env("MOTOSTAT_INTERVAL_MS")
                .filter(|v| !v.is_empty())
                .map(|v| parse_ms("MOTOSTAT_INTERVAL_MS", Some(v)))
                .transpose()?,
        };

        Ok(Self {
            base_url,
            interval: interval_ms
                .map(Duration::from_millis)
                .unwrap_or(DEFAULT_INTERVAL),
            timeout: parsed
                .timeout_ms
                .map(Duration::from_millis)
                .unwrap_or(DEFAULT_TIMEOUT),
            mode,
        })
    }
}

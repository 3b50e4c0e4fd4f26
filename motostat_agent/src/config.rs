//! Agent command-line parsing.

use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_ROTATE: Duration = Duration::from_millis(3000);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FleetChoice {
    File(PathBuf),
    /// Seeded in-memory fleet; rotated by the sampler when `rotate` is set.
    Demo { rotate: Option<Duration> },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentConfig {
    pub port: u16,
    pub fleet: FleetChoice,
}

pub fn usage(prog: &str) -> String {
    format!("Usage: {prog} [--port N|-p N] [--fleet PATH] [--demo] [--rotate-ms N]")
}

fn value_of(arg: &str) -> Option<String> {
    arg.split_once('=').map(|(_, v)| v.to_string())
}

/// `Err` carries either the usage text (for `--help`) or a message.
pub fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Result<AgentConfig, String> {
    let mut it = args.into_iter();
    let prog = it.next().unwrap_or_else(|| "motostat_agent".into());
    let mut port: Option<String> = None;
    let mut fleet: Option<String> = None;
    let mut rotate_ms: Option<String> = None;
    let mut demo = false;

    while let Some(arg) = it.next() {
        match arg.as_str() {
            "-h" | "--help" => return Err(usage(&prog)),
            "--port" | "-p" => port = it.next(),
            "--fleet" => fleet = it.next(),
            "--rotate-ms" => rotate_ms = it.next(),
            "--demo" => demo = true,
            _ if arg.starts_with("--port=") => port = value_of(&arg),
            _ if arg.starts_with("--fleet=") => fleet = value_of(&arg),
            _ if arg.starts_with("--rotate-ms=") => rotate_ms = value_of(&arg),
            _ => return Err(format!("Unexpected argument {arg}. {}", usage(&prog))),
        }
    }

    let port = match port {
        None => DEFAULT_PORT,
        Some(p) => p.parse::<u16>().map_err(|_| format!("invalid port: {p}"))?,
    };

    let rotate = match rotate_ms {
        None => None,
        Some(v) => match v.parse::<u64>() {
            Ok(0) | Err(_) => return Err(format!("invalid --rotate-ms: {v}")),
            Ok(ms) => Some(Duration::from_millis(ms)),
        },
    };

    let fleet = match (fleet, demo) {
        (Some(_), true) => return Err("--fleet and --demo are mutually exclusive".into()),
        (Some(path), false) if path.is_empty() => return Err("--fleet needs a path".into()),
        (Some(path), false) => {
            if rotate.is_some() {
                return Err("--rotate-ms only applies to --demo".into());
            }
            FleetChoice::File(PathBuf::from(path))
        }
        (None, true) => FleetChoice::Demo {
            rotate: Some(rotate.unwrap_or(DEFAULT_ROTATE)),
        },
        (None, false) => FleetChoice::Demo { rotate },
    };

    Ok(AgentConfig { port, fleet })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(v: &[&str]) -> Result<AgentConfig, String> {
        parse_args(
            std::iter::once("agent")
                .chain(v.iter().copied())
                .map(String::from),
        )
    }

    #[test]
    fn port_long_short_and_assign() {
        assert_eq!(parse(&["--port", "9001"]).unwrap().port, 9001);
        assert_eq!(parse(&["-p", "9002"]).unwrap().port, 9002);
        assert_eq!(parse(&["--port=9003"]).unwrap().port, 9003);
        assert_eq!(parse(&[]).unwrap().port, DEFAULT_PORT);
        assert!(parse(&["-p", "http"]).is_err());
        assert!(parse(&["-p", "70000"]).is_err());
    }

    #[test]
    fn fleet_choices() {
        assert_eq!(
            parse(&[]).unwrap().fleet,
            FleetChoice::Demo { rotate: None }
        );
        assert_eq!(
            parse(&["--demo"]).unwrap().fleet,
            FleetChoice::Demo {
                rotate: Some(DEFAULT_ROTATE)
            }
        );
        assert_eq!(
            parse(&["--demo", "--rotate-ms=500"]).unwrap().fleet,
            FleetChoice::Demo {
                rotate: Some(Duration::from_millis(500))
            }
        );
        assert_eq!(
            parse(&["--fleet", "/srv/motos.json"]).unwrap().fleet,
            FleetChoice::File(PathBuf::from("/srv/motos.json"))
        );
    }

    #[test]
    fn conflicting_or_bad_flags() {
        assert!(parse(&["--demo", "--fleet", "x.json"]).is_err());
        assert!(parse(&["--fleet", "x.json", "--rotate-ms", "100"]).is_err());
        assert!(parse(&["--demo", "--rotate-ms", "0"]).is_err());
        assert!(parse(&["--fleet="]).is_err());
        assert!(parse(&["--verbose"]).is_err());
    }

    #[test]
    fn help_returns_usage() {
        let e = parse(&["--help"]).unwrap_err();
        assert!(e.starts_with("Usage: agent"));
    }
}

//! CLI tests for motostat_agent (server)
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

use assert_cmd::prelude::*;

fn free_port() -> u16 {
    let l = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    l.local_addr().unwrap().port()
}

#[test]
fn test_help_mentions_flags() {
    let out = Command::cargo_bin("motostat_agent")
        .expect("binary exists")
        .arg("--help")
        .output()
        .expect("run agent");
    assert!(out.status.success());
    let text = String::from_utf8_lossy(&out.stderr);
    assert!(text.contains("--port") && text.contains("-p") && text.contains("--fleet"), "{text}");
}

#[test]
fn test_conflicting_flags_exit_nonzero() {
    let out = Command::cargo_bin("motostat_agent")
        .expect("binary exists")
        .args(["--demo", "--fleet", "motos.json"])
        .output()
        .expect("run agent");
    assert_eq!(out.status.code(), Some(2));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_serves_indicators_on_requested_port() {
    let port = free_port();
    let mut child = Command::cargo_bin("motostat_agent")
        .expect("binary exists")
        .args(["--demo", "-p", port.to_string().as_str()])
        .stderr(Stdio::null())
        .spawn()
        .expect("spawn agent");

    // Poll up to ~3s for the agent to bind
    let url = format!("http://127.0.0.1:{port}/api/indicadores");
    let start = Instant::now();
    let mut body = None;
    while start.elapsed() < Duration::from_millis(3000) {
        if let Ok(resp) = reqwest::get(&url).await {
            body = resp.json::<serde_json::Value>().await.ok();
            break;
        }
        tokio::time::sleep(Duration::from_millis(50)).await;
    }

    let _ = child.kill();
    let _ = child.wait();

    let body = body.expect("agent answered");
    assert_eq!(body["totalMotos"], 12);
}

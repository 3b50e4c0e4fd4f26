//! Library entry point for motostat: fetch, dashboard model, scheduler and UI.

pub mod app;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod http;
pub mod logging;
pub mod poller;
pub mod types;
pub mod ui;

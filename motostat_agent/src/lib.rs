//! Library entry point for motostat_agent: fleet sources, indicators route and demo sampler.

pub mod api;
pub mod config;
pub mod fleet;
pub mod sampler;
pub mod state;
pub mod types;

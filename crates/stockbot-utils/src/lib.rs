//! Shared utilities for stockbot
//!
//! This crate provides the ambient pieces used across the stockbot workspace:
//! tracing setup and the logging configuration that drives it.

pub mod config;
pub mod logging;

pub use config::LogConfig;
pub use logging::init_tracing_with;

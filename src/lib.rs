pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod generator;
pub mod loader;
pub mod models;
pub mod telemetry;

pub use error::{PostwrightError, Result};

//! Extracurricular activity signup service: an in-memory activity directory
//! behind a small JSON HTTP API.

pub mod config;
pub mod database;
pub mod error;
pub mod models;
pub mod services;
pub mod web;

use crate::config::ServerConfig;
use crate::database::{seed, ActivityDirectory};
use crate::error::ConfigError;

/// Builds the directory from `ACTIVITIES_FILE` when set, else the built-in roster.
pub fn load_directory(config: &ServerConfig) -> Result<ActivityDirectory, ConfigError> {
    let roster = match &config.activities_file {
        Some(path) => seed::load_roster_file(path)?,
        None => seed::default_roster(),
    };
    ActivityDirectory::from_seeds(roster)
}

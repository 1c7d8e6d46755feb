use std::{
    fs,
    path::{Path, PathBuf},
};

use client_core::GameRules;
use tracing::warn;

pub const DEFAULT_CONFIG_FILE: &str = "speedrabble.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub server_url: String,
    pub log_file: PathBuf,
    pub round_seconds: i64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server_url: "http://localhost:8080".into(),
            log_file: PathBuf::from("speedrabble.log"),
            round_seconds: GameRules::default().round_seconds,
        }
    }
}

impl Settings {
    pub fn rules(&self) -> GameRules {
        GameRules {
            round_seconds: self.round_seconds,
            ..GameRules::default()
        }
    }
}

/// Defaults, then the config file if present, then the environment.
pub fn load_settings(config_path: &Path) -> Settings {
    let mut settings = Settings::default();
    if let Ok(raw) = fs::read_to_string(config_path) {
        apply_file(&mut settings, &raw);
    }
    apply_env(&mut settings, |key| std::env::var(key).ok());
    settings
}

fn apply_file(settings: &mut Settings, raw: &str) {
    let table = match raw.parse::<toml::Table>() {
        Ok(table) => table,
        Err(error) => {
            warn!(%error, "config: ignoring unreadable settings file");
            return;
        }
    };
    if let Some(v) = table.get("server_url").and_then(|v| v.as_str()) {
        settings.server_url = v.to_string();
    }
    if let Some(v) = table.get("log_file").and_then(|v| v.as_str()) {
        settings.log_file = PathBuf::from(v);
    }
    if let Some(v) = table.get("round_seconds").and_then(|v| v.as_integer()) {
        settings.round_seconds = v;
    }
}

fn apply_env(settings: &mut Settings, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(v) = lookup("SPEEDRABBLE_SERVER_URL") {
        settings.server_url = v;
    }
    if let Some(v) = lookup("APP__SERVER_URL") {
        settings.server_url = v;
    }

    if let Some(v) = lookup("APP__LOG_FILE") {
        settings.log_file = PathBuf::from(v);
    }

    if let Some(v) = lookup("APP__ROUND_SECONDS") {
        if let Ok(parsed) = v.parse::<i64>() {
            settings.round_seconds = parsed;
        }
    }
}

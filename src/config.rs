//! # Service Configuration
//! Simulated-latency knobs and storage paths, loaded from an optional TOML
//! file with environment overrides on top. Env always wins over the file;
//! the file wins over the built-in defaults.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;

pub const DEFAULT_CONFIG_PATH: &str = "config/analyzer.toml";
pub const DEFAULT_CREDENTIALS_PATH: &str = "config/credentials.json";
pub const DEFAULT_DIRECTORY_PATH: &str = "channel_directory.json";

pub const ENV_CONFIG_PATH: &str = "ANALYZER_CONFIG_PATH";
pub const ENV_LOOKUP_LATENCY_MS: &str = "ANALYZER_LOOKUP_LATENCY_MS";
pub const ENV_COMPARE_LATENCY_MS: &str = "ANALYZER_COMPARE_LATENCY_MS";
pub const ENV_CREDENTIALS_PATH: &str = "ANALYZER_CREDENTIALS_PATH";
pub const ENV_DIRECTORY_PATH: &str = "ANALYZER_DIRECTORY_PATH";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Delay before a single-channel lookup resolves.
    pub lookup_latency_ms: u64,
    /// Delay before a comparison resolves (one sleep covers both channels).
    pub compare_latency_ms: u64,
    pub credentials_path: PathBuf,
    pub directory_path: PathBuf,
    pub history_capacity: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            lookup_latency_ms: 1000,
            compare_latency_ms: 1500,
            credentials_path: PathBuf::from(DEFAULT_CREDENTIALS_PATH),
            directory_path: PathBuf::from(DEFAULT_DIRECTORY_PATH),
            history_capacity: 2000,
        }
    }
}

impl AppConfig {
    /// Resolve configuration: defaults ← optional TOML file ← env overrides.
    pub fn load() -> Self {
        let mut cfg = Self::from_file_or_default();
        cfg.apply_env();
        cfg
    }

    /// Zero-latency configuration for tests.
    pub fn instant() -> Self {
        Self {
            lookup_latency_ms: 0,
            compare_latency_ms: 0,
            ..Self::default()
        }
    }

    pub fn lookup_latency(&self) -> Duration {
        Duration::from_millis(self.lookup_latency_ms)
    }

    pub fn compare_latency(&self) -> Duration {
        Duration::from_millis(self.compare_latency_ms)
    }

    fn from_file_or_default() -> Self {
        let path = std::env::var(ENV_CONFIG_PATH)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH));
        if !path.exists() {
            return Self::default();
        }
        match Self::from_file(&path) {
            Ok(cfg) => cfg,
            Err(e) => {
                tracing::warn!(error = ?e, path = %path.display(), "bad config file, using defaults");
                Self::default()
            }
        }
    }

    fn from_file(path: &PathBuf) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading config from {}", path.display()))?;
        toml::from_str(&raw).with_context(|| format!("parsing {}", path.display()))
    }

    fn apply_env(&mut self) {
        if let Some(ms) = env_u64(ENV_LOOKUP_LATENCY_MS) {
            self.lookup_latency_ms = ms;
        }
        if let Some(ms) = env_u64(ENV_COMPARE_LATENCY_MS) {
            self.compare_latency_ms = ms;
        }
        if let Ok(p) = std::env::var(ENV_CREDENTIALS_PATH) {
            self.credentials_path = PathBuf::from(p);
        }
        if let Ok(p) = std::env::var(ENV_DIRECTORY_PATH) {
            self.directory_path = PathBuf::from(p);
        }
    }
}

fn env_u64(name: &str) -> Option<u64> {
    std::env::var(name).ok().and_then(|s| s.trim().parse().ok())
}

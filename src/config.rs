/// Configuration module for the field schema server.
///
/// Handles loading, validating, and providing default configuration values.
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::fields::cache::MIN_TTL_SECS;
use crate::fields::suggest::DEFAULT_SIMILARITY_THRESHOLD;

// ── Default value functions ──────────────────────────────────────────

fn default_cache_ttl_seconds() -> u64 {
    300
}

fn default_cache_max_entries() -> usize {
    16
}

fn default_similarity_threshold() -> f64 {
    DEFAULT_SIMILARITY_THRESHOLD
}

fn default_true() -> bool {
    true
}

// ── Config structs ───────────────────────────────────────────────────

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub tracker: TrackerConfig,

    /// How long discovered custom fields stay fresh, in whole seconds.
    #[serde(default = "default_cache_ttl_seconds")]
    pub cache_ttl_seconds: u64,

    #[serde(default = "default_cache_max_entries")]
    pub cache_max_entries: usize,

    /// When false the server serves the static catalog only.
    #[serde(default = "default_true")]
    pub dynamic_discovery_enabled: bool,

    /// Minimum normalized similarity for a suggestion candidate, 0..1.
    #[serde(default = "default_similarity_threshold")]
    pub similarity_threshold: f64,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct TrackerConfig {
    /// Tracker base URL, e.g. "https://example.atlassian.net".
    #[serde(default)]
    pub base_url: String,

    #[serde(default)]
    pub email: String,

    /// API token. The FIELDSCOPE_API_TOKEN environment variable takes
    /// precedence so tokens can stay out of the config file.
    #[serde(default)]
    pub api_token: String,
}

// ── Default impls ────────────────────────────────────────────────────

impl Default for Config {
    fn default() -> Self {
        Self {
            tracker: TrackerConfig::default(),
            cache_ttl_seconds: default_cache_ttl_seconds(),
            cache_max_entries: default_cache_max_entries(),
            dynamic_discovery_enabled: default_true(),
            similarity_threshold: default_similarity_threshold(),
        }
    }
}

// ── Config implementation ────────────────────────────────────────────

impl Config {
    /// Load configuration from a JSON file.
    ///
    /// If `config_path` is empty, defaults to `"fieldscope.json"`.
    /// If the file does not exist, returns a default config and optionally
    /// generates a template file.
    pub fn load(config_path: &str) -> Result<Self> {
        let path = if config_path.is_empty() {
            "fieldscope.json"
        } else {
            config_path
        };

        if !Path::new(path).exists() {
            info!("{path} not found, using defaults");
            let mut cfg = Self::default();

            // Generate template only for the default path
            if path == "fieldscope.json" {
                match cfg.save(path) {
                    Ok(()) => info!("Generated config template: {path}"),
                    Err(e) => warn!("Failed to generate config template: {e}"),
                }
            }

            cfg.apply_env_overrides();
            return Ok(cfg);
        }

        let data = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config: {path}"))?;

        let mut cfg: Config = match serde_json::from_str(&data) {
            Ok(c) => c,
            Err(e) => {
                warn!("Invalid JSON in {path}: {e}");
                warn!("Using default configuration");
                return Ok(Self::default());
            }
        };

        info!("Loaded configuration from {path}");

        cfg.apply_env_overrides();
        Ok(cfg)
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(token) = std::env::var("FIELDSCOPE_API_TOKEN") {
            if !token.is_empty() {
                self.tracker.api_token = token;
            }
        }
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &str) -> Result<()> {
        let data = serde_json::to_string_pretty(self).context("failed to marshal config")?;
        std::fs::write(path, data).with_context(|| format!("failed to write config: {path}"))?;
        Ok(())
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        anyhow::ensure!(
            self.cache_ttl_seconds >= MIN_TTL_SECS,
            "cache_ttl_seconds must be at least {MIN_TTL_SECS}"
        );
        anyhow::ensure!(self.cache_max_entries > 0, "cache_max_entries must be positive");
        anyhow::ensure!(
            (0.0..=1.0).contains(&self.similarity_threshold),
            "similarity_threshold must be between 0 and 1"
        );
        if self.dynamic_discovery_enabled {
            anyhow::ensure!(
                !self.tracker.base_url.trim().is_empty(),
                "tracker.base_url is required when dynamic discovery is enabled"
            );
        }
        Ok(())
    }
}

// ── Tests ────────────────────────────────────────────────────────────

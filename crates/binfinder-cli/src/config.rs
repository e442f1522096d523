//! Configuration management for Binfinder CLI
//!
//! Stores API keys, the default address and search terms in
//! ~/.config/binfinder/config.toml. Environment variables override stored keys.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use binfinder::{SearchRequest, DEFAULT_RADIUS_METERS};
use binfinder_google::{GEMINI_API_KEY_ENV, MAPS_API_KEY_ENV};

const CONFIG_DIR: &str = "binfinder";
const CONFIG_FILE: &str = "config.toml";

/// CLI Configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maps_api_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gemini_api_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gemini_model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_address: Option<String>,
    #[serde(default = "default_radius")]
    pub radius_meters: u32,
    #[serde(default)]
    pub search_terms: Vec<SearchRequest>,
}

fn default_radius() -> u32 {
    DEFAULT_RADIUS_METERS
}

impl Default for Config {
    fn default() -> Self {
        Self {
            maps_api_key: None,
            gemini_api_key: None,
            gemini_model: None,
            default_address: None,
            radius_meters: default_radius(),
            search_terms: Vec::new(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join(CONFIG_DIR);
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE))
    }

    /// Load config from file, or create default
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;

        Self::parse(&content)
    }

    fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse config file")
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        let dir = Self::config_dir()?;
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create config directory {:?}", dir))?;

        let path = Self::config_path()?;
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(&path, content)
            .with_context(|| format!("Failed to write config to {:?}", path))?;

        Ok(())
    }

    /// Maps key: environment first, then config file
    pub fn maps_api_key(&self) -> Option<String> {
        key_from(std::env::var(MAPS_API_KEY_ENV).ok(), self.maps_api_key.as_ref())
    }

    /// Gemini key: environment first, then config file
    pub fn gemini_api_key(&self) -> Option<String> {
        key_from(std::env::var(GEMINI_API_KEY_ENV).ok(), self.gemini_api_key.as_ref())
    }

    /// Configured search terms, or the built-in defaults when none are set
    pub fn search_requests(&self) -> Vec<SearchRequest> {
        if self.search_terms.is_empty() {
            SearchRequest::defaults()
        } else {
            self.search_terms.clone()
        }
    }
}

fn key_from(env: Option<String>, stored: Option<&String>) -> Option<String> {
    let trimmed = |k: &str| Some(k.trim().to_string()).filter(|k| !k.is_empty());
    env.as_deref()
        .and_then(trimmed)
        .or_else(|| stored.map(String::as_str).and_then(trimmed))
}

use crate::core::market::{DEFAULT_SEED, Instrument, default_instruments};
use crate::core::profile::ProfileInput;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};
use tracing::debug;

pub const DEFAULT_TITLE: &str = "FLex - Financial Literacy Assistant";

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct MarketConfig {
    #[serde(default = "default_seed")]
    pub seed: u64,
    #[serde(default = "default_instruments")]
    pub instruments: Vec<Instrument>,
}

fn default_seed() -> u64 {
    DEFAULT_SEED
}

impl Default for MarketConfig {
    fn default() -> Self {
        MarketConfig {
            seed: DEFAULT_SEED,
            instruments: default_instruments(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct GlossaryConfig {
    /// YAML file replacing the built-in glossary
    pub path: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct AppConfig {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default)]
    pub market: MarketConfig,
    #[serde(default)]
    pub glossary: GlossaryConfig,
    /// Saved profile used by the `finances` page when no flags are given
    pub profile: Option<ProfileInput>,
}

fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            title: default_title(),
            market: MarketConfig::default(),
            glossary: GlossaryConfig::default(),
            profile: None,
        }
    }
}

impl AppConfig {
    /// Loads the default config file, falling back to built-in defaults
    /// when it has not been created yet.
    pub fn load() -> Result<Self> {
        debug!("Loading default config");
        let config_path = Self::default_config_path()?;
        if !config_path.exists() {
            debug!("No config at {}, using defaults", config_path.display());
            return Ok(Self::default());
        }
        Self::load_from_path(&config_path)
    }

    pub fn default_config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("org", "flex", "flex")
            .context("Could not determine project directories")?;
        Ok(proj_dirs.config_dir().join("config.yaml"))
    }

    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let config_str = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Self = serde_yaml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;
        debug!("Successfully loaded config");
        Ok(config)
    }

    pub fn load_optional(config_path: Option<&str>) -> Result<Self> {
        match config_path {
            Some(path) => Self::load_from_path(path),
            None => Self::load(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: AppConfig = serde_yaml::from_str("{}").expect("Failed to deserialize");
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.title, DEFAULT_TITLE);
        assert_eq!(config.market.seed, 42);
        assert_eq!(config.market.instruments.len(), 3);
        assert!(config.glossary.path.is_none());
        assert!(config.profile.is_none());
    }

    #[test]
    fn test_config_deserialization() {
        let yaml_str = r#"
title: "Campus FLex"
market:
  seed: 7
  instruments:
    - name: "Bonds (BND)"
      start_price: 72.5
      drift: 0.0001
      volatility: 0.003
glossary:
  path: "/tmp/glossary.yaml"
profile:
  name: "Maria"
  age: 21
  status: "Undergraduate"
  income: "$1001-2000"
  savings: "$101-500"
  debt: "Less than $1000"
  goals:
    - "Emergency Fund"
    - "Start Investing"
"#;

        let config: AppConfig = serde_yaml::from_str(yaml_str).expect("Failed to deserialize");
        assert_eq!(config.title, "Campus FLex");
        assert_eq!(config.market.seed, 7);
        assert_eq!(config.market.instruments.len(), 1);
        assert_eq!(config.market.instruments[0].name, "Bonds (BND)");
        assert_eq!(config.market.instruments[0].start_price, 72.5);
        assert_eq!(config.glossary.path.as_deref(), Some("/tmp/glossary.yaml"));

        let profile = config.profile.expect("Expected a profile");
        assert_eq!(profile.name, "Maria");
        assert_eq!(profile.age, 21);
        assert_eq!(profile.goals.len(), 2);
        assert!(profile.validate().is_ok());
    }

    #[test]
    fn test_partial_profile_gets_form_defaults() {
        let yaml_str = r#"
profile:
  name: "Sam"
  debt: "$25000+"
"#;
        let config: AppConfig = serde_yaml::from_str(yaml_str).expect("Failed to deserialize");
        let profile = config.profile.unwrap();
        assert_eq!(profile.age, 20);
        assert_eq!(profile.income, "$0-500");
        assert_eq!(profile.goals, vec!["Emergency Fund".to_string()]);
    }

    #[test]
    fn test_market_seed_only_keeps_default_instruments() {
        let config: AppConfig =
            serde_yaml::from_str("market:\n  seed: 3\n").expect("Failed to deserialize");
        assert_eq!(config.market.seed, 3);
        assert_eq!(config.market.instruments, default_instruments());
    }
}

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result};
use glob::Pattern;
use serde::Deserialize;

use crate::core::scan::is_glob_pattern;

pub const CONFIG_FILE_NAME: &str = ".locsyncrc.json";

/// Values from `.locsyncrc.json`. Every field may be overridden on the
/// command line.
#[derive(Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default)]
    pub sources: Vec<String>,
    #[serde(default, alias = "localesRoot")]
    pub locales_dir: Option<String>,
    /// Prefix for key-based translations. Absent disables the feature.
    #[serde(default)]
    pub key_prefix: Option<String>,
    #[serde(default = "default_locale")]
    pub default_locale: String,
    #[serde(default)]
    pub keep_unused: bool,
    #[serde(default)]
    pub fill: Option<String>,
    #[serde(default)]
    pub targets: Vec<String>,
}

fn default_locale() -> String {
    "en_US".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sources: Vec::new(),
            locales_dir: None,
            key_prefix: None,
            default_locale: default_locale(),
            keep_unused: false,
            fill: None,
            targets: Vec::new(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if any glob pattern in `sources` is invalid or the
    /// default locale is empty.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.sources {
            if is_glob_pattern(pattern) {
                Pattern::new(pattern)
                    .with_context(|| format!("Invalid glob pattern in 'sources': \"{}\"", pattern))?;
            }
        }

        if self.default_locale.trim().is_empty() {
            anyhow::bail!("'defaultLocale' must not be empty");
        }

        Ok(())
    }
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// The file the config came from, `None` when using defaults.
    pub path: Option<PathBuf>,
}

pub fn load_config_file(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    let config: Config = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
    config.validate()?;
    Ok(config)
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => Ok(ConfigLoadResult {
            config: load_config_file(&path)?,
            path: Some(path),
        }),
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            path: None,
        }),
    }
}

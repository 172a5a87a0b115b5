use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use serde::{Deserialize, Serialize};

use crate::core::MISSING_TRANSLATION_PLACEHOLDER;

pub const CONFIG_FILE_NAME: &str = ".langtoolrc.json";

/// Language used as template when neither the CLI nor a config file names one.
pub const DEFAULT_TEMPLATE_LOCALE: &str = "en_US";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_template_locale")]
    pub template_locale: String,
    #[serde(default = "default_placeholder")]
    pub placeholder: String,
}

fn default_template_locale() -> String {
    DEFAULT_TEMPLATE_LOCALE.to_string()
}

fn default_placeholder() -> String {
    MISSING_TRANSLATION_PLACEHOLDER.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            template_locale: default_template_locale(),
            placeholder: default_placeholder(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// The template locale becomes part of a file name, so it must be a
    /// plain, non-empty name.
    pub fn validate(&self) -> Result<()> {
        validate_locale(&self.template_locale)
    }
}

/// Reject locale codes that cannot be used as a file stem.
pub fn validate_locale(locale: &str) -> Result<()> {
    if locale.trim().is_empty() {
        bail!("Template locale must not be empty");
    }
    if locale.contains(['/', '\\']) {
        bail!("Template locale must not contain path separators: \"{}\"", locale);
    }
    Ok(())
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
    /// Path of the config file, or `None` when defaults are used.
    pub path: Option<PathBuf>,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {}", path.display()))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                path: Some(path),
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            path: None,
        }),
    }
}

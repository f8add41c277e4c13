//! paramdoc.toml loading

use anyhow::{Context, Result};
use paramdoc_core::DocSettings;
use std::path::Path;

/// File picked up from the working directory when `--config` is not given
pub const DEFAULT_CONFIG_FILE: &str = "paramdoc.toml";

/// Load settings from a file
pub fn from_file(path: impl AsRef<Path>) -> Result<DocSettings> {
    let content = std::fs::read_to_string(path.as_ref())
        .with_context(|| format!("Failed to read config: {:?}", path.as_ref()))?;

    from_str(&content)
}

/// Parse and validate settings from TOML text
pub fn from_str(content: &str) -> Result<DocSettings> {
    let settings: DocSettings = toml::from_str(content).context("Failed to parse config")?;
    settings.validate().context("Invalid config")?;
    Ok(settings)
}

/// Settings from `--config`, else `./paramdoc.toml` if present, else defaults
pub fn load(config: Option<&Path>) -> Result<DocSettings> {
    match config {
        Some(path) => from_file(path),
        None if Path::new(DEFAULT_CONFIG_FILE).is_file() => from_file(DEFAULT_CONFIG_FILE),
        None => Ok(DocSettings::default()),
    }
}

#[cfg(test)]
#[path = "settings/settings_tests.rs"]
mod settings_tests;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration (saved to config/settings.toml)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub chooser: ChooserConfig,
    #[serde(default)]
    pub save: SaveConfig,
}

/// Display strings and switches for the file chooser
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChooserConfig {
    /// Heading, e.g. "Open Dump File"
    pub title: Option<String>,
    /// Text shown above the file list, e.g. "Please choose a file:"
    pub chooser_text: String,
    /// Label of the choose action, e.g. "Open File"
    pub button_text: String,
    /// Marker appended to the chooser text when there is nothing to choose
    pub empty_text: String,
    /// Allow deleting files from the chooser
    pub enable_delete: bool,
    pub default_directory: Option<PathBuf>,
}

impl Default for ChooserConfig {
    fn default() -> Self {
        Self {
            title: None,
            chooser_text: "Please choose a file:".to_string(),
            button_text: "Open File".to_string(),
            empty_text: "No files in this directory".to_string(),
            enable_delete: false,
            default_directory: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SaveConfig {
    /// Allowed extensions, first one is appended to names without one
    pub extensions: Vec<String>,
    pub default_directory: Option<PathBuf>,
    /// Refuse to save into or delete from a read-only directory
    pub require_writable: bool,
}

impl Default for SaveConfig {
    fn default() -> Self {
        Self {
            extensions: vec!["mfd".to_string(), "dump".to_string()],
            default_directory: None,
            require_writable: true,
        }
    }
}

impl Config {
    /// Load configuration from the config directory, falling back to defaults
    /// when settings.toml does not exist yet
    pub fn load() -> anyhow::Result<Self> {
        let config_path = crate::util::paths::get_app_config_path()?;
        let mut config = if config_path.exists() {
            Self::load_from(&config_path)?
        } else {
            tracing::info!("No settings at {:?}, using defaults", config_path);
            Self::default()
        };

        // Relative directories are relative to the config directory
        for dir in [
            &mut config.chooser.default_directory,
            &mut config.save.default_directory,
        ]
        .into_iter()
        .flatten()
        {
            *dir = crate::util::paths::resolve_relative_to_config(dir);
        }

        Ok(config)
    }

    /// Parse and validate a settings file
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content =
            std::fs::read_to_string(path).context(format!("Failed to read {:?}", path))?;
        let config: Config =
            toml::from_str(&content).context(format!("Failed to parse {:?}", path))?;

        if let Err(errors) = crate::app::settings::validate_config(&config) {
            return Err(anyhow::anyhow!(
                "Invalid configuration: {}",
                errors
                    .iter()
                    .map(|e| e.to_string())
                    .collect::<Vec<_>>()
                    .join(", ")
            ));
        }
        Ok(config)
    }

    /// Save configuration to settings.toml
    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = crate::util::paths::get_app_config_path()?;
        self.save_to(&config_path)
    }

    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Err(errors) = crate::app::settings::validate_config(self) {
            return Err(anyhow::anyhow!(
                "Cannot save invalid config: {}",
                errors
                    .iter()
                    .map(|e| e.to_string())
                    .collect::<Vec<_>>()
                    .join(", ")
            ));
        }

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .context(format!("Failed to create {:?}", parent))?;
        }
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(path, content).context(format!("Failed to write {:?}", path))?;
        tracing::info!("Saved config to {:?}", path);
        Ok(())
    }
}

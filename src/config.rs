//! Settings persistence
//!
//! Stores user preferences in `~/.config/folio/config.yaml`

use serde::{Deserialize, Serialize};

/// Settings that persist across sessions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FolioConfig {
    /// Selected theme id (e.g., "folio-dark", "paper")
    #[serde(default = "default_theme")]
    pub theme: String,
    /// Whether the explorer sidebar is shown
    #[serde(default = "default_true")]
    pub explorer_visible: bool,
    /// Whether the terminal panel is open
    #[serde(default)]
    pub terminal_open: bool,
    /// Document that was active when the app last closed
    #[serde(default)]
    pub last_doc: Option<String>,
}

fn default_theme() -> String {
    "folio-dark".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for FolioConfig {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            explorer_visible: true,
            terminal_open: false,
            last_doc: None,
        }
    }
}

impl FolioConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(&path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save config to disk
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> Result<(), String> {
        let path = crate::config_paths::config_file()
            .ok_or_else(|| "No config directory available".to_string())?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(&path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Ensure the config directory structure exists
    pub fn ensure_config_dirs() {
        match crate::config_paths::ensure_themes_dir() {
            Ok(themes) => {
                tracing::info!("Config directories ready (themes dir: {})", themes.display());
            }
            Err(e) => {
                tracing::warn!("Failed to ensure config directories: {}", e);
            }
        }
    }
}

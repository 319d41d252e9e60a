use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::column::TickerPlanner;
use crate::sequence::{CharacterList, Preset};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub ticker: TickerConfig,
    /// User-defined character lists, keyed by the name `ticker.character_lists` refers to
    #[serde(default)]
    pub lists: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TickerConfig {
    /// Character lists in lookup order: preset names ("number", "alphabet")
    /// or keys of the `[lists]` table
    #[serde(default = "default_character_lists")]
    pub character_lists: Vec<String>,
}

impl Default for TickerConfig {
    fn default() -> Self {
        Self {
            character_lists: default_character_lists(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_character_lists() -> Vec<String> {
    vec![Preset::Number.name().to_string()]
}

impl AppConfig {
    /// Load configuration from file or return defaults
    pub fn load() -> crate::Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            tracing::debug!(path = %config_path.display(), "No config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Load configuration from an explicit path
    pub fn load_from(path: &Path) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::parse(&content)?;
        tracing::debug!(
            path = %path.display(),
            lists = config.ticker.character_lists.len(),
            "Loaded config"
        );
        Ok(config)
    }

    pub fn parse(content: &str) -> crate::Result<Self> {
        toml::from_str(content).map_err(|e| crate::Error::Config(e.to_string()))
    }

    /// Save configuration to file
    pub fn save(&self) -> crate::Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> crate::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| crate::Error::Config(e.to_string()))?;
        std::fs::write(path, content)?;

        Ok(())
    }

    /// Get the configuration file path
    /// Always uses ~/.config/ticker/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("ticker")
            .join("config.toml")
    }

    /// Resolve a list name against `[lists]` first, then the presets
    pub fn character_list(&self, name: &str) -> crate::Result<CharacterList> {
        if let Some(characters) = self.lists.get(name) {
            return CharacterList::new(characters).map_err(|e| {
                crate::Error::Config(format!("list '{}': {}", name, e))
            });
        }

        Preset::from_name(name)
            .map(|preset| preset.character_list())
            .ok_or_else(|| crate::Error::UnknownCharacterList(name.to_string()))
    }

    /// Build every list named in `ticker.character_lists`, in order
    pub fn character_lists(&self) -> crate::Result<Vec<CharacterList>> {
        if self.ticker.character_lists.is_empty() {
            return Err(crate::Error::Config(
                "ticker.character_lists must name at least one list".to_string(),
            ));
        }

        self.ticker
            .character_lists
            .iter()
            .map(|name| self.character_list(name))
            .collect()
    }

    pub fn planner(&self) -> crate::Result<TickerPlanner> {
        Ok(TickerPlanner::new(self.character_lists()?))
    }
}

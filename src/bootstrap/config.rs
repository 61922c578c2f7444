use crate::core::errors::RegistryError;
use crate::core::registry::{SettingDefinition, SettingsRegistry};
use crate::core::types::LanguageCode;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    pub database: DatabaseConfig,

    #[serde(default)]
    pub settings: Vec<SettingConfig>,
}

impl Config {
    pub fn build_registry(&self) -> Result<SettingsRegistry, RegistryError> {
        let definitions = self
            .settings
            .iter()
            .map(|s| SettingDefinition::new(s.name.clone(), s.values.clone(), s.default.as_deref()))
            .collect::<Result<Vec<_>, _>>()?;
        SettingsRegistry::new(definitions)
    }
}

#[derive(Deserialize, Clone)]
pub struct GeneralConfig {
    #[serde(default = "default_lang")]
    pub default_lang: LanguageCode,
    #[serde(default = "default_log_level")]
    pub log_level: LogLevelConfig,
    #[serde(default = "default_command_prefix")]
    pub command_prefix: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_lang: default_lang(),
            log_level: default_log_level(),
            command_prefix: default_command_prefix(),
        }
    }
}

const fn default_lang() -> LanguageCode {
    LanguageCode::En
}

const fn default_log_level() -> LogLevelConfig {
    LogLevelConfig::Info
}

fn default_command_prefix() -> String {
    "!".to_string()
}

#[derive(Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevelConfig {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevelConfig {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

#[derive(Deserialize, Clone)]
pub struct DatabaseConfig {
    pub db_file: String,
}

impl DatabaseConfig {
    /// Relative paths are taken relative to the directory of the config file.
    pub fn resolve_path(&self, config_dir: &Path) -> PathBuf {
        let path = Path::new(&self.db_file);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            config_dir.join(path)
        }
    }
}

/// One `[[settings]]` entry.
#[derive(Deserialize, Clone, Debug)]
pub struct SettingConfig {
    pub name: String,
    pub values: Vec<String>,
    pub default: Option<String>,
}

#[cfg(test)]
#[path = "../../tests/unit/bootstrap_config.rs"]
mod tests;

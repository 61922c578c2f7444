use thiserror::Error;

/// Failures of a get/set against the preference store.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("`{name}` is not a valid setting")]
    UnknownSetting { name: String },
    #[error("`{value}` is not a valid value for setting `{setting}`")]
    InvalidValue {
        setting: String,
        value: String,
        valid_values: Vec<String>,
    },
    #[error("storage error: {0}")]
    Storage(#[from] sqlx::Error),
}

impl SettingsError {
    pub fn unknown(name: &str) -> Self {
        Self::UnknownSetting {
            name: name.to_string(),
        }
    }
}

/// Rejections raised while building the registry from configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("setting name must not be empty")]
    EmptyName,
    #[error("setting `{setting}` has no values")]
    EmptyValues { setting: String },
    #[error("setting `{setting}` is declared more than once")]
    DuplicateSetting { setting: String },
    #[error("setting `{setting}` lists `{value}` more than once")]
    DuplicateValue { setting: String, value: String },
    #[error("setting `{setting}` may not list the reserved value `auto`")]
    ReservedValue { setting: String },
    #[error("default `{value}` of setting `{setting}` is not one of its values")]
    UnknownDefault { setting: String, value: String },
}

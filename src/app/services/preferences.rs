use crate::core::errors::SettingsError;
use crate::core::registry::SettingsRegistry;
use crate::core::types::{AUTO, SettingView};
use crate::infra::db::Database;
use std::sync::Arc;

/// Per-user overrides layered over the registry defaults.
///
/// Stored values are returned as-is on read, even if the registry has since
/// dropped them from the setting's valid values.
#[derive(Clone)]
pub struct PreferenceStore {
    db: Database,
    registry: Arc<SettingsRegistry>,
}

impl PreferenceStore {
    pub const fn new(db: Database, registry: Arc<SettingsRegistry>) -> Self {
        Self { db, registry }
    }

    pub async fn get(
        &self,
        user_id: i64,
        name: &str,
        allow_auto: bool,
    ) -> Result<String, SettingsError> {
        if !self.registry.is_valid_setting(name) {
            return Err(SettingsError::unknown(name));
        }
        match self.db.get_user_setting(user_id, name).await? {
            Some(value) => Ok(value),
            None if allow_auto => Ok(AUTO.to_string()),
            None => Ok(self.registry.default_value(name)?.to_string()),
        }
    }

    pub async fn set(&self, user_id: i64, name: &str, value: &str) -> Result<(), SettingsError> {
        let valid_values = self.registry.valid_values(name)?;

        if value == AUTO {
            let removed = self.db.delete_user_setting(user_id, name).await?;
            tracing::debug!(user_id, setting = name, removed, "Cleared setting override");
            return Ok(());
        }

        if !valid_values.iter().any(|v| v == value) {
            return Err(SettingsError::InvalidValue {
                setting: name.to_string(),
                value: value.to_string(),
                valid_values: valid_values.to_vec(),
            });
        }

        self.db.upsert_user_setting(user_id, name, value).await?;
        tracing::debug!(user_id, setting = name, value, "Stored setting override");
        Ok(())
    }

    /// Every registered setting for `user_id`, in declaration order.
    pub async fn display_all(&self, user_id: i64) -> Result<Vec<SettingView>, SettingsError> {
        let mut stored = self.db.get_user_settings(user_id).await?;
        Ok(self
            .registry
            .iter()
            .map(|def| SettingView {
                name: def.name().to_string(),
                value: stored
                    .remove(def.name())
                    .unwrap_or_else(|| AUTO.to_string()),
                default: def.default_value().to_string(),
            })
            .collect())
    }

    pub async fn get_one(&self, user_id: i64, name: &str) -> Result<SettingView, SettingsError> {
        let value = self.get(user_id, name, true).await?;
        self.view(name, value)
    }

    pub async fn set_one(
        &self,
        user_id: i64,
        name: &str,
        value: &str,
    ) -> Result<SettingView, SettingsError> {
        self.set(user_id, name, value).await?;
        self.view(name, value.to_string())
    }

    fn view(&self, name: &str, value: String) -> Result<SettingView, SettingsError> {
        Ok(SettingView {
            name: name.to_string(),
            value,
            default: self.registry.default_value(name)?.to_string(),
        })
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/app_preferences.rs"]
mod tests;

//! Process-wide table of known settings and their valid values.
//!
//! Built once from configuration and shared behind an `Arc`; never mutated
//! afterwards.

use crate::core::errors::{RegistryError, SettingsError};
use crate::core::types::AUTO;
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingDefinition {
    name: String,
    values: Vec<String>,
}

impl SettingDefinition {
    /// Validates one setting. A `default` override is moved to the front of
    /// the value list so the first value is always the default.
    pub fn new(
        name: impl Into<String>,
        values: Vec<String>,
        default: Option<&str>,
    ) -> Result<Self, RegistryError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(RegistryError::EmptyName);
        }
        if values.is_empty() {
            return Err(RegistryError::EmptyValues { setting: name });
        }

        let mut seen = HashSet::with_capacity(values.len());
        for value in &values {
            if value == AUTO {
                return Err(RegistryError::ReservedValue { setting: name });
            }
            if !seen.insert(value.as_str()) {
                return Err(RegistryError::DuplicateValue {
                    setting: name,
                    value: value.clone(),
                });
            }
        }

        let mut values = values;
        if let Some(default) = default {
            let Some(pos) = values.iter().position(|v| v == default) else {
                return Err(RegistryError::UnknownDefault {
                    setting: name,
                    value: default.to_string(),
                });
            };
            let value = values.remove(pos);
            values.insert(0, value);
        }

        Ok(Self { name, values })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn default_value(&self) -> &str {
        // non-empty by construction
        &self.values[0]
    }
}

#[derive(Debug, Clone, Default)]
pub struct SettingsRegistry {
    definitions: Vec<SettingDefinition>,
}

impl SettingsRegistry {
    pub fn new(definitions: Vec<SettingDefinition>) -> Result<Self, RegistryError> {
        let mut names = HashSet::with_capacity(definitions.len());
        for def in &definitions {
            if !names.insert(def.name()) {
                return Err(RegistryError::DuplicateSetting {
                    setting: def.name().to_string(),
                });
            }
        }
        Ok(Self { definitions })
    }

    pub fn definition(&self, name: &str) -> Result<&SettingDefinition, SettingsError> {
        self.definitions
            .iter()
            .find(|d| d.name == name)
            .ok_or_else(|| SettingsError::unknown(name))
    }

    pub fn is_valid_setting(&self, name: &str) -> bool {
        self.definitions.iter().any(|d| d.name == name)
    }

    pub fn valid_values(&self, name: &str) -> Result<&[String], SettingsError> {
        self.definition(name).map(SettingDefinition::values)
    }

    pub fn default_value(&self, name: &str) -> Result<&str, SettingsError> {
        self.definition(name).map(SettingDefinition::default_value)
    }

    /// Settings in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &SettingDefinition> {
        self.definitions.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.definitions.iter().map(SettingDefinition::name)
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/core_registry.rs"]
mod tests;

use serde::Deserialize;
use std::fmt;

/// Sentinel value meaning "no override, use the deployment default".
pub const AUTO: &str = "auto";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageCode {
    En,
    Ru,
}

impl LanguageCode {
    pub fn as_str(self) -> &'static str {
        match self {
            LanguageCode::En => "en",
            LanguageCode::Ru => "ru",
        }
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A setting as seen by one user: the stored value (or `auto`) and the
/// default `auto` currently resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingView {
    pub name: String,
    pub value: String,
    pub default: String,
}

impl SettingView {
    pub fn is_auto(&self) -> bool {
        self.value == AUTO
    }
}

#[cfg(test)]
#[path = "../../tests/unit/core_types.rs"]
mod tests;

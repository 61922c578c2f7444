use crate::app::services::preferences::PreferenceStore;
use crate::args;
use crate::core::errors::SettingsError;
use crate::core::types::{LanguageCode, SettingView};
use crate::infra::locales;

const COMMAND_NAMES: [&str; 2] = ["settings", "s"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsCommand {
    List,
    Get { setting: String },
    Set { setting: String, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Operation {
    Get,
    Set,
}

/// Parses `<prefix>settings [setting] [value]`. Returns `None` for anything
/// that is not the settings command, or when a quoted argument is unterminated.
pub fn parse_command(prefix: &str, text: &str) -> Option<SettingsCommand> {
    let rest = text.trim().strip_prefix(prefix)?;
    let mut tokens = split_arguments(rest)?.into_iter();
    let name = tokens.next()?;
    if !COMMAND_NAMES.iter().any(|c| *c == name) {
        return None;
    }

    Some(match (tokens.next(), tokens.next()) {
        (None, _) => SettingsCommand::List,
        (Some(setting), None) => SettingsCommand::Get { setting },
        (Some(setting), Some(value)) => SettingsCommand::Set { setting, value },
    })
}

/// Whitespace-separated words; `"..."` groups words into one argument and
/// `\"` inside quotes is a literal quote.
fn split_arguments(input: &str) -> Option<Vec<String>> {
    let mut args = Vec::new();
    let mut chars = input.chars().peekable();

    loop {
        while chars.next_if(|c| c.is_whitespace()).is_some() {}
        let Some(first) = chars.next() else {
            return Some(args);
        };

        let mut arg = String::new();
        if first == '"' {
            loop {
                match chars.next()? {
                    '"' => break,
                    '\\' if chars.peek() == Some(&'"') => {
                        arg.push('"');
                        chars.next();
                    }
                    c => arg.push(c),
                }
            }
        } else {
            arg.push(first);
            while let Some(c) = chars.next_if(|c| !c.is_whitespace()) {
                arg.push(c);
            }
        }
        args.push(arg);
    }
}

pub async fn handle_command(
    store: &PreferenceStore,
    lang: LanguageCode,
    user_id: i64,
    command: SettingsCommand,
) -> String {
    match command {
        SettingsCommand::List => match store.display_all(user_id).await {
            Ok(views) => render_list(lang, &views),
            Err(e) => render_error(lang, user_id, Operation::Get, &e),
        },
        SettingsCommand::Get { setting } => match store.get_one(user_id, &setting).await {
            Ok(view) => render_current(lang, user_id, &view),
            Err(e) => render_error(lang, user_id, Operation::Get, &e),
        },
        SettingsCommand::Set { setting, value } => {
            match store.set_one(user_id, &setting, &value).await {
                Ok(view) => {
                    tracing::info!(user_id, setting = %view.name, value = %view.value, "Setting updated");
                    render_updated(lang, user_id, &view)
                }
                Err(e) => render_error(lang, user_id, Operation::Set, &e),
            }
        }
    }
}

pub fn render_list(lang: LanguageCode, views: &[SettingView]) -> String {
    let title = locales::get_text(lang, "settings-list-title", None);
    let mut out = format!("# {title}\n```\n");
    for view in views {
        out.push_str(&view.name);
        out.push_str(": ");
        out.push_str(&view.value);
        out.push('\n');
    }
    out.push_str("```");
    out
}

pub fn render_current(lang: LanguageCode, user_id: i64, view: &SettingView) -> String {
    let user = user_id.to_string();
    if view.is_auto() {
        locales::get_text(
            lang,
            "settings-current-auto",
            args!(user = user, setting = view.name.as_str(), default = view.default.as_str())
                .as_ref(),
        )
    } else {
        locales::get_text(
            lang,
            "settings-current",
            args!(user = user, setting = view.name.as_str(), value = view.value.as_str()).as_ref(),
        )
    }
}

pub fn render_updated(lang: LanguageCode, user_id: i64, view: &SettingView) -> String {
    let user = user_id.to_string();
    if view.is_auto() {
        locales::get_text(
            lang,
            "settings-updated-auto",
            args!(user = user, setting = view.name.as_str(), default = view.default.as_str())
                .as_ref(),
        )
    } else {
        locales::get_text(
            lang,
            "settings-updated",
            args!(user = user, setting = view.name.as_str(), value = view.value.as_str()).as_ref(),
        )
    }
}

fn render_error(lang: LanguageCode, user_id: i64, op: Operation, err: &SettingsError) -> String {
    let user = user_id.to_string();
    match err {
        SettingsError::UnknownSetting { name } => locales::get_text(
            lang,
            "settings-unknown",
            args!(user = user, setting = name.as_str()).as_ref(),
        ),
        SettingsError::InvalidValue {
            setting,
            value,
            valid_values,
        } => locales::get_text(
            lang,
            "settings-invalid-value",
            args!(
                user = user,
                setting = setting.as_str(),
                value = value.as_str(),
                values = format_values(valid_values)
            )
            .as_ref(),
        ),
        SettingsError::Storage(e) => match op {
            Operation::Get => {
                tracing::error!(user_id, error = %e, "Failed to get user preferences");
                locales::get_text(lang, "settings-get-failed", None)
            }
            Operation::Set => {
                tracing::error!(user_id, error = %e, "Failed to set user preferences");
                locales::get_text(lang, "settings-set-failed", None)
            }
        },
    }
}

fn format_values(values: &[String]) -> String {
    values
        .iter()
        .map(|v| format!("`{v}`"))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
#[path = "../../tests/unit/adapters_commands.rs"]
mod tests;

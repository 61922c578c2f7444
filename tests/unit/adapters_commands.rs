use super::*;
use crate::core::registry::{SettingDefinition, SettingsRegistry};
use crate::infra::db::Database;
use std::sync::Arc;

async fn setup_store() -> (PreferenceStore, Database, std::path::PathBuf) {
    let mut path = std::env::temp_dir();
    path.push(format!("settings_bot_commands_{}.db", uuid::Uuid::now_v7()));
    let db = Database::new(path.to_str().unwrap()).await.unwrap();
    let registry = SettingsRegistry::new(vec![
        SettingDefinition::new(
            "volume",
            vec!["medium".into(), "low".into(), "high".into()],
            None,
        )
        .unwrap(),
    ])
    .unwrap();
    let store = PreferenceStore::new(db.clone(), Arc::new(registry));
    (store, db, path)
}

fn view(value: &str) -> SettingView {
    SettingView {
        name: "volume".into(),
        value: value.into(),
        default: "medium".into(),
    }
}

#[test]
fn parse_recognises_command_and_alias() {
    assert_eq!(parse_command("!", "!settings"), Some(SettingsCommand::List));
    assert_eq!(parse_command("!", "  !s  "), Some(SettingsCommand::List));
    assert_eq!(
        parse_command("!", "!s volume"),
        Some(SettingsCommand::Get {
            setting: "volume".into()
        })
    );
    assert_eq!(
        parse_command("!", "!settings volume high extra"),
        Some(SettingsCommand::Set {
            setting: "volume".into(),
            value: "high".into()
        })
    );
}

#[test]
fn parse_ignores_other_messages() {
    assert_eq!(parse_command("!", "settings"), None);
    assert_eq!(parse_command("!", "!help"), None);
    assert_eq!(parse_command("!", "!settingsvolume"), None);
    assert_eq!(parse_command("!", "!"), None);
    assert_eq!(parse_command("?", "!s"), None);
    assert_eq!(parse_command("bot ", "bot s"), Some(SettingsCommand::List));
}

#[test]
fn parse_groups_quoted_arguments() {
    assert_eq!(
        parse_command("!", r#"!s greeting "good morning""#),
        Some(SettingsCommand::Set {
            setting: "greeting".into(),
            value: "good morning".into()
        })
    );
    assert_eq!(
        parse_command("!", r#"!s "my greeting""#),
        Some(SettingsCommand::Get {
            setting: "my greeting".into()
        })
    );
    assert_eq!(
        parse_command("!", r#"!s quote "say \"hi\"""#),
        Some(SettingsCommand::Set {
            setting: "quote".into(),
            value: "say \"hi\"".into()
        })
    );
}

#[test]
fn parse_rejects_unterminated_quote() {
    assert_eq!(parse_command("!", r#"!s greeting "good morning"#), None);
}

#[tokio::test]
async fn quoted_value_with_spaces_can_be_set() {
    let mut path = std::env::temp_dir();
    path.push(format!("settings_bot_commands_{}.db", uuid::Uuid::now_v7()));
    let db = Database::new(path.to_str().unwrap()).await.unwrap();
    let registry = SettingsRegistry::new(vec![
        SettingDefinition::new("greeting", vec!["hi".into(), "good morning".into()], None)
            .unwrap(),
    ])
    .unwrap();
    let store = PreferenceStore::new(db.clone(), Arc::new(registry));

    let command = parse_command("!", r#"!s greeting "good morning""#).unwrap();
    let reply = handle_command(&store, LanguageCode::En, 7, command).await;
    assert_eq!(reply, "<@7> Setting `greeting` has been set to `good morning`.");
    assert_eq!(
        store.get(7, "greeting", false).await.unwrap(),
        "good morning"
    );

    db.close().await;
    let _ = std::fs::remove_file(path);
}

#[test]
fn render_list_uses_code_block() {
    let text = render_list(LanguageCode::En, &[view("auto"), view("high")]);
    assert_eq!(
        text,
        "# Your settings:\n```\nvolume: auto\nvolume: high\n```"
    );
}

#[test]
fn render_current_mentions_default_for_auto() {
    let text = render_current(LanguageCode::En, 7, &view("auto"));
    assert!(text.starts_with("<@7>"));
    assert!(text.contains("`auto`"));
    assert!(text.contains("`medium`"));

    let text = render_current(LanguageCode::En, 7, &view("high"));
    assert_eq!(text, "<@7> Setting `volume` is currently `high`.");
}

#[test]
fn render_updated_mentions_default_for_auto() {
    let text = render_updated(LanguageCode::En, 7, &view("auto"));
    assert!(text.contains("has been set to `auto`"));
    assert!(text.contains("`medium`"));

    let text = render_updated(LanguageCode::En, 7, &view("low"));
    assert_eq!(text, "<@7> Setting `volume` has been set to `low`.");
}

#[test]
fn large_user_ids_are_not_rounded() {
    let id = 123_456_789_012_345_678_i64;
    let text = render_current(LanguageCode::En, id, &view("high"));
    assert!(text.starts_with("<@123456789012345678>"));
}

#[tokio::test]
async fn handle_set_and_get() {
    let (store, db, path) = setup_store().await;
    let reply = handle_command(
        &store,
        LanguageCode::En,
        7,
        SettingsCommand::Set {
            setting: "volume".into(),
            value: "high".into(),
        },
    )
    .await;
    assert_eq!(reply, "<@7> Setting `volume` has been set to `high`.");

    let reply = handle_command(
        &store,
        LanguageCode::En,
        7,
        SettingsCommand::Get {
            setting: "volume".into(),
        },
    )
    .await;
    assert_eq!(reply, "<@7> Setting `volume` is currently `high`.");

    let reply = handle_command(&store, LanguageCode::En, 7, SettingsCommand::List).await;
    assert!(reply.contains("volume: high"));

    db.close().await;
    let _ = std::fs::remove_file(path);
}

#[tokio::test]
async fn handle_reports_domain_errors() {
    let (store, db, path) = setup_store().await;
    let reply = handle_command(
        &store,
        LanguageCode::En,
        7,
        SettingsCommand::Set {
            setting: "volume".into(),
            value: "loud".into(),
        },
    )
    .await;
    assert_eq!(
        reply,
        "<@7> `loud` is not a valid value for setting `volume`! Valid values: `medium`, `low`, `high`"
    );

    let reply = handle_command(
        &store,
        LanguageCode::En,
        7,
        SettingsCommand::Get {
            setting: "colour".into(),
        },
    )
    .await;
    assert_eq!(reply, "<@7> `colour` is not a valid setting!");

    db.close().await;
    let _ = std::fs::remove_file(path);
}

#[tokio::test]
async fn handle_storage_failure_gives_generic_reply() {
    let (store, db, path) = setup_store().await;
    db.close().await;

    let reply = handle_command(&store, LanguageCode::En, 7, SettingsCommand::List).await;
    assert_eq!(reply, "Failed to get user preferences >:3");

    let reply = handle_command(
        &store,
        LanguageCode::En,
        7,
        SettingsCommand::Set {
            setting: "volume".into(),
            value: "auto".into(),
        },
    )
    .await;
    assert_eq!(reply, "Failed to set user preferences >:3");

    let _ = std::fs::remove_file(path);
}

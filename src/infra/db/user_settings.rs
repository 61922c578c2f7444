use std::collections::HashMap;

use super::Database;

impl Database {
    pub async fn get_user_setting(
        &self,
        user_id: i64,
        setting: &str,
    ) -> Result<Option<String>, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT value FROM user_settings WHERE user_id = ? AND setting = ? LIMIT 1",
        )
        .bind(user_id)
        .bind(setting)
        .fetch_optional(&self.pool)
        .await
    }

    /// All overrides stored for one user, keyed by setting name.
    pub async fn get_user_settings(
        &self,
        user_id: i64,
    ) -> Result<HashMap<String, String>, sqlx::Error> {
        let rows: Vec<(String, String)> =
            sqlx::query_as("SELECT setting, value FROM user_settings WHERE user_id = ?")
                .bind(user_id)
                .fetch_all(&self.pool)
                .await?;
        Ok(rows.into_iter().collect())
    }

    pub async fn upsert_user_setting(
        &self,
        user_id: i64,
        setting: &str,
        value: &str,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO user_settings (user_id, setting, value) VALUES (?, ?, ?)
             ON CONFLICT(user_id, setting) DO UPDATE SET value = excluded.value",
        )
        .bind(user_id)
        .bind(setting)
        .bind(value)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// Returns whether a row was removed.
    pub async fn delete_user_setting(
        &self,
        user_id: i64,
        setting: &str,
    ) -> Result<bool, sqlx::Error> {
        let res = sqlx::query("DELETE FROM user_settings WHERE user_id = ? AND setting = ?")
            .bind(user_id)
            .bind(setting)
            .execute(&self.pool)
            .await?;
        Ok(res.rows_affected() > 0)
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/infra_db_user_settings.rs"]
mod tests;

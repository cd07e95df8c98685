//! SQLite key-value store implementation.
//!
//! Implements `KvStore` from `internly-core` using sqlx with split
//! read/write pools. Values are stored as JSON text and parsed on read.
//! A row whose text no longer parses as JSON reads back as absent (with
//! a warning) rather than failing the operation; the next write to that
//! key repairs it.

use chrono::Utc;
use sqlx::Row;

use internly_core::storage::kv_store::KvStore;
use internly_types::error::StoreError;

use super::pool::DatabasePool;

/// SQLite-backed implementation of `KvStore`.
#[derive(Clone)]
pub struct SqliteKvStore {
    pool: DatabasePool,
}

impl SqliteKvStore {
    /// Create a new store backed by the given database pool.
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

impl KvStore for SqliteKvStore {
    async fn get(&self, key: &str) -> Result<Option<serde_json::Value>, StoreError> {
        let row = sqlx::query("SELECT value FROM local_store WHERE key = ?")
            .bind(key)
            .fetch_optional(&self.pool.reader)
            .await
            .map_err(|e| StoreError::Query(e.to_string()))?;

        let Some(row) = row else {
            return Ok(None);
        };
        let value_str: String = row
            .try_get("value")
            .map_err(|e| StoreError::Query(e.to_string()))?;
        match serde_json::from_str(&value_str) {
            Ok(value) => Ok(Some(value)),
            Err(err) => {
                tracing::warn!(key, %err, "stored value is not valid JSON, treating as absent");
                Ok(None)
            }
        }
    }

    async fn set(&self, key: &str, value: &serde_json::Value) -> Result<(), StoreError> {
        let now = Utc::now().to_rfc3339();
        let value_str =
            serde_json::to_string(value).map_err(|e| StoreError::Query(e.to_string()))?;

        sqlx::query(
            r#"INSERT INTO local_store (key, value, created_at, updated_at)
               VALUES (?, ?, ?, ?)
               ON CONFLICT (key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at"#,
        )
        .bind(key)
        .bind(&value_str)
        .bind(&now)
        .bind(&now)
        .execute(&self.pool.writer)
        .await
        .map_err(|e| StoreError::Query(e.to_string()))?;

        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StoreError> {
        sqlx::query("DELETE FROM local_store WHERE key = ?")
            .bind(key)
            .execute(&self.pool.writer)
            .await
            .map_err(|e| StoreError::Query(e.to_string()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use internly_core::catalog;
    use internly_core::service::applications::ApplicationLedger;
    use internly_core::service::dashboard::Dashboard;
    use internly_core::service::profile::ProfileService;
    use internly_core::service::skills::SkillRegistry;
    use internly_types::application::ApplicationStatus;
    use internly_types::config::GlobalConfig;
    use internly_types::error::ApplicationError;
    use internly_types::skill::{SkillDraft, SkillLevel};
    use internly_types::user::User;

    async fn test_store() -> SqliteKvStore {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("test.db");
        let url = format!("sqlite://{}?mode=rwc", db_path.display());
        std::mem::forget(dir);
        SqliteKvStore::new(DatabasePool::new(&url).await.unwrap())
    }

    #[tokio::test]
    async fn test_set_get_roundtrip() {
        let store = test_store().await;
        let value = serde_json::json!({"fullName": "Asha Rao", "email": "asha@example.com"});
        store.set("user", &value).await.unwrap();
        assert_eq!(store.get("user").await.unwrap(), Some(value));
    }

    #[tokio::test]
    async fn test_get_missing_returns_none() {
        let store = test_store().await;
        assert!(store.get("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_set_upserts() {
        let store = test_store().await;
        store.set("isLoggedIn", &serde_json::json!(true)).await.unwrap();
        store.set("isLoggedIn", &serde_json::json!(false)).await.unwrap();
        assert_eq!(
            store.get("isLoggedIn").await.unwrap(),
            Some(serde_json::json!(false))
        );
    }

    #[tokio::test]
    async fn test_remove() {
        let store = test_store().await;
        store.set("temp", &serde_json::json!("value")).await.unwrap();
        store.remove("temp").await.unwrap();
        assert!(store.get("temp").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_remove_missing_is_noop() {
        let store = test_store().await;
        store.remove("nope").await.unwrap();
    }

    #[tokio::test]
    async fn test_unparseable_row_reads_as_absent() {
        let store = test_store().await;
        sqlx::query(
            "INSERT INTO local_store (key, value, created_at, updated_at) VALUES (?, ?, ?, ?)",
        )
        .bind("skills")
        .bind("{not json")
        .bind(Utc::now().to_rfc3339())
        .bind(Utc::now().to_rfc3339())
        .execute(&store.pool.writer)
        .await
        .unwrap();

        assert!(store.get("skills").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_values_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("reopen.db");
        let url = format!("sqlite://{}?mode=rwc", db_path.display());
        std::mem::forget(dir);

        {
            let store = SqliteKvStore::new(DatabasePool::new(&url).await.unwrap());
            store.set("user", &serde_json::json!({"email": "a@b.c"})).await.unwrap();
        }

        let store = SqliteKvStore::new(DatabasePool::new(&url).await.unwrap());
        assert_eq!(
            store.get("user").await.unwrap(),
            Some(serde_json::json!({"email": "a@b.c"}))
        );
    }

    // End-to-end against the durable store: fresh store, one skill, one
    // application, second application rejected.
    #[tokio::test]
    async fn test_portfolio_scenario_over_sqlite() {
        let store = test_store().await;

        let profile = ProfileService::new(store.clone());
        profile
            .register(User {
                full_name: "Asha Rao".to_string(),
                email: "asha@example.com".to_string(),
                password: "hunter2".to_string(),
            })
            .await
            .unwrap();
        profile.authenticate("asha@example.com", "hunter2").await.unwrap();

        let skills = SkillRegistry::new(store.clone());
        skills.add(SkillDraft::new("Go", SkillLevel::Beginner)).await.unwrap();
        let listed = skills.list().await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].name, "Go");
        assert_eq!(listed[0].level, SkillLevel::Beginner);

        let ledger = ApplicationLedger::new(store.clone());
        let posting = catalog::find(1).unwrap();
        ledger.apply(posting).await.unwrap();
        let apps = ledger.list().await.unwrap();
        assert_eq!(apps.len(), 1);
        assert_eq!(apps[0].status, ApplicationStatus::Pending);

        let err = ledger.apply(posting).await.unwrap_err();
        assert!(matches!(err, ApplicationError::AlreadyApplied(1)));
        assert_eq!(ledger.list().await.unwrap().len(), 1);

        profile.logout().await.unwrap();
        assert!(profile.current_session().await.unwrap().is_none());
        // Skills and applications are untouched by logout.
        assert_eq!(skills.list().await.unwrap().len(), 1);
        assert_eq!(ledger.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_dashboard_uses_configured_recent_limit() {
        let store = test_store().await;
        let config = GlobalConfig::default();

        let skills = SkillRegistry::new(store.clone());
        for name in ["Go", "SQL", "CSS", "Figma"] {
            skills.add(SkillDraft::new(name, SkillLevel::Beginner)).await.unwrap();
        }

        let dash = Dashboard::new(store, config.recent_skills);
        let summary = dash.summary().await.unwrap();
        assert_eq!(summary.skill_count, 4);
        assert_eq!(summary.recent_skills.len(), 3);
    }
}

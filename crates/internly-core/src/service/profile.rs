//! Profile and session service.
//!
//! Owns the single user record (`user` key) and the session flag
//! (`isLoggedIn` key). One profile per store; registering again
//! overwrites the record.

use internly_types::error::ProfileError;
use internly_types::user::{Session, User};

use crate::storage::kv_store::KvStore;
use crate::storage::{keys, read_record};

/// Service owning registration, authentication, and the session flag.
pub struct ProfileService<S: KvStore> {
    store: S,
}

impl<S: KvStore> ProfileService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Persist the user record, overwriting any existing one.
    ///
    /// There is no multi-user support: the last registration wins.
    pub async fn register(&self, user: User) -> Result<(), ProfileError> {
        let value =
            serde_json::to_value(&user).map_err(|e| ProfileError::Storage(e.to_string()))?;
        self.store
            .set(keys::USER, &value)
            .await
            .map_err(|e| ProfileError::Storage(e.to_string()))?;
        tracing::debug!(email = %user.email, "registered profile");
        Ok(())
    }

    /// Exact, case-sensitive match on both email and password against the
    /// stored record. On success sets the session flag and returns the
    /// session. Every failure -- wrong email, wrong password, both, or no
    /// record at all -- is the same `InvalidCredentials`.
    pub async fn authenticate(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Session, ProfileError> {
        let user: Option<User> = read_record(&self.store, keys::USER)
            .await
            .map_err(|e| ProfileError::Storage(e.to_string()))?;

        match user {
            Some(user) if user.email == email && user.password == password => {
                self.store
                    .set(keys::IS_LOGGED_IN, &serde_json::Value::Bool(true))
                    .await
                    .map_err(|e| ProfileError::Storage(e.to_string()))?;
                tracing::debug!(email, "session opened");
                Ok(Session::for_user(&user))
            }
            _ => Err(ProfileError::InvalidCredentials),
        }
    }

    /// Clear the session flag only; the user record is retained.
    pub async fn logout(&self) -> Result<(), ProfileError> {
        self.store
            .remove(keys::IS_LOGGED_IN)
            .await
            .map_err(|e| ProfileError::Storage(e.to_string()))?;
        tracing::debug!("session closed");
        Ok(())
    }

    /// The active session, if the flag is set and a user record exists.
    ///
    /// Protected views call this to decide whether to fall back to the
    /// unauthenticated state.
    pub async fn current_session(&self) -> Result<Option<Session>, ProfileError> {
        let flag = self
            .store
            .get(keys::IS_LOGGED_IN)
            .await
            .map_err(|e| ProfileError::Storage(e.to_string()))?;
        if !flag_is_set(flag.as_ref()) {
            return Ok(None);
        }

        let user: Option<User> = read_record(&self.store, keys::USER)
            .await
            .map_err(|e| ProfileError::Storage(e.to_string()))?;
        Ok(user.map(|u| Session::for_user(&u)))
    }

    /// The stored user record, if any. Read by the dashboard outside of
    /// the login flow.
    pub async fn profile(&self) -> Result<Option<User>, ProfileError> {
        read_record(&self.store, keys::USER)
            .await
            .map_err(|e| ProfileError::Storage(e.to_string()))
    }
}

/// The flag is boolean `true`; the original layout stored the literal
/// string `"true"`, so that spelling is accepted on read.
fn flag_is_set(value: Option<&serde_json::Value>) -> bool {
    match value {
        Some(serde_json::Value::Bool(b)) => *b,
        Some(serde_json::Value::String(s)) => s == "true",
        _ => false,
    }
}

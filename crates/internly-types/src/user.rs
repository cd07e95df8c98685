use serde::{Deserialize, Serialize};

/// The single registered user of a local profile.
///
/// Exactly one record exists per store; registering again overwrites it.
/// The password is stored and compared as plaintext -- the application has
/// no security model, and authentication is a local convenience gate only.
///
/// Serialized field names (`fullName`, ...) match the persisted layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub full_name: String,
    pub email: String,
    pub password: String,
}

/// An authenticated session, handed out by `ProfileService::authenticate`.
///
/// Never persisted itself -- only the `isLoggedIn` flag is. Carries no
/// password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub full_name: String,
    pub email: String,
}

impl Session {
    /// Build a session view from the stored user record.
    pub fn for_user(user: &User) -> Self {
        Self {
            full_name: user.full_name.clone(),
            email: user.email.clone(),
        }
    }
}

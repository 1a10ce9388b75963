use serde::Deserialize;
use thiserror::Error;

/// Username/password pair, either submitted at login or configured.
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl core::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Invalid username or password")]
    InvalidCredentials,
}

/// Literal comparison of submitted credentials against the admin's.
pub fn authenticate(submitted: &Credentials, admin: &Credentials) -> Result<(), AuthError> {
    if submitted == admin {
        tracing::info!(username = %submitted.username, "admin login accepted");
        Ok(())
    } else {
        tracing::warn!(username = %submitted.username, "admin login rejected");
        Err(AuthError::InvalidCredentials)
    }
}

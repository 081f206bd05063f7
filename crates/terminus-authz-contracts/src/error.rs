//! Error types for the capability cache.
//!
//! Permission checks fail closed: a denial is only ever an `Err`, never a
//! falsy return value. Variants carry enough context for the caller to build
//! a user-facing message.

use thiserror::Error;

/// The unified error type for the capability cache.
#[derive(Debug, Error)]
pub enum AuthzError {
    /// The cached capabilities do not grant the requested action.
    ///
    /// Also raised when no record resolves for the target at all.
    #[error(
        "access denied: action '{action}' is not permitted on database '{}' (account '{}')",
        .dbid.as_deref().unwrap_or("-"),
        .account.as_deref().unwrap_or("-")
    )]
    AccessDenied {
        action: String,
        dbid: Option<String>,
        account: Option<String>,
    },

    /// The caller broke the calling contract, e.g. checked a database-scoped
    /// action without naming a database.
    #[error("invalid arguments: {reason}")]
    InvalidArguments { reason: String },

    /// A configuration value is missing or invalid.
    #[error("configuration error: {reason}")]
    ConfigError { reason: String },

    /// A capability document could not be parsed as JSON.
    #[error("capability document error: {reason}")]
    DocumentParse { reason: String },
}

impl AuthzError {
    /// Build an `AccessDenied` from borrowed parts.
    pub fn access_denied(action: &str, dbid: Option<&str>, account: Option<&str>) -> Self {
        Self::AccessDenied {
            action: action.to_string(),
            dbid: dbid.map(str::to_string),
            account: account.map(str::to_string),
        }
    }
}

/// Convenience alias used throughout the workspace.
pub type AuthzResult<T> = Result<T, AuthzError>;

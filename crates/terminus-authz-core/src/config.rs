//! Gate configuration.
//!
//! `GateConfig` is deserialized from TOML. Every field has a default, so an
//! empty document describes the stock server vocabulary.
//!
//! Example:
//! ```toml
//! action_namespace = "terminus:"
//! server_actions = ["create_database"]
//! server_type = "terminus:Server"
//! server_resource_name = "terminus"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use terminus_authz_contracts::{
    action,
    error::{AuthzError, AuthzResult},
};

/// Knobs for resolving and checking cached capabilities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GateConfig {
    /// Prefix applied to a bare action before matching it against a record's
    /// authority list.
    pub action_namespace: String,

    /// Actions checked against the server record instead of a database record.
    pub server_actions: Vec<String>,

    /// `@type` value that marks the server record.
    pub server_type: String,

    /// Resource name of the server itself; a database id equal to this names
    /// the server.
    pub server_resource_name: String,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            action_namespace: "terminus:".to_string(),
            server_actions: vec![action::CREATE_DATABASE.to_string()],
            server_type: "terminus:Server".to_string(),
            server_resource_name: "terminus".to_string(),
        }
    }
}

impl GateConfig {
    /// Parse `s` as TOML.
    ///
    /// Returns `AuthzError::ConfigError` if the TOML is malformed or carries
    /// unknown keys.
    pub fn from_toml_str(s: &str) -> AuthzResult<Self> {
        toml::from_str(s).map_err(|e| AuthzError::ConfigError {
            reason: format!("failed to parse gate config TOML: {}", e),
        })
    }

    /// Read the file at `path` and parse it as TOML gate configuration.
    pub fn from_file(path: &Path) -> AuthzResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| AuthzError::ConfigError {
            reason: format!("failed to read gate config '{}': {}", path.display(), e),
        })?;
        Self::from_toml_str(&contents)
    }

    /// True if `action` is checked against the server record.
    pub fn is_server_action(&self, action: &str) -> bool {
        self.server_actions.iter().any(|a| a == action)
    }
}

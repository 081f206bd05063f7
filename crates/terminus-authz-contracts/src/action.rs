//! Action identifiers.
//!
//! Callers name actions bare (`"woql_select"`); the server grants them
//! namespaced (`"terminus:woql_select"`). The namespace is applied by the
//! gate at check time.

use serde::{Deserialize, Serialize};

pub const CREATE_DATABASE: &str = "create_database";
pub const DELETE_DATABASE: &str = "delete_database";
pub const CREATE_DOCUMENT: &str = "create_document";
pub const GET_DOCUMENT: &str = "get_document";
pub const UPDATE_DOCUMENT: &str = "update_document";
pub const DELETE_DOCUMENT: &str = "delete_document";
pub const GET_SCHEMA: &str = "get_schema";
pub const UPDATE_SCHEMA: &str = "update_schema";
pub const CLASS_FRAME: &str = "class_frame";
pub const WOQL_SELECT: &str = "woql_select";
pub const WOQL_UPDATE: &str = "woql_update";

/// A bare action name as requested by the operation layer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Action(pub String);

impl Action {
    /// Construct an action from any string-like value.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The identifier the server uses for this action under `namespace`.
    pub fn namespaced(&self, namespace: &str) -> String {
        format!("{}{}", namespace, self.0)
    }
}

impl From<&str> for Action {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

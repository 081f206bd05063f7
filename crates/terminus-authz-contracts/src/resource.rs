//! Resource records, resource names, and display metadata.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::vocab;

/// The identifier a resource is stored under (its `@id`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ResourceId(pub String);

impl ResourceId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ResourceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// The canonical name a (database id, account) pair resolves to.
///
/// Either the server sentinel or `account|dbid`. Derived on demand, never
/// stored on its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceName {
    Server(String),
    Database { account: String, dbid: String },
}

impl ResourceName {
    /// Form the resource name for `dbid` under `account`. A `dbid` equal to
    /// `server_name` names the server regardless of account.
    pub fn form(dbid: &str, account: &str, server_name: &str) -> Self {
        if dbid == server_name {
            ResourceName::Server(server_name.to_string())
        } else {
            ResourceName::Database {
                account: account.to_string(),
                dbid: dbid.to_string(),
            }
        }
    }
}

impl std::fmt::Display for ResourceName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResourceName::Server(name) => f.write_str(name),
            ResourceName::Database { account, dbid } => {
                write!(f, "{}{}{}", account, vocab::RESOURCE_NAME_SEPARATOR, dbid)
            }
        }
    }
}

/// One flattened resource: the descriptor fields as the server sent them,
/// plus the action identifiers granted on it.
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceRecord {
    id: ResourceId,
    fields: Map<String, Value>,
    authority: Vec<String>,
}

impl ResourceRecord {
    /// Build a record from a scope descriptor. The authority list starts empty.
    pub fn new(id: ResourceId, fields: Map<String, Value>) -> Self {
        Self {
            id,
            fields,
            authority: Vec::new(),
        }
    }

    pub fn id(&self) -> &ResourceId {
        &self.id
    }

    /// All descriptor fields, verbatim.
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    pub fn field(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Namespaced action identifiers granted on this resource, in grant order.
    pub fn authority(&self) -> &[String] {
        &self.authority
    }

    /// Replace the granted actions wholesale.
    pub fn set_authority(&mut self, actions: Vec<String>) {
        self.authority = actions;
    }

    /// True if `action_id` (already namespaced) is granted.
    pub fn grants(&self, action_id: &str) -> bool {
        self.authority.iter().any(|a| a == action_id)
    }

    /// The literal of the `resource_name` field, if it is a string.
    pub fn resource_name(&self) -> Option<&str> {
        self.fields
            .get(vocab::RESOURCE_NAME)?
            .get(vocab::VALUE)?
            .as_str()
    }

    /// True if `@type` equals `type_id`, or is a list containing it.
    pub fn has_type(&self, type_id: &str) -> bool {
        match self.fields.get(vocab::TYPE) {
            Some(Value::String(t)) => t == type_id,
            Some(Value::Array(ts)) => ts.iter().any(|t| t.as_str() == Some(type_id)),
            _ => false,
        }
    }

    /// Render the record in the document's own shape, with the authority
    /// list attached under the authority predicate.
    pub fn to_value(&self) -> Value {
        let mut fields = self.fields.clone();
        let actions = self
            .authority
            .iter()
            .map(|a| Value::String(a.clone()))
            .collect();
        fields.insert(vocab::AUTHORITY.to_string(), Value::Array(actions));
        Value::Object(fields)
    }
}

/// Display metadata derived from a resource record.
///
/// `title` is reserved and never filled in by the cache.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DbMetadata {
    pub account: String,
    pub db: String,
    pub title: String,
    pub description: String,
}

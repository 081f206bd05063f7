//! Display metadata for a resource record.
//!
//! Extraction is lenient: anything missing or of the wrong shape leaves the
//! corresponding field empty. It never fails.

use serde_json::Value;

use terminus_authz_contracts::{
    resource::{DbMetadata, ResourceRecord},
    vocab,
};

/// Derive account, database id, and description from `record`.
///
/// A resource name equal to `server_name` yields `db = server_name` with no
/// account. A name without a separator is taken as a bare database id. Only
/// the first two `|`-separated parts are used otherwise.
pub fn extract_metadata(record: &ResourceRecord, server_name: &str) -> DbMetadata {
    let mut meta = DbMetadata::default();

    if let Some(name) = record.resource_name().filter(|n| !n.is_empty()) {
        if name == server_name {
            meta.db = name.to_string();
        } else {
            let mut parts = name.split(vocab::RESOURCE_NAME_SEPARATOR);
            match (parts.next(), parts.next()) {
                (Some(account), Some(db)) => {
                    meta.account = account.to_string();
                    meta.db = db.to_string();
                }
                _ => meta.db = name.to_string(),
            }
        }
    }

    meta.description = description(record).unwrap_or_default();
    meta
}

/// A label list contributes its first element; a label that is not a list
/// defers to the comment. Without a label field there is no description.
fn description(record: &ResourceRecord) -> Option<String> {
    let literal = match record.field(vocab::LABEL)? {
        Value::Array(labels) => labels.first()?,
        _ => first_of(record.field(vocab::COMMENT)?)?,
    };
    literal.get(vocab::VALUE)?.as_str().map(str::to_string)
}

fn first_of(value: &Value) -> Option<&Value> {
    match value {
        Value::Array(items) => items.first(),
        other => Some(other),
    }
}

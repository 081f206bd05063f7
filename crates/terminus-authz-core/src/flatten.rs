//! Capability document flattening.
//!
//! The server describes capabilities authority-first: each grant names a
//! scope (the resources) and the actions allowed on it. The cache wants the
//! inverse, a per-resource action list, so checks are a single lookup.
//!
//! Malformed shapes never fail the flatten. A grant without an access body,
//! a scope entry without an `@id`, or an action list that is not a list of
//! `{"@id": ...}` objects each degrade to "nothing granted" for that part.

use serde_json::{Map, Value};
use tracing::debug;

use terminus_authz_contracts::{
    resource::{ResourceId, ResourceRecord},
    shape::OneOrMany,
    vocab,
};

use crate::registry::Registry;

/// Build a fresh registry from a capability document.
///
/// `None`, `null`, and non-object documents all produce an empty registry.
/// A resource id that appears in several grants keeps the fields of its
/// first descriptor and the action list of its last grant.
pub fn flatten(document: Option<&Value>) -> Registry {
    let mut registry = Registry::new();

    let Some(Value::Object(predicates)) = document else {
        return registry;
    };

    for (predicate, value) in predicates {
        if predicate == vocab::AUTHORITY {
            for grant in OneOrMany::from_field(Some(value)).into_vec() {
                apply_grant(&mut registry, grant);
            }
        } else {
            registry.insert_verbatim(predicate.clone(), value.clone());
        }
    }

    registry
}

fn apply_grant(registry: &mut Registry, grant: &Value) {
    let Some(access) = grant.get(vocab::ACCESS).filter(|a| a.is_object()) else {
        debug!("skipping authority grant without an access body");
        return;
    };

    let actions = action_ids(access.get(vocab::ACTION));

    for descriptor in OneOrMany::from_field(access.get(vocab::AUTHORITY_SCOPE)).into_vec() {
        let Some(fields) = descriptor.as_object() else {
            debug!("skipping non-object authority scope entry");
            continue;
        };
        let Some(id) = fields.get(vocab::ID).and_then(Value::as_str) else {
            debug!("skipping authority scope entry without an @id");
            continue;
        };

        let id = ResourceId::new(id);
        debug!(resource = %id, actions = actions.len(), "granting actions");
        registry.grant(&id, || seed_record(&id, fields), actions.clone());
    }
}

fn seed_record(id: &ResourceId, fields: &Map<String, Value>) -> ResourceRecord {
    ResourceRecord::new(id.clone(), fields.clone())
}

/// Extract the `@id` of every action object. Entries without a string `@id`
/// are dropped.
fn action_ids(actions: Option<&Value>) -> Vec<String> {
    OneOrMany::from_field(actions)
        .into_vec()
        .into_iter()
        .filter_map(|a| a.get(vocab::ID).and_then(Value::as_str))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn action_ids_accepts_single_object() {
        let ids = action_ids(Some(&json!({"@id": "terminus:woql_select"})));
        assert_eq!(ids, vec!["terminus:woql_select"]);
    }

    #[test]
    fn action_ids_skips_malformed_entries() {
        let ids = action_ids(Some(&json!([
            {"@id": "terminus:woql_select"},
            "terminus:get_schema",
            {"@id": 42},
            {"label": "no id"},
            {"@id": "terminus:create_document"}
        ])));
        assert_eq!(ids, vec!["terminus:woql_select", "terminus:create_document"]);
    }

    #[test]
    fn action_ids_absent_or_scalar_is_empty() {
        assert!(action_ids(None).is_empty());
        assert!(action_ids(Some(&json!("terminus:woql_select"))).is_empty());
        assert!(action_ids(Some(&json!(null))).is_empty());
    }

    #[test]
    fn non_object_document_is_empty() {
        assert!(flatten(Some(&json!([1, 2, 3]))).is_empty());
        assert!(flatten(Some(&json!("caps"))).is_empty());
        assert!(flatten(None).is_empty());
    }

    #[test]
    fn grant_without_access_is_skipped() {
        let doc = json!({"terminus:authority": [{"unexpected": true}, "junk"]});
        assert!(flatten(Some(&doc)).is_empty());
    }

    #[test]
    fn scope_entry_without_id_is_skipped() {
        let doc = json!({
            "terminus:authority": {
                "terminus:access": {
                    "terminus:authority_scope": [
                        {"terminus:resource_name": {"@value": "acme|nameless"}},
                        {"@id": "doc:named"}
                    ],
                    "terminus:action": [{"@id": "terminus:woql_select"}]
                }
            }
        });
        let registry = flatten(Some(&doc));
        assert_eq!(registry.len(), 1);
        assert!(registry.resource("doc:named").is_some());
    }
}

//! The per-connection registry.
//!
//! Maps resource identifiers to flattened resource records, alongside any
//! non-authority top-level entries of the capability document (kept verbatim
//! under their own keys). Insertion order is preserved; lookups that scan
//! the registry see entries in the order the document listed them.

use indexmap::IndexMap;
use serde_json::Value;

use terminus_authz_contracts::resource::{ResourceId, ResourceRecord};

/// One slot of the registry.
#[derive(Debug, Clone, PartialEq)]
pub enum RegistryEntry {
    /// A resource that appeared in some grant's scope.
    Resource(ResourceRecord),
    /// Any other top-level entry, e.g. `@context`.
    Verbatim(Value),
}

impl RegistryEntry {
    pub fn as_resource(&self) -> Option<&ResourceRecord> {
        match self {
            RegistryEntry::Resource(rec) => Some(rec),
            RegistryEntry::Verbatim(_) => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Registry {
    entries: IndexMap<String, RegistryEntry>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&RegistryEntry> {
        self.entries.get(key)
    }

    /// The resource record stored under `id`, if that slot holds one.
    pub fn resource(&self, id: &str) -> Option<&ResourceRecord> {
        self.entries.get(id).and_then(RegistryEntry::as_resource)
    }

    /// Set the authority list of the record under `id`.
    ///
    /// When the slot is empty, or holds a verbatim entry, the record built by
    /// `seed` takes it first. An existing record keeps its fields; only the
    /// authority list is replaced.
    pub fn grant(
        &mut self,
        id: &ResourceId,
        seed: impl FnOnce() -> ResourceRecord,
        actions: Vec<String>,
    ) {
        match self.entries.get_mut(id.as_str()) {
            Some(RegistryEntry::Resource(rec)) => rec.set_authority(actions),
            _ => {
                let mut rec = seed();
                rec.set_authority(actions);
                self.entries
                    .insert(id.as_str().to_string(), RegistryEntry::Resource(rec));
            }
        }
    }

    /// Store a non-resource top-level entry, replacing whatever held `key`.
    pub fn insert_verbatim(&mut self, key: impl Into<String>, value: Value) {
        self.entries.insert(key.into(), RegistryEntry::Verbatim(value));
    }

    /// Remove the entry under `key`, keeping the order of the rest.
    pub fn remove(&mut self, key: &str) -> Option<RegistryEntry> {
        self.entries.shift_remove(key)
    }

    /// Resource records in registry order.
    pub fn resources(&self) -> impl Iterator<Item = &ResourceRecord> {
        self.entries.values().filter_map(RegistryEntry::as_resource)
    }

    /// All keys in registry order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

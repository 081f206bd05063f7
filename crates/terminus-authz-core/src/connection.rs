//! The capability state owned by one client connection.
//!
//! `ConnectionCapabilities` holds the registry built from the last
//! capability document the server returned on connect. It is rebuilt
//! wholesale on every `set_capabilities` call and otherwise only shrinks
//! through `remove_db`.
//!
//! Not internally synchronized: a connection shared between callers must be
//! serialized by its owner. `set_capabilities` builds the new registry off to
//! the side and swaps it in, so no reader sees a half-built one.

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};
use tracing::{debug, info};

use terminus_authz_contracts::{
    error::{AuthzError, AuthzResult},
    permit::Permit,
    resource::{DbMetadata, ResourceId, ResourceRecord},
    vocab,
};

use crate::{
    config::GateConfig,
    flatten::flatten,
    gate,
    metadata::extract_metadata,
    registry::{Registry, RegistryEntry},
    resolver,
    traits::PermissionGate,
};

#[derive(Debug, Clone, Default)]
pub struct ConnectionCapabilities {
    config: GateConfig,
    registry: Registry,
    loaded_at: Option<DateTime<Utc>>,
}

impl ConnectionCapabilities {
    /// An empty cache using the stock vocabulary.
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty cache using `config`.
    pub fn with_config(config: GateConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &GateConfig {
        &self.config
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// When the registry was last replaced, if ever.
    pub fn loaded_at(&self) -> Option<DateTime<Utc>> {
        self.loaded_at
    }

    /// Replace the registry with the flattening of `capabilities`.
    ///
    /// `None` clears it. Malformed parts of the document are skipped rather
    /// than rejected.
    pub fn set_capabilities(&mut self, capabilities: Option<&Value>) {
        let registry = flatten(capabilities);
        info!(
            entries = registry.len(),
            resources = registry.resources().count(),
            "capability registry replaced"
        );
        self.registry = registry;
        self.loaded_at = Some(Utc::now());
    }

    /// Parse `json` and apply it with `set_capabilities`.
    ///
    /// On a parse failure the current registry is left untouched.
    pub fn set_capabilities_json(&mut self, json: &str) -> AuthzResult<()> {
        let document: Value = serde_json::from_str(json).map_err(|e| AuthzError::DocumentParse {
            reason: format!("capability document is not valid JSON: {}", e),
        })?;
        self.set_capabilities(Some(&document));
        Ok(())
    }

    /// Id of the record for `dbid` under `account`, if one is cached.
    pub fn find_resource_document_id(&self, dbid: &str, account: &str) -> Option<ResourceId> {
        resolver::find_resource_document_id(
            &self.registry,
            dbid,
            account,
            &self.config.server_resource_name,
        )
    }

    /// The server record returned on connect.
    pub fn get_server_record(&self) -> Option<&ResourceRecord> {
        resolver::find_server_record(&self.registry, &self.config.server_type)
    }

    /// The record of a particular database.
    pub fn get_db_record(&self, dbid: &str, account: &str) -> Option<&ResourceRecord> {
        gate::db_record(&self.registry, &self.config, dbid, account)
    }

    /// Display metadata for `record`.
    pub fn extract_metadata(&self, record: &ResourceRecord) -> DbMetadata {
        extract_metadata(record, &self.config.server_resource_name)
    }

    /// Display metadata for a database, or `None` if it is not cached.
    pub fn get_db_metadata(&self, dbid: &str, account: &str) -> Option<DbMetadata> {
        self.get_db_record(dbid, account)
            .map(|rec| self.extract_metadata(rec))
    }

    /// Metadata of every cached database, in registry order. The server
    /// record is left out.
    pub fn list_databases(&self) -> Vec<DbMetadata> {
        self.registry
            .resources()
            .filter(|rec| !rec.has_type(&self.config.server_type))
            .filter(|rec| rec.resource_name() != Some(self.config.server_resource_name.as_str()))
            .map(|rec| self.extract_metadata(rec))
            .collect()
    }

    /// The document's JSON-LD `@context`, or an empty map.
    pub fn get_json_context(&self) -> Map<String, Value> {
        match self.registry.get(vocab::CONTEXT) {
            Some(RegistryEntry::Verbatim(Value::Object(ctx))) => ctx.clone(),
            _ => Map::new(),
        }
    }

    /// Conventional document id of a database resource.
    pub fn db_capability_id(dbid: &str) -> String {
        format!("{}{}", vocab::DB_DOC_PREFIX, dbid)
    }

    /// Check `action` against the cached capabilities.
    pub fn capabilities_permit(
        &self,
        action: &str,
        dbid: Option<&str>,
        account: Option<&str>,
    ) -> AuthzResult<Permit> {
        gate::check(&self.registry, &self.config, action, dbid, account)
    }

    /// Drop the record of `dbid` under `account`, e.g. after the database was
    /// deleted. Removing something that is not cached is a no-op.
    pub fn remove_db(&mut self, dbid: &str, account: &str) {
        match self.find_resource_document_id(dbid, account) {
            Some(id) => {
                self.registry.remove(id.as_str());
                info!(resource = %id, dbid = %dbid, account = %account, "removed database record");
            }
            None => debug!(dbid = %dbid, account = %account, "no cached record to remove"),
        }
    }
}

impl PermissionGate for ConnectionCapabilities {
    fn permit(&self, action: &str, dbid: Option<&str>, account: Option<&str>) -> AuthzResult<Permit> {
        self.capabilities_permit(action, dbid, account)
    }
}

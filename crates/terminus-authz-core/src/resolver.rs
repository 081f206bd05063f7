//! Resolve a (database id, account) pair to the record that describes it.

use tracing::debug;

use terminus_authz_contracts::resource::{ResourceId, ResourceName, ResourceRecord};

use crate::registry::Registry;

/// Return the id of the first record, in registry order, whose resource name
/// literal equals the canonical name of `dbid` under `account`.
///
/// Not finding one is an ordinary outcome, not an error.
pub fn find_resource_document_id(
    registry: &Registry,
    dbid: &str,
    account: &str,
    server_name: &str,
) -> Option<ResourceId> {
    let wanted = ResourceName::form(dbid, account, server_name).to_string();
    let found = registry
        .resources()
        .find(|rec| rec.resource_name() == Some(wanted.as_str()))
        .map(|rec| rec.id().clone());
    debug!(resource_name = %wanted, found = ?found, "resolved resource name");
    found
}

/// The first record whose `@type` marks it as the server.
pub fn find_server_record<'a>(registry: &'a Registry, server_type: &str) -> Option<&'a ResourceRecord> {
    registry.resources().find(|rec| rec.has_type(server_type))
}

//! The permission gate.
//!
//! Decision procedure for `(action, dbid, account)`:
//!
//! 1. A server-scoped action (by default only `create_database`) is checked
//!    against the server record.
//! 2. Any other action needs a database id; the record is found through the
//!    resolver. No database id is a caller error, not a denial.
//! 3. The action is permitted only if the record exists and its authority
//!    list holds the namespaced action. Everything else is denied.
//!
//! Checks are pure reads of the registry.

use tracing::{debug, warn};

use terminus_authz_contracts::{
    action::Action,
    error::{AuthzError, AuthzResult},
    permit::Permit,
    resource::ResourceRecord,
};

use crate::{config::GateConfig, registry::Registry, resolver};

pub fn check(
    registry: &Registry,
    config: &GateConfig,
    action: &str,
    dbid: Option<&str>,
    account: Option<&str>,
) -> AuthzResult<Permit> {
    let record = if config.is_server_action(action) {
        resolver::find_server_record(registry, &config.server_type)
    } else if let Some(dbid) = dbid {
        db_record(registry, config, dbid, account.unwrap_or_default())
    } else {
        warn!(action = %action, "database-scoped action checked without a database id");
        return Err(AuthzError::InvalidArguments {
            reason: format!("no dbid provided in capabilities check for action '{}'", action),
        });
    };

    let wanted = Action::new(action).namespaced(&config.action_namespace);

    match record {
        Some(rec) if rec.grants(&wanted) => {
            debug!(action = %action, resource = %rec.id(), "capabilities permit action");
            Ok(Permit {
                action: action.to_string(),
                resource: rec.id().to_string(),
            })
        }
        Some(rec) => {
            warn!(action = %action, resource = %rec.id(), "action not granted on resource");
            Err(AuthzError::access_denied(action, dbid, account))
        }
        None => {
            warn!(action = %action, dbid = ?dbid, account = ?account, "no record for target; denying");
            Err(AuthzError::access_denied(action, dbid, account))
        }
    }
}

/// The database record for `dbid` under `account`.
pub fn db_record<'a>(
    registry: &'a Registry,
    config: &GateConfig,
    dbid: &str,
    account: &str,
) -> Option<&'a ResourceRecord> {
    let id = resolver::find_resource_document_id(registry, dbid, account, &config.server_resource_name)?;
    registry.resource(id.as_str())
}

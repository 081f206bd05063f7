//! Runs privileged operations behind the permission gate.
//!
//! The invariant is structural: `PrivilegedOperation::perform` takes a
//! `&Permit`, and the only place one is obtained is `PermissionGate::permit`.

use tracing::{debug, warn};

use terminus_authz_contracts::error::AuthzResult;

use crate::traits::{PermissionGate, PrivilegedOperation};

/// Borrows a gate and runs operations through it.
pub struct OperationGuard<'a, G: PermissionGate + ?Sized> {
    gate: &'a G,
}

impl<'a, G: PermissionGate + ?Sized> OperationGuard<'a, G> {
    pub fn new(gate: &'a G) -> Self {
        Self { gate }
    }

    /// Check `op` against the gate and perform it only if permitted.
    ///
    /// A denial or argument error is returned as-is and `perform` is never
    /// called.
    pub fn run<O: PrivilegedOperation>(&self, op: &O) -> AuthzResult<O::Output> {
        let (dbid, account) = match op.target() {
            Some((dbid, account)) => (Some(dbid), Some(account)),
            None => (None, None),
        };

        let permit = self.gate.permit(op.action(), dbid, account).map_err(|e| {
            warn!(action = %op.action(), error = %e, "operation blocked by capability check");
            e
        })?;

        debug!(action = %permit.action, resource = %permit.resource, "performing operation");
        op.perform(&permit)
    }
}

//! Trait seams between the capability cache and the operation layer.
//!
//! - `PermissionGate`      — trusted check, consulted before every privileged request
//! - `PrivilegedOperation` — the request itself; only run after a permit
//!
//! `OperationGuard` wires the two together so the request path is only
//! reachable through a granted `Permit`.

use terminus_authz_contracts::{error::AuthzResult, permit::Permit};

/// Decides whether a locally initiated operation may be attempted.
pub trait PermissionGate {
    /// Return a `Permit` if the cached capabilities allow `action`.
    ///
    /// `dbid` is required for every action that is not server-scoped.
    /// Denials are `AuthzError::AccessDenied`; there is no third outcome.
    fn permit(&self, action: &str, dbid: Option<&str>, account: Option<&str>) -> AuthzResult<Permit>;
}

/// A request against the remote service that needs a capability.
pub trait PrivilegedOperation {
    type Output;

    /// The bare action name, e.g. `"woql_select"`.
    fn action(&self) -> &str;

    /// `(dbid, account)` the operation targets, or `None` for server-scoped
    /// operations.
    fn target(&self) -> Option<(&str, &str)>;

    /// Carry out the request. The guard only calls this with a permit in hand.
    fn perform(&self, permit: &Permit) -> AuthzResult<Self::Output>;
}

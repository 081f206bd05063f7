//! Proof of a successful permission check.

use serde::{Deserialize, Serialize};

/// Returned by the gate when the cached capabilities allow an action.
///
/// There is no "denied" value of this type; a denial is always an
/// `AuthzError::AccessDenied`.
#[must_use = "a permit only means something if the guarded operation checks for it"]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Permit {
    /// The bare action that was checked.
    pub action: String,
    /// The resource the grant was found on.
    pub resource: String,
}

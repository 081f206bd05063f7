//! # terminus-authz-core
//!
//! The client-side capability cache for a connection to the database
//! service.
//!
//! On connect the server returns a capability document listing the server,
//! the databases the caller can reach, and the actions permitted on each.
//! This crate provides:
//! - [`ConnectionCapabilities`], which flattens that document into a
//!   per-resource action index and answers lookups against it
//! - the [`PermissionGate`](traits::PermissionGate) check consulted before
//!   every privileged request, and [`OperationGuard`] to enforce it
//! - [`GateConfig`], loaded from TOML, for the vocabulary the gate matches on
//!
//! ## Usage
//!
//! ```rust,ignore
//! use terminus_authz_core::ConnectionCapabilities;
//!
//! let mut caps = ConnectionCapabilities::new();
//! caps.set_capabilities(Some(&document));
//! let _permit = caps.capabilities_permit("woql_select", Some("mydb"), Some("acme"))?;
//! ```

pub mod config;
pub mod connection;
pub mod flatten;
pub mod gate;
pub mod guard;
pub mod metadata;
pub mod registry;
pub mod resolver;
pub mod traits;

pub use config::GateConfig;
pub use connection::ConnectionCapabilities;
pub use guard::OperationGuard;

// ── Tests ─────────────────────────────────────────────────────────────────────

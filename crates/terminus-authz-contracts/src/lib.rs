//! # terminus-authz-contracts
//!
//! Shared types and error definitions for the client-side capability cache.
//!
//! The core crate imports from here. No business logic lives in this crate,
//! only data definitions, vocabulary constants, and error types.

pub mod action;
pub mod error;
pub mod permit;
pub mod resource;
pub mod shape;
pub mod vocab;

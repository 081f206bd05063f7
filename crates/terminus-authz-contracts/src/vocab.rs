//! Predicate names of the capability document vocabulary.
//!
//! Only the handful of keys the cache actually reads are listed here; every
//! other key in a resource descriptor is carried through untouched.

/// Top-level predicate holding one grant or a list of grants.
pub const AUTHORITY: &str = "terminus:authority";

/// Grant body: holds the scope and the action list.
pub const ACCESS: &str = "terminus:access";

/// Resources a grant applies to (singular or list).
pub const AUTHORITY_SCOPE: &str = "terminus:authority_scope";

/// Actions a grant allows (singular or list of `{"@id": ...}` objects).
pub const ACTION: &str = "terminus:action";

/// Canonical resource name literal, `{"@value": "account|dbid"}`.
pub const RESOURCE_NAME: &str = "terminus:resource_name";

pub const LABEL: &str = "rdfs:label";
pub const COMMENT: &str = "rdfs:comment";

pub const ID: &str = "@id";
pub const TYPE: &str = "@type";
pub const VALUE: &str = "@value";
pub const CONTEXT: &str = "@context";

/// Prefix of the conventional document id of a database resource.
pub const DB_DOC_PREFIX: &str = "doc:";

/// Separator between account and database id in a resource name.
pub const RESOURCE_NAME_SEPARATOR: char = '|';

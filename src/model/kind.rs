//! Record kind tags
//!
//! A small closed set of tags, each carrying the per-kind constants the
//! tiers need (snapshot file name, origin endpoint path). Looked up once per
//! operation instead of re-branched at every call site.

use std::fmt;

/// The record kinds served by the store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    User,
    Todo,
}

impl RecordKind {
    /// All known kinds
    pub fn all() -> [RecordKind; 2] {
        [RecordKind::User, RecordKind::Todo]
    }

    /// File name of the on-disk snapshot for this kind
    pub fn snapshot_name(&self) -> &'static str {
        match self {
            RecordKind::User => "users.json",
            RecordKind::Todo => "todos.json",
        }
    }

    /// Path of the origin endpoint serving this kind, relative to the base URL
    pub fn origin_path(&self) -> &'static str {
        match self {
            RecordKind::User => "/users",
            RecordKind::Todo => "/todos",
        }
    }

    /// Human-readable singular label, used in error messages
    pub fn label(&self) -> &'static str {
        match self {
            RecordKind::User => "user",
            RecordKind::Todo => "todo",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

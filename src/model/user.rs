//! User record

use serde::{Deserialize, Serialize};

use crate::policy::Policy;

use super::{Record, RecordKind};

/// A user record
///
/// `username` is unique within the collection. All fields default to empty
/// so that missing wire fields surface as policy failures rather than
/// deserialization failures; unknown wire fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub username: String,
    pub email: String,
    pub phone: String,
    pub website: String,
}

impl Record for User {
    const KIND: RecordKind = RecordKind::User;

    fn id(&self) -> u64 {
        self.id
    }

    fn assign_id(&mut self, id: u64) {
        self.id = id;
    }

    fn policy() -> Policy<User> {
        Policy::new()
            .require("username", |user: &User| !user.username.is_empty())
            .unique("username", |user: &User| user.username.clone())
    }
}

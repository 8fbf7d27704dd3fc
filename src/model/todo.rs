//! Todo record

use serde::{Deserialize, Serialize};

use crate::policy::Policy;

use super::{Record, RecordKind};

/// A todo record
///
/// `user_id` must reference an existing [`User`](super::User) at creation
/// time. The reference is checked on create only; it is not continuously
/// enforced afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Todo {
    pub id: u64,
    pub user_id: u64,
    pub title: String,
    pub completed: bool,
}

impl Record for Todo {
    const KIND: RecordKind = RecordKind::Todo;

    fn id(&self) -> u64 {
        self.id
    }

    fn assign_id(&mut self, id: u64) {
        self.id = id;
    }

    fn policy() -> Policy<Todo> {
        Policy::new()
            .require("userId", |todo: &Todo| todo.user_id != 0)
            .require("title", |todo: &Todo| !todo.title.is_empty())
            .relation("userId", RecordKind::User, |todo: &Todo| todo.user_id)
    }
}

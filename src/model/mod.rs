//! Record Model
//!
//! The record kinds the store serves and the trait binding each record type
//! to its kind tag and validation policy.
//!
//! ## Adding a kind
//! 1. Add a variant to [`RecordKind`] (names, paths)
//! 2. Define the record struct and implement [`Record`]
//! 3. Declare its policy — the resolution engine itself never branches on
//!    the new kind beyond the single tag lookup

mod kind;
mod todo;
mod user;

pub use kind::RecordKind;
pub use todo::Todo;
pub use user::User;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::policy::Policy;

/// A JSON-serializable entity with an integer id
///
/// An id of `0` means "unassigned"; the store's allocator overwrites it on
/// create, so ids supplied by clients are never trusted.
pub trait Record:
    Clone + std::fmt::Debug + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// Kind tag binding this type to its snapshot name and origin path
    const KIND: RecordKind;

    /// The assigned id (0 = unassigned)
    fn id(&self) -> u64;

    /// Overwrite the id (used by the allocator on create)
    fn assign_id(&mut self, id: u64);

    /// Validation rules consulted on create
    fn policy() -> Policy<Self>;
}

//! Cache slot implementation
//!
//! One guarded, lazily-populated slot per collection kind.

use tokio::sync::{Mutex, MutexGuard};

use crate::model::Record;

/// Process-wide holder for one fully-resolved collection
///
/// `None` means "never resolved" — distinct from an empty-but-resolved
/// collection, which is a valid populated state. The slot's mutex is held
/// across the entire resolve/create critical section, so at most one
/// population attempt is in flight per collection and creates are
/// serialized.
pub struct CollectionSlot<T> {
    state: Mutex<Option<CollectionState<T>>>,
}

impl<T: Record> CollectionSlot<T> {
    /// Create an unpopulated slot
    pub fn empty() -> Self {
        Self {
            state: Mutex::new(None),
        }
    }

    /// Lock the slot for the duration of a resolve or create
    pub async fn lock(&self) -> MutexGuard<'_, Option<CollectionState<T>>> {
        self.state.lock().await
    }
}

impl<T: Record> Default for CollectionSlot<T> {
    fn default() -> Self {
        Self::empty()
    }
}

/// A populated collection plus its id allocator
///
/// The allocator tracks the maximum id ever observed rather than looking at
/// the last element, so gaps or out-of-order snapshots cannot produce
/// duplicate ids.
pub struct CollectionState<T> {
    /// Records in collection order
    pub records: Vec<T>,

    /// Next id to hand out
    next_id: u64,
}

impl<T: Record> CollectionState<T> {
    /// Wrap a freshly resolved collection, seeding the allocator at max+1
    pub fn new(records: Vec<T>) -> Self {
        let next_id = records.iter().map(|r| r.id()).max().unwrap_or(0) + 1;
        Self { records, next_id }
    }

    /// Hand out the next id and advance the allocator
    pub fn allocate_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// The id the allocator will hand out next
    pub fn next_id(&self) -> u64 {
        self.next_id
    }
}

//! Tiered Resolution Store
//!
//! The core engine that decides, per collection, whether to answer from the
//! in-process cache, the on-disk snapshot, or a remote origin fetch, and
//! routes validated creates back through all three tiers.
//!
//! ## Read path (resolve)
//! 1. Cache slot populated → return it, no I/O
//! 2. Snapshot loads and decodes → populate the slot, return
//! 3. Snapshot missing/unreadable/undecodable → fetch from the origin,
//!    persist the snapshot, populate the slot, return
//! 4. Origin also fails → propagate; the slot stays empty so the next call
//!    retries the whole chain
//!
//! ## Write path (create)
//! Resolve, validate against the kind's policy (required → unique →
//! relations, first failure wins), allocate an id, append to the cache,
//! persist the full collection. A persist failure after the append is
//! surfaced, not rolled back: the cache is ahead of disk until the next
//! successful save.
//!
//! ## Concurrency Model
//! Each collection has one async mutex held across the entire resolve or
//! create, so at most one population attempt runs per collection and
//! creates are serialized. Reads of an already-populated slot only hold the
//! lock long enough to clone the records. Relation checks lock the
//! *referenced* collection's slot while holding the writer's — relations
//! never point at their own kind, so this cannot self-deadlock.

mod slot;

pub use slot::{CollectionSlot, CollectionState};

use tracing::{debug, info, warn};

use crate::config::Config;
use crate::error::{Result, StrataError};
use crate::model::{Record, RecordKind, Todo, User};
use crate::origin::OriginClient;
use crate::snapshot::SnapshotStore;

/// Binds a record type to its cache slot within the store
///
/// Implemented once per kind; everything else about the resolution
/// algorithm is shared.
pub trait Resident: Record {
    fn slot(store: &Store) -> &CollectionSlot<Self>;
}

impl Resident for User {
    fn slot(store: &Store) -> &CollectionSlot<User> {
        &store.users
    }
}

impl Resident for Todo {
    fn slot(store: &Store) -> &CollectionSlot<Todo> {
        &store.todos
    }
}

/// The tiered resolution store
pub struct Store {
    /// Disk tier
    snapshots: SnapshotStore,

    /// Network tier
    origin: OriginClient,

    /// Cache tier, one slot per kind
    users: CollectionSlot<User>,
    todos: CollectionSlot<Todo>,
}

impl Store {
    /// Create a store from config
    ///
    /// Slots start empty; no I/O happens until the first resolve.
    pub fn open(config: Config) -> Result<Self> {
        let snapshots = SnapshotStore::new(&config.data_dir);
        let origin = OriginClient::new(&config.origin_base_url, config.origin_timeout)?;

        Ok(Self {
            snapshots,
            origin,
            users: CollectionSlot::empty(),
            todos: CollectionSlot::empty(),
        })
    }

    /// Resolve the full collection for a kind, walking cache → disk → origin
    pub async fn resolve<T: Resident>(&self) -> Result<Vec<T>> {
        let mut guard = T::slot(self).lock().await;
        let state = self.populate(&mut *guard).await?;
        Ok(state.records.clone())
    }

    /// Resolve a single record by id
    pub async fn resolve_one<T: Resident>(&self, id: u64) -> Result<T> {
        let mut guard = T::slot(self).lock().await;
        let state = self.populate(&mut *guard).await?;

        state
            .records
            .iter()
            .find(|record| record.id() == id)
            .cloned()
            .ok_or(StrataError::NotFound { kind: T::KIND, id })
    }

    /// Validate, id-assign, and store a new record
    ///
    /// The candidate's own id is ignored; the allocator overwrites it.
    pub async fn create<T: Resident>(&self, mut candidate: T) -> Result<T> {
        let policy = T::policy();

        let mut guard = T::slot(self).lock().await;
        let state = self.populate(&mut *guard).await?;

        // Validation, in order, stopping at the first failure
        policy.check_required(&candidate)?;
        policy.check_unique(T::KIND, &candidate, &state.records)?;
        for relation in &policy.relations {
            let referenced_ids = self.referenced_ids(relation.references).await?;
            relation.check(&candidate, &referenced_ids)?;
        }

        // Allocate and append
        let id = state.allocate_id();
        candidate.assign_id(id);
        state.records.push(candidate.clone());

        // Persist the full collection. On failure the cache has already
        // advanced and stays ahead of disk until the next successful save;
        // the error is surfaced rather than swallowed.
        if let Err(e) = self.snapshots.save(T::KIND, &state.records) {
            warn!(kind = %T::KIND, id, error = %e, "created in cache but snapshot save failed");
            return Err(e);
        }

        info!(kind = %T::KIND, id, "record created");
        Ok(candidate)
    }

    // =========================================================================
    // Internal: tier fallback
    // =========================================================================

    /// Ensure the slot is populated, returning its state
    ///
    /// Runs the disk → origin fallback when the slot is empty. On failure
    /// the slot is left empty so the next caller retries the chain.
    async fn populate<'a, T: Resident>(
        &self,
        guard: &'a mut Option<CollectionState<T>>,
    ) -> Result<&'a mut CollectionState<T>> {
        let state = match guard.take() {
            Some(state) => state,
            None => {
                let records = self.fetch_collection::<T>().await?;
                CollectionState::new(records)
            }
        };

        Ok(guard.insert(state))
    }

    /// Walk the disk and network tiers for a collection
    async fn fetch_collection<T: Resident>(&self) -> Result<Vec<T>> {
        // Disk tier: missing, unreadable, or undecodable snapshots all fall
        // through to the origin; those are the only errors this chain swallows.
        match self.snapshots.load(T::KIND) {
            Ok(bytes) => match serde_json::from_slice::<Vec<T>>(&bytes) {
                Ok(records) => {
                    debug!(kind = %T::KIND, count = records.len(), "resolved from snapshot");
                    return Ok(records);
                }
                Err(e) => {
                    warn!(kind = %T::KIND, error = %e, "snapshot did not decode, trying origin");
                }
            },
            Err(StrataError::SnapshotMissing { .. }) => {
                debug!(kind = %T::KIND, "no snapshot on disk, trying origin");
            }
            Err(e) => {
                warn!(kind = %T::KIND, error = %e, "snapshot unreadable, trying origin");
            }
        }

        // Network tier
        let records = self.origin.fetch::<T>().await?;

        // Persist so the next process start skips the network. A failure
        // here is surfaced: silently skipping the save would repeat the
        // fetch on every restart.
        self.snapshots.save(T::KIND, &records)?;

        debug!(kind = %T::KIND, count = records.len(), "resolved from origin and persisted");
        Ok(records)
    }

    /// Ids of the referenced collection, resolved through the normal chain
    ///
    /// The single dispatch point over the closed kind set.
    async fn referenced_ids(&self, kind: RecordKind) -> Result<Vec<u64>> {
        match kind {
            RecordKind::User => Ok(self
                .resolve::<User>()
                .await?
                .iter()
                .map(Record::id)
                .collect()),
            RecordKind::Todo => Ok(self
                .resolve::<Todo>()
                .await?
                .iter()
                .map(Record::id)
                .collect()),
        }
    }
}

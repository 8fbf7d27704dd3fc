//! # Strata
//!
//! A tiered record store. Two collections (users, todos) are served over
//! HTTP; every read resolves through a fallback chain that minimizes calls
//! to the remote origin, and every write flows back through all tiers.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                       HTTP API (axum)                        │
//! │            GET/POST /users · GET/POST /todos                 │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                Tiered Resolution Store                       │
//! │     (per-collection slot lock, policies, id allocator)       │
//! └───────┬──────────────────┬──────────────────┬───────────────┘
//!         │                  │                  │
//!         ▼                  ▼                  ▼
//!  ┌─────────────┐    ┌─────────────┐    ┌─────────────┐
//!  │ Cache Slot  │    │  Snapshot   │    │   Origin    │
//!  │ (in-memory) │    │ (JSON file) │    │ (remote)    │
//!  └─────────────┘    └─────────────┘    └─────────────┘
//!        fast      ←── fallback order ──→      slow
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod model;
pub mod policy;
pub mod snapshot;
pub mod origin;
pub mod store;
pub mod http;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{Result, StrataError};
pub use config::Config;
pub use store::Store;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of Strata
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

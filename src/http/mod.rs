//! HTTP API
//!
//! Thin routing layer over the store. Handlers translate between JSON
//! bodies and store calls; all interesting behavior lives in the store.
//!
//! ## Routes
//! - `GET  /users`        — full user collection
//! - `GET  /users/:id`    — one user
//! - `POST /users`        — create a user
//! - `GET  /todos`        — full todo collection
//! - `GET  /todos/:id`    — one todo
//! - `POST /todos`        — create a todo

mod error;
mod handlers;

pub use error::ApiError;
pub use handlers::router;

//! Visitor core: error types, the numeric attribute value, and the storage
//! contract shared by the gateway and its storage backends.
//!
//! This crate carries no transport or runtime dependencies so backends and
//! tests can depend on it without pulling in axum or tokio.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths surface as `VisitorError`/`Result`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod number;
pub mod store;

/// Shared result type.
pub use error::{Result, VisitorError};
pub use number::NumberValue;
pub use store::{CounterStore, UpdatedAttributes, COUNTER_ATTRIBUTE, COUNTER_KEY};

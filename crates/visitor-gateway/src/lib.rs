//! Visitor counter gateway library entry.
//!
//! Wires config, storage backends, the counter endpoint and ops endpoints
//! into an axum router. Consumed by the binary (`main.rs`) and by
//! integration tests.

pub mod app_state;
pub mod config;
pub mod counter;
pub mod obs;
pub mod ops;
pub mod router;
pub mod storage;

//! Counter endpoint: atomic increment-and-read exposed over HTTP.
//!
//! Every call adds exactly 1 to `visit_count` of record `main` and answers
//! `{"visits": n}`. Failures answer 500 `{"error": "..."}`. Nothing is
//! retried.

pub mod endpoint;
pub mod response;

pub use endpoint::{increment_visits, preflight, visits};
pub use response::visits_response;

//! Top-level facade crate for the visitor counter.
//!
//! Re-exports core types and the gateway library so users can depend on a single crate.

pub mod core {
    pub use visitor_core::*;
}

pub mod gateway {
    pub use visitor_gateway::*;
}

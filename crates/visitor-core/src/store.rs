//! Storage contract for the visitor counter.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::error::Result;
use crate::number::NumberValue;

/// Key of the single counter record.
pub const COUNTER_KEY: &str = "main";

/// Numeric attribute holding the visit count.
pub const COUNTER_ATTRIBUTE: &str = "visit_count";

/// Attributes changed by an update, keyed by attribute name.
pub type UpdatedAttributes = HashMap<String, NumberValue>;

/// A key-value table with an atomic numeric add.
///
/// Implementations must apply `add` atomically at the record level: concurrent
/// calls against the same `(table, key, attribute)` never lose an update. A
/// missing record or attribute is created from zero.
#[async_trait]
pub trait CounterStore: Send + Sync {
    /// Short backend name used in logs and metric labels.
    fn backend(&self) -> &'static str;

    /// Add `delta` to `attribute` of record `key` in `table` and return the
    /// updated attributes.
    async fn add(
        &self,
        table: &str,
        key: &str,
        attribute: &str,
        delta: i64,
    ) -> Result<UpdatedAttributes>;
}

use std::collections::HashMap;

use async_trait::async_trait;
use dashmap::DashMap;
use rust_decimal::Decimal;

use visitor_core::error::{Result, VisitorError};
use visitor_core::{CounterStore, NumberValue, UpdatedAttributes};

/// In-process table. Records are keyed by `(table, key)`; the entry guard
/// holds the shard lock for the whole read-add-write.
#[derive(Default)]
pub struct MemoryStore {
    records: DashMap<(String, String), HashMap<String, Decimal>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            records: DashMap::new(),
        }
    }

    /// Current value of an attribute, if the record exists.
    pub fn get(&self, table: &str, key: &str, attribute: &str) -> Option<NumberValue> {
        self.records
            .get(&(table.to_string(), key.to_string()))
            .and_then(|r| r.get(attribute).copied())
            .map(NumberValue::from)
    }
}

#[async_trait]
impl CounterStore for MemoryStore {
    fn backend(&self) -> &'static str {
        "memory"
    }

    async fn add(
        &self,
        table: &str,
        key: &str,
        attribute: &str,
        delta: i64,
    ) -> Result<UpdatedAttributes> {
        let mut record = self
            .records
            .entry((table.to_string(), key.to_string()))
            .or_default();

        let slot = record.entry(attribute.to_string()).or_insert(Decimal::ZERO);
        *slot = slot
            .checked_add(Decimal::from(delta))
            .ok_or_else(|| VisitorError::Storage(format!("numeric overflow on {attribute}")))?;

        let mut updated = UpdatedAttributes::new();
        updated.insert(attribute.to_string(), NumberValue::from(*slot));
        Ok(updated)
    }
}

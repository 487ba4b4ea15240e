//! Numeric attribute values as returned by the key-value store.
//!
//! The store hands numbers back in their textual decimal form (`"3"`,
//! `"3.0"`, `"3E0"`, ...) with arbitrary precision. Callers that need a plain
//! integer go through [`NumberValue::to_i64`].

use std::fmt;
use std::str::FromStr;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{Result, VisitorError};

/// A stored numeric attribute in wire form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NumberValue(String);

impl NumberValue {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Coerce to an integer.
    ///
    /// Plain integer text is parsed directly. Anything else is parsed as an
    /// arbitrary-precision decimal (plain or scientific notation) and
    /// truncated toward zero.
    pub fn to_i64(&self) -> Result<i64> {
        let raw = self.0.trim();
        if let Ok(n) = raw.parse::<i64>() {
            return Ok(n);
        }

        let dec = self.to_decimal()?;
        dec.trunc()
            .to_i64()
            .ok_or_else(|| VisitorError::InvalidNumber(format!("{raw} is out of integer range")))
    }

    /// Parse as a decimal.
    pub fn to_decimal(&self) -> Result<Decimal> {
        let raw = self.0.trim();
        Decimal::from_str(raw)
            .or_else(|_| Decimal::from_scientific(raw))
            .map_err(|e| VisitorError::InvalidNumber(format!("{raw:?}: {e}")))
    }
}

impl From<i64> for NumberValue {
    fn from(n: i64) -> Self {
        Self(n.to_string())
    }
}

impl From<Decimal> for NumberValue {
    fn from(d: Decimal) -> Self {
        Self(d.normalize().to_string())
    }
}

impl fmt::Display for NumberValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

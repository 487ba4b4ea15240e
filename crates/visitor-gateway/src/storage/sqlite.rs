//! SQLite-backed counter table.
//!
//! One row per `(id, attribute)`; `add` is a single
//! `INSERT .. ON CONFLICT DO UPDATE .. RETURNING` statement, so the increment
//! and the read-back are one atomic step. rusqlite is blocking, so statements
//! run on tokio's blocking pool against a mutex-guarded connection.

use std::path::Path;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use rusqlite::{params, types::Value, Connection};

use visitor_core::error::{Result, VisitorError};
use visitor_core::{CounterStore, NumberValue, UpdatedAttributes};

#[derive(Clone)]
pub struct SqliteStore {
    connection: Arc<Mutex<Connection>>,
}

impl SqliteStore {
    /// Open (or create) the database at `path` and make sure `table` exists.
    pub fn open(path: impl AsRef<Path>, table: &str) -> Result<Self> {
        let connection = Connection::open(path)
            .map_err(|e| VisitorError::Storage(format!("failed to open database: {e}")))?;
        Self::from_connection(connection, table)
    }

    pub fn in_memory(table: &str) -> Result<Self> {
        let connection = Connection::open_in_memory()
            .map_err(|e| VisitorError::Storage(format!("failed to open database: {e}")))?;
        Self::from_connection(connection, table)
    }

    fn from_connection(connection: Connection, table: &str) -> Result<Self> {
        let ddl = format!(
            "create table if not exists {} (
                id text not null,
                attribute text not null,
                value numeric not null,
                primary key (id, attribute)
            )",
            quote_ident(table)
        );
        connection
            .execute(&ddl, ())
            .map_err(|e| VisitorError::Storage(format!("failed to init table {table}: {e}")))?;
        Ok(Self {
            connection: Arc::new(Mutex::new(connection)),
        })
    }
}

#[async_trait]
impl CounterStore for SqliteStore {
    fn backend(&self) -> &'static str {
        "sqlite"
    }

    async fn add(
        &self,
        table: &str,
        key: &str,
        attribute: &str,
        delta: i64,
    ) -> Result<UpdatedAttributes> {
        let connection = Arc::clone(&self.connection);
        let sql = format!(
            "insert into {} (id, attribute, value) values (?1, ?2, ?3)
             on conflict (id, attribute) do update set value = value + excluded.value
             returning value",
            quote_ident(table)
        );
        let key = key.to_string();
        let attribute = attribute.to_string();

        tokio::task::spawn_blocking(move || {
            let connection = connection
                .lock()
                .map_err(|_| VisitorError::Storage("connection lock poisoned".into()))?;

            let value: Value = connection
                .query_row(&sql, params![key, attribute, delta], |row| row.get(0))
                .map_err(|e| VisitorError::Storage(e.to_string()))?;

            let mut updated = UpdatedAttributes::new();
            updated.insert(attribute, number_from_sql(value)?);
            Ok(updated)
        })
        .await
        .map_err(|e| VisitorError::Storage(format!("storage task failed: {e}")))?
    }
}

fn number_from_sql(value: Value) -> Result<NumberValue> {
    match value {
        Value::Integer(n) => Ok(NumberValue::from(n)),
        Value::Real(f) => Ok(NumberValue::new(f.to_string())),
        Value::Text(s) => Ok(NumberValue::new(s)),
        Value::Null | Value::Blob(_) => Err(VisitorError::InvalidNumber(
            "stored value is not numeric".into(),
        )),
    }
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

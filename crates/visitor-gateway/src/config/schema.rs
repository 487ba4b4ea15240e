use std::net::SocketAddr;

use serde::Deserialize;
use visitor_core::error::{Result, VisitorError};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VisitorConfig {
    pub version: u32,

    #[serde(default)]
    pub server: ServerSection,

    #[serde(default)]
    pub storage: StorageSection,
}

impl Default for VisitorConfig {
    fn default() -> Self {
        Self {
            version: 1,
            server: ServerSection::default(),
            storage: StorageSection::default(),
        }
    }
}

impl VisitorConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(VisitorError::UnsupportedVersion);
        }

        self.server.validate()?;
        self.storage.validate()?;

        Ok(())
    }

    /// Apply environment overrides through `lookup` (`TABLE_NAME`, `VISITOR_LISTEN`).
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(table) = lookup("TABLE_NAME").filter(|v| !v.is_empty()) {
            self.storage.table_name = table;
        }
        if let Some(listen) = lookup("VISITOR_LISTEN").filter(|v| !v.is_empty()) {
            self.server.listen = listen;
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    #[serde(default = "default_listen")]
    pub listen: String,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
        }
    }
}

impl ServerSection {
    pub fn validate(&self) -> Result<()> {
        self.listen_addr().map(|_| ())
    }

    pub fn listen_addr(&self) -> Result<SocketAddr> {
        self.listen.parse().map_err(|e| {
            VisitorError::Config(format!("server.listen must be a socket address: {e}"))
        })
    }
}

fn default_listen() -> String {
    "0.0.0.0:8080".into()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    #[default]
    Memory,
    Sqlite,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StorageSection {
    #[serde(default)]
    pub backend: StorageBackend,

    #[serde(default = "default_path")]
    pub path: String,

    #[serde(default = "default_table_name")]
    pub table_name: String,
}

impl Default for StorageSection {
    fn default() -> Self {
        Self {
            backend: StorageBackend::default(),
            path: default_path(),
            table_name: default_table_name(),
        }
    }
}

impl StorageSection {
    pub fn validate(&self) -> Result<()> {
        validate_table_name(&self.table_name)?;
        if self.backend == StorageBackend::Sqlite && self.path.trim().is_empty() {
            return Err(VisitorError::Config(
                "storage.path must not be empty for the sqlite backend".into(),
            ));
        }
        Ok(())
    }
}

/// Table names: 3..=255 characters from `[A-Za-z0-9_.-]`.
pub fn validate_table_name(name: &str) -> Result<()> {
    if !(3..=255).contains(&name.len()) {
        return Err(VisitorError::Config(
            "storage.table_name must be between 3 and 255 characters".into(),
        ));
    }
    let ok = name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'));
    if !ok {
        return Err(VisitorError::Config(format!(
            "storage.table_name {name:?} may only contain [A-Za-z0-9_.-]"
        )));
    }
    Ok(())
}

fn default_path() -> String {
    "visitor.db".into()
}
fn default_table_name() -> String {
    "visitor-count".into()
}

//! Config loader (strict parsing + environment overrides).

pub mod schema;

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use visitor_core::error::{Result, VisitorError};

pub use schema::{ServerSection, StorageBackend, StorageSection, VisitorConfig};

/// Environment variable naming the config file.
pub const CONFIG_PATH_ENV: &str = "VISITOR_CONFIG";
const DEFAULT_CONFIG_PATH: &str = "visitor.yaml";

fn parse(s: &str) -> Result<VisitorConfig> {
    serde_yaml::from_str(s).map_err(|e| VisitorError::Config(format!("invalid yaml: {e}")))
}

pub fn load_from_str(s: &str) -> Result<VisitorConfig> {
    let cfg = parse(s)?;
    cfg.validate()?;
    Ok(cfg)
}

/// Read `path` (defaults when it does not exist), apply overrides from
/// `lookup`, then validate once.
pub fn load_with<F>(path: impl AsRef<Path>, lookup: F) -> Result<VisitorConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let path = path.as_ref();
    let mut cfg = match fs::read_to_string(path) {
        Ok(s) => parse(&s)?,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::info!(path = %path.display(), "config file not found, using defaults");
            VisitorConfig::default()
        }
        Err(e) => return Err(VisitorError::Config(format!("read config failed: {e}"))),
    };

    cfg.apply_env_overrides(lookup);
    cfg.validate()?;
    Ok(cfg)
}

/// Load the process config from the file named by `VISITOR_CONFIG` (or
/// `visitor.yaml`) with process environment overrides.
pub fn load() -> Result<VisitorConfig> {
    let path = std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.into());
    load_with(path, |k| std::env::var(k).ok())
}

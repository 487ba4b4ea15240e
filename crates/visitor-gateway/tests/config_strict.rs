#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::fs;

use visitor_gateway::config::{self, StorageBackend, VisitorConfig};

#[test]
fn deny_unknown_fields_nested() {
    let bad = r#"
version: 1
storage:
  backend: memory
  tabel_name: "visits" # typo should fail
"#;

    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.code().as_str(), "CONFIG");
}

#[test]
fn ok_minimal_config() {
    let cfg = config::load_from_str("version: 1\n").expect("must parse");
    assert_eq!(cfg.version, 1);
    assert_eq!(cfg.server.listen, "0.0.0.0:8080");
    assert_eq!(cfg.storage.backend, StorageBackend::Memory);
    assert_eq!(cfg.storage.table_name, "visitor-count");
}

#[test]
fn ok_sqlite_config() {
    let ok = r#"
version: 1
server:
  listen: "127.0.0.1:9000"
storage:
  backend: sqlite
  path: "/var/lib/visitor/counter.db"
  table_name: "site.visits"
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    assert_eq!(cfg.storage.backend, StorageBackend::Sqlite);
    assert_eq!(cfg.storage.path, "/var/lib/visitor/counter.db");
    assert_eq!(cfg.storage.table_name, "site.visits");
    assert_eq!(cfg.server.listen_addr().unwrap().port(), 9000);
}

#[test]
fn rejects_unsupported_version() {
    let err = config::load_from_str("version: 2\n").expect_err("must fail");
    assert_eq!(err.code().as_str(), "UNSUPPORTED_VERSION");
}

#[test]
fn rejects_bad_listen_address() {
    let bad = r#"
version: 1
server:
  listen: "not-an-address"
"#;
    assert!(config::load_from_str(bad).is_err());
}

#[test]
fn rejects_bad_table_names() {
    for name in ["ab", "has space", "semi;colon", "quote\"d"] {
        let yaml = format!("version: 1\nstorage:\n  table_name: '{name}'\n");
        assert!(config::load_from_str(&yaml).is_err(), "{name} must be rejected");
    }
}

#[test]
fn table_name_env_override_wins() {
    let yaml = r#"
version: 1
storage:
  table_name: "from-file"
"#;
    let mut cfg = config::load_from_str(yaml).unwrap();
    assert_eq!(cfg.storage.table_name, "from-file");

    cfg.apply_env_overrides(|k| match k {
        "TABLE_NAME" => Some("prod-visits".to_string()),
        _ => None,
    });
    assert_eq!(cfg.storage.table_name, "prod-visits");
    assert_eq!(cfg.server.listen, "0.0.0.0:8080");
}

#[test]
fn empty_env_values_are_ignored() {
    let mut cfg = VisitorConfig::default();
    cfg.apply_env_overrides(|_| Some(String::new()));
    assert_eq!(cfg.storage.table_name, "visitor-count");
    cfg.validate().unwrap();
}

#[test]
fn load_with_reads_file_then_overrides() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("visitor.yaml");
    fs::write(
        &path,
        "version: 1\nserver:\n  listen: \"127.0.0.1:9000\"\nstorage:\n  table_name: \"from-file\"\n",
    )
    .unwrap();

    let cfg = config::load_with(&path, |k| match k {
        "TABLE_NAME" => Some("from-env".to_string()),
        _ => None,
    })
    .unwrap();
    assert_eq!(cfg.storage.table_name, "from-env");
    assert_eq!(cfg.server.listen, "127.0.0.1:9000");
}

#[test]
fn load_with_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = config::load_with(dir.path().join("absent.yaml"), |_| None).unwrap();
    assert_eq!(cfg.version, 1);
    assert_eq!(cfg.storage.backend, StorageBackend::Memory);
    assert_eq!(cfg.storage.table_name, "visitor-count");
}

#[test]
fn env_override_repairs_bad_file_table_name() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("visitor.yaml");
    fs::write(&path, "version: 1\nstorage:\n  table_name: \"x\"\n").unwrap();

    assert!(config::load_with(&path, |_| None).is_err());

    let cfg = config::load_with(&path, |k| match k {
        "TABLE_NAME" => Some("visits-ok".to_string()),
        _ => None,
    })
    .unwrap();
    assert_eq!(cfg.storage.table_name, "visits-ok");
}

#[test]
fn load_with_rejects_unknown_fields_in_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("visitor.yaml");
    fs::write(&path, "version: 1\nstorag: {}\n").unwrap();

    let err = config::load_with(&path, |_| None).expect_err("must fail");
    assert_eq!(err.code().as_str(), "CONFIG");
}

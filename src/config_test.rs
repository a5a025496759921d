use std::collections::HashMap;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn from_lookup_uses_defaults() {
    let cfg = ShellConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(cfg.host, DEFAULT_HOST);
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.dist_dir, PathBuf::from(DEFAULT_DIST_DIR));
    assert_eq!(cfg.bind_addr(), "0.0.0.0:3000");
}

#[test]
fn from_lookup_reads_overrides() {
    let cfg = ShellConfig::from_lookup(lookup(&[("HOST", "127.0.0.1"), ("PORT", " 8080 "), ("DIST_DIR", "/srv/app")]))
        .unwrap();
    assert_eq!(cfg.bind_addr(), "127.0.0.1:8080");
    assert_eq!(cfg.dist_dir, PathBuf::from("/srv/app"));
}

#[test]
fn from_lookup_rejects_invalid_port() {
    let err = ShellConfig::from_lookup(lookup(&[("PORT", "eighty")])).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidPort { ref value, .. } if value == "eighty"));
    assert!(err.to_string().starts_with("invalid PORT \"eighty\""));
}

#[test]
fn from_lookup_rejects_out_of_range_port() {
    let err = ShellConfig::from_lookup(lookup(&[("PORT", "70000")])).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidPort { .. }));
}

#[test]
fn check_dist_requires_index_html() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = ShellConfig { host: DEFAULT_HOST.to_owned(), port: DEFAULT_PORT, dist_dir: dir.path().to_path_buf() };
    assert!(matches!(cfg.check_dist(), Err(ConfigError::MissingIndex(_))));

    std::fs::write(dir.path().join("index.html"), "<html></html>").unwrap();
    assert!(cfg.check_dist().is_ok());
}

use std::collections::HashMap;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn from_lookup_defaults() {
    let cfg = HostConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(cfg.addr, "0.0.0.0:3000".parse().unwrap());
    assert_eq!(cfg.site_root, None);
}

#[test]
fn from_lookup_parses_overrides() {
    let cfg = HostConfig::from_lookup(lookup(&[("HOST", "127.0.0.1"), ("PORT", "8080"), ("SITE_ROOT", "/srv/site")]))
        .unwrap();
    assert_eq!(cfg.addr, "127.0.0.1:8080".parse().unwrap());
    assert_eq!(cfg.site_root, Some(PathBuf::from("/srv/site")));
}

#[test]
fn from_lookup_blank_values_use_defaults() {
    let cfg = HostConfig::from_lookup(lookup(&[("HOST", "  "), ("PORT", "")])).unwrap();
    assert_eq!(cfg.addr.port(), DEFAULT_PORT);
}

#[test]
fn from_lookup_invalid_port_errors() {
    let err = HostConfig::from_lookup(lookup(&[("PORT", "http")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidPort("http".to_owned()));
    assert_eq!(err.to_string(), "invalid PORT: http");
}

#[test]
fn from_lookup_out_of_range_port_errors() {
    assert!(matches!(
        HostConfig::from_lookup(lookup(&[("PORT", "70000")])),
        Err(ConfigError::InvalidPort(_))
    ));
}

#[test]
fn from_lookup_invalid_host_errors() {
    let err = HostConfig::from_lookup(lookup(&[("HOST", "not an ip")])).unwrap_err();
    assert!(err.to_string().contains("invalid HOST"));
}

use std::collections::HashMap;
use std::net::Ipv4Addr;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

fn fallback() -> SocketAddr {
    SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 3000)
}

// =============================================================================
// from_lookup
// =============================================================================

#[test]
fn from_lookup_without_overrides_is_default() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[])).unwrap();
    assert_eq!(cfg, ServerConfig::default());
}

#[test]
fn from_lookup_parses_overrides() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[
        (HOST_VAR, "0.0.0.0"),
        (PORT_VAR, " 8081 "),
        (SITE_ROOT_VAR, "/srv/arena/site"),
    ]))
    .unwrap();
    assert_eq!(cfg.host, Some(IpAddr::V4(Ipv4Addr::UNSPECIFIED)));
    assert_eq!(cfg.port, Some(8081));
    assert_eq!(cfg.site_root, Some(PathBuf::from("/srv/arena/site")));
}

#[test]
fn from_lookup_blank_values_are_unset() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[(HOST_VAR, ""), (PORT_VAR, "   "), (SITE_ROOT_VAR, "")])).unwrap();
    assert_eq!(cfg, ServerConfig::default());
}

#[test]
fn from_lookup_invalid_port_errors() {
    let err = ServerConfig::from_lookup(lookup_from(&[(PORT_VAR, "70000")])).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidPort { var: PORT_VAR, ref value } if value == "70000"));
    assert!(err.to_string().contains("ARENA_PORT"));
}

#[test]
fn from_lookup_non_numeric_port_errors() {
    let err = ServerConfig::from_lookup(lookup_from(&[(PORT_VAR, "http")])).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidPort { .. }));
}

#[test]
fn from_lookup_invalid_host_errors() {
    let err = ServerConfig::from_lookup(lookup_from(&[(HOST_VAR, "localhost")])).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidHost { var: HOST_VAR, ref value } if value == "localhost"));
    assert!(err.to_string().contains("not an IP address"));
}

// =============================================================================
// resolve_addr
// =============================================================================

#[test]
fn resolve_addr_keeps_fallback_without_overrides() {
    assert_eq!(ServerConfig::default().resolve_addr(fallback()), fallback());
}

#[test]
fn resolve_addr_overrides_port_only() {
    let cfg = ServerConfig { port: Some(9000), ..ServerConfig::default() };
    assert_eq!(cfg.resolve_addr(fallback()), SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 9000));
}

#[test]
fn resolve_addr_overrides_host_and_port() {
    let cfg = ServerConfig { host: Some(IpAddr::V4(Ipv4Addr::UNSPECIFIED)), port: Some(80), site_root: None };
    assert_eq!(cfg.resolve_addr(fallback()), SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), 80));
}

// =============================================================================
// from_env — unique-looking values, cleared afterwards.
// =============================================================================

#[test]
fn from_env_reads_process_environment() {
    unsafe {
        std::env::set_var(PORT_VAR, "4321");
        std::env::remove_var(HOST_VAR);
        std::env::remove_var(SITE_ROOT_VAR);
    }

    let cfg = ServerConfig::from_env().unwrap();
    assert_eq!(cfg.port, Some(4321));
    assert_eq!(cfg.host, None);

    unsafe { std::env::remove_var(PORT_VAR) };
}

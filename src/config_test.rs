use super::*;

#[test]
fn defaults_when_unset() {
    let cfg = HostConfig::from_values(None, None).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.bind_addr, DEFAULT_BIND_ADDR);
    assert_eq!(cfg.socket_addr().to_string(), "0.0.0.0:3000");
}

#[test]
fn blank_values_fall_back_to_defaults() {
    let cfg = HostConfig::from_values(Some("  "), Some("")).unwrap();
    assert_eq!(cfg, HostConfig { bind_addr: DEFAULT_BIND_ADDR, port: DEFAULT_PORT });
}

#[test]
fn parses_overrides() {
    let cfg = HostConfig::from_values(Some("8080"), Some("127.0.0.1")).unwrap();
    assert_eq!(cfg.socket_addr().to_string(), "127.0.0.1:8080");
}

#[test]
fn parses_ipv6_bind_addr() {
    let cfg = HostConfig::from_values(Some("9000"), Some("::1")).unwrap();
    assert_eq!(cfg.socket_addr().to_string(), "[::1]:9000");
}

#[test]
fn rejects_invalid_port() {
    assert_eq!(HostConfig::from_values(Some("http"), None), Err(ConfigError::InvalidPort("http".into())));
    assert_eq!(HostConfig::from_values(Some("70000"), None), Err(ConfigError::InvalidPort("70000".into())));
}

#[test]
fn rejects_invalid_bind_addr() {
    assert_eq!(
        HostConfig::from_values(None, Some("localhost")),
        Err(ConfigError::InvalidBindAddr("localhost".into()))
    );
}

#[test]
fn from_env_reads_process_environment() {
    unsafe {
        std::env::set_var("PORT", "4321");
        std::env::remove_var("BIND_ADDR");
    }
    let cfg = HostConfig::from_env().unwrap();
    assert_eq!(cfg.port, 4321);
    unsafe { std::env::remove_var("PORT") };
}

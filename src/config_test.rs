use super::*;

// =============================================================================
// parse_port
// =============================================================================

#[test]
fn parse_port_defaults_when_unset() {
    assert_eq!(parse_port(None), Ok(DEFAULT_PORT));
}

#[test]
fn parse_port_defaults_when_blank() {
    assert_eq!(parse_port(Some("  ")), Ok(DEFAULT_PORT));
}

#[test]
fn parse_port_accepts_valid_value() {
    assert_eq!(parse_port(Some("3000")), Ok(3000));
    assert_eq!(parse_port(Some(" 443 ")), Ok(443));
}

#[test]
fn parse_port_rejects_garbage() {
    assert_eq!(parse_port(Some("http")), Err(ConfigError::InvalidPort("http".to_owned())));
}

#[test]
fn parse_port_rejects_out_of_range() {
    assert_eq!(parse_port(Some("70000")), Err(ConfigError::InvalidPort("70000".to_owned())));
}

#[test]
fn config_error_message_names_value() {
    assert_eq!(ConfigError::InvalidPort("x".to_owned()).to_string(), "invalid PORT value: \"x\"");
}

// =============================================================================
// resolve_site_dir
// =============================================================================

#[test]
fn resolve_site_dir_uses_override() {
    assert_eq!(resolve_site_dir(Some("/srv/endaloop")), PathBuf::from("/srv/endaloop"));
}

#[test]
fn resolve_site_dir_defaults_to_client_dist() {
    let dir = resolve_site_dir(None);
    assert!(dir.ends_with("client/dist"));
    assert_eq!(resolve_site_dir(Some("")), dir);
}

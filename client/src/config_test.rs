use super::*;

#[test]
fn default_config_uses_webhook_and_project() {
    let config = WaitlistConfig::default();
    assert_eq!(config.endpoint, DEFAULT_WAITLIST_ENDPOINT);
    assert_eq!(config.project, "EndALoop");
    assert_eq!(config.error_reset_delay, Duration::from_secs(4));
}

#[test]
fn resolve_endpoint_prefers_override() {
    assert_eq!(
        resolve_endpoint(Some("https://example.test/hook")),
        "https://example.test/hook"
    );
}

#[test]
fn resolve_endpoint_trims_override() {
    assert_eq!(
        resolve_endpoint(Some("  https://example.test/hook \n")),
        "https://example.test/hook"
    );
}

#[test]
fn resolve_endpoint_falls_back_when_missing_or_blank() {
    assert_eq!(resolve_endpoint(None), DEFAULT_WAITLIST_ENDPOINT);
    assert_eq!(resolve_endpoint(Some("")), DEFAULT_WAITLIST_ENDPOINT);
    assert_eq!(resolve_endpoint(Some("   ")), DEFAULT_WAITLIST_ENDPOINT);
}

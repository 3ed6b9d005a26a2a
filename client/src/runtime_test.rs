use super::*;

#[cfg(not(feature = "csr"))]
#[test]
fn system_clock_emits_utc_iso8601() {
    let stamp = SystemClock.now_iso8601();
    assert!(stamp.contains('T'), "{stamp}");
    assert!(stamp.ends_with('Z'), "{stamp}");
    assert!(stamp.starts_with("20"), "{stamp}");
}

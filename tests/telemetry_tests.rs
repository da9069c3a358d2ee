use timeline_chart::telemetry::init_default_tracing;

#[cfg(not(feature = "telemetry"))]
#[test]
fn init_is_a_noop_without_the_telemetry_feature() {
    assert!(!init_default_tracing());
}

#[cfg(feature = "telemetry")]
#[test]
fn init_installs_a_subscriber_exactly_once_per_process() {
    assert!(init_default_tracing());
    // The global subscriber is already set; a second call must decline
    // instead of panicking or replacing it.
    assert!(!init_default_tracing());
}

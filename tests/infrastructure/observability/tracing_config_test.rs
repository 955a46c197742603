use speech_relay::infrastructure::observability::TracingConfig;

#[test]
fn given_default_config_when_created_then_uses_plain_text_for_local() {
    let config = TracingConfig::default();
    assert!(!config.json_format);
    assert_eq!(config.environment, "local");
}

#[test]
fn given_explicit_values_when_created_then_fields_are_kept() {
    let config = TracingConfig::new("prod", true);
    assert!(config.json_format);
    assert_eq!(config.environment, "prod");
}

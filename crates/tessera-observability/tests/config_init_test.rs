use tessera_core::TesseraConfig;
use tessera_observability::try_init_from_config;

#[test]
fn observability_section_installs_the_subscriber_once() {
    let config = TesseraConfig::from_toml("[observability]\nlog_level = \"debug\"\njson = false").unwrap();
    assert_eq!(config.observability.log_level, "debug");
    assert!(!config.observability.json);

    assert!(try_init_from_config(&config.observability).is_ok());
    assert!(tracing::enabled!(tracing::Level::DEBUG) || std::env::var("TESSERA_LOG").is_ok());
    assert!(try_init_from_config(&config.observability).is_err());
}

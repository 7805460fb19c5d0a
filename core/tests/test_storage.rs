use barometer_core::storage::parse_config;
use barometer_core::{load_config, save_config, ProcessorConfig};
use std::fs;

#[test]
fn test_save_and_load_config() {
    let path = "tests/tmp_config_roundtrip.json";
    let _ = fs::remove_file(path);

    let cfg = ProcessorConfig {
        interval_ms: 500,
        smoothing_factor: 0.25,
        local_pressure_hpa: 1008.0,
    };
    save_config(&cfg, path).expect("save_config failed");
    let loaded = load_config(path).expect("load_config failed");
    assert_eq!(loaded, cfg);

    fs::remove_file(path).ok();
}

#[test]
fn test_missing_file_gives_default() {
    let cfg = load_config("tests/does_not_exist.json").unwrap();
    assert_eq!(cfg, ProcessorConfig::default());
    assert_eq!(cfg.interval_ms, 200);
    assert_eq!(cfg.smoothing_factor, 0.3);
}

#[test]
fn test_partial_and_aliased_fields() {
    let cfg = parse_config(r#"{ "intervalMillis": 1000, "smoothingFactor": 0.5 }"#).unwrap();
    assert_eq!(cfg.interval_ms, 1000);
    assert_eq!(cfg.smoothing_factor, 0.5);
    assert_eq!(cfg.local_pressure_hpa, 1013.25);
}

#[test]
fn test_bad_config_reports_path() {
    let err = parse_config(r#"{ "interval_ms": "fast" }"#).unwrap_err();
    assert!(err.to_string().contains("interval_ms"), "{err}");

    let err = parse_config(r#"{ "smoothing_factor": 0.0 }"#).unwrap_err();
    assert!(err.to_string().contains("smoothing_factor"), "{err}");
}

#[test]
fn test_save_rejects_invalid_config() {
    let path = "tests/tmp_config_invalid.json";
    let cfg = ProcessorConfig::new(-1, 0.3);
    assert!(save_config(&cfg, path).is_err());
    assert!(!std::path::Path::new(path).exists());
}

#[test]
fn test_trailing_data_is_rejected() {
    assert!(parse_config(r#"{ "interval_ms": 100 } junk"#).is_err());
    // andre objekt (med ugyldig intervall) skal ikke ignoreres
    assert!(parse_config(r#"{ "interval_ms": 100 }{ "interval_ms": -1 }"#).is_err());
    // whitespace etter objektet er greit
    assert_eq!(parse_config("{ \"interval_ms\": 100 }\n\n").unwrap().interval_ms, 100);
}

#[test]
fn test_unreadable_path_is_an_error() {
    // en katalog finnes, men kan ikke leses som fil → ingen stille default
    assert!(load_config("tests").is_err());
}

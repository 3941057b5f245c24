//! Tests for config functionality.

use crate::config::{Config, MeshResolution, Registration, SurfaceRegistration};
use crate::error::CiftifyError;

#[test]
fn test_bundled_config() {
    let config = Config::bundled().unwrap();

    assert_eq!(config.high_res.as_str(), "164");
    assert_eq!(config.low_res_values(), vec!["32"]);
    assert_eq!(config.grayord_res, vec![2]);
    assert_eq!(config.registration, Registration::default());
    assert!(config.extra.contains_key("FSL_fnirt"));
}

#[test]
fn test_parse_minimal_yaml() {
    let yaml = r#"
high_res: "164"
low_res: ["32"]
grayord_res: [2]
"#;
    let config = Config::from_yaml(yaml).unwrap();

    assert_eq!(config.high_res, MeshResolution::from("164"));
    assert_eq!(config.registration.src_dir, "T1w");
    assert_eq!(config.registration.dest_dir, "MNINonLinear");
    assert_eq!(config.registration.xfms_dir, "MNINonLinear/xfms");
    assert!(config.extra.is_empty());
}

#[test]
fn test_parse_bare_numbers() {
    let yaml = r#"
high_res: 164
low_res: [32, 59]
grayord_res: [1, 2]
"#;
    let config = Config::from_yaml(yaml).unwrap();

    assert_eq!(config.high_res.as_str(), "164");
    assert_eq!(config.low_res_values(), vec!["32", "59"]);
    assert_eq!(config.grayord_res, vec![1, 2]);
}

#[test]
fn test_parse_partial_registration() {
    let yaml = r#"
high_res: "164"
low_res: ["32"]
grayord_res: [2]
registration:
  src_dir: native
"#;
    let config = Config::from_yaml(yaml).unwrap();

    assert_eq!(config.registration.src_dir, "native");
    assert_eq!(config.registration.dest_dir, "MNINonLinear");
}

#[test]
fn test_parse_yaml_with_unknown_fields() {
    let yaml = r#"
high_res: "164"
low_res: ["32"]
grayord_res: [2]
dscalars:
  thickness:
    mapname: thickness
"#;
    let config = Config::from_yaml(yaml).unwrap();
    assert!(config.extra.contains_key("dscalars"));

    let round_trip = Config::from_yaml(&config.to_yaml().unwrap()).unwrap();
    assert_eq!(round_trip, config);
}

#[test]
fn test_missing_required_key_is_config_error() {
    let yaml = r#"
high_res: "164"
low_res: ["32"]
"#;
    let err = Config::from_yaml(yaml).unwrap_err();
    assert!(matches!(err, CiftifyError::ConfigError(_)));
    assert!(err.to_string().contains("grayord_res"));
}

#[test]
fn test_unparseable_yaml_is_config_error() {
    let err = Config::from_yaml("high_res: [unterminated").unwrap_err();
    assert!(matches!(err, CiftifyError::ConfigError(_)));
}

#[test]
fn test_validate_non_numeric_high_res() {
    let yaml = r#"
high_res: "high"
low_res: ["32"]
grayord_res: [2]
"#;
    let err = Config::from_yaml(yaml).unwrap_err();
    assert!(err.to_string().contains("high_res"));
}

#[test]
fn test_validate_empty_low_res() {
    let yaml = r#"
high_res: "164"
low_res: []
grayord_res: [2]
"#;
    let err = Config::from_yaml(yaml).unwrap_err();
    assert!(err.to_string().contains("low_res"));
}

#[test]
fn test_validate_zero_grayord_res() {
    let yaml = r#"
high_res: "164"
low_res: ["32"]
grayord_res: [0]
"#;
    let err = Config::from_yaml(yaml).unwrap_err();
    assert!(err.to_string().contains("grayord_res"));
}

#[test]
fn test_config_load_from_file() {
    use std::io::Write;
    use tempfile::NamedTempFile;

    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "high_res: \"164\"").unwrap();
    writeln!(file, "low_res: [\"32\"]").unwrap();
    writeln!(file, "grayord_res: [1]").unwrap();

    let config = Config::load(file.path()).unwrap();
    assert_eq!(config.grayord_res, vec![1]);
}

#[test]
fn test_config_load_missing_file() {
    let result = Config::load("/nonexistent/path/config.yaml");
    let err = result.unwrap_err();
    assert!(matches!(err, CiftifyError::ConfigError(_)));
    assert!(err.to_string().contains("failed to read config file"));
}

#[test]
fn test_config_load_names_bad_file() {
    use std::io::Write;
    use tempfile::NamedTempFile;

    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "high_res: \"164\"").unwrap();

    let err = Config::load(file.path()).unwrap_err();
    let message = err.to_string();
    assert!(message.contains(&file.path().display().to_string()));
}

#[test]
fn test_surface_registration_from_str() {
    assert_eq!(
        SurfaceRegistration::from_str("MSMSulc"),
        Some(SurfaceRegistration::MsmSulc)
    );
    assert_eq!(
        SurfaceRegistration::from_str("FS"),
        Some(SurfaceRegistration::FreeSurfer)
    );
    assert_eq!(SurfaceRegistration::from_str("msmsulc"), None);
    assert_eq!(SurfaceRegistration::default().as_str(), "MSMSulc");
}

use nova_prompts::{AppConfig, DEFAULT_MODEL_ID, DEFAULT_REGION};
use std::collections::HashMap;
use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

fn env(pairs: &[(&str, &str)]) -> Option<HashMap<String, String>> {
    Some(
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
    )
}

fn config_file(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .expect("temp file");
    file.write_all(contents.as_bytes()).expect("write config");
    file
}

#[test]
fn test_defaults_without_sources() {
    let file = config_file("");
    let config = AppConfig::load_with_env(Some(file.path()), env(&[])).expect("loads");

    assert_eq!(config, AppConfig::default());
    assert_eq!(config.region(), DEFAULT_REGION);
    assert_eq!(config.model_id(), DEFAULT_MODEL_ID);
    assert_eq!(config.timeout_secs(), &None);
}

#[test]
fn test_file_values() {
    let file = config_file(
        r#"
region = "us-east-1"
model_id = "amazon.nova-pro-v1:0"
timeout_secs = 90
prompts_dir = "/srv/prompts"
"#,
    );
    let config = AppConfig::load_with_env(Some(file.path()), env(&[])).expect("loads");

    assert_eq!(config.region(), "us-east-1");
    assert_eq!(config.model_id(), "amazon.nova-pro-v1:0");
    assert_eq!(config.timeout_secs(), &Some(90));
    assert_eq!(config.prompts_dir(), &Some(PathBuf::from("/srv/prompts")));
}

#[test]
fn test_environment_overrides_file() {
    let file = config_file("region = \"us-east-1\"\ntimeout_secs = 90\n");
    let config = AppConfig::load_with_env(
        Some(file.path()),
        env(&[("NOVA_REGION", "eu-central-1"), ("NOVA_TIMEOUT_SECS", "15")]),
    )
    .expect("loads");

    assert_eq!(config.region(), "eu-central-1");
    assert_eq!(config.timeout_secs(), &Some(15));
}

#[test]
fn test_flags_override_everything() {
    let file = config_file("region = \"us-east-1\"\n");
    let config = AppConfig::load_with_env(Some(file.path()), env(&[("NOVA_MODEL_ID", "from-env")]))
        .expect("loads")
        .with_region(Some("ap-northeast-1".to_string()))
        .with_model_id(Some("from-flag".to_string()))
        .with_model_id(None);

    assert_eq!(config.region(), "ap-northeast-1");
    assert_eq!(config.model_id(), "from-flag");
}

#[test]
fn test_missing_explicit_file_is_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let missing = dir.path().join("nope.toml");
    assert!(AppConfig::load_with_env(Some(&missing), env(&[])).is_err());
}

#[test]
fn test_rejects_zero_timeout() {
    let file = config_file("timeout_secs = 0\n");
    let err = AppConfig::load_with_env(Some(file.path()), env(&[])).expect_err("invalid");
    assert!(err.message.contains("timeout_secs"));
}

#[test]
fn test_bedrock_config_from_settings() {
    let file = config_file(
        "region = \"us-east-1\"\nendpoint = \"http://localhost:4566/\"\ntimeout_secs = 5\n",
    );
    let config = AppConfig::load_with_env(Some(file.path()), env(&[])).expect("loads");
    let bedrock = config
        .bedrock_config_with_token(Some("key".to_string()))
        .expect("valid");

    assert_eq!(bedrock.region(), "us-east-1");
    assert_eq!(bedrock.timeout(), &Some(Duration::from_secs(5)));
    assert!(bedrock.has_credentials());
    assert_eq!(
        bedrock.converse_url(config.model_id()),
        "http://localhost:4566/model/amazon.nova-2-lite-v1%3A0/converse"
    );
}

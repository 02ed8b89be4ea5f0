/*
 * @Author       : 老董
 * @Date         : 2026-10-19
 * @Description  : 配置加载单元测试
 */

use crate::config::{ConfigError, ConfigFormat, is_empty_document, load_config, parse_config_str};
use serde_json::json;
use std::io::Write;
use std::path::Path;

const YAML_CONFIG: &str = "\
input_size: 10
layers:
  - k: 3
    name: conv1
  - type: pool
    k: 2
";

const JSON_CONFIG: &str = r#"{"input_size": 10, "layers": [{"k": 3, "name": "conv1"}, {"type": "pool", "k": 2}]}"#;

fn expected_document() -> serde_json::Value {
    json!({"input_size": 10, "layers": [{"k": 3, "name": "conv1"}, {"type": "pool", "k": 2}]})
}

#[test]
fn test_format_from_path() {
    assert_eq!(ConfigFormat::from_path(Path::new("net.yaml")), ConfigFormat::Yaml);
    assert_eq!(ConfigFormat::from_path(Path::new("net.YML")), ConfigFormat::Yaml);
    assert_eq!(ConfigFormat::from_path(Path::new("dir/net.json")), ConfigFormat::Json);
    assert_eq!(ConfigFormat::from_path(Path::new("net.txt")), ConfigFormat::Unknown);
    assert_eq!(ConfigFormat::from_path(Path::new("net")), ConfigFormat::Unknown);
}

#[test]
fn test_parse_yaml_and_json() -> Result<(), ConfigError> {
    assert_eq!(parse_config_str(YAML_CONFIG, ConfigFormat::Yaml)?, expected_document());
    assert_eq!(parse_config_str(JSON_CONFIG, ConfigFormat::Json)?, expected_document());
    Ok(())
}

#[test]
fn test_unknown_format_accepts_both() -> Result<(), ConfigError> {
    assert_eq!(parse_config_str(YAML_CONFIG, ConfigFormat::Unknown)?, expected_document());
    assert_eq!(parse_config_str(JSON_CONFIG, ConfigFormat::Unknown)?, expected_document());
    Ok(())
}

#[test]
fn test_json_format_rejects_yaml() {
    let result = parse_config_str(YAML_CONFIG, ConfigFormat::Json);
    assert!(matches!(
        result,
        Err(ConfigError::Parse {
            format: ConfigFormat::Json,
            ..
        })
    ));
}

#[test]
fn test_unknown_format_reports_both_failures() {
    let result = parse_config_str("[1, 2", ConfigFormat::Unknown);
    match result {
        Err(ConfigError::Parse { format, message }) => {
            assert_eq!(format, ConfigFormat::Unknown);
            assert!(message.contains("YAML"), "{message}");
            assert!(message.contains("JSON"), "{message}");
        }
        other => panic!("预期解析错误，实际得到 {other:?}"),
    }
}

#[test]
fn test_empty_document_is_null() -> Result<(), ConfigError> {
    assert!(parse_config_str("", ConfigFormat::Yaml)?.is_null());
    assert!(parse_config_str("  \n", ConfigFormat::Unknown)?.is_null());
    Ok(())
}

#[test]
fn test_load_config_from_file() -> Result<(), ConfigError> {
    let mut file = tempfile::Builder::new().suffix(".yaml").tempfile()?;
    file.write_all(YAML_CONFIG.as_bytes())?;
    assert_eq!(load_config(Some(file.path()))?, expected_document());

    let mut file = tempfile::Builder::new().suffix(".cfg").tempfile()?;
    file.write_all(JSON_CONFIG.as_bytes())?;
    assert_eq!(load_config(Some(file.path()))?, expected_document());
    Ok(())
}

#[test]
fn test_load_config_missing_file() {
    let result = load_config(Some(Path::new("/nonexistent/cnn_calc/net.yaml")));
    assert!(matches!(result, Err(ConfigError::Io(_))));
}

#[test]
fn test_empty_documents() -> Result<(), ConfigError> {
    for text in ["", "null", "[]", "{}", "false", "0", "''"] {
        let document = parse_config_str(text, ConfigFormat::Unknown)?;
        assert!(is_empty_document(&document), "{text:?} 应视为空文档");
    }
    for text in ["- k: 3", "input_size: 8", "{layers: []}", "1"] {
        let document = parse_config_str(text, ConfigFormat::Unknown)?;
        assert!(!is_empty_document(&document), "{text:?} 不应视为空文档");
    }
    Ok(())
}

/*
 * @Author       : 老董
 * @Date         : 2026-10-19
 * @Description  : 端到端测试 - 从 YAML/JSON 配置文本到层链结果与表格
 *                 网络结构：Input(224) -> Conv7/2 -> Pool2 -> Conv3 -> Conv3(valid) -> Conv1(p=0)
 */
use cnn_calc::{
    CalcError, ConfigError, ConfigFormat, NetworkConfig, TableOptions, parse_config_str,
    render_table,
};

const STEM_YAML: &str = "\
input_size: 224
layers:
  - {k: 7, s: 2, name: stem}
  - {type: Pool, kernel: 2}
  - {kernel_size: 3}
  - {k: 3, padding: valid}
  - {k: 1, p: 0}
";

const STEM_JSON: &str = r#"[
    {"k": 7, "s": 2, "name": "stem"},
    {"type": "pool", "kernel": 2},
    {"kernel_size": 3},
    {"k": 3, "padding": "valid"},
    {"k": 1, "p": 0}
]"#;

/// (output_size, receptive_field_size, receptive_field_center, jump)
const STEM_EXPECTED: &[(i64, i64, f64, i64)] = &[
    (224, 1, 0.5, 1),
    (112, 7, 0.5, 2),
    (56, 9, -1.5, 4),
    (56, 17, -1.5, 4),
    (54, 25, 2.5, 4),
    (54, 25, 2.5, 4),
];

fn check_stem(network: &NetworkConfig) -> Result<(), CalcError> {
    let evaluated = network.evaluate()?;
    assert_eq!(evaluated.len(), STEM_EXPECTED.len());
    for (layer, &(size, rf, center, jump)) in evaluated.iter().zip(STEM_EXPECTED) {
        assert_eq!(layer.state.output_size, Some(size));
        assert_eq!(layer.state.receptive_field_size, rf);
        assert!((layer.state.receptive_field_center - center).abs() < 1e-12);
        assert_eq!(layer.state.jump, jump);
    }
    Ok(())
}

#[test]
fn test_yaml_mapping_config() -> Result<(), ConfigError> {
    let document = parse_config_str(STEM_YAML, ConfigFormat::Yaml)?;
    let network = NetworkConfig::from_value(&document, None)?;
    check_stem(&network)?;
    Ok(())
}

#[test]
fn test_json_list_config_with_external_input_size() -> Result<(), ConfigError> {
    let document = parse_config_str(STEM_JSON, ConfigFormat::Unknown)?;
    let network = NetworkConfig::from_value(&document, Some(224))?;
    check_stem(&network)?;
    Ok(())
}

#[test]
fn test_render_stem_table() -> Result<(), ConfigError> {
    let document = parse_config_str(STEM_YAML, ConfigFormat::Yaml)?;
    let layers = NetworkConfig::from_value(&document, None)?.evaluate()?;
    let table = render_table(&layers, &TableOptions::default());

    let lines: Vec<&str> = table.lines().collect();
    assert_eq!(lines.len(), layers.len() + 3);
    assert!(lines[0].starts_with("Layer "));
    assert!(lines[2].starts_with("Input "));
    assert!(lines[3].starts_with("Conv stem [kernel_size=7, stride=2, padding=3(same)] |"));
    assert!(lines[4].starts_with("Pool [kernel_size=2, stride=2, padding=1(same)] "));
    assert!(lines[6].starts_with("Conv [kernel_size=3, stride=1, padding=0(valid)] "));
    assert!(lines[7].starts_with("Conv [kernel_size=1, stride=1, padding=0] "));
    assert!(lines[7].contains("|      54      |        25       "));
    assert_eq!(lines[1], lines[8]);
    assert!(lines[1].chars().all(|c| c == '-'));
    Ok(())
}

#[test]
fn test_unknown_layer_type_surfaces() -> Result<(), ConfigError> {
    let document = parse_config_str("[{type: dense, k: 3}]", ConfigFormat::Yaml)?;
    let result = NetworkConfig::from_value(&document, Some(10));
    assert_eq!(result, Err(CalcError::UnknownLayerType("dense".to_string())));
    Ok(())
}

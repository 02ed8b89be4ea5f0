/*
 * @Author       : 老董
 * @Date         : 2026-10-19
 * @Description  : 配置文件加载（YAML / JSON）
 *
 * 格式按扩展名判定；标准输入或无法识别的扩展名先按 YAML 解析，失败再按 JSON 解析。
 * 两种格式都统一解析为 serde_json::Value，便于后续按键取值。
 */

use super::ConfigError;
use serde_json::Value;
use std::fmt;
use std::io::Read;
use std::path::Path;

/// 配置文件格式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Yaml,
    Json,
    /// 未知格式：依次尝试 YAML、JSON
    Unknown,
}

impl ConfigFormat {
    /// 按扩展名判定格式（不区分大小写）
    pub fn from_path(path: &Path) -> Self {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_lowercase);
        match extension.as_deref() {
            Some("yaml" | "yml") => Self::Yaml,
            Some("json") => Self::Json,
            _ => Self::Unknown,
        }
    }
}

impl fmt::Display for ConfigFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Yaml => "YAML",
            Self::Json => "JSON",
            Self::Unknown => "YAML/JSON",
        };
        write!(f, "{name}")
    }
}

/// 加载配置文档
///
/// # 参数
/// - `path`: 配置文件路径；为 None 时从标准输入读取
///
/// # 返回
/// 解析后的文档；空文档返回`Value::Null`
pub fn load_config(path: Option<&Path>) -> Result<Value, ConfigError> {
    match path {
        Some(path) => {
            let format = ConfigFormat::from_path(path);
            log::debug!("从{}加载配置，格式：{format}", path.display());
            let text = std::fs::read_to_string(path)?;
            parse_config_str(&text, format)
        }
        None => {
            log::debug!("从标准输入加载配置");
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            parse_config_str(&text, ConfigFormat::Unknown)
        }
    }
}

/// 按指定格式解析配置文本
pub fn parse_config_str(text: &str, format: ConfigFormat) -> Result<Value, ConfigError> {
    if text.trim().is_empty() {
        return Ok(Value::Null);
    }

    match format {
        ConfigFormat::Yaml => parse_yaml(text),
        ConfigFormat::Json => parse_json(text),
        ConfigFormat::Unknown => parse_yaml(text).or_else(|yaml_error| {
            log::debug!("按 YAML 解析失败（{yaml_error}），改按 JSON 解析");
            parse_json(text).map_err(|json_error| ConfigError::Parse {
                format: ConfigFormat::Unknown,
                message: format!("{yaml_error}; {json_error}"),
            })
        }),
    }
}

/// 文档是否为空（没有可计算的内容）
///
/// `null`、`false`、`0`、空字符串、空列表与空映射都视为空文档。
pub fn is_empty_document(document: &Value) -> bool {
    match document {
        Value::Null => true,
        Value::Bool(flag) => !flag,
        Value::Number(number) => number.as_f64() == Some(0.0),
        Value::String(text) => text.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}

fn parse_yaml(text: &str) -> Result<Value, ConfigError> {
    serde_yaml::from_str(text).map_err(|e| ConfigError::Parse {
        format: ConfigFormat::Yaml,
        message: e.to_string(),
    })
}

fn parse_json(text: &str) -> Result<Value, ConfigError> {
    serde_json::from_str(text).map_err(|e| ConfigError::Parse {
        format: ConfigFormat::Json,
        message: e.to_string(),
    })
}

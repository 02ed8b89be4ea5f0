/*
 * @Author       : 老董
 * @Date         : 2026-10-19
 * @Description  : 层配置：缩写键解析、配置记录到层的构造
 *
 * 配置文档有两种形态：
 * - 列表：每个元素是一条层配置记录，输入尺寸由外部（命令行）提供
 * - 映射：`layers` 为层配置列表，可选的 `input_size` 优先于外部提供的值
 *
 * 层配置记录的键（全称优先于缩写）：
 * - kernel_size > kernel > k
 * - stride > s（默认 1）
 * - padding > p（默认 same）
 * - type：conv | pool，不区分大小写，默认 conv
 * - name：可选的层名称
 */

mod error;
pub mod loader;

pub use error::ConfigError;
pub use loader::{ConfigFormat, is_empty_document, load_config, parse_config_str};

use crate::errors::CalcError;
use crate::evaluator::{EvaluatedLayer, evaluate};
use crate::layer::{Layer, Padding};
use serde_json::{Map, Value};

/// 缩写键及其全称，按优先级从高到低排列
const ALIASES: &[(&str, &[&str])] = &[
    ("kernel_size", &["kernel", "k"]),
    ("stride", &["s"]),
    ("padding", &["p"]),
];

/// 层类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayerType {
    #[default]
    Conv,
    Pool,
}

impl LayerType {
    /// 从类型名解析（不区分大小写）
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "conv" => Some(Self::Conv),
            "pool" => Some(Self::Pool),
            _ => None,
        }
    }
}

/// 把缩写键补全为全称键
///
/// 已有全称键时缩写被忽略；多个缩写并存时取优先级最高者。原记录中的其余键原样保留。
pub fn resolve_aliases(record: &Map<String, Value>) -> Map<String, Value> {
    let mut resolved = record.clone();
    for (full_key, abbreviations) in ALIASES {
        if resolved.contains_key(*full_key) {
            continue;
        }
        if let Some(value) = abbreviations.iter().find_map(|key| record.get(*key)) {
            resolved.insert((*full_key).to_string(), value.clone());
        }
    }
    resolved
}

/// 已解析的层配置记录
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayerConfig {
    pub layer_type: LayerType,
    pub kernel_size: usize,
    pub stride: usize,
    pub padding: Padding,
    pub name: Option<String>,
}

impl LayerConfig {
    /// 从一条原始配置记录解析
    pub fn from_value(value: &Value) -> Result<Self, CalcError> {
        let record = value.as_object().ok_or_else(|| CalcError::InvalidParameter {
            key: "layers".to_string(),
            value: value.to_string(),
        })?;
        let record = resolve_aliases(record);

        let layer_type = match present(&record, "type") {
            None => LayerType::default(),
            Some(Value::String(name)) => {
                LayerType::from_name(name).ok_or_else(|| CalcError::UnknownLayerType(name.clone()))?
            }
            Some(other) => return Err(CalcError::UnknownLayerType(other.to_string())),
        };

        let kernel_size = present(&record, "kernel_size")
            .ok_or_else(|| CalcError::MissingParameter("kernel_size".to_string()))
            .and_then(|value| parse_usize("kernel_size", value))?;

        let stride = present(&record, "stride")
            .map(|value| parse_usize("stride", value))
            .transpose()?
            .unwrap_or(1);

        let padding = present(&record, "padding")
            .map(parse_padding)
            .transpose()?
            .unwrap_or_default();

        let name = present(&record, "name").map(|value| match value {
            Value::String(name) => name.clone(),
            other => other.to_string(),
        });

        if layer_type == LayerType::Pool
            && (record.contains_key("stride") || record.contains_key("padding"))
        {
            log::warn!("池化层的步长固定等于核大小、填充固定为 same，忽略配置中的 stride/padding");
        }

        Ok(Self {
            layer_type,
            kernel_size,
            stride,
            padding,
            name,
        })
    }

    /// 按配置构造层
    pub fn build(&self) -> Result<Layer, CalcError> {
        let name = self.name.as_deref();
        match self.layer_type {
            LayerType::Conv => Layer::conv(self.kernel_size, self.stride, self.padding, name),
            LayerType::Pool => Layer::pool(self.kernel_size, name),
        }
    }
}

/// 整个网络的配置
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NetworkConfig {
    pub input_size: Option<usize>,
    pub layers: Vec<LayerConfig>,
}

impl NetworkConfig {
    /// 从配置文档解析
    ///
    /// # 参数
    /// - `document`: 列表或映射形态的配置文档
    /// - `input_size`: 外部提供的输入尺寸，文档自带 `input_size` 时被覆盖
    pub fn from_value(document: &Value, input_size: Option<usize>) -> Result<Self, CalcError> {
        match document {
            Value::Array(records) => Ok(Self {
                input_size,
                layers: parse_layers(records)?,
            }),
            Value::Object(mapping) => {
                let input_size = match present(mapping, "input_size") {
                    Some(value) => Some(parse_usize("input_size", value)?),
                    None => input_size,
                };
                let layers = match present(mapping, "layers") {
                    None => Vec::new(),
                    Some(Value::Array(records)) => parse_layers(records)?,
                    Some(other) => {
                        return Err(CalcError::InvalidParameter {
                            key: "layers".to_string(),
                            value: other.to_string(),
                        });
                    }
                };
                Ok(Self { input_size, layers })
            }
            other => Err(CalcError::InvalidDocument(value_kind(other).to_string())),
        }
    }

    /// 构造层链：输入层在首位，其后依次为各配置层
    pub fn build_layers(&self) -> Result<Vec<Layer>, CalcError> {
        let mut layers = Vec::with_capacity(self.layers.len() + 1);
        layers.push(Layer::input(self.input_size));
        for config in &self.layers {
            layers.push(config.build()?);
        }
        Ok(layers)
    }

    /// 构造层链并求值
    pub fn evaluate(&self) -> Result<Vec<EvaluatedLayer>, CalcError> {
        evaluate(self.build_layers()?)
    }
}

fn parse_layers(records: &[Value]) -> Result<Vec<LayerConfig>, CalcError> {
    records.iter().map(LayerConfig::from_value).collect()
}

// 值为 null 的键视同缺失
fn present<'a>(record: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    record.get(key).filter(|value| !value.is_null())
}

fn parse_usize(key: &str, value: &Value) -> Result<usize, CalcError> {
    value
        .as_u64()
        .and_then(|number| usize::try_from(number).ok())
        .ok_or_else(|| CalcError::InvalidParameter {
            key: key.to_string(),
            value: value.to_string(),
        })
}

fn parse_padding(value: &Value) -> Result<Padding, CalcError> {
    let padding = match value {
        Value::String(name) => Padding::from_name(name),
        other => other
            .as_u64()
            .and_then(|amount| usize::try_from(amount).ok())
            .map(Padding::Explicit),
    };
    padding.ok_or_else(|| CalcError::InvalidParameter {
        key: "padding".to_string(),
        value: value.to_string(),
    })
}

const fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "布尔值",
        Value::Number(_) => "数字",
        Value::String(_) => "字符串",
        Value::Array(_) => "列表",
        Value::Object(_) => "映射",
    }
}

#[cfg(test)]
mod tests;

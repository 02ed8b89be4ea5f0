/*
 * @Author       : 老董
 * @Date         : 2026-10-19
 * @Description  : 层链计算结果的可序列化描述，用于 JSON 输出
 */

use crate::evaluator::EvaluatedLayer;
use crate::layer::TraitLayer;
use serde::{Deserialize, Serialize};

/// 整条层链的计算结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChainReport {
    /// 格式版本（用于向后兼容）
    pub version: String,
    pub layers: Vec<LayerReport>,
}

/// 单层的计算结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerReport {
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// 输入尺寸缺失时为 null
    pub output_size: Option<i64>,
    pub receptive_field_size: i64,
    pub receptive_field_center: f64,
    pub jump: i64,
}

impl ChainReport {
    pub fn new(layers: &[EvaluatedLayer]) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            layers: layers.iter().map(LayerReport::from).collect(),
        }
    }

    /// 转换为 JSON 字符串
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// 从 JSON 字符串解析
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl From<&EvaluatedLayer> for LayerReport {
    fn from(evaluated: &EvaluatedLayer) -> Self {
        Self {
            description: evaluated.description(),
            name: evaluated.layer.name().map(str::to_string),
            output_size: evaluated.state.output_size,
            receptive_field_size: evaluated.state.receptive_field_size,
            receptive_field_center: evaluated.state.receptive_field_center,
            jump: evaluated.state.jump,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ChainReport;
    use crate::errors::CalcError;
    use crate::evaluator::evaluate;
    use crate::layer::{Layer, Padding};

    #[test]
    fn test_report_to_json() -> Result<(), CalcError> {
        let layers = evaluate(vec![
            Layer::input(None),
            Layer::conv(3, 2, Padding::Same, Some("conv1"))?,
        ])?;
        let report = ChainReport::new(&layers);
        let json = report.to_json().unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["layers"][0]["output_size"], serde_json::Value::Null);
        assert!(value["layers"][0].get("name").is_none());
        assert_eq!(value["layers"][1]["name"], "conv1");
        assert_eq!(value["layers"][1]["receptive_field_size"], 3);
        assert_eq!(value["layers"][1]["jump"], 2);
        assert_eq!(
            value["layers"][1]["description"],
            "Conv conv1 [kernel_size=3, stride=2, padding=1(same)]"
        );

        assert_eq!(ChainReport::from_json(&json).unwrap(), report);
        Ok(())
    }
}

/*
 * @Author       : 老董
 * @Date         : 2026-10-19
 * @Description  : 输入层：层链的起点，只携带输入尺寸
 */

use super::{LayerState, TraitLayer, to_signed};
use crate::errors::CalcError;

/// 输入层
///
/// 感受野基线固定为：大小 1、中心 0.5、累积步长 1。
/// 输入尺寸可缺失，此时后续各层的输出尺寸也都缺失，但感受野照常计算。
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Input {
    size: Option<usize>,
}

impl Input {
    pub const fn new(size: Option<usize>) -> Self {
        Self { size }
    }
}

impl TraitLayer for Input {
    fn type_name(&self) -> &'static str {
        "Input"
    }

    fn name(&self) -> Option<&str> {
        None
    }

    // 输入层不读取前驱
    fn calc_state(&self, _predecessor: Option<&LayerState>) -> Result<LayerState, CalcError> {
        let output_size = self
            .size
            .map(|size| to_signed("input_size", size))
            .transpose()?;
        Ok(LayerState::initial(output_size))
    }
}

/*
 * @Author       : 老董
 * @Date         : 2026-10-19
 * @Description  : 层链求值器：从输入层开始，逐层由前驱状态推导后继状态
 *
 * 严格自左向右的折叠：第 i 层只读取第 i-1 层已算好的状态，不存在可并行的工作。
 */

use crate::errors::CalcError;
use crate::layer::{Layer, LayerState, TraitLayer};

/// 求值后的层：层本身 + 其几何状态
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluatedLayer {
    pub layer: Layer,
    pub state: LayerState,
}

impl EvaluatedLayer {
    pub fn description(&self) -> String {
        self.layer.description()
    }
}

/// 对层链求值
///
/// # 参数
/// - `layers`: 有序层序列，首层须为输入层
///
/// # 返回
/// 与输入等长的序列，每一层都带有计算好的状态
///
/// # 错误
/// - `EmptyChain`: 序列为空
/// - `InputNotFirst`: 首层不是输入层
/// - `MisplacedInput`: 输入层出现在首位之后
pub fn evaluate(layers: Vec<Layer>) -> Result<Vec<EvaluatedLayer>, CalcError> {
    if layers.is_empty() {
        return Err(CalcError::EmptyChain);
    }

    let mut evaluated: Vec<EvaluatedLayer> = Vec::with_capacity(layers.len());
    for (index, layer) in layers.into_iter().enumerate() {
        if index > 0 && layer.is_input() {
            return Err(CalcError::MisplacedInput { index });
        }

        let state = layer.calc_state(evaluated.last().map(|prev| &prev.state))?;
        log::debug!(
            "第{index}层 {layer}: output_size={}, receptive_field_size={}, receptive_field_center={}, jump={}",
            state.output_size_text(),
            state.receptive_field_size,
            state.receptive_field_center,
            state.jump
        );
        evaluated.push(EvaluatedLayer { layer, state });
    }

    Ok(evaluated)
}

/*
 * @Author       : 老董
 * @Date         : 2026-10-19
 * @Description  : Layer 模块 - 输入层、卷积层、池化层的几何模型
 *
 * 每一层只依赖紧邻前驱的状态与自身静态参数推导出自己的状态，不会回看更早的层。
 * 状态不存放在层内部，而是由求值器逐层产出新的 LayerState。
 */

mod conv;
mod input;
mod padding;
mod state;

pub use conv::{Conv, ConvKind};
pub use input::Input;
pub use padding::Padding;
pub use state::LayerState;

use crate::errors::CalcError;
use enum_dispatch::enum_dispatch;
use std::fmt;

#[enum_dispatch]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Layer {
    Input(Input),
    Conv(Conv),
}

#[enum_dispatch(Layer)]
pub trait TraitLayer {
    /// 层类型的显示名称（Input/Conv/Pool）
    fn type_name(&self) -> &'static str;

    fn name(&self) -> Option<&str>;

    /// 参数描述，如`[kernel_size=3, stride=1, padding=1(same)]`；无参数的层返回 None
    fn params_description(&self) -> Option<String> {
        None
    }

    /// 人类可读的标签：类型名 + 可选名称 + 参数描述
    fn description(&self) -> String {
        let mut description = self.type_name().to_string();
        if let Some(name) = self.name().filter(|name| !name.is_empty()) {
            description.push(' ');
            description.push_str(name);
        }
        if let Some(params) = self.params_description() {
            description.push(' ');
            description.push_str(&params);
        }
        description
    }

    // 根据前驱层的状态计算本层状态（前驱为 None 表示本层位于层链首位）
    fn calc_state(&self, predecessor: Option<&LayerState>) -> Result<LayerState, CalcError>;
}

impl Layer {
    pub fn input(size: Option<usize>) -> Self {
        Input::new(size).into()
    }

    pub fn conv(
        kernel: usize,
        stride: usize,
        padding: Padding,
        name: Option<&str>,
    ) -> Result<Self, CalcError> {
        Ok(Conv::new(kernel, stride, padding, name)?.into())
    }

    pub fn pool(size: usize, name: Option<&str>) -> Result<Self, CalcError> {
        Ok(Conv::pool(size, name)?.into())
    }

    pub const fn is_input(&self) -> bool {
        matches!(self, Self::Input(_))
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}

fn to_signed(key: &str, value: usize) -> Result<i64, CalcError> {
    i64::try_from(value).map_err(|_| CalcError::ArithmeticDomain(format!("{key}={value}超出可计算范围")))
}

#[cfg(test)]
mod tests;

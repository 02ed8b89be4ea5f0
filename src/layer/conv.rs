/*
 * @Author       : 老董
 * @Date         : 2026-10-19
 * @Description  : Conv（卷积）层及其预设 Pool（池化）层
 *
 * 由前驱层状态推导本层状态（k=kernel，s=stride，p=填充量）：
 * output_size            = (k mod 2) + floor((N + 2p - k) / s)
 * jump                   = jump_prev * s
 * receptive_field_size   = rf_prev + (k - 1) * jump_prev
 * receptive_field_center = center_prev + (floor((k - 1) / 2) - p) * jump_prev
 *
 * 注意输出尺寸并非教科书公式 floor((N + 2p - k) / s) + 1：
 * 奇数核加 1，偶数核加 0。除法一律向负无穷取整。
 * 任一中间量溢出 i64 时返回`ArithmeticDomain`。
 */

use super::{LayerState, Padding, TraitLayer, to_signed};
use crate::errors::CalcError;
use num_integer::Integer;

/// 卷积类层的种类，仅影响显示名称
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConvKind {
    Conv,
    /// 步长等于核大小的非重叠窗口
    Pool,
}

/// Conv 层
///
/// Pool 不是独立的层类型，而是`stride == kernel`、填充取默认值的 Conv 预设，见[`Conv::pool`]。
///
/// # 使用示例
/// ```
/// use cnn_calc::{Conv, LayerState, Padding, TraitLayer};
///
/// let conv = Conv::new(3, 1, Padding::Same, None).unwrap();
/// let state = conv.calc_state(Some(&LayerState::initial(Some(10)))).unwrap();
/// assert_eq!(state.output_size, Some(10));
/// assert_eq!(state.receptive_field_size, 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conv {
    kind: ConvKind,
    name: Option<String>,
    kernel: usize,
    stride: usize,
    padding_policy: Padding,
    /// 解析后的整数填充量
    padding: usize,
}

impl Conv {
    /// 创建 Conv 层
    ///
    /// # 参数
    /// - `kernel`: 卷积核大小，须为正
    /// - `stride`: 步长，须为正
    /// - `padding`: 填充策略，构造时即解析为整数
    /// - `name`: 可选的层名称
    ///
    /// # 错误
    /// 核大小或步长为 0 时返回`ArithmeticDomain`
    pub fn new(
        kernel: usize,
        stride: usize,
        padding: Padding,
        name: Option<&str>,
    ) -> Result<Self, CalcError> {
        Self::with_kind(ConvKind::Conv, kernel, stride, padding, name)
    }

    /// 创建 Pool 层：`Conv(kernel=size, stride=size, padding=same)`
    pub fn pool(size: usize, name: Option<&str>) -> Result<Self, CalcError> {
        Self::with_kind(ConvKind::Pool, size, size, Padding::default(), name)
    }

    fn with_kind(
        kind: ConvKind,
        kernel: usize,
        stride: usize,
        padding: Padding,
        name: Option<&str>,
    ) -> Result<Self, CalcError> {
        if kernel == 0 {
            return Err(CalcError::ArithmeticDomain("kernel_size须大于0".to_string()));
        }
        if stride == 0 {
            return Err(CalcError::ArithmeticDomain("stride须大于0".to_string()));
        }

        Ok(Self {
            kind,
            name: name.map(str::to_string),
            kernel,
            stride,
            padding_policy: padding,
            padding: padding.resolve(kernel),
        })
    }

    pub const fn kind(&self) -> ConvKind {
        self.kind
    }

    pub const fn kernel(&self) -> usize {
        self.kernel
    }

    pub const fn stride(&self) -> usize {
        self.stride
    }

    /// 解析后的整数填充量
    pub const fn padding(&self) -> usize {
        self.padding
    }

    pub const fn padding_policy(&self) -> Padding {
        self.padding_policy
    }
}

impl TraitLayer for Conv {
    fn type_name(&self) -> &'static str {
        match self.kind {
            ConvKind::Conv => "Conv",
            ConvKind::Pool => "Pool",
        }
    }

    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn params_description(&self) -> Option<String> {
        let policy = self
            .padding_policy
            .policy_name()
            .map(|name| format!("({name})"))
            .unwrap_or_default();
        Some(format!(
            "[kernel_size={}, stride={}, padding={}{}]",
            self.kernel, self.stride, self.padding, policy
        ))
    }

    fn calc_state(&self, predecessor: Option<&LayerState>) -> Result<LayerState, CalcError> {
        let predecessor = predecessor.ok_or(CalcError::InputNotFirst)?;

        let kernel = to_signed("kernel_size", self.kernel)?;
        let stride = to_signed("stride", self.stride)?;
        let padding = to_signed("padding", self.padding)?;

        let output_size = predecessor
            .output_size
            .map(|size| {
                padding
                    .checked_mul(2)
                    .and_then(|both_sides| size.checked_add(both_sides))
                    .and_then(|padded| padded.checked_sub(kernel))
                    .and_then(|span| Integer::div_floor(&span, &stride).checked_add(kernel.mod_floor(&2)))
                    .ok_or_else(|| overflow("output_size"))
            })
            .transpose()?;
        let receptive_field_size = (kernel - 1)
            .checked_mul(predecessor.jump)
            .and_then(|v| v.checked_add(predecessor.receptive_field_size))
            .ok_or_else(|| overflow("receptive_field_size"))?;
        let center_shift = (Integer::div_floor(&(kernel - 1), &2) - padding)
            .checked_mul(predecessor.jump)
            .ok_or_else(|| overflow("receptive_field_center"))?;
        let jump = predecessor
            .jump
            .checked_mul(stride)
            .ok_or_else(|| overflow("jump"))?;

        Ok(LayerState {
            output_size,
            receptive_field_size,
            receptive_field_center: predecessor.receptive_field_center + center_shift as f64,
            jump,
        })
    }
}

fn overflow(quantity: &str) -> CalcError {
    CalcError::ArithmeticDomain(format!("{quantity}超出i64范围"))
}

/*
 * @Author       : 老董
 * @Date         : 2026-10-19
 * @Description  : 层的几何状态（输出尺寸、感受野大小、感受野中心、累积步长）
 */

/// 某一层计算完毕后的几何状态
///
/// 所有字段都以“输入像素”为单位：
/// - `output_size`: 该层输出的空间尺寸；未提供输入尺寸时为 None（显示为`?`）
/// - `receptive_field_size`: 影响一个输出单元的输入像素数
/// - `receptive_field_center`: 第一个输出单元的感受野中心坐标
/// - `jump`: 相邻输出单元在输入上的间距，即截至该层所有步长的乘积
///
/// 输出尺寸用有符号整数表示：退化配置（如卷积核大于输入）会得到负数而非回绕。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayerState {
    pub output_size: Option<i64>,
    pub receptive_field_size: i64,
    pub receptive_field_center: f64,
    pub jump: i64,
}

impl LayerState {
    /// 输入层的初始状态：感受野为单个像素，中心位于该像素中点
    pub const fn initial(output_size: Option<i64>) -> Self {
        Self {
            output_size,
            receptive_field_size: 1,
            receptive_field_center: 0.5,
            jump: 1,
        }
    }

    /// 输出尺寸的显示文本，缺失时为`?`
    pub fn output_size_text(&self) -> String {
        self.output_size
            .map_or_else(|| "?".to_string(), |size| size.to_string())
    }
}

/*
 * @Author       : 老董
 * @Date         : 2026-10-19
 * @Description  : 层链计算的错误类型
 */

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalcError {
    // 层配置
    #[error("层配置缺少必需参数：{0}")]
    MissingParameter(String),
    #[error("未知的层类型：{0}（仅支持 conv、pool）")]
    UnknownLayerType(String),
    #[error("参数`{key}`的取值无效：{value}")]
    InvalidParameter { key: String, value: String },
    #[error("配置文档须为层列表或映射，实际为：{0}")]
    InvalidDocument(String),

    // 层链形状
    #[error("层链为空（缺少输入层）")]
    EmptyChain,
    #[error("层链的第一层必须是输入层")]
    InputNotFirst,
    #[error("输入层只能位于层链首位，但在第{index}层出现")]
    MisplacedInput { index: usize },

    // 数值
    #[error("数值域错误：{0}")]
    ArithmeticDomain(String),
}

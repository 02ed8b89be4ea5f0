/*
 * @Author       : 老董
 * @Date         : 2026-10-19
 * @Description  : 卷积填充策略
 *
 * 命名策略在构造层时即被解析为具体的整数填充量：
 * - same  => kernel / 2（向下取整），步长为 1 时输出尺寸与输入大致相同
 * - valid => 0
 * - 整数  => 原样使用，不带策略名
 */

use std::fmt;

/// 填充策略
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Padding {
    /// `kernel / 2`（默认）
    #[default]
    Same,
    /// 不填充
    Valid,
    /// 显式整数填充量
    Explicit(usize),
}

impl Padding {
    /// 按卷积核大小解析出整数填充量
    pub const fn resolve(&self, kernel: usize) -> usize {
        match self {
            Self::Same => kernel / 2,
            Self::Valid => 0,
            Self::Explicit(amount) => *amount,
        }
    }

    /// 命名策略的名称；显式填充返回 None
    pub const fn policy_name(&self) -> Option<&'static str> {
        match self {
            Self::Same => Some("same"),
            Self::Valid => Some("valid"),
            Self::Explicit(_) => None,
        }
    }

    /// 从策略名解析（不区分大小写）
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "same" => Some(Self::Same),
            "valid" => Some(Self::Valid),
            _ => None,
        }
    }
}

impl fmt::Display for Padding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.policy_name() {
            Some(name) => write!(f, "{name}"),
            None => write!(f, "{}", self.resolve(0)),
        }
    }
}

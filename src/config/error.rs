//! 配置加载错误类型定义

use super::ConfigFormat;
use crate::errors::CalcError;
use thiserror::Error;

/// 配置加载相关错误
#[derive(Debug, Error)]
pub enum ConfigError {
    /// IO 错误
    #[error("IO 错误: {0}")]
    Io(#[from] std::io::Error),

    /// 文档解析失败
    #[error("{format}格式解析失败: {message}")]
    Parse {
        format: ConfigFormat,
        message: String,
    },

    /// 文档内容无法构成层链
    #[error(transparent)]
    Calc(#[from] CalcError),
}

//! # CNN Calc
//!
//! `cnn_calc`是面向卷积神经网络设计阶段的计算器：给定输入尺寸与一串卷积/池化层配置，
//! 逐层算出输出尺寸、感受野大小、感受野中心偏移与累积步长（jump）。
//! 它不做任何张量运算，只是几何递推。
//!
//! ```
//! use cnn_calc::{Layer, Padding, evaluate};
//!
//! let layers = vec![
//!     Layer::input(Some(10)),
//!     Layer::conv(3, 1, Padding::Same, None).unwrap(),
//!     Layer::pool(2, None).unwrap(),
//! ];
//! let evaluated = evaluate(layers).unwrap();
//! assert_eq!(evaluated[2].state.output_size, Some(5));
//! assert_eq!(evaluated[2].state.receptive_field_size, 4);
//! ```

pub mod config;
pub mod errors;
pub mod evaluator;
pub mod layer;
pub mod report;
pub mod table;
pub mod utils;

pub use config::{
    ConfigError, ConfigFormat, LayerConfig, LayerType, NetworkConfig, is_empty_document,
    load_config, parse_config_str, resolve_aliases,
};
pub use errors::CalcError;
pub use evaluator::{EvaluatedLayer, evaluate};
pub use layer::{Conv, ConvKind, Input, Layer, LayerState, Padding, TraitLayer};
pub use report::{ChainReport, LayerReport};
pub use table::{Align, Column, ColumnSpec, TableOptions, render_table};

/*
 * @Author       : 老董
 * @Date         : 2026-10-19
 * @Description  : 以纯文本表格展示层链的计算结果
 *
 * 表格格式（列宽/表头/对齐/分隔符）通过 TableOptions 显式传入，不使用全局可变状态。
 */

use crate::evaluator::EvaluatedLayer;

/// 表格中可展示的列
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    /// 层的描述标签
    Description,
    OutputSize,
    ReceptiveFieldSize,
    ReceptiveFieldCenter,
    Jump,
}

impl Column {
    /// 某一层在该列的单元格文本
    pub fn cell(&self, layer: &EvaluatedLayer) -> String {
        match self {
            Self::Description => layer.description(),
            Self::OutputSize => layer.state.output_size_text(),
            Self::ReceptiveFieldSize => layer.state.receptive_field_size.to_string(),
            Self::ReceptiveFieldCenter => format_center(layer.state.receptive_field_center),
            Self::Jump => layer.state.jump.to_string(),
        }
    }
}

/// 单元格对齐方式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
    Right,
}

/// 单列的格式
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSpec {
    pub column: Column,
    pub header: String,
    /// None 表示按该列最长的单元格自动确定宽度（不计表头）
    pub width: Option<usize>,
    pub align: Align,
}

impl ColumnSpec {
    pub fn new(column: Column, header: &str, width: Option<usize>, align: Align) -> Self {
        Self {
            column,
            header: header.to_string(),
            width,
            align,
        }
    }
}

/// 表格格式
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableOptions {
    pub columns: Vec<ColumnSpec>,
    pub separator: String,
    pub rule_char: char,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            columns: vec![
                ColumnSpec::new(Column::Description, "Layer", None, Align::Left),
                ColumnSpec::new(Column::OutputSize, "Output Size", Some(12), Align::Center),
                ColumnSpec::new(
                    Column::ReceptiveFieldSize,
                    "Receptive Field",
                    Some(16),
                    Align::Center,
                ),
            ],
            separator: " | ".to_string(),
            rule_char: '-',
        }
    }
}

impl TableOptions {
    /// 在默认列之后追加累积步长与感受野中心两列
    pub fn detailed() -> Self {
        let mut options = Self::default();
        options.columns.extend([
            ColumnSpec::new(Column::Jump, "Jump", Some(8), Align::Center),
            ColumnSpec::new(Column::ReceptiveFieldCenter, "RF Center", Some(12), Align::Center),
        ]);
        options
    }
}

/// 渲染表格：表头、分隔线、各层一行、分隔线
///
/// 分隔线长度取表头与最长行中的较大者。
pub fn render_table(layers: &[EvaluatedLayer], options: &TableOptions) -> String {
    let cells: Vec<Vec<String>> = layers
        .iter()
        .map(|layer| options.columns.iter().map(|spec| spec.column.cell(layer)).collect())
        .collect();

    let widths: Vec<usize> = options
        .columns
        .iter()
        .enumerate()
        .map(|(i, spec)| {
            spec.width.unwrap_or_else(|| {
                cells
                    .iter()
                    .map(|row| row[i].chars().count())
                    .max()
                    .unwrap_or(0)
            })
        })
        .collect();

    let header = options
        .columns
        .iter()
        .zip(&widths)
        .map(|(spec, &width)| format!("{:<width$}", spec.header))
        .collect::<Vec<_>>()
        .join(&options.separator);

    let rows: Vec<String> = cells
        .iter()
        .map(|row| {
            row.iter()
                .zip(&options.columns)
                .zip(&widths)
                .map(|((cell, spec), &width)| align_cell(cell, spec.align, width))
                .collect::<Vec<_>>()
                .join(&options.separator)
        })
        .collect();

    let rule_len = rows
        .iter()
        .map(|row| row.chars().count())
        .chain(std::iter::once(header.chars().count()))
        .max()
        .unwrap_or(0);
    let rule = options.rule_char.to_string().repeat(rule_len);

    let mut lines = Vec::with_capacity(rows.len() + 3);
    lines.push(header);
    lines.push(rule.clone());
    lines.extend(rows);
    lines.push(rule);
    lines.join("\n")
}

fn align_cell(cell: &str, align: Align, width: usize) -> String {
    match align {
        Align::Left => format!("{cell:<width$}"),
        Align::Center => format!("{cell:^width$}"),
        Align::Right => format!("{cell:>width$}"),
    }
}

// 整数值保留一位小数（0.5、-0.5、1.0）
fn format_center(center: f64) -> String {
    if center.fract() == 0.0 {
        format!("{center:.1}")
    } else {
        center.to_string()
    }
}

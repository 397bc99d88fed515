//! Effective column budget and style flags for a row

use crate::config::consts::{CONDENSED_DEN, CONDENSED_NUM, STYLE_SEPARATOR};
use crate::sink::Style;
use crate::template::Block;

/// Columns and style flags a row is printed with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleResolution {
    pub columns: usize,
    pub style: Style,
}

/// Compute a row's budget from the sink's nominal columns
///
/// `tokens` is the block's `style` after data-source resolution.
pub fn resolve_style(block: &Block, nominal_columns: usize, tokens: Option<&str>) -> StyleResolution {
    let mut columns = nominal_columns;
    let mut style = Style::empty();

    if block.double_width {
        columns /= 2;
        style |= Style::DOUBLE_WIDTH;
    }
    if block.double_height {
        style |= Style::DOUBLE_HEIGHT;
    }

    for token in tokens.into_iter().flat_map(|t| t.split(STYLE_SEPARATOR)) {
        match token {
            "bold" => style |= Style::BOLD,
            "italic" => style |= Style::ITALIC,
            "underline" => style |= Style::UNDERLINE,
            "condensed" => {
                style |= Style::CONDENSED;
                columns = columns * CONDENSED_NUM / CONDENSED_DEN;
            }
            _ => {}
        }
    }

    StyleResolution { columns, style }
}

//! Constants shared by the template parser and the renderer

/// Default fill character
pub const DEFAULT_FILL: char = ' ';

/// Default word-break character
pub const BREAK_CHAR: char = ' ';

/// Value of `width`/`height` selecting double-size glyphs
pub const DOUBLE_SIZE: &str = "2x";

/// Separator between style tokens
pub const STYLE_SEPARATOR: char = '+';

/// Separator used when a sequence value is printed as text
pub const SEQUENCE_SEPARATOR: &str = ",";

/// Condensed glyphs fit `CONDENSED_NUM / CONDENSED_DEN` times more columns
pub const CONDENSED_NUM: usize = 4;
pub const CONDENSED_DEN: usize = 3;

/// Path segments intercepted at a sequence boundary
pub mod reserved {
    pub const INDEX: &str = "index";
    pub const NUMBER: &str = "number";
    pub const COUNT: &str = "count";
    pub const FIRST: &str = "first";
    pub const LAST: &str = "last";
    pub const NOT_FIRST: &str = "!first";
    pub const NOT_LAST: &str = "!last";
}

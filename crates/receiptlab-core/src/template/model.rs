//! Typed statement tree

use crate::sink::Align;

/// A single template statement
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// Text emitted verbatim, never resolved against the data source
    Text(String),
    /// Reference into the data source; degrades to itself when unresolved
    Path(String),
    /// Fragments concatenated left to right
    Sequence(Vec<Statement>),
    /// Structured node carrying layout and data-binding options
    Block(Box<Block>),
}

impl Statement {
    /// Wrap a block
    pub fn block(block: Block) -> Self {
        Statement::Block(Box::new(block))
    }
}

impl From<Block> for Statement {
    fn from(block: Block) -> Self {
        Statement::block(block)
    }
}

/// Graphic drawn by the sink instead of laid-out text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Graphic {
    QrCode,
    Image,
}

/// Block options, resolved once when the template is parsed
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub items: Option<Statement>,
    /// List path iterated by this block
    pub list: Option<String>,
    /// Resource that must be available for the block to render
    pub required: Option<String>,
    /// `None` behaves as left for text; graphics only realign on center/right
    pub align: Option<Align>,
    /// Fill character, space when unset
    pub whitespace: Option<char>,
    pub double_width: bool,
    pub double_height: bool,
    /// `+`-delimited style tokens, or a path resolving to them
    pub style: Option<String>,
    /// printf-style format applied before wrapping
    pub format: Option<String>,
    pub left: Option<String>,
    pub right: Option<String>,
    pub row: bool,
    pub wrap: bool,
    pub graphic: Option<Graphic>,
    /// Graphic payload path
    pub data: Option<String>,
}

impl Default for Block {
    fn default() -> Self {
        Self {
            items: None,
            list: None,
            required: None,
            align: None,
            whitespace: None,
            double_width: false,
            double_height: false,
            style: None,
            format: None,
            left: None,
            right: None,
            row: false,
            wrap: true,
            graphic: None,
            data: None,
        }
    }
}

impl Block {
    /// Create a block around the given items
    pub fn new(items: impl Into<Option<Statement>>) -> Self {
        Self {
            items: items.into(),
            ..Self::default()
        }
    }

    /// Promote a top-level statement to a row
    pub fn promote(statement: Statement) -> Self {
        match statement {
            Statement::Block(block) => Block {
                row: true,
                ..*block
            },
            other => Block {
                row: true,
                ..Block::new(other)
            },
        }
    }

    /// Fill character used for padding
    pub fn fill(&self) -> char {
        self.whitespace.unwrap_or(crate::config::consts::DEFAULT_FILL)
    }

    /// Whether this block leaves flowing text untouched
    ///
    /// Rows, non-left alignment, custom fill, borders and hard wrapping all
    /// position text on physical lines.
    pub(crate) fn is_layout_neutral(&self) -> bool {
        !self.row
            && self.wrap
            && matches!(self.align, None | Some(Align::Left))
            && self.fill() == crate::config::consts::DEFAULT_FILL
            && self.left.as_deref().unwrap_or("").is_empty()
            && self.right.as_deref().unwrap_or("").is_empty()
    }
}

/// An ordered list of rows
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Template {
    rows: Vec<Block>,
}

impl Template {
    /// Create a template, promoting every statement to a row
    pub fn new(statements: Vec<Statement>) -> Self {
        Self {
            rows: statements.into_iter().map(Block::promote).collect(),
        }
    }

    /// Rows in template order
    pub fn rows(&self) -> &[Block] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl FromIterator<Statement> for Template {
    fn from_iter<I: IntoIterator<Item = Statement>>(iter: I) -> Self {
        Template::new(iter.into_iter().collect())
    }
}

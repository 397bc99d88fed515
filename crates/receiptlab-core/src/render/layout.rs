//! Word-wrap, alignment, padding and borders
//!
//! Text moves through the evaluator as [`Fragment`]s. A flowing fragment is
//! paragraph text that has not been broken into lines yet; a placed fragment
//! already sits on physical lines, starting at the column where it began.
//! Widths are measured in characters.

use crate::config::consts::{BREAK_CHAR, DEFAULT_FILL};
use crate::sink::Align;
use crate::template::Block;

/// Evaluated text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    text: String,
    placed: bool,
}

impl Fragment {
    pub fn flowing(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            placed: false,
        }
    }

    pub fn placed(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            placed: true,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_placed(&self) -> bool {
        self.placed
    }

    /// Replace the text, keeping the placement
    pub(crate) fn map(self, f: impl FnOnce(String) -> String) -> Self {
        Self {
            text: f(self.text),
            placed: self.placed,
        }
    }
}

/// One line segment and the budget it was cut for
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Chunk {
    pub(crate) text: Vec<char>,
    pub(crate) budget: usize,
}

pub(crate) fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Columns left on the current line after `len` characters are placed with
/// `columns` remaining; a full line yields a fresh line of `width`.
pub(crate) fn advance(columns: usize, width: usize, len: usize) -> usize {
    let width = width.max(1);
    if len < columns {
        return columns - len;
    }
    width - (len - columns) % width
}

fn trim_breaks_end(mut text: &[char]) -> &[char] {
    while let [rest @ .., BREAK_CHAR] = text {
        text = rest;
    }
    text
}

fn trim_breaks_start(mut text: &[char]) -> &[char] {
    while let [BREAK_CHAR, rest @ ..] = text {
        text = rest;
    }
    text
}

/// Position of the break ending the longest prefix that fits `budget`
fn find_break(text: &[char], budget: usize) -> Option<usize> {
    (1..=budget.min(text.len() - 1))
        .rev()
        .find(|&pos| text[pos] == BREAK_CHAR && !trim_breaks_end(&text[..pos]).is_empty())
}

/// Length of the run that should not be split across lines
fn leading_run_len(text: &[char], by_words: bool) -> usize {
    if !by_words {
        return text.len();
    }
    text.iter().position(|&c| c == BREAK_CHAR).unwrap_or(text.len())
}

/// Break flowing text into chunks: the first fits `first`, the others `width`
///
/// With `by_words` chunks end at break characters; otherwise text is cut at
/// the budget boundary. Either way, a leading run that does not fit `first`
/// but fits a full line starts on the next line.
pub(crate) fn wrap(text: &str, first: usize, width: usize, by_words: bool) -> Vec<Chunk> {
    let chars: Vec<char> = text.chars().collect();
    let mut rest: &[char] = &chars;
    let mut budget = first;
    let mut chunks = Vec::new();

    loop {
        if rest.len() <= budget {
            chunks.push(Chunk {
                text: rest.to_vec(),
                budget,
            });
            break;
        }

        let (chunk, remainder) = match by_words.then(|| find_break(rest, budget)).flatten() {
            Some(pos) => (trim_breaks_end(&rest[..pos]), trim_breaks_start(&rest[pos..])),
            None if budget < width && leading_run_len(rest, by_words) <= width => {
                (&rest[..0], rest)
            }
            None => rest.split_at(budget),
        };

        chunks.push(Chunk {
            text: chunk.to_vec(),
            budget,
        });
        rest = remainder;
        budget = width;

        if rest.is_empty() {
            break;
        }
    }

    chunks
}

/// Split placed text at its physical line boundaries
pub(crate) fn hard_split(text: &str, first: usize, width: usize) -> Vec<Chunk> {
    let chars: Vec<char> = text.chars().collect();
    let mut rest: &[char] = &chars;
    let mut budget = first;
    let mut chunks = Vec::new();

    loop {
        let (chunk, remainder) = rest.split_at(rest.len().min(budget));
        chunks.push(Chunk {
            text: chunk.to_vec(),
            budget,
        });
        rest = remainder;
        budget = width;

        if rest.is_empty() {
            break;
        }
    }

    chunks
}

/// Fill, alignment and borders of one block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineLayout<'b> {
    pub align: Align,
    pub fill: char,
    pub left: &'b str,
    pub right: &'b str,
    pub wrap: bool,
}

impl Default for LineLayout<'_> {
    fn default() -> Self {
        Self {
            align: Align::Left,
            fill: DEFAULT_FILL,
            left: "",
            right: "",
            wrap: true,
        }
    }
}

impl<'b> LineLayout<'b> {
    pub fn from_block(block: &'b Block) -> Self {
        Self {
            align: block.align.unwrap_or_default(),
            fill: block.fill(),
            left: block.left.as_deref().unwrap_or(""),
            right: block.right.as_deref().unwrap_or(""),
            wrap: block.wrap,
        }
    }

    fn border_len(&self) -> usize {
        char_len(self.left) + char_len(self.right)
    }

    /// Budgets left for the content once borders are taken out
    pub fn inner(&self, columns: usize, width: usize) -> (usize, usize) {
        let border = self.border_len();
        let width = width.saturating_sub(border).max(1);
        let columns = match columns.saturating_sub(border) {
            0 => width,
            columns => columns.min(width),
        };
        (columns, width)
    }

    /// Lay `input` out on physical lines
    ///
    /// `columns` is what is left of the current line, `width` a full line.
    pub fn apply(&self, input: Fragment, columns: usize, width: usize) -> Fragment {
        let (first, width) = self.inner(columns, width);
        let chunks = if input.is_placed() {
            hard_split(input.text(), first, width)
        } else {
            wrap(input.text(), first, width, self.wrap)
        };

        let pad_final = self.fill != DEFAULT_FILL || !self.right.is_empty();
        let bordered = !self.left.is_empty() || !self.right.is_empty();
        let last = chunks.len() - 1;
        let mut output = String::new();

        for (index, chunk) in chunks.iter().enumerate() {
            let remaining = chunk.budget.saturating_sub(chunk.text.len());
            let leading = match self.align {
                Align::Left => 0,
                Align::Center => remaining / 2,
                Align::Right => remaining,
            };
            let trailing = if index < last || pad_final {
                remaining - leading
            } else {
                0
            };

            if bordered {
                output.push_str(self.left);
            }
            output.extend(std::iter::repeat_n(self.fill, leading));
            output.extend(chunk.text.iter());
            output.extend(std::iter::repeat_n(self.fill, trailing));
            if bordered {
                output.push_str(self.right);
            }
        }

        Fragment::placed(output)
    }
}

/// Concatenates fragments while tracking the physical column
///
/// Flowing text stays pending so consecutive fragments wrap as one
/// paragraph. A placed fragment first pins the pending paragraph to
/// physical lines so that its padding lands on the right column.
/// `by_words` is the wrap mode of the block the paragraph belongs to.
#[derive(Debug)]
pub(crate) struct Flow {
    width: usize,
    columns: usize,
    by_words: bool,
    placed: String,
    pending: String,
    any_placed: bool,
    any: bool,
}

impl Flow {
    pub(crate) fn new(columns: usize, width: usize, by_words: bool) -> Self {
        let width = width.max(1);
        Self {
            width,
            columns: if columns == 0 { width } else { columns.min(width) },
            by_words,
            placed: String::new(),
            pending: String::new(),
            any_placed: false,
            any: false,
        }
    }

    /// Columns left on the current line after everything pushed so far
    pub(crate) fn columns(&self) -> usize {
        if self.pending.is_empty() {
            return self.columns;
        }
        let chunks = wrap(&self.pending, self.columns, self.width, self.by_words);
        Self::columns_after(&chunks, self.columns, self.width)
    }

    fn columns_after(chunks: &[Chunk], columns: usize, width: usize) -> usize {
        match chunks {
            [] => columns,
            [only] => advance(columns, width, only.text.len()),
            [.., last] => advance(width, width, last.text.len()),
        }
    }

    pub(crate) fn push(&mut self, fragment: Fragment) {
        self.any = true;
        if fragment.is_placed() {
            self.settle();
            self.columns = advance(self.columns, self.width, char_len(fragment.text()));
            self.placed.push_str(fragment.text());
            self.any_placed = true;
        } else {
            self.pending.push_str(fragment.text());
        }
    }

    /// Pin pending flowing text to physical lines, left aligned
    fn settle(&mut self) {
        if self.pending.is_empty() {
            return;
        }
        let chunks = wrap(&self.pending, self.columns, self.width, self.by_words);
        let laid = LineLayout::default().apply_chunks(&chunks);
        self.columns = Self::columns_after(&chunks, self.columns, self.width);
        self.placed.push_str(&laid);
        self.pending.clear();
    }

    pub(crate) fn finish(mut self) -> Option<Fragment> {
        if !self.any {
            return None;
        }
        if self.any_placed {
            self.settle();
            Some(Fragment::placed(self.placed))
        } else {
            Some(Fragment::flowing(self.pending))
        }
    }
}

impl LineLayout<'_> {
    /// Left-aligned rendering of pre-cut chunks without borders
    fn apply_chunks(&self, chunks: &[Chunk]) -> String {
        let last = chunks.len().saturating_sub(1);
        let mut output = String::new();
        for (index, chunk) in chunks.iter().enumerate() {
            output.extend(chunk.text.iter());
            if index < last {
                let remaining = chunk.budget.saturating_sub(chunk.text.len());
                output.extend(std::iter::repeat_n(self.fill, remaining));
            }
        }
        output
    }
}

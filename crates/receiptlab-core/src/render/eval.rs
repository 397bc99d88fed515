//! Statement evaluation
//!
//! The evaluator walks a row's statement tree, resolving paths against the
//! data source and laying text out per block. Row-bearing blocks emit their
//! lines into a [`RowBuffer`] as a side effect; everything else hands a
//! [`Fragment`] back to its parent.

use serde_json::Value;
use std::borrow::Cow;

use super::cursor::CursorStore;
use super::format::Formatter;
use super::layout::{Flow, Fragment, LineLayout};
use super::resolve::{is_available, resolve, resolve_text};
use super::style::{StyleResolution, resolve_style};
use super::text::post_process;
use crate::config::RenderOptions;
use crate::error::Result;
use crate::sink::{Align, Command, RowBuffer};
use crate::template::{Block, Graphic, Statement};

/// Row evaluation context
///
/// Owns the cursor state; borrows the immutable inputs. Cursors are scoped
/// to a single top-level row.
pub struct Evaluator<'r> {
    source: &'r Value,
    options: &'r RenderOptions,
    formatter: &'r dyn Formatter,
    cursors: CursorStore,
    columns: usize,
}

impl<'r> Evaluator<'r> {
    /// `columns` is the sink's nominal column count
    pub fn new(
        source: &'r Value,
        options: &'r RenderOptions,
        formatter: &'r dyn Formatter,
        columns: usize,
    ) -> Self {
        Self {
            source,
            options,
            formatter,
            cursors: CursorStore::new(),
            columns,
        }
    }

    pub fn cursors(&self) -> &CursorStore {
        &self.cursors
    }

    /// Evaluate one top-level row, emitting into `out`
    ///
    /// Every row starts from fresh cursors, so its output does not depend on
    /// the rows evaluated before it.
    pub fn render_row(&mut self, row: &Block, out: &mut RowBuffer) -> Result<()> {
        self.cursors.reset();
        self.block(row, self.columns, self.columns, row.wrap, out)?;
        Ok(())
    }

    /// Evaluate a statement with `columns` left on the current line
    ///
    /// Returns `None` when the statement is not applicable.
    pub fn evaluate(
        &mut self,
        statement: &Statement,
        columns: usize,
        width: usize,
        out: &mut RowBuffer,
    ) -> Result<Option<Fragment>> {
        self.statement(statement, columns, width, true, out)
    }

    /// `by_words` is the wrap mode of the enclosing block
    fn statement(
        &mut self,
        statement: &Statement,
        columns: usize,
        width: usize,
        by_words: bool,
        out: &mut RowBuffer,
    ) -> Result<Option<Fragment>> {
        match statement {
            Statement::Text(text) => Ok(Some(self.leaf(text.clone()))),
            Statement::Path(path) => {
                let text = resolve_text(self.source, path, &self.cursors);
                Ok(Some(self.leaf(text)))
            }
            Statement::Sequence(children) => {
                let mut flow = Flow::new(columns, width, by_words);
                for child in children {
                    let columns = flow.columns();
                    if let Some(fragment) = self.statement(child, columns, width, by_words, out)? {
                        flow.push(fragment);
                    }
                }
                Ok(flow.finish())
            }
            Statement::Block(block) => self.block(block, columns, width, by_words, out),
        }
    }

    fn leaf(&self, text: String) -> Fragment {
        Fragment::flowing(post_process(text, self.options))
    }

    fn block(
        &mut self,
        block: &Block,
        columns: usize,
        width: usize,
        by_words: bool,
        out: &mut RowBuffer,
    ) -> Result<Option<Fragment>> {
        if let Some(required) = &block.required {
            if !is_available(self.source, required, &self.cursors) {
                tracing::debug!(required = %required, "skipping block with unavailable resource");
                return Ok(None);
            }
        }

        let Some(list) = &block.list else {
            return self.iteration(block, columns, width, out);
        };

        let count = self.cursors.set_cursor(self.source, list, 0);
        let mut flow = Flow::new(columns, width, by_words);
        for position in 0..count {
            let columns = flow.columns();
            if let Some(fragment) = self.iteration(block, columns, width, out)? {
                flow.push(fragment);
            }
            self.cursors.set_cursor(self.source, list, position + 1);
        }
        Ok(flow.finish())
    }

    /// One pass over a block body; rows emit and yield nothing
    fn iteration(
        &mut self,
        block: &Block,
        columns: usize,
        width: usize,
        out: &mut RowBuffer,
    ) -> Result<Option<Fragment>> {
        if !block.row {
            return self.line(block, columns, width, out);
        }

        let tokens = block
            .style
            .as_deref()
            .map(|style| resolve_text(self.source, style, &self.cursors));
        let StyleResolution { columns, style } =
            resolve_style(block, self.columns, tokens.as_deref());

        if let Some(fragment) = self.line(block, columns, columns, out)? {
            out.write_text(fragment.text(), style, columns);
        }
        Ok(None)
    }

    fn line(
        &mut self,
        block: &Block,
        columns: usize,
        width: usize,
        out: &mut RowBuffer,
    ) -> Result<Option<Fragment>> {
        if let Some(graphic) = block.graphic {
            self.graphic(block, graphic, out);
            return Ok(None);
        }

        let layout = LineLayout::from_block(block);
        let (inner_columns, inner_width) = layout.inner(columns, width);
        let fragment = match &block.items {
            Some(items) => self.statement(items, inner_columns, inner_width, block.wrap, out)?,
            None => Some(Fragment::flowing(String::new())),
        };
        let Some(mut fragment) = fragment else {
            return Ok(None);
        };

        if let Some(spec) = &block.format {
            let formatted = self.formatter.format(spec, fragment.text())?;
            fragment = fragment.map(|_| formatted);
        }

        if block.is_layout_neutral() {
            return Ok(Some(fragment));
        }
        Ok(Some(layout.apply(fragment, columns, width)))
    }

    fn graphic(&self, block: &Block, graphic: Graphic, out: &mut RowBuffer) {
        let align = block.align.filter(|align| *align != Align::Left);
        if let Some(align) = align {
            out.push(Command::SetAlignment(align));
        }

        let data = block.data.as_deref().unwrap_or("");
        match graphic {
            Graphic::QrCode => {
                let payload = resolve_text(self.source, data, &self.cursors);
                out.push(Command::DrawQrCode(payload));
            }
            Graphic::Image => {
                let image = resolve(self.source, data, &self.cursors)
                    .map(Cow::into_owned)
                    .unwrap_or_else(|| Value::String(data.to_string()));
                out.push(Command::DrawImage(image));
            }
        }

        if align.is_some() {
            out.push(Command::SetAlignment(Align::Left));
        }
    }
}

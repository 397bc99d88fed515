//! Template rendering
//!
//! [`Renderer`] evaluates each top-level row of a [`Template`] against a JSON
//! data source and replays the resulting commands on an [`OutputSink`], one
//! row at a time and always in template order.

pub mod cursor;
pub mod eval;
pub mod format;
pub mod layout;
pub mod resolve;
pub mod style;
pub mod text;

pub use cursor::CursorStore;
pub use eval::Evaluator;
pub use format::{FormatError, Formatter, Printf};
pub use layout::{Fragment, LineLayout};
pub use style::{StyleResolution, resolve_style};

use serde_json::Value;
use std::sync::Arc;

use crate::config::RenderOptions;
use crate::error::{RenderError, Result};
use crate::sink::{OutputSink, RowBuffer};
use crate::template::Template;

/// Renders a template against a data source
#[derive(Clone)]
pub struct Renderer {
    template: Arc<Template>,
    source: Arc<Value>,
    options: RenderOptions,
    formatter: Arc<dyn Formatter>,
}

impl Renderer {
    pub fn new(template: impl Into<Arc<Template>>, source: impl Into<Arc<Value>>) -> Self {
        Self {
            template: template.into(),
            source: source.into(),
            options: RenderOptions::default(),
            formatter: Arc::new(Printf),
        }
    }

    pub fn with_options(mut self, options: RenderOptions) -> Self {
        self.options = options;
        self
    }

    /// Replace the printf formatter used for `format` specs
    pub fn with_formatter(mut self, formatter: impl Formatter + 'static) -> Self {
        self.formatter = Arc::new(formatter);
        self
    }

    pub fn template(&self) -> &Template {
        &self.template
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Render every row into `sink`
    ///
    /// The first evaluation or sink failure aborts the remaining rows.
    pub async fn render<S: OutputSink>(&self, sink: &mut S) -> Result<()> {
        let columns = sink.columns();
        tracing::debug!(
            rows = self.template.len(),
            columns,
            parallel = self.options.parallel,
            "Rendering template"
        );

        if self.options.parallel {
            self.render_parallel(sink, columns).await
        } else {
            self.render_sequential(sink, columns).await
        }
    }

    async fn render_sequential<S: OutputSink>(&self, sink: &mut S, columns: usize) -> Result<()> {
        let mut evaluator = Evaluator::new(
            &self.source,
            &self.options,
            self.formatter.as_ref(),
            columns,
        );

        for (index, row) in self.template.rows().iter().enumerate() {
            let mut buffer = RowBuffer::new();
            evaluator.render_row(row, &mut buffer)?;
            tracing::debug!(row = index, commands = buffer.len(), "Row evaluated");
            buffer.flush(sink).await?;
        }
        Ok(())
    }

    /// Evaluate rows on blocking workers and flush them in template order
    async fn render_parallel<S: OutputSink>(&self, sink: &mut S, columns: usize) -> Result<()> {
        let handles: Vec<_> = (0..self.template.len())
            .map(|index| {
                let template = Arc::clone(&self.template);
                let source = Arc::clone(&self.source);
                let formatter = Arc::clone(&self.formatter);
                let options = self.options.clone();

                tokio::task::spawn_blocking(move || -> Result<RowBuffer> {
                    let mut buffer = RowBuffer::new();
                    if let Some(row) = template.rows().get(index) {
                        let mut evaluator =
                            Evaluator::new(&source, &options, formatter.as_ref(), columns);
                        evaluator.render_row(row, &mut buffer)?;
                    }
                    Ok(buffer)
                })
            })
            .collect();

        for (index, handle) in handles.into_iter().enumerate() {
            let buffer = handle.await.map_err(|e| RenderError::TaskFailed {
                row: index,
                reason: e.to_string(),
            })??;
            tracing::debug!(row = index, commands = buffer.len(), "Row evaluated");
            buffer.flush(sink).await?;
        }
        Ok(())
    }
}

/// Render `template` against `data` with default options
pub async fn render<S: OutputSink>(template: Template, data: Value, sink: &mut S) -> Result<()> {
    Renderer::new(template, data).render(sink).await
}

use thiserror::Error;

use crate::render::format::FormatError;
use crate::sink::SinkError;
use crate::template::error::TemplateError;

#[derive(Error, Debug)]
pub enum RenderError {
    // Template errors
    #[error("TEMPLATE_INVALID: {0}")]
    Template(#[from] TemplateError),

    // Layout errors
    #[error("FORMAT_INVALID: {0}")]
    Format(#[from] FormatError),

    // Output errors
    #[error("SINK_FAILED: {0}")]
    Sink(#[from] SinkError),

    // Concurrency errors
    #[error("RENDER_TASK_FAILED: row {row}: {reason}")]
    TaskFailed { row: usize, reason: String },
}

pub type Result<T> = std::result::Result<T, RenderError>;

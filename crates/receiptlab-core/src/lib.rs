// Core modules
pub mod config;
pub mod error;
pub mod render;
pub mod sink;
pub mod template;

// Re-export commonly used types
pub use config::RenderOptions;
pub use error::{RenderError, Result};
pub use render::{FormatError, Formatter, Printf, Renderer, render};
pub use sink::{Align, Command, OutputSink, RowBuffer, SinkError, Style};
pub use template::{Block, Graphic, Statement, Template, TemplateError, load_data};

//! Output sink contract
//!
//! The renderer never talks to a device directly. Each row is evaluated into
//! a [`RowBuffer`] of [`Command`]s, and the buffer is replayed against an
//! [`OutputSink`] once the row is complete. Sinks own protocol encoding,
//! QR/image rasterization and transport.

use serde_json::Value;
use std::future::Future;
use thiserror::Error;

/// Horizontal alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

bitflags::bitflags! {
    /// Text style flags sent with every written line
    ///
    /// Combine with bitwise OR: `Style::BOLD | Style::ITALIC`
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Style: u8 {
        const BOLD = 1 << 0;
        const ITALIC = 1 << 1;
        const UNDERLINE = 1 << 2;
        const CONDENSED = 1 << 3;
        const DOUBLE_WIDTH = 1 << 4;
        const DOUBLE_HEIGHT = 1 << 5;
    }
}

/// Failures reported by a sink
#[derive(Error, Debug)]
pub enum SinkError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("device error: {0}")]
    Device(String),
}

/// Consumer of rendered lines and graphics, usually a printer driver
pub trait OutputSink {
    /// Column capacity for the current font
    fn columns(&self) -> usize;

    /// Emit one physical line
    fn write_line(
        &mut self,
        text: &str,
        style: Style,
    ) -> impl Future<Output = Result<(), SinkError>> + Send;

    /// Advance one blank line
    fn feed(&mut self) -> impl Future<Output = Result<(), SinkError>> + Send;

    fn set_alignment(&mut self, align: Align)
    -> impl Future<Output = Result<(), SinkError>> + Send;

    fn draw_qr_code(&mut self, payload: &str)
    -> impl Future<Output = Result<(), SinkError>> + Send;

    /// Draw an image; the handle is whatever the data source holds for it
    fn draw_image(&mut self, image: &Value)
    -> impl Future<Output = Result<(), SinkError>> + Send;
}

/// A deferred sink operation
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    WriteLine { text: String, style: Style },
    Feed,
    SetAlignment(Align),
    DrawQrCode(String),
    DrawImage(Value),
}

/// Ordered commands produced by one row
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RowBuffer {
    commands: Vec<Command>,
}

impl RowBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, command: Command) {
        self.commands.push(command);
    }

    /// Cut `text` into lines of at most `columns` characters
    ///
    /// Empty text advances one blank line.
    pub fn write_text(&mut self, text: &str, style: Style, columns: usize) {
        if text.is_empty() {
            self.push(Command::Feed);
            return;
        }
        let chars: Vec<char> = text.chars().collect();
        for line in chars.chunks(columns.max(1)) {
            self.push(Command::WriteLine {
                text: line.iter().collect(),
                style,
            });
        }
    }

    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Replay every command against the sink, stopping at the first failure
    pub async fn flush<S: OutputSink>(self, sink: &mut S) -> Result<(), SinkError> {
        for command in self.commands {
            match command {
                Command::WriteLine { text, style } => sink.write_line(&text, style).await?,
                Command::Feed => sink.feed().await?,
                Command::SetAlignment(align) => sink.set_alignment(align).await?,
                Command::DrawQrCode(payload) => sink.draw_qr_code(&payload).await?,
                Command::DrawImage(image) => sink.draw_image(&image).await?,
            }
        }
        Ok(())
    }
}

//! In-memory output sink for testing
//!
//! [`RecordingSink`] stands in for a printer driver: it records every call it
//! receives, in order, and can be told to start failing after a number of
//! calls to exercise error propagation.

use receiptlab_core::{Align, OutputSink, SinkError, Style};
use serde_json::Value;
use std::future::{Future, ready};

/// One call received by a [`RecordingSink`]
#[derive(Debug, Clone, PartialEq)]
pub enum SinkEvent {
    Line { text: String, style: Style },
    Feed,
    Align(Align),
    QrCode(String),
    Image(Value),
}

/// Sink that records calls instead of printing
#[derive(Debug, Clone)]
pub struct RecordingSink {
    columns: usize,
    events: Vec<SinkEvent>,
    fail_after: Option<usize>,
}

impl RecordingSink {
    pub fn new(columns: usize) -> Self {
        Self {
            columns,
            events: Vec::new(),
            fail_after: None,
        }
    }

    /// Accept `calls` operations, then fail every later one
    pub fn fail_after(mut self, calls: usize) -> Self {
        self.fail_after = Some(calls);
        self
    }

    /// Change the reported column capacity (like switching fonts)
    pub fn set_columns(&mut self, columns: usize) {
        self.columns = columns;
    }

    pub fn events(&self) -> &[SinkEvent] {
        &self.events
    }

    /// Printed text, one entry per written line or feed
    pub fn lines(&self) -> Vec<String> {
        self.events
            .iter()
            .filter_map(|event| match event {
                SinkEvent::Line { text, .. } => Some(text.clone()),
                SinkEvent::Feed => Some(String::new()),
                _ => None,
            })
            .collect()
    }

    /// Style flags of every written line
    pub fn styles(&self) -> Vec<Style> {
        self.events
            .iter()
            .filter_map(|event| match event {
                SinkEvent::Line { style, .. } => Some(*style),
                _ => None,
            })
            .collect()
    }

    fn record(&mut self, event: SinkEvent) -> Result<(), SinkError> {
        if self.fail_after.is_some_and(|limit| self.events.len() >= limit) {
            return Err(SinkError::Device("paper out".to_string()));
        }
        self.events.push(event);
        Ok(())
    }
}

impl OutputSink for RecordingSink {
    fn columns(&self) -> usize {
        self.columns
    }

    fn write_line(
        &mut self,
        text: &str,
        style: Style,
    ) -> impl Future<Output = Result<(), SinkError>> + Send {
        ready(self.record(SinkEvent::Line {
            text: text.to_string(),
            style,
        }))
    }

    fn feed(&mut self) -> impl Future<Output = Result<(), SinkError>> + Send {
        ready(self.record(SinkEvent::Feed))
    }

    fn set_alignment(&mut self, align: Align) -> impl Future<Output = Result<(), SinkError>> + Send {
        ready(self.record(SinkEvent::Align(align)))
    }

    fn draw_qr_code(&mut self, payload: &str) -> impl Future<Output = Result<(), SinkError>> + Send {
        ready(self.record(SinkEvent::QrCode(payload.to_string())))
    }

    fn draw_image(&mut self, image: &Value) -> impl Future<Output = Result<(), SinkError>> + Send {
        ready(self.record(SinkEvent::Image(image.clone())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_records_calls_in_order() {
        let mut sink = RecordingSink::new(48);
        sink.write_line("one", Style::BOLD).await.unwrap();
        sink.feed().await.unwrap();
        sink.set_alignment(Align::Center).await.unwrap();

        assert_eq!(
            sink.events(),
            &[
                SinkEvent::Line {
                    text: "one".to_string(),
                    style: Style::BOLD
                },
                SinkEvent::Feed,
                SinkEvent::Align(Align::Center),
            ]
        );
        assert_eq!(sink.lines(), vec!["one", ""]);
        assert_eq!(sink.styles(), vec![Style::BOLD]);
    }

    #[tokio::test]
    async fn test_fails_after_limit() {
        let mut sink = RecordingSink::new(48).fail_after(1);
        assert!(sink.feed().await.is_ok());
        let err = sink.feed().await.unwrap_err();
        assert!(matches!(err, SinkError::Device(_)));
        assert_eq!(sink.events().len(), 1);
    }

    #[test]
    fn test_set_columns() {
        let mut sink = RecordingSink::new(48);
        sink.set_columns(64);
        assert_eq!(sink.columns(), 64);
    }
}

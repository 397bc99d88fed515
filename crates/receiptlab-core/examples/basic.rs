//! Render a small coupon to stdout
//!
//! Graphics are printed as placeholders; a real driver would rasterize them.
//!
//! Usage: cargo run --example basic

use receiptlab_core::{Align, OutputSink, RenderOptions, Renderer, SinkError, Style, Template};
use serde_json::{Value, json};
use std::future::{Future, ready};
use std::io::Write;

/// Sink that draws the paper roll as text
struct ConsoleSink<W: Write> {
    out: W,
    columns: usize,
}

impl<W: Write> ConsoleSink<W> {
    fn emit(&mut self, line: &str) -> Result<(), SinkError> {
        writeln!(self.out, "|{:<width$}|", line, width = self.columns)?;
        Ok(())
    }
}

impl<W: Write + Send> OutputSink for ConsoleSink<W> {
    fn columns(&self) -> usize {
        self.columns
    }

    fn write_line(
        &mut self,
        text: &str,
        style: Style,
    ) -> impl Future<Output = Result<(), SinkError>> + Send {
        let line = if style.contains(Style::BOLD) {
            text.to_uppercase()
        } else {
            text.to_string()
        };
        ready(self.emit(&line))
    }

    fn feed(&mut self) -> impl Future<Output = Result<(), SinkError>> + Send {
        ready(self.emit(""))
    }

    fn set_alignment(&mut self, _align: Align) -> impl Future<Output = Result<(), SinkError>> + Send {
        ready(Ok(()))
    }

    fn draw_qr_code(&mut self, payload: &str) -> impl Future<Output = Result<(), SinkError>> + Send {
        ready(self.emit(&format!("[qrcode: {}]", payload)))
    }

    fn draw_image(&mut self, image: &Value) -> impl Future<Output = Result<(), SinkError>> + Send {
        ready(self.emit(&format!("[image: {}]", image)))
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let template = Template::from_json_str(
        r#"[
        {"items": "coupon.title", "align": "center", "style": "bold+", "width": "2x"},
        "",
        {"items": "Qrcode", "align": "right"},
        {"type": "qrcode", "data": "https://example.com/coupon/42", "align": "right"},
        "",
        {"items": "picture.title", "align": "center", "height": "2x"},
        {"type": "image", "data": "picture.image", "align": "center"},
        {
            "list": "coupon.items",
            "items": [
                "coupon.items[].name",
                {"items": ["  ", "coupon.items[].price"], "align": "right", "whitespace": "."}
            ]
        },
        {"whitespace": "="}
    ]"#,
    )?;

    let data = json!({
        "coupon": {
            "title": "Coupon Title",
            "items": [
                {"name": "Café com leite", "price": "$ 3.50"},
                {"name": "Pão de queijo", "price": "$ 2.00"}
            ]
        },
        "picture": {
            "title": "Picture Title",
            "image": {"width": 64, "height": 64, "path": "sample.png"}
        }
    });

    let mut sink = ConsoleSink {
        out: std::io::stdout(),
        columns: 32,
    };
    Renderer::new(template, data)
        .with_options(RenderOptions::default().remove_accents(true))
        .render(&mut sink)
        .await?;

    Ok(())
}

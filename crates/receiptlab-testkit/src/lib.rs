//! Test utilities for receiptlab
//!
//! This crate provides shared testing utilities used across the receiptlab workspace:
//! an in-memory [`RecordingSink`], template and data fixtures, and temporary
//! directories for file-loading tests.

pub mod fixtures;
pub mod mock;

pub use mock::{RecordingSink, SinkEvent};

use receiptlab_core::{RenderOptions, Renderer, Template};
use serde_json::Value;
use tempfile::TempDir;

/// Creates a temporary directory within `.tmp/` at the project root
///
/// This keeps test files in a single gitignored location that is easy to
/// clean up manually if needed.
///
/// # Panics
///
/// Panics if the current directory cannot be determined or `.tmp/` cannot be
/// created.
///
/// # Examples
///
/// ```rust
/// use receiptlab_testkit::temp_dir_in_workspace;
///
/// let temp = temp_dir_in_workspace();
/// let file_path = temp.path().join("template.json");
/// std::fs::write(&file_path, "[]").unwrap();
/// // Cleanup happens automatically when temp is dropped
/// ```
pub fn temp_dir_in_workspace() -> TempDir {
    let workspace_root = std::env::current_dir().expect("Failed to get current directory");

    let tmp_base = workspace_root.join(".tmp");

    // Ensure .tmp/ exists
    std::fs::create_dir_all(&tmp_base).expect("Failed to create .tmp directory");

    TempDir::new_in(&tmp_base).expect("Failed to create temporary directory in .tmp/")
}

/// Parse a JSON template, panicking on malformed fixtures
pub fn template(json: &str) -> Template {
    Template::from_json_str(json).expect("Fixture template should parse")
}

/// Render `template` into a fresh recording sink and return the printed lines
///
/// Feeds show up as empty strings.
///
/// # Examples
///
/// ```rust
/// use receiptlab_testkit::{render_lines, template};
/// use serde_json::json;
///
/// # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
/// let lines = render_lines(template(r#"["Line 1", "Line 2"]"#), json!({}), 10).await;
/// assert_eq!(lines, vec!["Line 1", "Line 2"]);
/// # });
/// ```
pub async fn render_lines(template: Template, data: Value, columns: usize) -> Vec<String> {
    render_with(template, data, columns, RenderOptions::default())
        .await
        .lines()
}

/// Render with explicit options and return the sink for inspection
pub async fn render_with(
    template: Template,
    data: Value,
    columns: usize,
    options: RenderOptions,
) -> RecordingSink {
    let mut sink = RecordingSink::new(columns);
    Renderer::new(template, data)
        .with_options(options)
        .render(&mut sink)
        .await
        .expect("Render should succeed");
    sink
}

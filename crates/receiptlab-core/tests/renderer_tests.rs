//! Integration tests for the renderer: ordering, failures and loading

use receiptlab_core::{
    FormatError, Formatter, RenderError, RenderOptions, Renderer, SinkError, Template,
    TemplateError, load_data, render,
};
use receiptlab_testkit::{RecordingSink, fixtures, render_with, temp_dir_in_workspace, template};
use serde_json::json;
use std::future::Future;
use std::task::{Context, Waker};

#[tokio::test]
async fn test_render_is_idempotent() {
    let renderer = Renderer::new(template(fixtures::TEXT_LIST_TEMPLATE), fixtures::items_data());

    let mut first = RecordingSink::new(48);
    renderer.render(&mut first).await.unwrap();
    let mut second = RecordingSink::new(48);
    renderer.render(&mut second).await.unwrap();

    assert!(!first.events().is_empty());
    assert_eq!(first.events(), second.events());
}

#[tokio::test]
async fn test_parallel_rows_keep_template_order() {
    let sequential = {
        let mut sink = RecordingSink::new(48);
        Renderer::new(template(fixtures::SUBLIST_TEMPLATE), fixtures::sublist_data())
            .render(&mut sink)
            .await
            .unwrap();
        sink
    };

    let mut parallel = RecordingSink::new(48);
    let renderer = Renderer::new(template(fixtures::SUBLIST_TEMPLATE), fixtures::sublist_data())
        .with_options(RenderOptions::default().parallel(true));
    renderer.render(&mut parallel).await.unwrap();

    assert_eq!(parallel.events(), sequential.events());
}

#[tokio::test]
async fn test_parallel_mode_prints_same_rows_after_list() {
    let rows = r#"[{"list": "items", "items": "items[].code"}, "items[].code"]"#;
    let data = json!({"items": [{"code": "A"}, {"code": "B"}]});

    let sequential = render_with(template(rows), data.clone(), 10, RenderOptions::default()).await;
    let parallel = render_with(
        template(rows),
        data,
        10,
        RenderOptions::default().parallel(true),
    )
    .await;

    assert_eq!(sequential.lines(), vec!["A", "B", "A"]);
    assert_eq!(parallel.events(), sequential.events());
}

#[test]
#[should_panic]
fn test_parallel_render_requires_runtime() {
    let renderer = Renderer::new(template(r#"["row"]"#), json!({}))
        .with_options(RenderOptions::default().parallel(true));
    let mut sink = RecordingSink::new(10);
    let mut future = std::pin::pin!(renderer.render(&mut sink));
    let mut context = Context::from_waker(Waker::noop());
    let _ = future.as_mut().poll(&mut context);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_parallel_render_many_rows() {
    let rows: Vec<String> = (0..64).map(|i| format!("\"row {}\"", i)).collect();
    let template = template(&format!("[{}]", rows.join(",")));

    let mut sink = RecordingSink::new(48);
    Renderer::new(template, json!({}))
        .with_options(RenderOptions::default().parallel(true))
        .render(&mut sink)
        .await
        .unwrap();

    let expected: Vec<String> = (0..64).map(|i| format!("row {}", i)).collect();
    assert_eq!(sink.lines(), expected);
}

#[tokio::test]
async fn test_sink_failure_aborts_render() {
    let mut sink = RecordingSink::new(10).fail_after(2);
    let result = render(
        template(fixtures::ADVANCE_LINES_TEMPLATE),
        json!({}),
        &mut sink,
    )
    .await;

    let err = result.unwrap_err();
    assert!(matches!(err, RenderError::Sink(SinkError::Device(_))));
    assert!(err.to_string().starts_with("SINK_FAILED"));
    assert_eq!(sink.lines(), vec!["First Line", ""]);
}

#[tokio::test]
async fn test_sink_failure_aborts_parallel_render() {
    let mut sink = RecordingSink::new(10).fail_after(1);
    let result = Renderer::new(template(fixtures::ADVANCE_LINES_TEMPLATE), json!({}))
        .with_options(RenderOptions::default().parallel(true))
        .render(&mut sink)
        .await;

    assert!(matches!(result, Err(RenderError::Sink(_))));
    assert_eq!(sink.lines(), vec!["First Line"]);
}

#[tokio::test]
async fn test_format_error_stops_before_failing_row() {
    let mut sink = RecordingSink::new(48);
    let result = render(
        template(r#"["Before", {"format": "%d", "items": "not a number"}, "After"]"#),
        json!({}),
        &mut sink,
    )
    .await;

    let err = result.unwrap_err();
    assert!(matches!(
        err,
        RenderError::Format(FormatError::InvalidArgument { .. })
    ));
    assert!(err.to_string().starts_with("FORMAT_INVALID"));
    assert_eq!(sink.lines(), vec!["Before"]);
}

struct Brackets;

impl Formatter for Brackets {
    fn format(&self, spec: &str, text: &str) -> Result<String, FormatError> {
        Ok(format!("[{}:{}]", spec, text))
    }
}

#[tokio::test]
async fn test_custom_formatter() {
    let mut sink = RecordingSink::new(48);
    Renderer::new(
        template(r#"[{"format": "price", "items": "total"}]"#),
        json!({"total": "9.90"}),
    )
    .with_formatter(Brackets)
    .render(&mut sink)
    .await
    .unwrap();

    assert_eq!(sink.lines(), vec!["[price:9.90]"]);
}

#[tokio::test]
async fn test_render_from_files() {
    let temp = temp_dir_in_workspace();
    let template_path = temp.path().join("receipt.json");
    let data_path = temp.path().join("data.toml");
    let options_path = temp.path().join("options.toml");

    std::fs::write(
        &template_path,
        r#"[{"items": "store.name", "align": "center"}, "store.city"]"#,
    )
    .unwrap();
    std::fs::write(
        &data_path,
        r#"
[store]
name = "Mercado"
city = "São Paulo"
"#,
    )
    .unwrap();
    std::fs::write(&options_path, "uppercase = true\nremove_accents = true\n").unwrap();

    let template = Template::from_file(&template_path).unwrap();
    let data = load_data(&data_path).unwrap();
    let options = RenderOptions::from_file(&options_path).unwrap();

    let mut sink = RecordingSink::new(11);
    Renderer::new(template, data)
        .with_options(options)
        .render(&mut sink)
        .await
        .unwrap();

    assert_eq!(sink.lines(), vec!["  MERCADO", "SAO PAULO"]);
}

#[test]
fn test_toml_template_file() {
    let temp = temp_dir_in_workspace();
    let path = temp.path().join("receipt.toml");
    std::fs::write(
        &path,
        r#"
rows = [
    "Line 1",
    { whitespace = "=" },
    { items = ["Total ", { items = "total", align = "right" }] },
]
"#,
    )
    .unwrap();

    let template = Template::from_file(&path).unwrap();
    assert_eq!(template.len(), 3);
    assert_eq!(template.rows()[1].whitespace, Some('='));
}

#[test]
fn test_missing_template_file() {
    let temp = temp_dir_in_workspace();
    let err = Template::from_file(temp.path().join("missing.json")).unwrap_err();
    assert!(matches!(err, TemplateError::Io { .. }));
}

#[test]
fn test_unsupported_template_extension() {
    let temp = temp_dir_in_workspace();
    let path = temp.path().join("receipt.yaml");
    std::fs::write(&path, "- Line 1").unwrap();
    let err = Template::from_file(&path).unwrap_err();
    assert!(matches!(err, TemplateError::UnsupportedFormat { .. }));
}

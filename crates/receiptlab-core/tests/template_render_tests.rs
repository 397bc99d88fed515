//! Integration tests for template-only receipts

use receiptlab_core::{Align, RenderOptions, Style};
use receiptlab_testkit::{
    SinkEvent, fixtures, render_lines, render_with, template,
};
use serde_json::json;

#[tokio::test]
async fn test_advance_lines() {
    let lines = render_lines(template(fixtures::ADVANCE_LINES_TEMPLATE), json!({}), 48).await;
    assert_eq!(lines, vec!["First Line", "", "", "Last Line"]);
}

#[tokio::test]
async fn test_text_lines() {
    let lines = render_lines(template(r#"["Line 1", "Line 2"]"#), json!({}), 10).await;
    assert_eq!(lines, vec!["Line 1", "Line 2"]);
}

#[tokio::test]
async fn test_whitespace_character() {
    let lines = render_lines(template(fixtures::WHITESPACE_TEMPLATE), json!({}), 10).await;
    assert_eq!(
        lines,
        vec!["- Line 1 -", "--- Line 2", "Line 1 ---", "=========="]
    );
}

#[tokio::test]
async fn test_word_wrap() {
    let template = template(
        r#"[
        {"items": "Suspendisse finibus ligula interdum, finibus augue vel, condimentum felis.", "style": "bold"},
        {"items": "Lorem ipsum dolor sit amet, consectetur adipiscing elit.", "align": "center", "width": "2x"},
        {"items": "Suspendisse finibus ligula interdum, finibus augue vel, condimentum felis.", "align": "right"}
    ]"#,
    );
    let sink = render_with(template, json!({}), 48, RenderOptions::default()).await;

    assert_eq!(
        sink.lines(),
        vec![
            "Suspendisse finibus ligula interdum, finibus    ".to_string(),
            "augue vel, condimentum felis.".to_string(),
            " Lorem ipsum dolor sit  ".to_string(),
            "   amet, consectetur    ".to_string(),
            "    adipiscing elit.".to_string(),
            "    Suspendisse finibus ligula interdum, finibus".to_string(),
            format!("{}augue vel, condimentum felis.", " ".repeat(19)),
        ]
    );
    assert_eq!(
        sink.styles(),
        vec![
            Style::BOLD,
            Style::BOLD,
            Style::DOUBLE_WIDTH,
            Style::DOUBLE_WIDTH,
            Style::DOUBLE_WIDTH,
            Style::empty(),
            Style::empty(),
        ]
    );
}

#[tokio::test]
async fn test_long_token_is_split_at_width() {
    let lines = render_lines(
        template(r#"[{"items": "Suspendisse.finibus-ligula_interdum", "align": "left"}]"#),
        json!({}),
        16,
    )
    .await;
    assert_eq!(lines, vec!["Suspendisse.fini", "bus-ligula_inter", "dum"]);
}

#[tokio::test]
async fn test_nested_hard_wrap_block() {
    let nested = render_lines(
        template(r#"[["Name: ", {"items": "aaaa bbbb cccc", "wrap": false}]]"#),
        json!({}),
        12,
    )
    .await;
    let whole_row = render_lines(
        template(r#"[{"items": ["Name: ", "aaaa bbbb cccc"], "wrap": false}]"#),
        json!({}),
        12,
    )
    .await;

    assert_eq!(nested, vec!["Name: aaaa b", "bbb cccc"]);
    assert_eq!(nested, whole_row);
}

#[tokio::test]
async fn test_stylized_text_inline() {
    let template = template(
        r#"[
        {"items": "Bold Text", "style": "bold"},
        {"items": "All Styles", "style": "bold+italic+underline+condensed+unknow"}
    ]"#,
    );
    let sink = render_with(template, json!({}), 48, RenderOptions::default()).await;
    assert_eq!(sink.lines(), vec!["Bold Text", "All Styles"]);
    assert_eq!(
        sink.styles(),
        vec![
            Style::BOLD,
            Style::BOLD | Style::ITALIC | Style::UNDERLINE | Style::CONDENSED,
        ]
    );
}

#[tokio::test]
async fn test_stylized_text_from_data() {
    let sink = render_with(
        template(fixtures::STYLES_TEMPLATE),
        fixtures::style_data(),
        48,
        RenderOptions::default(),
    )
    .await;
    assert_eq!(
        sink.lines(),
        vec![
            "Bold Text",
            "Italic Text",
            "Underline Text",
            "Condensed Text",
            "All Styles"
        ]
    );
    assert_eq!(
        sink.styles(),
        vec![
            Style::BOLD,
            Style::ITALIC,
            Style::UNDERLINE,
            Style::CONDENSED,
            Style::BOLD | Style::ITALIC | Style::UNDERLINE | Style::CONDENSED,
        ]
    );
}

#[tokio::test]
async fn test_condensed_row_uses_wider_lines() {
    let text = "x".repeat(60);
    let template = template(&format!(
        r#"[{{"items": "{}", "style": "condensed"}}, "{}"]"#,
        text, text
    ));
    let lines = render_lines(template, json!({}), 48).await;
    assert_eq!(lines, vec![text.clone(), "x".repeat(48), "x".repeat(12)]);
}

#[tokio::test]
async fn test_uppercase_text() {
    let sink = render_with(
        template(r#"[{"items": "UpperCase Text"}]"#),
        json!({}),
        48,
        RenderOptions::default().uppercase(true),
    )
    .await;
    assert_eq!(sink.lines(), vec!["UPPERCASE TEXT"]);
}

#[tokio::test]
async fn test_without_accents() {
    let template_json = r#"[{"items": "Ficção Científica"}]"#;

    let sink = render_with(
        template(template_json),
        json!({}),
        48,
        RenderOptions::default().remove_accents(true),
    )
    .await;
    assert_eq!(sink.lines(), vec!["Ficcao Cientifica"]);

    let sink = render_with(
        template(template_json),
        json!({}),
        48,
        RenderOptions::default().remove_accents(true).uppercase(true),
    )
    .await;
    assert_eq!(sink.lines(), vec!["FICCAO CIENTIFICA"]);
}

#[tokio::test]
async fn test_text_size() {
    let sink = render_with(
        template(fixtures::TEXT_SIZE_TEMPLATE),
        json!({}),
        48,
        RenderOptions::default(),
    )
    .await;
    assert_eq!(
        sink.lines(),
        vec!["Double Width", "Double Height", "Double Width and Height"]
    );
    assert_eq!(
        sink.styles(),
        vec![
            Style::DOUBLE_WIDTH,
            Style::DOUBLE_HEIGHT,
            Style::DOUBLE_WIDTH | Style::DOUBLE_HEIGHT,
        ]
    );
}

#[tokio::test]
async fn test_qrcode_align_left() {
    let sink = render_with(
        template(&fixtures::qrcode_template("left")),
        json!({}),
        48,
        RenderOptions::default(),
    )
    .await;
    assert_eq!(
        sink.events(),
        &[
            SinkEvent::Line {
                text: "_".repeat(48),
                style: Style::empty()
            },
            SinkEvent::QrCode("text from qrcode".to_string()),
            SinkEvent::Line {
                text: "-".repeat(48),
                style: Style::empty()
            },
        ]
    );
}

#[tokio::test]
async fn test_qrcode_align_restores_left() {
    for (name, align) in [("right", Align::Right), ("center", Align::Center)] {
        let sink = render_with(
            template(&fixtures::qrcode_template(name)),
            json!({}),
            48,
            RenderOptions::default(),
        )
        .await;
        assert_eq!(
            &sink.events()[1..4],
            &[
                SinkEvent::Align(align),
                SinkEvent::QrCode("text from qrcode".to_string()),
                SinkEvent::Align(Align::Left),
            ]
        );
        assert_eq!(sink.events().len(), 5);
    }
}

#[tokio::test]
async fn test_image_handle_from_data() {
    let image = json!({"width": 2, "height": 1, "pixels": [0, 255]});
    let sink = render_with(
        template(fixtures::IMAGE_TEMPLATE),
        json!({ "image": image.clone() }),
        48,
        RenderOptions::default(),
    )
    .await;
    assert_eq!(sink.events()[1], SinkEvent::Image(image));
    assert_eq!(sink.lines(), vec!["_".repeat(48), "-".repeat(48)]);
}

#[tokio::test]
async fn test_unresolved_image_uses_literal() {
    let sink = render_with(
        template(r#"[{"type": "image", "data": "logo.png"}]"#),
        json!({}),
        48,
        RenderOptions::default(),
    )
    .await;
    assert_eq!(sink.events(), &[SinkEvent::Image(json!("logo.png"))]);
}

#[tokio::test]
async fn test_unknown_type_prints_as_text() {
    let lines = render_lines(
        template(r#"[{"type": "barcode", "items": "fallback"}]"#),
        json!({}),
        48,
    )
    .await;
    assert_eq!(lines, vec!["fallback"]);
}

#[tokio::test]
async fn test_align_right_with_whitespace() {
    let sink = render_with(
        template(fixtures::ALIGN_RIGHT_TEMPLATE),
        json!({}),
        48,
        RenderOptions::default(),
    )
    .await;
    assert_eq!(
        sink.lines(),
        vec![
            format!("Total {} $ 5.68", ".".repeat(35)),
            format!("Paid {} $ 2.68", ".".repeat(12)),
        ]
    );
    assert_eq!(sink.styles(), vec![Style::empty(), Style::DOUBLE_WIDTH]);
}

#[tokio::test]
async fn test_format_using_sprintf() {
    let lines = render_lines(
        template(fixtures::SPRINTF_TEMPLATE),
        fixtures::sprintf_data(),
        48,
    )
    .await;
    assert_eq!(lines, vec![" 1/2", "000123"]);
}

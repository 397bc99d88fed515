//! Template and data fixtures
//!
//! Receipt templates in their JSON document form together with the data
//! sources they are rendered against.

use serde_json::{Value, json};

/// Empty rows advance the paper
pub const ADVANCE_LINES_TEMPLATE: &str = r#"["First Line", "", "", "Last Line"]"#;

pub const WHITESPACE_TEMPLATE: &str = r#"[
    {"whitespace": "-", "items": " Line 1 ", "align": "center"},
    {"whitespace": "-", "items": " Line 2", "align": "right"},
    {"whitespace": "-", "items": "Line 1 ", "align": "left"},
    {"whitespace": "="}
]"#;

pub const STYLES_TEMPLATE: &str = r#"[
    {"items": "Bold Text", "style": "bold"},
    {"items": "Italic Text", "style": "italic"},
    {"items": "Underline Text", "style": "underline"},
    {"items": "Condensed Text", "style": "condensed"},
    {"items": "All Styles", "style": "all"}
]"#;

/// Style tokens for [`STYLES_TEMPLATE`], looked up through the data source
pub fn style_data() -> Value {
    json!({
        "bold": "bold",
        "italic": "italic",
        "underline": "underline",
        "condensed": "condensed",
        "all": "bold+italic+underline+condensed+unknow"
    })
}

pub const TEXT_SIZE_TEMPLATE: &str = r#"[
    {"items": "Double Width", "width": "2x"},
    {"items": "Double Height", "height": "2x"},
    {"items": "Double Width and Height", "width": "2x", "height": "2x"}
]"#;

/// QR code framed by two filled rows
pub fn qrcode_template(align: &str) -> String {
    format!(
        r#"[
    {{"whitespace": "_"}},
    {{"type": "qrcode", "data": "text from qrcode", "align": "{}"}},
    {{"whitespace": "-"}}
]"#,
        align
    )
}

pub const IMAGE_TEMPLATE: &str = r#"[
    {"whitespace": "_"},
    {"type": "image", "data": "image"},
    {"whitespace": "-"}
]"#;

pub const AVAILABLE_RESOURCE_TEMPLATE: &str = r#"[
    {"items": "company.title", "align": "center"},
    {"items": "company.address", "required": "company.address"},
    {"items": "company.phone", "required": "product.phone"},
    {"items": "List Title", "align": "center", "required": "product.list"},
    {"items": {"items": "Footer", "align": "center", "required": "product.list"}}
]"#;

pub fn company_data() -> Value {
    json!({
        "company": {
            "title": "Company Name",
            "address": "Street Adress, 100, District, City - Country"
        },
        "product": {
            "list": []
        }
    })
}

/// Boxed table whose list rows carry borders
pub const TEXT_LIST_TEMPLATE: &str = r#"[
    {"items": ["┌", {"whitespace": "─", "align": "right", "items": "┐"}]},
    {"items": ["│", " CODE", " DESCRIPTION", {"items": [" PRICE", " │"], "align": "right"}]},
    {"items": ["├", {"whitespace": "─", "align": "right", "items": "┤"}]},
    {
        "list": "items",
        "items": [
            "items[].code",
            " ",
            "items[].description",
            {"items": [" ", "items[].price"], "align": "right", "wrap": false}
        ],
        "left": "│ ",
        "right": " │"
    },
    {"items": ["└", {"whitespace": "─", "align": "right", "items": "┘"}]}
]"#;

/// Boxed table with a bold item row and an optional italic observation row
pub const MULTILINE_LIST_TEMPLATE: &str = r#"[
    {"items": ["┌", {"whitespace": "─", "align": "right", "items": "┐"}]},
    {
        "list": "items",
        "items": [
            {
                "row": true,
                "style": "bold",
                "items": [
                    "items[].code",
                    " ",
                    "items[].description",
                    {"items": [" ", "items[].price"], "align": "right", "wrap": false}
                ],
                "left": "│ ",
                "right": " │"
            },
            {
                "left": "│ ",
                "items": "items[].observation",
                "right": " │",
                "row": true,
                "style": "italic",
                "height": "2x",
                "align": "center",
                "required": "items[].observation"
            }
        ]
    },
    {"items": ["└", {"whitespace": "─", "align": "right", "items": "┘"}]}
]"#;

pub fn items_data() -> Value {
    json!({
        "items": [
            {
                "code": "0001",
                "description": "Soda 2l",
                "observation": "Cold",
                "price": "$ 5"
            },
            {
                "code": "0002",
                "description": "Ultra Thin 20000mAh Portable External Battery Charger Power Bank for Cell Phone",
                "price": "$ 10.89"
            },
            {
                "code": "0003",
                "description": "Strawberry Juice 300ml",
                "price": "$ 5"
            }
        ]
    })
}

pub const SUBLIST_TEMPLATE: &str = r#"[
    {
        "items": [
            "Sublist ",
            "list.number",
            ": [ ",
            {
                "list": "list[].sublist",
                "items": [
                    {"required": "list[].sublist.!first", "items": ", "},
                    "list..sublist[]"
                ]
            },
            " ]"
        ],
        "list": "list"
    },
    {
        "items": [
            {"items": "single.0", "required": "single.first"},
            {"items": "single.index", "required": "single.!last"},
            {"items": "single.count", "required": "single.last"}
        ],
        "list": "single"
    }
]"#;

pub const OPTIONAL_LINES_TEMPLATE: &str = r#"[
    {
        "items": [
            {
                "list": "list[].sublist",
                "items": [{"required": "list.!first", "items": "list[].sublist[]"}]
            }
        ],
        "list": "list"
    }
]"#;

pub fn sublist_data() -> Value {
    json!({
        "list": [
            {"sublist": ["1", "2", "3"]},
            {"sublist": ["4", "5", "6"]},
            {"sublist": ["7", "8", "9"]}
        ],
        "single": ["first element", "middle element", "last element"]
    })
}

pub const ALIGN_RIGHT_TEMPLATE: &str = r#"[
    {
        "items": [
            "Total ",
            {"whitespace": ".", "align": "right", "wrap": false, "items": [" ", "$ 5.68"]}
        ]
    },
    {
        "width": "2x",
        "items": [
            "Paid ",
            {"whitespace": ".", "align": "right", "wrap": false, "items": [" ", "$ 2.68"]}
        ]
    }
]"#;

pub const SPRINTF_TEMPLATE: &str = r#"[
    {"format": "%4s", "items": "1/2"},
    {"format": "%06d", "items": "code"}
]"#;

pub fn sprintf_data() -> Value {
    json!({"code": 123})
}

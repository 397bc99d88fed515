//! Template and data-source loading
//!
//! Templates are parsed in two steps: serde reads the loosely-typed
//! document shape, then every node is converted into the typed
//! [`Statement`] tree so evaluation never inspects raw fields.

use serde::Deserialize;
use serde_json::Value;
use std::path::Path;

use super::error::TemplateError;
use super::model::{Block, Graphic, Statement, Template};
use crate::config::consts::DOUBLE_SIZE;
use crate::sink::Align;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawStatement {
    Text(String),
    Sequence(Vec<RawStatement>),
    Block(Box<RawBlock>),
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawBlock {
    items: Option<RawStatement>,
    list: Option<String>,
    required: Option<String>,
    align: Option<String>,
    whitespace: Option<String>,
    width: Option<String>,
    height: Option<String>,
    style: Option<String>,
    format: Option<String>,
    left: Option<String>,
    right: Option<String>,
    row: Option<bool>,
    wrap: Option<bool>,
    #[serde(rename = "type")]
    kind: Option<String>,
    data: Option<String>,
}

/// TOML documents keep their statements under `rows`
#[derive(Debug, Deserialize)]
struct TomlTemplate {
    #[serde(default)]
    rows: Vec<RawStatement>,
}

impl From<RawStatement> for Statement {
    fn from(raw: RawStatement) -> Self {
        match raw {
            RawStatement::Text(text) => Statement::Path(text),
            RawStatement::Sequence(items) => {
                Statement::Sequence(items.into_iter().map(Statement::from).collect())
            }
            RawStatement::Block(block) => Statement::block(Block::from(*block)),
        }
    }
}

impl From<RawBlock> for Block {
    fn from(raw: RawBlock) -> Self {
        Block {
            items: raw.items.map(Statement::from),
            list: raw.list,
            required: raw.required,
            align: raw.align.as_deref().and_then(parse_align),
            whitespace: raw.whitespace.and_then(|w| w.chars().next()),
            double_width: raw.width.as_deref() == Some(DOUBLE_SIZE),
            double_height: raw.height.as_deref() == Some(DOUBLE_SIZE),
            style: raw.style,
            format: raw.format,
            left: raw.left,
            right: raw.right,
            row: raw.row.unwrap_or(false),
            wrap: raw.wrap.unwrap_or(true),
            graphic: raw.kind.as_deref().and_then(parse_graphic),
            data: raw.data,
        }
    }
}

fn parse_align(value: &str) -> Option<Align> {
    match value {
        "left" => Some(Align::Left),
        "center" => Some(Align::Center),
        "right" => Some(Align::Right),
        _ => None,
    }
}

fn parse_graphic(value: &str) -> Option<Graphic> {
    match value {
        "qrcode" => Some(Graphic::QrCode),
        "image" => Some(Graphic::Image),
        _ => None,
    }
}

fn json_error(err: serde_json::Error) -> TemplateError {
    TemplateError::Parse {
        format: "json",
        message: err.to_string(),
    }
}

fn toml_error(err: toml::de::Error) -> TemplateError {
    TemplateError::Parse {
        format: "toml",
        message: err.to_string(),
    }
}

/// Supported document formats, picked by file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DocumentFormat {
    Json,
    Toml,
}

impl DocumentFormat {
    pub(crate) fn detect(path: &Path) -> Result<Self, TemplateError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(DocumentFormat::Json),
            Some("toml") => Ok(DocumentFormat::Toml),
            _ => Err(TemplateError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }
}

pub(crate) fn read_document(path: &Path) -> Result<String, TemplateError> {
    std::fs::read_to_string(path).map_err(|source| TemplateError::Io {
        path: path.to_path_buf(),
        source,
    })
}

impl Template {
    /// Parse a JSON array of statements
    pub fn from_json_str(content: &str) -> Result<Self, TemplateError> {
        let raw: Vec<RawStatement> = serde_json::from_str(content).map_err(json_error)?;
        Ok(raw.into_iter().map(Statement::from).collect())
    }

    /// Parse a TOML document holding a `rows` array
    pub fn from_toml_str(content: &str) -> Result<Self, TemplateError> {
        let raw: TomlTemplate = toml::from_str(content).map_err(toml_error)?;
        Ok(raw.rows.into_iter().map(Statement::from).collect())
    }

    /// Build a template from an in-memory JSON value
    pub fn from_value(value: Value) -> Result<Self, TemplateError> {
        let raw: Vec<RawStatement> = serde_json::from_value(value).map_err(json_error)?;
        Ok(raw.into_iter().map(Statement::from).collect())
    }

    /// Load a `.json` or `.toml` template file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, TemplateError> {
        let path = path.as_ref();
        let format = DocumentFormat::detect(path)?;
        let content = read_document(path)?;
        match format {
            DocumentFormat::Json => Self::from_json_str(&content),
            DocumentFormat::Toml => Self::from_toml_str(&content),
        }
    }
}

/// Load a data source from a `.json` or `.toml` file
pub fn load_data(path: impl AsRef<Path>) -> Result<Value, TemplateError> {
    let path = path.as_ref();
    let format = DocumentFormat::detect(path)?;
    let content = read_document(path)?;
    match format {
        DocumentFormat::Json => serde_json::from_str(&content).map_err(json_error),
        DocumentFormat::Toml => toml::from_str(&content).map_err(toml_error),
    }
}

//! Template module - declarative receipt layouts
//!
//! A template is an ordered list of statements; every top-level statement
//! becomes one printed row.
//!
//! ## Statements
//!
//! - `"company.title"`: a data path, printed verbatim when it does not resolve
//! - `["Total ", "order.total"]`: fragments concatenated on the same line
//! - `{ "items": ..., "align": "center", ... }`: a block with layout options
//!
//! ## Data binding
//!
//! - Nested access: `company.address.street`
//! - Absolute index: `items[0].code` or `items.0.code`
//! - Relative index inside a `list` block: `items[].code`
//! - Reserved words: `items.index`, `items.number`, `items.count`,
//!   `items.first`, `items.last`, `items.!first`, `items.!last`

pub mod error;
pub mod model;
pub mod parse;

pub use error::TemplateError;
pub use model::{Block, Graphic, Statement, Template};
pub use parse::load_data;

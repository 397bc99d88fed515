//! Template error types

use std::fmt;
use std::path::PathBuf;

/// Errors raised while loading templates, data sources or render options
#[derive(Debug)]
pub enum TemplateError {
    /// Document could not be parsed
    Parse {
        /// Document format ("json" or "toml")
        format: &'static str,
        /// Parser message
        message: String,
    },

    /// File extension does not name a supported format
    UnsupportedFormat {
        /// The offending path
        path: PathBuf,
    },

    /// File could not be read
    Io {
        /// The file being read
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for TemplateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateError::Parse { format, message } => {
                write!(f, "Failed to parse {} document: {}", format, message)
            }
            TemplateError::UnsupportedFormat { path } => {
                write!(
                    f,
                    "Unsupported file '{}'. Use a .json or .toml extension",
                    path.display()
                )
            }
            TemplateError::Io { path, source } => {
                write!(f, "Failed to read '{}': {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for TemplateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TemplateError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

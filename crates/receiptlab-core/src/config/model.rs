use serde::{Deserialize, Serialize};

use crate::template::parse::{read_document, DocumentFormat};
use crate::template::TemplateError;

/// Render options - text post-processing and row scheduling
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Upper-case every resolved leaf text
    pub uppercase: bool,
    /// Strip diacritics from every resolved leaf text
    #[serde(alias = "removeAccents")]
    pub remove_accents: bool,
    /// Evaluate top-level rows on worker tasks (emission stays in template order)
    pub parallel: bool,
}

impl RenderOptions {
    pub fn uppercase(mut self, enabled: bool) -> Self {
        self.uppercase = enabled;
        self
    }

    pub fn remove_accents(mut self, enabled: bool) -> Self {
        self.remove_accents = enabled;
        self
    }

    /// Evaluate top-level rows on blocking worker tasks
    ///
    /// # Panics
    ///
    /// Rendering with this enabled panics when it is not driven from within
    /// a tokio runtime.
    pub fn parallel(mut self, enabled: bool) -> Self {
        self.parallel = enabled;
        self
    }

    /// Whether leaf text needs any post-processing
    pub fn transforms_text(&self) -> bool {
        self.uppercase || self.remove_accents
    }

    /// Parse options from TOML
    pub fn from_toml_str(content: &str) -> Result<Self, TemplateError> {
        toml::from_str(content).map_err(|e| TemplateError::Parse {
            format: "toml",
            message: e.to_string(),
        })
    }

    /// Read options from a `.toml` or `.json` file
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self, TemplateError> {
        let path = path.as_ref();
        let format = DocumentFormat::detect(path)?;
        let content = read_document(path)?;
        match format {
            DocumentFormat::Toml => Self::from_toml_str(&content),
            DocumentFormat::Json => {
                serde_json::from_str(&content).map_err(|e| TemplateError::Parse {
                    format: "json",
                    message: e.to_string(),
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_options() {
        let options = RenderOptions::from_toml_str("").unwrap();
        assert_eq!(options, RenderOptions::default());
        assert!(!options.transforms_text());
    }

    #[test]
    fn test_parse_full_options() {
        let toml = r#"
uppercase = true
remove_accents = true
parallel = true
"#;
        let options = RenderOptions::from_toml_str(toml).unwrap();
        assert!(options.uppercase);
        assert!(options.remove_accents);
        assert!(options.parallel);
    }

    #[test]
    fn test_parse_camel_case_alias() {
        let options: RenderOptions =
            serde_json::from_str(r#"{"removeAccents": true}"#).unwrap();
        assert!(options.remove_accents);
        assert!(!options.uppercase);
    }

    #[test]
    fn test_builder() {
        let options = RenderOptions::default().uppercase(true).parallel(true);
        assert!(options.uppercase);
        assert!(options.parallel);
        assert!(options.transforms_text());
    }
}

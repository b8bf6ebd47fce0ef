//! Which documents the server answers completion requests for

use super::config::LanguageSettings;
use tower_lsp::lsp_types::Url;

/// Matches documents by client language id and URI scheme
#[derive(Debug, Clone)]
pub struct DocumentSelector {
    language_ids: Vec<String>,
    schemes: Vec<String>,
}

impl DocumentSelector {
    pub fn new(language_ids: Vec<String>, schemes: Vec<String>) -> Self {
        Self {
            language_ids,
            schemes,
        }
    }

    pub fn from_settings(settings: &LanguageSettings) -> Self {
        Self::new(settings.language_ids.clone(), settings.schemes.clone())
    }

    /// Both the language id and the URI scheme must be listed
    pub fn matches(&self, language_id: &str, uri: &Url) -> bool {
        self.language_ids.iter().any(|id| id == language_id)
            && self.schemes.iter().any(|scheme| scheme == uri.scheme())
    }
}

impl Default for DocumentSelector {
    fn default() -> Self {
        Self::from_settings(&LanguageSettings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_selector_accepts_rust_files() {
        let selector = DocumentSelector::default();
        let uri = Url::parse("file:///work/src/lib.rs").unwrap();

        assert!(selector.matches("rust", &uri));
        assert!(selector.matches("stylus-rust", &uri));
    }

    #[test]
    fn test_selector_rejects_other_languages() {
        let selector = DocumentSelector::default();
        let uri = Url::parse("file:///work/Cargo.toml").unwrap();

        assert!(!selector.matches("toml", &uri));
        assert!(!selector.matches("Rust", &uri));
    }

    #[test]
    fn test_selector_rejects_other_schemes() {
        let selector = DocumentSelector::default();
        let uri = Url::parse("untitled:Untitled-1").unwrap();

        assert!(!selector.matches("rust", &uri));
    }

    #[test]
    fn test_custom_selector() {
        let selector = DocumentSelector::new(
            vec!["stylus-rust".to_string()],
            vec!["file".to_string(), "untitled".to_string()],
        );

        assert!(selector.matches("stylus-rust", &Url::parse("untitled:Untitled-1").unwrap()));
        assert!(!selector.matches("rust", &Url::parse("file:///a.rs").unwrap()));
    }
}

//! Request and output types exchanged with a style engine.

use serde_json::{Map, Value};

/// A hook applied by the engine to styling text before evaluation.
///
/// Opaque to the plugin: it is handed to the engine inside the
/// [`TransformRequest`] and never invoked by the orchestration layer.
pub type Preprocessor = Box<dyn Fn(&str) -> String + Send + Sync>;

/// Per-file input handed to [`StyleEngine::transform`](crate::StyleEngine::transform).
///
/// Carries the file identifier, the optional preprocessor hook, and the
/// open-ended pass-through options forwarded verbatim from the plugin
/// configuration.
pub struct TransformRequest<'a> {
    /// Absolute path or module identifier of the file being transformed.
    pub filename: &'a str,

    /// Optional styling-text preprocessor supplied by the plugin user.
    pub preprocessor: Option<&'a Preprocessor>,

    /// Engine-specific options forwarded without interpretation.
    pub options: &'a Map<String, Value>,
}

/// The engine's output for one transformed file.
///
/// `code` always carries the rewritten module source (identical to the input
/// when nothing was extracted). The remaining fields are present only when
/// the engine extracted styling content or produced maps for it.
#[derive(Debug, Clone, Default)]
pub struct EngineOutput {
    /// The rewritten module source, styling literals replaced.
    pub code: String,

    /// Extracted stylesheet text, if any styling literals were found.
    pub css_text: Option<String>,

    /// Source map for the JavaScript/TypeScript-level rewrite.
    pub source_map: Option<String>,

    /// Source map for the extracted stylesheet (JSON text).
    pub css_source_map: Option<String>,
}

impl EngineOutput {
    /// Returns `true` if the engine extracted non-empty stylesheet text.
    pub fn has_css(&self) -> bool {
        self.css_text.as_deref().is_some_and(|css| !css.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_output_has_no_css() {
        let out = EngineOutput::default();
        assert!(!out.has_css());
    }

    #[test]
    fn empty_css_text_counts_as_no_css() {
        let out = EngineOutput {
            code: "let x = 1;".to_string(),
            css_text: Some(String::new()),
            ..Default::default()
        };
        assert!(!out.has_css());
    }

    #[test]
    fn nonempty_css_text_counts_as_css() {
        let out = EngineOutput {
            code: "let x = 1;".to_string(),
            css_text: Some("a{color:red}".to_string()),
            ..Default::default()
        };
        assert!(out.has_css());
    }
}

//! The [`StyleEngine`] trait.

use silica_common::Slug;

use crate::error::EngineError;
use crate::types::{EngineOutput, TransformRequest};

/// An external transformation engine that extracts CSS from module source.
///
/// Implementations parse the given source, statically evaluate styling
/// literals, and return the rewritten source together with any extracted
/// stylesheet text and source maps. Silica treats the engine as an opaque
/// collaborator: it never inspects how the extraction happens, only the
/// [`EngineOutput`] contract.
///
/// Engine failures (unparseable source, evaluation errors inside styling
/// expressions) are returned as [`EngineError`] and propagate unmodified
/// through the plugin to the host build.
pub trait StyleEngine: Send + Sync {
    /// Transforms one module's source, extracting styling literals.
    fn transform(
        &self,
        code: &str,
        request: &TransformRequest<'_>,
    ) -> Result<EngineOutput, EngineError>;

    /// Computes the deterministic slug of extracted stylesheet text.
    ///
    /// The plugin uses this slug to name the generated stylesheet file, so
    /// engines that override it must keep it a pure function of the text.
    fn slugify(&self, css: &str) -> Slug {
        Slug::of(css)
    }
}

impl<E: StyleEngine + ?Sized> StyleEngine for std::sync::Arc<E> {
    fn transform(
        &self,
        code: &str,
        request: &TransformRequest<'_>,
    ) -> Result<EngineOutput, EngineError> {
        (**self).transform(code, request)
    }

    fn slugify(&self, css: &str) -> Slug {
        (**self).slugify(css)
    }
}

impl<E: StyleEngine + ?Sized> StyleEngine for Box<E> {
    fn transform(
        &self,
        code: &str,
        request: &TransformRequest<'_>,
    ) -> Result<EngineOutput, EngineError> {
        (**self).transform(code, request)
    }

    fn slugify(&self, css: &str) -> Slug {
        (**self).slugify(css)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Map;

    /// Minimal engine that never extracts anything.
    struct PassThrough;

    impl StyleEngine for PassThrough {
        fn transform(
            &self,
            code: &str,
            _request: &TransformRequest<'_>,
        ) -> Result<EngineOutput, EngineError> {
            Ok(EngineOutput {
                code: code.to_string(),
                ..Default::default()
            })
        }
    }

    #[test]
    fn default_slugify_is_content_derived() {
        let engine = PassThrough;
        assert_eq!(engine.slugify("a{color:red}"), Slug::of("a{color:red}"));
    }

    #[test]
    fn pass_through_engine_reports_no_css() {
        let engine = PassThrough;
        let options = Map::new();
        let request = TransformRequest {
            filename: "/src/app.ts",
            preprocessor: None,
            options: &options,
        };
        let out = engine.transform("let x = 1;", &request).unwrap();
        assert_eq!(out.code, "let x = 1;");
        assert!(!out.has_css());
    }
}

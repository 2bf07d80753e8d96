//! Error type reported by style engines.

/// Errors an engine can report while transforming a module.
///
/// The plugin never catches these: they propagate to the host build, which
/// decides whether to abort. The messages are the engine's own; no
/// additional wrapping is applied on the way up.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// The module source could not be parsed.
    #[error("failed to parse {filename}: {reason}")]
    Parse {
        /// The file that failed to parse.
        filename: String,
        /// The engine's description of the parse failure.
        reason: String,
    },

    /// A styling expression could not be statically evaluated.
    #[error("failed to evaluate styling expression in {filename}: {reason}")]
    Eval {
        /// The file containing the failing expression.
        filename: String,
        /// The engine's description of the evaluation failure.
        reason: String,
    },

    /// Any other engine-specific failure.
    #[error("{0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_error_display() {
        let err = EngineError::Parse {
            filename: "/src/app.ts".to_string(),
            reason: "unexpected token".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("failed to parse"));
        assert!(msg.contains("/src/app.ts"));
        assert!(msg.contains("unexpected token"));
    }

    #[test]
    fn eval_error_display() {
        let err = EngineError::Eval {
            filename: "button.tsx".to_string(),
            reason: "undefined interpolation".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("styling expression"));
        assert!(msg.contains("undefined interpolation"));
    }

    #[test]
    fn other_error_is_verbatim() {
        let err = EngineError::Other("engine exploded".to_string());
        assert_eq!(err.to_string(), "engine exploded");
    }
}

//! Error types for plugin orchestration.

use std::path::PathBuf;

use silica_engine::EngineError;

/// Errors that can occur while orchestrating a build session.
///
/// Engine failures pass through transparently so the host build surfaces
/// the engine's own message. Filesystem errors carry the offending path.
/// A missing virtual module is never an error; lookups simply return
/// `None` and the host falls through to normal resolution.
#[derive(Debug, thiserror::Error)]
pub enum PluginError {
    /// An I/O error occurred while writing or cleaning the cache directory.
    #[error("I/O error at {path}: {source}")]
    Io {
        /// The path that caused the error.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// An include or exclude glob pattern could not be compiled.
    #[error("invalid glob pattern '{pattern}': {reason}")]
    InvalidPattern {
        /// The offending pattern.
        pattern: String,
        /// Description of the problem.
        reason: String,
    },

    /// The external transformation engine failed. Propagated unmodified.
    #[error(transparent)]
    Engine(#[from] EngineError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_display() {
        let err = PluginError::Io {
            path: PathBuf::from("/tmp/.silica-cache/button_x1y2.css"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        let msg = err.to_string();
        assert!(msg.contains("I/O error"));
        assert!(msg.contains("button_x1y2.css"));
    }

    #[test]
    fn invalid_pattern_display() {
        let err = PluginError::InvalidPattern {
            pattern: "src/[".to_string(),
            reason: "unclosed character class".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("src/["));
        assert!(msg.contains("unclosed character class"));
    }

    #[test]
    fn engine_error_passes_through_verbatim() {
        let engine_err = EngineError::Other("evaluation blew up".to_string());
        let err = PluginError::from(engine_err);
        assert_eq!(err.to_string(), "evaluation blew up");
    }
}

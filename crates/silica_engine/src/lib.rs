//! Contract for the external style transformation engine.
//!
//! Silica does not evaluate styling literals itself. The actual
//! source-to-CSS transformation (parsing, static evaluation of tagged
//! template expressions, CSS and source-map generation) is performed by an
//! engine implementing the [`StyleEngine`] trait. This crate defines that
//! contract: the per-file request, the engine's output, and the engine's
//! error type. The plugin consumes engines only through this interface.

#![warn(missing_docs)]

pub mod engine;
pub mod error;
pub mod types;

pub use engine::StyleEngine;
pub use error::EngineError;
pub use types::{EngineOutput, Preprocessor, TransformRequest};

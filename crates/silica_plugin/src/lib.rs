//! Bundler-side orchestration for zero-runtime CSS extraction.
//!
//! This crate wires an external [`StyleEngine`](silica_engine::StyleEngine)
//! into a host bundler's per-file hooks. A [`BuildSession`] decides which
//! files to feed the engine, registers generated stylesheets as virtual
//! modules so the bundler can resolve the synthetic imports, mirrors them to
//! an on-disk cache directory, and deletes that directory when the build
//! completes.
//!
//! Hook mapping for a typical host:
//! - per-file transform → [`BuildSession::transform`]
//! - module resolution → [`BuildSession::resolve_id`]
//! - module loading → [`BuildSession::load`]
//! - build completion → [`BuildSession::close_bundle`]

#![warn(missing_docs)]

pub mod cache;
pub mod error;
pub mod fsops;
pub mod options;
pub mod session;

pub use cache::VirtualModules;
pub use error::PluginError;
pub use options::{PluginOptions, SourceFilter};
pub use session::{BuildSession, TransformOutput};

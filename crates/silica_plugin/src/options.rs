//! Plugin configuration and the compiled source-file filter.

use std::path::{Path, PathBuf};

use globset::{Glob, GlobSet, GlobSetBuilder};
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::PluginError;

/// Construction-time options for a build session.
///
/// Deserializable so host tooling can embed the options in its own
/// configuration format. Every field has a default: with no options at all,
/// every file passes the filter, source maps are off, and the cache lives at
/// the default location under the project directory.
///
/// The preprocessor hook is not part of the options (callbacks do not
/// deserialize); it is supplied separately via
/// [`BuildSession::with_preprocessor`](crate::BuildSession::with_preprocessor).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PluginOptions {
    /// Glob patterns for files to process. Empty means "everything".
    pub include: Vec<String>,

    /// Glob patterns for files to skip. Exclusion wins over inclusion.
    pub exclude: Vec<String>,

    /// Embed the stylesheet's source map as a trailing base64 data URI.
    pub source_map: bool,

    /// Override for the on-disk cache directory. Relative paths are
    /// resolved against the current working directory.
    pub cache_dir: Option<PathBuf>,

    /// Open-ended options forwarded verbatim to the transformation engine.
    pub engine_options: Map<String, Value>,
}

/// Include/exclude filter compiled from glob patterns.
///
/// Built once at session construction; matching is cheap per file.
#[derive(Debug)]
pub struct SourceFilter {
    /// Compiled include set, or `None` when every file is included.
    include: Option<GlobSet>,

    /// Compiled exclude set.
    exclude: GlobSet,
}

impl SourceFilter {
    /// Compiles a filter from include and exclude glob patterns.
    ///
    /// An empty include list means all files pass (subject to excludes).
    pub fn new(include: &[String], exclude: &[String]) -> Result<Self, PluginError> {
        let include = if include.is_empty() {
            None
        } else {
            Some(build_globset(include)?)
        };
        Ok(Self {
            include,
            exclude: build_globset(exclude)?,
        })
    }

    /// Returns `true` if the given file identifier should be processed.
    pub fn matches(&self, id: &str) -> bool {
        let path = Path::new(id);
        if self.exclude.is_match(path) {
            return false;
        }
        match &self.include {
            Some(set) => set.is_match(path),
            None => true,
        }
    }
}

/// Compiles a list of glob patterns into a single matcher.
fn build_globset(patterns: &[String]) -> Result<GlobSet, PluginError> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = Glob::new(pattern).map_err(|e| PluginError::InvalidPattern {
            pattern: pattern.clone(),
            reason: e.to_string(),
        })?;
        builder.add(glob);
    }
    builder.build().map_err(|e| PluginError::InvalidPattern {
        pattern: patterns.join(", "),
        reason: e.to_string(),
    })
}

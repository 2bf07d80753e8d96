//! Build-session orchestration of the transform, resolve, load, and
//! cleanup hooks.

use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

use base64::prelude::BASE64_STANDARD;
use base64::Engine as _;
use silica_engine::{Preprocessor, StyleEngine, TransformRequest};

use crate::cache::VirtualModules;
use crate::error::PluginError;
use crate::fsops;
use crate::options::{PluginOptions, SourceFilter};

/// Default on-disk cache directory, relative to the working directory.
const DEFAULT_CACHE_DIR: &str = ".silica-cache";

/// Script extensions stripped from a basename when naming the generated
/// stylesheet.
const SCRIPT_EXTENSIONS: [&str; 4] = [".js", ".jsx", ".ts", ".tsx"];

/// Result of transforming one module that contained styling literals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformOutput {
    /// Rewritten module source, ending with the synthetic stylesheet import.
    pub code: String,

    /// Source map for the JavaScript/TypeScript-level rewrite, if the
    /// engine produced one.
    pub map: Option<String>,
}

/// One build's worth of extraction state.
///
/// Owns the transformation engine, the compiled file filter, and the
/// virtual module cache. Each concurrent build (for example in a
/// long-running dev server) gets its own session, so sessions never
/// cross-contaminate. All hooks take `&self`: the cache is guarded by a
/// mutex so hosts that parallelize transform calls across threads stay
/// correct, and the lock is uncontended under sequential hosts.
pub struct BuildSession<E> {
    /// The external transformation engine.
    engine: E,

    /// Construction-time options.
    options: PluginOptions,

    /// Compiled include/exclude filter.
    filter: SourceFilter,

    /// Optional styling-text preprocessor forwarded to the engine.
    preprocessor: Option<Preprocessor>,

    /// Absolute root of the on-disk stylesheet cache.
    cache_root: PathBuf,

    /// Synthetic path → generated stylesheet text.
    modules: Mutex<VirtualModules>,
}

impl<E: StyleEngine> BuildSession<E> {
    /// Creates a session for one build.
    ///
    /// Compiles the include/exclude globs and resolves the cache root
    /// (defaulting to `.silica-cache` under the current working directory).
    pub fn new(engine: E, options: PluginOptions) -> Result<Self, PluginError> {
        let filter = SourceFilter::new(&options.include, &options.exclude)?;
        let cache_root = resolve_cache_root(options.cache_dir.as_deref())?;
        Ok(Self {
            engine,
            options,
            filter,
            preprocessor: None,
            cache_root,
            modules: Mutex::new(VirtualModules::new()),
        })
    }

    /// Attaches a styling-text preprocessor, passed through to the engine.
    pub fn with_preprocessor(mut self, preprocessor: Preprocessor) -> Self {
        self.preprocessor = Some(preprocessor);
        self
    }

    /// The root directory of the on-disk stylesheet cache.
    pub fn cache_root(&self) -> &Path {
        &self.cache_root
    }

    /// Number of synthetic modules registered so far in this session.
    pub fn virtual_module_count(&self) -> usize {
        self.modules().len()
    }

    /// Per-file transform hook.
    ///
    /// Returns `Ok(None)` when the file is filtered out, is itself a
    /// synthetic module flowing back through the pipeline, or contains no
    /// extractable styling. Otherwise registers the generated stylesheet as
    /// a virtual module, mirrors it to disk, and returns the rewritten
    /// source with a trailing side-effect import of the synthetic path.
    ///
    /// Engine and filesystem failures propagate unmodified; the host
    /// decides whether the build aborts.
    pub fn transform(
        &self,
        code: &str,
        id: &str,
    ) -> Result<Option<TransformOutput>, PluginError> {
        // Skip ignored files and generated stylesheets re-entering the
        // pipeline. Neither reaches the engine.
        if !self.filter.matches(id) || self.modules().contains(id) {
            return Ok(None);
        }

        let request = TransformRequest {
            filename: id,
            preprocessor: self.preprocessor.as_ref(),
            options: &self.options.engine_options,
        };
        let output = self.engine.transform(code, &request)?;

        let Some(mut css) = output.css_text.filter(|css| !css.is_empty()) else {
            return Ok(None);
        };

        let slug = self.engine.slugify(&css);
        let basename = basename_of(id);
        let synthetic = self
            .cache_root
            .join(format!("{}_{slug}.css", strip_script_extension(basename)));
        let key = synthetic.to_string_lossy().into_owned();

        if self.options.source_map {
            if let Some(css_map) = &output.css_source_map {
                css.push_str("/*# sourceMappingURL=data:application/json;base64,");
                BASE64_STANDARD.encode_string(css_map.as_bytes(), &mut css);
                css.push_str("*/");
            }
        }

        self.modules().register(&key, &css);

        // Side-effect import so the host's module graph includes the
        // stylesheet as a dependency of the original module. JSON string
        // syntax gives the escaping the import statement needs.
        let mut code = output.code;
        code.push_str("\nimport ");
        code.push_str(&serde_json::Value::String(key.clone()).to_string());
        code.push_str(";\n");

        fsops::write_file_recursive(&synthetic, &css)?;

        log::debug!("extracted styles from {basename}");

        Ok(Some(TransformOutput {
            code,
            map: output.source_map,
        }))
    }

    /// Module-resolution hook: `Some(id)` iff `id` is a synthetic module.
    ///
    /// Keeps the host's resolver from attempting filesystem resolution for
    /// generated stylesheet paths. An unknown id falls through to normal
    /// resolution.
    pub fn resolve_id(&self, id: &str) -> Option<String> {
        self.modules().resolve(id)
    }

    /// Module-loading hook: stylesheet text for a synthetic module.
    pub fn load(&self, id: &str) -> Option<String> {
        self.modules().lookup(id)
    }

    /// Build-completion hook: deletes the on-disk cache directory tree.
    ///
    /// The in-memory cache is authoritative for the build that just
    /// finished, so the disk mirror can go unconditionally; a cache
    /// directory that was never created is a no-op.
    pub fn close_bundle(&self) -> Result<(), PluginError> {
        fsops::delete_all(&self.cache_root)
    }

    /// Locks the virtual module cache, recovering from poisoning.
    ///
    /// A panic in another thread mid-registration leaves at worst one
    /// benign extra entry, so continuing with the inner state is safe.
    fn modules(&self) -> MutexGuard<'_, VirtualModules> {
        self.modules.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Resolves the cache root to an absolute path.
fn resolve_cache_root(cache_dir: Option<&Path>) -> Result<PathBuf, PluginError> {
    let dir = cache_dir.unwrap_or(Path::new(DEFAULT_CACHE_DIR));
    if dir.is_absolute() {
        return Ok(dir.to_path_buf());
    }
    let cwd = std::env::current_dir().map_err(|e| PluginError::Io {
        path: PathBuf::from("."),
        source: e,
    })?;
    Ok(cwd.join(dir))
}

/// Returns the final path component of a module identifier.
fn basename_of(id: &str) -> &str {
    Path::new(id)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(id)
}

/// Strips a trailing script extension (`.js`, `.jsx`, `.ts`, `.tsx`).
fn strip_script_extension(name: &str) -> &str {
    for ext in SCRIPT_EXTENSIONS {
        if let Some(stem) = name.strip_suffix(ext) {
            return stem;
        }
    }
    name
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basename_of_absolute_path() {
        assert_eq!(basename_of("/project/src/button.ts"), "button.ts");
    }

    #[test]
    fn basename_of_bare_name() {
        assert_eq!(basename_of("button.ts"), "button.ts");
    }

    #[test]
    fn strip_known_script_extensions() {
        assert_eq!(strip_script_extension("button.ts"), "button");
        assert_eq!(strip_script_extension("button.tsx"), "button");
        assert_eq!(strip_script_extension("button.js"), "button");
        assert_eq!(strip_script_extension("button.jsx"), "button");
    }

    #[test]
    fn strip_unknown_extension_is_kept() {
        assert_eq!(strip_script_extension("styles.css"), "styles.css");
        assert_eq!(strip_script_extension("noext"), "noext");
    }

    #[test]
    fn strip_only_the_final_extension() {
        assert_eq!(strip_script_extension("button.test.ts"), "button.test");
    }

    #[test]
    fn resolve_cache_root_default_is_absolute() {
        let root = resolve_cache_root(None).unwrap();
        assert!(root.is_absolute());
        assert!(root.ends_with(DEFAULT_CACHE_DIR));
    }

    #[test]
    fn resolve_cache_root_absolute_override() {
        let root = resolve_cache_root(Some(Path::new("/tmp/silica"))).unwrap();
        assert_eq!(root, PathBuf::from("/tmp/silica"));
    }

    #[test]
    fn resolve_cache_root_relative_override_is_absolutized() {
        let root = resolve_cache_root(Some(Path::new("build/css-cache"))).unwrap();
        assert!(root.is_absolute());
        assert!(root.ends_with("build/css-cache"));
    }
}

//! Template store layout and discovery.
//!
//! A store is a directory tree `<base>/<family>/<name>/**`. The family and
//! name are single path segments; everything below the resolved root belongs
//! to the template. Files ending in [`TEMPLATE_SUFFIX`] are rendered, all
//! other files pass through verbatim.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{TemplateError, TemplateResult};

/// Marker suffix identifying files that go through the renderer.
pub const TEMPLATE_SUFFIX: &str = ".j2";

/// A single source file discovered under a template root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateFile {
    /// Path relative to the template root, forward-slash separated.
    pub relative_path: String,
    /// Absolute location on disk.
    pub source_path: PathBuf,
}

impl TemplateFile {
    /// Whether this file is rendered rather than copied verbatim.
    pub fn is_template(&self) -> bool {
        self.relative_path.ends_with(TEMPLATE_SUFFIX)
    }

    /// Output path with the marker suffix stripped.
    pub fn output_path(&self) -> String {
        match self.relative_path.strip_suffix(TEMPLATE_SUFFIX) {
            Some(stripped) => stripped.to_string(),
            None => self.relative_path.clone(),
        }
    }
}

/// Read-only view over a template store directory.
pub struct TemplateStore {
    base_dir: PathBuf,
}

impl TemplateStore {
    /// Create a store rooted at the given base directory.
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// Base directory of the store.
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Resolve the root directory for a (family, name) pair.
    ///
    /// Family and name must each be a single clean path segment; anything
    /// else cannot address a template and reports as not found, which also
    /// keeps lookups from escaping the store.
    pub fn resolve_root(&self, family: &str, name: &str) -> TemplateResult<PathBuf> {
        if !is_clean_segment(family) || !is_clean_segment(name) {
            return Err(not_found(family, name));
        }
        let root = self.base_dir.join(family).join(name);
        if !root.is_dir() {
            return Err(not_found(family, name));
        }
        Ok(root)
    }

    /// Collect every file under a template root, sorted by relative path.
    ///
    /// Directories themselves are not listed; only their files are. Any
    /// traversal failure aborts the collection.
    pub fn collect_files(&self, root: &Path) -> TemplateResult<Vec<TemplateFile>> {
        let mut files = Vec::new();
        for entry in WalkDir::new(root).min_depth(1) {
            let entry = entry.map_err(|e| walk_error(root, e))?;
            if entry.file_type().is_dir() {
                continue;
            }
            // Root is a prefix of every entry walkdir yields below it.
            let relative = entry.path().strip_prefix(root).unwrap();
            files.push(TemplateFile {
                relative_path: slash_path(relative),
                source_path: entry.into_path(),
            });
        }
        files.sort_by(|a, b| a.relative_path.cmp(&b.relative_path));
        Ok(files)
    }
}

/// Join path components with forward slashes regardless of host platform.
pub(crate) fn slash_path(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

fn is_clean_segment(segment: &str) -> bool {
    !segment.is_empty() && segment != "." && segment != ".." && !segment.contains(['/', '\\'])
}

fn not_found(family: &str, name: &str) -> TemplateError {
    TemplateError::NotFound {
        family: family.to_string(),
        name: name.to_string(),
    }
}

fn walk_error(root: &Path, err: walkdir::Error) -> TemplateError {
    let path = err
        .path()
        .and_then(|p| p.strip_prefix(root).ok())
        .map(slash_path)
        .unwrap_or_else(|| ".".to_string());
    TemplateError::Io {
        path,
        source: err.into(),
    }
}

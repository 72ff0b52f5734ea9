//! File generation from stored templates.

use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, info};

use crate::error::{TemplateError, TemplateResult};
use crate::renderer::TemplateRenderer;
use crate::store::{TemplateFile, TemplateStore};

/// A single generated output file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedFile {
    /// Output path relative to the template root, forward-slash separated.
    pub path: String,
    /// Final file content.
    pub content: String,
}

impl GeneratedFile {
    /// Create a generated file from a path and its content.
    pub fn new(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Copy of this file re-rooted under a directory prefix.
    pub fn with_prefix(&self, prefix: &str) -> GeneratedFile {
        GeneratedFile {
            path: format!("{}/{}", prefix.trim_end_matches('/'), self.path),
            content: self.content.clone(),
        }
    }
}

/// Renders a named template directory tree into an ordered list of files.
///
/// Generation is all-or-nothing: the first failure aborts the call and no
/// partial output escapes. The store itself is never written to.
pub struct TemplateGenerator {
    store: TemplateStore,
    renderer: TemplateRenderer,
}

impl TemplateGenerator {
    /// Create a generator over the given store base directory.
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        let base_dir = base_dir.into();
        let renderer = TemplateRenderer::new(&base_dir);
        Self {
            store: TemplateStore::new(base_dir),
            renderer,
        }
    }

    /// Render every file under `<base>/<family>/<name>` with the context.
    ///
    /// Files carrying the `.j2` suffix are rendered, the suffix is stripped
    /// from their output path, and exactly one trailing newline is appended
    /// to the rendered text. Every other file is passed through untouched.
    /// Output order is deterministic: sorted by relative path.
    pub fn generate(
        &self,
        family: &str,
        name: &str,
        context: &Map<String, Value>,
    ) -> TemplateResult<Vec<GeneratedFile>> {
        let root = self.store.resolve_root(family, name)?;
        let files = self.store.collect_files(&root)?;
        debug!("Template {}/{}: {} source files", family, name, files.len());

        let mut output = Vec::with_capacity(files.len());
        let mut seen = HashSet::new();
        for file in &files {
            let generated = if file.is_template() {
                self.render_file(family, name, file, context)?
            } else {
                copy_file(file)?
            };
            if !seen.insert(generated.path.clone()) {
                return Err(TemplateError::DuplicateOutput {
                    family: family.to_string(),
                    name: name.to_string(),
                    path: generated.path,
                });
            }
            output.push(generated);
        }

        info!("Generated {} files from {}/{}", output.len(), family, name);
        Ok(output)
    }

    fn render_file(
        &self,
        family: &str,
        name: &str,
        file: &TemplateFile,
        context: &Map<String, Value>,
    ) -> TemplateResult<GeneratedFile> {
        let template_ref = format!("{}/{}/{}", family, name, file.relative_path);
        let source = read_source(file)?;
        let mut content = self.renderer.render(&template_ref, &source, context)?;
        content.push('\n');
        Ok(GeneratedFile {
            path: file.output_path(),
            content,
        })
    }
}

fn copy_file(file: &TemplateFile) -> TemplateResult<GeneratedFile> {
    Ok(GeneratedFile {
        path: file.output_path(),
        content: read_source(file)?,
    })
}

fn read_source(file: &TemplateFile) -> TemplateResult<String> {
    fs::read_to_string(&file.source_path).map_err(|source| TemplateError::Io {
        path: file.relative_path.clone(),
        source,
    })
}

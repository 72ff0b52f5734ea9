//! Error types for template generation.

use thiserror::Error;

/// Result type alias for template operations.
pub type TemplateResult<T> = Result<T, TemplateError>;

/// Errors that can occur while generating files from a template.
#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("Template not found: {family}/{name}")]
    NotFound { family: String, name: String },

    #[error("Rendering failed for {path}: {source}")]
    Render {
        path: String,
        #[source]
        source: minijinja::Error,
    },

    #[error("Duplicate output path {path} in template {family}/{name}")]
    DuplicateOutput {
        family: String,
        name: String,
        path: String,
    },

    #[error("IO error reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

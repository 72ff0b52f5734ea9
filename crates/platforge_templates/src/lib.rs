//! # platforge_templates
//!
//! Template store and rendering engine for PlatForge.
//!
//! Templates live in a directory tree `<base>/<family>/<name>/**`. Files
//! ending in `.j2` are rendered with a strict Jinja dialect (undefined
//! variables are errors); every other file passes through untouched. A
//! generation call returns the whole tree as an ordered list of
//! [`GeneratedFile`] values, sorted by relative path.
//!
//! ## Example
//!
//! ```rust,no_run
//! use platforge_templates::TemplateGenerator;
//! use serde_json::{json, Map};
//!
//! let generator = TemplateGenerator::new("templates");
//! let mut context = Map::new();
//! context.insert("cluster_name".into(), json!("demo"));
//!
//! let files = generator.generate("terraform", "aws-eks", &context).unwrap();
//! for file in &files {
//!     println!("{} ({} bytes)", file.path, file.content.len());
//! }
//! ```

pub mod error;
pub mod generator;
pub mod renderer;
pub mod store;

pub use error::{TemplateError, TemplateResult};
pub use generator::{GeneratedFile, TemplateGenerator};
pub use renderer::TemplateRenderer;
pub use store::{TemplateFile, TemplateStore, TEMPLATE_SUFFIX};

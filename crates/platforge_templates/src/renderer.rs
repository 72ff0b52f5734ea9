//! Strict Jinja-dialect rendering.

use std::path::Path;

use minijinja::{AutoEscape, Environment, UndefinedBehavior};
use serde_json::{Map, Value};

use crate::error::{TemplateError, TemplateResult};

/// Renderer wrapping a minijinja environment configured for the store.
///
/// Undefined variables are hard errors, never silent blanks. Block tags eat
/// the trailing newline and leading indentation (`trim_blocks` and
/// `lstrip_blocks`), and auto-escaping is off: output is Terraform and YAML
/// text, not HTML.
pub struct TemplateRenderer {
    env: Environment<'static>,
}

impl TemplateRenderer {
    /// Create a renderer rooted at the store base directory.
    ///
    /// The filesystem loader lets `{% include %}` and `{% import %}` resolve
    /// base-relative paths anywhere in the store.
    pub fn new(base_dir: impl AsRef<Path>) -> Self {
        let mut env = Environment::new();
        env.set_loader(minijinja::path_loader(base_dir.as_ref()));
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        env.set_auto_escape_callback(|_| AutoEscape::None);
        Self { env }
    }

    /// Render template source registered under its base-relative name.
    pub fn render(
        &self,
        template_ref: &str,
        source: &str,
        context: &Map<String, Value>,
    ) -> TemplateResult<String> {
        self.env
            .render_named_str(template_ref, source, context)
            .map_err(|err| TemplateError::Render {
                path: template_ref.to_string(),
                source: err,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::tempdir;

    fn context(entries: &[(&str, Value)]) -> Map<String, Value> {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn test_render_substitutes_variables() {
        let temp = tempdir().unwrap();
        let renderer = TemplateRenderer::new(temp.path());
        let ctx = context(&[("name", json!("demo")), ("replicas", json!(3))]);
        let out = renderer
            .render("t.j2", "app: {{ name }} x{{ replicas }}", &ctx)
            .unwrap();
        assert_eq!(out, "app: demo x3");
    }

    #[test]
    fn test_undefined_variable_is_an_error() {
        let temp = tempdir().unwrap();
        let renderer = TemplateRenderer::new(temp.path());
        let err = renderer
            .render("t.j2", "{{ missing }}", &Map::new())
            .unwrap_err();
        match err {
            TemplateError::Render { path, .. } => assert_eq!(path, "t.j2"),
            other => panic!("expected render error, got {other:?}"),
        }
    }

    #[test]
    fn test_block_tags_trim_their_line() {
        let temp = tempdir().unwrap();
        let renderer = TemplateRenderer::new(temp.path());
        let ctx = context(&[("enabled", json!(true))]);
        let out = renderer
            .render(
                "t.j2",
                "{% if enabled %}\non\n{% endif %}\ndone",
                &ctx,
            )
            .unwrap();
        assert_eq!(out, "on\ndone");
    }
}

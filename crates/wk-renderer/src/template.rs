//! Page templates.
//!
//! Templates are looked up by file name (e.g. `view.html`) in a template
//! directory. Files ending in `.html` are auto-escaped; pre-rendered HTML must
//! be marked with the `safe` filter.

use std::path::Path;

use minijinja::Environment;
use serde::Serialize;

/// Error returned when a template cannot be loaded or rendered.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// Template does not exist.
    #[error("Template not found: {0}")]
    NotFound(String),
    /// Template failed to parse or render.
    #[error("Template error in {name}: {source}")]
    Template {
        /// Template name.
        name: String,
        /// Underlying engine error.
        #[source]
        source: minijinja::Error,
    },
}

/// Named template set.
///
/// # Example
///
/// ```ignore
/// use wk_renderer::Templates;
///
/// let templates = Templates::from_dir("templates");
/// let html = templates.render("view.html", &page_view)?;
/// ```
pub struct Templates {
    env: Environment<'static>,
}

impl std::fmt::Debug for Templates {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Templates").finish_non_exhaustive()
    }
}

impl Templates {
    /// Load templates lazily from a directory.
    ///
    /// Templates are read on first use and cached for the lifetime of the set.
    #[must_use]
    pub fn from_dir(dir: impl AsRef<Path>) -> Self {
        let mut env = Environment::new();
        env.set_loader(minijinja::path_loader(dir.as_ref().to_path_buf()));
        Self { env }
    }

    /// Build a template set from in-memory sources.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Template`] if any source fails to parse.
    pub fn from_sources<I, N, S>(sources: I) -> Result<Self, RenderError>
    where
        I: IntoIterator<Item = (N, S)>,
        N: Into<String>,
        S: Into<String>,
    {
        let mut env = Environment::new();
        for (name, source) in sources {
            let name = name.into();
            env.add_template_owned(name.clone(), source.into())
                .map_err(|source| RenderError::Template { name, source })?;
        }
        Ok(Self { env })
    }

    /// Render a template with the given context.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::NotFound`] if the template does not exist, or
    /// [`RenderError::Template`] if it fails to parse or render.
    pub fn render<S: Serialize>(&self, name: &str, context: S) -> Result<String, RenderError> {
        tracing::debug!(template = %name, "Rendering template");
        let template = self.env.get_template(name).map_err(|e| {
            if e.kind() == minijinja::ErrorKind::TemplateNotFound {
                RenderError::NotFound(name.to_owned())
            } else {
                RenderError::Template {
                    name: name.to_owned(),
                    source: e,
                }
            }
        })?;

        template.render(context).map_err(|source| RenderError::Template {
            name: name.to_owned(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn test_render_from_sources() {
        let templates = Templates::from_sources([("view.html", "<h1>{{ title }}</h1>")]).unwrap();

        let html = templates.render("view.html", json!({ "title": "MyPage" })).unwrap();

        assert_eq!(html, "<h1>MyPage</h1>");
    }

    #[test]
    fn test_render_escapes_html_templates() {
        let templates = Templates::from_sources([("view.html", "{{ body }}")]).unwrap();

        let html = templates.render("view.html", json!({ "body": "<b>" })).unwrap();

        assert_eq!(html, "&lt;b&gt;");
    }

    #[test]
    fn test_render_safe_filter_keeps_markup() {
        let templates = Templates::from_sources([("view.html", "{{ body_html|safe }}")]).unwrap();

        let html = templates
            .render("view.html", json!({ "body_html": "<p>Hi</p>" }))
            .unwrap();

        assert_eq!(html, "<p>Hi</p>");
    }

    #[test]
    fn test_render_with_included_partials() {
        let templates = Templates::from_sources([
            ("layout_top.html", "<main>"),
            ("layout_bottom.html", "</main>"),
            (
                "view.html",
                r#"{% include "layout_top.html" %}{{ title }}{% include "layout_bottom.html" %}"#,
            ),
        ])
        .unwrap();

        let html = templates.render("view.html", json!({ "title": "X" })).unwrap();

        assert_eq!(html, "<main>X</main>");
    }

    #[test]
    fn test_render_missing_template() {
        let templates = Templates::from_sources(Vec::<(String, String)>::new()).unwrap();

        let err = templates.render("missing.html", json!({})).unwrap_err();

        assert!(matches!(err, RenderError::NotFound(ref name) if name == "missing.html"));
    }

    #[test]
    fn test_from_sources_rejects_syntax_error() {
        let err = Templates::from_sources([("broken.html", "{% if %}")]).unwrap_err();

        assert!(matches!(err, RenderError::Template { .. }));
    }

    #[test]
    fn test_from_dir_loads_files() {
        let temp_dir = tempfile::tempdir().unwrap();
        std::fs::write(temp_dir.path().join("admin.html"), "Admin: {{ title }}").unwrap();

        let templates = Templates::from_dir(temp_dir.path());
        let html = templates.render("admin.html", json!({ "title": "Admin" })).unwrap();

        assert_eq!(html, "Admin: Admin");
    }

    #[test]
    fn test_from_dir_missing_template() {
        let temp_dir = tempfile::tempdir().unwrap();

        let templates = Templates::from_dir(temp_dir.path());
        let err = templates.render("view.html", json!({})).unwrap_err();

        assert!(matches!(err, RenderError::NotFound(_)));
    }
}

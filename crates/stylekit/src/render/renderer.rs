//! Template rendering with library components in scope.

use std::sync::Arc;

use minijinja::{Environment, Error};
use serde::Serialize;

use super::functions::register_functions;
use crate::library::Library;

/// A renderer with pre-registered templates and a component library.
///
/// # Example
///
/// ```rust
/// use stylekit::{ComponentSpec, Library, Renderer};
///
/// let mut library = Library::new();
/// library
///     .add_component(
///         ComponentSpec::new("Badge", "span")
///             .base("badge")
///             .variant("tone", "info", "bg-blue-100")
///             .variant("tone", "sale", "bg-red-100")
///             .default_variant("tone", "info"),
///     )
///     .unwrap();
///
/// let mut renderer = Renderer::new(library);
/// renderer
///     .add_template("price", r#"{{ component("Badge", tone=tone, text=label) }}"#)
///     .unwrap();
///
/// let html = renderer
///     .render("price", &serde_json::json!({ "tone": "sale", "label": "-20%" }))
///     .unwrap();
/// assert_eq!(html, r#"<span class="badge bg-red-100">-20%</span>"#);
/// ```
pub struct Renderer {
    env: Environment<'static>,
    library: Arc<Library>,
}

impl Renderer {
    /// Creates a renderer whose undeclared variant values fall back to defaults.
    pub fn new(library: Library) -> Self {
        Self::with_strict(library, false)
    }

    /// Creates a renderer. With `strict`, an undeclared variant value is a
    /// render error instead of a silent fallback.
    pub fn with_strict(library: Library, strict: bool) -> Self {
        let library = Arc::new(library);
        let mut env = Environment::new();
        register_functions(&mut env, Arc::clone(&library), strict);
        Self { env, library }
    }

    pub fn library(&self) -> &Library {
        &self.library
    }

    /// Compiles and stores a template under `name`.
    pub fn add_template(&mut self, name: &str, source: &str) -> Result<(), Error> {
        self.env
            .add_template_owned(name.to_string(), source.to_string())
    }

    /// Renders a stored template. Unknown components, and undeclared
    /// variant values in strict mode, are render errors.
    pub fn render<T: Serialize>(&self, name: &str, data: &T) -> Result<String, Error> {
        self.env.get_template(name)?.render(data)
    }

    /// Renders a one-off template source.
    pub fn render_str<T: Serialize>(&self, source: &str, data: &T) -> Result<String, Error> {
        self.env.render_str(source, data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ComponentSpec, CompoundComponentSpec};
    use serde::Serialize;

    #[derive(Serialize)]
    struct Empty {}

    fn library() -> Library {
        let mut library = Library::new();
        library
            .add_component(
                ComponentSpec::new("Button", "button")
                    .base("btn")
                    .variant("size", "sm", "h-8")
                    .variant("size", "lg", "h-12")
                    .default_variant("size", "sm"),
            )
            .unwrap();
        library
            .add_compound(
                CompoundComponentSpec::new(ComponentSpec::new("Card", "div").base("card"))
                    .part("Header", "header", "card-header"),
            )
            .unwrap();
        library
    }

    #[test]
    fn test_component_function() {
        let renderer = Renderer::new(library());
        let html = renderer
            .render_str(r#"{{ component("Button", size="lg", type="submit") }}"#, &Empty {})
            .unwrap();
        assert_eq!(html, r#"<button class="btn h-12" type="submit"></button>"#);
    }

    #[test]
    fn test_fallback_on_undeclared_value() {
        let renderer = Renderer::new(library());
        let html = renderer
            .render_str(r#"{{ component("Button", size="xl") }}"#, &Empty {})
            .unwrap();
        assert_eq!(html, r#"<button class="btn h-8"></button>"#);
    }

    #[test]
    fn test_strict_rejects_undeclared_value() {
        let renderer = Renderer::with_strict(library(), true);
        let result = renderer.render_str(r#"{{ component("Button", size="xl") }}"#, &Empty {});
        assert!(result.is_err());
    }

    #[test]
    fn test_boolean_and_none_kwargs() {
        let renderer = Renderer::new(library());
        let html = renderer
            .render_str(
                r#"{{ component("Button", disabled=true, hidden=false, title=none) }}"#,
                &Empty {},
            )
            .unwrap();
        assert_eq!(html, r#"<button class="btn h-8" disabled></button>"#);
    }

    #[test]
    fn test_text_escaped_children_raw() {
        let renderer = Renderer::new(library());
        let html = renderer
            .render_str(
                r#"{{ component("Card", children=component("Card.Header", text="Fish & Chips")) }}"#,
                &Empty {},
            )
            .unwrap();
        assert_eq!(
            html,
            r#"<div class="card"><header class="card-header">Fish &amp; Chips</header></div>"#
        );
    }

    #[test]
    fn test_class_appended() {
        let renderer = Renderer::new(library());
        let html = renderer
            .render_str(r#"{{ component("Button", class="w-full") }}"#, &Empty {})
            .unwrap();
        assert_eq!(html, r#"<button class="btn h-8 w-full"></button>"#);
    }

    #[test]
    fn test_class_true_keeps_generated_classes() {
        let renderer = Renderer::new(library());
        let html = renderer
            .render_str(r#"{{ component("Button", class=true) }}"#, &Empty {})
            .unwrap();
        assert_eq!(html, r#"<button class="btn h-8"></button>"#);
    }

    #[test]
    fn test_context_children_escaped() {
        let mut renderer = Renderer::new(library());
        renderer
            .add_template("page.html", r#"{{ component("Card", children=note) }}"#)
            .unwrap();

        let html = renderer
            .render(
                "page.html",
                &serde_json::json!({ "note": "<script>alert(1)</script>" }),
            )
            .unwrap();
        assert_eq!(
            html,
            r#"<div class="card">&lt;script&gt;alert(1)&lt;/script&gt;</div>"#
        );
    }

    #[test]
    fn test_unknown_component_error() {
        let renderer = Renderer::new(library());
        let err = renderer
            .render_str(r#"{{ component("Carousel") }}"#, &Empty {})
            .unwrap_err();
        assert!(err.to_string().contains("Carousel"));
    }

    #[test]
    fn test_registered_templates() {
        let mut renderer = Renderer::new(library());
        renderer
            .add_template("cta", r#"{{ component("Button", text=label) }}"#)
            .unwrap();

        let html = renderer
            .render("cta", &serde_json::json!({ "label": "Checkout" }))
            .unwrap();
        assert_eq!(html, r#"<button class="btn h-8">Checkout</button>"#);
        assert!(renderer.render("missing", &Empty {}).is_err());
    }
}

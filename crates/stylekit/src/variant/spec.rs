//! Component spec with a fluent builder API.

use indexmap::IndexMap;

use super::error::SpecError;

/// Element tag used when a spec does not name one.
pub const DEFAULT_ELEMENT: &str = "div";

/// Variant axes in declaration order: axis name to (value name to class fragment).
pub type VariantMap = IndexMap<String, IndexMap<String, String>>;

/// Declarative description of a styled, variant-aware primitive.
///
/// # Example
///
/// ```rust
/// use stylekit::ComponentSpec;
///
/// let spec = ComponentSpec::new("Button", "button")
///     .base("btn")
///     .variant("size", "sm", "h-8")
///     .variant("size", "lg", "h-12")
///     .default_variant("size", "sm");
///
/// assert!(spec.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentSpec {
    pub(crate) name: String,
    pub(crate) element: String,
    pub(crate) base_class: String,
    pub(crate) variants: VariantMap,
    pub(crate) default_variants: IndexMap<String, String>,
}

impl ComponentSpec {
    /// Creates a spec with no base class and no variants.
    pub fn new(name: impl Into<String>, element: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            element: element.into(),
            base_class: String::new(),
            variants: VariantMap::new(),
            default_variants: IndexMap::new(),
        }
    }

    /// Sets the base class, which always comes first in the resolved output.
    pub fn base(mut self, class: impl Into<String>) -> Self {
        self.base_class = class.into();
        self
    }

    /// Declares one value of an axis, creating the axis on first use.
    ///
    /// Axes are ordered by their first declaration.
    pub fn variant(
        mut self,
        axis: impl Into<String>,
        value: impl Into<String>,
        class: impl Into<String>,
    ) -> Self {
        self.variants
            .entry(axis.into())
            .or_default()
            .insert(value.into(), class.into());
        self
    }

    /// Declares a whole axis at once.
    pub fn axis<I, V, C>(mut self, axis: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = (V, C)>,
        V: Into<String>,
        C: Into<String>,
    {
        let entry = self.variants.entry(axis.into()).or_default();
        for (value, class) in values {
            entry.insert(value.into(), class.into());
        }
        self
    }

    /// Sets the value used for `axis` when a render does not select one.
    pub fn default_variant(mut self, axis: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_variants.insert(axis.into(), value.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn element(&self) -> &str {
        &self.element
    }

    pub fn base_class(&self) -> &str {
        &self.base_class
    }

    pub fn variants(&self) -> &VariantMap {
        &self.variants
    }

    pub fn default_variants(&self) -> &IndexMap<String, String> {
        &self.default_variants
    }

    /// Returns true if `axis` is a declared variant axis.
    pub fn has_axis(&self, axis: &str) -> bool {
        self.variants.contains_key(axis)
    }

    /// Checks the spec's invariants.
    ///
    /// Every default must name a declared axis and one of its declared
    /// values, every axis must declare at least one value, and the element
    /// tag must be a plain HTML tag name.
    pub fn validate(&self) -> Result<(), SpecError> {
        if !is_valid_tag(&self.element) {
            return Err(SpecError::InvalidElement {
                component: self.name.clone(),
                element: self.element.clone(),
            });
        }

        for (axis, values) in &self.variants {
            if values.is_empty() {
                return Err(SpecError::EmptyAxis {
                    component: self.name.clone(),
                    axis: axis.clone(),
                });
            }
        }

        for (axis, value) in &self.default_variants {
            let values = self
                .variants
                .get(axis)
                .ok_or_else(|| SpecError::UnknownDefaultAxis {
                    component: self.name.clone(),
                    axis: axis.clone(),
                })?;
            if !values.contains_key(value) {
                return Err(SpecError::UnknownDefaultValue {
                    component: self.name.clone(),
                    axis: axis.clone(),
                    value: value.clone(),
                });
            }
        }

        Ok(())
    }
}

pub(crate) fn is_valid_tag(tag: &str) -> bool {
    let mut chars = tag.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '-')
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn button() -> ComponentSpec {
        ComponentSpec::new("Button", "button")
            .base("btn")
            .variant("size", "sm", "h-8")
            .variant("size", "lg", "h-12")
            .default_variant("size", "sm")
    }

    #[test]
    fn test_builder_keeps_axis_order() {
        let spec = ComponentSpec::new("Badge", "span")
            .variant("tone", "info", "bg-blue")
            .variant("size", "sm", "text-xs")
            .variant("tone", "warn", "bg-amber");

        let axes: Vec<&str> = spec.variants().keys().map(String::as_str).collect();
        assert_eq!(axes, vec!["tone", "size"]);
        assert_eq!(spec.variants()["tone"].len(), 2);
    }

    #[test]
    fn test_axis_declares_all_values() {
        let spec = ComponentSpec::new("Card", "div").axis("pad", [("sm", "p-2"), ("lg", "p-6")]);
        assert_eq!(spec.variants()["pad"]["lg"], "p-6");
    }

    #[test]
    fn test_validate_valid() {
        assert!(button().validate().is_ok());
    }

    #[test]
    fn test_validate_default_unknown_axis() {
        let spec = button().default_variant("tone", "info");
        assert_eq!(
            spec.validate(),
            Err(SpecError::UnknownDefaultAxis {
                component: "Button".to_string(),
                axis: "tone".to_string(),
            })
        );
    }

    #[test]
    fn test_validate_default_unknown_value() {
        let spec = button().default_variant("size", "xl");
        assert!(matches!(
            spec.validate(),
            Err(SpecError::UnknownDefaultValue { ref value, .. }) if value == "xl"
        ));
    }

    #[test]
    fn test_validate_empty_axis() {
        let spec = ComponentSpec::new("Input", "input").axis("size", Vec::<(&str, &str)>::new());
        assert!(matches!(spec.validate(), Err(SpecError::EmptyAxis { .. })));
    }

    #[test]
    fn test_validate_invalid_element() {
        for tag in ["", "1div", "my tag", "<div>"] {
            let spec = ComponentSpec::new("Broken", tag);
            assert!(
                matches!(spec.validate(), Err(SpecError::InvalidElement { .. })),
                "tag {:?} should be rejected",
                tag
            );
        }
        assert!(ComponentSpec::new("Custom", "my-widget").validate().is_ok());
    }
}

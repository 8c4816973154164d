//! Variant resolution.

use indexmap::IndexMap;

use super::error::VariantError;
use super::spec::ComponentSpec;
use super::typed::VariantValue;
use crate::util::class_names;

/// Variant values requested for a single render, keyed by axis.
///
/// Setting the same axis twice keeps the last value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selections {
    values: IndexMap<String, String>,
}

impl Selections {
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects `value` on `axis`, returning the updated selections for chaining.
    pub fn with(mut self, axis: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(axis, value);
        self
    }

    /// Selects a typed variant value.
    pub fn select<V: VariantValue>(self, value: V) -> Self {
        self.with(V::AXIS, value.as_str())
    }

    pub fn set(&mut self, axis: impl Into<String>, value: impl Into<String>) {
        self.values.insert(axis.into(), value.into());
    }

    pub fn get(&self, axis: &str) -> Option<&str> {
        self.values.get(axis).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<A: Into<String>, V: Into<String>> FromIterator<(A, V)> for Selections {
    fn from_iter<I: IntoIterator<Item = (A, V)>>(iter: I) -> Self {
        let mut selections = Selections::new();
        for (axis, value) in iter {
            selections.set(axis, value);
        }
        selections
    }
}

/// Resolves the class string for one instance of `spec`.
///
/// For each axis, in declaration order, the selected value is used if the
/// axis declares it; otherwise the axis default applies. A selection the
/// axis does not declare behaves exactly like no selection. Axes with
/// neither contribute nothing. Selections for undeclared axes are ignored.
///
/// # Example
///
/// ```rust
/// use stylekit::{resolve, ComponentSpec, Selections};
///
/// let spec = ComponentSpec::new("Button", "button")
///     .base("btn")
///     .variant("size", "sm", "h-8")
///     .variant("size", "lg", "h-12")
///     .default_variant("size", "sm");
///
/// assert_eq!(resolve(&spec, &Selections::new()), "btn h-8");
/// assert_eq!(resolve(&spec, &Selections::new().with("size", "lg")), "btn h-12");
/// assert_eq!(resolve(&spec, &Selections::new().with("size", "xl")), "btn h-8");
/// ```
pub fn resolve(spec: &ComponentSpec, selections: &Selections) -> String {
    let fragments = spec.variants.iter().filter_map(|(axis, values)| {
        selections
            .get(axis)
            .and_then(|value| values.get(value))
            .or_else(|| {
                spec.default_variants
                    .get(axis)
                    .and_then(|value| values.get(value))
            })
            .map(String::as_str)
    });

    class_names(std::iter::once(spec.base_class.as_str()).chain(fragments))
}

/// Like [`resolve`], but rejects selections the spec does not declare.
pub fn resolve_strict(spec: &ComponentSpec, selections: &Selections) -> Result<String, VariantError> {
    for (axis, value) in selections.iter() {
        let values = spec
            .variants
            .get(axis)
            .ok_or_else(|| VariantError::UnknownAxis {
                component: spec.name.clone(),
                axis: axis.to_string(),
            })?;
        if !values.contains_key(value) {
            return Err(VariantError::UnknownValue {
                component: spec.name.clone(),
                axis: axis.to_string(),
                value: value.to_string(),
                allowed: values.keys().cloned().collect(),
            });
        }
    }
    Ok(resolve(spec, selections))
}

//! Render-time inputs for a component.

use indexmap::IndexMap;

use super::element::{AttrValue, Node};
use crate::variant::VariantValue;

/// Inputs for one render of a component.
///
/// Props mirror what a plain element accepts: attributes, a class string
/// and children. A prop whose name matches one of the component's variant
/// axes selects a variant and is not forwarded; every other prop becomes an
/// attribute of the rendered element.
///
/// # Example
///
/// ```rust
/// use stylekit::Props;
///
/// let props = Props::new()
///     .variant("size", "lg")
///     .attr("type", "submit")
///     .flag("disabled")
///     .class("w-full")
///     .text("Place order");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Props {
    attributes: IndexMap<String, AttrValue>,
    class: Option<String>,
    children: Vec<Node>,
}

impl Props {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a prop. `class` is routed to [`Props::class`].
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    /// Selects a variant value. Equivalent to [`Props::attr`] with the axis name.
    pub fn variant(self, axis: impl Into<String>, value: impl Into<String>) -> Self {
        self.attr(axis, value)
    }

    /// Selects a typed variant value.
    pub fn select<V: VariantValue>(self, value: V) -> Self {
        self.attr(V::AXIS, value.as_str())
    }

    /// Sets a bare boolean attribute. A bare `class` adds no classes.
    pub fn flag(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        if name != "class" {
            self.attributes.insert(name, AttrValue::Flag);
        }
        self
    }

    /// Appends caller classes. They always follow the generated classes.
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.push_class(class.into());
        self
    }

    /// Shorthand for the `data-testid` attribute.
    pub fn test_id(self, id: impl Into<String>) -> Self {
        self.attr("data-testid", id)
    }

    /// Appends escaped text content.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Node::Text(text.into()));
        self
    }

    /// Appends a child node.
    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        if name == "class" {
            self.push_class(value.into());
        } else {
            self.attributes.insert(name, AttrValue::Text(value.into()));
        }
    }

    pub fn get(&self, name: &str) -> Option<&AttrValue> {
        self.attributes.get(name)
    }

    pub fn attributes(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
        self.attributes.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn caller_class(&self) -> Option<&str> {
        self.class.as_deref()
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub(crate) fn into_children(self) -> Vec<Node> {
        self.children
    }

    fn push_class(&mut self, class: String) {
        match self.class.as_mut() {
            Some(existing) => {
                existing.push(' ');
                existing.push_str(&class);
            }
            None => self.class = Some(class),
        }
    }
}

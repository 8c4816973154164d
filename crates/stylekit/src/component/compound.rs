//! Compound components with named sub-parts.

use indexmap::IndexMap;

use super::element::Element;
use super::factory::{create_component, Component};
use super::props::Props;
use crate::variant::{ComponentSpec, SpecError};

/// A named sub-part of a compound component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartSpec {
    pub name: String,
    pub element: String,
    pub base_class: String,
}

/// A root [`ComponentSpec`] plus independently styled sub-parts.
///
/// # Example
///
/// ```rust
/// use stylekit::{create_compound_component, ComponentSpec, CompoundComponentSpec, Props};
///
/// let card = create_compound_component(
///     CompoundComponentSpec::new(ComponentSpec::new("Card", "div").base("rounded border"))
///         .part("Header", "div", "p-4 font-semibold")
///         .part("Footer", "div", "p-4 border-t"),
/// )
/// .unwrap();
///
/// let header = card.render_part("Header", Props::new().text("Order #42")).unwrap();
/// assert_eq!(header.to_html(), r#"<div class="p-4 font-semibold">Order #42</div>"#);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompoundComponentSpec {
    pub(crate) root: ComponentSpec,
    pub(crate) parts: Vec<PartSpec>,
}

impl CompoundComponentSpec {
    pub fn new(root: ComponentSpec) -> Self {
        Self {
            root,
            parts: Vec::new(),
        }
    }

    /// Declares a sub-part. Part names must be unique.
    pub fn part(
        mut self,
        name: impl Into<String>,
        element: impl Into<String>,
        base_class: impl Into<String>,
    ) -> Self {
        self.parts.push(PartSpec {
            name: name.into(),
            element: element.into(),
            base_class: base_class.into(),
        });
        self
    }

    pub fn root(&self) -> &ComponentSpec {
        &self.root
    }

    pub fn parts(&self) -> &[PartSpec] {
        &self.parts
    }
}

/// A root component plus one component per sub-part.
///
/// Parts carry no link to the root or each other: composition is up to
/// the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompoundComponent {
    root: Component,
    parts: IndexMap<String, Component>,
}

/// Builds a compound component, validating the root and every part.
pub fn create_compound_component(spec: CompoundComponentSpec) -> Result<CompoundComponent, SpecError> {
    let root = create_component(spec.root)?;

    let mut parts = IndexMap::new();
    for part in spec.parts {
        if parts.contains_key(&part.name) {
            return Err(SpecError::DuplicatePart {
                component: root.name().to_string(),
                part: part.name,
            });
        }
        let part_spec = ComponentSpec::new(format!("{}.{}", root.name(), part.name), part.element)
            .base(part.base_class);
        parts.insert(part.name, create_component(part_spec)?);
    }

    Ok(CompoundComponent { root, parts })
}

impl CompoundComponent {
    pub fn name(&self) -> &str {
        self.root.name()
    }

    pub fn root(&self) -> &Component {
        &self.root
    }

    pub fn part(&self, name: &str) -> Option<&Component> {
        self.parts.get(name)
    }

    /// Iterates over parts in declaration order.
    pub fn parts(&self) -> impl Iterator<Item = (&str, &Component)> {
        self.parts.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Renders the root component.
    pub fn render(&self, props: Props) -> Element {
        self.root.render(props)
    }

    /// Renders a sub-part, or `None` if no part has that name.
    pub fn render_part(&self, name: &str, props: Props) -> Option<Element> {
        self.part(name).map(|part| part.render(props))
    }
}

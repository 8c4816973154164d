//! Rendered element tree and HTML serialization.

use std::fmt;

use crate::util::escape_html;

/// Elements that never have children or a closing tag.
pub const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// Value of an element attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrValue {
    /// `name="value"`
    Text(String),
    /// Bare boolean attribute, e.g. `disabled`.
    Flag,
}

impl AttrValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            AttrValue::Text(s) => Some(s),
            AttrValue::Flag => None,
        }
    }
}

impl From<&str> for AttrValue {
    fn from(s: &str) -> Self {
        AttrValue::Text(s.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(s: String) -> Self {
        AttrValue::Text(s)
    }
}

/// A child of an element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    /// Text content, escaped on output.
    Text(String),
    /// Markup inserted as-is.
    Raw(String),
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

/// A rendered element.
///
/// Produced by [`Component::render`](crate::Component::render). Serialize
/// it with [`Element::to_html`] or `Display`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: String,
    attributes: Vec<(String, AttrValue)>,
    children: Vec<Node>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Sets an attribute, replacing an existing one in place.
    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<AttrValue>) {
        let name = name.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.attributes.push((name, value)),
        }
    }

    pub fn attr(&self, name: &str) -> Option<&AttrValue> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    pub fn attributes(&self) -> &[(String, AttrValue)] {
        &self.attributes
    }

    /// Returns the `class` attribute, if any.
    pub fn class(&self) -> Option<&str> {
        self.attr("class").and_then(AttrValue::as_text)
    }

    pub fn push_child(&mut self, child: impl Into<Node>) {
        self.children.push(child.into());
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn is_void(&self) -> bool {
        VOID_ELEMENTS.contains(&self.tag.as_str())
    }

    /// Serializes the element and its children as HTML.
    pub fn to_html(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}", self.tag)?;
        for (name, value) in &self.attributes {
            match value {
                AttrValue::Text(text) => write!(f, " {}=\"{}\"", name, escape_html(text))?,
                AttrValue::Flag => write!(f, " {}", name)?,
            }
        }
        if self.is_void() {
            return write!(f, " />");
        }
        write!(f, ">")?;
        for child in &self.children {
            match child {
                Node::Element(element) => write!(f, "{}", element)?,
                Node::Text(text) => write!(f, "{}", escape_html(text))?,
                Node::Raw(markup) => write!(f, "{}", markup)?,
            }
        }
        write!(f, "</{}>", self.tag)
    }
}

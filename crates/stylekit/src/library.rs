//! Named component registry with YAML loading.
//!
//! A [`Library`] maps component names to built components. Specs can be
//! registered programmatically or loaded from a YAML document:
//!
//! ```yaml
//! components:
//!   Button:
//!     element: button
//!     base: "inline-flex items-center rounded-md"
//!     variants:
//!       size: { sm: "h-8 px-3", lg: "h-12 px-6" }
//!     defaults: { size: sm }
//!   Card:
//!     base: "rounded-lg border"
//!     parts:
//!       Header: { element: header, base: "p-4" }
//! ```
//!
//! Every spec is validated as it is loaded, so a library that loads
//! successfully never fails at render time. Sub-parts are addressed as
//! `"Card.Header"`.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::Deserialize;

use crate::component::{
    create_component, create_compound_component, Component, CompoundComponent,
    CompoundComponentSpec,
};
use crate::variant::{ComponentSpec, SpecError, VariantMap, DEFAULT_ELEMENT};

/// Error type for library loading.
#[derive(Debug, thiserror::Error)]
pub enum LibraryError {
    /// The YAML document could not be parsed.
    #[error("failed to parse component library: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// The library file could not be read.
    #[error("failed to read component library \"{}\": {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A spec failed validation.
    #[error(transparent)]
    Spec(#[from] SpecError),

    /// Two entries share a name.
    #[error("component \"{0}\" is registered more than once")]
    Duplicate(String),
}

/// A registered component, simple or compound.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    Simple(Component),
    Compound(CompoundComponent),
}

impl Entry {
    /// The root component of the entry.
    pub fn root(&self) -> &Component {
        match self {
            Entry::Simple(component) => component,
            Entry::Compound(compound) => compound.root(),
        }
    }
}

/// Registry of named components.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Library {
    entries: IndexMap<String, Entry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct LibraryFile {
    #[serde(default)]
    components: IndexMap<String, ComponentDef>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ComponentDef {
    #[serde(default = "default_element")]
    element: String,
    #[serde(default)]
    base: String,
    #[serde(default)]
    variants: VariantMap,
    #[serde(default)]
    defaults: IndexMap<String, String>,
    #[serde(default)]
    parts: IndexMap<String, PartDef>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct PartDef {
    #[serde(default = "default_element")]
    element: String,
    #[serde(default)]
    base: String,
}

fn default_element() -> String {
    DEFAULT_ELEMENT.to_string()
}

impl ComponentDef {
    fn into_spec(self, name: &str) -> (ComponentSpec, IndexMap<String, PartDef>) {
        let mut spec = ComponentSpec::new(name, self.element).base(self.base);
        for (axis, values) in self.variants {
            spec = spec.axis(axis, values);
        }
        for (axis, value) in self.defaults {
            spec = spec.default_variant(axis, value);
        }
        (spec, self.parts)
    }
}

impl Library {
    /// Creates an empty library.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses and validates a YAML library document.
    pub fn from_yaml_str(source: &str) -> Result<Self, LibraryError> {
        let file: LibraryFile = serde_yaml::from_str(source)?;
        let mut library = Library::new();

        for (name, def) in file.components {
            let (spec, parts) = def.into_spec(&name);
            if parts.is_empty() {
                library.add_component(spec)?;
            } else {
                let compound = parts
                    .into_iter()
                    .fold(CompoundComponentSpec::new(spec), |acc, (part, def)| {
                        acc.part(part, def.element, def.base)
                    });
                library.add_compound(compound)?;
            }
        }

        tracing::debug!(components = library.len(), "loaded component library");
        Ok(library)
    }

    /// Reads and validates a YAML library file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, LibraryError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| LibraryError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&source)
    }

    /// Builds and registers a simple component.
    pub fn add_component(&mut self, spec: ComponentSpec) -> Result<&Component, LibraryError> {
        let component = create_component(spec)?;
        let name = component.name().to_string();
        self.insert(name, Entry::Simple(component)).map(Entry::root)
    }

    /// Builds and registers a compound component.
    pub fn add_compound(&mut self, spec: CompoundComponentSpec) -> Result<&Component, LibraryError> {
        let compound = create_compound_component(spec)?;
        let name = compound.name().to_string();
        self.insert(name, Entry::Compound(compound)).map(Entry::root)
    }

    fn insert(&mut self, name: String, entry: Entry) -> Result<&Entry, LibraryError> {
        if self.entries.contains_key(&name) {
            return Err(LibraryError::Duplicate(name));
        }
        let index = self.entries.insert_full(name, entry).0;
        Ok(&self.entries[index])
    }

    /// Looks up a component by name.
    ///
    /// `"Card"` returns the root of a compound component and
    /// `"Card.Header"` one of its parts.
    pub fn get(&self, name: &str) -> Option<&Component> {
        if let Some(entry) = self.entries.get(name) {
            return Some(entry.root());
        }
        let (root, part) = name.split_once('.')?;
        match self.entries.get(root)? {
            Entry::Compound(compound) => compound.part(part),
            Entry::Simple(_) => None,
        }
    }

    pub fn entry(&self, name: &str) -> Option<&Entry> {
        self.entries.get(name)
    }

    /// Returns registered names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

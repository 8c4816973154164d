//! Variant-aware UI primitives.
//!
//! `stylekit` builds styled HTML primitives from declarative specs:
//!
//! - **Variants**: a [`ComponentSpec`] declares a base class and named
//!   variant axes (size, tone, ...). [`resolve`] maps the selected values to
//!   a class string, falling back to each axis's default.
//! - **Components**: [`create_component`] validates a spec once and returns
//!   a reusable [`Component`]; [`create_compound_component`] adds named
//!   sub-parts such as `Card.Header`.
//! - **Library**: a [`Library`] registers components by name and loads them
//!   from YAML.
//! - **Templates**: a [`Renderer`] exposes library components to minijinja
//!   templates.
//!
//! # Example
//!
//! ```rust
//! use once_cell::sync::Lazy;
//! use stylekit::{create_component, Component, ComponentSpec, Props};
//!
//! static BUTTON: Lazy<Component> = Lazy::new(|| {
//!     create_component(
//!         ComponentSpec::new("Button", "button")
//!             .base("btn")
//!             .variant("size", "sm", "h-8")
//!             .variant("size", "lg", "h-12")
//!             .default_variant("size", "sm"),
//!     )
//!     .expect("button spec is valid")
//! });
//!
//! let html = BUTTON.render(Props::new().variant("size", "lg").text("Buy")).to_html();
//! assert_eq!(html, r#"<button class="btn h-12">Buy</button>"#);
//! ```
//!
//! Undeclared variant values fall back to the default. Use
//! [`Component::try_render`] or typed axes ([`variant_enum!`]) to reject them
//! instead.

pub mod component;
pub mod library;
pub mod render;
mod util;
pub mod variant;

pub use component::{
    create_component, create_compound_component, AttrValue, Component, CompoundComponent,
    CompoundComponentSpec, Element, Node, PartSpec, Props,
};
pub use library::{Entry, Library, LibraryError};
pub use render::Renderer;
pub use util::{class_names, escape_html};
pub use variant::{
    resolve, resolve_strict, ComponentSpec, Selections, SpecError, VariantError, VariantValue,
};

//! Component factory for building renderable primitives.
//!
//! - [`create_component`] builds a [`Component`] from a [`ComponentSpec`](crate::ComponentSpec)
//! - [`create_compound_component`] builds a [`CompoundComponent`] with named sub-parts
//! - [`Props`] carries render-time inputs; [`Element`] is the rendered result

mod compound;
mod element;
mod factory;
mod props;

pub use compound::{create_compound_component, CompoundComponent, CompoundComponentSpec, PartSpec};
pub use element::{AttrValue, Element, Node, VOID_ELEMENTS};
pub use factory::{create_component, Component};
pub use props::Props;

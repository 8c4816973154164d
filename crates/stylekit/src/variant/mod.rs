//! Variant system for declaring and resolving component classes.
//!
//! This module provides:
//!
//! - [`ComponentSpec`]: Element tag, base class and variant axes of a component
//! - [`Selections`]: The variant values requested for one render
//! - [`resolve`] / [`resolve_strict`]: Map a spec plus selections to a class string
//! - [`VariantValue`]: Closed Rust enums usable as variant axes
//!
//! Axes keep their declaration order, and resolved fragments are emitted in
//! that order so later utility classes win in the stylesheet.

mod error;
mod resolve;
mod spec;
mod typed;

pub use error::{SpecError, VariantError};
pub use resolve::{resolve, resolve_strict, Selections};
pub use spec::{ComponentSpec, VariantMap, DEFAULT_ELEMENT};
pub use typed::VariantValue;

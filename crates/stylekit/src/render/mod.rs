//! Template rendering with library components.
//!
//! [`Renderer`] wraps a minijinja environment in which every component of
//! a [`Library`](crate::Library) can be called from a template:
//!
//! ```jinja
//! {{ component("Button", size="lg", type="submit", text="Pay now") }}
//! ```

mod functions;
mod renderer;

pub use renderer::Renderer;

//! MiniJinja function registration.

use std::sync::Arc;

use minijinja::value::{Kwargs, ValueKind};
use minijinja::{Environment, Error, ErrorKind, Value};

use crate::component::{Node, Props};
use crate::library::Library;

/// Registers the `component` function on a minijinja environment.
///
/// Keyword arguments become props: `class` is appended to the generated
/// classes and `text` becomes escaped content. `children` is inserted as
/// markup when it is a safe value (another component call) and escaped
/// otherwise. `true` becomes a bare attribute and `false`/`none` is dropped.
pub(crate) fn register_functions(env: &mut Environment<'static>, library: Arc<Library>, strict: bool) {
    env.add_function(
        "component",
        move |name: String, kwargs: Kwargs| -> Result<Value, Error> {
            let component = library.get(&name).ok_or_else(|| {
                Error::new(
                    ErrorKind::InvalidOperation,
                    format!("unknown component '{}'", name),
                )
            })?;

            let props = props_from_kwargs(&kwargs)?;
            let element = if strict {
                component
                    .try_render(props)
                    .map_err(|e| Error::new(ErrorKind::InvalidOperation, e.to_string()))?
            } else {
                component.render(props)
            };

            Ok(Value::from_safe_string(element.to_html()))
        },
    );
}

fn props_from_kwargs(kwargs: &Kwargs) -> Result<Props, Error> {
    let mut props = Props::new();
    for key in kwargs.args() {
        let value: Value = kwargs.get(key)?;
        props = match (key, value.kind()) {
            (_, ValueKind::Undefined | ValueKind::None) => props,
            ("text", _) => props.text(value.to_string()),
            ("children", _) if value.is_safe() => props.child(Node::Raw(value.to_string())),
            ("children", _) => props.child(Node::Text(value.to_string())),
            (_, ValueKind::Bool) if value.is_true() => props.flag(key),
            (_, ValueKind::Bool) => props,
            _ => props.attr(key, value.to_string()),
        };
    }
    Ok(props)
}

//! Component factory.

use super::element::{AttrValue, Element};
use super::props::Props;
use crate::util::class_names;
use crate::variant::{
    resolve, resolve_strict, ComponentSpec, Selections, SpecError, VariantError, VariantValue,
};

/// A reusable, variant-aware primitive built from a [`ComponentSpec`].
///
/// Construct one with [`create_component`]. Components are immutable and
/// can be shared freely, including from a `static`.
///
/// # Example
///
/// ```rust
/// use stylekit::{create_component, ComponentSpec, Props};
///
/// let button = create_component(
///     ComponentSpec::new("Button", "button")
///         .base("btn")
///         .variant("size", "sm", "h-8")
///         .variant("size", "lg", "h-12")
///         .default_variant("size", "sm"),
/// )
/// .unwrap();
///
/// let html = button
///     .render(Props::new().variant("size", "lg").class("w-full").text("Buy"))
///     .to_html();
/// assert_eq!(html, r#"<button class="btn h-12 w-full">Buy</button>"#);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Component {
    spec: ComponentSpec,
}

/// Builds a component, validating its spec.
///
/// Misconfiguration (a default naming an unknown axis or value, an empty
/// axis, an invalid tag) is reported here rather than at render time.
pub fn create_component(spec: ComponentSpec) -> Result<Component, SpecError> {
    spec.validate()?;
    Ok(Component { spec })
}

impl Component {
    pub fn name(&self) -> &str {
        self.spec.name()
    }

    pub fn element(&self) -> &str {
        self.spec.element()
    }

    pub fn spec(&self) -> &ComponentSpec {
        &self.spec
    }

    /// Verifies that the spec declares every value of a typed axis.
    ///
    /// Returns the component unchanged so the check can sit in a
    /// construction chain.
    pub fn bind<V: VariantValue>(self) -> Result<Self, SpecError> {
        let undeclared = V::all().iter().find(|value| {
            self.spec
                .variants()
                .get(V::AXIS)
                .map_or(true, |values| !values.contains_key(value.as_str()))
        });
        match undeclared {
            Some(value) => Err(SpecError::UndeclaredTypedValue {
                component: self.name().to_string(),
                axis: V::AXIS.to_string(),
                value: value.as_str().to_string(),
            }),
            None => Ok(self),
        }
    }

    /// Returns the class string a render with `props` would produce.
    pub fn class_for(&self, props: &Props) -> String {
        class_names([self.generated_class(props), props.caller_class().unwrap_or("").to_string()])
    }

    /// Renders the component.
    ///
    /// Variant props fall back to their defaults when missing or undeclared.
    pub fn render(&self, props: Props) -> Element {
        let class = self.class_for(&props);
        self.build(class, props)
    }

    /// Renders the component, rejecting undeclared variant values.
    pub fn try_render(&self, props: Props) -> Result<Element, VariantError> {
        let generated = resolve_strict(&self.spec, &self.selections(&props))?;
        let class = class_names([generated.as_str(), props.caller_class().unwrap_or("")]);
        Ok(self.build(class, props))
    }

    fn generated_class(&self, props: &Props) -> String {
        if self.spec.variants().is_empty() {
            return self.spec.base_class().to_string();
        }
        resolve(&self.spec, &self.selections(props))
    }

    fn selections(&self, props: &Props) -> Selections {
        props
            .attributes()
            .filter(|(name, _)| self.spec.has_axis(name))
            .filter_map(|(name, value)| value.as_text().map(|v| (name, v)))
            .collect()
    }

    fn build(&self, class: String, props: Props) -> Element {
        let mut element = Element::new(self.spec.element());
        if !class.is_empty() {
            element.set_attr("class", AttrValue::Text(class));
        }
        for (name, value) in props.attributes() {
            if name != "class" && !self.spec.has_axis(name) {
                element.set_attr(name, value.clone());
            }
        }
        for child in props.into_children() {
            element.push_child(child);
        }
        element
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::Node;

    fn button() -> Component {
        create_component(
            ComponentSpec::new("Button", "button")
                .base("btn")
                .variant("size", "sm", "h-8")
                .variant("size", "lg", "h-12")
                .variant("tone", "primary", "bg-green-600")
                .variant("tone", "ghost", "bg-transparent")
                .default_variant("size", "sm")
                .default_variant("tone", "primary"),
        )
        .unwrap()
    }

    #[test]
    fn test_create_rejects_invalid_spec() {
        let spec = ComponentSpec::new("Button", "button")
            .variant("size", "sm", "h-8")
            .default_variant("tone", "primary");
        assert!(matches!(
            create_component(spec),
            Err(SpecError::UnknownDefaultAxis { .. })
        ));
    }

    #[test]
    fn test_render_defaults() {
        let el = button().render(Props::new());
        assert_eq!(el.class(), Some("btn h-8 bg-green-600"));
        assert_eq!(el.tag(), "button");
    }

    #[test]
    fn test_variant_props_not_forwarded() {
        let el = button().render(Props::new().variant("size", "lg").attr("type", "submit"));
        assert!(el.attr("size").is_none());
        assert_eq!(el.attr("type"), Some(&AttrValue::Text("submit".into())));
        assert_eq!(el.class(), Some("btn h-12 bg-green-600"));
    }

    #[test]
    fn test_unknown_props_forwarded_in_order() {
        let el = button().render(
            Props::new()
                .attr("aria-busy", "true")
                .flag("disabled")
                .test_id("pay"),
        );
        assert_eq!(
            el.to_html(),
            r#"<button class="btn h-8 bg-green-600" aria-busy="true" disabled data-testid="pay"></button>"#
        );
    }

    #[test]
    fn test_caller_class_last() {
        let el = button().render(Props::new().class("bg-red-600").variant("tone", "ghost"));
        assert_eq!(el.class(), Some("btn h-8 bg-transparent bg-red-600"));
    }

    #[test]
    fn test_bare_class_keeps_generated_classes() {
        let el = button().render(Props::new().flag("class").class("w-full"));
        assert_eq!(
            el.to_html(),
            r#"<button class="btn h-8 bg-green-600 w-full"></button>"#
        );
        assert_eq!(
            button().render(Props::new().flag("class")).class(),
            Some("btn h-8 bg-green-600")
        );
    }

    #[test]
    fn test_zero_variants_plain_element() {
        let divider = create_component(ComponentSpec::new("Divider", "hr").base("border-t")).unwrap();
        assert_eq!(divider.render(Props::new()).to_html(), r#"<hr class="border-t" />"#);

        // A prop named like a would-be axis is just an attribute.
        let el = divider.render(Props::new().attr("size", "lg"));
        assert_eq!(el.attr("size"), Some(&AttrValue::Text("lg".into())));
    }

    #[test]
    fn test_no_classes_no_class_attribute() {
        let plain = create_component(ComponentSpec::new("Box", "div")).unwrap();
        assert_eq!(plain.render(Props::new()).to_html(), "<div></div>");
    }

    #[test]
    fn test_children_rendered() {
        let icon = Node::Raw("<svg></svg>".into());
        let el = button().render(Props::new().child(icon).text("Add to cart"));
        assert_eq!(
            el.to_html(),
            r#"<button class="btn h-8 bg-green-600"><svg></svg>Add to cart</button>"#
        );
    }

    #[test]
    fn test_try_render_rejects_typo() {
        let err = button()
            .try_render(Props::new().variant("size", "xxl"))
            .unwrap_err();
        assert!(matches!(err, VariantError::UnknownValue { .. }));

        let el = button()
            .try_render(Props::new().variant("size", "lg").class("w-full"))
            .unwrap();
        assert_eq!(el.class(), Some("btn h-12 bg-green-600 w-full"));
    }

    crate::variant_enum! {
        enum Size: "size" {
            Small => "sm",
            Large => "lg",
        }
    }

    crate::variant_enum! {
        enum Width: "size" {
            Small => "sm",
            Huge => "xxl",
        }
    }

    #[test]
    fn test_bind_typed_axis() {
        let button = button().bind::<Size>().unwrap();
        let el = button.render(Props::new().select(Size::Large));
        assert_eq!(el.class(), Some("btn h-12 bg-green-600"));
    }

    #[test]
    fn test_bind_rejects_undeclared_value() {
        let err = button().bind::<Width>().unwrap_err();
        assert_eq!(
            err,
            SpecError::UndeclaredTypedValue {
                component: "Button".to_string(),
                axis: "size".to_string(),
                value: "xxl".to_string(),
            }
        );
    }
}

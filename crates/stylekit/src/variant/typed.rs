//! Typed variant axes.
//!
//! String selections fall back silently when a value is misspelled. A
//! [`VariantValue`] enum closes the set of values at compile time instead;
//! [`Component::bind`](crate::Component::bind) checks once, at construction,
//! that every enum value is declared by the spec.

/// A closed set of values for one variant axis.
///
/// Usually implemented with [`variant_enum!`](crate::variant_enum).
pub trait VariantValue: Copy + 'static {
    /// Axis name this enum selects on.
    const AXIS: &'static str;

    /// The value name as declared in the spec.
    fn as_str(&self) -> &'static str;

    /// Every value of the enum.
    fn all() -> &'static [Self];
}

/// Declares an enum implementing [`VariantValue`].
///
/// # Example
///
/// ```rust
/// use stylekit::{variant_enum, VariantValue};
///
/// variant_enum! {
///     pub enum Size: "size" {
///         Small => "sm",
///         Large => "lg",
///     }
/// }
///
/// assert_eq!(Size::AXIS, "size");
/// assert_eq!(Size::Large.as_str(), "lg");
/// assert_eq!(Size::all().len(), 2);
/// ```
#[macro_export]
macro_rules! variant_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident : $axis:literal {
            $($variant:ident => $value:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $($variant),+
        }

        impl $crate::VariantValue for $name {
            const AXIS: &'static str = $axis;

            fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $value),+
                }
            }

            fn all() -> &'static [Self] {
                &[$(Self::$variant),+]
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{resolve, ComponentSpec, Selections};

    crate::variant_enum! {
        enum Tone: "tone" {
            Neutral => "neutral",
            Danger => "danger",
        }
    }

    #[test]
    fn test_variant_enum_values() {
        assert_eq!(Tone::AXIS, "tone");
        assert_eq!(Tone::Danger.as_str(), "danger");
        assert_eq!(Tone::all(), &[Tone::Neutral, Tone::Danger]);
    }

    #[test]
    fn test_typed_selection_resolves() {
        let spec = ComponentSpec::new("Alert", "div")
            .base("alert")
            .variant("tone", "neutral", "bg-gray-50")
            .variant("tone", "danger", "bg-red-50")
            .default_variant("tone", "neutral");

        let selections = Selections::new().select(Tone::Danger);
        assert_eq!(resolve(&spec, &selections), "alert bg-red-50");
    }
}

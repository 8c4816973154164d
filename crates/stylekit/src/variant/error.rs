//! Spec and variant errors.

/// Error returned when a component spec is misconfigured.
///
/// These are raised when a component is constructed, never at render time.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SpecError {
    /// A default refers to an axis the spec does not declare.
    #[error("component '{component}' sets a default for unknown variant axis '{axis}'")]
    UnknownDefaultAxis { component: String, axis: String },

    /// A default value is not one of the axis's declared values.
    #[error("component '{component}' defaults axis '{axis}' to undeclared value '{value}'")]
    UnknownDefaultValue {
        component: String,
        axis: String,
        value: String,
    },

    /// An axis was declared without any values.
    #[error("component '{component}' declares variant axis '{axis}' with no values")]
    EmptyAxis { component: String, axis: String },

    /// The element tag is empty or not a valid HTML tag name.
    #[error("component '{component}' has invalid element tag '{element}'")]
    InvalidElement { component: String, element: String },

    /// Two sub-parts of a compound component share a name.
    #[error("component '{component}' declares part '{part}' more than once")]
    DuplicatePart { component: String, part: String },

    /// A typed axis has a value the spec does not declare.
    #[error("component '{component}' is missing value '{value}' for typed axis '{axis}'")]
    UndeclaredTypedValue {
        component: String,
        axis: String,
        value: String,
    },
}

/// Error returned by strict variant resolution.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VariantError {
    /// The selection names an axis the component does not have.
    #[error("component '{component}' has no variant axis '{axis}'")]
    UnknownAxis { component: String, axis: String },

    /// The selection names a value the axis does not declare.
    #[error(
        "'{value}' is not a valid {axis} for component '{component}' (expected one of: {})",
        .allowed.join(", ")
    )]
    UnknownValue {
        component: String,
        axis: String,
        value: String,
        allowed: Vec<String>,
    },
}

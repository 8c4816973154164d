//! `require-aria-attributes`: per-component attribute and role requirements.
//!
//! Values are compared after normalisation. A bare attribute equals the
//! expression `true`, a quoted string inside braces equals the same
//! literal, and whitespace inside expressions is ignored, so
//! `aria-busy={ isLoading }` matches `isLoading={isLoading}`. Literal
//! expectations match either form: `aria-modal`, `aria-modal={true}` and
//! `aria-modal="true"` all satisfy `literal: "true"`, and a boolean
//! expression mirrors its string form (`isLoading aria-busy="true"`).

use tracing::debug;

use super::LintRule;
use crate::config::{AriaOptions, AttributeRequirement, Condition, Expected};
use crate::report::LintIssue;
use crate::source::{AttributeValue, JsxElement, SourceFile};

pub const ID: &str = "require-aria-attributes";

#[derive(Debug, Clone, Default)]
pub struct RequireAriaAttributes {
    options: AriaOptions,
}

/// An attribute value reduced to something comparable.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Normalized {
    Text(String),
    Code(String),
}

impl Normalized {
    fn as_str(&self) -> &str {
        match self {
            Normalized::Text(s) | Normalized::Code(s) => s,
        }
    }
    /// Boolean literals match their string form; other expressions only
    /// match the same expression.
    fn matches(&self, other: &Normalized) -> bool {
        match (self, other) {
            (Normalized::Text(a), Normalized::Code(b))
            | (Normalized::Code(b), Normalized::Text(a)) => {
                matches!(b.as_str(), "true" | "false") && a == b
            }
            _ => self == other,
        }
    }
}

fn normalize(value: &AttributeValue) -> Option<Normalized> {
    match value {
        AttributeValue::Bare => Some(Normalized::Code("true".to_string())),
        AttributeValue::Literal(text) => Some(Normalized::Text(text.clone())),
        AttributeValue::Expression(code) => {
            if let Some(text) = string_literal(code) {
                return Some(Normalized::Text(text.to_string()));
            }
            let compact: String = code.chars().filter(|c| !c.is_whitespace()).collect();
            if compact.is_empty() {
                None
            } else {
                Some(Normalized::Code(compact))
            }
        }
    }
}

/// Contents of `"..."`, `'...'` or a template without substitutions.
fn string_literal(code: &str) -> Option<&str> {
    let quote = code.chars().next()?;
    if !matches!(quote, '"' | '\'' | '`') || code.len() < 2 || !code.ends_with(quote) {
        return None;
    }
    let inner = &code[1..code.len() - 1];
    if inner.contains(quote) || (quote == '`' && inner.contains("${")) {
        return None;
    }
    Some(inner)
}

impl RequireAriaAttributes {
    pub fn new(options: AriaOptions) -> Self {
        Self { options }
    }

    fn check_attribute(
        &self,
        file: &SourceFile,
        element: &JsxElement,
        requirement: &AttributeRequirement,
    ) -> Option<LintIssue> {
        if let Condition::PropPresent(prop) = &requirement.when {
            if !element.has_attribute(prop) {
                return None;
            }
        }

        let issue = |message: String| {
            LintIssue::new(ID, file.path(), element.position, message)
                .with_component(element.name.clone())
        };

        let Some(actual) = element.attribute(&requirement.name) else {
            let suggestion = match &requirement.value {
                Expected::Any => format!("add {}", requirement.name),
                Expected::FromProp(prop) => format!("add {}={{{}}}", requirement.name, prop),
                Expected::Literal(text) => format!("add {}=\"{}\"", requirement.name, text),
            };
            return Some(
                issue(format!(
                    "<{}> is missing `{}`",
                    element.name, requirement.name
                ))
                .with_suggestion(suggestion),
            );
        };

        let Some(actual) = normalize(actual) else {
            debug!(attribute = %requirement.name, "skipping unreadable attribute value");
            return None;
        };

        match &requirement.value {
            Expected::Any => None,
            Expected::FromProp(prop) => {
                let expected = element.attribute(prop).and_then(normalize)?;
                (!actual.matches(&expected)).then(|| {
                    issue(format!(
                        "<{}> `{}` should mirror `{}`",
                        element.name, requirement.name, prop
                    ))
                    .with_suggestion(format!("set {}={{{}}}", requirement.name, prop))
                })
            }
            Expected::Literal(text) => (actual.as_str() != text.as_str()).then(|| {
                issue(format!(
                    "<{}> `{}` should be \"{}\"",
                    element.name, requirement.name, text
                ))
            }),
        }
    }

    fn check_role(
        &self,
        file: &SourceFile,
        element: &JsxElement,
        roles: &[String],
    ) -> Option<LintIssue> {
        let issue = |message: String| {
            LintIssue::new(ID, file.path(), element.position, message)
                .with_component(element.name.clone())
                .with_suggestion(format!("use role=\"{}\"", roles.join("\" or role=\"")))
        };

        match element.attribute("role").map(normalize) {
            None => Some(issue(format!("<{}> is missing `role`", element.name))),
            Some(Some(Normalized::Text(role))) if !roles.contains(&role) => Some(issue(format!(
                "<{}> has role \"{}\", expected one of: {}",
                element.name,
                role,
                roles.join(", ")
            ))),
            // Computed roles cannot be judged statically.
            _ => None,
        }
    }
}

impl LintRule for RequireAriaAttributes {
    fn id(&self) -> &'static str {
        ID
    }

    fn description(&self) -> &'static str {
        "Usages of configured components must carry required ARIA attributes and roles"
    }

    fn check(&self, file: &SourceFile) -> Vec<LintIssue> {
        let mut issues = Vec::new();

        for element in file.elements() {
            let Some(requirement) = self.options.components.get(&element.name) else {
                continue;
            };
            if !element.is_checkable() {
                debug!(component = %element.name, line = element.position.line, "skipping unreadable usage");
                continue;
            }

            for attribute in &requirement.attributes {
                issues.extend(self.check_attribute(file, element, attribute));
            }
            if !requirement.roles.is_empty() {
                issues.extend(self.check_role(file, element, &requirement.roles));
            }
        }

        issues
    }
}

//! `enforce-component-naming`: exported components and their files follow
//! naming patterns.

use once_cell::sync::Lazy;
use regex::Regex;

use super::LintRule;
use crate::config::{ConfigError, NamingOptions};
use crate::report::LintIssue;
use crate::source::{Declaration, DeclarationKind, Initializer, Position, SourceFile};

pub const ID: &str = "enforce-component-naming";

static DEFAULT_RULE: Lazy<EnforceComponentNaming> = Lazy::new(|| {
    EnforceComponentNaming::new(NamingOptions::default()).expect("default naming patterns compile")
});

#[derive(Debug, Clone)]
pub struct EnforceComponentNaming {
    pattern: Regex,
    filename_pattern: Regex,
    ignore_pattern: Regex,
    wrappers: Vec<String>,
    extensions: Vec<String>,
}

fn compile(option: &'static str, pattern: &str) -> Result<Regex, ConfigError> {
    Regex::new(pattern).map_err(|source| ConfigError::Pattern {
        option,
        pattern: pattern.to_string(),
        source,
    })
}

impl EnforceComponentNaming {
    pub fn new(options: NamingOptions) -> Result<Self, ConfigError> {
        Ok(Self {
            pattern: compile("pattern", &options.pattern)?,
            filename_pattern: compile("filename_pattern", &options.filename_pattern)?,
            ignore_pattern: compile("ignore_pattern", &options.ignore_pattern)?,
            wrappers: options.wrappers,
            extensions: options.extensions,
        })
    }

    /// A declaration counts as a component if it renders JSX from a
    /// function or class body, or wraps one with a known wrapper call.
    fn is_component(&self, decl: &Declaration) -> bool {
        match (&decl.kind, &decl.initializer) {
            (DeclarationKind::Function | DeclarationKind::Class, _) => decl.contains_jsx,
            (DeclarationKind::Variable, Some(Initializer::Function)) => decl.contains_jsx,
            (DeclarationKind::Variable, Some(init @ Initializer::Call(_))) => init
                .callee()
                .is_some_and(|callee| self.wrappers.iter().any(|w| w == callee)),
            _ => false,
        }
    }

    fn is_ignored(&self, decl: &Declaration) -> bool {
        self.ignore_pattern.is_match(&decl.name)
            || self.ignore_pattern.is_match(decl.exported_name())
    }
}

impl Default for EnforceComponentNaming {
    fn default() -> Self {
        DEFAULT_RULE.clone()
    }
}

impl LintRule for EnforceComponentNaming {
    fn id(&self) -> &'static str {
        ID
    }

    fn description(&self) -> &'static str {
        "Exported components and the files that export them must follow naming patterns"
    }

    fn check(&self, file: &SourceFile) -> Vec<LintIssue> {
        let in_scope = file
            .extension()
            .is_some_and(|ext| self.extensions.iter().any(|e| e == ext));
        if !in_scope {
            return Vec::new();
        }

        let components: Vec<&Declaration> = file
            .declarations()
            .iter()
            .filter(|d| d.exported && self.is_component(d) && !self.is_ignored(d))
            .collect();

        let mut issues = Vec::new();
        for decl in &components {
            let name = decl.exported_name();
            if self.pattern.is_match(name) {
                continue;
            }
            issues.push(
                LintIssue::new(
                    ID,
                    file.path(),
                    decl.position,
                    format!(
                        "component `{}` does not match `{}`",
                        name,
                        self.pattern.as_str()
                    ),
                )
                .with_component(name),
            );
        }

        if let (Some(first), Some(stem)) = (components.first(), file.base_name()) {
            if !self.filename_pattern.is_match(stem) {
                issues.push(
                    LintIssue::new(
                        ID,
                        file.path(),
                        Position { line: 1, column: 1 },
                        format!(
                            "file name `{}` does not match `{}`",
                            stem,
                            self.filename_pattern.as_str()
                        ),
                    )
                    .with_component(first.exported_name()),
                );
            }
        }

        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(path: &str, src: &str) -> Vec<String> {
        EnforceComponentNaming::default()
            .check(&SourceFile::parse(path, src))
            .into_iter()
            .map(|i| i.message)
            .collect()
    }

    #[test]
    fn test_well_named_component() {
        let src = "export function ProductCard() { return <article />; }";
        assert!(check("product-card.tsx", src).is_empty());
    }

    #[test]
    fn test_lowercase_component() {
        let src = "export const productCard = () => <article />;";
        assert_eq!(
            check("product-card.tsx", src),
            vec!["component `productCard` does not match `^[A-Z][A-Za-z0-9]*$`"]
        );
    }

    #[test]
    fn test_filename_checked_once() {
        let src = "export const Header = () => <header />;\nexport const Footer = () => <footer />;";
        assert_eq!(
            check("src/Layout.tsx", src),
            vec!["file name `Layout` does not match `^[a-z0-9]+(-[a-z0-9]+)*$`"]
        );
    }

    #[test]
    fn test_non_components_ignored() {
        let src = r#"export const formatPrice = (cents) => `${cents}`;
export function useCart() { return <Ctx />; }
function card() { return <div />; }
"#;
        assert!(check("Helpers.tsx", src).is_empty());
    }

    #[test]
    fn test_wrapped_components() {
        let src = "export const button = React.forwardRef((p, r) => null);";
        assert_eq!(check("button.tsx", src).len(), 1);
    }

    #[test]
    fn test_export_alias_is_checked() {
        let src = "const Card = () => <div />;\nexport { Card as card };";
        assert_eq!(
            check("card.tsx", src),
            vec!["component `card` does not match `^[A-Z][A-Za-z0-9]*$`"]
        );
    }

    #[test]
    fn test_other_extensions_skipped() {
        let src = "export const productCard = () => <article />;";
        assert!(check("ProductCard.js", src).is_empty());
    }

    #[test]
    fn test_invalid_pattern() {
        let err = EnforceComponentNaming::new(NamingOptions {
            pattern: "(".into(),
            ..NamingOptions::default()
        })
        .unwrap_err();
        assert!(matches!(err, ConfigError::Pattern { option: "pattern", .. }));
    }
}

//! `enforce-component-factory`: allowlisted components must be built by a
//! factory call.

use super::LintRule;
use crate::config::FactoryOptions;
use crate::report::LintIssue;
use crate::source::{Declaration, DeclarationKind, Initializer, SourceFile};

pub const ID: &str = "enforce-component-factory";

#[derive(Debug, Clone)]
pub struct EnforceComponentFactory {
    options: FactoryOptions,
}

impl EnforceComponentFactory {
    pub fn new(options: FactoryOptions) -> Self {
        Self { options }
    }

    fn applies_to(&self, name: &str) -> bool {
        self.options.components.iter().any(|c| c == name)
            && !self.options.ignore.iter().any(|c| c == name)
    }

    fn uses_factory(&self, decl: &Declaration) -> bool {
        decl.initializer
            .as_ref()
            .and_then(Initializer::callee)
            .is_some_and(|callee| self.options.factories.iter().any(|f| f == callee))
    }

    fn describe(decl: &Declaration) -> &'static str {
        match (&decl.kind, &decl.initializer) {
            (DeclarationKind::Function, _) => "a function declaration",
            (DeclarationKind::Class, _) => "a class",
            (_, Some(Initializer::Function)) => "an inline function",
            (_, Some(Initializer::Call(_))) => "a non-factory call",
            _ => "a plain value",
        }
    }
}

impl Default for EnforceComponentFactory {
    fn default() -> Self {
        Self::new(FactoryOptions::default())
    }
}

impl LintRule for EnforceComponentFactory {
    fn id(&self) -> &'static str {
        ID
    }

    fn description(&self) -> &'static str {
        "Allowlisted components must be declared with a component factory"
    }

    fn check(&self, file: &SourceFile) -> Vec<LintIssue> {
        file.declarations()
            .iter()
            .filter(|d| self.applies_to(&d.name) && !self.uses_factory(d))
            .map(|d| {
                LintIssue::new(
                    ID,
                    file.path(),
                    d.position,
                    format!(
                        "`{}` is declared as {} instead of with a component factory",
                        d.name,
                        Self::describe(d)
                    ),
                )
                .with_component(d.name.clone())
                .with_suggestion(format!(
                    "const {} = {}({{ ... }})",
                    d.name,
                    self.options
                        .factories
                        .first()
                        .map(String::as_str)
                        .unwrap_or("createComponent")
                ))
            })
            .collect()
    }
}

//! `require-data-testid`: listed components must carry a test id.

use tracing::debug;

use super::LintRule;
use crate::config::TestIdOptions;
use crate::report::LintIssue;
use crate::source::SourceFile;

pub const ID: &str = "require-data-testid";

#[derive(Debug, Clone)]
pub struct RequireDataTestId {
    options: TestIdOptions,
}

impl RequireDataTestId {
    pub fn new(options: TestIdOptions) -> Self {
        Self { options }
    }

    fn applies_to(&self, name: &str) -> bool {
        self.options.components.iter().any(|c| c == name)
            && !self.options.ignore.iter().any(|c| c == name)
    }
}

impl Default for RequireDataTestId {
    fn default() -> Self {
        Self::new(TestIdOptions::default())
    }
}

impl LintRule for RequireDataTestId {
    fn id(&self) -> &'static str {
        ID
    }

    fn description(&self) -> &'static str {
        "Usages of listed components must carry a test id attribute"
    }

    fn check(&self, file: &SourceFile) -> Vec<LintIssue> {
        let attribute = self.options.attribute.as_str();
        let mut issues = Vec::new();

        for element in file.elements() {
            if !self.applies_to(&element.name) {
                continue;
            }
            if !element.is_checkable() {
                debug!(component = %element.name, line = element.position.line, "skipping unreadable usage");
                continue;
            }
            if element.has_attribute(attribute) {
                continue;
            }
            issues.push(
                LintIssue::new(
                    ID,
                    file.path(),
                    element.position,
                    format!("<{}> is missing `{}`", element.name, attribute),
                )
                .with_component(element.name.clone())
                .with_suggestion(format!("add {}=\"...\"", attribute)),
            );
        }

        issues
    }
}

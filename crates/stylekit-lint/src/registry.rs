//! The set of rules a lint run applies, and the file walk that feeds them.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use walkdir::WalkDir;

use crate::config::{Config, ConfigError};
use crate::report::{LintReport, Severity};
use crate::rules::{
    aria, factory, naming, testid, EnforceComponentFactory, EnforceComponentNaming, LintError,
    LintRule, RequireAriaAttributes, RequireDataTestId,
};
use crate::source::SourceFile;

struct Registered {
    rule: Box<dyn LintRule>,
    severity: Severity,
}

/// Registry of lint rules plus the file filters of a run.
pub struct RuleRegistry {
    rules: Vec<Registered>,
    disabled_rules: HashSet<String>,
    enabled_only: Option<HashSet<String>>,
    /// Source of the extension and ignore filters for walked paths.
    files: Config,
}

impl RuleRegistry {
    /// Creates a new empty registry that accepts the default extensions.
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            disabled_rules: HashSet::new(),
            enabled_only: None,
            files: Config::default(),
        }
    }

    /// Creates a registry with all built-in rules at their default settings.
    pub fn default_rules() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(RequireDataTestId::default()));
        registry.register(Box::new(RequireAriaAttributes::default()));
        registry.register(Box::new(EnforceComponentNaming::default()));
        registry.register(Box::new(EnforceComponentFactory::default()));
        registry
    }

    /// Builds the registry described by `config`. Every built-in rule is
    /// registered; rules the config disables stay listed in
    /// [`rule_metadata`](Self::rule_metadata) but never run.
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        let rules = &config.rules;
        let mut registry = Self::new();
        registry.files.extensions = config.extensions.clone();
        registry.files.ignore_paths = config.ignore_paths.clone();

        registry.register_with_severity(
            Box::new(RequireDataTestId::new(rules.test_id.options.clone())),
            rules.test_id.severity,
        );
        registry.register_with_severity(
            Box::new(RequireAriaAttributes::new(rules.aria.options.clone())),
            rules.aria.severity,
        );
        registry.register_with_severity(
            Box::new(EnforceComponentNaming::new(rules.naming.options.clone())?),
            rules.naming.severity,
        );
        registry.register_with_severity(
            Box::new(EnforceComponentFactory::new(rules.factory.options.clone())),
            rules.factory.severity,
        );

        let toggles = [
            (testid::ID, rules.test_id.enabled),
            (aria::ID, rules.aria.enabled),
            (naming::ID, rules.naming.enabled),
            (factory::ID, rules.factory.enabled),
        ];
        for (id, enabled) in toggles {
            if !enabled {
                registry.disable_rule(id);
            }
        }

        debug!(rules = registry.len(), "built rule registry");
        Ok(registry)
    }

    /// Registers a new lint rule at warning severity.
    pub fn register(&mut self, rule: Box<dyn LintRule>) {
        self.register_with_severity(rule, Severity::Warning);
    }

    pub fn register_with_severity(&mut self, rule: Box<dyn LintRule>, severity: Severity) {
        self.rules.push(Registered { rule, severity });
    }

    /// Keeps a rule registered but stops it from running.
    pub fn disable_rule(&mut self, rule_id: &str) {
        self.disabled_rules.insert(rule_id.to_string());
    }

    /// Runs only the listed rules, e.g. for `stylekit lint --rule <id>`.
    pub fn enable_only(&mut self, rule_ids: &[&str]) {
        self.enabled_only = Some(rule_ids.iter().map(|s| s.to_string()).collect());
    }

    /// Id, description, severity and enabled state of every registered rule.
    pub fn rule_metadata(&self) -> Vec<RuleMetadata> {
        self.rules
            .iter()
            .map(|r| RuleMetadata {
                id: r.rule.id().to_string(),
                description: r.rule.description().to_string(),
                severity: r.severity,
                enabled: self.is_rule_enabled(r.rule.id()),
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    fn is_rule_enabled(&self, rule_id: &str) -> bool {
        if self.disabled_rules.contains(rule_id) {
            return false;
        }
        if let Some(ref enabled) = self.enabled_only {
            return enabled.contains(rule_id);
        }
        true
    }

    /// Runs every enabled rule over source text already in memory.
    pub fn lint_source(&self, path: impl Into<PathBuf>, text: &str) -> LintReport {
        let file = SourceFile::parse(path, text);
        let mut report = LintReport::new();
        report.mark_scanned();

        for registered in &self.rules {
            if !self.is_rule_enabled(registered.rule.id()) {
                continue;
            }
            for issue in registered.rule.check(&file) {
                report.add_issue(issue.with_severity(registered.severity));
            }
        }

        debug!(
            path = %file.path().display(),
            elements = file.elements().len(),
            issues = report.warnings.len(),
            "linted file"
        );
        report
    }

    /// Reads and lints one file.
    pub fn lint_file(&self, path: &Path) -> Result<LintReport, LintError> {
        let text = std::fs::read_to_string(path).map_err(|source| LintError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(self.lint_source(path, &text))
    }

    /// Lints files and directory trees. Directories are walked recursively,
    /// keeping files with a configured extension outside ignored paths;
    /// files named explicitly are linted regardless of extension. Files
    /// that cannot be read are recorded as failures and the run continues.
    pub fn lint_paths<P: AsRef<Path>>(&self, paths: &[P]) -> LintReport {
        let mut report = LintReport::new();

        for root in paths {
            let root = root.as_ref();
            if root.is_file() {
                self.lint_into(&mut report, root);
                continue;
            }

            let walker = WalkDir::new(root)
                .sort_by_file_name()
                .into_iter()
                .filter_entry(|entry| {
                    entry.depth() == 0 || !self.files.is_ignored(Path::new(entry.file_name()))
                });
            for entry in walker {
                match entry {
                    Ok(entry) => {
                        if entry.file_type().is_file() && self.files.accepts_extension(entry.path()) {
                            self.lint_into(&mut report, entry.path());
                        }
                    }
                    Err(err) => {
                        let path = err.path().unwrap_or(root).to_path_buf();
                        let error = LintError::Walk {
                            path: path.clone(),
                            source: err,
                        };
                        debug!(%error, "walk failed");
                        report.add_failure(path, error.to_string());
                    }
                }
            }
        }

        report.sort();
        info!(
            files = report.summary.files_scanned,
            warnings = report.summary.warning_count,
            failures = report.summary.failure_count,
            "lint run complete"
        );
        report
    }

    fn lint_into(&self, report: &mut LintReport, path: &Path) {
        match self.lint_file(path) {
            Ok(file_report) => report.merge(file_report),
            Err(error) => {
                debug!(%error, "skipping unreadable file");
                report.add_failure(path, error.to_string());
            }
        }
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::default_rules()
    }
}

/// One row of `stylekit rules`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleMetadata {
    pub id: String,
    pub description: String,
    pub severity: Severity,
    pub enabled: bool,
}

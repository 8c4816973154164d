//! Issues and per-run reports, serializable for `--output json`.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::source::Position;

/// Severity level for lint issues.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    /// Advisory; only fails a run in strict mode.
    #[default]
    Warning,
    /// Always fails the run.
    Error,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

/// A single advisory warning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LintIssue {
    /// Rule that produced the issue (e.g. "require-data-testid").
    pub rule_id: String,

    pub severity: Severity,

    pub message: String,

    /// File the issue was found in.
    pub path: PathBuf,

    pub line: usize,
    pub column: usize,

    /// Component or identifier the issue is about.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component: Option<String>,

    /// How to fix it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl LintIssue {
    /// Creates an issue at warning severity.
    pub fn new(
        rule_id: impl Into<String>,
        path: &Path,
        position: Position,
        message: impl Into<String>,
    ) -> Self {
        Self {
            rule_id: rule_id.into(),
            severity: Severity::Warning,
            message: message.into(),
            path: path.to_path_buf(),
            line: position.line,
            column: position.column,
            component: None,
            suggestion: None,
        }
    }

    /// Builder method to override the severity.
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// Builder method to set the component.
    pub fn with_component(mut self, component: impl Into<String>) -> Self {
        self.component = Some(component.into());
        self
    }

    /// Builder method to set the suggestion.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

/// A file that could not be linted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileFailure {
    pub path: PathBuf,
    pub message: String,
}

/// Summary statistics for a lint run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LintSummary {
    pub files_scanned: usize,
    pub warning_count: usize,
    pub failure_count: usize,
}

/// Result of a lint run over one or more files.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LintReport {
    pub warnings: Vec<LintIssue>,
    pub failures: Vec<FileFailure>,
    pub summary: LintSummary,
}

impl LintReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_issue(&mut self, issue: LintIssue) {
        self.summary.warning_count += 1;
        self.warnings.push(issue);
    }

    pub fn add_failure(&mut self, path: impl Into<PathBuf>, message: impl Into<String>) {
        self.summary.failure_count += 1;
        self.failures.push(FileFailure {
            path: path.into(),
            message: message.into(),
        });
    }

    /// Records that a file was scanned.
    pub fn mark_scanned(&mut self) {
        self.summary.files_scanned += 1;
    }

    /// Folds a per-file report into a run report.
    pub fn merge(&mut self, other: LintReport) {
        self.summary.files_scanned += other.summary.files_scanned;
        for issue in other.warnings {
            self.add_issue(issue);
        }
        for failure in other.failures {
            self.add_failure(failure.path, failure.message);
        }
    }

    /// Orders warnings by file, then position, then rule.
    pub fn sort(&mut self) {
        self.warnings.sort_by(|a, b| {
            (&a.path, a.line, a.column, &a.rule_id).cmp(&(&b.path, b.line, b.column, &b.rule_id))
        });
    }

    /// Returns true if nothing was flagged and every file could be read.
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty() && self.failures.is_empty()
    }

    /// Number of issues at [`Severity::Error`].
    pub fn error_count(&self) -> usize {
        self.warnings
            .iter()
            .filter(|w| w.severity == Severity::Error)
            .count()
    }

    /// Returns true if the run should fail. Strict mode fails on any issue
    /// above `info`.
    pub fn fails(&self, strict: bool) -> bool {
        if !self.failures.is_empty() || self.error_count() > 0 {
            return true;
        }
        strict && self.warnings.iter().any(|w| w.severity >= Severity::Warning)
    }

    /// Returns warnings produced by one rule.
    pub fn warnings_for<'a>(&'a self, rule_id: &'a str) -> impl Iterator<Item = &'a LintIssue> {
        self.warnings.iter().filter(move |w| w.rule_id == rule_id)
    }
}

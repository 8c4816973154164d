//! Report formatting: styled text through minijinja templates, or JSON.

use std::collections::HashMap;

use clap::ValueEnum;
use console::Style;
use minijinja::{Environment, Error, Value};
use serde::Serialize;
use stylekit::{Entry, Library};
use stylekit_lint::{LintReport, RuleMetadata};

/// How command output is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputMode {
    /// Styled text when the terminal supports it.
    #[default]
    Auto,
    /// Always styled.
    Term,
    /// Plain text.
    Text,
    Json,
}

impl OutputMode {
    fn should_use_color(self) -> bool {
        match self {
            OutputMode::Auto => console::colors_enabled(),
            OutputMode::Term => true,
            OutputMode::Text | OutputMode::Json => false,
        }
    }
}

const LINT_TEMPLATE: &str = r#"{% for file in files %}
{{ file.path | style("path") }}
{% for w in file.warnings %}
  {{ w.position | style("position") }}  {{ w.severity | style(w.severity) }}  {{ w.message }}  {{ w.rule_id | style("rule") }}
{% if w.suggestion %}
    help: {{ w.suggestion | style("suggestion") }}
{% endif %}
{% endfor %}

{% endfor %}
{% for f in failures %}
{{ "error" | style("error") }}: {{ f.path }}: {{ f.message }}
{% endfor %}
{{ summary | style(summary_style) }}"#;

const RULES_TEMPLATE: &str = r#"{% for rule in rules %}
{{ rule.id | style("rule_id") }}  {{ rule.severity | style(rule.severity) }}{% if not rule.enabled %} {{ "(disabled)" | style("muted") }}{% endif %}

    {{ rule.description }}
{% endfor %}"#;

const LIBRARY_TEMPLATE: &str = r#"{% for c in components %}
{{ c.name | style("rule_id") }} {{ ("<" ~ c.element ~ ">") | style("muted") }}
{% for axis in c.axes %}
    {{ axis.name }}:{% for v in axis.values %} {{ v.name }}{% if v.default %}*{% endif %}{% endfor %}

{% endfor %}
{% if c.parts %}
    parts: {{ c.parts | join(", ") }}
{% endif %}
{% endfor %}
{{ summary | style("ok") }}"#;

fn styles() -> HashMap<&'static str, Style> {
    HashMap::from([
        ("path", Style::new().bold().underlined()),
        ("position", Style::new().dim()),
        ("rule", Style::new().dim()),
        ("rule_id", Style::new().cyan().bold()),
        ("muted", Style::new().dim()),
        ("info", Style::new().cyan()),
        ("warning", Style::new().yellow()),
        ("error", Style::new().red().bold()),
        ("suggestion", Style::new().green()),
        ("ok", Style::new().green().bold()),
    ])
}

/// Pre-compiled templates for command output.
pub struct Output {
    env: Environment<'static>,
    mode: OutputMode,
}

impl Output {
    pub fn new(mode: OutputMode) -> Result<Self, Error> {
        let mut env = Environment::new();
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);

        let styles = styles();
        let use_color = mode.should_use_color();
        env.add_filter("style", move |value: Value, name: String| -> String {
            let text = value.to_string();
            match styles.get(name.as_str()) {
                Some(style) => style.clone().force_styling(use_color).apply_to(text).to_string(),
                None => text,
            }
        });

        env.add_template("lint", LINT_TEMPLATE)?;
        env.add_template("rules", RULES_TEMPLATE)?;
        env.add_template("library", LIBRARY_TEMPLATE)?;
        Ok(Self { env, mode })
    }

    pub fn lint_report(&self, report: &LintReport) -> anyhow::Result<String> {
        if self.mode == OutputMode::Json {
            return Ok(serde_json::to_string_pretty(report)?);
        }
        Ok(self.env.get_template("lint")?.render(LintView::new(report))?)
    }

    pub fn rules(&self, rules: &[RuleMetadata]) -> anyhow::Result<String> {
        if self.mode == OutputMode::Json {
            return Ok(serde_json::to_string_pretty(rules)?);
        }
        let text = self
            .env
            .get_template("rules")?
            .render(minijinja::context! { rules => rules })?;
        Ok(text.trim_end().to_string())
    }

    pub fn library(&self, view: &LibraryView) -> anyhow::Result<String> {
        if self.mode == OutputMode::Json {
            return Ok(serde_json::to_string_pretty(view)?);
        }
        Ok(self.env.get_template("library")?.render(view)?)
    }
}

/// Summary of a validated component library.
#[derive(Debug, Serialize)]
pub struct LibraryView {
    components: Vec<ComponentView>,
    summary: String,
}

#[derive(Debug, Serialize)]
struct ComponentView {
    name: String,
    element: String,
    axes: Vec<AxisView>,
    parts: Vec<String>,
}

#[derive(Debug, Serialize)]
struct AxisView {
    name: String,
    values: Vec<ValueView>,
}

#[derive(Debug, Serialize)]
struct ValueView {
    name: String,
    default: bool,
}

impl LibraryView {
    pub fn new(library: &Library) -> Self {
        let components: Vec<ComponentView> = library
            .names()
            .filter_map(|name| library.entry(name))
            .map(|entry| {
                let spec = entry.root().spec();
                let axes = spec
                    .variants()
                    .iter()
                    .map(|(axis, values)| {
                        let default = spec.default_variants().get(axis);
                        AxisView {
                            name: axis.clone(),
                            values: values
                                .keys()
                                .map(|value| ValueView {
                                    name: value.clone(),
                                    default: default == Some(value),
                                })
                                .collect(),
                        }
                    })
                    .collect();
                let parts = match entry {
                    Entry::Simple(_) => Vec::new(),
                    Entry::Compound(compound) => {
                        compound.parts().map(|(name, _)| name.to_string()).collect()
                    }
                };
                ComponentView {
                    name: spec.name().to_string(),
                    element: spec.element().to_string(),
                    axes,
                    parts,
                }
            })
            .collect();

        let summary = format!("{} OK", plural(components.len(), "component"));
        Self {
            components,
            summary,
        }
    }
}

#[derive(Serialize)]
struct LintView {
    files: Vec<FileView>,
    failures: Vec<FailureView>,
    summary: String,
    summary_style: &'static str,
}

#[derive(Serialize)]
struct FileView {
    path: String,
    warnings: Vec<WarningView>,
}

#[derive(Serialize)]
struct WarningView {
    position: String,
    severity: &'static str,
    message: String,
    rule_id: String,
    suggestion: Option<String>,
}

#[derive(Serialize)]
struct FailureView {
    path: String,
    message: String,
}

impl LintView {
    /// Groups warnings by file. Expects the report to be sorted by path.
    fn new(report: &LintReport) -> Self {
        let mut files: Vec<FileView> = Vec::new();
        for warning in &report.warnings {
            let path = warning.path.display().to_string();
            let view = WarningView {
                position: format!("{}:{}", warning.line, warning.column),
                severity: warning.severity.as_str(),
                message: warning.message.clone(),
                rule_id: warning.rule_id.clone(),
                suggestion: warning.suggestion.clone(),
            };
            match files.last_mut() {
                Some(file) if file.path == path => file.warnings.push(view),
                _ => files.push(FileView {
                    path,
                    warnings: vec![view],
                }),
            }
        }

        let failures = report
            .failures
            .iter()
            .map(|f| FailureView {
                path: f.path.display().to_string(),
                message: f.message.clone(),
            })
            .collect();

        let summary = &report.summary;
        let scanned = plural(summary.files_scanned, "file");
        let errors = report.error_count();
        let (text, style) = if report.is_clean() {
            (format!("no issues in {}", scanned), "ok")
        } else {
            let mut text = format!("{} in {}", plural(summary.warning_count, "issue"), scanned);
            if errors > 0 {
                text.push_str(&format!(", {}", plural(errors, "error")));
            }
            if summary.failure_count > 0 {
                text.push_str(&format!(
                    ", {} could not be read",
                    plural(summary.failure_count, "file")
                ));
            }
            let style = if errors > 0 || summary.failure_count > 0 {
                "error"
            } else {
                "warning"
            };
            (text, style)
        };

        Self {
            files,
            failures,
            summary: text,
            summary_style: style,
        }
    }
}

fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("1 {}", noun)
    } else {
        format!("{} {}s", count, noun)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::path::Path;
    use stylekit_lint::source::Position;
    use stylekit_lint::{LintIssue, Severity};

    fn sample_report() -> LintReport {
        let mut report = LintReport::new();
        report.mark_scanned();
        report.mark_scanned();
        report.add_issue(
            LintIssue::new(
                "require-data-testid",
                Path::new("app/cart.tsx"),
                Position { line: 4, column: 7 },
                "<Button> is missing `data-testid`",
            )
            .with_suggestion("add data-testid=\"...\""),
        );
        report.add_issue(
            LintIssue::new(
                "enforce-component-naming",
                Path::new("app/cart.tsx"),
                Position { line: 1, column: 1 },
                "file name `Cart` does not match `^[a-z]+$`",
            )
            .with_severity(Severity::Error),
        );
        report
    }

    #[test]
    fn test_plain_text_report() {
        let output = Output::new(OutputMode::Text).unwrap();
        let text = output.lint_report(&sample_report()).unwrap();
        assert_eq!(
            text,
            "app/cart.tsx
  4:7  warning  <Button> is missing `data-testid`  require-data-testid
    help: add data-testid=\"...\"
  1:1  error  file name `Cart` does not match `^[a-z]+$`  enforce-component-naming

2 issues in 2 files, 1 error"
        );
    }

    #[test]
    fn test_clean_report() {
        let mut report = LintReport::new();
        report.mark_scanned();
        let output = Output::new(OutputMode::Text).unwrap();
        assert_eq!(output.lint_report(&report).unwrap(), "no issues in 1 file");
    }

    #[test]
    fn test_failures_listed() {
        let mut report = LintReport::new();
        report.add_failure("gone.tsx", "failed to read gone.tsx: not found");
        let output = Output::new(OutputMode::Text).unwrap();
        assert_eq!(
            output.lint_report(&report).unwrap(),
            "error: gone.tsx: failed to read gone.tsx: not found
0 issues in 0 files, 1 file could not be read"
        );
    }

    #[test]
    fn test_term_mode_styles_output() {
        let output = Output::new(OutputMode::Term).unwrap();
        let text = output.lint_report(&sample_report()).unwrap();
        assert!(text.contains("\u{1b}["));
    }

    #[test]
    fn test_json_report() {
        let output = Output::new(OutputMode::Json).unwrap();
        let json: serde_json::Value =
            serde_json::from_str(&output.lint_report(&sample_report()).unwrap()).unwrap();
        assert_eq!(json["summary"]["warning_count"], 2);
        assert_eq!(json["warnings"][1]["severity"], "error");
    }

    #[test]
    fn test_rules_listing() {
        let rules = vec![
            RuleMetadata {
                id: "require-data-testid".into(),
                description: "Needs test ids".into(),
                severity: Severity::Warning,
                enabled: true,
            },
            RuleMetadata {
                id: "enforce-component-factory".into(),
                description: "Needs factories".into(),
                severity: Severity::Error,
                enabled: false,
            },
        ];
        let output = Output::new(OutputMode::Text).unwrap();
        assert_eq!(
            output.rules(&rules).unwrap(),
            "require-data-testid  warning
    Needs test ids
enforce-component-factory  error (disabled)
    Needs factories"
        );
    }
}

//! Subcommand handlers. Each returns the text to print and whether the run
//! failed; `main` owns stdout and the exit code.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use stylekit::{Library, Renderer};
use stylekit_lint::{Config, RuleRegistry};
use tracing::{debug, info};

use crate::cli::{CheckArgs, LintArgs, RenderArgs, RulesArgs};
use crate::output::{LibraryView, Output};

/// File names probed, in order, when no `--config` is given.
pub const CONFIG_FILE_NAMES: [&str; 3] = [
    "stylekit-lint.yaml",
    "stylekit-lint.yml",
    "stylekit-lint.json",
];

#[derive(Debug)]
pub struct Outcome {
    pub text: String,
    pub failed: bool,
}

impl Outcome {
    fn ok(text: String) -> Self {
        Self {
            text,
            failed: false,
        }
    }
}

/// Returns the explicit config path, or the first config file found in `dir`.
pub fn find_config(explicit: Option<&Path>, dir: &Path) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.is_file())
}

fn load_config(explicit: Option<&Path>, dir: &Path) -> Result<Config> {
    match find_config(explicit, dir) {
        Some(path) => {
            debug!(path = %path.display(), "loading lint config");
            Config::from_path(&path)
                .with_context(|| format!("failed to load lint config {}", path.display()))
        }
        None => {
            debug!("no lint config found, using defaults");
            Ok(Config::default())
        }
    }
}

pub fn lint(args: &LintArgs, output: &Output, cwd: &Path) -> Result<Outcome> {
    let config = load_config(args.config.as_deref(), cwd)?;
    let mut registry = RuleRegistry::from_config(&config)?;

    if !args.only.is_empty() {
        let known: Vec<String> = registry.rule_metadata().into_iter().map(|m| m.id).collect();
        if let Some(unknown) = args.only.iter().find(|id| !known.contains(id)) {
            bail!(
                "unknown rule '{}' (available: {})",
                unknown,
                known.join(", ")
            );
        }
        let only: Vec<&str> = args.only.iter().map(String::as_str).collect();
        registry.enable_only(&only);
    }

    let paths: Vec<PathBuf> = args.paths.iter().map(|p| cwd.join(p)).collect();
    let report = registry.lint_paths(&paths);
    info!(strict = args.strict, "lint finished");

    Ok(Outcome {
        text: output.lint_report(&report)?,
        failed: report.fails(args.strict),
    })
}

pub fn rules(args: &RulesArgs, output: &Output, cwd: &Path) -> Result<Outcome> {
    let config = load_config(args.config.as_deref(), cwd)?;
    let registry = RuleRegistry::from_config(&config)?;
    Ok(Outcome::ok(output.rules(&registry.rule_metadata())?))
}

pub fn check(args: &CheckArgs, output: &Output) -> Result<Outcome> {
    let library = Library::from_path(&args.library)
        .with_context(|| format!("invalid component library {}", args.library.display()))?;
    Ok(Outcome::ok(output.library(&LibraryView::new(&library))?))
}

pub fn render(args: &RenderArgs) -> Result<Outcome> {
    let library = Library::from_path(&args.library)
        .with_context(|| format!("invalid component library {}", args.library.display()))?;

    let source = std::fs::read_to_string(&args.template)
        .with_context(|| format!("failed to read template {}", args.template.display()))?;
    let context: serde_json::Value = match &args.context {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read context {}", path.display()))?;
            serde_json::from_str(&text)
                .with_context(|| format!("invalid JSON in {}", path.display()))?
        }
        None => serde_json::json!({}),
    };

    // The file name picks minijinja's auto-escaping (on for .html).
    let name = args
        .template
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "template".to_string());

    let mut renderer = Renderer::with_strict(library, args.strict);
    renderer
        .add_template(&name, &source)
        .with_context(|| format!("invalid template {}", args.template.display()))?;
    let html = renderer
        .render(&name, &context)
        .with_context(|| format!("failed to render {}", args.template.display()))?;
    Ok(Outcome::ok(html))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::OutputMode;
    use pretty_assertions::assert_eq;
    use std::fs;

    const LIBRARY: &str = r#"
components:
  Button:
    element: button
    base: "btn"
    variants:
      size: { sm: "h-8", lg: "h-12" }
    defaults: { size: sm }
  Card:
    base: "card"
    parts:
      Header: { element: header, base: "card-header" }
"#;

    fn text_output() -> Output {
        Output::new(OutputMode::Text).unwrap()
    }

    #[test]
    fn test_find_config_prefers_explicit_then_yaml() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(find_config(None, dir.path()), None);

        fs::write(dir.path().join("stylekit-lint.json"), "{}").unwrap();
        fs::write(dir.path().join("stylekit-lint.yaml"), "").unwrap();
        assert_eq!(
            find_config(None, dir.path()),
            Some(dir.path().join("stylekit-lint.yaml"))
        );
        assert_eq!(
            find_config(Some(Path::new("custom.yml")), dir.path()),
            Some(PathBuf::from("custom.yml"))
        );
    }

    #[test]
    fn test_lint_uses_discovered_config() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("stylekit-lint.yaml"),
            "rules:\n  require-data-testid:\n    components: [Card]\n",
        )
        .unwrap();
        fs::create_dir(dir.path().join("src")).unwrap();
        fs::write(
            dir.path().join("src/shop.tsx"),
            "export const Shop = () => <Card><Button>Buy</Button></Card>;\n",
        )
        .unwrap();

        let args = LintArgs {
            paths: vec![PathBuf::from("src")],
            config: None,
            strict: false,
            only: Vec::new(),
        };
        let outcome = lint(&args, &text_output(), dir.path()).unwrap();
        assert!(!outcome.failed);
        assert!(outcome.text.contains("<Card> is missing `data-testid`"));
        assert!(!outcome.text.contains("<Button>"));
        assert!(outcome.text.ends_with("1 issue in 1 file"));

        let strict = LintArgs {
            strict: true,
            ..args
        };
        assert!(lint(&strict, &text_output(), dir.path()).unwrap().failed);
    }

    #[test]
    fn test_lint_rejects_unknown_rule() {
        let dir = tempfile::tempdir().unwrap();
        let args = LintArgs {
            paths: vec![PathBuf::from(".")],
            config: None,
            strict: false,
            only: vec!["no-such-rule".into()],
        };
        let err = lint(&args, &text_output(), dir.path()).unwrap_err();
        assert!(err.to_string().starts_with("unknown rule 'no-such-rule'"));
    }

    #[test]
    fn test_bad_config_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("broken.yaml");
        fs::write(&config, "rules: [").unwrap();
        let args = RulesArgs {
            config: Some(config.clone()),
        };
        let err = rules(&args, &text_output(), dir.path()).unwrap_err();
        assert!(err.to_string().contains("broken.yaml"));
    }

    #[test]
    fn test_check_lists_components() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ui.yaml");
        fs::write(&path, LIBRARY).unwrap();

        let outcome = check(&CheckArgs { library: path }, &text_output()).unwrap();
        assert_eq!(
            outcome.text,
            "Button <button>
    size: sm* lg
Card <div>
    parts: Header
2 components OK"
        );
    }

    #[test]
    fn test_check_invalid_library() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ui.yaml");
        fs::write(
            &path,
            "components:\n  Button:\n    variants:\n      size: { sm: h-8 }\n    defaults: { size: xl }\n",
        )
        .unwrap();
        let err = check(&CheckArgs { library: path }, &text_output()).unwrap_err();
        assert!(err.to_string().starts_with("invalid component library"));
    }

    #[test]
    fn test_render_template() {
        let dir = tempfile::tempdir().unwrap();
        let library = dir.path().join("ui.yaml");
        let template = dir.path().join("cart.html");
        let context = dir.path().join("cart.json");
        fs::write(&library, LIBRARY).unwrap();
        fs::write(
            &template,
            r#"{{ component("Card.Header", text=title) }}{{ component("Button", size=size, text="Pay") }}"#,
        )
        .unwrap();
        fs::write(&context, r#"{"title": "Bag & co", "size": "lg"}"#).unwrap();

        let outcome = render(&RenderArgs {
            library,
            template,
            context: Some(context),
            strict: false,
        })
        .unwrap();
        assert_eq!(
            outcome.text,
            r#"<header class="card-header">Bag &amp; co</header><button class="btn h-12">Pay</button>"#
        );
    }
}

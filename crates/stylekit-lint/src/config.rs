//! Lint configuration.
//!
//! A config file is YAML or JSON:
//!
//! ```yaml
//! extensions: [tsx, jsx]
//! ignore_paths: [node_modules, .next]
//! rules:
//!   require-data-testid:
//!     components: [Button, Input]
//!   require-aria-attributes:
//!     components:
//!       Button:
//!         attributes:
//!           - name: aria-busy
//!             when: { prop_present: isLoading }
//!             value: { from_prop: isLoading }
//!       Dialog:
//!         roles: [dialog, alertdialog]
//!   enforce-component-naming:
//!     severity: error
//!   enforce-component-factory:
//!     enabled: false
//! ```
//!
//! Every key is optional. Rule sections share `enabled` and `severity`;
//! the remaining keys are rule options.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

use crate::report::Severity;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid YAML config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid JSON config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported config format '{0}' (expected .yaml, .yml or .json)")]
    Format(String),

    #[error("invalid {option} pattern '{pattern}': {source}")]
    Pattern {
        option: &'static str,
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

/// Top-level lint configuration. Loaded once per run and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// File extensions (without the dot) that are linted.
    pub extensions: Vec<String>,
    /// Path segments that exclude a file or directory, e.g. `node_modules`.
    pub ignore_paths: Vec<String>,
    pub rules: RulesConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            extensions: strings(&["js", "jsx", "ts", "tsx"]),
            ignore_paths: strings(&["node_modules", ".next", "dist", "build", ".git"]),
            rules: RulesConfig::default(),
        }
    }
}

impl Config {
    /// Loads a config file, picking the format from its extension.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml_str(&text),
            Some("json") => Self::from_json_str(&text),
            other => Err(ConfigError::Format(other.unwrap_or_default().to_string())),
        }
    }

    pub fn from_yaml_str(text: &str) -> Result<Self, ConfigError> {
        // An empty document is an empty config.
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(text)?)
    }

    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Returns true if `path` has a linted extension.
    pub fn accepts_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|e| e == ext))
    }

    /// Returns true if any component of `path` is in `ignore_paths`.
    pub fn is_ignored(&self, path: &Path) -> bool {
        path.components().any(|c| {
            let segment = c.as_os_str().to_string_lossy();
            self.ignore_paths.iter().any(|i| *i == segment)
        })
    }
}

/// Per-rule sections, keyed by rule id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RulesConfig {
    #[serde(rename = "require-data-testid")]
    pub test_id: RuleConfig<TestIdOptions>,
    #[serde(rename = "require-aria-attributes")]
    pub aria: RuleConfig<AriaOptions>,
    #[serde(rename = "enforce-component-naming")]
    pub naming: RuleConfig<NamingOptions>,
    #[serde(rename = "enforce-component-factory")]
    pub factory: RuleConfig<FactoryOptions>,
}

/// Settings common to every rule, plus its options.
///
/// `enabled` and `severity` sit next to the rule's own options in one
/// mapping. Any other key must be an option of the rule; unknown keys are
/// rejected.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RuleConfig<T> {
    pub enabled: bool,
    pub severity: Severity,
    #[serde(flatten)]
    pub options: T,
}

impl<'de, T: DeserializeOwned> Deserialize<'de> for RuleConfig<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let mut section =
            Option::<serde_json::Map<String, serde_json::Value>>::deserialize(deserializer)?
                .unwrap_or_default();

        let enabled = match section.remove("enabled") {
            Some(value) => bool::deserialize(value).map_err(D::Error::custom)?,
            None => true,
        };
        let severity = match section.remove("severity") {
            Some(value) => Severity::deserialize(value).map_err(D::Error::custom)?,
            None => Severity::default(),
        };
        let options = T::deserialize(serde_json::Value::Object(section)).map_err(D::Error::custom)?;

        Ok(Self {
            enabled,
            severity,
            options,
        })
    }
}

impl<T: Default> Default for RuleConfig<T> {
    fn default() -> Self {
        Self {
            enabled: true,
            severity: Severity::Warning,
            options: T::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TestIdOptions {
    /// Components whose usages need a test id.
    pub components: Vec<String>,
    /// Names exempt even if listed.
    pub ignore: Vec<String>,
    pub attribute: String,
}

impl Default for TestIdOptions {
    fn default() -> Self {
        Self {
            components: strings(&["Button", "Input", "Link", "Select", "Checkbox"]),
            ignore: Vec::new(),
            attribute: "data-testid".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AriaOptions {
    pub components: IndexMap<String, AriaRequirement>,
}

/// Requirements for one component name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AriaRequirement {
    pub attributes: Vec<AttributeRequirement>,
    /// If non-empty, usages must carry `role` with one of these values.
    pub roles: Vec<String>,
}

/// One required attribute: `name` must be present when `when` holds, with
/// a value satisfying `value`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AttributeRequirement {
    pub name: String,
    #[serde(default)]
    pub when: Condition,
    #[serde(default)]
    pub value: Expected,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    #[default]
    Always,
    /// Only when the usage carries this prop.
    PropPresent(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Expected {
    #[default]
    Any,
    /// Same value as another prop on the usage.
    FromProp(String),
    Literal(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NamingOptions {
    /// Regex exported component names must match.
    pub pattern: String,
    /// Regex the file stem must match when a file exports components.
    pub filename_pattern: String,
    /// Regex of names that are never checked (hooks, by default).
    pub ignore_pattern: String,
    /// Calls whose result is a component, e.g. `forwardRef(...)`.
    pub wrappers: Vec<String>,
    /// Extensions whose files may declare components.
    pub extensions: Vec<String>,
}

impl Default for NamingOptions {
    fn default() -> Self {
        Self {
            pattern: "^[A-Z][A-Za-z0-9]*$".to_string(),
            filename_pattern: "^[a-z0-9]+(-[a-z0-9]+)*$".to_string(),
            ignore_pattern: "^use[A-Z]".to_string(),
            wrappers: strings(&[
                "forwardRef",
                "memo",
                "createComponent",
                "createCompoundComponent",
            ]),
            extensions: strings(&["jsx", "tsx"]),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FactoryOptions {
    /// Component names that must come from a factory.
    pub components: Vec<String>,
    pub ignore: Vec<String>,
    /// Accepted factory callees.
    pub factories: Vec<String>,
}

impl Default for FactoryOptions {
    fn default() -> Self {
        Self {
            components: strings(&["Button", "Card"]),
            ignore: Vec::new(),
            factories: strings(&["createComponent", "createCompoundComponent"]),
        }
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

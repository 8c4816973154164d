//! Static checks for JSX/TSX sources that use stylekit components.
//!
//! Four rules ship built in:
//!
//! | id | checks |
//! |----|--------|
//! | `require-data-testid` | listed components carry a test id |
//! | `require-aria-attributes` | per-component ARIA attributes and roles |
//! | `enforce-component-naming` | exported component and file names |
//! | `enforce-component-factory` | listed components come from a factory |
//!
//! Every issue is advisory unless its rule is configured at `error`
//! severity. Usages the scanner cannot read, and usages that spread props,
//! are skipped rather than guessed at.
//!
//! # Example
//!
//! ```
//! use stylekit_lint::{Config, RuleRegistry};
//!
//! let config = Config::from_yaml_str("rules:\n  require-data-testid:\n    components: [Button]\n").unwrap();
//! let registry = RuleRegistry::from_config(&config).unwrap();
//!
//! let report = registry.lint_source("cart.tsx", "const Cart = () => <Button>Pay</Button>;");
//! assert_eq!(report.warnings.len(), 1);
//! assert_eq!(report.warnings[0].rule_id, "require-data-testid");
//! ```

pub mod config;
pub mod registry;
pub mod report;
pub mod rules;
pub mod source;

pub use config::{Config, ConfigError};
pub use registry::{RuleMetadata, RuleRegistry};
pub use report::{FileFailure, LintIssue, LintReport, LintSummary, Severity};
pub use rules::{LintError, LintRule};
pub use source::SourceFile;

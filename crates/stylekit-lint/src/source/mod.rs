//! Parsed view of a JSX/TSX source file.
//!
//! Rules never see raw text. A [`SourceFile`] exposes what the rules need:
//!
//! - every JSX opening element with its attributes ([`JsxElement`])
//! - every top-level declaration with its export status and the call that
//!   initialises it ([`Declaration`])
//!
//! The scanner is deliberately shallow: it tracks strings, comments,
//! template literals, brace nesting and JSX children, but does not build
//! a full syntax tree. Elements it cannot read are kept with
//! [`JsxElement::malformed`] set so rules can skip them.

mod scanner;

use std::path::{Path, PathBuf};

/// A 1-based line/column location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

/// Value of a JSX attribute as written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeValue {
    /// `disabled`
    Bare,
    /// `role="dialog"`
    Literal(String),
    /// `aria-busy={isLoading}`, stored trimmed without the braces.
    Expression(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsxAttribute {
    pub name: String,
    pub value: AttributeValue,
}

/// A JSX opening (or self-closing) element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsxElement {
    /// Tag name as written, e.g. `Button`, `Card.Header`, `div`.
    pub name: String,
    pub attributes: Vec<JsxAttribute>,
    /// True if the element spreads props (`{...rest}`); its final attribute
    /// set is then unknown.
    pub has_spread: bool,
    /// True if the scanner could not read the element to its end.
    pub malformed: bool,
    pub offset: usize,
    pub position: Position,
}

impl JsxElement {
    pub fn attribute(&self, name: &str) -> Option<&AttributeValue> {
        self.attributes
            .iter()
            .find(|a| a.name == name)
            .map(|a| &a.value)
    }

    pub fn has_attribute(&self, name: &str) -> bool {
        self.attribute(name).is_some()
    }

    /// Returns true if attribute rules can judge this element without
    /// guessing.
    pub fn is_checkable(&self) -> bool {
        !self.malformed && !self.has_spread
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclarationKind {
    Function,
    Variable,
    Class,
}

/// How a variable declaration is initialised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Initializer {
    /// Arrow function or function expression.
    Function,
    /// A call such as `createComponent(...)` or `React.forwardRef(...)`;
    /// holds the callee path.
    Call(String),
    Other,
}

impl Initializer {
    /// Last segment of a call's callee, e.g. `forwardRef` for `React.forwardRef`.
    pub fn callee(&self) -> Option<&str> {
        match self {
            Initializer::Call(path) => path.rsplit('.').next(),
            _ => None,
        }
    }
}

/// A top-level declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub name: String,
    pub kind: DeclarationKind,
    pub exported: bool,
    /// Name under which the declaration is exported, when `export { A as B }`
    /// renames it.
    pub export_alias: Option<String>,
    pub initializer: Option<Initializer>,
    /// Whether any JSX element appears between this declaration and the next.
    pub contains_jsx: bool,
    pub offset: usize,
    pub position: Position,
}

impl Declaration {
    /// The identifier other modules import.
    pub fn exported_name(&self) -> &str {
        self.export_alias.as_deref().unwrap_or(&self.name)
    }
}

/// A source file reduced to what the lint rules inspect.
#[derive(Debug, Clone)]
pub struct SourceFile {
    path: PathBuf,
    elements: Vec<JsxElement>,
    declarations: Vec<Declaration>,
}

impl SourceFile {
    /// Scans `text`. JSX is recognised in every extension except `.ts`,
    /// where `<T>expr` is a type assertion.
    pub fn parse(path: impl Into<PathBuf>, text: &str) -> Self {
        let path = path.into();
        let jsx = path.extension().and_then(|e| e.to_str()) != Some("ts");
        let (elements, declarations) = scanner::Scanner::new(text, jsx).run();
        Self {
            path,
            elements,
            declarations,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn elements(&self) -> &[JsxElement] {
        &self.elements
    }

    pub fn declarations(&self) -> &[Declaration] {
        &self.declarations
    }

    pub fn extension(&self) -> Option<&str> {
        self.path.extension().and_then(|e| e.to_str())
    }

    /// File name up to its first dot: `button` for `button.test.tsx`.
    pub fn base_name(&self) -> Option<&str> {
        let name = self.path.file_name()?.to_str()?;
        name.split('.').next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_callee_last_segment() {
        assert_eq!(
            Initializer::Call("React.forwardRef".into()).callee(),
            Some("forwardRef")
        );
        assert_eq!(
            Initializer::Call("createComponent".into()).callee(),
            Some("createComponent")
        );
        assert_eq!(Initializer::Function.callee(), None);
    }

    #[test]
    fn test_base_name() {
        let file = SourceFile::parse("src/ui/product-card.test.tsx", "");
        assert_eq!(file.base_name(), Some("product-card"));
        assert_eq!(file.extension(), Some("tsx"));
    }

    #[test]
    fn test_ts_files_have_no_jsx() {
        let file = SourceFile::parse("cast.ts", "const x = <Foo>bar;");
        assert!(file.elements().is_empty());
    }
}

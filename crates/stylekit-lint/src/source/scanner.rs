//! Single-pass scanner for JSX elements and top-level declarations.

use super::{
    AttributeValue, Declaration, DeclarationKind, Initializer, JsxAttribute, JsxElement, Position,
};

/// Keywords after which `<` starts an expression rather than a comparison.
const EXPRESSION_KEYWORDS: &[&str] = &[
    "return", "yield", "await", "default", "case", "else", "in", "of", "do", "typeof", "void",
];

#[derive(Debug, Clone, Copy)]
enum Frame {
    /// Script code. `depth` counts open brackets within this frame.
    Code { depth: usize },
    /// Text between a JSX opening and closing tag.
    Children,
}

/// What the previous significant token was, for telling JSX from `<`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Last {
    Start,
    Punct(u8),
    Keyword,
    Operand,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Export {
    None,
    Named,
    Default,
}

pub(crate) struct Scanner<'a> {
    src: &'a str,
    bytes: &'a [u8],
    pos: usize,
    jsx: bool,
    stack: Vec<Frame>,
    last: Last,
    export: Export,
    export_start: usize,
    line_starts: Vec<usize>,
    elements: Vec<JsxElement>,
    declarations: Vec<Declaration>,
    /// `(local, exported)` pairs from `export { .. }` lists.
    export_specifiers: Vec<(String, String)>,
    default_export: Option<String>,
}

impl<'a> Scanner<'a> {
    pub(crate) fn new(src: &'a str, jsx: bool) -> Self {
        let line_starts = std::iter::once(0)
            .chain(src.match_indices('\n').map(|(i, _)| i + 1))
            .collect();
        Self {
            src,
            bytes: src.as_bytes(),
            pos: 0,
            jsx,
            stack: vec![Frame::Code { depth: 0 }],
            last: Last::Start,
            export: Export::None,
            export_start: 0,
            line_starts,
            elements: Vec::new(),
            declarations: Vec::new(),
            export_specifiers: Vec::new(),
            default_export: None,
        }
    }

    pub(crate) fn run(mut self) -> (Vec<JsxElement>, Vec<Declaration>) {
        while self.pos < self.bytes.len() {
            match self.stack.last() {
                Some(Frame::Children) => self.step_children(),
                _ => self.step_code(),
            }
        }
        self.finish()
    }

    fn finish(mut self) -> (Vec<JsxElement>, Vec<Declaration>) {
        let ends: Vec<usize> = self
            .declarations
            .iter()
            .skip(1)
            .map(|d| d.offset)
            .chain(std::iter::once(self.bytes.len()))
            .collect();

        for (decl, end) in self.declarations.iter_mut().zip(ends) {
            let start = decl.offset;
            decl.contains_jsx = self
                .elements
                .iter()
                .any(|e| e.offset >= start && e.offset < end);

            if let Some((_, alias)) = self
                .export_specifiers
                .iter()
                .find(|(local, _)| *local == decl.name)
            {
                decl.exported = true;
                if *alias != decl.name {
                    decl.export_alias = Some(alias.clone());
                }
            }
            if self.default_export.as_deref() == Some(decl.name.as_str()) {
                decl.exported = true;
            }
        }

        (self.elements, self.declarations)
    }

    // ------------------------------------------------------------------
    // Modes
    // ------------------------------------------------------------------

    fn step_code(&mut self) {
        let b = self.bytes[self.pos];
        match b {
            b'/' if self.peek(1) == Some(b'/') => self.skip_line_comment(),
            b'/' if self.peek(1) == Some(b'*') => self.skip_block_comment(),
            b'\'' | b'"' => {
                self.skip_string(b);
                self.last = Last::Operand;
            }
            b'`' => {
                self.skip_template();
                self.last = Last::Operand;
            }
            b'{' | b'(' | b'[' => {
                if let Some(Frame::Code { depth }) = self.stack.last_mut() {
                    *depth += 1;
                }
                self.last = Last::Punct(b);
                self.pos += 1;
            }
            b'}' | b')' | b']' => {
                let closes_frame = b == b'}'
                    && self.stack.len() > 1
                    && matches!(self.stack.last(), Some(Frame::Code { depth: 0 }));
                if closes_frame {
                    self.stack.pop();
                } else if let Some(Frame::Code { depth }) = self.stack.last_mut() {
                    *depth = depth.saturating_sub(1);
                }
                self.last = Last::Punct(b);
                self.pos += 1;
            }
            b'<' if self.jsx && self.jsx_allowed() && self.starts_tag() => self.open_tag(),
            c if is_ident_start(c) => self.word(),
            c if c.is_ascii_digit() => {
                self.read_while(is_ident_char);
                self.last = Last::Operand;
            }
            c if c.is_ascii_whitespace() => self.pos += 1,
            c => {
                self.last = Last::Punct(c);
                self.pos += 1;
            }
        }
    }

    fn step_children(&mut self) {
        match self.bytes[self.pos] {
            b'{' => {
                self.stack.push(Frame::Code { depth: 0 });
                self.last = Last::Punct(b'{');
                self.pos += 1;
            }
            b'<' => match self.peek(1) {
                Some(b'/') => {
                    self.pos = self.find_byte(b'>').map_or(self.bytes.len(), |i| i + 1);
                    self.stack.pop();
                    self.last = Last::Operand;
                }
                Some(b'>') => {
                    self.pos += 2;
                    self.stack.push(Frame::Children);
                }
                Some(c) if c.is_ascii_alphabetic() => self.open_tag(),
                _ => self.pos += 1,
            },
            _ => self.pos += 1,
        }
    }

    fn jsx_allowed(&self) -> bool {
        match self.last {
            Last::Start | Last::Keyword => true,
            Last::Operand => false,
            Last::Punct(c) => !matches!(c, b')' | b']' | b'.'),
        }
    }

    fn starts_tag(&self) -> bool {
        matches!(self.peek(1), Some(c) if c.is_ascii_alphabetic() || c == b'>')
    }

    // ------------------------------------------------------------------
    // JSX
    // ------------------------------------------------------------------

    fn open_tag(&mut self) {
        let start = self.pos;
        if self.peek(1) == Some(b'>') {
            self.pos += 2;
            self.stack.push(Frame::Children);
            return;
        }

        match self.parse_element(start) {
            Ok((element, self_closing)) => {
                self.elements.push(element);
                if !self_closing {
                    self.stack.push(Frame::Children);
                }
            }
            Err(element) => {
                tracing::debug!(
                    element = %element.name,
                    line = element.position.line,
                    "could not read JSX element; rules will skip it"
                );
                self.elements.push(element);
            }
        }
        self.last = Last::Operand;
    }

    /// Reads an opening element starting at the `<` at `start`.
    ///
    /// On failure the element is returned marked malformed and scanning
    /// resumes right after its tag name.
    fn parse_element(&mut self, start: usize) -> Result<(JsxElement, bool), JsxElement> {
        self.pos = start + 1;
        let name = self.read_while(is_tag_name_char).to_string();
        let after_name = self.pos;
        let mut element = JsxElement {
            name,
            attributes: Vec::new(),
            has_spread: false,
            malformed: false,
            offset: start,
            position: self.position(start),
        };

        loop {
            self.skip_whitespace();
            match self.peek(0) {
                None => return Err(self.malformed(element, after_name)),
                Some(b'/') if self.peek(1) == Some(b'>') => {
                    self.pos += 2;
                    return Ok((element, true));
                }
                Some(b'>') => {
                    self.pos += 1;
                    // `<T extends U>(x: T) => ..` is a generic arrow function.
                    let generic = element.attributes.iter().any(|a| {
                        a.name == "extends" && a.value == AttributeValue::Bare
                    });
                    if generic {
                        return Err(self.malformed(element, after_name));
                    }
                    return Ok((element, false));
                }
                Some(b'{') => {
                    let inner_start = self.pos + 1;
                    if !self.skip_balanced() {
                        return Err(self.malformed(element, after_name));
                    }
                    let inner = self.src[inner_start..self.pos - 1].trim();
                    if inner.starts_with("...") {
                        element.has_spread = true;
                    } else if !(inner.starts_with("/*") || inner.starts_with("//")) {
                        return Err(self.malformed(element, after_name));
                    }
                }
                Some(c) if is_attr_name_char(c) => {
                    let name = self.read_while(is_attr_name_char).to_string();
                    self.skip_whitespace();
                    let value = if self.peek(0) == Some(b'=') {
                        self.pos += 1;
                        self.skip_whitespace();
                        match self.read_attribute_value() {
                            Some(value) => value,
                            None => return Err(self.malformed(element, after_name)),
                        }
                    } else {
                        AttributeValue::Bare
                    };
                    element.attributes.push(JsxAttribute { name, value });
                }
                Some(_) => return Err(self.malformed(element, after_name)),
            }
        }
    }

    fn read_attribute_value(&mut self) -> Option<AttributeValue> {
        match self.peek(0)? {
            quote @ (b'"' | b'\'') => {
                let start = self.pos + 1;
                let end = start + self.bytes[start..].iter().position(|&b| b == quote)?;
                self.pos = end + 1;
                Some(AttributeValue::Literal(self.src[start..end].to_string()))
            }
            b'{' => {
                let start = self.pos + 1;
                if !self.skip_balanced() {
                    return None;
                }
                Some(AttributeValue::Expression(
                    self.src[start..self.pos - 1].trim().to_string(),
                ))
            }
            _ => None,
        }
    }

    fn malformed(&mut self, mut element: JsxElement, resume: usize) -> JsxElement {
        element.malformed = true;
        self.pos = resume;
        element
    }

    // ------------------------------------------------------------------
    // Declarations
    // ------------------------------------------------------------------

    fn word(&mut self) {
        let start = self.pos;
        let word = self.read_while(is_ident_char);
        let top_level = self.stack.len() == 1 && matches!(self.stack[0], Frame::Code { depth: 0 });

        self.last = if EXPRESSION_KEYWORDS.contains(&word) {
            Last::Keyword
        } else {
            Last::Operand
        };

        if top_level {
            self.top_level_word(word, start);
        }
    }

    fn top_level_word(&mut self, word: &'a str, start: usize) {
        match word {
            "export" => {
                self.export = Export::Named;
                self.export_start = start;
                self.read_export_list();
            }
            "default" if self.export == Export::Named => self.export = Export::Default,
            "async" | "declare" | "abstract" => {}
            "function" => self.declare(DeclarationKind::Function, start),
            "class" => self.declare(DeclarationKind::Class, start),
            "const" | "let" | "var" => self.declare(DeclarationKind::Variable, start),
            _ => {
                if self.export == Export::Default {
                    self.default_export = Some(word.to_string());
                }
                self.export = Export::None;
            }
        }
    }

    /// Handles `export { A, B as C }`. Re-exports (`.. from "x"`) are ignored.
    fn read_export_list(&mut self) {
        self.skip_whitespace_and_comments();
        if self.peek(0) != Some(b'{') {
            return;
        }
        let inner_start = self.pos + 1;
        let Some(close) = self.find_byte(b'}') else {
            return;
        };
        let inner = &self.src[inner_start..close];
        self.pos = close + 1;
        self.export = Export::None;
        self.last = Last::Operand;

        self.skip_whitespace_and_comments();
        if self.src[self.pos..].starts_with("from") {
            return;
        }

        for spec in inner.split(',') {
            let parts: Vec<&str> = spec.split_whitespace().filter(|p| *p != "type").collect();
            match parts.as_slice() {
                [local] => self
                    .export_specifiers
                    .push((local.to_string(), local.to_string())),
                [local, "as", alias] => self
                    .export_specifiers
                    .push((local.to_string(), alias.to_string())),
                _ => {}
            }
        }
    }

    fn declare(&mut self, kind: DeclarationKind, keyword_start: usize) {
        let exported = self.export != Export::None;
        let offset = if exported {
            self.export_start
        } else {
            keyword_start
        };
        self.export = Export::None;

        self.skip_whitespace_and_comments();
        if kind == DeclarationKind::Function && self.peek(0) == Some(b'*') {
            self.pos += 1;
            self.skip_whitespace_and_comments();
        }

        let name_start = self.pos;
        let name = self.read_while(is_ident_char).to_string();
        if name.is_empty() {
            // Anonymous default export or destructuring pattern.
            return;
        }

        let initializer = match kind {
            DeclarationKind::Variable => Some(self.read_initializer()),
            DeclarationKind::Function => Some(Initializer::Function),
            DeclarationKind::Class => None,
        };

        self.declarations.push(Declaration {
            name,
            kind,
            exported,
            export_alias: None,
            initializer,
            contains_jsx: false,
            offset,
            position: self.position(name_start),
        });
    }

    /// Reads past an optional type annotation and `=`, then classifies the
    /// start of the initializer without consuming its arguments.
    fn read_initializer(&mut self) -> Initializer {
        let mut depth = 0usize;
        loop {
            self.skip_whitespace_and_comments();
            match self.peek(0) {
                None => return Initializer::Other,
                Some(b'=') if depth == 0 => match self.peek(1) {
                    Some(b'>') => self.pos += 2,
                    Some(b'=') => return Initializer::Other,
                    _ => {
                        self.pos += 1;
                        break;
                    }
                },
                Some(b';' | b',') if depth == 0 => return Initializer::Other,
                Some(b'<' | b'(' | b'[' | b'{') => {
                    depth += 1;
                    self.pos += 1;
                }
                Some(b'>' | b')' | b']' | b'}') => {
                    if depth == 0 {
                        return Initializer::Other;
                    }
                    depth -= 1;
                    self.pos += 1;
                }
                Some(q @ (b'\'' | b'"')) => self.skip_string(q),
                Some(_) => self.pos += 1,
            }
        }

        self.skip_whitespace_and_comments();
        self.last = Last::Punct(b'=');
        match self.peek(0) {
            Some(b'(') => Initializer::Function,
            Some(c) if is_ident_start(c) => {
                let path_start = self.pos;
                while let Some(c) = self.peek(0) {
                    if is_ident_char(c) || c == b'.' {
                        self.pos += 1;
                    } else {
                        break;
                    }
                }
                let path = &self.src[path_start..self.pos];
                self.last = Last::Operand;
                if path == "function" || path == "async" {
                    return Initializer::Function;
                }
                self.skip_whitespace();
                match (self.peek(0), self.peek(1)) {
                    (Some(b'(' | b'<'), _) => Initializer::Call(path.to_string()),
                    (Some(b'='), Some(b'>')) => Initializer::Function,
                    _ => Initializer::Other,
                }
            }
            _ => Initializer::Other,
        }
    }

    // ------------------------------------------------------------------
    // Lexical helpers
    // ------------------------------------------------------------------

    fn peek(&self, ahead: usize) -> Option<u8> {
        self.bytes.get(self.pos + ahead).copied()
    }

    fn find_byte(&self, needle: u8) -> Option<usize> {
        self.bytes[self.pos..]
            .iter()
            .position(|&b| b == needle)
            .map(|i| self.pos + i)
    }

    fn read_while(&mut self, pred: fn(u8) -> bool) -> &'a str {
        let start = self.pos;
        while self.pos < self.bytes.len() && pred(self.bytes[self.pos]) {
            self.pos += 1;
        }
        &self.src[start..self.pos]
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek(0), Some(c) if c.is_ascii_whitespace()) {
            self.pos += 1;
        }
    }

    fn skip_whitespace_and_comments(&mut self) {
        loop {
            self.skip_whitespace();
            match (self.peek(0), self.peek(1)) {
                (Some(b'/'), Some(b'/')) => self.skip_line_comment(),
                (Some(b'/'), Some(b'*')) => self.skip_block_comment(),
                _ => return,
            }
        }
    }

    fn skip_line_comment(&mut self) {
        self.pos = self.find_byte(b'\n').unwrap_or(self.bytes.len());
    }

    fn skip_block_comment(&mut self) {
        self.pos = self.src[self.pos + 2..]
            .find("*/")
            .map_or(self.bytes.len(), |i| self.pos + 2 + i + 2);
    }

    /// Skips a quoted string starting at the current quote.
    fn skip_string(&mut self, quote: u8) {
        self.pos += 1;
        while let Some(b) = self.peek(0) {
            self.pos += 1;
            match b {
                b'\\' => self.pos += 1,
                b'\n' => return,
                _ if b == quote => return,
                _ => {}
            }
        }
        self.pos = self.pos.min(self.bytes.len());
    }

    /// Skips a template literal, including `${ .. }` substitutions.
    fn skip_template(&mut self) {
        self.pos += 1;
        while let Some(b) = self.peek(0) {
            match b {
                b'\\' => self.pos += 2,
                b'`' => {
                    self.pos += 1;
                    return;
                }
                b'$' if self.peek(1) == Some(b'{') => {
                    self.pos += 1;
                    if !self.skip_balanced() {
                        return;
                    }
                }
                _ => self.pos += 1,
            }
        }
        self.pos = self.pos.min(self.bytes.len());
    }

    /// Skips from a `{` to just past its matching `}`.
    ///
    /// Returns false if the input ends first.
    fn skip_balanced(&mut self) -> bool {
        let mut depth = 0usize;
        while let Some(b) = self.peek(0) {
            match b {
                b'{' => {
                    depth += 1;
                    self.pos += 1;
                }
                b'}' => {
                    self.pos += 1;
                    depth -= 1;
                    if depth == 0 {
                        return true;
                    }
                }
                b'\'' | b'"' => self.skip_string(b),
                b'`' => self.skip_template(),
                b'/' if self.peek(1) == Some(b'/') => self.skip_line_comment(),
                b'/' if self.peek(1) == Some(b'*') => self.skip_block_comment(),
                _ => self.pos += 1,
            }
        }
        false
    }

    fn position(&self, offset: usize) -> Position {
        let line = self.line_starts.partition_point(|&start| start <= offset);
        let line_start = self.line_starts[line - 1];
        Position {
            line,
            column: self.src[line_start..offset].chars().count() + 1,
        }
    }
}

fn is_ident_start(c: u8) -> bool {
    c.is_ascii_alphabetic() || c == b'_' || c == b'$'
}

fn is_ident_char(c: u8) -> bool {
    c.is_ascii_alphanumeric() || c == b'_' || c == b'$'
}

fn is_tag_name_char(c: u8) -> bool {
    is_ident_char(c) || matches!(c, b'.' | b'-' | b':')
}

fn is_attr_name_char(c: u8) -> bool {
    is_ident_char(c) || matches!(c, b'-' | b':')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(src: &str) -> (Vec<JsxElement>, Vec<Declaration>) {
        Scanner::new(src, true).run()
    }

    fn names(elements: &[JsxElement]) -> Vec<&str> {
        elements.iter().map(|e| e.name.as_str()).collect()
    }

    #[test]
    fn test_nested_elements() {
        let (elements, _) = scan(
            r#"export function Cart() {
  return (
    <Card data-testid="cart">
      <Card.Header>Your basket</Card.Header>
      {items.map((item) => <Row key={item.id} item={item} />)}
      <Button size="lg" disabled>Checkout</Button>
    </Card>
  );
}"#,
        );
        assert_eq!(names(&elements), vec!["Card", "Card.Header", "Row", "Button"]);
        assert!(elements.iter().all(|e| !e.malformed));

        let button = &elements[3];
        assert_eq!(button.attribute("size"), Some(&AttributeValue::Literal("lg".into())));
        assert_eq!(button.attribute("disabled"), Some(&AttributeValue::Bare));
        assert_eq!(button.position, Position { line: 6, column: 7 });
    }

    #[test]
    fn test_expression_attributes() {
        let (elements, _) = scan(r#"const x = <Button isLoading={saving && !error} onClick={() => { pay(); }} />;"#);
        assert_eq!(elements.len(), 1);
        assert_eq!(
            elements[0].attribute("isLoading"),
            Some(&AttributeValue::Expression("saving && !error".into()))
        );
        assert_eq!(
            elements[0].attribute("onClick"),
            Some(&AttributeValue::Expression("() => { pay(); }".into()))
        );
    }

    #[test]
    fn test_spread_attributes() {
        let (elements, _) = scan("const x = <Input {...field} placeholder='Email' />;");
        assert!(elements[0].has_spread);
        assert!(elements[0].has_attribute("placeholder"));
    }

    #[test]
    fn test_apostrophes_in_children_text() {
        let (elements, _) = scan(
            r#"const x = (
  <p>
    Don't miss today's deals
    <Button data-testid="deals">Shop</Button>
  </p>
);"#,
        );
        assert_eq!(names(&elements), vec!["p", "Button"]);
    }

    #[test]
    fn test_comparisons_and_generics_are_not_jsx() {
        let (elements, _) = scan(
            r#"
const ok = count < Limit;
const [items, setItems] = useState<Item[]>([]);
const map = new Map<string, Array<Price>>();
if (a<B) {}
"#,
        );
        assert!(elements.is_empty(), "unexpected elements: {:?}", names(&elements));
    }

    #[test]
    fn test_strings_and_comments_hide_markup() {
        let (elements, _) = scan(
            r#"
// <Button />
/* <Card> */
const s = "<Button />";
const t = `<Dialog ${x}>`;
"#,
        );
        assert!(elements.is_empty());
    }

    #[test]
    fn test_fragments() {
        let (elements, _) = scan("const x = <><Badge /><Badge tone='sale' /></>;");
        assert_eq!(names(&elements), vec!["Badge", "Badge"]);
    }

    #[test]
    fn test_unterminated_element_is_malformed() {
        let (elements, _) = scan("const x = <Button onClick={() => {");
        assert_eq!(elements.len(), 1);
        assert!(elements[0].malformed);
    }

    #[test]
    fn test_invalid_attribute_value_is_malformed() {
        let (elements, decls) = scan("const x = <Button size=lg />;\nexport const Y = 1;");
        assert!(elements[0].malformed);
        assert_eq!(decls.len(), 2);
    }

    #[test]
    fn test_generic_arrow_is_not_element() {
        let (elements, decls) =
            scan("export const first = <T extends unknown>(xs: T[]) => xs[0];\nexport function Next() {}");
        assert!(elements.iter().all(|e| e.malformed));
        assert_eq!(decls.len(), 2);
        assert_eq!(decls[1].name, "Next");
    }

    #[test]
    fn test_declarations() {
        let (_, decls) = scan(
            r#"import * as React from "react";

export const Button = createComponent({ element: "button" });
const Card = React.forwardRef<HTMLDivElement, Props>((props, ref) => <div ref={ref} {...props} />);
export default function ProductPage() { return <Card />; }
export class Legacy extends React.Component {}
let count = 0;
export const formatPrice = (cents: number) => `$${cents / 100}`;
export async function loader() {}
"#,
        );

        let summary: Vec<(&str, DeclarationKind, bool)> = decls
            .iter()
            .map(|d| (d.name.as_str(), d.kind, d.exported))
            .collect();
        assert_eq!(
            summary,
            vec![
                ("Button", DeclarationKind::Variable, true),
                ("Card", DeclarationKind::Variable, false),
                ("ProductPage", DeclarationKind::Function, true),
                ("Legacy", DeclarationKind::Class, true),
                ("count", DeclarationKind::Variable, false),
                ("formatPrice", DeclarationKind::Variable, true),
                ("loader", DeclarationKind::Function, true),
            ]
        );

        assert_eq!(decls[0].initializer, Some(Initializer::Call("createComponent".into())));
        assert_eq!(decls[1].initializer, Some(Initializer::Call("React.forwardRef".into())));
        assert!(decls[1].contains_jsx);
        assert!(decls[2].contains_jsx);
        assert_eq!(decls[4].initializer, Some(Initializer::Other));
        assert_eq!(decls[5].initializer, Some(Initializer::Function));
        assert!(!decls[5].contains_jsx);
    }

    #[test]
    fn test_typed_declarations() {
        let (_, decls) = scan(
            "export const Badge: React.FC<BadgeProps> = ({ tone }) => <span className={tone} />;",
        );
        assert_eq!(decls.len(), 1);
        assert_eq!(decls[0].initializer, Some(Initializer::Function));
        assert!(decls[0].contains_jsx);
    }

    #[test]
    fn test_nested_declarations_ignored() {
        let (_, decls) = scan(
            r#"export function Checkout() {
  const total = sum(items);
  function Inner() { return null; }
  return <Summary total={total} />;
}"#,
        );
        assert_eq!(decls.len(), 1);
        assert_eq!(decls[0].name, "Checkout");
    }

    #[test]
    fn test_export_lists() {
        let (_, decls) = scan(
            r#"const Button = createComponent({});
const Card = createCompoundComponent({});
function helper() {}
export { Button, Card as ProductCard };
export { Dialog } from "./dialog";
"#,
        );
        assert!(decls[0].exported);
        assert_eq!(decls[0].exported_name(), "Button");
        assert!(decls[1].exported);
        assert_eq!(decls[1].exported_name(), "ProductCard");
        assert!(!decls[2].exported);
    }

    #[test]
    fn test_export_default_identifier() {
        let (_, decls) = scan("function Hero() { return <section />; }\nexport default Hero;\n");
        assert!(decls[0].exported);
    }

    #[test]
    fn test_position_columns_count_chars() {
        let (elements, _) = scan("const é = 1;\nconst x = <Tag />;");
        assert_eq!(elements[0].position, Position { line: 2, column: 11 });
    }
}

// Copyright 2026 Viewbind Contributors
// SPDX-License-Identifier: Apache-2.0

//! Editable class representation.
//!
//! A [`ClassModel`] is the member-insertion surface the generator
//! mutates: fields, methods, nested types, and the conformance list.
//! In a host tool this wraps the IDE's own class handle; here it is an
//! in-memory model exposing exactly the operations generation needs —
//! enumerate fields and methods by name, append a field, append a
//! method from templated text, reach into a method body as an
//! appendable statement sequence, append a nested type, and query or
//! extend the `implements` list.
//!
//! Method bodies are mostly opaque statement text. The one construct
//! modeled structurally is `switch`, because re-running generation must
//! append `case` arms into a previously generated dispatch method.
//!
//! Method-text ingestion is a shallow brace/semicolon scanner, not a
//! language parser: it is sufficient for templated members and rejects
//! malformed text with a [`ClassModelError`], which propagates to the
//! caller untranslated.

use std::fmt;

use ecow::EcoString;
use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

use crate::codegen::document::{Document, INDENT, join, line, nest};
use crate::docvec;

/// Host-supplied classification of the target class.
///
/// Drives only which lookup-style template is used; it is a capability
/// lookup, not an inheritance relationship.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Classification {
    /// Activity-like: lookups resolve through the class itself, no
    /// view parameter is injected.
    Activity,
    /// Fragment-like: lookups resolve through an injected `View`.
    Fragment,
    /// Host could not classify the target. Treated like a fragment
    /// (the view-parameter style is the safe default).
    Unknown,
}

/// A member field declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// Declaration modifiers, e.g. `private`.
    pub modifiers: EcoString,
    /// Declared type, e.g. `TextView`.
    pub type_name: EcoString,
    /// Member name.
    pub name: EcoString,
}

/// One `case` arm of a switch statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwitchArm {
    /// The case label (or `default`).
    pub label: EcoString,
    /// Statements in the arm, including any `break;`.
    pub body: Vec<Statement>,
}

/// A statement in a method body.
///
/// Everything is opaque text except `switch`, which the dispatch merge
/// path needs to extend arm by arm.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// A `;`- or brace-terminated statement, or a line comment.
    /// May span multiple lines (anonymous listener registrations do).
    Simple(EcoString),
    /// A switch statement with structured arms.
    Switch {
        /// The switched-on expression, e.g. `v.getId()`.
        scrutinee: EcoString,
        /// The case arms in source order.
        arms: Vec<SwitchArm>,
    },
}

/// A member method: a signature line and a body statement sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Method {
    /// Full header up to the body, e.g. `private void findId(View view)`.
    pub signature: EcoString,
    /// The method name extracted from the signature.
    pub name: EcoString,
    /// Body statements, appendable by merge passes.
    pub body: Vec<Statement>,
}

impl Method {
    /// Appends a statement to the method body.
    pub fn push_statement(&mut self, statement: Statement) {
        self.body.push(statement);
    }

    /// Returns the arms of the first `switch` statement in the body,
    /// if any. The dispatch merge path appends into this.
    pub fn first_switch_mut(&mut self) -> Option<&mut Vec<SwitchArm>> {
        self.body.iter_mut().find_map(|statement| match statement {
            Statement::Switch { arms, .. } => Some(arms),
            Statement::Simple(_) => None,
        })
    }

    /// Parses templated method text into a structured method.
    ///
    /// # Errors
    ///
    /// Returns [`ClassModelError`] when the text has no recognizable
    /// signature, unbalanced braces, or a malformed `switch`.
    pub fn parse(text: &str) -> Result<Self, ClassModelError> {
        let open = text
            .find('{')
            .ok_or_else(|| ClassModelError::missing_signature(text))?;
        let sig_text = text[..open].trim();
        let paren = sig_text
            .find('(')
            .ok_or_else(|| ClassModelError::missing_signature(text))?;
        let name: EcoString = sig_text[..paren]
            .split_whitespace()
            .last()
            .ok_or_else(|| ClassModelError::missing_signature(text))?
            .into();
        let signature: EcoString = sig_text.into();

        let mut scanner = Scanner::new(text, open + 1);
        let body = scanner.statements()?;
        scanner.expect_close_brace(open)?;
        Ok(Self {
            signature,
            name,
            body,
        })
    }
}

/// The editable class representation.
///
/// The caller retains ownership; generation appends and merges members
/// and never deletes unrelated ones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassModel {
    /// Class name.
    pub name: EcoString,
    /// Declaration modifiers, e.g. `public` or `public static`.
    pub modifiers: EcoString,
    /// Host-supplied classification (lookup-style selection).
    pub classification: Classification,
    /// Declared conformances (the `implements` list).
    pub interfaces: Vec<EcoString>,
    /// Member fields in declaration order.
    pub fields: Vec<Field>,
    /// Member methods in declaration order.
    pub methods: Vec<Method>,
    /// Nested types in declaration order.
    pub nested: Vec<ClassModel>,
}

impl ClassModel {
    /// Creates an empty public class with the given classification.
    #[must_use]
    pub fn new(name: &str, classification: Classification) -> Self {
        Self {
            name: name.into(),
            modifiers: "public".into(),
            classification,
            interfaces: Vec::new(),
            fields: Vec::new(),
            methods: Vec::new(),
            nested: Vec::new(),
        }
    }

    /// Whether a field with exactly this name exists (case-sensitive).
    #[must_use]
    pub fn has_field(&self, name: &str) -> bool {
        self.fields.iter().any(|field| field.name == name)
    }

    /// Appends a field.
    pub fn add_field(&mut self, field: Field) {
        self.fields.push(field);
    }

    /// Finds the first method with this name.
    #[must_use]
    pub fn find_method(&self, name: &str) -> Option<&Method> {
        self.methods.iter().find(|method| method.name == name)
    }

    /// Finds the first method with this name, mutably.
    pub fn find_method_mut(&mut self, name: &str) -> Option<&mut Method> {
        self.methods.iter_mut().find(|method| method.name == name)
    }

    /// Appends a structured method.
    pub fn add_method(&mut self, method: Method) {
        self.methods.push(method);
    }

    /// Parses templated method text and appends the result.
    ///
    /// # Errors
    ///
    /// Returns [`ClassModelError`] when the text is malformed; the
    /// class is left unchanged in that case.
    pub fn add_method_from_text(&mut self, text: &str) -> Result<(), ClassModelError> {
        let method = Method::parse(text)?;
        self.methods.push(method);
        Ok(())
    }

    /// Appends a nested type.
    pub fn add_nested(&mut self, class: ClassModel) {
        self.nested.push(class);
    }

    /// Whether any declared conformance contains `name` as a
    /// case-sensitive substring.
    #[must_use]
    pub fn implements(&self, name: &str) -> bool {
        self.interfaces.iter().any(|i| i.contains(name))
    }

    /// Appends a conformance declaration.
    pub fn add_interface(&mut self, name: &str) {
        self.interfaces.push(name.into());
    }

    /// Renders the class to source text.
    #[must_use]
    pub fn to_source(&self) -> String {
        self.to_doc().to_pretty_string()
    }

    fn to_doc(&self) -> Document<'_> {
        let mut header = format!("{} class {}", self.modifiers, self.name);
        if !self.interfaces.is_empty() {
            header.push_str(" implements ");
            let list: Vec<&str> = self.interfaces.iter().map(EcoString::as_str).collect();
            header.push_str(&list.join(", "));
        }
        header.push_str(" {");

        let mut members: Vec<Document<'_>> = Vec::new();
        if !self.fields.is_empty() {
            let fields: Vec<Document<'_>> = self.fields.iter().map(Field::to_doc).collect();
            members.push(join(fields, &line()));
        }
        for method in &self.methods {
            members.push(method.to_doc());
        }
        for nested in &self.nested {
            members.push(nested.to_doc());
        }

        if members.is_empty() {
            return docvec![header, line(), "}"];
        }
        let blank = docvec![Document::Str("\n"), line()];
        docvec![
            header,
            nest(INDENT, docvec![line(), join(members, &blank)]),
            line(),
            "}",
        ]
    }
}

impl fmt::Display for ClassModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_source())
    }
}

impl Field {
    fn to_doc(&self) -> Document<'_> {
        Document::String(format!(
            "{} {} {};",
            self.modifiers, self.type_name, self.name
        ))
    }
}

impl Method {
    fn to_doc(&self) -> Document<'_> {
        let body: Vec<Document<'_>> = self.body.iter().map(Statement::to_doc).collect();
        if body.is_empty() {
            return docvec![self.signature.as_str(), " {", line(), "}"];
        }
        docvec![
            self.signature.as_str(),
            " {",
            nest(INDENT, docvec![line(), join(body, &line())]),
            line(),
            "}",
        ]
    }
}

impl Statement {
    fn to_doc(&self) -> Document<'_> {
        match self {
            // Multi-line statements keep their authored inner layout.
            Statement::Simple(text) => {
                let lines: Vec<Document<'_>> =
                    text.lines().map(|l| Document::String(l.into())).collect();
                join(lines, &line())
            }
            Statement::Switch { scrutinee, arms } => {
                let arms: Vec<Document<'_>> = arms.iter().map(SwitchArm::to_doc).collect();
                docvec![
                    Document::String(format!("switch ({scrutinee}) {{")),
                    nest(INDENT, docvec![line(), join(arms, &line())]),
                    line(),
                    "}",
                ]
            }
        }
    }
}

impl SwitchArm {
    fn to_doc(&self) -> Document<'_> {
        let body: Vec<Document<'_>> = self.body.iter().map(Statement::to_doc).collect();
        if body.is_empty() {
            return Document::String(format!("case {}:", self.label));
        }
        docvec![
            Document::String(format!("case {}:", self.label)),
            nest(INDENT, docvec![line(), join(body, &line())]),
        ]
    }
}

/// Errors raised by the shallow method-text scanner.
///
/// These are the "propagated fault from the host's class-mutation
/// primitives": generation does not catch or translate them.
#[derive(Debug, Clone, Error, Diagnostic)]
pub enum ClassModelError {
    /// No signature or parameter list before the method body.
    #[error("method text has no signature before the body")]
    #[diagnostic()]
    MissingSignature {
        /// The offending method text.
        #[source_code]
        text: String,
    },

    /// A brace opened in the method text never closes.
    #[error("unbalanced braces in method text")]
    #[diagnostic()]
    UnbalancedBraces {
        /// The offending method text.
        #[source_code]
        text: String,
        /// Where the unclosed brace opened.
        #[label("opened here")]
        open: SourceSpan,
    },

    /// A `switch` without a scrutinee or a braced body.
    #[error("malformed switch statement in method text")]
    #[diagnostic()]
    MalformedSwitch {
        /// The offending method text.
        #[source_code]
        text: String,
        /// Where the switch keyword starts.
        #[label("this switch")]
        at: SourceSpan,
    },
}

impl ClassModelError {
    fn missing_signature(text: &str) -> Self {
        Self::MissingSignature { text: text.into() }
    }
}

/// Cursor-based statement scanner over a method body.
///
/// Tracks combined paren/brace depth and skips string literals; a
/// statement ends when depth returns to zero on `;` or `}`. Line
/// comments are statements of their own.
struct Scanner<'a> {
    text: &'a str,
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Scanner<'a> {
    fn new(text: &'a str, pos: usize) -> Self {
        Self {
            text,
            bytes: text.as_bytes(),
            pos,
        }
    }

    fn statements(&mut self) -> Result<Vec<Statement>, ClassModelError> {
        let mut statements = Vec::new();
        loop {
            self.skip_whitespace();
            if self.at_end() || self.peek() == b'}' {
                return Ok(statements);
            }
            if self.rest().starts_with("//") {
                statements.push(Statement::Simple(self.take_line().into()));
            } else if self.at_keyword("switch") {
                statements.push(self.switch()?);
            } else {
                let text = self.simple()?;
                if !text.is_empty() {
                    statements.push(Statement::Simple(text.into()));
                }
            }
        }
    }

    /// Scans one opaque statement, ending at `;` or `}` at depth zero.
    fn simple(&mut self) -> Result<&'a str, ClassModelError> {
        let start = self.pos;
        let mut depth: usize = 0;
        while !self.at_end() {
            match self.peek() {
                b'"' => self.skip_string(),
                b'(' | b'{' => {
                    depth += 1;
                    self.pos += 1;
                }
                b'}' if depth == 0 => {
                    // The enclosing body's closing brace.
                    return Ok(self.text[start..self.pos].trim());
                }
                b')' if depth == 0 => {
                    return Err(ClassModelError::UnbalancedBraces {
                        text: self.text.into(),
                        open: (self.pos, 1).into(),
                    });
                }
                b')' | b'}' => {
                    let closed_brace = self.peek() == b'}';
                    depth -= 1;
                    self.pos += 1;
                    if depth == 0 {
                        if self.peek_is(b';') {
                            self.pos += 1;
                            return Ok(self.text[start..self.pos].trim());
                        }
                        if closed_brace {
                            // Brace-terminated block statement (if, loop).
                            return Ok(self.text[start..self.pos].trim());
                        }
                    }
                }
                b';' if depth == 0 => {
                    self.pos += 1;
                    return Ok(self.text[start..self.pos].trim());
                }
                _ => self.pos += 1,
            }
        }
        Err(ClassModelError::UnbalancedBraces {
            text: self.text.into(),
            open: (start, 1).into(),
        })
    }

    fn switch(&mut self) -> Result<Statement, ClassModelError> {
        let at = self.pos;
        self.pos += "switch".len();
        self.skip_whitespace();
        if !self.peek_is(b'(') {
            return Err(self.malformed_switch(at));
        }
        let scrutinee = self.parenthesized(at)?;
        self.skip_whitespace();
        if !self.peek_is(b'{') {
            return Err(self.malformed_switch(at));
        }
        self.pos += 1;

        let mut arms = Vec::new();
        loop {
            self.skip_whitespace();
            if self.at_end() {
                return Err(ClassModelError::UnbalancedBraces {
                    text: self.text.into(),
                    open: (at, 1).into(),
                });
            }
            if self.peek() == b'}' {
                self.pos += 1;
                return Ok(Statement::Switch { scrutinee, arms });
            }
            arms.push(self.switch_arm(at)?);
        }
    }

    fn switch_arm(&mut self, switch_at: usize) -> Result<SwitchArm, ClassModelError> {
        let label: EcoString = if self.at_keyword("case") {
            self.pos += "case".len();
            let start = self.pos;
            let colon = self.text[self.pos..]
                .find(':')
                .ok_or_else(|| self.malformed_switch(switch_at))?;
            self.pos += colon + 1;
            self.text[start..start + colon].trim().into()
        } else if self.at_keyword("default") {
            self.pos += "default".len();
            self.skip_whitespace();
            if !self.peek_is(b':') {
                return Err(self.malformed_switch(switch_at));
            }
            self.pos += 1;
            "default".into()
        } else {
            return Err(self.malformed_switch(switch_at));
        };

        let mut body = Vec::new();
        loop {
            self.skip_whitespace();
            if self.at_end() || self.peek() == b'}' || self.at_keyword("case") || self.at_keyword("default") {
                return Ok(SwitchArm { label, body });
            }
            if self.rest().starts_with("//") {
                body.push(Statement::Simple(self.take_line().into()));
            } else {
                let text = self.simple()?;
                if !text.is_empty() {
                    body.push(Statement::Simple(text.into()));
                }
            }
        }
    }

    fn parenthesized(&mut self, switch_at: usize) -> Result<EcoString, ClassModelError> {
        // self.pos is at '('
        self.pos += 1;
        let start = self.pos;
        let mut depth: usize = 0;
        while !self.at_end() {
            match self.peek() {
                b'"' => self.skip_string(),
                b'(' => {
                    depth += 1;
                    self.pos += 1;
                }
                b')' => {
                    if depth == 0 {
                        let inner = self.text[start..self.pos].trim();
                        self.pos += 1;
                        return Ok(inner.into());
                    }
                    depth -= 1;
                    self.pos += 1;
                }
                _ => self.pos += 1,
            }
        }
        Err(self.malformed_switch(switch_at))
    }

    fn expect_close_brace(&mut self, open: usize) -> Result<(), ClassModelError> {
        self.skip_whitespace();
        if self.peek_is(b'}') {
            self.pos += 1;
            self.skip_whitespace();
            if self.at_end() {
                return Ok(());
            }
        }
        Err(ClassModelError::UnbalancedBraces {
            text: self.text.into(),
            open: (open, 1).into(),
        })
    }

    fn malformed_switch(&self, at: usize) -> ClassModelError {
        ClassModelError::MalformedSwitch {
            text: self.text.into(),
            at: (at, "switch".len()).into(),
        }
    }

    fn at_keyword(&self, keyword: &str) -> bool {
        let rest = self.rest();
        rest.starts_with(keyword)
            && !rest[keyword.len()..]
                .chars()
                .next()
                .is_some_and(|c| c.is_alphanumeric() || c == '_')
    }

    fn skip_string(&mut self) {
        // self.pos is at the opening quote
        self.pos += 1;
        while !self.at_end() {
            match self.peek() {
                b'\\' => self.pos += 2,
                b'"' => {
                    self.pos += 1;
                    return;
                }
                _ => self.pos += 1,
            }
        }
    }

    fn take_line(&mut self) -> &'a str {
        let start = self.pos;
        let end = self.text[self.pos..]
            .find('\n')
            .map_or(self.text.len(), |i| self.pos + i);
        self.pos = end;
        self.text[start..end].trim()
    }

    fn skip_whitespace(&mut self) {
        while !self.at_end() && self.peek().is_ascii_whitespace() {
            self.pos += 1;
        }
    }

    fn rest(&self) -> &'a str {
        &self.text[self.pos..]
    }

    fn at_end(&self) -> bool {
        self.pos >= self.bytes.len()
    }

    fn peek(&self) -> u8 {
        self.bytes[self.pos]
    }

    fn peek_is(&self, byte: u8) -> bool {
        !self.at_end() && self.peek() == byte
    }
}

// Copyright 2026 Viewbind Contributors
// SPDX-License-Identifier: Apache-2.0

//! Document tree for source templating.
//!
//! This module provides a composable `Document` type for building
//! generated member text declaratively. Instead of writing into a
//! string buffer with manual indentation tracking, templating functions
//! return `Document` values that are rendered in a final pass.
//!
//! Generated boilerplate has fixed formatting (the host reformats the
//! file afterwards anyway), so there is no line-width fitting: a
//! [`line`] always breaks, a [`nest`] always indents by four spaces.
//!
//! # Example
//!
//! ```
//! use viewbind_core::codegen::document::{line, nest, INDENT};
//! use viewbind_core::docvec;
//!
//! let doc = docvec![
//!     "private void findId() {",
//!     nest(INDENT, docvec![line(), "tvTitle = (TextView) findViewById(R.id.tv_title);"]),
//!     line(),
//!     "}",
//! ];
//! assert_eq!(
//!     doc.to_pretty_string(),
//!     "private void findId() {\n    tvTitle = (TextView) findViewById(R.id.tv_title);\n}"
//! );
//! ```

/// Indentation width used throughout member generation.
pub const INDENT: isize = 4;

/// A pretty-printable document tree.
///
/// Documents are composable, immutable tree structures describing the
/// layout of generated source. They are rendered to strings in a final
/// pass with automatic indentation handling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Document<'a> {
    /// A borrowed string literal.
    Str(&'a str),
    /// An owned string.
    String(String),
    /// A newline followed by current indentation.
    Line,
    /// Increase indentation for nested content.
    Nest(isize, Box<Document<'a>>),
    /// A sequence of documents.
    Vec(Vec<Document<'a>>),
    /// Empty document.
    Nil,
}

/// Coerce a value into a `Document`.
pub trait Documentable<'a> {
    fn to_doc(self) -> Document<'a>;
}

impl<'a> Documentable<'a> for &'a str {
    fn to_doc(self) -> Document<'a> {
        Document::Str(self)
    }
}

impl<'a> Documentable<'a> for String {
    fn to_doc(self) -> Document<'a> {
        Document::String(self)
    }
}

impl<'a> Documentable<'a> for Document<'a> {
    fn to_doc(self) -> Document<'a> {
        self
    }
}

impl<'a> Documentable<'a> for Vec<Document<'a>> {
    fn to_doc(self) -> Document<'a> {
        Document::Vec(self)
    }
}

/// Join multiple documents together in a vector.
///
/// Each element is converted to a `Document` via the `Documentable`
/// trait. Documents are concatenated directly — no separator.
///
/// ```
/// use viewbind_core::docvec;
///
/// let doc = docvec!["tvTitle", " = ", "(TextView) findViewById(R.id.tv_title);"];
/// assert_eq!(doc.to_pretty_string(), "tvTitle = (TextView) findViewById(R.id.tv_title);");
/// ```
#[macro_export]
macro_rules! docvec {
    () => {
        $crate::codegen::document::Document::Vec(Vec::new())
    };

    ($first:expr $(,)?) => {
        $crate::codegen::document::Document::Vec(
            vec![$crate::codegen::document::Documentable::to_doc($first)]
        )
    };

    ($first:expr, $($rest:expr),+ $(,)?) => {
        match $crate::codegen::document::Documentable::to_doc($first) {
            $crate::codegen::document::Document::Vec(mut vec) => {
                $(
                    vec.push($crate::codegen::document::Documentable::to_doc($rest));
                )*
                $crate::codegen::document::Document::Vec(vec)
            },
            first => {
                $crate::codegen::document::Document::Vec(
                    vec![first, $($crate::codegen::document::Documentable::to_doc($rest)),+]
                )
            }
        }
    };
}

/// Creates a `Line` document — a newline followed by indentation.
#[must_use]
pub fn line() -> Document<'static> {
    Document::Line
}

/// Creates a `Nil` document — an empty document.
#[must_use]
pub fn nil() -> Document<'static> {
    Document::Nil
}

/// Creates a `Nest` document — increases indentation for the inner
/// document.
#[must_use]
pub fn nest(indent: isize, doc: Document<'_>) -> Document<'_> {
    Document::Nest(indent, Box::new(doc))
}

/// Joins documents with a separator between each pair.
#[must_use]
pub fn join<'a>(
    docs: impl IntoIterator<Item = Document<'a>>,
    separator: &Document<'a>,
) -> Document<'a> {
    let docs: Vec<_> = docs.into_iter().collect();
    if docs.is_empty() {
        return Document::Nil;
    }
    let mut result = Vec::with_capacity(docs.len() * 2 - 1);
    let mut first = true;
    for doc in docs {
        if !first {
            result.push(separator.clone());
        }
        result.push(doc);
        first = false;
    }
    Document::Vec(result)
}

/// Concatenates documents without any separator.
#[must_use]
pub fn concat<'a>(docs: impl IntoIterator<Item = Document<'a>>) -> Document<'a> {
    Document::Vec(docs.into_iter().collect())
}

impl Document<'_> {
    /// Renders the document to a string.
    #[must_use]
    pub fn to_pretty_string(&self) -> String {
        let mut output = String::new();
        self.render_to(&mut output, 0);
        output
    }

    fn render_to(&self, output: &mut String, indent: isize) {
        match self {
            Document::Str(s) => output.push_str(s),
            Document::String(s) => output.push_str(s),
            Document::Nil => {}
            Document::Line => {
                output.push('\n');
                write_indent(output, indent);
            }
            Document::Nest(extra, doc) => {
                doc.render_to(output, indent + extra);
            }
            Document::Vec(docs) => {
                for doc in docs {
                    doc.render_to(output, indent);
                }
            }
        }
    }
}

fn write_indent(output: &mut String, indent: isize) {
    for _ in 0..indent {
        output.push(' ');
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn str_document() {
        let doc = Document::Str("tvTitle");
        assert_eq!(doc.to_pretty_string(), "tvTitle");
    }

    #[test]
    fn string_document() {
        let doc = Document::String("mBtnLogin".to_string());
        assert_eq!(doc.to_pretty_string(), "mBtnLogin");
    }

    #[test]
    fn nil_document() {
        assert_eq!(nil().to_pretty_string(), "");
    }

    #[test]
    fn line_document() {
        let doc = docvec!["a", line(), "b"];
        assert_eq!(doc.to_pretty_string(), "a\nb");
    }

    #[test]
    fn nest_document() {
        let doc = docvec![
            "private void findId() {",
            nest(INDENT, docvec![line(), "body"]),
            line(),
            "}",
        ];
        assert_eq!(doc.to_pretty_string(), "private void findId() {\n    body\n}");
    }

    #[test]
    fn nested_nest() {
        let doc = nest(
            2,
            docvec![line(), "outer", nest(2, docvec![line(), "inner"])],
        );
        assert_eq!(doc.to_pretty_string(), "\n  outer\n    inner");
    }

    #[test]
    fn docvec_macro_empty() {
        let doc = docvec![];
        assert_eq!(doc.to_pretty_string(), "");
    }

    #[test]
    fn docvec_flattens_leading_vec() {
        let inner = docvec!["a", "b"];
        let doc = docvec![inner, "c"];
        assert_eq!(doc.to_pretty_string(), "abc");
        if let Document::Vec(v) = doc {
            assert_eq!(v.len(), 3);
        } else {
            panic!("Expected Vec");
        }
    }

    #[test]
    fn join_documents() {
        let docs = vec![Document::Str("a"), Document::Str("b"), Document::Str("c")];
        assert_eq!(join(docs, &Document::Str(", ")).to_pretty_string(), "a, b, c");
    }

    #[test]
    fn join_empty() {
        let docs: Vec<Document> = vec![];
        assert_eq!(join(docs, &Document::Str(", ")).to_pretty_string(), "");
    }

    #[test]
    fn concat_documents() {
        let docs = vec![Document::Str("a"), Document::Str("b")];
        assert_eq!(concat(docs).to_pretty_string(), "ab");
    }

    #[test]
    fn realistic_lookup_method() {
        let doc = docvec![
            "private void findId(View view) {",
            nest(
                INDENT,
                docvec![
                    line(),
                    "mTvTitle = (TextView) view.findViewById(R.id.tv_title);",
                    line(),
                    "mBtnLogin = (Button) view.findViewById(R.id.btn_login);",
                ]
            ),
            line(),
            "}",
        ];
        assert_eq!(
            doc.to_pretty_string(),
            "private void findId(View view) {\n\
             \x20   mTvTitle = (TextView) view.findViewById(R.id.tv_title);\n\
             \x20   mBtnLogin = (Button) view.findViewById(R.id.btn_login);\n\
             }"
        );
    }
}

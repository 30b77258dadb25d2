// Copyright 2026 Viewbind Contributors
// SPDX-License-Identifier: Apache-2.0

//! `submit` input-validation generation.
//!
//! For every input-capable descriptor the generated method reads the
//! trimmed text of the bound field into a local, checks it for
//! emptiness, and on empty input shows a short-duration toast and
//! returns early. The toast message is the descriptor's hint text when
//! one is present and is not a resource indirection (`@string/...`);
//! otherwise a `<name> must not be empty` message is generated.
//!
//! Unlike `findId` and `onClick`, `submit` has no merge path: it is
//! inserted fresh on every run that sees input descriptors. Repeated
//! runs over overlapping inputs therefore duplicate the method — a
//! known asymmetry, kept deliberately.

use tracing::debug;

use super::{Generator, Result};
use crate::class_model::ClassModel;
use crate::codegen::document::{Document, INDENT, join, line, nest};
use crate::docvec;
use crate::element::Element;

impl Generator<'_> {
    pub(super) fn generate_validation(
        &self,
        class: &mut ClassModel,
        inputs: &[&Element],
    ) -> Result<()> {
        if inputs.is_empty() {
            return Ok(());
        }
        debug!(inputs = inputs.len(), "inserting fresh submit");

        let context = self.options.context_name.as_str();
        let mut body: Vec<Document<'_>> = vec![Document::Str("// validate")];
        for element in inputs {
            let name = display_name(&element.identifier);
            let message = match &element.hint_text {
                Some(hint) if !hint.is_empty() && !hint.starts_with("@string") => hint.to_string(),
                _ => format!("{name} must not be empty"),
            };
            body.push(Document::String(format!(
                "String {name} = {}.getText().toString().trim();",
                element.field_name
            )));
            body.push(Document::String(format!(
                "if (TextUtils.isEmpty({name})) {{\n\
                 \x20   Toast.makeText({context}, \"{message}\", Toast.LENGTH_SHORT).show();\n\
                 \x20   return;\n\
                 }}"
            )));
        }
        body.push(Document::Str(""));
        body.push(Document::Str("// TODO validate success, do something"));

        let text = docvec![
            "private void submit() {",
            nest(INDENT, docvec![line(), join(body, &line())]),
            line(),
            "}",
        ]
        .to_pretty_string();

        // Always a fresh insert; no merge path for submit.
        class.add_method_from_text(&text)?;
        Ok(())
    }
}

/// Derives the display name used for the validation local and the
/// fallback message: the substring after the last `_` in the raw
/// identifier. When that substring equals the whole identifier (no
/// underscore), `String` is appended so the local cannot collide with
/// the identifier itself.
fn display_name(identifier: &str) -> String {
    let name = match identifier.rfind('_') {
        Some(index) => &identifier[index + 1..],
        None => identifier,
    };
    if name == identifier {
        format!("{identifier}String")
    } else {
        name.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_takes_last_segment() {
        assert_eq!(display_name("et_user_name"), "name");
        assert_eq!(display_name("et_password"), "password");
    }

    #[test]
    fn display_name_without_underscore_gets_suffix() {
        assert_eq!(display_name("username"), "usernameString");
    }

    #[test]
    fn display_name_trailing_underscore() {
        assert_eq!(display_name("name_"), "");
    }
}

// Copyright 2026 Viewbind Contributors
// SPDX-License-Identifier: Apache-2.0

//! `findId` binding construction and merge.
//!
//! Builds the view-binding method: one lookup-and-cast statement per
//! selected descriptor, click-listener registrations for clickable
//! descriptors, and anonymous item-click listener registrations for
//! list-like descriptors. The lookup style follows the host's
//! classification of the target class:
//!
//! - `Activity` — `findId()`, lookups through the class itself;
//! - `Fragment` and `Unknown` — `findId(View view)`, lookups through
//!   the injected view.
//!
//! When a `findId` method already exists it is treated as a
//! prior-generation artifact: the new lookup and registration
//! statements are appended into its body instead of creating a second
//! method. The merge path registers a click listener for every
//! appended descriptor, not only clickable ones. Item-click
//! registrations are only emitted on the create path and carry no
//! dedup guard.

use tracing::{debug, trace};

use super::{Generator, Result};
use crate::class_model::{ClassModel, Classification, Statement};
use crate::codegen::document::{Document, INDENT, join, line, nest};
use crate::docvec;
use crate::element::Element;

/// Which lookup-style template to use, per host classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LookupStyle {
    /// No view parameter; bare `findViewById(...)`.
    Implicit,
    /// Injected `View view` parameter; `view.findViewById(...)`.
    ViewParameter,
}

impl LookupStyle {
    fn from_classification(classification: Classification) -> Self {
        match classification {
            Classification::Activity => Self::Implicit,
            Classification::Fragment | Classification::Unknown => Self::ViewParameter,
        }
    }

    fn receiver(self) -> &'static str {
        match self {
            Self::Implicit => "",
            Self::ViewParameter => "view.",
        }
    }

    fn signature(self) -> &'static str {
        match self {
            Self::Implicit => "private void findId()",
            Self::ViewParameter => "private void findId(View view)",
        }
    }
}

impl Generator<'_> {
    /// Runs the binding pass and the dependent validation and dispatch
    /// passes (the capability subsets are collected while walking the
    /// descriptor list, as the lookup statements are built).
    pub(super) fn generate_binding(
        &self,
        class: &mut ClassModel,
        selected: &[&Element],
    ) -> Result<()> {
        let style = LookupStyle::from_classification(class.classification);
        let receiver = style.receiver();

        let inputs: Vec<&Element> = selected.iter().copied().filter(|e| e.is_input).collect();
        let clickables: Vec<&Element> =
            selected.iter().copied().filter(|e| e.is_clickable).collect();
        let item_clickables: Vec<&Element> = selected
            .iter()
            .copied()
            .filter(|e| e.is_item_clickable)
            .collect();

        if class.find_method("findId").is_none() {
            debug!(style = ?style, "inserting fresh findId");
            let text = binding_method_text(style, selected, &clickables, &item_clickables);
            class.add_method_from_text(&text)?;
        } else if let Some(method) = class.find_method_mut("findId") {
            debug!("appending to existing findId body");
            for element in selected {
                trace!(field = %element.field_name, "appending lookup");
                method.push_statement(Statement::Simple(
                    lookup_statement(element, receiver).into(),
                ));
                method.push_statement(Statement::Simple(
                    format!("{}.setOnClickListener(this);", element.field_name).into(),
                ));
            }
        }

        self.generate_dispatch(class, &clickables)?;
        self.generate_validation(class, &inputs)
    }
}

fn lookup_statement(element: &Element, receiver: &str) -> String {
    format!(
        "{} = ({}) {}findViewById({});",
        element.field_name, element.type_name, receiver, element.full_reference
    )
}

fn item_click_registration(element: &Element) -> String {
    format!(
        "{}.setOnItemClickListener(new AdapterView.OnItemClickListener() {{\n\
         \x20   @Override\n\
         \x20   public void onItemClick(AdapterView<?> parent, View view, int position, long id) {{\n\
         \x20   }}\n\
         }});",
        element.field_name
    )
}

fn binding_method_text(
    style: LookupStyle,
    selected: &[&Element],
    clickables: &[&Element],
    item_clickables: &[&Element],
) -> String {
    let receiver = style.receiver();
    let mut body: Vec<Document<'_>> = selected
        .iter()
        .map(|e| Document::String(lookup_statement(e, receiver)))
        .collect();

    if !clickables.is_empty() {
        body.push(Document::Str(""));
        for element in clickables {
            body.push(Document::String(format!(
                "{}.setOnClickListener(this);",
                element.field_name
            )));
        }
    }
    for element in item_clickables {
        body.push(Document::String(item_click_registration(element)));
    }

    if body.is_empty() {
        return format!("{} {{\n}}", style.signature());
    }
    docvec![
        style.signature(),
        " {",
        nest(INDENT, docvec![line(), join(body, &line())]),
        line(),
        "}",
    ]
    .to_pretty_string()
}

// Copyright 2026 Viewbind Contributors
// SPDX-License-Identifier: Apache-2.0

//! `onClick` dispatch construction and merge.
//!
//! When any clickable descriptor is present, the target class must
//! conform to `View.OnClickListener`; the conformance is added once,
//! detected by a case-sensitive substring match over the declared
//! interfaces. The dispatch method is a single `switch` over the event
//! source identity with one empty `case` + `break` arm per clickable
//! descriptor.
//!
//! When an `onClick` method already exists, the first `switch` inside
//! its body gains one arm per new clickable descriptor instead of a
//! second method being created. An existing `onClick` without a
//! `switch` is left untouched.

use tracing::{debug, trace};

use super::{Generator, Result};
use crate::class_model::{ClassModel, Method, Statement, SwitchArm};
use crate::codegen::document::{Document, INDENT, concat, line, nest};
use crate::docvec;
use crate::element::Element;

impl Generator<'_> {
    pub(super) fn generate_dispatch(
        &self,
        class: &mut ClassModel,
        clickables: &[&Element],
    ) -> Result<()> {
        if clickables.is_empty() {
            return Ok(());
        }

        if !class.implements("OnClickListener") {
            debug!("adding View.OnClickListener conformance");
            class.add_interface("View.OnClickListener");
        }

        if class.find_method("onClick").is_none() {
            debug!(cases = clickables.len(), "inserting fresh onClick");
            class.add_method_from_text(&dispatch_method_text(clickables))?;
        } else if let Some(arms) = class
            .find_method_mut("onClick")
            .and_then(Method::first_switch_mut)
        {
            debug!(cases = clickables.len(), "appending cases to existing onClick switch");
            for element in clickables {
                trace!(case = %element.full_reference, "appending case");
                arms.push(SwitchArm {
                    label: element.full_reference.clone(),
                    body: vec![Statement::Simple("break;".into())],
                });
            }
        }
        Ok(())
    }
}

fn dispatch_method_text(clickables: &[&Element]) -> String {
    let arms: Vec<Document<'_>> = clickables
        .iter()
        .map(|element| {
            docvec![
                line(),
                Document::String(format!("case {}:", element.full_reference)),
                nest(INDENT, docvec![line(), "break;"]),
            ]
        })
        .collect();

    docvec![
        "@Override public void onClick(View v) {",
        nest(
            INDENT,
            docvec![
                line(),
                "switch (v.getId()) {",
                nest(INDENT, concat(arms)),
                line(),
                "}",
            ]
        ),
        line(),
        "}",
    ]
    .to_pretty_string()
}

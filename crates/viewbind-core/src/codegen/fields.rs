// Copyright 2026 Viewbind Contributors
// SPDX-License-Identifier: Apache-2.0

//! Field declaration pass.
//!
//! Adds one `private <type> <field>;` declaration per selected
//! descriptor. A field whose exact name already exists (case-sensitive)
//! is skipped, which keeps repeated runs from duplicating declarations.

use tracing::trace;

use super::Generator;
use crate::class_model::{ClassModel, Field};
use crate::element::Element;

impl Generator<'_> {
    pub(super) fn generate_fields(&self, class: &mut ClassModel, selected: &[&Element]) {
        for element in selected {
            if class.has_field(&element.field_name) {
                trace!(field = %element.field_name, "field exists, skipping");
                continue;
            }
            trace!(field = %element.field_name, ty = %element.type_name, "adding field");
            class.add_field(Field {
                modifiers: "private".into(),
                type_name: element.type_name.clone(),
                name: element.field_name.clone(),
            });
        }
    }
}

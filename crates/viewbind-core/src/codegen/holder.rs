// Copyright 2026 Viewbind Contributors
// SPDX-License-Identifier: Apache-2.0

//! Nested view-holder synthesis (holder mode).
//!
//! Adapter-style generation: instead of mutating the outer class's
//! members, a `public static` nested class is synthesized containing a
//! `rootView` member, one public member per selected descriptor, and a
//! constructor that takes the root view and performs a
//! lookup-and-cast for every member.
//!
//! There is no merge logic in this mode: every run appends a brand-new
//! nested type, even when one with the same name already exists. That
//! is a known limitation, kept deliberately.

use tracing::debug;

use super::{Generator, Result};
use crate::class_model::{ClassModel, Classification, Field, Method, Statement};
use crate::element::Element;

impl Generator<'_> {
    pub(super) fn generate_holder(
        &self,
        class: &mut ClassModel,
        selected: &[&Element],
    ) -> Result<()> {
        let holder_name = self.options.holder_name.as_str();
        debug!(holder = holder_name, members = selected.len(), "synthesizing view holder");

        let mut holder = ClassModel::new(holder_name, Classification::Unknown);
        holder.modifiers = "public static".into();
        holder.add_field(Field {
            modifiers: "public".into(),
            type_name: "View".into(),
            name: "rootView".into(),
        });

        let mut body = vec![Statement::Simple("this.rootView = rootView;".into())];
        for element in selected {
            holder.add_field(Field {
                modifiers: "public".into(),
                type_name: element.type_name.clone(),
                name: element.field_name.clone(),
            });
            body.push(Statement::Simple(
                format!(
                    "this.{} = ({}) rootView.findViewById({});",
                    element.field_name, element.type_name, element.full_reference
                )
                .into(),
            ));
        }

        holder.add_method(Method {
            signature: format!("public {holder_name}(View rootView)").into(),
            name: holder_name.into(),
            body,
        });
        class.add_nested(holder);
        Ok(())
    }
}

// Copyright 2026 Viewbind Contributors
// SPDX-License-Identifier: Apache-2.0

//! Member generation for layout-driven classes.
//!
//! This module turns an ordered list of [`Element`] descriptors into
//! generated members of a [`ClassModel`]. Two top-level modes:
//!
//! - **Holder mode** synthesizes a nested `public static` view-holder
//!   class with a lookup-and-cast constructor ([`holder`]).
//! - **In-place mode** runs three passes over the selected descriptors:
//!   field declarations ([`fields`]), the `findId` binding method plus
//!   listener registrations ([`binding`]), the `submit` validation
//!   method ([`validation`]), and the `onClick` dispatch method
//!   ([`dispatch`]).
//!
//! # Example
//!
//! Descriptors for a login layout produce:
//!
//! ```java
//! private EditText mEtPassword;
//! private Button mBtnLogin;
//!
//! private void findId() {
//!     mEtPassword = (EditText) findViewById(R.id.et_password);
//!     mBtnLogin = (Button) findViewById(R.id.btn_login);
//!     mBtnLogin.setOnClickListener(this);
//! }
//!
//! @Override public void onClick(View v) {
//!     switch (v.getId()) {
//!         case R.id.btn_login:
//!             break;
//!     }
//! }
//! ```
//!
//! # Re-running generation
//!
//! Generation against a class that already carries generated members
//! merges instead of duplicating where a merge path exists: new lookup
//! statements are appended into an existing `findId` body and new
//! `case` arms into the first `switch` of an existing `onClick`. The
//! `submit` method, holder classes, and item-click registrations have
//! no merge path and are regenerated as-is, a known limitation kept
//! deliberately.
//!
//! # Failure contract
//!
//! Missing data fails open: an empty descriptor list adds no fields and
//! no methods. Malformed templated member text fails closed: the class
//! model's text scanner rejects it and the error propagates untranslated
//! as [`CodeGenError::Model`].

mod binding;
mod dispatch;
pub mod document;
mod fields;
mod holder;
#[cfg(test)]
mod tests;
mod validation;

use ecow::EcoString;
use thiserror::Error;
use tracing::debug;

use crate::class_model::{ClassModel, ClassModelError};
use crate::element::Element;

/// Errors that can occur during member generation.
#[derive(Debug, Error)]
pub enum CodeGenError {
    /// A class-mutation primitive rejected templated member text.
    #[error("class mutation failed: {0}")]
    Model(#[from] ClassModelError),
}

/// Result type for generation operations.
pub type Result<T> = std::result::Result<T, CodeGenError>;

/// Options for member generation.
///
/// Use [`GeneratorOptions::new`] for defaults, then chain builder
/// methods to customize.
///
/// # Example
///
/// ```
/// use viewbind_core::codegen::GeneratorOptions;
///
/// let options = GeneratorOptions::new()
///     .with_holder_name("ItemHolder")
///     .with_create_holder(true);
/// ```
#[derive(Debug, Clone)]
pub struct GeneratorOptions {
    /// Name for the nested holder class (holder mode).
    holder_name: EcoString,
    /// Whether to generate a nested holder instead of in-place members.
    create_holder: bool,
    /// Host-resolved context expression used in generated toast calls.
    /// Classification changes only the lookup argument shape, not this.
    context_name: EcoString,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl GeneratorOptions {
    /// Creates default options: in-place mode, holder name `ViewHolder`,
    /// context expression `this`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            holder_name: "ViewHolder".into(),
            create_holder: false,
            context_name: "this".into(),
        }
    }

    /// Sets the nested holder class name.
    #[must_use]
    pub fn with_holder_name(mut self, name: &str) -> Self {
        self.holder_name = name.into();
        self
    }

    /// Selects holder mode.
    #[must_use]
    pub fn with_create_holder(mut self, create_holder: bool) -> Self {
        self.create_holder = create_holder;
        self
    }

    /// Sets the context expression used in generated toast calls.
    #[must_use]
    pub fn with_context_name(mut self, context: &str) -> Self {
        self.context_name = context.into();
        self
    }
}

/// Generates members into `class` from the descriptor list.
///
/// This is the sole entry point. Mutations are applied synchronously to
/// the live model; there is no rollback path here — the host's
/// command/undo wrapper owns atomicity. Descriptors with
/// `selected == false` never reach any pass.
///
/// # Errors
///
/// Returns [`CodeGenError`] when a templated member fails ingestion
/// into the class model. The model may have been partially mutated at
/// that point.
pub fn generate(
    class: &mut ClassModel,
    elements: &[Element],
    options: &GeneratorOptions,
) -> Result<()> {
    let selected: Vec<&Element> = elements.iter().filter(|e| e.selected).collect();
    debug!(
        class = %class.name,
        total = elements.len(),
        selected = selected.len(),
        create_holder = options.create_holder,
        "generating members"
    );

    let generator = Generator { options };
    if options.create_holder {
        generator.generate_holder(class, &selected)
    } else {
        generator.generate_fields(class, &selected);
        generator.generate_binding(class, &selected)
    }
}

/// Member generator.
///
/// Stateless beyond the options; each pass lives in its own submodule
/// as an `impl Generator` block:
///
/// - [`fields`] - field declarations
/// - [`binding`] - `findId` construction and merge
/// - [`validation`] - `submit` generation
/// - [`dispatch`] - `onClick` construction and merge
/// - [`holder`] - nested view-holder synthesis
struct Generator<'a> {
    options: &'a GeneratorOptions,
}

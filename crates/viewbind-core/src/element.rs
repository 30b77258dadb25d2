// Copyright 2026 Viewbind Contributors
// SPDX-License-Identifier: Apache-2.0

//! Element descriptors.
//!
//! An [`Element`] describes one UI element discovered in a layout
//! definition, carrying everything the generator needs to emit members
//! for it: the declared type, the raw identifier, the derived field
//! name, the fully-qualified lookup reference, and capability flags.
//!
//! Descriptor lists arrive from the host already ordered; list order is
//! emission order. Elements with `selected == false` are dropped before
//! any generation pass runs.
//!
//! Descriptors derive `Serialize`/`Deserialize` so hosts can hand them
//! across a process boundary.

use ecow::EcoString;
use serde::{Deserialize, Serialize};

/// One detected UI element and its generation-relevant metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    /// Declared element type, e.g. `TextView`.
    pub type_name: EcoString,
    /// Raw source identifier, e.g. `tv_title`.
    pub identifier: EcoString,
    /// Derived member name: prefix + camel-cased identifier.
    pub field_name: EcoString,
    /// Fully-qualified reference usable in generated lookup code,
    /// e.g. `R.id.tv_title`.
    pub full_reference: EcoString,
    /// Whether the element accepts text input (validation candidate).
    pub is_input: bool,
    /// Whether the element receives click events.
    pub is_clickable: bool,
    /// Whether the element receives item-click events (list-like).
    pub is_item_clickable: bool,
    /// Whether the user kept this element selected for generation.
    pub selected: bool,
    /// Placeholder text associated with the element, used for
    /// validation messages. A value beginning with `@string` is a
    /// resource indirection, not a usable literal.
    pub hint_text: Option<EcoString>,
}

impl Element {
    /// Creates a descriptor with the given type, identifier, and field
    /// name prefix. Capability flags default to off and the element
    /// starts selected.
    #[must_use]
    pub fn new(type_name: &str, identifier: &str, field_prefix: &str) -> Self {
        Self {
            type_name: type_name.into(),
            identifier: identifier.into(),
            field_name: derive_field_name(identifier, field_prefix),
            full_reference: EcoString::from(format!("R.id.{identifier}")),
            is_input: false,
            is_clickable: false,
            is_item_clickable: false,
            selected: true,
            hint_text: None,
        }
    }

    /// Overrides the lookup reference (hosts that resolve references
    /// themselves, e.g. library namespaces, set this).
    #[must_use]
    pub fn with_full_reference(mut self, reference: &str) -> Self {
        self.full_reference = reference.into();
        self
    }

    /// Marks the element as a text-input candidate.
    #[must_use]
    pub fn with_input(mut self, input: bool) -> Self {
        self.is_input = input;
        self
    }

    /// Marks the element as clickable.
    #[must_use]
    pub fn with_clickable(mut self, clickable: bool) -> Self {
        self.is_clickable = clickable;
        self
    }

    /// Marks the element as item-clickable.
    #[must_use]
    pub fn with_item_clickable(mut self, item_clickable: bool) -> Self {
        self.is_item_clickable = item_clickable;
        self
    }

    /// Sets the selection state.
    #[must_use]
    pub fn with_selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    /// Sets the placeholder text used for validation messages.
    #[must_use]
    pub fn with_hint(mut self, hint: &str) -> Self {
        self.hint_text = Some(hint.into());
        self
    }
}

/// Derives a member name from a raw identifier and a field prefix.
///
/// Underscore-separated segments are camel-cased. With a non-empty
/// prefix the first segment is capitalized too, so the prefix reads as
/// the leading word:
///
/// - `tv_title` + `m` → `mTvTitle`
/// - `tv_title` + empty prefix → `tvTitle`
/// - `username` + `m` → `mUsername`
#[must_use]
pub fn derive_field_name(identifier: &str, prefix: &str) -> EcoString {
    let mut name = String::from(prefix);
    for (i, segment) in identifier.split('_').filter(|s| !s.is_empty()).enumerate() {
        if i == 0 && prefix.is_empty() {
            name.push_str(segment);
        } else {
            let mut chars = segment.chars();
            if let Some(first) = chars.next() {
                name.extend(first.to_uppercase());
                name.push_str(chars.as_str());
            }
        }
    }
    name.into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_name_with_prefix() {
        assert_eq!(derive_field_name("tv_title", "m"), "mTvTitle");
    }

    #[test]
    fn field_name_without_prefix() {
        assert_eq!(derive_field_name("tv_title", ""), "tvTitle");
    }

    #[test]
    fn field_name_no_underscores() {
        assert_eq!(derive_field_name("username", "m"), "mUsername");
        assert_eq!(derive_field_name("username", ""), "username");
    }

    #[test]
    fn field_name_collapses_empty_segments() {
        assert_eq!(derive_field_name("et__user_name", ""), "etUserName");
    }

    #[test]
    fn new_element_defaults() {
        let element = Element::new("TextView", "tv_title", "m");
        assert_eq!(element.field_name, "mTvTitle");
        assert_eq!(element.full_reference, "R.id.tv_title");
        assert!(element.selected);
        assert!(!element.is_input);
        assert!(!element.is_clickable);
    }

    #[test]
    fn builder_flags() {
        let element = Element::new("EditText", "et_password", "")
            .with_input(true)
            .with_hint("Enter password");
        assert!(element.is_input);
        assert_eq!(element.hint_text.as_deref(), Some("Enter password"));
    }
}

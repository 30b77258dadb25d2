// Copyright 2026 Viewbind Contributors
// SPDX-License-Identifier: Apache-2.0

//! Viewbind core.
//!
//! This crate contains the boilerplate generation core:
//! - Element descriptors (what was discovered in a layout)
//! - An editable class model (the member-insertion surface a host supplies)
//! - Code generation (field, binding, validation, dispatch, and holder passes)
//!
//! The generator is a library embedded in a host tool. The host owns
//! layout parsing, class resolution, undo wrapping, and reformatting;
//! this core consumes a descriptor list and mutates a class model.
//!
//! # Invocation model
//!
//! One call to [`codegen::generate`] performs one synchronous pass of
//! mutations against a single [`class_model::ClassModel`]. There is no
//! rollback path here; the host's command/transaction wrapper provides
//! atomicity. Re-running against the same model merges into previously
//! generated members where a merge path exists (`findId`, `onClick`)
//! and duplicates where it does not (`submit`, holder classes,
//! item-click registrations).

#![doc = include_str!("../../../README.md")]

pub mod class_model;
pub mod codegen;
pub mod element;

/// Re-export commonly used types.
pub mod prelude {
    pub use crate::class_model::{ClassModel, Classification, Field, Method, Statement};
    pub use crate::codegen::{CodeGenError, GeneratorOptions, generate};
    pub use crate::element::Element;
}

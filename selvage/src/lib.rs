// Copyright 2026 the Selvage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Control-core logic for an embedded UI toolkit.
//!
//! Selvage computes the pieces of a text control (and of item views) that
//! are pure geometry and state over tables produced elsewhere:
//!
//! - selection-highlight quads, with ligature-aware splitting and
//!   multi-line "boxify" padding ([`highlight`]);
//! - input font-style runs over a text buffer ([`style`]);
//! - the selection state machine driven by hit testing ([`editing`]);
//! - the accessibility focus order and its flow relations ([`focus`]);
//! - item-view layout positioning ([`itemview`]).
//!
//! Shaping, rendering, animation and the accessibility wire protocol are
//! external collaborators: the glyph/line tables in [`model`] arrive from
//! the shaping pass, and geometry leaves through a
//! [`Decorator`](editing::Decorator) or an AccessKit `TreeUpdate`.

// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET
#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("selvage requires either the `std` or `libm` feature to be enabled");

extern crate alloc;

pub use fontique;
pub use swash;

#[cfg(feature = "accesskit")]
pub mod accessibility;
pub mod cursor;
pub mod editing;
#[cfg(feature = "accesskit")]
pub mod focus;
pub mod highlight;
pub mod itemview;
pub mod model;
pub mod scripts;
pub mod style;

#[cfg(test)]
mod tests;

pub use cursor::{CursorPlacement, Hit};
pub use editing::{Decorator, EditState, PopupPolicy, SelectionController, SelectionHandle};
#[cfg(feature = "accesskit")]
pub use focus::{FlowRelations, FocusOrder};
pub use highlight::{Highlight, HighlightBuilder};
pub use itemview::{DefaultItemLayout, FocusDirection, ItemLayout, ItemRange};
pub use model::{TextModel, VisualModel};
pub use style::{FontDescriptionRun, InputStyle, TextUpdate};

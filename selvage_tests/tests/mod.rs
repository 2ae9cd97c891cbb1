// Copyright 2026 the Selvage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! This crate contains the integration test suite for `selvage`.
//!
//! - The `util` helpers live in `selvage_dev`; tests here exercise the
//!   public API only.
//! - We do not use the default Rust test harness, but instead use this
//!   `mod.rs` file as the entry point to run all other tests, which makes
//!   it easier to share helpers between tests.
//! - For test naming, try to put the "topic" of the test at the start of
//!   the name instead of the end, e.g. `selection_scrolls_with_content`
//!   rather than `content_scroll_selection`.

#![allow(missing_docs, reason = "we don't need docs for testing")]
#![allow(clippy::cast_possible_truncation, reason = "not critical for testing")]

mod accessibility;
mod controller;
mod focus;
mod itemview;

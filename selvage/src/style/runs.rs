// Copyright 2026 the Selvage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;

use fontique::{FontStyle, FontWeight, FontWidth};

use crate::model::CharacterRun;

/// Character-range-scoped override of one or more font attributes.
///
/// Each attribute is individually optional, so a run can override a single
/// axis and leave the rest to the surrounding style. Runs are appended in
/// application order and never deduplicated; overlapping runs are resolved
/// by the consuming layout pass with last-applicable-wins semantics.
///
/// A run is tied to the text it was created against and is invalidated
/// wholesale when the text is replaced.
#[derive(Clone, Default, Debug, PartialEq)]
pub struct FontDescriptionRun {
    /// Characters the overrides apply to.
    pub run: CharacterRun,
    /// Font family name.
    pub family: Option<String>,
    /// Font weight.
    pub weight: Option<FontWeight>,
    /// Font width.
    pub width: Option<FontWidth>,
    /// Font slant.
    pub slant: Option<FontStyle>,
    /// Point size.
    pub size: Option<f32>,
}

impl FontDescriptionRun {
    /// Creates a run over the given characters with no attribute defined.
    pub fn new(run: CharacterRun) -> Self {
        Self {
            run,
            ..Self::default()
        }
    }

    /// Returns `true` if at least one attribute is defined.
    pub fn has_overrides(&self) -> bool {
        self.family.is_some()
            || self.weight.is_some()
            || self.width.is_some()
            || self.slant.is_some()
            || self.size.is_some()
    }
}

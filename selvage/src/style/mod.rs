// Copyright 2026 the Selvage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Font attribute vocabulary, input style and relayout invalidation.

mod input;
mod runs;

pub use fontique::{FontStyle, FontWeight, FontWidth, GenericFamily};

pub use input::{InputStyle, DEFAULT_FONT_FAMILY, DEFAULT_FONT_SIZE};
pub use runs::FontDescriptionRun;

/// Invalidation of a span of characters for the downstream layout pass.
///
/// `character_index` is the first affected character; `chars_removed` and
/// `chars_added` describe how the span changed. A pure restyle reports the
/// same count for both.
#[derive(Copy, Clone, Default, Debug, PartialEq, Eq)]
pub struct TextUpdate {
    /// First character affected.
    pub character_index: usize,
    /// Characters removed from the span.
    pub chars_removed: usize,
    /// Characters added to the span.
    pub chars_added: usize,
}

impl TextUpdate {
    /// Invalidation of `length` characters starting at `character_index`,
    /// with no length change.
    pub fn span(character_index: usize, length: usize) -> Self {
        Self {
            character_index,
            chars_removed: length,
            chars_added: length,
        }
    }

    /// Whole-text invalidation.
    pub fn full(previous_count: usize, current_count: usize) -> Self {
        Self {
            character_index: 0,
            chars_removed: previous_count,
            chars_added: current_count,
        }
    }
}

// Copyright 2026 the Selvage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Glyph, line and cluster tables.
//!
//! These are the read-only inputs produced by the (external) shaping and
//! layout passes. Selvage never mutates glyph geometry; it only derives
//! selection quads, cursor placements and accessibility data from it.

use alloc::string::String;
use alloc::vec::Vec;
use core::ops::Range;

use smallvec::SmallVec;
use swash::text::Script;

use crate::style::FontDescriptionRun;

/// Shaped, positioned rendering unit.
///
/// A glyph may represent several source characters (a ligature), and a
/// character may expand to several glyphs; [`ClusterMap`] records both
/// directions of that mapping.
#[derive(Copy, Clone, Default, Debug, PartialEq)]
pub struct Glyph {
    /// Visual position along the line, relative to the line origin.
    pub x: f32,
    /// Visual position orthogonal to the line (baseline relative).
    pub y: f32,
    /// Advance width.
    pub advance: f32,
    /// Horizontal bearing.
    pub x_bearing: f32,
}

/// Contiguous run of characters.
#[derive(Copy, Clone, Default, Debug, PartialEq, Eq)]
pub struct CharacterRun {
    /// Index of the first character in the run.
    pub index: usize,
    /// Number of characters in the run.
    pub length: usize,
}

impl CharacterRun {
    /// Creates a run covering `length` characters starting at `index`.
    pub fn new(index: usize, length: usize) -> Self {
        Self { index, length }
    }

    /// One past the last character of the run.
    pub fn end(&self) -> usize {
        self.index + self.length
    }

    /// Returns `true` if the run contains the given character index.
    pub fn contains(&self, character: usize) -> bool {
        character >= self.index && character < self.end()
    }
}

/// Run of characters sharing a script.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ScriptRun {
    /// Characters covered by the run.
    pub run: CharacterRun,
    /// Script of those characters.
    pub script: Script,
}

/// Bidirectional maps between characters and glyphs.
///
/// All four tables are produced together by the shaping pass and must be
/// mutually consistent: `characters_to_glyph` and `glyphs_per_character` are
/// indexed by character, `characters_per_glyph` and `glyphs_to_characters`
/// by glyph.
#[derive(Clone, Default, Debug)]
pub struct ClusterMap {
    /// Per character: index of the first glyph of its cluster.
    pub characters_to_glyph: Vec<u32>,
    /// Per character: number of glyphs shaped from it.
    pub glyphs_per_character: Vec<u32>,
    /// Per glyph: number of characters it represents.
    pub characters_per_glyph: Vec<u32>,
    /// Per glyph: index of the first character it represents.
    pub glyphs_to_characters: Vec<u32>,
}

impl ClusterMap {
    /// Number of characters covered by the map.
    pub fn character_count(&self) -> usize {
        self.characters_to_glyph.len()
    }

    /// Number of glyphs covered by the map.
    pub fn glyph_count(&self) -> usize {
        self.characters_per_glyph.len()
    }

    /// Maps a character range to the inclusive glyph range `(first, last)`
    /// that renders it.
    ///
    /// The last character's cluster may span several glyphs, so the final
    /// glyph is `characters_to_glyph[last] + glyphs_per_character[last] - 1`.
    pub fn glyph_range(&self, characters: Range<usize>) -> (usize, usize) {
        debug_assert!(
            characters.start < characters.end,
            "glyph_range requires a non-empty character range"
        );
        let first = self.characters_to_glyph[characters.start] as usize;
        let last_character = characters.end - 1;
        let glyphs_of_last = self.glyphs_per_character[last_character] as usize;
        let last = self.characters_to_glyph[last_character] as usize + glyphs_of_last.saturating_sub(1);
        (first, last)
    }
}

/// One laid-out line.
#[derive(Copy, Clone, Default, Debug, PartialEq)]
pub struct Line {
    /// Index of the first glyph of the line.
    pub glyph_index: u32,
    /// Number of glyphs in the line.
    pub glyph_count: u32,
    /// Distance from the baseline to the top of the line.
    pub ascender: f32,
    /// Distance from the baseline to the bottom of the line. Not positive.
    pub descender: f32,
    /// Horizontal offset applied by line alignment.
    pub alignment_offset: f32,
    /// Dominant direction of the line.
    pub is_rtl: bool,
}

impl Line {
    /// Height of the line.
    pub fn height(&self) -> f32 {
        self.ascender - self.descender
    }

    /// Glyph indices covered by the line.
    pub fn glyph_range(&self) -> Range<usize> {
        let start = self.glyph_index as usize;
        start..start + self.glyph_count as usize
    }
}

/// Visual side of a text control: glyph geometry, line metrics and the
/// cluster map, together with the view state needed to place quads in
/// control-local coordinates.
#[derive(Clone, Default, Debug)]
pub struct VisualModel {
    /// Shaped glyphs in logical order.
    pub glyphs: Vec<Glyph>,
    /// Character/glyph cluster maps.
    pub map: ClusterMap,
    /// Laid-out lines, top to bottom.
    pub lines: Vec<Line>,
    /// Horizontal scroll offset of the content.
    pub scroll_x: f32,
    /// Vertical scroll offset of the content.
    pub scroll_y: f32,
    /// Width of the control the text is laid out in.
    pub control_width: f32,
}

impl VisualModel {
    /// Returns `true` if the model holds no glyphs.
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Vertical position of the top of the given line.
    pub fn line_top(&self, line_index: usize) -> f32 {
        self.lines[..line_index]
            .iter()
            .fold(self.scroll_y, |top, line| top + line.height())
    }

    /// Total height of all lines.
    pub fn total_height(&self) -> f32 {
        self.lines.iter().map(Line::height).sum()
    }

    /// Index of the line containing the given glyph.
    pub fn line_containing_glyph(&self, glyph_index: usize) -> Option<usize> {
        self.lines
            .iter()
            .position(|line| line.glyph_range().contains(&glyph_index))
    }
}

/// Logical side of a text control: the source text and its per-character
/// attribute tables.
#[derive(Clone, Default, Debug)]
pub struct TextModel {
    /// Source text.
    pub text: String,
    /// Per-character direction. `true` is right-to-left. An empty table
    /// means the whole text is left-to-right.
    pub character_directions: Vec<bool>,
    /// Script runs over the text.
    pub scripts: SmallVec<[ScriptRun; 2]>,
    /// Font attribute overrides, in application order. Overlaps are allowed;
    /// the consuming layout pass resolves them with last-applicable-wins.
    pub font_description_runs: Vec<FontDescriptionRun>,
}

impl TextModel {
    /// Creates a model over the given text with no attribute tables.
    pub fn new(text: String) -> Self {
        Self {
            text,
            ..Self::default()
        }
    }

    /// Number of characters in the text.
    pub fn character_count(&self) -> usize {
        self.text.chars().count()
    }

    /// Direction of the given character. Absent table entries are
    /// left-to-right.
    pub fn is_rtl(&self, character: usize) -> bool {
        self.character_directions.get(character).copied().unwrap_or(false)
    }

    /// Script of the given character, defaulting to Latin when no run
    /// covers it.
    pub fn script_at(&self, character: usize) -> Script {
        self.scripts
            .iter()
            .find(|run| run.run.contains(character))
            .map(|run| run.script)
            .unwrap_or(Script::Latin)
    }

    /// Replaces the whole text.
    ///
    /// Every character-indexed table is invalidated wholesale: font
    /// description runs, directions and scripts all belong to the old text.
    pub fn set_text(&mut self, text: String) {
        self.text = text;
        self.character_directions.clear();
        self.scripts.clear();
        self.font_description_runs.clear();
    }
}

// Copyright 2026 the Selvage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Test fixtures.
//!
//! Geometry tests want closed-form expectations, so the fixture shapes
//! text with a synthetic monospace font: every character is `ADVANCE`
//! wide, lines are `LINE_HEIGHT` tall, and the caller decides where lines
//! break, which characters are right-to-left and which spans collapse
//! into ligature glyphs.

use std::ops::Range;

use smallvec::smallvec;
use swash::text::Script;

use crate::cursor::CursorPlacement;
use crate::editing::{Decorator, SelectionHandle};
use crate::highlight::Highlight;
use crate::model::{CharacterRun, ClusterMap, Glyph, Line, ScriptRun, TextModel, VisualModel};

/// Advance of every fixture character.
pub(crate) const ADVANCE: f32 = 10.0;

/// Ascender of every fixture line.
pub(crate) const ASCENDER: f32 = 12.0;

/// Descender of every fixture line.
pub(crate) const DESCENDER: f32 = -4.0;

/// Height of every fixture line.
pub(crate) const LINE_HEIGHT: f32 = ASCENDER - DESCENDER;

/// Builds a monospace text/visual model pair.
pub(crate) struct TestModelBuilder {
    lines: Vec<String>,
    rtl_characters: Vec<Range<usize>>,
    rtl_lines: Vec<usize>,
    ligatures: Vec<(usize, usize)>,
    alignment_offsets: Vec<(usize, f32)>,
    control_width: f32,
    script: Script,
}

impl TestModelBuilder {
    /// One entry per laid-out line; the logical text is their
    /// concatenation.
    pub(crate) fn new(lines: &[&str]) -> Self {
        Self {
            lines: lines.iter().map(|line| (*line).to_string()).collect(),
            rtl_characters: Vec::new(),
            rtl_lines: Vec::new(),
            ligatures: Vec::new(),
            alignment_offsets: Vec::new(),
            control_width: 200.0,
            script: Script::Latin,
        }
    }

    /// Marks a character range as right-to-left.
    pub(crate) fn rtl(mut self, characters: Range<usize>) -> Self {
        self.rtl_characters.push(characters);
        self
    }

    /// Marks a line's dominant direction as right-to-left.
    pub(crate) fn rtl_line(mut self, line: usize) -> Self {
        self.rtl_lines.push(line);
        self
    }

    /// Collapses `count` characters starting at `start` into one glyph.
    /// Must not straddle a line break.
    pub(crate) fn ligature(mut self, start: usize, count: usize) -> Self {
        self.ligatures.push((start, count));
        self
    }

    /// Sets a line's alignment offset.
    pub(crate) fn alignment_offset(mut self, line: usize, offset: f32) -> Self {
        self.alignment_offsets.push((line, offset));
        self
    }

    /// Sets the control width used for boxify padding.
    pub(crate) fn control_width(mut self, width: f32) -> Self {
        self.control_width = width;
        self
    }

    /// Sets the script covering the whole text.
    pub(crate) fn script(mut self, script: Script) -> Self {
        self.script = script;
        self
    }

    pub(crate) fn build(self) -> (TextModel, VisualModel) {
        let text: String = self.lines.concat();
        let character_count = text.chars().count();

        let mut directions = Vec::new();
        if !self.rtl_characters.is_empty() {
            directions = vec![false; character_count];
            for range in &self.rtl_characters {
                for index in range.clone() {
                    directions[index] = true;
                }
            }
        }

        let mut glyphs = Vec::new();
        let mut map = ClusterMap::default();
        let mut lines = Vec::new();

        let mut character = 0;
        for (line_index, line_text) in self.lines.iter().enumerate() {
            let line_characters = line_text.chars().count();
            let line_end = character + line_characters;
            let first_glyph = glyphs.len();
            let mut x = 0.0_f32;
            while character < line_end {
                let cluster = self
                    .ligatures
                    .iter()
                    .find(|(start, _)| *start == character)
                    .map(|(_, count)| *count)
                    .unwrap_or(1);
                let glyph_index = glyphs.len() as u32;
                glyphs.push(Glyph {
                    x,
                    y: 0.0,
                    advance: ADVANCE * cluster as f32,
                    x_bearing: 0.0,
                });
                map.characters_per_glyph.push(cluster as u32);
                map.glyphs_to_characters.push(character as u32);
                for _ in 0..cluster {
                    map.characters_to_glyph.push(glyph_index);
                    map.glyphs_per_character.push(1);
                }
                x += ADVANCE * cluster as f32;
                character += cluster;
            }
            lines.push(Line {
                glyph_index: first_glyph as u32,
                glyph_count: (glyphs.len() - first_glyph) as u32,
                ascender: ASCENDER,
                descender: DESCENDER,
                alignment_offset: self
                    .alignment_offsets
                    .iter()
                    .find(|(index, _)| *index == line_index)
                    .map(|(_, offset)| *offset)
                    .unwrap_or(0.0),
                is_rtl: self.rtl_lines.contains(&line_index),
            });
        }

        let text_model = TextModel {
            text,
            character_directions: directions,
            scripts: smallvec![ScriptRun {
                run: CharacterRun::new(0, character_count),
                script: self.script,
            }],
            font_description_runs: Vec::new(),
        };
        let visual_model = VisualModel {
            glyphs,
            map,
            lines,
            scroll_x: 0.0,
            scroll_y: 0.0,
            control_width: self.control_width,
        };
        (text_model, visual_model)
    }
}

/// Builds a single-line monospace model.
pub(crate) fn single_line(text: &str) -> (TextModel, VisualModel) {
    TestModelBuilder::new(&[text]).build()
}

/// Decorator that records every callback for assertions.
#[derive(Default)]
pub(crate) struct RecordingDecorator {
    pub(crate) highlight: Option<Highlight>,
    pub(crate) highlight_deactivated: bool,
    pub(crate) handles: Vec<(SelectionHandle, CursorPlacement)>,
    pub(crate) cursor: Option<CursorPlacement>,
    pub(crate) popup_visible: Option<bool>,
}

impl Decorator for RecordingDecorator {
    fn set_highlight(&mut self, highlight: Option<&Highlight>) {
        match highlight {
            Some(highlight) => self.highlight = Some(highlight.clone()),
            None => {
                self.highlight = None;
                self.highlight_deactivated = true;
            }
        }
    }

    fn set_handle(&mut self, handle: SelectionHandle, placement: CursorPlacement) {
        self.handles.push((handle, placement));
    }

    fn set_cursor(&mut self, placement: CursorPlacement) {
        self.cursor = Some(placement);
    }

    fn set_popup_visible(&mut self, visible: bool) {
        self.popup_visible = Some(visible);
    }
}

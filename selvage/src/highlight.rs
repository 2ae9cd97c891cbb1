// Copyright 2026 the Selvage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Selection highlight geometry.
//!
//! Turns a character selection plus the glyph/line tables into a minimal
//! list of axis-aligned quads, one per selected glyph, with multi-line
//! selections "boxified" out to the control edges so they render as a
//! rectangular block rather than following the bidi text shape.

use alloc::vec::Vec;

use peniko::kurbo::Rect;
use smallvec::SmallVec;

use crate::cursor::{cursor_placement, CursorPlacement};
use crate::model::{TextModel, VisualModel};
use crate::scripts::must_break_ligature;

/// Highlight geometry for one selection.
#[derive(Clone, Default, Debug)]
pub struct Highlight {
    /// Quads to draw, in control-local coordinates.
    pub quads: Vec<Rect>,
    /// Union of all quads; anchors the highlight decoration.
    pub bounds: Rect,
    /// Placement for the handle at the caller's first selection index.
    pub start_handle: CursorPlacement,
    /// Placement for the handle at the caller's second selection index.
    pub end_handle: CursorPlacement,
    /// `true` when the caller-supplied indices were swapped during
    /// normalization. Drives which handle decoration is flipped.
    pub handles_crossed: bool,
    /// `true` when the selection covers the whole text.
    pub all_selected: bool,
}

/// Per-line bookkeeping while quads are accumulated.
#[derive(Copy, Clone, Debug)]
struct SelectionBox {
    line_offset: f32,
    line_height: f32,
    origin: f32,
    min_x: f32,
    max_x: f32,
    is_rtl: bool,
}

impl SelectionBox {
    fn begin(line_offset: f32, line: &crate::model::Line, scroll_x: f32) -> Self {
        Self {
            line_offset,
            line_height: line.height(),
            origin: line.alignment_offset + scroll_x,
            min_x: f32::MAX,
            max_x: f32::MIN,
            is_rtl: line.is_rtl,
        }
    }

    fn push_quad(&mut self, quads: &mut Vec<Rect>, x0: f32, x1: f32) {
        self.min_x = self.min_x.min(x0);
        self.max_x = self.max_x.max(x1);
        quads.push(Rect::new(
            x0 as f64,
            self.line_offset as f64,
            x1 as f64,
            (self.line_offset + self.line_height) as f64,
        ));
    }

    /// A line that contributed no quads (an empty line inside the
    /// selection) is treated as zero-width content at the line origin so
    /// that boxify padding still covers it.
    fn normalize(&mut self) {
        if self.min_x > self.max_x {
            self.min_x = self.origin;
            self.max_x = self.origin;
        }
    }
}

/// Builds highlight quads for a character selection.
///
/// The builder is reusable; per-line scratch storage is retained across
/// calls.
#[derive(Clone, Default, Debug)]
pub struct HighlightBuilder {
    boxes: SmallVec<[SelectionBox; 4]>,
}

impl HighlightBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the highlight for the selection `[selection_start,
    /// selection_end)`.
    ///
    /// The indices are character indices and need not be ordered; crossed
    /// handles are normalized and reported through
    /// [`Highlight::handles_crossed`]. Returns `None` for a collapsed
    /// selection or an empty model; the caller deactivates the highlight
    /// decoration instead of drawing an empty one.
    pub fn build(
        &mut self,
        selection_start: usize,
        selection_end: usize,
        text: &TextModel,
        visual: &VisualModel,
    ) -> Option<Highlight> {
        let character_count = visual.map.character_count();
        if character_count == 0 || visual.is_empty() {
            return None;
        }
        let handles_crossed = selection_start > selection_end;
        let (mut start, mut end) = if handles_crossed {
            (selection_end, selection_start)
        } else {
            (selection_start, selection_end)
        };
        start = start.min(character_count);
        end = end.min(character_count);
        if start == end {
            return None;
        }

        // Direction of the characters under the two handles; an absent
        // direction table means the whole text is left-to-right.
        let start_rtl = text.is_rtl(start);
        let end_rtl = text.is_rtl(end - 1);

        let (glyph_start, glyph_end) = visual.map.glyph_range(start..end);
        let mut line_index = visual.line_containing_glyph(glyph_start)?;
        let mut line = visual.lines[line_index];

        self.boxes.clear();
        let mut current = SelectionBox::begin(visual.line_top(line_index), &line, visual.scroll_x);
        let mut quads =
            Vec::with_capacity(1 + (glyph_end - glyph_start) + 2 * visual.lines.len());

        let split_first = visual.map.characters_per_glyph[glyph_start] > 1
            && must_break_ligature(text.script_at(start));
        let split_last = glyph_end != glyph_start
            && visual.map.characters_per_glyph[glyph_end] > 1
            && must_break_ligature(text.script_at(end - 1));

        for glyph_index in glyph_start..=glyph_end {
            while glyph_index >= line.glyph_range().end && line_index + 1 < visual.lines.len() {
                self.boxes.push(current);
                line_index += 1;
                line = visual.lines[line_index];
                current = SelectionBox::begin(
                    current.line_offset + current.line_height,
                    &line,
                    visual.scroll_x,
                );
            }
            let glyph = visual.glyphs[glyph_index];
            let base_x = line.alignment_offset + glyph.x - glyph.x_bearing + visual.scroll_x;
            if glyph_index == glyph_start && split_first {
                // The selection begins inside a ligature: cover only the
                // selected sub-span, at per-character granularity.
                let characters = visual.map.characters_per_glyph[glyph_start] as usize;
                let per_character = glyph.advance / characters as f32;
                let first_character = visual.map.glyphs_to_characters[glyph_start] as usize;
                let inter = start - first_character;
                let selected = end.min(first_character + characters) - start;
                let skipped = if start_rtl {
                    characters - inter - selected
                } else {
                    inter
                };
                let x0 = base_x + per_character * skipped as f32;
                current.push_quad(&mut quads, x0, x0 + per_character * selected as f32);
            } else if glyph_index == glyph_end && split_last {
                let characters = visual.map.characters_per_glyph[glyph_end] as usize;
                let per_character = glyph.advance / characters as f32;
                let first_character = visual.map.glyphs_to_characters[glyph_end] as usize;
                let selected = end - first_character;
                let skipped = if end_rtl { characters - selected } else { 0 };
                let x0 = base_x + per_character * skipped as f32;
                current.push_quad(&mut quads, x0, x0 + per_character * selected as f32);
            } else {
                current.push_quad(&mut quads, base_x, base_x + glyph.advance);
            }
        }
        self.boxes.push(current);

        if self.boxes.len() > 1 {
            self.boxify(&mut quads, visual.control_width, start_rtl, end_rtl);
        }

        let bounds = quads[1..]
            .iter()
            .fold(quads[0], |bounds, &quad| bounds.union(quad));

        Some(Highlight {
            quads,
            bounds,
            start_handle: cursor_placement(text, visual, selection_start),
            end_handle: cursor_placement(text, visual, selection_end),
            handles_crossed,
            all_selected: start == 0 && end == character_count,
        })
    }

    /// Pads partial lines out to the control edges so a multi-line
    /// selection renders as a rectangular block.
    ///
    /// A line edge is padded only when the writing direction says the text
    /// continues past it: the first line keys off the start handle's
    /// character direction, the last line off the end handle's, and every
    /// strictly interior line is padded on both edges. Degenerate pads are
    /// suppressed.
    fn boxify(&mut self, quads: &mut Vec<Rect>, control_width: f32, start_rtl: bool, end_rtl: bool) {
        let last = self.boxes.len() - 1;
        for (index, sel_box) in self.boxes.iter_mut().enumerate() {
            sel_box.normalize();
            let (pad_leading, pad_trailing) = if index == 0 {
                (sel_box.is_rtl && start_rtl, !sel_box.is_rtl && !start_rtl)
            } else if index == last {
                (!sel_box.is_rtl && !end_rtl, sel_box.is_rtl && end_rtl)
            } else {
                (true, true)
            };
            let top = sel_box.line_offset as f64;
            let bottom = (sel_box.line_offset + sel_box.line_height) as f64;
            if pad_leading && sel_box.min_x > 0.0 {
                quads.push(Rect::new(0.0, top, sel_box.min_x as f64, bottom));
            }
            if pad_trailing && sel_box.max_x < control_width {
                quads.push(Rect::new(
                    sel_box.max_x as f64,
                    top,
                    control_width as f64,
                    bottom,
                ));
            }
        }
    }
}

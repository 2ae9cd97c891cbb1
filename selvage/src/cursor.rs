// Copyright 2026 the Selvage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cursor placement and hit testing over the visual model.

use alloc::vec::Vec;

use crate::model::{CharacterRun, TextModel, VisualModel};

/// Placement of a cursor or selection handle in control-local coordinates.
///
/// `x` and `y` locate the top of the caret line; `height` is the height of
/// the line the caret sits on.
#[derive(Copy, Clone, Default, Debug, PartialEq)]
pub struct CursorPlacement {
    /// Horizontal position.
    pub x: f32,
    /// Vertical position of the line top.
    pub y: f32,
    /// Height of the caret line.
    pub height: f32,
}

/// Result of hit testing a point against the glyph geometry.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Hit {
    /// The character the point resolves to. For points outside any glyph
    /// this is the nearest valid character.
    pub character: usize,
    /// `true` when the point landed on a glyph.
    pub on_text: bool,
}

/// Returns the primary-cursor placement for the given character index.
///
/// `character` may equal the character count, meaning "after the last
/// character". For right-to-left characters the leading edge is the right
/// side of the glyph.
pub fn cursor_placement(text: &TextModel, visual: &VisualModel, character: usize) -> CursorPlacement {
    if visual.is_empty() {
        let height = visual.lines.first().map(|line| line.height()).unwrap_or(0.0);
        return CursorPlacement {
            x: visual.scroll_x,
            y: visual.scroll_y,
            height,
        };
    }
    let character_count = visual.map.character_count();
    let (index, trailing) = if character >= character_count {
        (character_count - 1, true)
    } else {
        (character, false)
    };
    let glyph_index = visual.map.characters_to_glyph[index] as usize;
    let line_index = visual
        .line_containing_glyph(glyph_index)
        .unwrap_or(visual.lines.len() - 1);
    let line = &visual.lines[line_index];
    let glyph = &visual.glyphs[glyph_index];
    let base_x = line.alignment_offset + glyph.x - glyph.x_bearing + visual.scroll_x;
    let characters_in_glyph = visual.map.characters_per_glyph[glyph_index].max(1);
    let per_character = glyph.advance / characters_in_glyph as f32;
    let inter = (index - visual.map.glyphs_to_characters[glyph_index] as usize) as f32;
    let rtl = text.is_rtl(index);
    let x = match (rtl, trailing) {
        // Leading edge, offset into the cluster when mid-ligature.
        (false, false) => base_x + per_character * inter,
        (true, false) => base_x + glyph.advance - per_character * inter,
        // Trailing edge of the last character.
        (false, true) => base_x + glyph.advance,
        (true, true) => base_x,
    };
    CursorPlacement {
        x,
        y: visual.line_top(line_index),
        height: line.height(),
    }
}

/// Hit tests a control-local point against the glyph geometry.
///
/// The line is chosen by vertical interval, clamped to the first/last line,
/// so a point above or below the text still resolves. Returns `None` only
/// when the model holds no glyphs.
pub fn hit_test(text: &TextModel, visual: &VisualModel, x: f32, y: f32) -> Option<Hit> {
    if visual.is_empty() {
        return None;
    }
    let line_index = line_for_offset(visual, y);
    let line = &visual.lines[line_index];

    let mut line_min = f32::MAX;
    let mut line_max = f32::MIN;
    let mut first_visual = 0_usize;
    let mut last_visual = 0_usize;
    for glyph_index in line.glyph_range() {
        let glyph = &visual.glyphs[glyph_index];
        let left = line.alignment_offset + glyph.x - glyph.x_bearing + visual.scroll_x;
        let right = left + glyph.advance;
        if left < line_min {
            line_min = left;
            first_visual = glyph_index;
        }
        if right > line_max {
            line_max = right;
            last_visual = glyph_index;
        }
        if x >= left && x < right {
            return Some(Hit {
                character: character_within_glyph(text, visual, glyph_index, x - left),
                on_text: true,
            });
        }
    }

    // Empty space on the line: resolve to the nearest valid character.
    let character = if line.glyph_count == 0 {
        // An empty line sits between clusters; resolve to the first
        // character following the preceding content.
        visual.lines[..line_index]
            .iter()
            .rev()
            .find(|line| line.glyph_count > 0)
            .map(|line| {
                let last = (line.glyph_index + line.glyph_count - 1) as usize;
                visual.map.glyphs_to_characters[last] as usize
                    + visual.map.characters_per_glyph[last] as usize
            })
            .unwrap_or(0)
            .min(visual.map.character_count())
    } else if x < line_min {
        visual
            .map
            .glyphs_to_characters
            .get(first_visual)
            .map(|&c| c as usize)
            .unwrap_or(0)
    } else {
        let first = visual.map.glyphs_to_characters[last_visual] as usize;
        let count = visual.map.characters_per_glyph[last_visual] as usize;
        (first + count).min(visual.map.character_count())
    };
    Some(Hit {
        character,
        on_text: false,
    })
}

/// Picks the character within a (possibly ligature) glyph for a horizontal
/// offset from its left edge.
fn character_within_glyph(
    text: &TextModel,
    visual: &VisualModel,
    glyph_index: usize,
    offset: f32,
) -> usize {
    let first = visual.map.glyphs_to_characters[glyph_index] as usize;
    let count = visual.map.characters_per_glyph[glyph_index].max(1) as usize;
    if count == 1 {
        return first;
    }
    let per_character = visual.glyphs[glyph_index].advance / count as f32;
    let mut inter = if per_character > 0.0 {
        (offset / per_character) as usize
    } else {
        0
    };
    if inter >= count {
        inter = count - 1;
    }
    if text.is_rtl(first) {
        first + (count - 1 - inter)
    } else {
        first + inter
    }
}

/// Line whose vertical interval contains `y`, clamped to the first and last
/// lines.
fn line_for_offset(visual: &VisualModel, y: f32) -> usize {
    let mut top = visual.scroll_y;
    for (index, line) in visual.lines.iter().enumerate() {
        let bottom = top + line.height();
        if y < bottom {
            return index;
        }
        top = bottom;
    }
    visual.lines.len() - 1
}

/// Returns the run of non-whitespace characters around the given index.
///
/// A whitespace character yields a run of just itself. Unicode-aware word
/// segmentation is the shaping pass's concern; selection only needs the
/// whitespace-delimited bounds.
pub fn word_bounds(text: &str, character: usize) -> CharacterRun {
    let characters: Vec<char> = text.chars().collect();
    if characters.is_empty() {
        return CharacterRun::new(0, 0);
    }
    let index = character.min(characters.len() - 1);
    if characters[index].is_whitespace() {
        return CharacterRun::new(index, 1);
    }
    let mut start = index;
    while start > 0 && !characters[start - 1].is_whitespace() {
        start -= 1;
    }
    let mut end = index + 1;
    while end < characters.len() && !characters[end].is_whitespace() {
        end += 1;
    }
    CharacterRun::new(start, end - start)
}

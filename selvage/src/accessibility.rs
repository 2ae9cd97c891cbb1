// Copyright 2026 the Selvage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Accessibility node emission for text controls.

use alloc::vec::Vec;

use accesskit::{Node, NodeId, Role, TextDirection, TreeUpdate};
use hashbrown::{HashMap, HashSet};

use crate::model::{TextModel, VisualModel};

/// Maintains a two-way mapping between lines of the visual model and
/// AccessKit node IDs, so node IDs stay stable when merely updating the
/// content of existing lines. The maps are maintained by
/// [`LineAccessibility::build_nodes`], which drops entries for lines
/// removed since the previous accessibility pass.
#[derive(Clone, Default, Debug)]
pub struct LineAccessibility {
    access_ids_by_line: HashMap<usize, NodeId>,
    lines_by_access_id: HashMap<NodeId, usize>,
}

impl LineAccessibility {
    /// Emits one text-run node per line into `update`, parented under
    /// `parent_node`.
    ///
    /// Character lengths, positions and widths are derived from the glyph
    /// advances through the cluster map; ligature glyphs split their
    /// advance evenly over their characters.
    pub fn build_nodes(
        &mut self,
        text: &TextModel,
        visual: &VisualModel,
        update: &mut TreeUpdate,
        parent_node: &mut Node,
        mut next_node_id: impl FnMut() -> NodeId,
        x_offset: f64,
        y_offset: f64,
    ) {
        // Node IDs seen in this pass.
        let mut ids = HashSet::<NodeId>::new();
        // Byte offset of every character, plus the terminating length.
        let mut byte_offsets: Vec<usize> = text.text.char_indices().map(|(i, _)| i).collect();
        byte_offsets.push(text.text.len());

        for (line_index, line) in visual.lines.iter().enumerate() {
            if line.glyph_count == 0 {
                continue;
            }
            let id = self
                .access_ids_by_line
                .get(&line_index)
                .copied()
                .unwrap_or_else(|| {
                    let id = next_node_id();
                    self.access_ids_by_line.insert(line_index, id);
                    self.lines_by_access_id.insert(id, line_index);
                    id
                });
            ids.insert(id);
            let mut node = Node::new(Role::TextRun);

            let line_top = visual.line_top(line_index);
            let advance: f32 = line
                .glyph_range()
                .map(|glyph_index| visual.glyphs[glyph_index].advance)
                .sum();
            let origin = line.alignment_offset + visual.scroll_x;
            node.set_bounds(accesskit::Rect {
                x0: x_offset + origin as f64,
                y0: y_offset + line_top as f64,
                x1: x_offset + (origin + advance) as f64,
                y1: y_offset + (line_top + line.height()) as f64,
            });
            node.set_text_direction(if line.is_rtl {
                TextDirection::RightToLeft
            } else {
                TextDirection::LeftToRight
            });

            let first_glyph = line.glyph_index as usize;
            let first_character = visual.map.glyphs_to_characters[first_glyph] as usize;
            let mut character_lengths = Vec::new();
            let mut character_positions = Vec::new();
            let mut character_widths = Vec::new();
            let mut word_lengths = Vec::new();
            let mut last_word_start = 0;
            let mut cluster_offset = 0.0_f32;
            let mut previous_was_space = true;

            for glyph_index in line.glyph_range() {
                let glyph = &visual.glyphs[glyph_index];
                let characters = visual.map.characters_per_glyph[glyph_index].max(1) as usize;
                let per_character = glyph.advance / characters as f32;
                let character_base = visual.map.glyphs_to_characters[glyph_index] as usize;
                for inter in 0..characters {
                    let character = character_base + inter;
                    let byte_length = byte_offsets[character + 1] - byte_offsets[character];
                    let is_space = text
                        .text
                        .get(byte_offsets[character]..)
                        .and_then(|s| s.chars().next())
                        .is_some_and(char::is_whitespace);
                    if previous_was_space && !is_space && !character_lengths.is_empty() {
                        word_lengths.push((character_lengths.len() - last_word_start) as u8);
                        last_word_start = character_lengths.len();
                    }
                    previous_was_space = is_space;
                    character_lengths.push(byte_length as u8);
                    character_positions.push(cluster_offset);
                    character_widths.push(per_character);
                    cluster_offset += per_character;
                }
            }

            let last_character = {
                let last_glyph = first_glyph + line.glyph_count as usize - 1;
                visual.map.glyphs_to_characters[last_glyph] as usize
                    + visual.map.characters_per_glyph[last_glyph].max(1) as usize
            };
            let value = &text.text[byte_offsets[first_character]..byte_offsets[last_character]];
            node.set_value(value);

            word_lengths.push((character_lengths.len() - last_word_start) as u8);
            node.set_character_lengths(character_lengths);
            node.set_character_positions(character_positions);
            node.set_character_widths(character_widths);
            node.set_word_lengths(word_lengths);

            update.nodes.push((id, node));
            parent_node.push_child(id);
        }

        // Remove mappings for lines that no longer exist.
        let mut ids_to_remove = Vec::<NodeId>::new();
        let mut lines_to_remove = Vec::<usize>::new();
        for (access_id, line_index) in self.lines_by_access_id.iter() {
            if !ids.contains(access_id) {
                ids_to_remove.push(*access_id);
                lines_to_remove.push(*line_index);
            }
        }
        for id in ids_to_remove {
            self.lines_by_access_id.remove(&id);
        }
        for line_index in lines_to_remove {
            self.access_ids_by_line.remove(&line_index);
        }
    }
}

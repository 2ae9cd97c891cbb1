// Copyright 2026 the Selvage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#[cfg(feature = "libm")]
#[allow(unused_imports)]
use core_maths::CoreFloat;

use glam::Vec3;

use super::{
    next_focus_linear, FocusDirection, ItemId, ItemLayout, ItemLayoutProperties, ItemRange,
};

/// Items arranged in rows of a fixed number of columns, scrolling along
/// the rows.
///
/// One unit of layout position corresponds to one item, so a whole row
/// spans `columns` units.
#[derive(Clone, Debug)]
pub struct GridLayout {
    properties: ItemLayoutProperties,
    columns: u32,
    row_spacing: f32,
    column_spacing: f32,
    top_margin: f32,
    side_margin: f32,
}

impl Default for GridLayout {
    fn default() -> Self {
        Self {
            properties: ItemLayoutProperties {
                scroll_speed_factor: 0.03,
                maximum_swipe_speed: 100.0,
                item_flick_animation_duration: 0.015,
                ..ItemLayoutProperties::default()
            },
            columns: 4,
            row_spacing: 20.0,
            column_spacing: 20.0,
            top_margin: 95.0,
            side_margin: 20.0,
        }
    }
}

impl GridLayout {
    /// Creates a grid layout with the default four columns.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of columns. Zero is clamped to one column.
    pub fn with_columns(mut self, columns: u32) -> Self {
        self.columns = columns.max(1);
        self
    }

    /// Number of columns.
    pub fn columns(&self) -> u32 {
        self.columns
    }

    /// Sets the spacing between rows and between columns.
    pub fn with_spacing(mut self, row_spacing: f32, column_spacing: f32) -> Self {
        self.row_spacing = row_spacing;
        self.column_spacing = column_spacing;
        self
    }

    fn row_height(&self, layout_size: Vec3) -> f32 {
        self.item_size(0, layout_size).y + self.row_spacing
    }
}

impl ItemLayout for GridLayout {
    fn properties(&self) -> &ItemLayoutProperties {
        &self.properties
    }

    fn properties_mut(&mut self) -> &mut ItemLayoutProperties {
        &mut self.properties
    }

    fn default_item_size(&self, _item_id: ItemId, layout_size: Vec3) -> Vec3 {
        let columns = self.columns as f32;
        let width = (layout_size.x - self.side_margin * 2.0 - self.column_spacing * (columns - 1.0))
            / columns;
        Vec3::new(width, width, width * 0.5)
    }

    fn item_position(&self, item_id: ItemId, layout_position: f32, layout_size: Vec3) -> Vec3 {
        let size = self.item_size(item_id, layout_size);
        let column = item_id % self.columns;
        let row = item_id / self.columns;
        let row_position = row as f32 + layout_position / self.columns as f32;
        let x = self.side_margin + column as f32 * (size.x + self.column_spacing) + size.x * 0.5
            - layout_size.x * 0.5;
        let y = self.top_margin + row_position * self.row_height(layout_size) + size.y * 0.5
            - layout_size.y * 0.5;
        Vec3::new(x, y, 0.0)
    }

    fn items_within_area(&self, first_item_position: f32, layout_size: Vec3) -> ItemRange {
        let columns = i64::from(self.columns);
        let rows_in_view = (layout_size.y / self.row_height(layout_size)).ceil() as i64 + 1;
        let first_row = ((-first_item_position / self.columns as f32).floor() as i64).max(0);
        ItemRange::new(
            (first_row * columns) as ItemId,
            ((first_row + rows_in_view) * columns) as ItemId,
        )
    }

    fn closest_anchor_position(&self, layout_position: f32) -> f32 {
        let columns = self.columns as f32;
        (layout_position / columns).round() * columns
    }

    fn scroll_to_position(&self, item_id: ItemId) -> f32 {
        let columns = self.columns as f32;
        -(item_id as f32 / columns) * columns
    }

    fn next_focus_item(
        &self,
        item_id: ItemId,
        item_count: ItemId,
        direction: FocusDirection,
        loop_enabled: bool,
    ) -> ItemId {
        if item_count == 0 {
            return 0;
        }
        match direction {
            FocusDirection::Left | FocusDirection::Right => {
                next_focus_linear(item_id, item_count, direction, loop_enabled)
            }
            // Vertical movement steps a whole row.
            FocusDirection::Up | FocusDirection::Down => {
                let count = i64::from(item_count);
                let columns = i64::from(self.columns);
                let current = i64::from(item_id).clamp(0, count - 1);
                let mut item = match direction {
                    FocusDirection::Up => current - columns,
                    _ => current + columns,
                };
                if item < 0 || item >= count {
                    if loop_enabled {
                        item = item.rem_euclid(count);
                    } else {
                        item = current;
                    }
                }
                item as ItemId
            }
        }
    }
}

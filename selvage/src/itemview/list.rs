// Copyright 2026 the Selvage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#[cfg(feature = "libm")]
#[allow(unused_imports)]
use core_maths::CoreFloat;

use glam::Vec3;

use super::{ItemId, ItemLayout, ItemLayoutProperties, ItemRange};

/// A single full-width column of items.
#[derive(Clone, Debug)]
pub struct ListLayout {
    properties: ItemLayoutProperties,
    item_height: f32,
    row_spacing: f32,
    side_margin: f32,
}

impl Default for ListLayout {
    fn default() -> Self {
        Self {
            properties: ItemLayoutProperties {
                scroll_speed_factor: 0.5,
                maximum_swipe_speed: 500.0,
                item_flick_animation_duration: 0.015,
                ..ItemLayoutProperties::default()
            },
            item_height: 100.0,
            row_spacing: 20.0,
            side_margin: 20.0,
        }
    }
}

impl ListLayout {
    /// Creates a list layout.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the row height.
    pub fn with_item_height(mut self, item_height: f32) -> Self {
        self.item_height = item_height;
        self
    }

    fn row_height(&self) -> f32 {
        self.item_height + self.row_spacing
    }
}

impl ItemLayout for ListLayout {
    fn properties(&self) -> &ItemLayoutProperties {
        &self.properties
    }

    fn properties_mut(&mut self) -> &mut ItemLayoutProperties {
        &mut self.properties
    }

    fn default_item_size(&self, _item_id: ItemId, layout_size: Vec3) -> Vec3 {
        let width = layout_size.x - self.side_margin * 2.0;
        Vec3::new(width, self.item_height, width * 0.5)
    }

    fn item_position(&self, item_id: ItemId, layout_position: f32, layout_size: Vec3) -> Vec3 {
        let size = self.item_size(item_id, layout_size);
        let y = (item_id as f32 + layout_position) * self.row_height() + size.y * 0.5
            - layout_size.y * 0.5;
        Vec3::new(0.0, y, 0.0)
    }

    fn items_within_area(&self, first_item_position: f32, layout_size: Vec3) -> ItemRange {
        let rows_in_view = (layout_size.y / self.row_height()).ceil() as i64 + 1;
        let first_row = ((-first_item_position).floor() as i64).max(0);
        ItemRange::new(first_row as ItemId, (first_row + rows_in_view) as ItemId)
    }

    fn closest_anchor_position(&self, layout_position: f32) -> f32 {
        layout_position.round()
    }

    fn scroll_to_position(&self, item_id: ItemId) -> f32 {
        -(item_id as f32)
    }
}

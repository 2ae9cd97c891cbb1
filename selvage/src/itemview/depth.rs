// Copyright 2026 the Selvage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#[cfg(feature = "libm")]
#[allow(unused_imports)]
use core_maths::CoreFloat;

use core::f32::consts::PI;

use glam::Vec3;

use super::{ItemId, ItemLayout, ItemLayoutProperties, ItemRange};

/// Rows of items receding into the scene along a plane tilted away from
/// the viewer.
///
/// Rows share the layout-position semantics of [`super::GridLayout`]: one
/// unit per item, a whole row per `columns` units. The tilt angle splits a
/// row's travel between vertical offset and scene depth.
#[derive(Clone, Debug)]
pub struct DepthLayout {
    properties: ItemLayoutProperties,
    columns: u32,
    visible_rows: u32,
    row_spacing: f32,
    column_spacing: f32,
    tilt_angle: f32,
}

impl Default for DepthLayout {
    fn default() -> Self {
        Self {
            properties: ItemLayoutProperties {
                scroll_speed_factor: 0.02,
                maximum_swipe_speed: 50.0,
                item_flick_animation_duration: 0.03,
                ..ItemLayoutProperties::default()
            },
            columns: 3,
            visible_rows: 26,
            row_spacing: 55.0,
            column_spacing: 20.0,
            tilt_angle: 15.0 * PI / 180.0,
        }
    }
}

impl DepthLayout {
    /// Creates a depth layout with the default three columns.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of columns. Zero is clamped to one column.
    pub fn with_columns(mut self, columns: u32) -> Self {
        self.columns = columns.max(1);
        self
    }

    /// Sets the tilt of the item plane, in radians from vertical.
    pub fn with_tilt_angle(mut self, tilt_angle: f32) -> Self {
        self.tilt_angle = tilt_angle;
        self
    }

    /// Number of columns.
    pub fn columns(&self) -> u32 {
        self.columns
    }
}

impl ItemLayout for DepthLayout {
    fn properties(&self) -> &ItemLayoutProperties {
        &self.properties
    }

    fn properties_mut(&mut self) -> &mut ItemLayoutProperties {
        &mut self.properties
    }

    fn default_item_size(&self, _item_id: ItemId, layout_size: Vec3) -> Vec3 {
        let width = layout_size.x / (self.columns as f32 + 1.0);
        Vec3::new(width, width, width * 0.5)
    }

    fn item_position(&self, item_id: ItemId, layout_position: f32, layout_size: Vec3) -> Vec3 {
        let size = self.item_size(item_id, layout_size);
        let column = item_id % self.columns;
        let row = item_id / self.columns;
        let row_position = row as f32 + layout_position / self.columns as f32;
        let travel = row_position * self.row_spacing;
        let x = (column as f32 - (self.columns as f32 - 1.0) * 0.5)
            * (size.x + self.column_spacing);
        Vec3::new(
            x,
            -travel * self.tilt_angle.sin(),
            -travel * self.tilt_angle.cos(),
        )
    }

    fn items_within_area(&self, first_item_position: f32, _layout_size: Vec3) -> ItemRange {
        let columns = i64::from(self.columns);
        let first_row = ((-first_item_position / self.columns as f32).floor() as i64).max(0);
        ItemRange::new(
            (first_row * columns) as ItemId,
            ((first_row + i64::from(self.visible_rows) + 1) * columns) as ItemId,
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
}

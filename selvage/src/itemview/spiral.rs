// Copyright 2026 the Selvage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#[cfg(feature = "libm")]
#[allow(unused_imports)]
use core_maths::CoreFloat;

use core::f32::consts::TAU;

use glam::Vec3;

use super::{ItemId, ItemLayout, ItemLayoutProperties, ItemRange};

/// Items wound around the vertical axis in a descending helix.
///
/// `item_spacing` is the angle between adjacent items; a full revolution
/// descends exactly `revolution_distance`.
#[derive(Clone, Debug)]
pub struct SpiralLayout {
    properties: ItemLayoutProperties,
    item_spacing: f32,
    revolution_distance: f32,
    radius_factor: f32,
}

impl Default for SpiralLayout {
    fn default() -> Self {
        Self {
            properties: ItemLayoutProperties {
                scroll_speed_factor: 0.01,
                maximum_swipe_speed: 30.0,
                item_flick_animation_duration: 0.1,
                ..ItemLayoutProperties::default()
            },
            item_spacing: TAU / 9.5,
            revolution_distance: 190.0,
            radius_factor: 1.0 / 3.0,
        }
    }
}

impl SpiralLayout {
    /// Creates a spiral layout.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the angle between adjacent items, in radians.
    pub fn with_item_spacing(mut self, item_spacing: f32) -> Self {
        self.item_spacing = item_spacing;
        self
    }

    /// Sets the vertical distance covered by one revolution.
    pub fn with_revolution_distance(mut self, revolution_distance: f32) -> Self {
        self.revolution_distance = revolution_distance;
        self
    }

    /// Vertical drop between adjacent items.
    fn vertical_step(&self) -> f32 {
        self.revolution_distance * self.item_spacing / TAU
    }
}

impl ItemLayout for SpiralLayout {
    fn properties(&self) -> &ItemLayoutProperties {
        &self.properties
    }

    fn properties_mut(&mut self) -> &mut ItemLayoutProperties {
        &mut self.properties
    }

    fn default_item_size(&self, _item_id: ItemId, layout_size: Vec3) -> Vec3 {
        let width = layout_size.x * 0.25;
        Vec3::new(width, width, width * 0.5)
    }

    fn item_position(&self, item_id: ItemId, layout_position: f32, layout_size: Vec3) -> Vec3 {
        let slot = item_id as f32 + layout_position;
        let angle = slot * self.item_spacing;
        let radius = layout_size.x * self.radius_factor;
        Vec3::new(
            radius * angle.sin(),
            slot * self.vertical_step(),
            -radius * angle.cos(),
        )
    }

    fn items_within_area(&self, first_item_position: f32, layout_size: Vec3) -> ItemRange {
        let items_per_revolution = TAU / self.item_spacing;
        let revolutions_in_view = layout_size.y / self.revolution_distance;
        let count = (items_per_revolution * (revolutions_in_view + 1.0)).ceil() as i64;
        let first = ((-first_item_position).floor() as i64).max(0);
        ItemRange::new(first as ItemId, (first + count) as ItemId)
    }

    fn closest_anchor_position(&self, layout_position: f32) -> f32 {
        layout_position.round()
    }

    fn scroll_to_position(&self, item_id: ItemId) -> f32 {
        -(item_id as f32)
    }
}

// Copyright 2026 the Selvage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Item-view layout positioning.
//!
//! Pure functions mapping item index and viewport geometry to scroll
//! positions and screen-space placements. The item-view scroller calls
//! these once per relayout or drag frame to decide which items to
//! instantiate and where to place them; nothing here touches actors or
//! animations.
//!
//! The continuous scroll position ("layout position") is measured in item
//! slots and decreases as the view scrolls forward, so bringing item `n`
//! to the anchor slot means a negative position.

mod depth;
mod grid;
mod list;
mod spiral;

pub use depth::DepthLayout;
pub use grid::GridLayout;
pub use list::ListLayout;
pub use spiral::SpiralLayout;

use glam::Vec3;

/// Identifier of an item in an item view.
pub type ItemId = u32;

/// Half-open range of item ids.
#[derive(Copy, Clone, Default, Debug, PartialEq, Eq)]
pub struct ItemRange {
    /// First id in the range.
    pub begin: ItemId,
    /// One past the last id in the range.
    pub end: ItemId,
}

impl ItemRange {
    /// Creates the range `[begin, end)`.
    pub fn new(begin: ItemId, end: ItemId) -> Self {
        Self { begin, end }
    }

    /// Returns `true` if `item_id` lies within the range.
    pub fn within(&self, item_id: ItemId) -> bool {
        item_id >= self.begin && item_id < self.end
    }

    /// Intersection with another range. Disjoint ranges intersect to the
    /// empty range `[0, 0)`.
    pub fn intersection(&self, other: &Self) -> Self {
        if self.begin < other.end && other.begin < self.end {
            Self {
                begin: self.begin.max(other.begin),
                end: self.end.min(other.end),
            }
        } else {
            Self::default()
        }
    }
}

/// Direction of keyboard-driven focus movement over the item grid.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FocusDirection {
    /// Toward lower ids in the same row.
    Left,
    /// Toward higher ids in the same row.
    Right,
    /// Toward the previous row.
    Up,
    /// Toward the next row.
    Down,
}

/// Physical orientation of the scroll axis.
#[derive(Copy, Clone, Default, Debug, PartialEq, Eq)]
pub enum ControlOrientation {
    /// Scroll axis points up.
    #[default]
    Up,
    /// Scroll axis points left.
    Left,
    /// Scroll axis points down.
    Down,
    /// Scroll axis points right.
    Right,
}

/// Configuration shared by every item layout.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ItemLayoutProperties {
    /// Orientation of the scroll axis.
    pub orientation: ControlOrientation,
    /// Overrides the layout's computed item size when set.
    pub item_size: Option<Vec3>,
    /// Scroll distance per unit of input movement.
    pub scroll_speed_factor: f32,
    /// Upper bound on swipe-driven scroll speed, in items per second.
    pub maximum_swipe_speed: f32,
    /// Duration of the per-item flick animation, in seconds.
    pub item_flick_animation_duration: f32,
}

impl Default for ItemLayoutProperties {
    fn default() -> Self {
        Self {
            orientation: ControlOrientation::Up,
            item_size: None,
            scroll_speed_factor: 0.5,
            maximum_swipe_speed: 100.0,
            item_flick_animation_duration: 0.05,
        }
    }
}

/// Positioning contract implemented by every item layout.
pub trait ItemLayout {
    /// Shared configuration.
    fn properties(&self) -> &ItemLayoutProperties;

    /// Mutable shared configuration.
    fn properties_mut(&mut self) -> &mut ItemLayoutProperties;

    /// Size the layout would give the item, ignoring any override.
    fn default_item_size(&self, item_id: ItemId, layout_size: Vec3) -> Vec3;

    /// Center position of the item, relative to the control center, for
    /// the given continuous layout position.
    fn item_position(&self, item_id: ItemId, layout_position: f32, layout_size: Vec3) -> Vec3;

    /// Range of items that intersect the viewport when the first item sits
    /// at `first_item_position`.
    fn items_within_area(&self, first_item_position: f32, layout_size: Vec3) -> ItemRange;

    /// Snaps a continuous scroll position to the nearest position where
    /// every item lands on an integral layout slot.
    fn closest_anchor_position(&self, layout_position: f32) -> f32;

    /// Layout position that scrolls the given item to the anchor slot.
    fn scroll_to_position(&self, item_id: ItemId) -> f32;

    /// Size of the item: the caller override when set, else the layout's
    /// own sizing.
    fn item_size(&self, item_id: ItemId, layout_size: Vec3) -> Vec3 {
        match self.properties().item_size {
            Some(size) => size,
            None => self.default_item_size(item_id, layout_size),
        }
    }

    /// Next item to focus when moving in `direction` over `item_count`
    /// items.
    ///
    /// An out-of-range current id is first clamped into
    /// `[0, item_count)`, then stepped one position, wrapping when
    /// `loop_enabled` is set and staying at the boundary otherwise.
    fn next_focus_item(
        &self,
        item_id: ItemId,
        item_count: ItemId,
        direction: FocusDirection,
        loop_enabled: bool,
    ) -> ItemId {
        next_focus_linear(item_id, item_count, direction, loop_enabled)
    }

    /// Orientation of the scroll axis.
    fn orientation(&self) -> ControlOrientation {
        self.properties().orientation
    }

    /// Scroll distance per unit of input movement.
    fn scroll_speed_factor(&self) -> f32 {
        self.properties().scroll_speed_factor
    }

    /// Upper bound on swipe-driven scroll speed.
    fn maximum_swipe_speed(&self) -> f32 {
        self.properties().maximum_swipe_speed
    }

    /// Duration of the per-item flick animation.
    fn item_flick_animation_duration(&self) -> f32 {
        self.properties().item_flick_animation_duration
    }

    /// Overrides the computed item size.
    fn set_item_size(&mut self, size: Vec3) {
        self.properties_mut().item_size = Some(size);
    }
}

/// Default focus stepping: every direction moves one item.
pub(crate) fn next_focus_linear(
    item_id: ItemId,
    item_count: ItemId,
    direction: FocusDirection,
    loop_enabled: bool,
) -> ItemId {
    if item_count == 0 {
        return 0;
    }
    let last = i64::from(item_count) - 1;
    let mut item = i64::from(item_id).clamp(0, last);
    match direction {
        FocusDirection::Left | FocusDirection::Up => {
            item -= 1;
            if item < 0 {
                item = if loop_enabled { last } else { 0 };
            }
        }
        FocusDirection::Right | FocusDirection::Down => {
            item += 1;
            if item > last {
                item = if loop_enabled { 0 } else { last };
            }
        }
    }
    item as ItemId
}

/// Closed set of the built-in layouts, dispatched by exhaustive match.
#[derive(Clone, Debug)]
pub enum DefaultItemLayout {
    /// Rows of a fixed number of columns.
    Grid(GridLayout),
    /// Rows receding into the scene along a tilted plane.
    Depth(DepthLayout),
    /// A single column.
    List(ListLayout),
    /// A helix around the vertical axis.
    Spiral(SpiralLayout),
}

macro_rules! dispatch {
    ($self:expr, $layout:ident => $body:expr) => {
        match $self {
            DefaultItemLayout::Grid($layout) => $body,
            DefaultItemLayout::Depth($layout) => $body,
            DefaultItemLayout::List($layout) => $body,
            DefaultItemLayout::Spiral($layout) => $body,
        }
    };
}

impl ItemLayout for DefaultItemLayout {
    fn properties(&self) -> &ItemLayoutProperties {
        dispatch!(self, layout => layout.properties())
    }

    fn properties_mut(&mut self) -> &mut ItemLayoutProperties {
        dispatch!(self, layout => layout.properties_mut())
    }

    fn default_item_size(&self, item_id: ItemId, layout_size: Vec3) -> Vec3 {
        dispatch!(self, layout => layout.default_item_size(item_id, layout_size))
    }

    fn item_position(&self, item_id: ItemId, layout_position: f32, layout_size: Vec3) -> Vec3 {
        dispatch!(self, layout => layout.item_position(item_id, layout_position, layout_size))
    }

    fn items_within_area(&self, first_item_position: f32, layout_size: Vec3) -> ItemRange {
        dispatch!(self, layout => layout.items_within_area(first_item_position, layout_size))
    }

    fn closest_anchor_position(&self, layout_position: f32) -> f32 {
        dispatch!(self, layout => layout.closest_anchor_position(layout_position))
    }

    fn scroll_to_position(&self, item_id: ItemId) -> f32 {
        dispatch!(self, layout => layout.scroll_to_position(item_id))
    }

    fn next_focus_item(
        &self,
        item_id: ItemId,
        item_count: ItemId,
        direction: FocusDirection,
        loop_enabled: bool,
    ) -> ItemId {
        dispatch!(self, layout => layout.next_focus_item(item_id, item_count, direction, loop_enabled))
    }
}

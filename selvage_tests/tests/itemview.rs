// Copyright 2026 the Selvage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use glam::Vec3;
use selvage::itemview::{
    DefaultItemLayout, DepthLayout, FocusDirection, GridLayout, ItemLayout, ItemRange, ListLayout,
    SpiralLayout,
};

fn layouts() -> Vec<DefaultItemLayout> {
    vec![
        DefaultItemLayout::Grid(GridLayout::new()),
        DefaultItemLayout::Depth(DepthLayout::new()),
        DefaultItemLayout::List(ListLayout::new()),
        DefaultItemLayout::Spiral(SpiralLayout::new()),
    ]
}

#[test]
fn itemview_tested_contracts_hold_through_the_variant() {
    let grid = DefaultItemLayout::Grid(GridLayout::new());
    assert_eq!(grid.scroll_to_position(1), -1.0);
    assert_eq!(grid.next_focus_item(0, 100, FocusDirection::Left, true), 99);
    assert_eq!(grid.next_focus_item(110, 100, FocusDirection::Right, true), 0);

    let range = ItemRange::new(100, 300).intersection(&ItemRange::new(290, 400));
    assert_eq!(range, ItemRange::new(290, 300));
    assert!(range.within(290));
    assert!(!range.within(301));
}

#[test]
fn itemview_anchors_are_fixed_points() {
    // Snapping an already-anchored position is the identity.
    for layout in layouts() {
        for slot in [-8.0, -4.0, 0.0] {
            let anchored = layout.closest_anchor_position(slot);
            assert_eq!(layout.closest_anchor_position(anchored), anchored);
        }
    }
}

#[test]
fn itemview_visible_ranges_are_never_empty() {
    let layout_size = Vec3::new(480.0, 800.0, 0.0);
    for layout in layouts() {
        for position in [0.0, -3.0, -12.5] {
            let visible = layout.items_within_area(position, layout_size);
            assert!(visible.begin < visible.end, "empty range from {position}");
        }
    }
}

#[test]
fn itemview_focus_stepping_stays_in_range() {
    for layout in layouts() {
        for direction in [
            FocusDirection::Left,
            FocusDirection::Right,
            FocusDirection::Up,
            FocusDirection::Down,
        ] {
            for start in [0_u32, 7, 99, 205] {
                for wrap in [false, true] {
                    let next = layout.next_focus_item(start, 100, direction, wrap);
                    assert!(next < 100, "{next} out of range");
                }
            }
        }
    }
}

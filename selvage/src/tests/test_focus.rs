// Copyright 2026 the Selvage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use accesskit::NodeId;

use crate::focus::FocusOrder;

const A: NodeId = NodeId(1);
const B: NodeId = NodeId(2);
const C: NodeId = NodeId(3);

#[test]
fn adjacent_entries_get_flow_edges() {
    let mut focus = FocusOrder::new();
    focus.set_focus_order(A, 1);
    focus.set_focus_order(B, 2);
    assert_eq!(focus.focus_order(A), 1);
    assert_eq!(focus.focus_order(B), 2);
    assert_eq!(focus.flows_to(A), Some(B));
    assert_eq!(focus.flows_from(B), Some(A));
    // The path has no edges past its ends.
    assert_eq!(focus.flows_from(A), None);
    assert_eq!(focus.flows_to(B), None);
}

#[test]
fn order_zero_is_a_noop() {
    let mut focus = FocusOrder::new();
    focus.set_focus_order(A, 0);
    assert_eq!(focus.focus_order(A), 0);
    assert_eq!(focus.generate_new_focus_order(), 1);
}

#[test]
fn generated_order_appends() {
    let mut focus = FocusOrder::new();
    assert_eq!(focus.generate_new_focus_order(), 1);
    focus.set_focus_order(A, focus.generate_new_focus_order());
    assert_eq!(focus.generate_new_focus_order(), 2);
    focus.set_focus_order(B, focus.generate_new_focus_order());
    assert_eq!(focus.focus_order(B), 2);
}

#[test]
fn insertion_relinks_neighbor_edges() {
    let mut focus = FocusOrder::new();
    focus.set_focus_order(A, 1);
    focus.set_focus_order(B, 2);
    focus.set_focus_order(C, 1);
    assert_eq!(focus.focus_order(C), 1);
    assert_eq!(focus.focus_order(A), 2);
    assert_eq!(focus.focus_order(B), 3);
    assert_eq!(focus.flows_to(C), Some(A));
    assert_eq!(focus.flows_from(A), Some(C));
    assert_eq!(focus.flows_to(A), Some(B));
}

#[test]
fn reregistration_moves_the_element() {
    let mut focus = FocusOrder::new();
    focus.set_focus_order(A, 1);
    focus.set_focus_order(B, 2);
    focus.set_focus_order(A, 2);
    assert_eq!(focus.focus_order(B), 1);
    assert_eq!(focus.focus_order(A), 2);
    assert_eq!(focus.flows_to(B), Some(A));
    assert_eq!(focus.flows_from(A), Some(B));
    assert_eq!(focus.flows_to(A), None);
}

#[test]
fn sequence_grows_to_the_requested_order() {
    let mut focus = FocusOrder::new();
    focus.set_focus_order(A, 5);
    assert_eq!(focus.focus_order(A), 5);
    assert_eq!(focus.generate_new_focus_order(), 6);
}

#[test]
fn forward_movement_walks_the_path() {
    let mut focus = FocusOrder::new();
    focus.set_focus_order(A, 1);
    focus.set_focus_order(B, 2);
    assert_eq!(focus.current(), None);
    assert!(focus.move_focus_forward());
    assert_eq!(focus.current(), Some(A));
    assert!(focus.move_focus_forward());
    assert_eq!(focus.current(), Some(B));
    assert!(!focus.move_focus_forward());
    assert_eq!(focus.current(), Some(B));
}

#[test]
fn backward_movement_refuses_the_sentinel_slot() {
    let mut focus = FocusOrder::new();
    focus.set_focus_order(A, 1);
    focus.set_focus_order(B, 2);
    assert!(focus.set_current(A));
    assert!(!focus.move_focus_backward());
    assert_eq!(focus.current(), Some(A));

    assert!(focus.set_current(B));
    assert!(focus.move_focus_backward());
    assert_eq!(focus.current(), Some(A));
}

#[test]
fn reset_returns_to_the_single_sentinel() {
    let mut focus = FocusOrder::new();
    focus.set_focus_order(A, 1);
    focus.set_focus_order(B, 2);
    focus.set_current(B);
    focus.reset();
    assert_eq!(focus.focus_order(A), 0);
    assert_eq!(focus.focus_order(B), 0);
    assert_eq!(focus.flows_to(A), None);
    assert_eq!(focus.flows_from(B), None);
    assert_eq!(focus.current(), None);
    assert!(!focus.move_focus_forward());
    assert_eq!(focus.generate_new_focus_order(), 1);
}

#[test]
fn unregistered_elements_cannot_take_focus() {
    let mut focus = FocusOrder::new();
    focus.set_focus_order(A, 1);
    assert!(!focus.set_current(C));
    assert_eq!(focus.current(), None);
}

// Copyright 2026 the Selvage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use accesskit::NodeId;
use selvage::FocusOrder;

#[test]
fn focus_order_builds_a_navigable_path() {
    let mut focus = FocusOrder::new();
    let elements = [NodeId(10), NodeId(11), NodeId(12), NodeId(13)];
    for element in elements {
        focus.set_focus_order(element, focus.generate_new_focus_order());
    }

    for pair in elements.windows(2) {
        assert_eq!(focus.flows_to(pair[0]), Some(pair[1]));
        assert_eq!(focus.flows_from(pair[1]), Some(pair[0]));
    }

    // Walk the whole path forward, then fail at the end.
    let mut visited = Vec::new();
    while focus.move_focus_forward() {
        visited.push(focus.current().expect("focused element"));
    }
    assert_eq!(visited, elements);
    assert!(!focus.move_focus_forward());

    // And back again, stopping before the sentinel.
    while focus.move_focus_backward() {}
    assert_eq!(focus.current(), Some(elements[0]));
}

#[test]
fn focus_reset_forgets_every_registration() {
    let mut focus = FocusOrder::new();
    let a = NodeId(1);
    let b = NodeId(2);
    focus.set_focus_order(a, 1);
    focus.set_focus_order(b, 2);
    focus.reset();
    assert_eq!(focus.focus_order(a), 0);
    assert_eq!(focus.focus_order(b), 0);
    assert_eq!(focus.relations(a), None);
    assert_eq!(focus.relations(b), None);
}

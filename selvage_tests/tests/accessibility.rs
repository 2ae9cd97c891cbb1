// Copyright 2026 the Selvage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use accesskit::{Node, NodeId, Role, TreeUpdate};
use selvage::accessibility::LineAccessibility;
use selvage_dev::ModelBuilder;

fn empty_update() -> TreeUpdate {
    TreeUpdate {
        nodes: vec![],
        tree: None,
        focus: NodeId(0),
    }
}

#[test]
fn accessibility_emits_one_node_per_line() {
    let (text, visual) = ModelBuilder::new(&["hello ", "world"]).build();
    let mut access = LineAccessibility::default();
    let mut update = empty_update();
    let mut parent = Node::new(Role::GenericContainer);
    let mut next_id = 100_u64;
    access.build_nodes(&text, &visual, &mut update, &mut parent, || {
        next_id += 1;
        NodeId(next_id)
    }, 0.0, 0.0);
    assert_eq!(update.nodes.len(), 2);
}

#[test]
fn accessibility_node_ids_are_stable_across_passes() {
    let (text, visual) = ModelBuilder::new(&["hello ", "world"]).build();
    let mut access = LineAccessibility::default();
    let mut next_id = 0_u64;

    let mut first = empty_update();
    let mut parent = Node::new(Role::GenericContainer);
    access.build_nodes(&text, &visual, &mut first, &mut parent, || {
        next_id += 1;
        NodeId(next_id)
    }, 0.0, 0.0);

    let mut second = empty_update();
    let mut parent = Node::new(Role::GenericContainer);
    access.build_nodes(&text, &visual, &mut second, &mut parent, || {
        next_id += 1;
        NodeId(next_id)
    }, 0.0, 0.0);

    let first_ids: Vec<NodeId> = first.nodes.iter().map(|(id, _)| *id).collect();
    let second_ids: Vec<NodeId> = second.nodes.iter().map(|(id, _)| *id).collect();
    assert_eq!(first_ids, second_ids);
}

#[test]
fn accessibility_drops_ids_of_removed_lines() {
    let (text, visual) = ModelBuilder::new(&["hello ", "world"]).build();
    let mut access = LineAccessibility::default();
    let mut next_id = 0_u64;
    let mut update = empty_update();
    let mut parent = Node::new(Role::GenericContainer);
    access.build_nodes(&text, &visual, &mut update, &mut parent, || {
        next_id += 1;
        NodeId(next_id)
    }, 0.0, 0.0);

    // Relayout to a single line: the second line's id is retired and a
    // fresh pass only reports one node.
    let (text, visual) = ModelBuilder::new(&["hello world"]).build();
    let mut update = empty_update();
    let mut parent = Node::new(Role::GenericContainer);
    access.build_nodes(&text, &visual, &mut update, &mut parent, || {
        next_id += 1;
        NodeId(next_id)
    }, 0.0, 0.0);
    assert_eq!(update.nodes.len(), 1);
}

// Copyright 2026 the Selvage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sequential focus order for assistive technology.
//!
//! Maintains the ordered sequence of focusable elements and the
//! flows-to/flows-from relation edges between adjacent entries. The
//! accessibility bridge reads the edges to answer next/previous-focusable
//! queries; this module never talks to the wire protocol itself.

use alloc::vec;
use alloc::vec::Vec;

use accesskit::NodeId;
use hashbrown::HashMap;

/// Forward/backward sequential-navigation edges for one element.
#[derive(Copy, Clone, Default, Debug, PartialEq, Eq)]
pub struct FlowRelations {
    /// The element focus flows to.
    pub flows_to: Option<NodeId>,
    /// The element focus flows from.
    pub flows_from: Option<NodeId>,
}

/// Ordered focus sequence with relation edges.
///
/// Index 0 of the sequence is a reserved sentinel meaning "no focus"; a
/// registered element always has order ≥ 1. For any two adjacent
/// registered entries a bidirectional flows-to/flows-from edge pair exists,
/// so the relation graph is always a simple path consistent with the
/// sequence.
#[derive(Clone, Debug)]
pub struct FocusOrder {
    order: Vec<Option<NodeId>>,
    relations: HashMap<NodeId, FlowRelations>,
    current: usize,
}

impl Default for FocusOrder {
    fn default() -> Self {
        Self {
            order: vec![None],
            relations: HashMap::new(),
            current: 0,
        }
    }
}

impl FocusOrder {
    /// Creates an empty focus order holding only the sentinel.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `element` at the given order position.
    ///
    /// Order 0 is the sentinel and the call is a no-op. The sequence grows
    /// as needed; entries at or after `order` shift back by one. An element
    /// that was already registered moves to the new position. Relation
    /// edges are relinked around the insertion point.
    pub fn set_focus_order(&mut self, element: NodeId, order: usize) {
        if order == 0 {
            return;
        }
        if let Some(position) = self.position_of(element) {
            self.remove_at(position);
        }
        while self.order.len() < order {
            self.order.push(None);
        }
        self.order.insert(order, Some(element));
        if self.current >= order {
            self.current += 1;
        }
        self.relink_around(order);
    }

    /// Returns the order of `element`, or 0 when it is not registered.
    pub fn focus_order(&self, element: NodeId) -> usize {
        self.position_of(element).unwrap_or(0)
    }

    /// Returns an order position appending at the end of the sequence.
    pub fn generate_new_focus_order(&self) -> usize {
        self.order.len()
    }

    /// Advances the current focus by one order position.
    ///
    /// Returns `false` at the end of the sequence or when the next slot
    /// holds no element.
    pub fn move_focus_forward(&mut self) -> bool {
        let next = self.current + 1;
        match self.order.get(next) {
            Some(Some(_)) => {
                self.current = next;
                true
            }
            _ => false,
        }
    }

    /// Retreats the current focus by one order position.
    ///
    /// The sentinel slot is never focusable, so this only succeeds while
    /// the current order is greater than 1.
    pub fn move_focus_backward(&mut self) -> bool {
        if self.current > 1 && self.order[self.current - 1].is_some() {
            self.current -= 1;
            true
        } else {
            false
        }
    }

    /// The currently focused element, if any.
    pub fn current(&self) -> Option<NodeId> {
        self.order.get(self.current).copied().flatten()
    }

    /// Focuses a registered element. Returns `false` when the element is
    /// not registered.
    pub fn set_current(&mut self, element: NodeId) -> bool {
        match self.position_of(element) {
            Some(position) => {
                self.current = position;
                true
            }
            None => false,
        }
    }

    /// Returns the focus to the sentinel position.
    pub fn clear_focus(&mut self) {
        self.current = 0;
    }

    /// The element focus flows to from `element`.
    pub fn flows_to(&self, element: NodeId) -> Option<NodeId> {
        self.relations.get(&element).and_then(|r| r.flows_to)
    }

    /// The element focus flows from into `element`.
    pub fn flows_from(&self, element: NodeId) -> Option<NodeId> {
        self.relations.get(&element).and_then(|r| r.flows_from)
    }

    /// The relation edges of `element`, if it is registered.
    pub fn relations(&self, element: NodeId) -> Option<FlowRelations> {
        self.relations.get(&element).copied()
    }

    /// Tears down every relation edge and collapses the sequence back to
    /// the single sentinel entry.
    pub fn reset(&mut self) {
        self.relations.clear();
        self.order.clear();
        self.order.push(None);
        self.current = 0;
    }

    fn position_of(&self, element: NodeId) -> Option<usize> {
        self.order.iter().position(|entry| *entry == Some(element))
    }

    /// Unregisters the entry at `position` and joins its old neighbors.
    fn remove_at(&mut self, position: usize) {
        let Some(element) = self.order.remove(position) else {
            return;
        };
        self.relations.remove(&element);
        let previous = self.order[..position].last().copied().flatten();
        let next = self.order.get(position).copied().flatten();
        if let Some(previous) = previous {
            self.relations.entry(previous).or_default().flows_to = next;
        }
        if let Some(next) = next {
            self.relations.entry(next).or_default().flows_from = previous;
        }
        if self.current == position {
            self.current = 0;
        } else if self.current > position {
            self.current -= 1;
        }
    }

    /// Rebuilds the flows-to/flows-from pairs between the entry at
    /// `position` and its immediate neighbors.
    fn relink_around(&mut self, position: usize) {
        let Some(element) = self.order[position] else {
            return;
        };
        let previous = if position > 0 {
            self.order[position - 1]
        } else {
            None
        };
        let next = self.order.get(position + 1).copied().flatten();
        {
            let relations = self.relations.entry(element).or_default();
            relations.flows_from = previous;
            relations.flows_to = next;
        }
        if let Some(previous) = previous {
            self.relations.entry(previous).or_default().flows_to = Some(element);
        }
        if let Some(next) = next {
            self.relations.entry(next).or_default().flows_from = Some(element);
        }
    }
}

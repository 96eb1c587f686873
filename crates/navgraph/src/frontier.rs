//! Priority-queue relaxation loop shared by uniform-cost and route search.

use std::collections::BinaryHeap;

use crate::config::SearchMode;
use crate::graph::Graph;
use crate::node::{NodeState, UNREACHABLE};

/// Heap entry, ordered so `BinaryHeap` (max-heap) pops the smallest key
/// first and breaks ties on the lower node index.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct NodeRef {
    pub(crate) idx: usize,
    pub(crate) key: u64,
    /// Cost of the node when pushed; entries whose node has since improved
    /// are stale.
    pub(crate) cost: u32,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        other
            .key
            .cmp(&self.key)
            .then_with(|| other.idx.cmp(&self.idx))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Outcome of [`Graph::best_first`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Settled {
    /// Goal cost, or `None` when the open set ran dry.
    pub(crate) cost: Option<u32>,
    /// Number of nodes expanded.
    pub(crate) expanded: usize,
}

impl<T> Graph<T> {
    /// Relax outward from `start` until `goal` is popped or the open set is
    /// empty.
    ///
    /// Expects freshly reset nodes. A node is marked when first discovered;
    /// every later strict improvement of its cost pushes it again and the
    /// outdated entry is skipped when popped, so the heap always yields the
    /// node's live cost. Arcs leading back to the expanded node's own
    /// predecessor are not relaxed.
    ///
    /// In [`SearchMode::AStar`] the estimate need not be a lower bound, so
    /// the first goal pop only sets a bound: the loop keeps expanding
    /// entries cheaper than the goal's cost and drops relaxations that
    /// cannot beat it, and stops when the open set is empty.
    pub(crate) fn best_first(
        &mut self,
        start: usize,
        goal: usize,
        mode: SearchMode,
        tag_visited: bool,
    ) -> Settled {
        let mut settled = Settled {
            cost: None,
            expanded: 0,
        };
        let Some(node) = self.node_mut(start) else {
            return settled;
        };
        node.cost = 0;
        node.marked = true;
        let mut open = BinaryHeap::new();
        open.push(NodeRef {
            idx: start,
            key: mode.key(0, node.heuristic),
            cost: 0,
        });

        let mut abuf = std::mem::take(&mut self.abuf);

        while let Some(current) = open.pop() {
            let ci = current.idx;
            let Some(node) = self.node(ci) else {
                continue;
            };
            if node.cost != current.cost {
                continue;
            }
            let bound = self.node(goal).map_or(UNREACHABLE, |g| g.cost);
            if ci == goal {
                if mode.stops_at_goal() {
                    break;
                }
                continue;
            }
            if !mode.stops_at_goal() && node.cost >= bound {
                continue;
            }
            settled.expanded += 1;

            let current_cost = node.cost;
            let previous = node.previous;
            abuf.clear();
            abuf.extend_from_slice(&node.arcs);

            for arc in abuf.iter() {
                if previous == Some(arc.target) {
                    continue;
                }
                let Some(n) = self.node_mut(arc.target) else {
                    continue;
                };
                if tag_visited {
                    n.state = NodeState::Visited;
                }
                let candidate = current_cost.saturating_add(arc.weight);
                if candidate >= n.cost || (!mode.stops_at_goal() && candidate >= bound) {
                    continue;
                }
                log::trace!("relax {} -> {}: {} -> {}", ci, arc.target, n.cost, candidate);
                n.cost = candidate;
                n.previous = Some(ci);
                n.marked = true;
                open.push(NodeRef {
                    idx: arc.target,
                    key: mode.key(candidate, n.heuristic),
                    cost: candidate,
                });
            }
        }

        self.abuf = abuf;
        settled.cost = self
            .node(goal)
            .map(|g| g.cost)
            .filter(|&c| c != UNREACHABLE);
        settled
    }
}

use navgraph_core::euclidean_rounded;

use crate::error::SearchError;
use crate::graph::Graph;
use crate::node::NodeState;
use crate::path::Route;

impl<T> Graph<T> {
    /// Compute a route from `start` to `goal`.
    ///
    /// Every node other than the goal first gets the rounded straight-line
    /// distance to the goal as its heuristic, then all nodes are reset and the open set is
    /// expanded in the order chosen by [`SearchConfig::mode`](crate::SearchConfig::mode).
    /// Nodes the search discovers are tagged [`NodeState::Visited`]; on
    /// success the route is tagged [`NodeState::OnPath`] (a hovered node
    /// keeps its tag) and its cost becomes [`last_path_cost`](Self::last_path_cost).
    ///
    /// Returns the route with both endpoints included.
    pub fn astar(&mut self, start: usize, goal: usize) -> Result<Route, SearchError> {
        self.check_endpoints(start, goal)?;
        self.estimate_to(goal);
        self.reset_nodes();

        let mode = self.config.mode;
        let settled = self.best_first(start, goal, mode, true);
        let Some(cost) = settled.cost else {
            log::debug!(
                "astar: no path {start} -> {goal} ({} nodes expanded)",
                settled.expanded
            );
            return Err(SearchError::NoPath { start, goal });
        };

        self.search_requested = false;
        self.path_cost = cost;
        let nodes = self.trace(goal, Some(start));
        self.tag_route(&nodes);
        log::debug!(
            "astar[{mode:?}]: {start} -> {goal} costs {cost} over {} nodes ({} expanded)",
            nodes.len(),
            settled.expanded
        );
        Ok(Route { nodes, cost })
    }

    /// Tag the nodes of a route [`NodeState::OnPath`]. The last node (the
    /// goal) is always tagged; the others keep a [`NodeState::Hovered`] tag.
    fn tag_route(&mut self, nodes: &[usize]) {
        let last = nodes.len().saturating_sub(1);
        for (i, &id) in nodes.iter().enumerate() {
            if let Some(node) = self.node_mut(id) {
                if i == last || node.state != NodeState::Hovered {
                    node.state = NodeState::OnPath;
                }
            }
        }
    }

    /// Store in every node but `goal` the rounded Euclidean distance to it.
    /// The goal keeps whatever estimate it already had.
    fn estimate_to(&mut self, goal: usize) {
        let Some(target) = self.node(goal).map(|n| n.position) else {
            return;
        };
        for node in self.nodes_mut().filter(|n| n.id != goal) {
            node.heuristic = euclidean_rounded(node.position, target);
        }
    }
}

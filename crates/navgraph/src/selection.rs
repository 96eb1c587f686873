//! Query selection: choosing start and goal nodes and running the requested
//! route search. Hosts translate their own input events into these calls.

use std::fmt;

use navgraph_core::Point;

use crate::error::SearchError;
use crate::graph::Graph;
use crate::node::NodeState;
use crate::path::Route;

impl<T> Graph<T> {
    /// First live node (in index order) whose position lies within `radius`
    /// of `p`. Distances are truncated to whole units before comparing.
    pub fn pick(&self, p: Point, radius: u32) -> Option<usize> {
        self.nodes()
            .find(|n| (n.position.distance(p) as u32) < radius)
            .map(|n| n.id)
    }

    /// Move the hover highlight to `target`.
    ///
    /// Only a [`NodeState::Normal`] node takes the highlight, and every other
    /// hovered node goes back to normal.
    pub fn hover(&mut self, target: Option<usize>) {
        for node in self.nodes_mut() {
            if Some(node.id) == target {
                if node.state == NodeState::Normal {
                    node.state = NodeState::Hovered;
                }
            } else if node.state == NodeState::Hovered {
                node.state = NodeState::Normal;
            }
        }
    }

    /// Select `id` as the start node, or as the goal if a start is already
    /// chosen. Choosing a goal requests a search; choosing another one
    /// replaces it and returns the old goal to [`NodeState::Normal`].
    pub fn select(&mut self, id: usize) -> Result<(), SearchError> {
        if !self.contains(id) {
            return Err(SearchError::MissingNode(id));
        }
        if self.start.is_none() {
            if let Some(node) = self.node_mut(id) {
                node.state = NodeState::StartSelected;
            }
            self.start = Some(id);
            return Ok(());
        }

        if let Some(old) = self.goal.filter(|&g| g != id).and_then(|g| self.node_mut(g)) {
            if old.state == NodeState::GoalSelected {
                old.state = NodeState::Normal;
            }
        }
        if let Some(node) = self.node_mut(id) {
            node.state = NodeState::GoalSelected;
        }
        self.goal = Some(id);
        self.search_requested = true;
        Ok(())
    }

    /// Run the search requested by [`select`](Self::select), if any.
    ///
    /// The request is consumed whether or not a route exists.
    pub fn run_requested(&mut self) -> Option<Result<Route, SearchError>> {
        if !self.search_requested {
            return None;
        }
        self.search_requested = false;
        let (start, goal) = (self.start?, self.goal?);
        Some(self.astar(start, goal))
    }

    /// Resolve both labels with [`find`](Self::find) and run
    /// [`astar`](Self::astar) between them.
    pub fn route_by_label(&mut self, start: &T, goal: &T) -> Result<Route, SearchError>
    where
        T: PartialEq + fmt::Display,
    {
        let s = self
            .find(start)
            .ok_or_else(|| SearchError::UnknownLabel(start.to_string()))?;
        let g = self
            .find(goal)
            .ok_or_else(|| SearchError::UnknownLabel(goal.to_string()))?;
        self.start = Some(s);
        self.goal = Some(g);
        self.astar(s, g)
    }

    #[inline]
    pub fn start_selected(&self) -> Option<usize> {
        self.start
    }

    #[inline]
    pub fn goal_selected(&self) -> Option<usize> {
        self.goal
    }

    #[inline]
    pub fn search_requested(&self) -> bool {
        self.search_requested
    }

    /// Cost of the last route found, 0 before any.
    #[inline]
    pub fn last_path_cost(&self) -> u32 {
        self.path_cost
    }
}

use crate::config::SearchMode;
use crate::error::SearchError;
use crate::graph::Graph;

impl<T> Graph<T> {
    /// Cheapest cost from `start` to `goal` by uniform-cost search.
    ///
    /// Resets every node first. On success the start node's heuristic is set
    /// to [`goal_discount_percent`](crate::SearchConfig::goal_discount_percent)
    /// of the goal cost (90% by default), an underestimate later searches
    /// can read back. The route itself is left in the `previous` links; see
    /// [`path_to`](Self::path_to).
    pub fn uniform_cost(&mut self, start: usize, goal: usize) -> Result<u32, SearchError> {
        self.check_endpoints(start, goal)?;
        self.reset_nodes();

        let settled = self.best_first(start, goal, SearchMode::UniformCost, false);
        let Some(cost) = settled.cost else {
            log::debug!(
                "ucs: no path {start} -> {goal} ({} nodes expanded)",
                settled.expanded
            );
            return Err(SearchError::NoPath { start, goal });
        };
        log::debug!(
            "ucs: {start} -> {goal} costs {cost} ({} nodes expanded)",
            settled.expanded
        );

        let discount = u64::from(self.config.goal_discount_percent);
        let estimate = u64::from(cost) * discount / 100;
        if let Some(node) = self.node_mut(start) {
            node.heuristic = u32::try_from(estimate).unwrap_or(u32::MAX);
        }
        Ok(cost)
    }

    pub(crate) fn check_endpoints(&self, start: usize, goal: usize) -> Result<(), SearchError> {
        for id in [start, goal] {
            if !self.contains(id) {
                return Err(SearchError::MissingNode(id));
            }
        }
        Ok(())
    }
}

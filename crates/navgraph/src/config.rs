/// Priority used to order the open set of [`Graph::astar`](crate::Graph::astar).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SearchMode {
    /// Order by cumulative cost only. Heuristics are computed and exposed
    /// but never consulted, so the search expands like uniform-cost search.
    #[default]
    UniformCost,
    /// Order by cumulative cost plus the Euclidean estimate to the goal.
    ///
    /// Rounded arc weights can sum to less than the rounded straight-line
    /// distance, so the estimate may overshoot. The search then keeps going
    /// past the first goal pop until nothing left open can beat it, which
    /// keeps the returned cost minimal.
    AStar,
}

impl SearchMode {
    /// Heap key for a node with cumulative `cost` and estimate `heuristic`.
    #[inline]
    pub(crate) fn key(self, cost: u32, heuristic: u32) -> u64 {
        match self {
            Self::UniformCost => u64::from(cost),
            Self::AStar => u64::from(cost) + u64::from(heuristic),
        }
    }

    /// Whether the first goal pop ends the search.
    #[inline]
    pub(crate) fn stops_at_goal(self) -> bool {
        matches!(self, Self::UniformCost)
    }
}

/// Tunables for the route searches.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchConfig {
    pub mode: SearchMode,
    /// Percentage of the goal cost that [`Graph::uniform_cost`](crate::Graph::uniform_cost)
    /// stores as the start node's heuristic.
    pub goal_discount_percent: u32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            mode: SearchMode::UniformCost,
            goal_discount_percent: 90,
        }
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn partial_config_fills_defaults() {
        let cfg: SearchConfig = serde_json::from_str(r#"{"mode":"a_star"}"#).unwrap();
        assert_eq!(cfg.mode, SearchMode::AStar);
        assert_eq!(cfg.goal_discount_percent, 90);
    }
}

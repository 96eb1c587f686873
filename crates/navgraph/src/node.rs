use navgraph_core::Point;

/// Sentinel cost of a node no search has reached yet.
pub const UNREACHABLE: u32 = u32::MAX;

/// Presentation status of a node.
///
/// Searches and selection write it; no algorithm ever reads it back.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum NodeState {
    #[default]
    Normal,
    /// Part of the last reconstructed route.
    OnPath,
    /// Discovered or relaxed by a running route search.
    Visited,
    /// Under the host's pointer.
    Hovered,
    StartSelected,
    GoalSelected,
}

/// A directed, weighted edge. Owned by its source node.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Arc {
    pub(crate) target: usize,
    pub(crate) weight: u32,
}

impl Arc {
    /// Index of the destination node.
    #[inline]
    pub fn target(&self) -> usize {
        self.target
    }

    #[inline]
    pub fn weight(&self) -> u32 {
        self.weight
    }
}

/// A graph vertex: user payload, position, and per-search bookkeeping.
#[derive(Clone, Debug)]
pub struct Node<T> {
    pub(crate) id: usize,
    pub(crate) data: T,
    pub(crate) position: Point,
    pub(crate) marked: bool,
    pub(crate) state: NodeState,
    pub(crate) cost: u32,
    pub(crate) heuristic: u32,
    pub(crate) previous: Option<usize>,
    pub(crate) arcs: Vec<Arc>,
}

impl<T> Node<T> {
    pub(crate) fn new(id: usize, data: T, position: Point) -> Self {
        Self {
            id,
            data,
            position,
            marked: false,
            state: NodeState::Normal,
            cost: UNREACHABLE,
            heuristic: 0,
            previous: None,
            arcs: Vec::new(),
        }
    }

    /// Slot index of this node in its graph.
    #[inline]
    pub fn id(&self) -> usize {
        self.id
    }

    #[inline]
    pub fn data(&self) -> &T {
        &self.data
    }

    #[inline]
    pub fn position(&self) -> Point {
        self.position
    }

    /// Whether the current traversal has already reached this node.
    #[inline]
    pub fn is_marked(&self) -> bool {
        self.marked
    }

    #[inline]
    pub fn state(&self) -> NodeState {
        self.state
    }

    /// Cumulative cost from the last search's start, or [`UNREACHABLE`].
    #[inline]
    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Estimated remaining cost to the last goal.
    #[inline]
    pub fn heuristic(&self) -> u32 {
        self.heuristic
    }

    /// The node this one was reached from in the last search.
    #[inline]
    pub fn previous(&self) -> Option<usize> {
        self.previous
    }

    /// Outgoing arcs in insertion order.
    #[inline]
    pub fn arcs(&self) -> &[Arc] {
        &self.arcs
    }

    /// The outgoing arc to `target`, if any.
    pub fn arc_to(&self, target: usize) -> Option<&Arc> {
        self.arcs.iter().find(|a| a.target == target)
    }

    /// Clear every per-search field except the heuristic.
    pub(crate) fn reset(&mut self) {
        self.marked = false;
        self.cost = UNREACHABLE;
        self.previous = None;
        self.state = NodeState::Normal;
    }
}

/// Read-only snapshot of a node for renderers.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeView {
    pub id: usize,
    pub position: Point,
    pub state: NodeState,
    /// `None` while the node is still at [`UNREACHABLE`].
    pub cost: Option<u32>,
    pub heuristic: u32,
}

impl<T> From<&Node<T>> for NodeView {
    fn from(node: &Node<T>) -> Self {
        Self {
            id: node.id,
            position: node.position,
            state: node.state,
            cost: (node.cost != UNREACHABLE).then_some(node.cost),
            heuristic: node.heuristic,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_node_is_unreached() {
        let n = Node::new(3, "C", Point::new(3, 4));
        assert_eq!(n.id(), 3);
        assert_eq!(*n.data(), "C");
        assert!(!n.is_marked());
        assert_eq!(n.cost(), UNREACHABLE);
        assert_eq!(n.previous(), None);
        assert_eq!(n.state(), NodeState::Normal);
        assert!(n.arcs().is_empty());
    }

    #[test]
    fn reset_keeps_heuristic() {
        let mut n = Node::new(0, (), Point::ZERO);
        n.marked = true;
        n.cost = 12;
        n.previous = Some(4);
        n.state = NodeState::OnPath;
        n.heuristic = 9;
        n.reset();
        assert!(!n.marked);
        assert_eq!(n.cost, UNREACHABLE);
        assert_eq!(n.previous, None);
        assert_eq!(n.state, NodeState::Normal);
        assert_eq!(n.heuristic, 9);
    }

    #[test]
    fn view_hides_sentinel_cost() {
        let mut n = Node::new(1, (), Point::new(2, 2));
        assert_eq!(NodeView::from(&n).cost, None);
        n.cost = 5;
        let v = NodeView::from(&n);
        assert_eq!(v.cost, Some(5));
        assert_eq!(v.position, Point::new(2, 2));
    }
}

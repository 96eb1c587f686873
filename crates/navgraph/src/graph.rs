use navgraph_core::Point;

use crate::config::SearchConfig;
use crate::error::GraphError;
use crate::node::{Arc, Node, NodeView};

// ---------------------------------------------------------------------------
// Graph
// ---------------------------------------------------------------------------

/// Fixed-capacity directed graph of [`Node`]s addressed by slot index.
///
/// Besides the nodes, the graph holds the state of one route query: the
/// selected start and goal, whether a search has been requested, and the
/// cost of the last route found. [`reset_selected_nodes`](Self::reset_selected_nodes)
/// clears all of it at once.
#[derive(Clone, Debug)]
pub struct Graph<T> {
    pub(crate) nodes: Vec<Option<Node<T>>>,
    pub(crate) count: usize,
    pub(crate) config: SearchConfig,
    // query state
    pub(crate) start: Option<usize>,
    pub(crate) goal: Option<usize>,
    pub(crate) search_requested: bool,
    pub(crate) path_cost: u32,
    // scratch copy of the arcs being expanded
    pub(crate) abuf: Vec<Arc>,
}

impl<T> Graph<T> {
    /// Create an empty graph with room for `capacity` nodes.
    pub fn new(capacity: usize) -> Self {
        Self::with_config(capacity, SearchConfig::default())
    }

    /// Create an empty graph with explicit search settings.
    pub fn with_config(capacity: usize, config: SearchConfig) -> Self {
        let mut nodes = Vec::with_capacity(capacity);
        nodes.resize_with(capacity, || None);
        Self {
            nodes,
            count: 0,
            config,
            start: None,
            goal: None,
            search_requested: false,
            path_cost: 0,
            abuf: Vec::new(),
        }
    }

    /// Number of slots fixed at construction.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.nodes.len()
    }

    /// Number of live nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.count
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    #[inline]
    pub fn config(&self) -> SearchConfig {
        self.config
    }

    pub fn set_config(&mut self, config: SearchConfig) {
        self.config = config;
    }

    /// The node at `index`, if the slot is occupied.
    #[inline]
    pub fn node(&self, index: usize) -> Option<&Node<T>> {
        self.nodes.get(index).and_then(Option::as_ref)
    }

    #[inline]
    pub(crate) fn node_mut(&mut self, index: usize) -> Option<&mut Node<T>> {
        self.nodes.get_mut(index).and_then(Option::as_mut)
    }

    #[inline]
    pub fn contains(&self, index: usize) -> bool {
        self.node(index).is_some()
    }

    /// Live nodes in index order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node<T>> {
        self.nodes.iter().flatten()
    }

    pub(crate) fn nodes_mut(&mut self) -> impl Iterator<Item = &mut Node<T>> {
        self.nodes.iter_mut().flatten()
    }

    /// Presentation snapshot of every live node.
    pub fn views(&self) -> impl Iterator<Item = NodeView> + '_ {
        self.nodes().map(NodeView::from)
    }

    /// Index of the first node whose payload equals `data`.
    pub fn find(&self, data: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.nodes().find(|n| n.data == *data).map(|n| n.id)
    }

    // -----------------------------------------------------------------------
    // Structure
    // -----------------------------------------------------------------------

    /// Place a new node at `index`.
    ///
    /// Fails without touching the graph if the slot is taken or lies beyond
    /// the capacity.
    pub fn add_node(&mut self, data: T, index: usize, position: Point) -> Result<(), GraphError> {
        let capacity = self.capacity();
        let slot = self
            .nodes
            .get_mut(index)
            .ok_or(GraphError::OutOfCapacity { index, capacity })?;
        if slot.is_some() {
            return Err(GraphError::DuplicateNodeIndex(index));
        }
        *slot = Some(Node::new(index, data, position));
        self.count += 1;
        log::trace!("node {index} placed at {position}");
        Ok(())
    }

    /// Remove the node at `index` along with every arc that points at it.
    ///
    /// Returns the payload, or `None` if the slot was already empty.
    pub fn remove_node(&mut self, index: usize) -> Option<T> {
        if !self.contains(index) {
            return None;
        }
        for node in self.nodes_mut() {
            node.arcs.retain(|a| a.target != index);
        }
        let node = self.nodes[index].take()?;
        self.count -= 1;
        for sel in [&mut self.start, &mut self.goal] {
            if *sel == Some(index) {
                *sel = None;
                self.search_requested = false;
            }
        }
        Some(node.data)
    }

    /// Append an arc `from -> to` to `from`'s arc list.
    ///
    /// Self-loops are accepted; a second arc between the same ordered pair
    /// is not.
    pub fn add_arc(&mut self, from: usize, to: usize, weight: u32) -> Result<(), GraphError> {
        if !self.contains(to) {
            return Err(GraphError::MissingEndpoint { from, to });
        }
        let node = self
            .node_mut(from)
            .ok_or(GraphError::MissingEndpoint { from, to })?;
        if node.arc_to(to).is_some() {
            return Err(GraphError::DuplicateArc { from, to });
        }
        node.arcs.push(Arc { target: to, weight });
        Ok(())
    }

    /// Delete the arc `from -> to`, returning it if it existed.
    pub fn remove_arc(&mut self, from: usize, to: usize) -> Option<Arc> {
        if !self.contains(to) {
            return None;
        }
        let node = self.node_mut(from)?;
        let pos = node.arcs.iter().position(|a| a.target == to)?;
        Some(node.arcs.remove(pos))
    }

    /// The arc `from -> to`, if both endpoints exist and are connected.
    pub fn arc(&self, from: usize, to: usize) -> Option<&Arc> {
        if !self.contains(to) {
            return None;
        }
        self.node(from)?.arc_to(to)
    }

    // -----------------------------------------------------------------------
    // Transient state
    // -----------------------------------------------------------------------

    /// Unmark every node.
    pub fn clear_marks(&mut self) {
        for node in self.nodes_mut() {
            node.marked = false;
        }
    }

    /// Return every node to its pre-search state: unmarked, unreached, no
    /// predecessor, [`NodeState::Normal`](crate::NodeState::Normal).
    /// Heuristics are left alone.
    pub fn reset_nodes(&mut self) {
        for node in self.nodes_mut() {
            node.reset();
        }
    }

    /// Discard the pending query: forget the selected start and goal, zero
    /// every heuristic, then [`reset_nodes`](Self::reset_nodes).
    pub fn reset_selected_nodes(&mut self) {
        self.start = None;
        self.goal = None;
        self.search_requested = false;
        self.path_cost = 0;
        for node in self.nodes_mut() {
            node.heuristic = 0;
        }
        self.reset_nodes();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{NodeState, UNREACHABLE};

    fn line(n: usize) -> Graph<usize> {
        let mut g = Graph::new(n);
        for i in 0..n {
            g.add_node(i, i, Point::new(i as i32, 0)).unwrap();
        }
        g
    }

    #[test]
    fn add_node_counts_and_rejects_duplicates() {
        let mut g = Graph::new(4);
        assert!(g.is_empty());
        g.add_node("A", 0, Point::ZERO).unwrap();
        g.add_node("B", 2, Point::new(3, 0)).unwrap();
        assert_eq!(g.len(), 2);

        assert_eq!(
            g.add_node("X", 2, Point::new(9, 9)),
            Err(GraphError::DuplicateNodeIndex(2))
        );
        assert_eq!(g.len(), 2);
        assert_eq!(*g.node(2).unwrap().data(), "B");
        assert_eq!(g.node(2).unwrap().position(), Point::new(3, 0));
    }

    #[test]
    fn add_node_beyond_capacity() {
        let mut g: Graph<()> = Graph::new(2);
        assert_eq!(
            g.add_node((), 2, Point::ZERO),
            Err(GraphError::OutOfCapacity { index: 2, capacity: 2 })
        );
        assert!(g.is_empty());
        assert!(g.node(7).is_none());
    }

    #[test]
    fn add_arc_once_per_pair() {
        let mut g = line(3);
        g.add_arc(0, 1, 5).unwrap();
        assert_eq!(g.add_arc(0, 1, 9), Err(GraphError::DuplicateArc { from: 0, to: 1 }));
        g.add_arc(1, 0, 2).unwrap();
        assert_eq!(g.node(0).unwrap().arcs().len(), 1);
        assert_eq!(g.arc(0, 1).unwrap().weight(), 5);
        assert_eq!(g.arc(1, 0).unwrap().weight(), 2);
    }

    #[test]
    fn add_arc_needs_both_endpoints() {
        let mut g = line(2);
        assert_eq!(g.add_arc(0, 5, 1), Err(GraphError::MissingEndpoint { from: 0, to: 5 }));
        assert_eq!(g.add_arc(9, 0, 1), Err(GraphError::MissingEndpoint { from: 9, to: 0 }));
        assert!(g.node(0).unwrap().arcs().is_empty());
    }

    #[test]
    fn self_loops_are_accepted() {
        let mut g = line(3);
        g.add_arc(2, 2, 5).unwrap();
        assert_eq!(g.arc(2, 2).unwrap().target(), 2);
        assert_eq!(g.add_arc(2, 2, 5), Err(GraphError::DuplicateArc { from: 2, to: 2 }));
    }

    #[test]
    fn arcs_keep_insertion_order() {
        let mut g = line(4);
        g.add_arc(0, 3, 1).unwrap();
        g.add_arc(0, 1, 1).unwrap();
        g.add_arc(0, 2, 1).unwrap();
        let targets: Vec<_> = g.node(0).unwrap().arcs().iter().map(Arc::target).collect();
        assert_eq!(targets, vec![3, 1, 2]);
    }

    #[test]
    fn remove_arc_then_lookup() {
        let mut g = line(2);
        g.add_arc(0, 1, 4).unwrap();
        assert_eq!(g.remove_arc(0, 1).map(|a| a.weight()), Some(4));
        assert!(g.arc(0, 1).is_none());
        assert!(g.remove_arc(0, 1).is_none());
        assert!(g.remove_arc(0, 8).is_none());
    }

    #[test]
    fn remove_node_sweeps_incoming_arcs() {
        let mut g = line(4);
        for from in [0, 1, 3] {
            g.add_arc(from, 2, 1).unwrap();
        }
        g.add_arc(2, 0, 1).unwrap();
        g.add_arc(0, 1, 1).unwrap();

        assert_eq!(g.remove_node(2), Some(2));
        assert_eq!(g.len(), 3);
        assert!(!g.contains(2));
        for node in g.nodes() {
            assert!(node.arcs().iter().all(|a| a.target() != 2));
        }
        assert!(g.arc(0, 1).is_some());
        assert_eq!(g.remove_node(2), None);
        assert_eq!(g.len(), 3);
    }

    #[test]
    fn removed_slot_can_be_refilled() {
        let mut g = line(3);
        g.remove_node(1);
        g.add_node(42, 1, Point::new(5, 5)).unwrap();
        assert_eq!(*g.node(1).unwrap().data(), 42);
        assert_eq!(g.len(), 3);
    }

    #[test]
    fn find_by_payload() {
        let mut g = Graph::new(3);
        g.add_node("A".to_string(), 0, Point::ZERO).unwrap();
        g.add_node("B".to_string(), 2, Point::ZERO).unwrap();
        assert_eq!(g.find(&"B".to_string()), Some(2));
        assert_eq!(g.find(&"Q".to_string()), None);
    }

    #[test]
    fn reset_nodes_is_idempotent() {
        let mut g = line(3);
        for node in g.nodes_mut() {
            node.marked = true;
            node.cost = 3;
            node.previous = Some(0);
            node.state = NodeState::Visited;
            node.heuristic = 2;
        }
        g.reset_nodes();
        let once: Vec<_> = g.views().collect();
        g.reset_nodes();
        let twice: Vec<_> = g.views().collect();
        assert_eq!(once, twice);
        for node in g.nodes() {
            assert!(!node.is_marked());
            assert_eq!(node.cost(), UNREACHABLE);
            assert_eq!(node.previous(), None);
            assert_eq!(node.state(), NodeState::Normal);
            assert_eq!(node.heuristic(), 2);
        }
    }

    #[test]
    fn reset_covers_sparse_slots() {
        let mut g = Graph::new(5);
        g.add_node((), 4, Point::ZERO).unwrap();
        g.node_mut(4).unwrap().marked = true;
        g.reset_nodes();
        assert!(!g.node(4).unwrap().is_marked());
    }

    #[test]
    fn clear_marks_only_touches_marks() {
        let mut g = line(2);
        for node in g.nodes_mut() {
            node.marked = true;
            node.cost = 1;
        }
        g.clear_marks();
        assert!(g.nodes().all(|n| !n.is_marked() && n.cost() == 1));
    }

    #[test]
    fn reset_selected_zeroes_heuristics() {
        let mut g = line(2);
        g.start = Some(0);
        g.goal = Some(1);
        g.search_requested = true;
        g.path_cost = 8;
        g.node_mut(1).unwrap().heuristic = 6;
        g.reset_selected_nodes();
        assert_eq!(g.start, None);
        assert_eq!(g.goal, None);
        assert!(!g.search_requested);
        assert_eq!(g.path_cost, 0);
        assert!(g.nodes().all(|n| n.heuristic() == 0));
    }
}

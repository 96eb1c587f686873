//! Depth-first and breadth-first walks.
//!
//! These use whatever marks the nodes already carry, so call
//! [`Graph::reset_nodes`] (or [`Graph::clear_marks`]) first.

use std::collections::VecDeque;

use crate::error::SearchError;
use crate::graph::Graph;
use crate::node::Node;

impl<T> Graph<T> {
    /// Visit every unmarked node reachable from `start`, depth first.
    ///
    /// Neighbours are taken in arc insertion order and each node is handed
    /// to `visit` before its own neighbours are explored, exactly as the
    /// recursive formulation would. A missing `start` is a no-op.
    pub fn depth_first(&mut self, start: usize, mut visit: impl FnMut(&Node<T>)) {
        let Some(node) = self.node_mut(start) else {
            return;
        };
        node.marked = true;
        visit(node);

        // (node, next arc to try)
        let mut stack: Vec<(usize, usize)> = vec![(start, 0)];
        while let Some(frame) = stack.last_mut() {
            let (ci, k) = *frame;
            let Some(arc) = self.node(ci).and_then(|n| n.arcs.get(k)).copied() else {
                stack.pop();
                continue;
            };
            frame.1 += 1;
            let Some(next) = self.node_mut(arc.target) else {
                continue;
            };
            if next.marked {
                continue;
            }
            next.marked = true;
            visit(next);
            stack.push((arc.target, 0));
        }
    }

    /// Visit every unmarked node reachable from `start` in level order,
    /// recording for each newly discovered node the node it was reached from.
    pub fn breadth_first(&mut self, start: usize, mut visit: impl FnMut(&Node<T>)) {
        let Some(node) = self.node_mut(start) else {
            return;
        };
        node.marked = true;
        let mut queue = VecDeque::from([start]);

        while let Some(ci) = queue.pop_front() {
            let Some(node) = self.node(ci) else {
                continue;
            };
            visit(node);
            self.enqueue_unmarked(ci, &mut queue, |_| false);
        }
    }

    /// Breadth-first search for the first node whose payload equals
    /// `target`, returning the route to it in start-to-target order.
    ///
    /// The start node is tested first. After that a node matches as soon as
    /// it shows up among the neighbours being scanned, before it is itself
    /// dequeued. `visit` is called on each node of the route, walking back
    /// from the match to `start`.
    pub fn breadth_first_search(
        &mut self,
        start: usize,
        target: &T,
        mut visit: impl FnMut(&Node<T>),
    ) -> Result<Vec<usize>, SearchError>
    where
        T: PartialEq,
    {
        let node = self.node_mut(start).ok_or(SearchError::MissingNode(start))?;
        node.marked = true;

        let found = if node.data == *target {
            Some(start)
        } else {
            let mut queue = VecDeque::from([start]);
            let mut found = None;
            while let Some(ci) = queue.pop_front() {
                found = self.enqueue_unmarked(ci, &mut queue, |n| n.data == *target);
                if found.is_some() {
                    break;
                }
            }
            found
        };

        let Some(found) = found else {
            log::debug!("bfs: target not reachable from {start}");
            return Err(SearchError::TargetNotFound);
        };

        let path = self.trace(found, Some(start));
        for &id in path.iter().rev() {
            if let Some(node) = self.node(id) {
                visit(node);
            }
        }
        log::debug!("bfs: reached {found} from {start} in {} hops", path.len() - 1);
        Ok(path)
    }

    /// Mark and enqueue the unmarked neighbours of `ci`, recording `ci` as
    /// their predecessor. Stops early at the first neighbour, marked or not,
    /// for which `stop` holds, and returns it.
    fn enqueue_unmarked(
        &mut self,
        ci: usize,
        queue: &mut VecDeque<usize>,
        stop: impl Fn(&Node<T>) -> bool,
    ) -> Option<usize> {
        let mut abuf = std::mem::take(&mut self.abuf);
        abuf.clear();
        if let Some(node) = self.node(ci) {
            abuf.extend_from_slice(&node.arcs);
        }

        let mut hit = None;
        for arc in abuf.iter() {
            let Some(n) = self.node_mut(arc.target) else {
                continue;
            };
            if !n.marked {
                n.marked = true;
                n.previous = Some(ci);
                queue.push_back(arc.target);
            }
            if stop(n) {
                hit = Some(arc.target);
                break;
            }
        }

        self.abuf = abuf;
        hit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use navgraph_core::Point;

    //     0 -> 1 -> 3
    //     |    ^
    //     v    |
    //     2 ---+     4 -> 0 (4 unreachable from 0)
    fn sample() -> Graph<char> {
        let mut g = Graph::new(6);
        for (i, c) in "ABCDE".chars().enumerate() {
            g.add_node(c, i, Point::new(i as i32, 0)).unwrap();
        }
        g.add_arc(0, 1, 1).unwrap();
        g.add_arc(0, 2, 1).unwrap();
        g.add_arc(1, 3, 1).unwrap();
        g.add_arc(2, 1, 1).unwrap();
        g.add_arc(4, 0, 1).unwrap();
        g
    }

    fn collect_dfs(g: &mut Graph<char>, start: usize) -> Vec<usize> {
        let mut seen = Vec::new();
        g.depth_first(start, |n| seen.push(n.id()));
        seen
    }

    #[test]
    fn dfs_preorder_in_arc_order() {
        let mut g = sample();
        assert_eq!(collect_dfs(&mut g, 0), vec![0, 1, 3, 2]);
        assert!(!g.node(4).unwrap().is_marked());
    }

    #[test]
    fn dfs_handles_cycles_and_self_loops() {
        let mut g = sample();
        g.add_arc(3, 0, 1).unwrap();
        g.add_arc(1, 1, 1).unwrap();
        assert_eq!(collect_dfs(&mut g, 0), vec![0, 1, 3, 2]);
    }

    #[test]
    fn dfs_from_missing_node_is_noop() {
        let mut g = sample();
        assert!(collect_dfs(&mut g, 5).is_empty());
        assert!(g.nodes().all(|n| !n.is_marked()));
    }

    #[test]
    fn dfs_respects_existing_marks() {
        let mut g = sample();
        collect_dfs(&mut g, 0);
        assert_eq!(collect_dfs(&mut g, 4), vec![4]);
        g.clear_marks();
        assert_eq!(collect_dfs(&mut g, 4), vec![4, 0, 1, 3, 2]);
    }

    #[test]
    fn dfs_deep_chain_does_not_recurse() {
        let n = 50_000;
        let mut g = Graph::new(n);
        for i in 0..n {
            g.add_node(i, i, Point::ZERO).unwrap();
        }
        for i in 1..n {
            g.add_arc(i - 1, i, 1).unwrap();
        }
        let mut count = 0;
        g.depth_first(0, |_| count += 1);
        assert_eq!(count, n);
    }

    #[test]
    fn bfs_level_order_with_predecessors() {
        let mut g = sample();
        let mut seen = Vec::new();
        g.breadth_first(0, |n| seen.push(n.id()));
        assert_eq!(seen, vec![0, 1, 2, 3]);
        assert_eq!(g.node(3).unwrap().previous(), Some(1));
        assert_eq!(g.node(1).unwrap().previous(), Some(0));
        assert_eq!(g.node(0).unwrap().previous(), None);
    }

    #[test]
    fn traversals_cover_the_same_component() {
        let mut g = sample();
        let mut dfs = collect_dfs(&mut g, 4);
        g.reset_nodes();
        let mut bfs = Vec::new();
        g.breadth_first(4, |n| bfs.push(n.id()));
        dfs.sort_unstable();
        bfs.sort_unstable();
        assert_eq!(dfs, vec![0, 1, 2, 3, 4]);
        assert_eq!(dfs, bfs);
    }

    #[test]
    fn targeted_bfs_returns_route() {
        let mut g = sample();
        let mut walked = Vec::new();
        let path = g.breadth_first_search(0, &'D', |n| walked.push(*n.data())).unwrap();
        assert_eq!(path, vec![0, 1, 3]);
        assert_eq!(walked, vec!['D', 'B', 'A']);
    }

    #[test]
    fn targeted_bfs_matches_start() {
        let mut g = sample();
        let path = g.breadth_first_search(2, &'C', |_| {}).unwrap();
        assert_eq!(path, vec![2]);
    }

    #[test]
    fn targeted_bfs_reports_not_found() {
        let mut g = sample();
        assert_eq!(
            g.breadth_first_search(0, &'E', |_| {}),
            Err(SearchError::TargetNotFound)
        );
        assert_eq!(
            g.breadth_first_search(0, &'Z', |_| {}),
            Err(SearchError::TargetNotFound)
        );
        assert_eq!(
            g.breadth_first_search(5, &'A', |_| {}),
            Err(SearchError::MissingNode(5))
        );
    }

    #[test]
    fn targeted_bfs_stops_at_discovery() {
        let mut g = sample();
        g.breadth_first_search(0, &'B', |_| {}).unwrap();
        // 0's arcs are scanned in order, so C is never discovered.
        assert!(g.node(1).unwrap().is_marked());
        assert!(!g.node(2).unwrap().is_marked());
    }
}

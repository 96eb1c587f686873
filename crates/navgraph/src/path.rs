use crate::graph::Graph;

/// A reconstructed route: node indices from start to goal, both inclusive.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    pub nodes: Vec<usize>,
    pub cost: u32,
}

impl Route {
    #[inline]
    pub fn start(&self) -> Option<usize> {
        self.nodes.first().copied()
    }

    #[inline]
    pub fn goal(&self) -> Option<usize> {
        self.nodes.last().copied()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl<T> Graph<T> {
    /// Walk `previous` links back from `end` and return the chain in
    /// forward order, ending at `end`.
    ///
    /// The walk stops at the first node without a predecessor. Call it after
    /// a search to read the route that search left behind.
    pub fn path_to(&self, end: usize) -> Vec<usize> {
        self.trace(end, None)
    }

    /// Like [`path_to`](Self::path_to) but also stops once `origin` is
    /// reached. The walk is bounded by the live count, so stale links left
    /// by a caller that skipped a reset cannot loop.
    pub(crate) fn trace(&self, end: usize, origin: Option<usize>) -> Vec<usize> {
        let mut path = Vec::new();
        let mut cur = self.node(end).map(|n| n.id());
        while let Some(ci) = cur {
            path.push(ci);
            if Some(ci) == origin || path.len() > self.count {
                break;
            }
            cur = self.node(ci).and_then(|n| n.previous());
        }
        path.reverse();
        path
    }

    /// Sum of arc weights along `nodes`, or `None` if two consecutive nodes
    /// are not connected.
    pub fn path_weight(&self, nodes: &[usize]) -> Option<u32> {
        nodes.windows(2).try_fold(0u32, |acc, pair| {
            let arc = self.arc(pair[0], pair[1])?;
            Some(acc.saturating_add(arc.weight()))
        })
    }
}

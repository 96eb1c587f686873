use std::fmt;

/// Errors returned by the structural graph operations.
///
/// None of these leave the graph modified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// `add_node` on a slot that already holds a node.
    DuplicateNodeIndex(usize),
    /// An arc operation referenced a slot with no node in it.
    MissingEndpoint { from: usize, to: usize },
    /// An arc from `from` to `to` already exists.
    DuplicateArc { from: usize, to: usize },
    /// The index lies outside the capacity fixed at construction.
    OutOfCapacity { index: usize, capacity: usize },
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateNodeIndex(i) => write!(f, "node slot {i} is already occupied"),
            Self::MissingEndpoint { from, to } => {
                write!(f, "arc {from} -> {to} references a missing node")
            }
            Self::DuplicateArc { from, to } => write!(f, "arc {from} -> {to} already exists"),
            Self::OutOfCapacity { index, capacity } => {
                write!(f, "node index {index} exceeds graph capacity {capacity}")
            }
        }
    }
}

impl std::error::Error for GraphError {}

/// Errors returned by the searches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The start or goal slot holds no node.
    MissingNode(usize),
    /// No node carries the requested label.
    UnknownLabel(String),
    /// A targeted breadth-first search exhausted its queue.
    TargetNotFound,
    /// The goal cannot be reached from the start.
    NoPath { start: usize, goal: usize },
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingNode(i) => write!(f, "no node at index {i}"),
            Self::UnknownLabel(label) => write!(f, "no node labelled \u{201c}{label}\u{201d}"),
            Self::TargetNotFound => f.write_str("target not reachable from the start node"),
            Self::NoPath { start, goal } => write!(f, "there is no path from node {start} to {goal}"),
        }
    }
}

impl std::error::Error for SearchError {}

//! Directed graph container with traversal and route search.
//!
//! A [`Graph`] owns a fixed number of node slots. Each [`Node`] carries a
//! payload, a position, its outgoing [`Arc`]s, and the bookkeeping the
//! searches write into it:
//!
//! - **Depth-first** traversal ([`Graph::depth_first`])
//! - **Breadth-first** traversal and targeted search ([`Graph::breadth_first`],
//!   [`Graph::breadth_first_search`])
//! - **Uniform-cost** search ([`Graph::uniform_cost`])
//! - **Route** search with Euclidean heuristics ([`Graph::astar`])
//!
//! Searches leave their results on the nodes (marks, costs, predecessors,
//! [`NodeState`] tags) so a renderer can read them through
//! [`Graph::views`]. Reset with [`Graph::reset_nodes`] before a traversal;
//! the cost searches reset on their own.
//!
//! # Ordering of route search
//!
//! | [`SearchMode`] | Open set ordered by |
//! |---|---|
//! | `UniformCost` (default) | cumulative cost |
//! | `AStar` | cumulative cost + heuristic |

mod astar;
mod config;
mod error;
mod frontier;
mod graph;
mod node;
mod path;
mod selection;
mod traversal;
mod ucs;

pub use config::{SearchConfig, SearchMode};
pub use error::{GraphError, SearchError};
pub use graph::Graph;
pub use navgraph_core::Point;
pub use node::{Arc, Node, NodeState, NodeView, UNREACHABLE};
pub use path::Route;

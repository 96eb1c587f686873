//! **navgraph-core** — geometry primitives shared by the *navgraph* crates.
//!
//! Node positions are integer points in screen coordinates; arc weights and
//! search heuristics are both derived from the rounded Euclidean distance
//! between them.

pub mod geom;

pub use geom::{Point, euclidean, euclidean_rounded};

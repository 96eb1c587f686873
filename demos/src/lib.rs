//! Flat-file loading for the navgraph command-line demo.
//!
//! Two plain-text inputs describe a graph:
//!
//! - a node file with one `label x y` record per line, in index order;
//! - an arc file with one `from to weight` record per line.
//!
//! Blank lines and lines starting with `#` are ignored. The weight column of
//! the arc file is informational only: every arc is weighted by the rounded
//! Euclidean distance between its endpoints so that weights and search
//! heuristics share a unit.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use navgraph::{Graph, GraphError};
use navgraph_core::{Point, euclidean_rounded};

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NodeRecord {
    pub label: String,
    pub position: Point,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ArcRecord {
    pub from: usize,
    pub to: usize,
    /// Weight as written in the file; replaced when the graph is built.
    pub raw_weight: i64,
}

/// How records are turned into a graph.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LoaderConfig {
    /// Factor applied to every node coordinate.
    pub position_scale: f64,
    /// Graph capacity; defaults to the number of node records.
    pub capacity: Option<usize>,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            position_scale: 1.0,
            capacity: None,
        }
    }
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors that can occur while loading a graph description.
#[derive(Debug)]
pub enum LoadError {
    Io { path: PathBuf, source: std::io::Error },
    /// A record did not have the expected shape.
    Parse { line: usize, message: String },
    Graph(GraphError),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "{}: {source}", path.display()),
            Self::Parse { line, message } => write!(f, "line {line}: {message}"),
            Self::Graph(e) => write!(f, "invalid graph: {e}"),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse { .. } => None,
            Self::Graph(e) => Some(e),
        }
    }
}

impl From<GraphError> for LoadError {
    fn from(e: GraphError) -> Self {
        Self::Graph(e)
    }
}

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

/// Non-empty, non-comment lines as (1-based line number, fields).
fn records(text: &str) -> impl Iterator<Item = (usize, Vec<&str>)> {
    text.lines().enumerate().filter_map(|(i, line)| {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            None
        } else {
            Some((i + 1, line.split_whitespace().collect()))
        }
    })
}

fn field<F: FromStr>(line: usize, name: &str, raw: &str) -> Result<F, LoadError> {
    raw.parse().map_err(|_| LoadError::Parse {
        line,
        message: format!("invalid {name} \u{201c}{raw}\u{201d}"),
    })
}

fn expect_arity(line: usize, fields: &[&str], shape: &str) -> Result<(), LoadError> {
    if fields.len() == 3 {
        Ok(())
    } else {
        Err(LoadError::Parse {
            line,
            message: format!("expected `{shape}`, found {} fields", fields.len()),
        })
    }
}

/// Parse `label x y` records.
pub fn parse_nodes(text: &str) -> Result<Vec<NodeRecord>, LoadError> {
    records(text)
        .map(|(line, f)| -> Result<NodeRecord, LoadError> {
            expect_arity(line, &f, "label x y")?;
            Ok(NodeRecord {
                label: f[0].to_string(),
                position: Point::new(field(line, "x", f[1])?, field(line, "y", f[2])?),
            })
        })
        .collect()
}

/// Parse `from to weight` records.
pub fn parse_arcs(text: &str) -> Result<Vec<ArcRecord>, LoadError> {
    records(text)
        .map(|(line, f)| -> Result<ArcRecord, LoadError> {
            expect_arity(line, &f, "from to weight")?;
            Ok(ArcRecord {
                from: field(line, "from index", f[0])?,
                to: field(line, "to index", f[1])?,
                raw_weight: field(line, "weight", f[2])?,
            })
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Building
// ---------------------------------------------------------------------------

/// Build a graph from parsed records.
///
/// Node `i` goes in slot `i`. Arcs are weighted by the rounded distance
/// between their endpoints; a repeated arc is logged and skipped, while an
/// arc naming a missing node is an error.
pub fn build_graph(
    nodes: &[NodeRecord],
    arcs: &[ArcRecord],
    cfg: &LoaderConfig,
) -> Result<Graph<String>, LoadError> {
    let mut graph = Graph::new(cfg.capacity.unwrap_or(nodes.len()));
    for (index, rec) in nodes.iter().enumerate() {
        let position = rec.position.scaled(cfg.position_scale);
        graph.add_node(rec.label.clone(), index, position)?;
    }

    for rec in arcs {
        let (Some(from), Some(to)) = (graph.node(rec.from), graph.node(rec.to)) else {
            return Err(GraphError::MissingEndpoint {
                from: rec.from,
                to: rec.to,
            }
            .into());
        };
        let weight = euclidean_rounded(from.position(), to.position());
        if i64::from(weight) != rec.raw_weight {
            log::trace!(
                "arc {} -> {}: weight {} replaced by distance {}",
                rec.from,
                rec.to,
                rec.raw_weight,
                weight
            );
        }
        match graph.add_arc(rec.from, rec.to, weight) {
            Ok(()) => {}
            Err(e @ GraphError::DuplicateArc { .. }) => log::warn!("skipping arc: {e}"),
            Err(e) => return Err(e.into()),
        }
    }

    log::debug!("loaded {} nodes and {} arc records", graph.len(), arcs.len());
    Ok(graph)
}

/// Read, parse, and build in one step.
pub fn load_files(
    nodes_path: &Path,
    arcs_path: &Path,
    cfg: &LoaderConfig,
) -> Result<Graph<String>, LoadError> {
    let read = |path: &Path| {
        std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })
    };
    let nodes = parse_nodes(&read(nodes_path)?)?;
    let arcs = parse_arcs(&read(arcs_path)?)?;
    build_graph(&nodes, &arcs, cfg)
}

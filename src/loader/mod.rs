//! Edge-list loading
//!
//! Reads the edge-list text format (see [`edge_list`]) into a [`Graph`].
//! Two modes are supported:
//! - best-effort (default): never fails. A missing file adds nothing and a
//!   damaged file adds the edges read before the damage.
//! - strict: any I/O or format problem is an error and nothing is added.
//!
//! In either mode, rejected edges (self-loops, duplicates) are simply not
//! counted.

pub mod edge_list;

pub use edge_list::{parse_edge_list, EdgeList, EdgeRecord, ParseStop};

use crate::graph::Graph;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Loader errors
#[derive(Error, Debug)]
pub enum LoadError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Input has no edge count
    #[error("Missing edge count")]
    MissingEdgeCount,

    /// Edge count is not a non-negative integer
    #[error("Invalid edge count: {0}")]
    InvalidEdgeCount(String),

    /// An edge line could not be parsed
    #[error("Malformed edge on line {line}: {reason}")]
    MalformedLine { line: usize, reason: String },

    /// Fewer edge lines than announced
    #[error("Expected {expected} edges, found {found}")]
    Truncated { expected: usize, found: usize },
}

pub type LoadResult<T> = Result<T, LoadError>;

/// How to treat problems in the input
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LoadMode {
    /// Load whatever can be read and report nothing
    #[default]
    BestEffort,
    /// Fail on any I/O or format problem
    Strict,
}

/// Loader configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadConfig {
    pub mode: LoadMode,
}

impl LoadConfig {
    pub fn strict() -> Self {
        LoadConfig { mode: LoadMode::Strict }
    }

    pub fn is_strict(&self) -> bool {
        self.mode == LoadMode::Strict
    }
}

/// Load an edge-list file into `graph`, returning the number of edges added
pub fn load_file(graph: &mut Graph, path: &Path, config: &LoadConfig) -> LoadResult<usize> {
    info!("Loading edge list from {:?}", path);
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if !config.is_strict() => {
            warn!("Could not open {:?}: {}; graph left unchanged", path, e);
            return Ok(0);
        }
        Err(e) => return Err(e.into()),
    };
    load_reader(graph, BufReader::new(file), config)
}

/// Load an edge list from a reader
///
/// Input that is not valid UTF-8 is an error in strict mode. Best-effort mode
/// replaces the offending bytes and keeps loading.
pub fn load_reader<R: BufRead>(graph: &mut Graph, mut reader: R, config: &LoadConfig) -> LoadResult<usize> {
    let mut bytes = Vec::new();
    if let Err(e) = reader.read_to_end(&mut bytes) {
        if config.is_strict() {
            return Err(e.into());
        }
        warn!("Read failed: {}; graph left unchanged", e);
        return Ok(0);
    }

    match String::from_utf8(bytes) {
        Ok(input) => load_str(graph, &input, config),
        Err(e) if config.is_strict() => Err(io::Error::new(io::ErrorKind::InvalidData, e.utf8_error()).into()),
        Err(e) => {
            warn!("Edge list is not valid UTF-8: {}; decoding lossily", e.utf8_error());
            let input = String::from_utf8_lossy(e.as_bytes()).into_owned();
            load_str(graph, &input, config)
        }
    }
}

/// Load an edge list held in memory
pub fn load_str(graph: &mut Graph, input: &str, config: &LoadConfig) -> LoadResult<usize> {
    let list = match parse_edge_list(input) {
        Ok(list) => list,
        Err(e) if !config.is_strict() => {
            warn!("Unreadable edge list: {}", e);
            return Ok(0);
        }
        Err(e) => return Err(e),
    };

    if let Some(stop) = &list.stop {
        if config.is_strict() {
            return Err(stop.clone().into());
        }
        warn!(
            "Edge list declared {} edges but only {} could be read",
            list.declared,
            list.records.len()
        );
    }

    Ok(apply(graph, &list.records))
}

/// Add parsed records to the graph, returning how many were accepted
pub fn apply(graph: &mut Graph, records: &[EdgeRecord]) -> usize {
    let mut added = 0;
    for record in records {
        if graph.add(&record.source, &record.target, record.weight) {
            added += 1;
        }
    }

    let rejected = records.len() - added;
    if rejected > 0 {
        debug!("{} edges rejected as self-loops or duplicates", rejected);
    }
    info!(
        "Loaded {} edges ({} vertices, {} edges total)",
        added,
        graph.num_vertices(),
        graph.num_edges()
    );
    added
}

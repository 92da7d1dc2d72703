//! Edge-list file ingestion
//!
//! Format: the first token is the number of edge records `N`, followed by `N`
//! records of three whitespace-separated tokens `from to weight`. Tokens are
//! read as a whitespace stream, so line breaks carry no meaning; tokens after
//! the last record are ignored.
//!
//! Loading is transactional: the file is fully parsed and applied to a copy of
//! the graph, which replaces the original only on success.

use crate::config::GraphConfig;
use crate::graph::{GraphError, GraphStore, Weight};
use serde::{Deserialize, Serialize};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Missing edge count")]
    MissingEdgeCount,

    #[error("Invalid edge count '{0}'")]
    InvalidEdgeCount(String),

    #[error("Edge record {record} is truncated ({expected} records declared)")]
    TruncatedRecord { record: usize, expected: usize },

    #[error("Edge record {record}: invalid weight '{value}'")]
    InvalidWeight { record: usize, value: String },

    #[error("Edge record {record} rejected: {source}")]
    RejectedRecord {
        record: usize,
        #[source]
        source: GraphError,
    },
}

pub type LoadResult<T> = Result<T, LoadError>;

/// One parsed `from to weight` record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeRecord {
    pub from: String,
    pub to: String,
    pub weight: Weight,
}

/// Outcome of a successful load
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadReport {
    /// Records declared and parsed
    pub records: usize,
    /// Records that created an edge
    pub connected: usize,
    /// Self-loop or duplicate records left out
    pub skipped: usize,
}

/// Parse an edge list without touching any graph
pub fn parse_edge_list(input: &str) -> LoadResult<Vec<EdgeRecord>> {
    let mut tokens = input.split_whitespace();

    let count_token = tokens.next().ok_or(LoadError::MissingEdgeCount)?;
    let expected: usize = count_token
        .parse()
        .map_err(|_| LoadError::InvalidEdgeCount(count_token.to_string()))?;

    // The declared count is untrusted; records grow as they are read
    let mut records = Vec::new();
    for record in 1..=expected {
        let truncated = || LoadError::TruncatedRecord { record, expected };
        let from = tokens.next().ok_or_else(truncated)?;
        let to = tokens.next().ok_or_else(truncated)?;
        let weight_token = tokens.next().ok_or_else(truncated)?;
        let weight = weight_token.parse().map_err(|_| LoadError::InvalidWeight {
            record,
            value: weight_token.to_string(),
        })?;

        records.push(EdgeRecord {
            from: from.to_string(),
            to: to.to_string(),
            weight,
        });
    }

    Ok(records)
}

/// Feeds edge-list records into a graph through `connect`
#[derive(Debug, Clone, Default)]
pub struct EdgeListLoader {
    /// Fail on records `connect` refuses instead of skipping them
    pub strict: bool,
}

impl EdgeListLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn strict() -> Self {
        EdgeListLoader { strict: true }
    }

    pub fn from_config(config: &GraphConfig) -> Self {
        EdgeListLoader {
            strict: config.strict_load,
        }
    }

    pub fn load_str(&self, graph: &mut GraphStore, input: &str) -> LoadResult<LoadReport> {
        let records = parse_edge_list(input)?;
        let mut scratch = graph.clone();
        let mut report = LoadReport {
            records: records.len(),
            ..LoadReport::default()
        };

        for (i, rec) in records.iter().enumerate() {
            match scratch.try_connect(&rec.from, &rec.to, rec.weight) {
                Ok(()) => report.connected += 1,
                Err(source) if self.strict => {
                    return Err(LoadError::RejectedRecord { record: i + 1, source });
                }
                Err(reason) => {
                    debug!("Skipping edge record {}: {}", i + 1, reason);
                    report.skipped += 1;
                }
            }
        }

        if report.skipped > 0 {
            warn!("Skipped {} of {} edge records", report.skipped, report.records);
        }
        *graph = scratch;
        Ok(report)
    }

    pub fn load_reader(&self, graph: &mut GraphStore, mut reader: impl Read) -> LoadResult<LoadReport> {
        let mut input = String::new();
        reader.read_to_string(&mut input)?;
        self.load_str(graph, &input)
    }

    pub fn load_file(&self, graph: &mut GraphStore, path: impl AsRef<Path>) -> LoadResult<LoadReport> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|source| LoadError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let report = self.load_reader(graph, io::BufReader::new(file))?;
        info!(
            "Loaded {:?}: {} records, {} connected, {} skipped",
            path, report.records, report.connected, report.skipped
        );
        Ok(report)
    }
}

impl GraphStore {
    /// Read edges from an edge-list file, skipping refused records
    pub fn read_file(&mut self, path: impl AsRef<Path>) -> LoadResult<LoadReport> {
        EdgeListLoader::new().load_file(self, path)
    }

    /// Read edges from any reader, skipping refused records
    pub fn load_from_reader(&mut self, reader: impl Read) -> LoadResult<LoadReport> {
        EdgeListLoader::new().load_reader(self, reader)
    }

    /// Write the graph in edge-list format
    ///
    /// Undirected graphs write each mirrored pair once, so reloading into an
    /// undirected graph reproduces the same edges. Isolated vertices are not
    /// representable and are left out.
    pub fn write_edge_list(&self, mut writer: impl Write) -> io::Result<()> {
        let records: Vec<(&str, &str, Weight)> = if self.is_directed() {
            self.edges().collect()
        } else {
            let mut seen = std::collections::HashSet::new();
            self.edges()
                .filter(|&(from, to, _)| seen.insert(if from < to { (from, to) } else { (to, from) }))
                .collect()
        };

        writeln!(writer, "{}", records.len())?;
        for (from, to, weight) in records {
            writeln!(writer, "{} {} {}", from, to, weight)?;
        }
        writer.flush()
    }
}

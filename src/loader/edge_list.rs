//! Edge-list text format
//!
//! ```text
//! 3
//! A B 1
//! B C 3
//! A C 10
//! ```
//!
//! The first token is the number of edge lines that follow. Each edge line is
//! `source target weight`; anything after the weight is ignored, as is the
//! rest of the count line. Blank lines are skipped.

use super::{LoadError, LoadResult};
use crate::graph::Weight;

/// One parsed `source target weight` line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeRecord {
    pub source: String,
    pub target: String,
    pub weight: Weight,
}

/// Why parsing stopped before the declared number of edges
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseStop {
    /// Input ended early
    Truncated { expected: usize, found: usize },
    /// A line could not be read as an edge; nothing after it was parsed
    Malformed { line: usize, reason: String },
}

impl From<ParseStop> for LoadError {
    fn from(stop: ParseStop) -> Self {
        match stop {
            ParseStop::Truncated { expected, found } => LoadError::Truncated { expected, found },
            ParseStop::Malformed { line, reason } => LoadError::MalformedLine { line, reason },
        }
    }
}

/// Result of parsing an edge list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeList {
    /// Edge count announced on the first line
    pub declared: usize,
    /// Edges parsed before input ended or a bad line was hit
    pub records: Vec<EdgeRecord>,
    /// Set when fewer than `declared` records were parsed
    pub stop: Option<ParseStop>,
}

impl EdgeList {
    pub fn is_complete(&self) -> bool {
        self.stop.is_none()
    }
}

/// Parse an edge list
///
/// Only a missing or non-numeric edge count is an error here. A short or
/// damaged body is reported through [`EdgeList::stop`] so callers can decide
/// how strict to be.
pub fn parse_edge_list(input: &str) -> LoadResult<EdgeList> {
    let mut lines = input
        .lines()
        .enumerate()
        .map(|(idx, line)| (idx + 1, line))
        .filter(|(_, line)| !line.trim().is_empty());

    let (_, header) = lines.next().ok_or(LoadError::MissingEdgeCount)?;
    let token = header.split_whitespace().next().ok_or(LoadError::MissingEdgeCount)?;
    let declared: usize = token
        .parse()
        .map_err(|_| LoadError::InvalidEdgeCount(token.to_string()))?;

    let mut records = Vec::with_capacity(declared.min(1024));
    let mut stop = None;

    while records.len() < declared {
        let Some((number, line)) = lines.next() else {
            stop = Some(ParseStop::Truncated {
                expected: declared,
                found: records.len(),
            });
            break;
        };
        match parse_record(line) {
            Ok(record) => records.push(record),
            Err(reason) => {
                stop = Some(ParseStop::Malformed { line: number, reason });
                break;
            }
        }
    }

    Ok(EdgeList {
        declared,
        records,
        stop,
    })
}

fn parse_record(line: &str) -> Result<EdgeRecord, String> {
    let mut tokens = line.split_whitespace();
    let (Some(source), Some(target), Some(weight)) = (tokens.next(), tokens.next(), tokens.next()) else {
        return Err("expected `source target weight`".to_string());
    };
    let weight = weight
        .parse::<Weight>()
        .map_err(|_| format!("invalid weight `{}`", weight))?;

    Ok(EdgeRecord {
        source: source.to_string(),
        target: target.to_string(),
        weight,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_complete() {
        let list = parse_edge_list("3\nA B 1\nB C 3\nA C 10\n").unwrap();
        assert_eq!(list.declared, 3);
        assert!(list.is_complete());
        assert_eq!(
            list.records[2],
            EdgeRecord {
                source: "A".to_string(),
                target: "C".to_string(),
                weight: 10,
            }
        );
    }

    #[test]
    fn test_parse_ignores_blank_lines_and_trailing_tokens() {
        let list = parse_edge_list("\n2   extra\n\nA\tB  4 trailing words\n\nB A 5\n").unwrap();
        assert_eq!(list.records.len(), 2);
        assert_eq!(list.records[0].weight, 4);
        assert!(list.is_complete());
    }

    #[test]
    fn test_parse_stops_at_declared_count() {
        let list = parse_edge_list("1\nA B 1\nnot an edge\n").unwrap();
        assert_eq!(list.records.len(), 1);
        assert!(list.is_complete());
    }

    #[test]
    fn test_parse_truncated() {
        let list = parse_edge_list("3\nA B 1\nB C 2\n").unwrap();
        assert_eq!(list.records.len(), 2);
        assert_eq!(list.stop, Some(ParseStop::Truncated { expected: 3, found: 2 }));
    }

    #[test]
    fn test_parse_malformed_line() {
        let list = parse_edge_list("3\nA B 1\nB C heavy\nC D 1\n").unwrap();
        assert_eq!(list.records.len(), 1);
        assert_eq!(
            list.stop,
            Some(ParseStop::Malformed {
                line: 3,
                reason: "invalid weight `heavy`".to_string(),
            })
        );

        let list = parse_edge_list("2\nA B\n").unwrap();
        assert!(matches!(list.stop, Some(ParseStop::Malformed { line: 2, .. })));
    }

    #[test]
    fn test_parse_fractional_weight_is_malformed() {
        let list = parse_edge_list("2\nA B 1.5\nB C 1\n").unwrap();
        assert!(list.records.is_empty());
        assert!(matches!(list.stop, Some(ParseStop::Malformed { line: 2, .. })));
    }

    #[test]
    fn test_parse_edges_on_count_line_are_ignored() {
        let list = parse_edge_list("1 A B 5\n").unwrap();
        assert!(list.records.is_empty());
        assert_eq!(
            list.stop,
            Some(ParseStop::Truncated {
                expected: 1,
                found: 0,
            })
        );
    }

    #[test]
    fn test_parse_negative_weight_is_read() {
        let list = parse_edge_list("1\nA B -4\n").unwrap();
        assert_eq!(list.records[0].weight, -4);
    }

    #[test]
    fn test_parse_bad_header() {
        assert!(matches!(parse_edge_list(""), Err(LoadError::MissingEdgeCount)));
        assert!(matches!(parse_edge_list("  \n\n"), Err(LoadError::MissingEdgeCount)));
        assert!(matches!(
            parse_edge_list("many\nA B 1\n"),
            Err(LoadError::InvalidEdgeCount(token)) if token == "many"
        ));
        assert!(matches!(parse_edge_list("-1\n"), Err(LoadError::InvalidEdgeCount(_))));
    }

    #[test]
    fn test_parse_zero_edges() {
        let list = parse_edge_list("0\n").unwrap();
        assert!(list.records.is_empty());
        assert!(list.is_complete());
    }
}

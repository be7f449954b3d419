//! Input format dialects
//!
//! The three recognized interchange formats differ only in three places: how the
//! vertex-count header is detected, how a data line splits into tokens, and
//! whether vertex indices are 1-based. One classifier parameterized by format tag
//! covers all of them; there is no per-format reader.

use crate::error::LineError;
use std::path::Path;

/// Recognized graph interchange formats, keyed by file suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphFormat {
    /// `.mtx` — matrix-market-like: `%` comments, first non-comment line is the
    /// header, 1-based edge tokens.
    MatrixMarket,
    /// `.txt` — edge list: `#` metadata lines (one of which carries the vertex
    /// count), tab-separated 0-based edge tokens.
    EdgeList,
    /// `.gr` — DIMACS-like: `p` header lines, `a` edge lines, 1-based tokens.
    Dimacs,
}

/// What a single input line contributes to the parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEvent {
    /// Comment, metadata without a count, or an untagged line.
    Skip,
    /// This line declared (or re-declared) the vertex count.
    VertexCount(u32),
    /// A directed edge observation, already converted to 0-based indices.
    Edge {
        /// Source vertex.
        from: u32,
        /// Target vertex.
        to: u32,
    },
}

impl GraphFormat {
    /// Select a format by file suffix. Returns `None` for anything but
    /// `.mtx`, `.txt`, `.gr`.
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("mtx") => Some(Self::MatrixMarket),
            Some("txt") => Some(Self::EdgeList),
            Some("gr") => Some(Self::Dimacs),
            _ => None,
        }
    }

    /// Classify one input line.
    ///
    /// `header_seen` tells the matrix-market dialect whether the vertex-count
    /// line was already consumed; the other dialects carry the header marker in
    /// the line itself and ignore the flag.
    ///
    /// # Errors
    ///
    /// Returns a [`LineError`] when a required token is missing or fails to
    /// parse as an integer.
    pub fn classify(self, line: &str, header_seen: bool) -> Result<LineEvent, LineError> {
        match self {
            Self::MatrixMarket => {
                if line.starts_with('%') {
                    return Ok(LineEvent::Skip);
                }
                if !header_seen {
                    let token = line
                        .split_whitespace()
                        .next()
                        .ok_or(LineError::MissingToken("vertex count"))?;
                    return Ok(LineEvent::VertexCount(parse_token(token)?));
                }
                let mut tokens = line.split_whitespace();
                let from = edge_token(tokens.next(), "source")?;
                let to = edge_token(tokens.next(), "target")?;
                Ok(LineEvent::Edge {
                    from: to_zero_based(from)?,
                    to: to_zero_based(to)?,
                })
            }
            Self::EdgeList => {
                if line.starts_with('#') {
                    // First purely numeric token in a metadata line is the vertex count
                    return Ok(line
                        .split_whitespace()
                        .find_map(|token| token.parse::<u32>().ok())
                        .map_or(LineEvent::Skip, LineEvent::VertexCount));
                }
                let mut tokens = line.split('\t');
                let from = edge_token(tokens.next(), "source")?;
                let to = edge_token(tokens.next(), "target")?;
                Ok(LineEvent::Edge { from, to })
            }
            Self::Dimacs => {
                if line.starts_with('p') {
                    let token = line
                        .split_whitespace()
                        .nth(2)
                        .ok_or(LineError::MissingToken("vertex count"))?;
                    return Ok(LineEvent::VertexCount(parse_token(token)?));
                }
                if line.starts_with('a') {
                    let mut tokens = line.split_whitespace().skip(1);
                    let from = edge_token(tokens.next(), "source")?;
                    let to = edge_token(tokens.next(), "target")?;
                    return Ok(LineEvent::Edge {
                        from: to_zero_based(from)?,
                        to: to_zero_based(to)?,
                    });
                }
                Ok(LineEvent::Skip)
            }
        }
    }
}

fn parse_token(token: &str) -> Result<u32, LineError> {
    token
        .trim()
        .parse::<u32>()
        .map_err(|_| LineError::InvalidInteger {
            token: token.trim().to_string(),
        })
}

fn edge_token(token: Option<&str>, which: &'static str) -> Result<u32, LineError> {
    let token = token
        .filter(|t| !t.trim().is_empty())
        .ok_or(LineError::MissingToken(which))?;
    parse_token(token)
}

fn to_zero_based(index: u32) -> Result<u32, LineError> {
    index.checked_sub(1).ok_or(LineError::ZeroIndex)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_path() {
        assert_eq!(
            GraphFormat::from_path(Path::new("a/graph.mtx")),
            Some(GraphFormat::MatrixMarket)
        );
        assert_eq!(
            GraphFormat::from_path(Path::new("roads.txt")),
            Some(GraphFormat::EdgeList)
        );
        assert_eq!(
            GraphFormat::from_path(Path::new("usa.gr")),
            Some(GraphFormat::Dimacs)
        );
        assert_eq!(GraphFormat::from_path(Path::new("graph.csv")), None);
        assert_eq!(GraphFormat::from_path(Path::new("graph")), None);
    }

    #[test]
    fn test_mtx_comment_and_header() {
        let fmt = GraphFormat::MatrixMarket;
        assert_eq!(fmt.classify("% anything", false).unwrap(), LineEvent::Skip);
        assert_eq!(
            fmt.classify("3 3 5", false).unwrap(),
            LineEvent::VertexCount(3)
        );
    }

    #[test]
    fn test_mtx_edge_is_one_based() {
        let fmt = GraphFormat::MatrixMarket;
        assert_eq!(
            fmt.classify("1 2", true).unwrap(),
            LineEvent::Edge { from: 0, to: 1 }
        );
        // Extra tokens (weights) are ignored
        assert_eq!(
            fmt.classify("2 3 0.5", true).unwrap(),
            LineEvent::Edge { from: 1, to: 2 }
        );
    }

    #[test]
    fn test_mtx_zero_index_rejected() {
        let err = GraphFormat::MatrixMarket.classify("0 2", true).unwrap_err();
        assert!(matches!(err, LineError::ZeroIndex));
    }

    #[test]
    fn test_mtx_blank_header_line_rejected() {
        let err = GraphFormat::MatrixMarket.classify("", false).unwrap_err();
        assert!(matches!(err, LineError::MissingToken("vertex count")));
    }

    #[test]
    fn test_txt_metadata_numeric_token() {
        let fmt = GraphFormat::EdgeList;
        assert_eq!(
            fmt.classify("# Nodes: 4039 Edges: 88234", false).unwrap(),
            LineEvent::VertexCount(4039)
        );
        assert_eq!(
            fmt.classify("# FromNodeId\tToNodeId", false).unwrap(),
            LineEvent::Skip
        );
    }

    #[test]
    fn test_txt_edge_is_tab_separated_zero_based() {
        let fmt = GraphFormat::EdgeList;
        assert_eq!(
            fmt.classify("0\t5", true).unwrap(),
            LineEvent::Edge { from: 0, to: 5 }
        );
        // Carriage return from CRLF input is tolerated
        assert_eq!(
            fmt.classify("2\t7\r", true).unwrap(),
            LineEvent::Edge { from: 2, to: 7 }
        );
    }

    #[test]
    fn test_txt_missing_target_rejected() {
        let err = GraphFormat::EdgeList.classify("4", true).unwrap_err();
        assert!(matches!(err, LineError::MissingToken("target")));
    }

    #[test]
    fn test_gr_header_and_edges() {
        let fmt = GraphFormat::Dimacs;
        assert_eq!(
            fmt.classify("p sp 4 2", false).unwrap(),
            LineEvent::VertexCount(4)
        );
        assert_eq!(
            fmt.classify("a 1 2", true).unwrap(),
            LineEvent::Edge { from: 0, to: 1 }
        );
        // DIMACS edge lines may carry a weight; it is ignored
        assert_eq!(
            fmt.classify("a 2 3 17", true).unwrap(),
            LineEvent::Edge { from: 1, to: 2 }
        );
    }

    #[test]
    fn test_gr_untagged_lines_skipped() {
        let fmt = GraphFormat::Dimacs;
        assert_eq!(fmt.classify("c comment", false).unwrap(), LineEvent::Skip);
        assert_eq!(fmt.classify("", false).unwrap(), LineEvent::Skip);
    }

    #[test]
    fn test_gr_short_header_rejected() {
        let err = GraphFormat::Dimacs.classify("p sp", false).unwrap_err();
        assert!(matches!(err, LineError::MissingToken("vertex count")));
    }

    #[test]
    fn test_invalid_integer_token() {
        let err = GraphFormat::MatrixMarket.classify("x 2", true).unwrap_err();
        assert!(matches!(err, LineError::InvalidInteger { .. }));
    }
}

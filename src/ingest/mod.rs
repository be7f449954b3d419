//! Graph file ingestion
//!
//! One reader loop serves every input format: the file's dialect classifies each
//! line, the collector deduplicates and symmetrizes the resulting edge stream,
//! and the caller receives coordinate arrays plus an [`IngestReport`].

pub mod collect;
pub mod dialect;

pub use collect::{CooGraph, EdgeCollector, IngestReport};
pub use dialect::{GraphFormat, LineEvent};

use crate::csr::{CsrGraph, NodeId};
use crate::error::{ConvertError, LineError, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Parse a graph file into coordinate form.
///
/// The dialect is selected by file suffix; the file must exist. Edges are
/// emitted in first-observed order, with self-loops dropped and each directed
/// pair recorded once (see [`EdgeCollector`]).
///
/// # Errors
///
/// Returns [`ConvertError::FileNotFound`] for a missing path,
/// [`ConvertError::UnsupportedFormat`] for an unrecognized suffix,
/// [`ConvertError::Parse`] for a malformed header or edge line (including a file
/// that never declares a vertex count), and [`ConvertError::Io`] for read
/// failures mid-stream.
#[allow(clippy::unused_async)] // Async API for future I/O operations
pub async fn read_graph_file<P: AsRef<Path>>(path: P) -> Result<(CooGraph, IngestReport)> {
    let path = path.as_ref();

    // Existence is checked before the suffix, matching the converter's contract
    let file = File::open(path).map_err(|err| {
        if err.kind() == std::io::ErrorKind::NotFound {
            ConvertError::FileNotFound(path.to_path_buf())
        } else {
            ConvertError::Io(err)
        }
    })?;
    let format = GraphFormat::from_path(path)
        .ok_or_else(|| ConvertError::UnsupportedFormat(path.to_path_buf()))?;

    let reader = BufReader::new(file);
    let mut collector = EdgeCollector::new();
    let mut vertex_count: Option<u32> = None;
    let mut line_no = 0_usize;

    for line in reader.lines() {
        let line = line?;
        line_no += 1;

        let event = format
            .classify(&line, vertex_count.is_some())
            .map_err(|source| ConvertError::Parse {
                path: path.to_path_buf(),
                line: line_no,
                source,
            })?;

        match event {
            LineEvent::Skip => {}
            LineEvent::VertexCount(count) => vertex_count = Some(count),
            LineEvent::Edge { from, to } => collector.add_edge(NodeId(from), NodeId(to)),
        }
    }

    let vertex_count = vertex_count.ok_or_else(|| ConvertError::Parse {
        path: path.to_path_buf(),
        line: line_no,
        source: LineError::MissingHeader,
    })?;

    let (coo, report) = collector.finish(vertex_count);

    log::debug!(
        "parsed {}: {} vertices, {} directed edges",
        path.display(),
        coo.vertex_count,
        coo.num_edges()
    );
    if !report.is_clean() {
        log::warn!(
            "{}: skipped {} self-loops and {} duplicate edges",
            path.display(),
            report.self_loops,
            report.duplicates
        );
    }

    Ok((coo, report))
}

/// Convert a graph file straight to CSR form.
///
/// Chains [`read_graph_file`] and [`CsrGraph::from_coo`]; the report travels
/// with the structure so callers can surface skipped-edge diagnostics.
///
/// # Errors
///
/// Any [`read_graph_file`] failure, plus [`ConvertError::OutOfBounds`] when an
/// edge references a vertex at or beyond the declared count.
pub async fn convert_graph_file<P: AsRef<Path>>(path: P) -> Result<(CsrGraph, IngestReport)> {
    let (coo, report) = read_graph_file(path).await?;
    let graph = CsrGraph::from_coo(coo.vertex_count, &coo.rows, &coo.cols)?;
    Ok((graph, report))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    fn write_fixture(dir: &tempfile::TempDir, name: &str, contents: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        let mut file = File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[tokio::test]
    async fn test_read_mtx_emission_order() {
        let dir = tempdir().unwrap();
        let path = write_fixture(&dir, "tiny.mtx", "% header\n3\n1 2\n2 3\n");

        let (coo, report) = read_graph_file(&path).await.unwrap();
        assert_eq!(coo.vertex_count, 3);
        assert_eq!(coo.rows, vec![0, 1, 1, 2]);
        assert_eq!(coo.cols, vec![1, 0, 2, 1]);
        assert!(report.is_clean());
    }

    #[tokio::test]
    async fn test_missing_file() {
        let err = read_graph_file("no/such/graph.mtx").await.unwrap_err();
        assert!(matches!(err, ConvertError::FileNotFound(_)));
    }

    #[tokio::test]
    async fn test_unsupported_suffix() {
        let dir = tempdir().unwrap();
        let path = write_fixture(&dir, "graph.csv", "0,1\n");

        let err = read_graph_file(&path).await.unwrap_err();
        assert!(matches!(err, ConvertError::UnsupportedFormat(_)));
    }

    #[tokio::test]
    async fn test_parse_error_carries_line_number() {
        let dir = tempdir().unwrap();
        let path = write_fixture(&dir, "bad.mtx", "3\n1 2\nnope nope\n");

        let err = read_graph_file(&path).await.unwrap_err();
        match err {
            ConvertError::Parse { line, .. } => assert_eq!(line, 3),
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_missing_header_rejected() {
        let dir = tempdir().unwrap();
        let path = write_fixture(&dir, "headerless.gr", "a 1 2\n");

        let err = read_graph_file(&path).await.unwrap_err();
        match err {
            ConvertError::Parse { source, .. } => {
                assert!(matches!(source, LineError::MissingHeader));
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_convert_rejects_out_of_bounds_edge() {
        let dir = tempdir().unwrap();
        // Declares 2 vertices but references vertex 5
        let path = write_fixture(&dir, "corrupt.mtx", "2\n1 6\n");

        let err = convert_graph_file(&path).await.unwrap_err();
        assert!(matches!(err, ConvertError::OutOfBounds { index: 5, .. }));
    }

    #[tokio::test]
    async fn test_convert_gr_example() {
        let dir = tempdir().unwrap();
        let path = write_fixture(&dir, "tiny.gr", "p sp 4 2\na 1 2\na 2 3\n");

        let (graph, _) = convert_graph_file(&path).await.unwrap();
        let (row_offsets, col_indices) = graph.csr_components();
        assert_eq!(row_offsets, &[0, 1, 3, 4, 4]);
        assert_eq!(col_indices, &[1, 0, 2, 1]);
    }
}

//! CSR (Compressed Sparse Row) adjacency representation
//!
//! # CSR Format
//!
//! ```text
//! Graph: 0 — 1, 1 — 2 (undirected, stored as directed pairs)
//!
//! CSR:
//!   row_offsets: [0, 1, 3, 4]  // Vertex 0: entries [0..1), vertex 1: [1..3), vertex 2: [3..4)
//!   col_indices: [1, 0, 2, 1]  // Neighbors, contiguous per vertex, in insertion order
//! ```
//!
//! No value array is stored: the converter records adjacency structure only, so the
//! numeric payload a sparse-matrix library would carry is dropped before it exists.

use crate::error::{ConvertError, Result};
use std::fmt;

/// Vertex identifier (zero-indexed)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u32);

/// CSR (Compressed Sparse Row) adjacency structure
///
/// Built once from coordinate arrays and immutable afterward. Optimized for:
/// - O(1) access to a vertex's neighbor slice
/// - Compact, cache-friendly memory layout
/// - Direct externalization as raw 32-bit arrays
///
/// # Example
///
/// ```
/// use egr_convert::{CsrGraph, NodeId};
///
/// // Symmetrized pairs of the single undirected edge 0 — 1
/// let graph = CsrGraph::from_coo(2, &[0, 1], &[1, 0]).unwrap();
///
/// assert_eq!(graph.neighbors(NodeId(0)).unwrap(), &[1]);
/// assert_eq!(graph.neighbors(NodeId(1)).unwrap(), &[0]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsrGraph {
    /// Row offsets: vertex i's neighbors start at `row_offsets`[i]
    /// Length: `vertex_count` + 1
    row_offsets: Vec<u32>,

    /// Column indices (neighbor vertices)
    /// Length: number of directed edges
    col_indices: Vec<u32>,

    /// Number of vertices
    vertex_count: u32,
}

impl CsrGraph {
    /// Build a CSR structure from coordinate arrays.
    ///
    /// `rows` and `cols` list every directed edge in emission order. Construction
    /// is a counting sort: per-row counts, prefix sum into offsets, then a stable
    /// scatter of the column indices, so within each row the neighbors keep the
    /// relative order they were inserted in.
    ///
    /// A `vertex_count` of 0 or empty coordinate arrays are valid and produce a
    /// degenerate structure (`row_offsets` all zero, no columns).
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::InvalidCsr`] if the arrays differ in length or the
    /// edge count overflows `u32`, and [`ConvertError::OutOfBounds`] if any index
    /// reaches `vertex_count`.
    pub fn from_coo(vertex_count: u32, rows: &[u32], cols: &[u32]) -> Result<Self> {
        if rows.len() != cols.len() {
            return Err(ConvertError::InvalidCsr(format!(
                "coordinate arrays differ in length: {} rows vs {} cols",
                rows.len(),
                cols.len()
            )));
        }
        let num_edges = u32::try_from(rows.len())
            .map_err(|_| ConvertError::InvalidCsr("edge count exceeds u32".to_string()))?;

        for &index in rows.iter().chain(cols.iter()) {
            if index >= vertex_count {
                return Err(ConvertError::OutOfBounds {
                    index,
                    vertex_count,
                });
            }
        }

        // Counting sort by row: counts → prefix sum → scatter
        let mut row_offsets = vec![0_u32; vertex_count as usize + 1];
        for &row in rows {
            row_offsets[row as usize + 1] += 1;
        }
        for i in 1..row_offsets.len() {
            row_offsets[i] += row_offsets[i - 1];
        }

        let mut col_indices = vec![0_u32; num_edges as usize];
        let mut cursor = row_offsets.clone();
        for (&row, &col) in rows.iter().zip(cols.iter()) {
            col_indices[cursor[row as usize] as usize] = col;
            cursor[row as usize] += 1;
        }

        Ok(Self {
            row_offsets,
            col_indices,
            vertex_count,
        })
    }

    /// Reassemble a CSR structure from already-built arrays, checking every
    /// structural invariant. Both deserializers funnel through this.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::InvalidCsr`] if `row_offsets` has the wrong length,
    /// does not start at 0, decreases anywhere, or disagrees with
    /// `col_indices.len()`; returns [`ConvertError::OutOfBounds`] for any column
    /// entry reaching `vertex_count`.
    pub fn from_parts(
        vertex_count: u32,
        row_offsets: Vec<u32>,
        col_indices: Vec<u32>,
    ) -> Result<Self> {
        if row_offsets.len() != vertex_count as usize + 1 {
            return Err(ConvertError::InvalidCsr(format!(
                "row_offsets has length {}, expected {}",
                row_offsets.len(),
                vertex_count as usize + 1
            )));
        }
        if row_offsets[0] != 0 {
            return Err(ConvertError::InvalidCsr(format!(
                "row_offsets starts at {}, expected 0",
                row_offsets[0]
            )));
        }
        if let Some(i) = (1..row_offsets.len()).find(|&i| row_offsets[i] < row_offsets[i - 1]) {
            return Err(ConvertError::InvalidCsr(format!(
                "row_offsets decreases at position {i}"
            )));
        }
        // Safe: length checked to be vertex_count + 1 >= 1 above
        let last = row_offsets[row_offsets.len() - 1];
        if last as usize != col_indices.len() {
            return Err(ConvertError::InvalidCsr(format!(
                "final row offset {} disagrees with {} column entries",
                last,
                col_indices.len()
            )));
        }
        for &index in &col_indices {
            if index >= vertex_count {
                return Err(ConvertError::OutOfBounds {
                    index,
                    vertex_count,
                });
            }
        }

        Ok(Self {
            row_offsets,
            col_indices,
            vertex_count,
        })
    }

    /// Get the neighbors of a vertex
    ///
    /// # Errors
    ///
    /// Returns an error if the vertex is out of bounds.
    pub fn neighbors(&self, vertex: NodeId) -> Result<&[u32]> {
        if vertex.0 >= self.vertex_count {
            return Err(ConvertError::OutOfBounds {
                index: vertex.0,
                vertex_count: self.vertex_count,
            });
        }

        let idx = vertex.0 as usize;
        let start = self.row_offsets[idx] as usize;
        let end = self.row_offsets[idx + 1] as usize;

        Ok(&self.col_indices[start..end])
    }

    /// Get number of vertices
    #[must_use]
    pub const fn num_vertices(&self) -> u32 {
        self.vertex_count
    }

    /// Get number of directed edges (symmetrized: twice the undirected count)
    #[must_use]
    pub fn num_edges(&self) -> usize {
        self.col_indices.len()
    }

    /// Get the raw CSR arrays (`row_offsets`, `col_indices`)
    #[must_use]
    pub fn csr_components(&self) -> (&[u32], &[u32]) {
        (&self.row_offsets, &self.col_indices)
    }
}

impl fmt::Display for CsrGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const MAX_PRINT: usize = 20;

        fn preview(f: &mut fmt::Formatter<'_>, label: &str, values: &[u32]) -> fmt::Result {
            write!(f, "{label} : [ ")?;
            for value in values.iter().take(MAX_PRINT) {
                write!(f, "{value} ")?;
            }
            if values.len() > MAX_PRINT {
                writeln!(f, "...]")
            } else {
                writeln!(f, "]")
            }
        }

        writeln!(f, "Number of vertices = {}", self.vertex_count)?;
        writeln!(f, "Number of edges = {}", self.num_edges())?;
        preview(f, "col_indices", &self.col_indices)?;
        preview(f, "row_offsets", &self.row_offsets)
    }
}

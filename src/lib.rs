//! egr-convert: graph interchange files to CSR adjacency
//!
//! # Overview
//!
//! egr-convert parses plain-text graph descriptions (matrix-market-like `.mtx`,
//! SNAP-style `.txt` edge lists, DIMACS-like `.gr`), canonicalizes them into a
//! deduplicated, symmetrized undirected edge set, and builds a Compressed Sparse
//! Row structure that can be persisted as a compact `.egr` binary or a readable
//! text file. Adjacency only: no edge weights or attributes survive conversion.
//!
//! # Quick Start
//!
//! ```no_run
//! use egr_convert::convert_graph_file;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Parse, symmetrize, and build the CSR arrays in one call
//! let (graph, report) = convert_graph_file("road_network.gr").await?;
//! println!("skipped {} self-loops", report.self_loops);
//!
//! // Persist in either rendition
//! graph.write_egr("road_network.egr").await?;
//! graph.write_text("road_network.csr.txt").await?;
//!
//! // Binary files load back through the invariant checker
//! let loaded = egr_convert::CsrGraph::read_egr("road_network.egr").await?;
//! assert_eq!(loaded, graph);
//! # Ok(())
//! # }
//! ```
//!
//! # Architecture
//!
//! - **Ingest**: one parameterized line classifier with three format dialects,
//!   feeding an edge collector that dedups, symmetrizes, and reports skips
//! - **Build**: direct counting-sort COO→CSR assembly, no sparse-matrix library
//! - **Storage**: little-endian 32-bit binary (`.egr`) and whitespace text,
//!   each with a validating reader

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod csr;
pub mod error;
pub mod ingest;
pub mod storage;

// Re-export core types
pub use csr::{CsrGraph, NodeId};
pub use error::{ConvertError, LineError, Result};
pub use ingest::{
    convert_graph_file, read_graph_file, CooGraph, EdgeCollector, GraphFormat, IngestReport,
    LineEvent,
};

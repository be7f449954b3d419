//! Error taxonomy for graph conversion
//!
//! Every failure mode of the parse → collect → build → serialize pipeline maps to
//! one [`ConvertError`] variant. Parse failures carry the source path and 1-based
//! line number; nothing is recovered locally, the conversion for that file aborts.

use std::path::PathBuf;
use thiserror::Error;

/// Crate-wide result type.
pub type Result<T> = std::result::Result<T, ConvertError>;

/// Failure modes of the conversion pipeline.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// Input path does not exist (checked before format dispatch).
    #[error("file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// File suffix matches none of the recognized graph formats.
    #[error("unsupported graph format: {} (expected .mtx, .txt or .gr)", .0.display())]
    UnsupportedFormat(PathBuf),

    /// A line failed to classify or tokenize.
    #[error("{}:{}: {}", .path.display(), .line, .source)]
    Parse {
        /// Source file being parsed.
        path: PathBuf,
        /// 1-based line number of the offending line.
        line: usize,
        /// What went wrong on that line.
        source: LineError,
    },

    /// A vertex index fell outside the declared vertex count.
    #[error("vertex index {index} out of range for {vertex_count} vertices")]
    OutOfBounds {
        /// The offending zero-based index.
        index: u32,
        /// Declared number of vertices.
        vertex_count: u32,
    },

    /// Deserialized or hand-built CSR arrays violate a structural invariant.
    #[error("invalid CSR structure: {0}")]
    InvalidCsr(String),

    /// Underlying read or write failure.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Line-level parse failures.
#[derive(Debug, Error)]
pub enum LineError {
    /// A required token was absent.
    #[error("missing {0} token")]
    MissingToken(&'static str),

    /// A token did not parse as an unsigned integer.
    #[error("invalid integer token {token:?}")]
    InvalidInteger {
        /// The token as found in the input.
        token: String,
    },

    /// A 1-based format carried index 0, which has no 0-based counterpart.
    #[error("vertex index 0 in a 1-based format")]
    ZeroIndex,

    /// The file ended without declaring a vertex count.
    #[error("no vertex count header found")]
    MissingHeader,
}

//! Text serialization
//!
//! # Format
//!
//! ```text
//! <vertex_count> <edge_count>
//! <col_indices[0]> ... <col_indices[edge_count-1]>
//! <row_offsets[0]> ... <row_offsets[vertex_count]>
//! ```
//!
//! The column line ends with a newline after its last entry and is absent
//! entirely for an edgeless graph; the offset line carries no trailing newline.
//! Both quirks are preserved byte-for-byte from the original tooling.

use crate::csr::CsrGraph;
use crate::error::{ConvertError, Result};
use crate::ingest::CooGraph;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

impl CsrGraph {
    /// Write the graph as a whitespace-separated text file.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::Io`] if the destination cannot be created or
    /// written.
    #[allow(clippy::unused_async)] // Async API for future I/O operations
    pub async fn write_text<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = File::create(path.as_ref())?;
        let mut writer = BufWriter::new(file);

        let (row_offsets, col_indices) = self.csr_components();

        writeln!(writer, "{} {}", self.num_vertices(), self.num_edges())?;
        write_row(&mut writer, col_indices, true)?;
        write_row(&mut writer, row_offsets, false)?;

        writer.flush()?;
        Ok(())
    }

    /// Read a text file written by [`CsrGraph::write_text`] back into a
    /// validated graph.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::FileNotFound`] for a missing path,
    /// [`ConvertError::InvalidCsr`] for a malformed token stream or invariant
    /// violation, and [`ConvertError::OutOfBounds`] for out-of-range columns.
    pub async fn read_text<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = tokio::fs::read_to_string(path).await.map_err(|err| {
            if err.kind() == std::io::ErrorKind::NotFound {
                ConvertError::FileNotFound(path.to_path_buf())
            } else {
                ConvertError::Io(err)
            }
        })?;
        let mut tokens = contents.split_whitespace();

        let vertex_count = next_value(&mut tokens, "vertex count")?;
        let edge_count = next_value(&mut tokens, "edge count")?;

        let col_indices = (0..edge_count)
            .map(|_| next_value(&mut tokens, "column index"))
            .collect::<Result<Vec<u32>>>()?;
        let row_offsets = (0..=vertex_count)
            .map(|_| next_value(&mut tokens, "row offset"))
            .collect::<Result<Vec<u32>>>()?;

        if tokens.next().is_some() {
            return Err(ConvertError::InvalidCsr(
                "trailing tokens after row offsets".to_string(),
            ));
        }

        Self::from_parts(vertex_count, row_offsets, col_indices)
    }
}

impl CooGraph {
    /// Export the symmetrized edge set as readable text: a `"<vertex_count>
    /// <edge_count>"` header, then one `"<from> <to>"` line per directed edge
    /// in emission order.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::Io`] if the destination cannot be created or
    /// written.
    #[allow(clippy::unused_async)] // Async API for future I/O operations
    pub async fn write_edge_list<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = File::create(path.as_ref())?;
        let mut writer = BufWriter::new(file);

        writeln!(writer, "{} {}", self.vertex_count, self.num_edges())?;
        for (from, to) in self.rows.iter().zip(self.cols.iter()) {
            writeln!(writer, "{from} {to}")?;
        }

        writer.flush()?;
        Ok(())
    }
}

fn write_row<W: Write>(writer: &mut W, values: &[u32], terminate: bool) -> Result<()> {
    for (i, value) in values.iter().enumerate() {
        if i > 0 {
            write!(writer, " ")?;
        }
        write!(writer, "{value}")?;
    }
    if terminate && !values.is_empty() {
        writeln!(writer)?;
    }
    Ok(())
}

fn next_value<'a, I: Iterator<Item = &'a str>>(tokens: &mut I, what: &str) -> Result<u32> {
    let token = tokens
        .next()
        .ok_or_else(|| ConvertError::InvalidCsr(format!("missing {what} token")))?;
    token
        .parse::<u32>()
        .map_err(|_| ConvertError::InvalidCsr(format!("invalid {what} token {token:?}")))
}

//! Binary (.egr) serialization
//!
//! # Format
//!
//! ```text
//! [vertex_count][edge_count]            // 2 x 32-bit header
//! row_offsets[0..=vertex_count]         // 32-bit each
//! col_indices[0..edge_count]            // 32-bit each
//! ```
//!
//! No padding, no magic, no versioning. Every word is little-endian; the layout
//! is bit-identical to the original tooling's output on its x86-64 hosts and
//! deterministic everywhere else.

use crate::csr::CsrGraph;
use crate::error::{ConvertError, Result};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

impl CsrGraph {
    /// Write the graph as a binary `.egr` file.
    ///
    /// A degenerate graph (no vertices or no edges) is valid and produces the
    /// corresponding short file.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::Io`] if the destination cannot be created or
    /// written.
    #[allow(clippy::unused_async)] // Async API for future I/O operations
    pub async fn write_egr<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = File::create(path.as_ref())?;
        let mut writer = BufWriter::new(file);

        let (row_offsets, col_indices) = self.csr_components();

        write_word(&mut writer, self.num_vertices())?;
        // Edge count fits u32: the final row offset equals it by construction
        #[allow(clippy::cast_possible_truncation)]
        write_word(&mut writer, self.num_edges() as u32)?;
        for &offset in row_offsets {
            write_word(&mut writer, offset)?;
        }
        for &index in col_indices {
            write_word(&mut writer, index)?;
        }

        writer.flush()?;
        Ok(())
    }

    /// Read a binary `.egr` file back into a validated graph.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::FileNotFound`] for a missing path,
    /// [`ConvertError::Io`] for a truncated file, and
    /// [`ConvertError::InvalidCsr`] / [`ConvertError::OutOfBounds`] when the
    /// decoded arrays violate a CSR invariant.
    #[allow(clippy::unused_async)] // Async API for future I/O operations
    pub async fn read_egr<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|err| {
            if err.kind() == std::io::ErrorKind::NotFound {
                ConvertError::FileNotFound(path.to_path_buf())
            } else {
                ConvertError::Io(err)
            }
        })?;
        let mut reader = BufReader::new(file);

        let vertex_count = read_word(&mut reader)?;
        let edge_count = read_word(&mut reader)?;

        let row_offsets = read_words(&mut reader, vertex_count as usize + 1)?;
        let col_indices = read_words(&mut reader, edge_count as usize)?;

        Self::from_parts(vertex_count, row_offsets, col_indices)
    }
}

fn write_word<W: Write>(writer: &mut W, value: u32) -> Result<()> {
    writer.write_all(&value.to_le_bytes())?;
    Ok(())
}

fn read_word<R: Read>(reader: &mut R) -> Result<u32> {
    let mut buf = [0_u8; 4];
    reader.read_exact(&mut buf)?;
    Ok(u32::from_le_bytes(buf))
}

fn read_words<R: Read>(reader: &mut R, count: usize) -> Result<Vec<u32>> {
    let mut values = Vec::with_capacity(count);
    for _ in 0..count {
        values.push(read_word(reader)?);
    }
    Ok(values)
}

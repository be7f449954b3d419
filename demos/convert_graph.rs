//! End-to-end conversion walkthrough
//!
//! Run with: cargo run --example convert_graph

use anyhow::{Context, Result};
use egr_convert::{convert_graph_file, CsrGraph};
use std::io::Write;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    println!("egr-convert example\n");

    // 1. Write a small matrix-market-like input
    let dir = std::env::temp_dir();
    let input = dir.join("example_graph.mtx");
    {
        let mut file = std::fs::File::create(&input)
            .with_context(|| format!("failed to create {}", input.display()))?;
        file.write_all(b"% triangle plus a pendant vertex\n4\n1 2\n2 3\n3 1\n3 4\n2 1\n")?;
    }
    println!("Input written to {}", input.display());

    // 2. Convert: parse, symmetrize, build CSR
    let (graph, report) = convert_graph_file(&input).await?;
    println!(
        "Converted: {} vertices, {} directed edges",
        graph.num_vertices(),
        graph.num_edges()
    );
    println!(
        "Skipped during ingest: {} self-loops, {} duplicates\n",
        report.self_loops, report.duplicates
    );
    print!("{graph}");

    // 3. Persist both renditions
    let egr_path = dir.join("example_graph.egr");
    let text_path = dir.join("example_graph.csr.txt");
    graph.write_egr(&egr_path).await?;
    graph.write_text(&text_path).await?;
    println!("\nSaved {}", egr_path.display());
    println!("Saved {}", text_path.display());

    // 4. Load back and verify the renditions agree
    let from_egr = CsrGraph::read_egr(&egr_path).await?;
    let from_text = CsrGraph::read_text(&text_path).await?;
    assert_eq!(from_egr, graph);
    assert_eq!(from_text, graph);
    println!("\nBoth renditions decode to the identical structure");

    Ok(())
}

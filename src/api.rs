//! Top level api methods for mode-dag-rs.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::Result;
use crate::graph::{placement::Placement, Graph};
use crate::noa::NodeRows;

/// Given a valid graph description, return the row attribute text.
pub fn sif_to_noa(sif: &str) -> Result<String> {
    let graph = Graph::new_from_str(sif)?;
    let placement = graph.layout()?;

    Ok(NodeRows::new(placement).to_string())
}

/// Lay out the graph described in `infile` and write its rows to `outfile`.
///
/// The output file is only created once the layout has succeeded.
pub fn layout_file(infile: impl AsRef<Path>, outfile: impl AsRef<Path>) -> Result<Placement> {
    let sif = fs::read_to_string(infile.as_ref())?;
    let graph = Graph::new_from_str(&sif)?;
    info!(
        path = %infile.as_ref().display(),
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "loaded graph"
    );

    let rows = NodeRows::new(graph.layout()?);
    rows.write_to_file(outfile.as_ref())?;
    info!(path = %outfile.as_ref().display(), rows = rows.placement().len(), "wrote rows");

    Ok(rows.into_placement())
}

//! For writing a placement as a node attribute file of row indexes.
//!
//! The format is a `Node Row` header followed by one `<node> = <row>` line per
//! placed node, in row order.

use std::fmt::{Display, Error, Formatter};
use std::fs::File;
use std::io::prelude::*;
use std::path::Path;

use crate::graph::placement::Placement;

/// Header line of a row attribute file.
pub const NOA_HEADER: &str = "Node Row";

pub struct NodeRows {
    placement: Placement,
}

impl NodeRows {
    pub fn new(placement: Placement) -> Self {
        Self { placement }
    }

    pub fn placement(&self) -> &Placement {
        &self.placement
    }

    pub fn into_placement(self) -> Placement {
        self.placement
    }

    /// Write out the rows to the given path, replacing any existing file.
    pub fn write_to_file(&self, path: impl AsRef<Path>) -> std::io::Result<()> {
        let noa = self.to_string();
        let mut file = File::create(path)?;
        file.write_all(noa.as_bytes())?;
        file.flush()
    }
}

impl Display for NodeRows {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> Result<(), Error> {
        writeln!(fmt, "{NOA_HEADER}")?;
        for (row, node) in self.placement.iter().enumerate() {
            writeln!(fmt, "{node} = {row}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let mut placement = Placement::new();
        placement.append(["b".to_string(), "a".to_string()]);

        let rows = NodeRows::new(placement);

        assert_eq!(rows.to_string(), "Node Row\nb = 0\na = 1\n");
    }

    #[test]
    fn test_empty() {
        assert_eq!(NodeRows::new(Placement::new()).to_string(), "Node Row\n");
    }
}

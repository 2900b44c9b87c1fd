//! Represents a stored edge connecting two nodes within a graph.

use std::fmt::Display;

/// EdgeDisposition indicates whether a edge is incoming or outgoing with respect to a particular node.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum EdgeDisposition {
    In,
    Out,
}

/// An edge points from src_node to dst_node, in the stored direction.
///
/// The loader reverses the direction found in the input, so a stored edge always
/// points from a node to one of the nodes it depends on.  Edges are kept in a set,
/// so two edges with the same ordered pair are the same edge.
#[derive(Debug, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Edge {
    /// Node that this edge points from (the dependent node).
    pub src_node: String,
    /// Node that this edge points to (the node depended upon).
    pub dst_node: String,
}

impl Edge {
    pub fn new(src_node: &str, dst_node: &str) -> Self {
        Edge {
            src_node: src_node.to_string(),
            dst_node: dst_node.to_string(),
        }
    }

    /// Build the stored edge for a link written as `file_src -> file_dst` in the input.
    pub fn from_link(file_src: &str, file_dst: &str) -> Self {
        Edge::new(file_dst, file_src)
    }

    /// Return the node at the given end of the edge.
    pub fn endpoint(&self, disposition: EdgeDisposition) -> &str {
        match disposition {
            EdgeDisposition::Out => &self.src_node,
            EdgeDisposition::In => &self.dst_node,
        }
    }
}

impl Display for Edge {
    fn fmt(&self, fmt: &mut std::fmt::Formatter<'_>) -> std::result::Result<(), std::fmt::Error> {
        write!(fmt, "{} -> {}", self.src_node, self.dst_node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_link_reverses() {
        let edge = Edge::from_link("a", "b");

        assert_eq!(edge.src_node, "b");
        assert_eq!(edge.dst_node, "a");
        assert_eq!(edge.endpoint(EdgeDisposition::Out), "b");
        assert_eq!(edge.endpoint(EdgeDisposition::In), "a");
        assert_eq!(edge.to_string(), "b -> a");
    }
}

//! Builds the dependency map and degree tallies from the stored edge set.
//!
//! Stored edges point from a node to a node it depends on, so the set kept per node
//! is literally "the nodes this node points at".  Everything here is built once and
//! is read only afterwards.

use std::collections::{BTreeMap, BTreeSet};

use crate::error::{LayoutError, Result};

use super::edge::{Edge, EdgeDisposition};

/// Count of stored edges entering and leaving a node.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct Degree {
    pub in_degree: u32,
    pub out_degree: u32,
}

impl Degree {
    fn bump(&mut self, disposition: EdgeDisposition) {
        match disposition {
            EdgeDisposition::In => self.in_degree += 1,
            EdgeDisposition::Out => self.out_degree += 1,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Dependencies {
    /// For every node, the set of nodes that must be placed before it.
    depends_on: BTreeMap<String, BTreeSet<String>>,
    /// Degree tallies in the stored direction.
    degrees: BTreeMap<String, Degree>,
}

impl Dependencies {
    /// Build the dependency map for the given nodes.
    ///
    /// Every node starts with an empty dependency set.  An edge naming a node that is
    /// not in `nodes` is an error.
    pub fn build<'n, 'e>(
        nodes: impl IntoIterator<Item = &'n str>,
        edges: impl IntoIterator<Item = &'e Edge>,
    ) -> Result<Self> {
        let mut depends_on = BTreeMap::new();
        let mut degrees = BTreeMap::new();

        for node in nodes {
            depends_on.insert(node.to_string(), BTreeSet::new());
            degrees.insert(node.to_string(), Degree::default());
        }

        for edge in edges {
            for disposition in [EdgeDisposition::Out, EdgeDisposition::In] {
                let node = edge.endpoint(disposition);
                let Some(degree) = degrees.get_mut(node) else {
                    return Err(LayoutError::UnknownNode {
                        node: node.to_string(),
                    });
                };
                degree.bump(disposition);
            }
            if let Some(targets) = depends_on.get_mut(&edge.src_node) {
                targets.insert(edge.dst_node.clone());
            }
        }

        Ok(Dependencies {
            depends_on,
            degrees,
        })
    }

    /// Nodes the given node depends on.  Unknown nodes have no dependencies.
    pub fn of(&self, node: &str) -> impl Iterator<Item = &str> + '_ {
        self.depends_on
            .get(node)
            .into_iter()
            .flat_map(|targets| targets.iter().map(String::as_str))
    }

    /// True if the node has nothing to wait for.
    pub fn is_free(&self, node: &str) -> bool {
        self.depends_on
            .get(node)
            .map_or(true, |targets| targets.is_empty())
    }

    /// Iterate every node together with its dependency set.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeSet<String>)> + '_ {
        self.depends_on
            .iter()
            .map(|(node, targets)| (node.as_str(), targets))
    }

    pub fn degree(&self, node: &str) -> Degree {
        self.degrees.get(node).copied().unwrap_or_default()
    }

    pub fn node_count(&self) -> usize {
        self.depends_on.len()
    }
}

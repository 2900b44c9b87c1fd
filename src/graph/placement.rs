//! The placement list: the append-only row order being built by the layout.

use std::collections::HashMap;
use std::fmt::Display;

/// Ordered, append-only list of placed nodes.
///
/// The row of a node is its position in the list.  A node appears at most once.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct Placement {
    order: Vec<String>,
    rows: HashMap<String, usize>,
}

impl Placement {
    pub fn new() -> Placement {
        Placement {
            order: vec![],
            rows: HashMap::new(),
        }
    }

    /// Append a batch of nodes, in the given order, after everything already placed.
    pub fn append(&mut self, batch: impl IntoIterator<Item = String>) {
        for node in batch {
            debug_assert!(!self.rows.contains_key(&node), "{node} placed twice");
            self.rows.insert(node.clone(), self.order.len());
            self.order.push(node);
        }
    }

    /// Row index of a placed node.
    pub fn row(&self, node: &str) -> Option<usize> {
        self.rows.get(node).copied()
    }

    pub fn contains(&self, node: &str) -> bool {
        self.rows.contains_key(node)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Iterate placed nodes in row order.
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.order.iter().map(String::as_str)
    }

    pub fn into_vec(self) -> Vec<String> {
        self.order
    }
}

impl Display for Placement {
    fn fmt(&self, fmt: &mut std::fmt::Formatter<'_>) -> std::result::Result<(), std::fmt::Error> {
        for (row, node) in self.order.iter().enumerate() {
            writeln!(fmt, "{row:4}: {node}")?;
        }
        Ok(())
    }
}

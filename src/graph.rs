//! Implement a multi-mode directed acyclic graph whose nodes can be placed in rows.
//!
//! Every node belongs to a class (mode).  Edges are stored reversed from the way
//! they are written in the input, so a stored edge points from a node to a node it
//! depends on.  Laying out the graph produces a placement: a total order of the
//! nodes where every node comes after everything it depends on, and nodes with
//! similar already-placed dependencies are kept close together.
//!
//! Layout runs in three steps:
//! * Build the dependency map and degree tallies from the edges.
//! * For each class in ascending order, seed the placement with that class's roots.
//! * Sweep the classes repeatedly, placing ranked frontier nodes, until done.

pub mod dependencies;
pub mod edge;
pub mod frontier;
pub mod placement;
pub mod ranking;
pub mod roots;
mod sif_parser;

use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Display;

use tracing::{debug, info};

use crate::error::Result;

use self::{
    dependencies::Dependencies, edge::Edge, frontier::FrontierExpander, placement::Placement,
    roots::extract_roots,
};

/// A multi-mode graph: a class per node plus a set of stored edges.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct Graph {
    /// Class of every node.
    node_classes: BTreeMap<String, u32>,
    /// All stored edges.  Being a set, duplicates collapse.
    edges: BTreeSet<Edge>,
}

impl Graph {
    pub fn new() -> Self {
        Graph {
            node_classes: BTreeMap::new(),
            edges: BTreeSet::new(),
        }
    }

    /// Add a node of the given class.
    ///
    /// Adding a known node again is fine as long as the class agrees.  On a
    /// disagreement the class already recorded is returned as the error value.
    pub fn add_node(&mut self, name: &str, class: u32) -> std::result::Result<(), u32> {
        match self.node_classes.get(name) {
            Some(existing) if *existing != class => Err(*existing),
            Some(_) => Ok(()),
            None => {
                self.node_classes.insert(name.to_string(), class);
                Ok(())
            }
        }
    }

    /// Add a stored edge: `src_node` depends on `dst_node`.
    ///
    /// Returns false if the edge was already present.
    pub fn add_edge(&mut self, src_node: &str, dst_node: &str) -> bool {
        self.edges.insert(Edge::new(src_node, dst_node))
    }

    /// Add a link as written in the input, from `file_src` to `file_dst`.
    pub fn add_link(&mut self, file_src: &str, file_dst: &str) -> bool {
        self.edges.insert(Edge::from_link(file_src, file_dst))
    }

    /// Class of the given node, if known.
    pub fn node_class(&self, name: &str) -> Option<u32> {
        self.node_classes.get(name).copied()
    }

    pub fn node_count(&self) -> usize {
        self.node_classes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Iterate all node names in sorted order.
    pub fn nodes_iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.node_classes.keys().map(String::as_str)
    }

    /// Iterate all stored edges.
    pub fn edges_iter(&self) -> impl Iterator<Item = &Edge> + '_ {
        self.edges.iter()
    }

    /// The distinct classes in use, ascending.
    pub fn classes(&self) -> BTreeSet<u32> {
        self.node_classes.values().copied().collect()
    }

    /// Highest class in use, or None for an empty graph.
    pub fn max_class(&self) -> Option<u32> {
        self.node_classes.values().copied().max()
    }

    /// Build the dependency map and degree tallies for this graph.
    pub fn dependencies(&self) -> Result<Dependencies> {
        Dependencies::build(self.nodes_iter(), self.edges_iter())
    }

    /// Seed a placement with the roots of every class, lowest class first.
    pub fn seed_roots(&self, deps: &Dependencies) -> Placement {
        let mut placement = Placement::new();

        for class in self.classes() {
            let roots = extract_roots(&self.node_classes, deps, class);
            debug!(class, roots = roots.len(), "seeding roots");
            placement.append(roots);
        }
        placement
    }

    /// Lay out the graph, returning the row order of every node.
    pub fn layout(&self) -> Result<Placement> {
        info!(
            nodes = self.node_count(),
            edges = self.edge_count(),
            max_class = ?self.max_class(),
            "laying out graph"
        );

        let deps = self.dependencies()?;
        let seeded = self.seed_roots(&deps);
        let seeded_count = seeded.len();

        let placement = FrontierExpander::new(&self.node_classes, &deps, seeded).expand()?;
        info!(
            roots = seeded_count,
            placed = placement.len(),
            "layout complete"
        );

        Ok(placement)
    }
}

impl Display for Graph {
    fn fmt(&self, fmt: &mut std::fmt::Formatter<'_>) -> std::result::Result<(), std::fmt::Error> {
        for (name, class) in self.node_classes.iter() {
            writeln!(fmt, "{name}: class {class}")?;
        }
        for edge in self.edges.iter() {
            writeln!(fmt, "{edge}")?;
        }
        Ok(())
    }
}

//! Random multi-mode DAG generator, for producing test inputs.
//!
//! Nodes are numbered `0..nodes`.  Links always run from the lower number to the
//! higher one, so the result is acyclic.  Each node is given a random class the
//! first time it is drawn.  Classes are not tied to node numbers, so a generated
//! graph does not need to respect class bands.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Display;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::error::{LayoutError, Result};
use crate::graph::Graph;

/// Settings for the random generator.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct GeneratorConfig {
    /// Number of classes.
    pub modes: u32,
    /// Number of nodes to draw from.
    pub nodes: u32,
    /// Number of distinct links to produce.
    pub links: usize,
    /// Tag written between the two classes of each link.
    pub tag: String,
    pub seed: u64,
}

impl Default for GeneratorConfig {
    /// The fixed three mode graph: 100 nodes and 200 links.
    fn default() -> Self {
        GeneratorConfig {
            modes: 3,
            nodes: 100,
            links: 200,
            tag: "to".to_string(),
            seed: 17,
        }
    }
}

impl GeneratorConfig {
    fn validate(&self) -> Result<()> {
        if self.modes == 0 {
            return Err(LayoutError::InvalidGenerator(
                "at least one mode is required".to_string(),
            ));
        }
        if self.nodes < 2 {
            return Err(LayoutError::InvalidGenerator(
                "at least two nodes are required".to_string(),
            ));
        }
        let nodes = u64::from(self.nodes);
        let max_links = nodes * (nodes - 1) / 2;
        if self.links as u64 > max_links {
            return Err(LayoutError::InvalidGenerator(format!(
                "{} links requested but {} nodes allow at most {max_links}",
                self.links, self.nodes
            )));
        }
        if self.tag.chars().any(|c| c == '\t' || c == '\n' || c == '\r') {
            return Err(LayoutError::InvalidGenerator(
                "tag may not contain tabs or line breaks".to_string(),
            ));
        }
        Ok(())
    }
}

/// A generated graph, in input (link) direction.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct RandomDag {
    tag: String,
    node_classes: BTreeMap<u32, u32>,
    links: BTreeSet<(u32, u32)>,
}

impl RandomDag {
    /// Draw a random graph with the given settings.
    pub fn generate(config: &GeneratorConfig) -> Result<Self> {
        config.validate()?;

        let mut rng = StdRng::seed_from_u64(config.seed);
        let mut node_classes = BTreeMap::new();
        let mut links = BTreeSet::new();

        while links.len() < config.links {
            let first = rng.gen_range(0..config.nodes);
            let mut second = first;
            while second == first {
                second = rng.gen_range(0..config.nodes);
            }
            let (src, dst) = if first < second {
                (first, second)
            } else {
                (second, first)
            };

            for node in [src, dst] {
                if !node_classes.contains_key(&node) {
                    node_classes.insert(node, rng.gen_range(0..config.modes));
                }
            }
            links.insert((src, dst));
        }

        debug!(
            nodes = node_classes.len(),
            links = links.len(),
            seed = config.seed,
            "generated random graph"
        );

        Ok(RandomDag {
            tag: config.tag.clone(),
            node_classes,
            links,
        })
    }

    pub fn link_count(&self) -> usize {
        self.links.len()
    }

    fn node_name(&self, node: u32) -> (String, u32) {
        let class = self.node_classes.get(&node).copied().unwrap_or_default();

        (format!("{node}@{class}"), class)
    }

    /// Build the graph a loader would produce from this description.
    pub fn to_graph(&self) -> Result<Graph> {
        Graph::new_from_str(&self.to_string())
    }
}

impl Display for RandomDag {
    fn fmt(&self, fmt: &mut std::fmt::Formatter<'_>) -> std::result::Result<(), std::fmt::Error> {
        for (src, dst) in self.links.iter() {
            let (src_name, src_class) = self.node_name(*src);
            let (dst_name, dst_class) = self.node_name(*dst);

            writeln!(
                fmt,
                "{src_name}\t{src_class}-{}-{dst_class}\t{dst_name}",
                self.tag
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(modes: u32, nodes: u32, links: usize, seed: u64) -> GeneratorConfig {
        GeneratorConfig {
            modes,
            nodes,
            links,
            seed,
            ..GeneratorConfig::default()
        }
    }

    #[test]
    fn test_link_count_and_direction() {
        let dag = RandomDag::generate(&config(4, 30, 60, 3)).unwrap();

        assert_eq!(dag.link_count(), 60);
        for (src, dst) in dag.links.iter() {
            assert!(src < dst);
            assert!(dag.node_classes[src] < 4);
        }
    }

    #[test]
    fn test_same_seed_same_graph() {
        let a = RandomDag::generate(&config(3, 20, 25, 99)).unwrap();
        let b = RandomDag::generate(&config(3, 20, 25, 99)).unwrap();

        assert_eq!(a.to_string(), b.to_string());
    }

    #[test]
    fn test_complete_graph_is_reachable() {
        let dag = RandomDag::generate(&config(2, 5, 10, 1)).unwrap();

        assert_eq!(dag.link_count(), 10);
    }

    #[test]
    fn test_too_many_links() {
        let result = RandomDag::generate(&config(2, 5, 11, 1));

        assert!(matches!(result, Err(LayoutError::InvalidGenerator(_))));
    }

    #[test]
    fn test_output_loads_and_lays_out() {
        let dag = RandomDag::generate(&GeneratorConfig::default()).unwrap();
        let graph = dag.to_graph().unwrap();

        assert_eq!(graph.edge_count(), 200);
        let placement = graph.layout().unwrap();
        assert_eq!(placement.len(), graph.node_count());
    }

    #[test]
    fn test_line_format() {
        let dag = RandomDag::generate(&config(1, 2, 1, 5)).unwrap();

        assert_eq!(dag.to_string(), "0@0\t0-to-0\t1@0\n");
    }
}

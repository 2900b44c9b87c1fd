//! Seeds the placement with the root nodes of a single class.
//!
//! A root is a node of the class with an empty dependency set.  Each root is scored
//! by how many nodes (of any class) directly depend on it, and roots are emitted
//! highest score first.
//!
//! * Roots are bucketed by score.  Buckets are scanned from score 0 upward, and
//!   within a bucket nodes are taken in reverse alphabetical order.
//! * The collected list is then reversed as a whole, which puts the highest score
//!   first and orders each bucket alphabetically.
//! * A root nobody depends on has score 0.  It gets its own bucket, so it ends up
//!   last instead of stalling the bucket scan.

use std::collections::{BTreeMap, BTreeSet};

use tracing::{debug, warn};

use super::dependencies::Dependencies;

/// Return the roots of `class`, highest score first.
pub fn extract_roots(
    node_classes: &BTreeMap<String, u32>,
    deps: &Dependencies,
    class: u32,
) -> Vec<String> {
    let scores = root_scores(node_classes, deps, class);

    let mut buckets: BTreeMap<usize, BTreeSet<&str>> = BTreeMap::new();
    for (node, score) in scores.iter() {
        buckets.entry(*score).or_default().insert(*node);
    }

    if let Some(isolated) = buckets.get(&0) {
        warn!(class, count = isolated.len(), "roots with no dependents are placed last");
    }

    let mut build_list = Vec::with_capacity(scores.len());
    for (_score, bucket) in buckets.iter() {
        build_list.extend(bucket.iter().rev().map(|node| node.to_string()));
    }
    build_list.reverse();

    debug!(class, roots = build_list.len(), "extracted roots");

    build_list
}

/// Score every root candidate of `class` by the number of nodes depending on it.
fn root_scores<'a>(
    node_classes: &'a BTreeMap<String, u32>,
    deps: &'a Dependencies,
    class: u32,
) -> BTreeMap<&'a str, usize> {
    let mut scores: BTreeMap<&str, usize> = node_classes
        .iter()
        .filter(|(node, node_class)| **node_class == class && deps.is_free(node))
        .map(|(node, _)| (node.as_str(), 0))
        .collect();

    for (_node, targets) in deps.iter() {
        for target in targets {
            if let Some(score) = scores.get_mut(target.as_str()) {
                *score += 1;
            }
        }
    }

    scores
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::edge::Edge;

    fn setup(
        classes: &[(&str, u32)],
        edges: &[(&str, &str)],
    ) -> (BTreeMap<String, u32>, Dependencies) {
        let node_classes = classes
            .iter()
            .map(|(node, class)| (node.to_string(), *class))
            .collect::<BTreeMap<_, _>>();
        let edges = edges
            .iter()
            .map(|(src, dst)| Edge::new(src, dst))
            .collect::<Vec<_>>();
        let deps = Dependencies::build(node_classes.keys().map(String::as_str), &edges).unwrap();

        (node_classes, deps)
    }

    #[test]
    fn test_highest_score_first() {
        // r1 has one dependent, r2 has three, r3 has two.
        let (classes, deps) = setup(
            &[("r1", 0), ("r2", 0), ("r3", 0), ("x", 1), ("y", 1), ("z", 1)],
            &[
                ("x", "r1"),
                ("x", "r2"),
                ("y", "r2"),
                ("z", "r2"),
                ("y", "r3"),
                ("z", "r3"),
            ],
        );

        assert_eq!(extract_roots(&classes, &deps, 0), vec!["r2", "r3", "r1"]);
    }

    #[test]
    fn test_ties_are_alphabetical() {
        let (classes, deps) = setup(
            &[("c", 0), ("a", 0), ("b", 0), ("x", 1)],
            &[("x", "a"), ("x", "b"), ("x", "c")],
        );

        assert_eq!(extract_roots(&classes, &deps, 0), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_only_requested_class() {
        let (classes, deps) = setup(&[("a", 0), ("b", 1), ("c", 2)], &[("c", "a")]);

        assert_eq!(extract_roots(&classes, &deps, 0), vec!["a"]);
        assert_eq!(extract_roots(&classes, &deps, 1), vec!["b"]);
        assert!(extract_roots(&classes, &deps, 2).is_empty());
    }

    #[test]
    fn test_zero_score_roots_go_last() {
        let (classes, deps) = setup(
            &[("alone", 0), ("zed", 0), ("busy", 0), ("x", 1)],
            &[("x", "busy")],
        );

        assert_eq!(extract_roots(&classes, &deps, 0), vec!["busy", "alone", "zed"]);
    }
}

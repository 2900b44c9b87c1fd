//! Places the remaining nodes once the roots of every class have been seeded.
//!
//! Each sweep walks the classes in ascending order.  For a class, every unplaced
//! node of that class whose dependencies are all placed is a candidate; candidates
//! are ranked against the placement as it stands and appended.  Sweeps repeat until
//! nothing is left to place.
//!
//! A sweep that places nothing while nodes remain means some nodes wait on each
//! other (a cycle).  This is reported as an error instead of sweeping forever.

use std::collections::{BTreeMap, BTreeSet};

use tracing::debug;

use crate::error::{LayoutError, Result};

use super::dependencies::Dependencies;
use super::placement::Placement;
use super::ranking::rank_candidates;

/// Number of unplaced nodes named in a stall error.
const STALL_SAMPLE_SIZE: usize = 5;

#[derive(Debug)]
pub struct FrontierExpander<'a> {
    node_classes: &'a BTreeMap<String, u32>,
    deps: &'a Dependencies,
    placement: Placement,
    /// Nodes not yet in the placement.
    to_place: BTreeSet<&'a str>,
}

impl<'a> FrontierExpander<'a> {
    /// Start expanding from a placement that already holds the seeded roots.
    pub fn new(
        node_classes: &'a BTreeMap<String, u32>,
        deps: &'a Dependencies,
        placement: Placement,
    ) -> Self {
        let to_place = node_classes
            .keys()
            .map(String::as_str)
            .filter(|node| !placement.contains(node))
            .collect();

        FrontierExpander {
            node_classes,
            deps,
            placement,
            to_place,
        }
    }

    /// Number of nodes still waiting to be placed.
    pub fn remaining(&self) -> usize {
        self.to_place.len()
    }

    /// Return the ranked candidates of `class` that can be placed right now.
    pub fn next_candidates(&self, class: u32) -> Vec<String> {
        let eligible = self.to_place.iter().copied().filter(|node| {
            self.node_classes.get(*node) == Some(&class)
                && self.deps.of(node).all(|dep| self.placement.contains(dep))
        });

        rank_candidates(eligible, self.deps, &self.placement)
    }

    /// Sweep until every node is placed, returning the finished placement.
    pub fn expand(mut self) -> Result<Placement> {
        let classes = self.node_classes.values().copied().collect::<BTreeSet<u32>>();
        let mut sweep = 0_usize;

        while !self.to_place.is_empty() {
            sweep += 1;
            let mut placed = 0;

            for class in classes.iter().copied() {
                let batch = self.next_candidates(class);
                placed += batch.len();

                for node in batch.iter() {
                    self.to_place.remove(node.as_str());
                }
                self.placement.append(batch);

                debug!(sweep, class, nodes_to_go = self.remaining(), "swept class");
            }

            if placed == 0 {
                return Err(LayoutError::StalledPlacement {
                    remaining: self.remaining(),
                    sample: self
                        .to_place
                        .iter()
                        .take(STALL_SAMPLE_SIZE)
                        .map(|node| node.to_string())
                        .collect(),
                });
            }
        }

        Ok(self.placement)
    }
}

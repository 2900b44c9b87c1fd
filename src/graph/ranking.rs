//! Ranks frontier candidates of a single class against the current placement.
//!
//! Candidates are compared by, in priority:
//! 1. Identical names compare equal.
//! 2. The rows of their already placed dependencies, ascending, compared element by
//!    element.  At the first difference, the candidate whose dependency was placed
//!    later ranks first.
//! 3. If one row list is a prefix of the other, the longer one ranks first.
//! 4. Lower in-degree (fewer nodes depending on the candidate) ranks first.
//! 5. Names in ascending order.
//!
//! Keys are read from the placement as it stands when the sweep runs, so they are
//! rebuilt for every sweep and never cached.

use std::cmp::Ordering;

use itertools::Itertools;

use super::dependencies::Dependencies;
use super::placement::Placement;

/// Everything the comparator needs to know about one candidate.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct RankKey<'a> {
    pub node: &'a str,
    /// Rows of the candidate's placed dependencies, ascending.
    pub aligned_rows: Vec<usize>,
    pub in_degree: u32,
}

impl<'a> RankKey<'a> {
    pub fn new(node: &'a str, deps: &Dependencies, placement: &Placement) -> RankKey<'a> {
        let aligned_rows = deps
            .of(node)
            .filter_map(|dep| placement.row(dep))
            .sorted()
            .collect();

        RankKey {
            node,
            aligned_rows,
            in_degree: deps.degree(node).in_degree,
        }
    }
}

/// Compare two candidates; `Ordering::Less` means `a` is placed before `b`.
pub fn rank_order(a: &RankKey<'_>, b: &RankKey<'_>) -> Ordering {
    if a.node == b.node {
        return Ordering::Equal;
    }

    let first_difference = a
        .aligned_rows
        .iter()
        .zip(b.aligned_rows.iter())
        .find(|(a_row, b_row)| a_row != b_row);
    if let Some((a_row, b_row)) = first_difference {
        return b_row.cmp(a_row);
    }

    b.aligned_rows
        .len()
        .cmp(&a.aligned_rows.len())
        .then_with(|| a.in_degree.cmp(&b.in_degree))
        .then_with(|| a.node.cmp(b.node))
}

/// Return the candidates in the order they should be appended to the placement.
pub fn rank_candidates<'a>(
    candidates: impl IntoIterator<Item = &'a str>,
    deps: &Dependencies,
    placement: &Placement,
) -> Vec<String> {
    candidates
        .into_iter()
        .map(|node| RankKey::new(node, deps, placement))
        .sorted_by(rank_order)
        .map(|key| key.node.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::edge::Edge;

    fn key<'a>(node: &'a str, aligned_rows: &[usize], in_degree: u32) -> RankKey<'a> {
        RankKey {
            node,
            aligned_rows: aligned_rows.to_vec(),
            in_degree,
        }
    }

    #[test]
    fn test_identity() {
        assert_eq!(rank_order(&key("a", &[0], 0), &key("a", &[5], 3)), Ordering::Equal);
    }

    #[test]
    fn test_later_dependency_first() {
        let a = key("a", &[0, 2], 0);
        let b = key("b", &[0, 3], 0);

        assert_eq!(rank_order(&a, &b), Ordering::Greater);
        assert_eq!(rank_order(&b, &a), Ordering::Less);
    }

    #[test]
    fn test_more_dependencies_first() {
        let a = key("a", &[1], 0);
        let b = key("b", &[1, 4], 9);

        assert_eq!(rank_order(&a, &b), Ordering::Greater);
    }

    #[test]
    fn test_lower_in_degree_first() {
        let a = key("a", &[1], 2);
        let b = key("b", &[1], 1);

        assert_eq!(rank_order(&a, &b), Ordering::Greater);
    }

    #[test]
    fn test_name_fallback() {
        let a = key("a", &[1], 1);
        let b = key("b", &[1], 1);

        assert_eq!(rank_order(&a, &b), Ordering::Less);
    }

    #[test]
    fn test_rank_candidates_reads_placement() {
        // p0, p1 placed; x depends on p0, y on p1, z on both.
        let edges = vec![
            Edge::new("x", "p0"),
            Edge::new("y", "p1"),
            Edge::new("z", "p0"),
            Edge::new("z", "p1"),
        ];
        let deps = Dependencies::build(["p0", "p1", "x", "y", "z"], &edges).unwrap();
        let mut placement = Placement::new();
        placement.append(["p0".to_string(), "p1".to_string()]);

        let ranked = rank_candidates(["x", "y", "z"], &deps, &placement);

        assert_eq!(ranked, vec!["y", "z", "x"]);
    }
}

use super::{route_distance, RouteSolver, StopSequence};
use crate::utils::distance_table::DistanceTable;
use petgraph::graph::NodeIndex;

/// Tries every visiting order and keeps the shortest.
///
/// Permutations are enumerated in lexicographic order of stop positions and
/// the first one reaching the minimum is kept. Orders with an unreachable leg
/// are skipped, not scored.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExhaustiveSearch;

impl ExhaustiveSearch {
    /// Lazily enumerate all permutations of `0..n` in lexicographic order
    pub fn permutations(n: usize) -> Permutations {
        Permutations {
            current: (0..n).collect(),
            exhausted: false,
        }
    }
}

/// Lexicographic permutation iterator that keeps only the current ordering
/// in memory.
#[derive(Debug, Clone)]
pub struct Permutations {
    current: Vec<usize>,
    exhausted: bool,
}

impl Permutations {
    /// Advance `current` to its lexicographic successor; false after the last
    fn advance(&mut self) -> bool {
        let perm = &mut self.current;
        let Some(pivot) = (1..perm.len()).rev().find(|&i| perm[i - 1] < perm[i]) else {
            return false;
        };
        let pivot = pivot - 1;

        // Terminates past the pivot since perm[pivot + 1] > perm[pivot]
        let mut successor = perm.len() - 1;
        while perm[successor] <= perm[pivot] {
            successor -= 1;
        }

        perm.swap(pivot, successor);
        perm[pivot + 1..].reverse();
        true
    }
}

impl Iterator for Permutations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }

        let perm = self.current.clone();
        self.exhausted = !self.advance();
        Some(perm)
    }
}

impl RouteSolver for ExhaustiveSearch {
    fn solve(
        &self,
        table: &DistanceTable,
        start: NodeIndex,
        stops: &[NodeIndex],
        destination: NodeIndex,
    ) -> Option<StopSequence> {
        let mut best: Option<StopSequence> = None;

        for perm in Self::permutations(stops.len()) {
            let Some(distance) = route_distance(table, start, stops, &perm, destination) else {
                continue;
            };

            let improves = best
                .as_ref()
                .map_or(true, |current| distance < current.total_distance);
            if improves {
                best = Some(StopSequence {
                    visits: perm,
                    total_distance: distance,
                });
            }
        }

        best
    }
}

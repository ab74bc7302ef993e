//! Visiting-order heuristic over a cost matrix.
//!
//! Greedy nearest-neighbor: always step to the cheapest unvisited
//! waypoint. An approximation, not an exact tour; exact solving is out
//! of scope for the small stop counts this tool plans.

use tracing::trace;

use crate::matrix::{CostMatrix, UNKNOWN};

/// Produce a visiting order over all matrix indices, starting at `start`.
///
/// Two stops keep their given order. For three or more, repeatedly steps
/// to the unvisited index with the smallest known cost from the current
/// position, lowest index first on ties. Unreachable leftovers (possible
/// only if upstream gap-filling failed) are appended in original order.
pub fn sequence(matrix: &CostMatrix, start: usize) -> Vec<usize> {
    let n = matrix.len();
    if n == 0 {
        return Vec::new();
    }
    if n == 1 {
        return vec![0];
    }
    if n == 2 {
        return vec![0, 1];
    }

    let start = if start < n { start } else { 0 };
    let mut visited = vec![false; n];
    let mut order = Vec::with_capacity(n);
    let mut current = start;
    visited[current] = true;
    order.push(current);

    for _ in 1..n {
        let mut best: Option<usize> = None;
        let mut best_cost = UNKNOWN;

        for candidate in 0..n {
            if visited[candidate] {
                continue;
            }
            let cost = matrix.get(current, candidate);
            if cost == UNKNOWN {
                continue;
            }
            if best.is_none() || cost < best_cost {
                best = Some(candidate);
                best_cost = cost;
            }
        }

        match best {
            Some(next) => {
                trace!(from = current, to = next, cost = best_cost, "next hop");
                visited[next] = true;
                order.push(next);
                current = next;
            }
            None => {
                trace!(from = current, "no reachable unvisited stop, appending remainder");
                for candidate in 0..n {
                    if !visited[candidate] {
                        order.push(candidate);
                    }
                }
                break;
            }
        }
    }

    order
}

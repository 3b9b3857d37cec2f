use tracing::warn;

use crate::distance_matrix::DistanceMatrix;

const NO_PARENT: usize = usize::MAX;

/// Exact minimum-distance visiting order with the first waypoint fixed as
/// start and the last fixed as end. Held-Karp dynamic program over
/// `(visited_mask, node)` states, stored flat as `mask * n + node`.
///
/// If no finite path to the end exists the input order is returned
/// unchanged. Callers are expected to bound `n`, the state space grows as
/// `O(n^2 * 2^n)`.
pub fn optimal_visit_order(matrix: &DistanceMatrix) -> Vec<usize> {
    let n = matrix.num_waypoints();

    if n <= 2 {
        return (0..n).collect();
    }

    let start = 0;
    let end = n - 1;
    let num_masks = 1usize << n;

    let mut cost = vec![f64::INFINITY; num_masks * n];
    let mut parent = vec![NO_PARENT; num_masks * n];

    cost[(1 << start) * n + start] = 0.0;

    for mask in 0..num_masks {
        if mask & (1 << start) == 0 {
            continue;
        }

        for node in 0..n {
            if mask & (1 << node) == 0 {
                continue;
            }

            let current = cost[mask * n + node];
            if !current.is_finite() {
                continue;
            }

            for next in 0..n {
                if mask & (1 << next) != 0 {
                    continue;
                }

                let next_mask = mask | (1 << next);
                let candidate = current + matrix.get(node, next);

                if candidate < cost[next_mask * n + next] {
                    cost[next_mask * n + next] = candidate;
                    parent[next_mask * n + next] = node;
                }
            }
        }
    }

    let full_mask = num_masks - 1;
    if !cost[full_mask * n + end].is_finite() {
        warn!("no finite path through all waypoints, keeping the input order");
        return (0..n).collect();
    }

    let mut order = Vec::with_capacity(n);
    let mut mask = full_mask;
    let mut node = end;

    loop {
        order.push(node);

        let previous = parent[mask * n + node];
        if previous == NO_PARENT {
            break;
        }

        mask &= !(1 << node);
        node = previous;
    }

    order.reverse();
    order
}

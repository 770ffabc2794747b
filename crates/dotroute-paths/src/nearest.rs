use dotroute_core::Point;

use crate::error::PlanError;
use crate::graph::CompleteGraph;
use crate::route::Route;
use crate::traits::{PlanRequest, RoutePlanner, WeightedPather};

/// Greedy visiting order over every node, starting at `start`.
///
/// Each step moves to the cheapest unvisited node from the current one,
/// treating every pair of nodes as connected. Candidates are scanned in
/// index order and only a strictly cheaper one replaces the best so far, so
/// exact ties go to the lowest index. Returns an empty order when `start`
/// is out of range.
pub fn nearest_neighbor_order<P: WeightedPather>(pather: &P, start: usize) -> Vec<usize> {
    let n = pather.node_count();
    if start >= n {
        return Vec::new();
    }

    let mut order = Vec::with_capacity(n);
    order.push(start);
    let mut unvisited: Vec<usize> = (0..n).filter(|&i| i != start).collect();
    let mut current = start;

    while !unvisited.is_empty() {
        let mut best: Option<(usize, f64)> = None;
        for (pos, &node) in unvisited.iter().enumerate() {
            let d = pather.cost(current, node);
            if best.is_none_or(|(_, bd)| d < bd) {
                best = Some((pos, d));
            }
        }
        let Some((pos, d)) = best else {
            break;
        };
        current = unvisited.remove(pos);
        log::trace!("nearest neighbor step to node {current} (+{d:.3})");
        order.push(current);
    }
    order
}

/// Greedy nearest-neighbor tour planner.
///
/// Covers every point exactly once, starting at the requested start; the
/// request's goal is ignored. Tours are scored as closed loops.
#[derive(Debug, Clone, Copy, Default)]
pub struct NearestNeighbor;

impl RoutePlanner for NearestNeighbor {
    fn plan(&self, points: &[Point], request: PlanRequest) -> Result<Route, PlanError> {
        let graph = CompleteGraph::new(points)?;
        let start = graph.idx(request.start)?;
        let order = nearest_neighbor_order(&graph, start);
        log::debug!("nearest neighbor tour over {} points", order.len());
        Ok(order.into_iter().map(|i| graph.id(i)).collect())
    }

    fn closes_loop(&self) -> bool {
        true
    }
}

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use dotroute_core::{Point, PointId};

use crate::distance::euclidean;
use crate::error::PlanError;
use crate::traits::{AstarPather, Heuristic, Pather, WeightedPather};

/// Straight-line distance to the goal. Admissible and consistent on a
/// Euclidean graph.
#[derive(Debug, Clone, Copy, Default)]
pub struct StraightLine;

impl Heuristic for StraightLine {
    #[inline]
    fn estimate(&self, from: &Point, goal: &Point) -> f64 {
        euclidean(from, goal)
    }
}

/// Always zero. Turns A* into uniform-cost (Dijkstra) search.
#[derive(Debug, Clone, Copy, Default)]
pub struct Zero;

impl Heuristic for Zero {
    #[inline]
    fn estimate(&self, _from: &Point, _goal: &Point) -> f64 {
        0.0
    }
}

/// The complete Euclidean graph over a borrowed point set.
///
/// Every pair of distinct points is joined by an edge weighted by
/// [`euclidean`] distance. Construction checks the preconditions that make
/// this hold: the set is non-empty, ids are unique and every coordinate is
/// finite. Node `i` is `points[i]`.
pub struct CompleteGraph<'a, H = StraightLine> {
    points: &'a [Point],
    index: HashMap<PointId, usize>,
    heuristic: H,
}

impl<'a> CompleteGraph<'a, StraightLine> {
    /// Build the graph with the straight-line heuristic.
    pub fn new(points: &'a [Point]) -> Result<Self, PlanError> {
        Self::with_heuristic(points, StraightLine)
    }
}

impl<'a, H: Heuristic> CompleteGraph<'a, H> {
    /// Build the graph with a custom heuristic.
    pub fn with_heuristic(points: &'a [Point], heuristic: H) -> Result<Self, PlanError> {
        if points.is_empty() {
            return Err(PlanError::EmptyInput);
        }
        let mut index = HashMap::with_capacity(points.len());
        for (i, p) in points.iter().enumerate() {
            if !p.is_finite() {
                return Err(PlanError::NonFiniteCoordinate(p.id));
            }
            match index.entry(p.id) {
                Entry::Occupied(_) => return Err(PlanError::DuplicateId(p.id)),
                Entry::Vacant(v) => {
                    v.insert(i);
                }
            }
        }
        Ok(Self {
            points,
            index,
            heuristic,
        })
    }

    /// Node index of `id`.
    pub fn idx(&self, id: PointId) -> Result<usize, PlanError> {
        self.index
            .get(&id)
            .copied()
            .ok_or(PlanError::UnknownReference(id))
    }

    /// Id of node `idx`.
    #[inline]
    pub fn id(&self, idx: usize) -> PointId {
        self.points[idx].id
    }

    /// Node index of the last input point.
    #[inline]
    pub fn last(&self) -> usize {
        self.points.len() - 1
    }
}

impl<H: Heuristic> Pather for CompleteGraph<'_, H> {
    fn node_count(&self) -> usize {
        self.points.len()
    }

    fn neighbors(&self, node: usize, buf: &mut Vec<usize>) {
        buf.extend((0..self.points.len()).filter(|&i| i != node));
    }
}

impl<H: Heuristic> WeightedPather for CompleteGraph<'_, H> {
    #[inline]
    fn cost(&self, from: usize, to: usize) -> f64 {
        euclidean(&self.points[from], &self.points[to])
    }
}

impl<H: Heuristic> AstarPather for CompleteGraph<'_, H> {
    #[inline]
    fn estimate(&self, from: usize, to: usize) -> f64 {
        self.heuristic.estimate(&self.points[from], &self.points[to])
    }
}

use dotroute_core::{Point, PointId};

use crate::error::PlanError;
use crate::route::{PlannedRoute, Route};

/// Minimal graph interface — nodes are indices `0..node_count()`.
pub trait Pather {
    /// Number of nodes in the graph.
    fn node_count(&self) -> usize;

    /// Append neighbors of `node` into `buf`. The caller clears `buf` before calling.
    fn neighbors(&self, node: usize, buf: &mut Vec<usize>);
}

/// Pather with weighted (non-negative) edges.
pub trait WeightedPather: Pather {
    /// Cost of moving from `from` to `to`. Must be >= 0.
    fn cost(&self, from: usize, to: usize) -> f64;
}

/// Full A* pather with an admissible heuristic.
pub trait AstarPather: WeightedPather {
    /// Heuristic estimate of the remaining cost from `from` to `to`.
    /// Must never overestimate the true cost (admissible).
    fn estimate(&self, from: usize, to: usize) -> f64;
}

/// Lower bound on the cost of travelling between two points.
pub trait Heuristic {
    fn estimate(&self, from: &Point, goal: &Point) -> f64;
}

impl<H: Heuristic + ?Sized> Heuristic for &H {
    #[inline]
    fn estimate(&self, from: &Point, goal: &Point) -> f64 {
        (**self).estimate(from, goal)
    }
}

/// Start and goal designation for a planning call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlanRequest {
    pub start: PointId,
    /// Search target. `None` selects the last point of the input.
    pub goal: Option<PointId>,
}

impl PlanRequest {
    /// A request starting at `start` with the default goal.
    pub fn from(start: PointId) -> Self {
        Self { start, goal: None }
    }

    /// Set an explicit goal.
    pub fn to(self, goal: PointId) -> Self {
        Self {
            goal: Some(goal),
            ..self
        }
    }
}

/// Common contract of every route planner: point set in, ordered route out.
///
/// Implementations borrow the points read-only and keep all per-call state
/// local, so one planner value can serve any number of calls.
pub trait RoutePlanner {
    /// Build a route over `points` for `request`.
    fn plan(&self, points: &[Point], request: PlanRequest) -> Result<Route, PlanError>;

    /// Whether routes from this planner are scored with the closing edge back
    /// to the start.
    fn closes_loop(&self) -> bool;

    /// Plan and evaluate in one step.
    fn plan_scored(
        &self,
        points: &[Point],
        request: PlanRequest,
    ) -> Result<PlannedRoute, PlanError> {
        let route = self.plan(points, request)?;
        let closed = self.closes_loop();
        let distance = route.distance(points, closed)?;
        Ok(PlannedRoute {
            route,
            distance,
            closed,
        })
    }
}

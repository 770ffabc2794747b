//! The player's own route, recorded one dot at a time, and its score
//! against a planned route.

use dotroute_core::{Point, PointId};

use crate::error::PlanError;
use crate::graph::CompleteGraph;
use crate::route::Route;
use crate::traits::WeightedPather;

/// What a [`Walk::visit`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkStep {
    /// The dot is the current one; nothing was recorded.
    Ignored,
    /// The walk moved on to a new dot.
    Extended,
    /// The walk moved back to its start.
    Closed,
}

/// A route drawn by hand over a point set, starting at a fixed dot.
pub struct Walk<'a> {
    graph: CompleteGraph<'a>,
    visits: Vec<usize>,
    length: f64,
}

impl<'a> Walk<'a> {
    /// Start a walk at `start`.
    pub fn new(points: &'a [Point], start: PointId) -> Result<Self, PlanError> {
        let graph = CompleteGraph::new(points)?;
        let s = graph.idx(start)?;
        Ok(Self {
            graph,
            visits: vec![s],
            length: 0.0,
        })
    }

    /// Move to `id`.
    ///
    /// Visiting the current dot is ignored. Moving back to the start is
    /// reported as [`WalkStep::Closed`]; the walk may continue afterwards.
    pub fn visit(&mut self, id: PointId) -> Result<WalkStep, PlanError> {
        let next = self.graph.idx(id)?;
        let current = self.current_idx();
        if next == current {
            return Ok(WalkStep::Ignored);
        }
        self.length += self.graph.cost(current, next);
        self.visits.push(next);
        if next == self.visits[0] {
            log::debug!(
                "walk closed after {} moves, length {:.2}",
                self.moves(),
                self.length
            );
            Ok(WalkStep::Closed)
        } else {
            Ok(WalkStep::Extended)
        }
    }

    fn current_idx(&self) -> usize {
        self.visits[self.visits.len() - 1]
    }

    /// The dot the walk is currently at.
    pub fn current(&self) -> PointId {
        self.graph.id(self.current_idx())
    }

    /// The dot the walk started at.
    pub fn start(&self) -> PointId {
        self.graph.id(self.visits[0])
    }

    /// Number of recorded moves.
    pub fn moves(&self) -> usize {
        self.visits.len() - 1
    }

    /// Whether the walk currently sits back at its start after moving.
    pub fn is_closed(&self) -> bool {
        self.moves() > 0 && self.current_idx() == self.visits[0]
    }

    /// Open length of everything walked so far.
    pub fn distance(&self) -> f64 {
        self.length
    }

    /// The visited ids in order, start included.
    pub fn route(&self) -> Route {
        self.visits.iter().map(|&i| self.graph.id(i)).collect()
    }

    /// Compare this walk against a planned distance.
    pub fn score(&self, optimal: f64) -> RouteScore {
        RouteScore {
            player: self.length,
            optimal,
        }
    }
}

/// A hand-drawn route length next to a planned one.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteScore {
    pub player: f64,
    pub optimal: f64,
}

impl RouteScore {
    /// How much longer the player's route is, or `None` if it is not longer.
    pub fn difference(&self) -> Option<f64> {
        (self.player > self.optimal).then(|| self.player - self.optimal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nearest::NearestNeighbor;
    use crate::traits::{PlanRequest, RoutePlanner};

    fn square() -> Vec<Point> {
        vec![
            Point::new(0, 0.0, 0.0),
            Point::new(1, 10.0, 0.0),
            Point::new(2, 10.0, 10.0),
            Point::new(3, 0.0, 10.0),
        ]
    }

    #[test]
    fn records_moves_and_closes_at_start() {
        let pts = square();
        let mut walk = Walk::new(&pts, PointId(0)).unwrap();
        assert_eq!(walk.visit(PointId(0)), Ok(WalkStep::Ignored));
        assert_eq!(walk.visit(PointId(2)), Ok(WalkStep::Extended));
        assert_eq!(walk.visit(PointId(2)), Ok(WalkStep::Ignored));
        assert_eq!(walk.visit(PointId(1)), Ok(WalkStep::Extended));
        assert_eq!(walk.visit(PointId(3)), Ok(WalkStep::Extended));
        assert!(!walk.is_closed());
        assert_eq!(walk.visit(PointId(0)), Ok(WalkStep::Closed));
        assert!(walk.is_closed());

        assert_eq!(walk.moves(), 4);
        assert_eq!(walk.current(), PointId(0));
        assert_eq!(walk.start(), PointId(0));
        assert_eq!(walk.route().to_string(), "#0 -> #2 -> #1 -> #3 -> #0");

        let diag = 200f64.sqrt();
        let expected = diag + 10.0 + diag + 10.0;
        assert!((walk.distance() - expected).abs() < 1e-9);
        assert!((walk.distance() - walk.route().distance(&pts, false).unwrap()).abs() < 1e-9);
    }

    #[test]
    fn unknown_dots_are_rejected() {
        let pts = square();
        assert!(matches!(
            Walk::new(&pts, PointId(9)),
            Err(PlanError::UnknownReference(PointId(9)))
        ));
        let mut walk = Walk::new(&pts, PointId(1)).unwrap();
        assert_eq!(
            walk.visit(PointId(9)),
            Err(PlanError::UnknownReference(PointId(9)))
        );
        assert_eq!(walk.moves(), 0);
    }

    #[test]
    fn score_against_nearest_neighbor() {
        let pts = square();
        let optimal = NearestNeighbor
            .plan_scored(&pts, PlanRequest::from(PointId(0)))
            .unwrap();
        assert!((optimal.distance - 40.0).abs() < 1e-9);

        let mut walk = Walk::new(&pts, PointId(0)).unwrap();
        for id in [2, 1, 3, 0] {
            walk.visit(PointId(id)).unwrap();
        }
        let score = walk.score(optimal.distance);
        let extra = score.difference().unwrap();
        assert!((extra - (2.0 * 200f64.sqrt() - 20.0)).abs() < 1e-9);

        let perfect = RouteScore {
            player: 40.0,
            optimal: 40.0,
        };
        assert_eq!(perfect.difference(), None);
    }
}

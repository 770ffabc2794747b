//! Routes and their evaluation.

use std::collections::HashMap;
use std::fmt;

use dotroute_core::{Point, PointId};

use crate::distance::euclidean;
use crate::error::PlanError;

/// Total length of the polyline through `points` in order.
///
/// With `close_loop` the edge from the last point back to the first is
/// added. Routes of length ≤ 1 measure 0.
pub fn total_distance(points: &[Point], close_loop: bool) -> f64 {
    if points.len() <= 1 {
        return 0.0;
    }
    let open: f64 = points.windows(2).map(|w| euclidean(&w[0], &w[1])).sum();
    if close_loop {
        open + euclidean(&points[points.len() - 1], &points[0])
    } else {
        open
    }
}

/// An ordered visiting sequence of point ids.
///
/// Ids are not repeated, except that a cycle may end with its start again
/// (see [`Route::closed`]).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Route(Vec<PointId>);

impl Route {
    pub fn new(ids: Vec<PointId>) -> Self {
        Self(ids)
    }

    pub fn ids(&self) -> &[PointId] {
        &self.0
    }

    pub fn into_ids(self) -> Vec<PointId> {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// First id of the route.
    pub fn start(&self) -> Option<PointId> {
        self.0.first().copied()
    }

    /// Last id of the route.
    pub fn end(&self) -> Option<PointId> {
        self.0.last().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = PointId> + '_ {
        self.0.iter().copied()
    }

    /// Whether the route ends where it started after visiting something else.
    pub fn is_closed(&self) -> bool {
        self.0.len() > 1 && self.start() == self.end()
    }

    /// The same route with its start appended, forming an explicit cycle.
    ///
    /// Routes that are already closed, or have fewer than two ids, are
    /// returned unchanged.
    pub fn closed(mut self) -> Self {
        if self.0.len() > 1 && !self.is_closed() {
            self.0.push(self.0[0]);
        }
        self
    }

    /// Look up every id in `points`, in route order.
    pub fn resolve(&self, points: &[Point]) -> Result<Vec<Point>, PlanError> {
        let by_id: HashMap<PointId, &Point> = points.iter().map(|p| (p.id, p)).collect();
        self.0
            .iter()
            .map(|id| {
                by_id
                    .get(id)
                    .map(|p| **p)
                    .ok_or(PlanError::UnknownReference(*id))
            })
            .collect()
    }

    /// Length of the route over `points`; see [`total_distance`].
    pub fn distance(&self, points: &[Point], close_loop: bool) -> Result<f64, PlanError> {
        Ok(total_distance(&self.resolve(points)?, close_loop))
    }
}

impl From<Vec<PointId>> for Route {
    fn from(ids: Vec<PointId>) -> Self {
        Self(ids)
    }
}

impl FromIterator<PointId> for Route {
    fn from_iter<I: IntoIterator<Item = PointId>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, id) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " -> ")?;
            }
            write!(f, "{id}")?;
        }
        Ok(())
    }
}

/// A planner's route together with its evaluated length.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlannedRoute {
    pub route: Route,
    pub distance: f64,
    /// Whether `distance` includes the closing edge back to the start.
    pub closed: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn diagonal() -> Vec<Point> {
        vec![
            Point::new(0, 10.0, 20.0),
            Point::new(1, 20.0, 30.0),
            Point::new(2, 30.0, 40.0),
        ]
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn open_and_closed_lengths() {
        let pts = diagonal();
        let step = 200f64.sqrt();
        assert!(approx(total_distance(&pts, false), 2.0 * step));
        assert!(approx(total_distance(&pts, true), 4.0 * step));
        assert!(approx(total_distance(&pts, false), 28.284271247461902));
        assert!(approx(total_distance(&pts, true), 56.568542494923804));
    }

    #[test]
    fn short_routes_measure_zero() {
        assert_eq!(total_distance(&[], true), 0.0);
        assert_eq!(total_distance(&[Point::new(0, 5.0, 5.0)], true), 0.0);
    }

    #[test]
    fn explicit_cycle_matches_close_loop() {
        let pts = diagonal();
        let route: Route = pts.iter().map(|p| p.id).collect();
        let cycle = route.clone().closed();
        assert!(!route.is_closed());
        assert!(cycle.is_closed());
        assert_eq!(cycle.len(), 4);
        assert_eq!(cycle.clone().closed(), cycle);
        assert!(approx(
            cycle.distance(&pts, false).unwrap(),
            route.distance(&pts, true).unwrap()
        ));
    }

    #[test]
    fn single_id_is_never_closed() {
        let r = Route::new(vec![PointId(3)]);
        assert!(!r.is_closed());
        assert_eq!(r.clone().closed(), r);
    }

    #[test]
    fn resolve_reports_unknown_ids() {
        let pts = diagonal();
        let r = Route::from(vec![PointId(2), PointId(0)]);
        let resolved = r.resolve(&pts).unwrap();
        assert_eq!(resolved[0].xy(), (30.0, 40.0));
        assert_eq!(resolved[1].xy(), (10.0, 20.0));

        let bad = Route::from(vec![PointId(0), PointId(7)]);
        assert_eq!(
            bad.distance(&pts, false),
            Err(PlanError::UnknownReference(PointId(7)))
        );
    }

    #[test]
    fn display() {
        let r = Route::from(vec![PointId(0), PointId(2), PointId(1)]);
        assert_eq!(r.to_string(), "#0 -> #2 -> #1");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_round_trip() {
        let planned = PlannedRoute {
            route: Route::from(vec![PointId(0), PointId(1)]),
            distance: 5.0,
            closed: false,
        };
        let json = serde_json::to_string(&planned).unwrap();
        assert_eq!(json, r#"{"route":[0,1],"distance":5.0,"closed":false}"#);
        let back: PlannedRoute = serde_json::from_str(&json).unwrap();
        assert_eq!(back, planned);
    }
}

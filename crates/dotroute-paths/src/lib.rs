//! Route planning over dot sets.
//!
//! This crate turns a set of identified 2D points into an ordered route and
//! measures it:
//!
//! - **Nearest neighbor** greedy tours ([`NearestNeighbor`])
//! - **A\*** best-first search to a goal ([`InformedSearch`], [`astar_path`])
//! - **Route evaluation** ([`total_distance`], [`Route::distance`])
//! - **Player walks** recorded by hand and scored ([`Walk`], [`RouteScore`])
//!
//! Planners implement [`RoutePlanner`] and are interchangeable. They borrow
//! the points read-only and keep all search state local to each call.
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`Pather`] | neighbor enumeration |
//! | [`WeightedPather`] : [`Pather`] | nearest neighbor |
//! | [`AstarPather`] : [`WeightedPather`] | A* |

mod astar;
mod distance;
mod error;
mod frontier;
mod graph;
mod nearest;
mod route;
mod traits;
mod walk;

pub use astar::{InformedSearch, SearchConfig, astar_path};
pub use distance::euclidean;
pub use error::PlanError;
pub use frontier::{Frontier, FrontierEntry};
pub use graph::{CompleteGraph, StraightLine, Zero};
pub use nearest::{NearestNeighbor, nearest_neighbor_order};
pub use route::{PlannedRoute, Route, total_distance};
pub use traits::{AstarPather, Heuristic, Pather, PlanRequest, RoutePlanner, WeightedPather};
pub use walk::{RouteScore, Walk, WalkStep};

//! **dotroute-core** — core types for dot routing.
//!
//! This crate provides the foundational types shared by the *dotroute*
//! planners: identified points, bounding rectangles and a seeded random dot
//! scatterer for building playfields.

pub mod dotgen;
pub mod geom;

pub use dotgen::{DotGen, DotGenConfig, GenError};
pub use geom::{Bounds, Point, PointId};

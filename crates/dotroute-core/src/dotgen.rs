//! Random dot scattering.
//!
//! Dots land on integer coordinates inside the playfield, kept `margin`
//! units away from every edge. Ids are assigned in generation order, so the
//! first dot is the usual start and the last one the default search goal.

use std::fmt;

use rand::{Rng, RngExt};

use crate::geom::{Bounds, Point};

/// Playfield and dot-count settings for [`DotGen`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DotGenConfig {
    /// Playfield width.
    pub width: u32,
    /// Playfield height.
    pub height: u32,
    /// Minimum distance between a dot and the playfield edges.
    pub margin: u32,
    /// Number of dots to scatter.
    pub count: usize,
}

impl Default for DotGenConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            margin: 20,
            count: 5,
        }
    }
}

impl DotGenConfig {
    /// Check that the config describes a non-empty sampling area and at
    /// least one dot.
    pub fn validate(&self) -> Result<(), GenError> {
        if self.count == 0 {
            return Err(GenError::NoDots);
        }
        if self.count > u32::MAX as usize {
            return Err(GenError::TooManyDots(self.count));
        }
        self.upper_corner().map(|_| ())
    }

    // Largest sampled coordinate on each axis, `margin` short of the far edge.
    fn upper_corner(&self) -> Result<(u32, u32), GenError> {
        let hi = |side: u32| side.checked_sub(self.margin).filter(|&hi| hi >= self.margin);
        match (hi(self.width), hi(self.height)) {
            (Some(x), Some(y)) => Ok((x, y)),
            _ => Err(GenError::NoRoom {
                width: self.width,
                height: self.height,
                margin: self.margin,
            }),
        }
    }

    /// The closed rectangle dots are sampled from.
    pub fn bounds(&self) -> Bounds {
        Bounds::new(
            self.margin as f64,
            self.margin as f64,
            self.width.saturating_sub(self.margin) as f64,
            self.height.saturating_sub(self.margin) as f64,
        )
    }
}

/// Errors reported for an unusable [`DotGenConfig`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenError {
    /// `count` is zero.
    NoDots,
    /// `count` does not fit the id space.
    TooManyDots(usize),
    /// The margins leave no area to place dots in.
    NoRoom { width: u32, height: u32, margin: u32 },
}

impl fmt::Display for GenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoDots => write!(f, "dot generation needs at least one dot"),
            Self::TooManyDots(n) => write!(f, "cannot assign ids to {n} dots"),
            Self::NoRoom {
                width,
                height,
                margin,
            } => write!(
                f,
                "playfield {width}x{height} leaves no room inside a margin of {margin}"
            ),
        }
    }
}

impl std::error::Error for GenError {}

/// Dot scatterer driven by a caller-supplied random source.
pub struct DotGen<R: Rng> {
    pub rng: R,
    pub config: DotGenConfig,
}

impl<R: Rng> DotGen<R> {
    /// Create a new generator.
    pub fn new(config: DotGenConfig, rng: R) -> Self {
        Self { rng, config }
    }

    /// Scatter `config.count` dots with ids `0..count`.
    pub fn generate(&mut self) -> Result<Vec<Point>, GenError> {
        self.config.validate()?;
        let c = self.config;
        let (x_hi, y_hi) = c.upper_corner()?;
        let dots = (0..c.count as u32)
            .map(|i| {
                let x = self.rng.random_range(c.margin..=x_hi);
                let y = self.rng.random_range(c.margin..=y_hi);
                Point::new(i, x as f64, y as f64)
            })
            .collect();
        Ok(dots)
    }
}

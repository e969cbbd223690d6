//! Spatial operations: integer grid locations and straight-line distances.
//!
//! Locations are plain 2D integer coordinates. There is no routing; the pickup
//! distance between a rider and a driver is the Euclidean distance between
//! their grid points.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A point on the dispatch grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Location {
    pub x: i32,
    pub y: i32,
}

impl Location {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Straight-line distance to `other`.
    pub fn distance_to(self, other: Location) -> f64 {
        euclidean_distance(self, other)
    }
}

impl From<[i32; 2]> for Location {
    fn from([x, y]: [i32; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<(i32, i32)> for Location {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// `sqrt(dx^2 + dy^2)` over the integer coordinate difference.
///
/// The difference is taken in `i64` so extreme `i32` coordinates cannot
/// overflow before the cast to `f64`.
pub fn euclidean_distance(a: Location, b: Location) -> f64 {
    let dx = (i64::from(a.x) - i64::from(b.x)) as f64;
    let dy = (i64::from(a.y) - i64::from(b.y)) as f64;
    (dx * dx + dy * dy).sqrt()
}

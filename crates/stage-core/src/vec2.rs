//! Continuous 2D position.

use std::fmt;
use std::ops::{Add, Mul, Sub};

use serde::{Deserialize, Serialize};

/// Position or displacement in stage coordinates.
///
/// Serialized as a two-element array `[x, y]`, which is how descriptors
/// carry destinations.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Linear interpolation from `self` towards `other`.
    ///
    /// `ratio = 0.0` returns `self`, `ratio = 1.0` returns `other`.
    /// Ratios outside `[0, 1]` extrapolate; callers clamp if they care.
    pub fn lerp(self, other: Vec2, ratio: f64) -> Vec2 {
        self * (1.0 - ratio) + other * ratio
    }
}

impl From<[f64; 2]> for Vec2 {
    fn from([x, y]: [f64; 2]) -> Self {
        Self { x, y }
    }
}

impl From<Vec2> for [f64; 2] {
    fn from(v: Vec2) -> Self {
        [v.x, v.y]
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Vec2 {
    type Output = Vec2;
    fn mul(self, rhs: f64) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

impl fmt::Display for Vec2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.1}, {:.1})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lerp_endpoints() {
        let a = Vec2::new(0.0, 10.0);
        let b = Vec2::new(100.0, -10.0);

        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        assert_eq!(a.lerp(b, 0.5), Vec2::new(50.0, 0.0));
    }

    #[test]
    fn array_round_trip() {
        let v = Vec2::from([3.0, 4.0]);
        assert_eq!(v, Vec2::new(3.0, 4.0));
        assert_eq!(<[f64; 2]>::from(v), [3.0, 4.0]);
    }
}

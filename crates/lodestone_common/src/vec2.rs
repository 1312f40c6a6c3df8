//! Integer 2D vector for grid positions and sizes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul, Sub};

/// A 2D vector on the integer placement grid.
///
/// Used both for component sizes and for assigned positions. Positions are
/// always read and written at integer grid resolution.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
pub struct Vec2 {
    /// Horizontal coordinate.
    pub x: i32,
    /// Vertical coordinate.
    pub y: i32,
}

impl Vec2 {
    /// The origin / zero-size vector.
    pub const ZERO: Vec2 = Vec2 { x: 0, y: 0 };

    /// Creates a vector from its components.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the area of the axis-aligned box this vector spans as a size.
    ///
    /// Widened to `i64` so large footprints cannot overflow.
    pub fn area(self) -> i64 {
        self.x as i64 * self.y as i64
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

impl Mul<i32> for Vec2 {
    type Output = Vec2;

    fn mul(self, rhs: i32) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

impl fmt::Display for Vec2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn componentwise_arithmetic() {
        let a = Vec2::new(3, -2);
        let b = Vec2::new(1, 5);
        assert_eq!(a + b, Vec2::new(4, 3));
        assert_eq!(a - b, Vec2::new(2, -7));
        assert_eq!(a * 2, Vec2::new(6, -4));
    }

    #[test]
    fn zero_is_identity() {
        let a = Vec2::new(7, 9);
        assert_eq!(a + Vec2::ZERO, a);
        assert_eq!(a - Vec2::ZERO, a);
    }

    #[test]
    fn area() {
        assert_eq!(Vec2::new(3, 4).area(), 12);
        assert_eq!(Vec2::ZERO.area(), 0);
        // No i32 overflow for large footprints
        assert_eq!(Vec2::new(100_000, 100_000).area(), 10_000_000_000);
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", Vec2::new(1, -2)), "(1, -2)");
    }

    #[test]
    fn serde_roundtrip() {
        let v = Vec2::new(-3, 12);
        let json = serde_json::to_string(&v).unwrap();
        let restored: Vec2 = serde_json::from_str(&json).unwrap();
        assert_eq!(v, restored);
    }
}

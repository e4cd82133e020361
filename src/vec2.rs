//! A minimal 2D vector value type.
//!
//! `Vec2` is the only geometric primitive the planner needs: positions,
//! directions and displacements are all represented as `Vec2`. All
//! operations are pure and return new values.

use core::ops::{Add, Sub};

use crate::numerics::is_zero;

/// A point or displacement in the plane.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde-support", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }

    pub fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }

    pub fn scale(self, s: f64) -> Vec2 {
        Vec2::new(self.x * s, self.y * s)
    }

    pub fn dot(self, rhs: Vec2) -> f64 {
        self.x * rhs.x + self.y * rhs.y
    }

    pub fn mag(self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Returns a unit vector in the same direction, or the zero vector if
    /// `self` is (approximately) the zero vector. Callers that need a
    /// well-defined direction must guard against the zero case themselves.
    pub fn unit(self) -> Vec2 {
        let m = self.mag();
        if is_zero(m) {
            Vec2::ZERO
        } else {
            self.scale(1.0 / m)
        }
    }

    /// Scales `self` down so that its magnitude does not exceed `m`. Leaves
    /// `self` unchanged if it is already within the limit.
    pub fn limit(self, m: f64) -> Vec2 {
        let mag = self.mag();
        if mag > m && !is_zero(mag) {
            self.scale(m / mag)
        } else {
            self
        }
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::add(self, rhs)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::sub(self, rhs)
    }
}

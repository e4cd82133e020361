//! Per-axis kinematic limits and the geometry the path is planned over.

use crate::error::PlannerError;
use crate::numerics::INF_SENTINEL;
use crate::vec2::Vec2;

/// A single commanded corner of the input path: where to go, and how fast
/// the caller would like to travel along the segment leading into it.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-support", derive(serde::Serialize, serde::Deserialize))]
pub struct InputWaypoint {
    pub position: Vec2,
    pub desired_speed: f64,
}

impl InputWaypoint {
    pub fn new(position: Vec2, desired_speed: f64) -> Self {
        Self {
            position,
            desired_speed,
        }
    }
}

/// An ordered sequence of waypoints the tool visits after leaving the
/// externally supplied start position.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde-support", derive(serde::Serialize, serde::Deserialize))]
pub struct InputPath {
    pub waypoints: Vec<InputWaypoint>,
}

impl InputPath {
    pub fn new(waypoints: Vec<InputWaypoint>) -> Self {
        Self { waypoints }
    }

    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    /// Rejects a path that cannot be planned: empty, or any non-positive
    /// desired speed.
    pub fn validate(&self) -> Result<(), PlannerError> {
        if self.waypoints.is_empty() {
            return Err(PlannerError::EmptyPath);
        }
        for (index, wp) in self.waypoints.iter().enumerate() {
            if !(wp.desired_speed > 0.0) {
                return Err(PlannerError::NonPositiveSpeed {
                    index,
                    speed: wp.desired_speed,
                });
            }
        }
        Ok(())
    }
}

/// Immutable per-axis kinematic configuration.
///
/// This is the crate's configuration surface: callers that load limits
/// from an external key/value store (out of scope here) build one of
/// these directly and hand it to [`crate::planner::plan`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-support", derive(serde::Serialize, serde::Deserialize))]
pub struct AxisLimits {
    pub max_speed_x: f64,
    pub max_speed_y: f64,
    pub accel_x: f64,
    pub accel_y: f64,
    pub min_junction_speed: f64,
    pub junction_deviation: f64,
    pub cutting_speed: f64,
    pub travel_speed: f64,
}

impl Default for AxisLimits {
    fn default() -> Self {
        Self {
            max_speed_x: 500.0,
            max_speed_y: 500.0,
            accel_x: 3000.0,
            accel_y: 3000.0,
            min_junction_speed: 0.0,
            junction_deviation: 0.01,
            cutting_speed: 200.0,
            travel_speed: 500.0,
        }
    }
}

impl AxisLimits {
    /// Rejects a configuration that violates the positivity constraints
    /// from the data model: all speeds and accelerations strictly
    /// positive, `min_junction_speed` non-negative, `junction_deviation`
    /// strictly positive.
    pub fn validate(&self) -> Result<(), PlannerError> {
        let positive = [
            ("max_speed_x", self.max_speed_x),
            ("max_speed_y", self.max_speed_y),
            ("accel_x", self.accel_x),
            ("accel_y", self.accel_y),
            ("junction_deviation", self.junction_deviation),
            ("cutting_speed", self.cutting_speed),
            ("travel_speed", self.travel_speed),
        ];
        for (name, value) in positive {
            if !(value > 0.0) {
                return Err(PlannerError::InvalidAxisLimits { reason: name });
            }
        }
        if self.min_junction_speed < 0.0 {
            return Err(PlannerError::InvalidAxisLimits {
                reason: "min_junction_speed",
            });
        }
        Ok(())
    }

    /// The largest scalar magnitude achievable along unit direction `d`
    /// given the per-axis speed caps: `min(|max_speed_x/dx|, |max_speed_y/dy|)`.
    pub fn max_speed_along(&self, d: Vec2) -> f64 {
        project(d, self.max_speed_x, self.max_speed_y)
    }

    /// Same projection, for the per-axis acceleration caps.
    pub fn max_accel_along(&self, d: Vec2) -> f64 {
        project(d, self.accel_x, self.accel_y)
    }
}

/// `L(d) = min(|Lx/dx|, |Ly/dy|)`, with a zero direction component treated
/// as an unconstrained (infinite, sentinel) axis.
fn project(d: Vec2, lx: f64, ly: f64) -> f64 {
    let bound = |limit: f64, component: f64| -> f64 {
        if component.abs() < 1e-12 {
            INF_SENTINEL
        } else {
            (limit / component).abs()
        }
    };
    bound(lx, d.x).min(bound(ly, d.y))
}

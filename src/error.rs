//! Error types for the motion planning crate.

use thiserror::Error;

/// Errors that reject a planning request before any work is done.
///
/// The planner has no other fallible path: once inputs pass validation,
/// geometry and arithmetic cannot fail, only degrade (see
/// [`crate::profile::Profile::degraded_at`]).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlannerError {
    /// `input_path` had zero waypoints.
    #[error("input path is empty")]
    EmptyPath,

    /// A waypoint's `desired_speed` was not strictly positive.
    #[error("waypoint {index} has non-positive desired speed {speed}")]
    NonPositiveSpeed { index: usize, speed: f64 },

    /// An `AxisLimits` field violated its positivity/non-negativity constraint.
    #[error("invalid axis limits: {reason}")]
    InvalidAxisLimits { reason: &'static str },
}

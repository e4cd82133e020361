//! # Toolpath Planner
//!
//! A deterministic two-axis motion planner: given an ordered polyline of
//! waypoints with desired cruise speeds, a starting position, and a set of
//! per-axis kinematic limits, produces a time-parameterized trapezoidal
//! velocity profile.
//!
//! The planner couples three stages:
//! - [`junction`] computes, for each waypoint, the maximum speed at which
//!   the tool may pass through that corner without exceeding the
//!   centripetal-acceleration bound, then runs a backward feasibility pass.
//! - [`segment`] turns each pair of consecutive planned waypoints into a
//!   1-3 point trapezoid (or truncated triangle) of constant-acceleration
//!   sub-segments.
//! - [`planner`] composes the two into the single entry point, [`plan`].
//!
//! The crate is a pure function over its inputs: no I/O, no shared state,
//! no suspension points. See [`plan`] for the entry point.

pub mod error;
pub mod junction;
pub mod limits;
pub mod numerics;
pub mod planner;
pub mod profile;
pub mod segment;
pub mod vec2;

pub use error::PlannerError;
pub use limits::{AxisLimits, InputPath, InputWaypoint};
pub use planner::plan;
pub use profile::{position_at, total_time, Profile};
pub use segment::SpeedPoint;
pub use vec2::Vec2;

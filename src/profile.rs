//! The planner's output: an ordered, timed sequence of [`SpeedPoint`]s.

use crate::segment::SpeedPoint;
use crate::vec2::Vec2;

/// The full result of a [`crate::planner::plan`] call.
///
/// `points` is never empty for a successfully planned, non-degenerate path
/// (a path whose every waypoint collapses into the start position plans to
/// an empty profile; `total_time` and `position_at` treat that case as
/// "already arrived").
///
/// `degraded_at` lists the indices (into the *original* `InputPath`, after
/// duplicate-position waypoints have been dropped) where the backward pass
/// could not satisfy a successor's feasible speed in one step and had to
/// lower it. Empty when the path was fully feasible.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde-support", derive(serde::Serialize, serde::Deserialize))]
pub struct Profile {
    pub start_position: Vec2,
    pub points: Vec<SpeedPoint>,
    pub degraded_at: Vec<usize>,
}

impl Profile {
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Total traversal time of the profile, in seconds. Zero for an empty
/// profile (degenerate path that never leaves the start position).
pub fn total_time(profile: &Profile) -> f64 {
    profile.points.last().map(|p| p.time).unwrap_or(0.0)
}

/// Samples the tool position at time `t`, measured from profile start.
///
/// `t` before the first sub-segment or after the last is clamped to the
/// profile's start/end position respectively.
pub fn position_at(profile: &Profile, t: f64) -> Vec2 {
    let points = &profile.points;
    let Some(last) = points.last() else {
        return profile.start_position;
    };
    if t <= 0.0 {
        return points[0].start;
    }

    let idx = points.iter().position(|p| p.time > t);
    let Some(idx) = idx else {
        return last.target;
    };

    let point = points[idx];
    let t_prev = if idx == 0 { 0.0 } else { points[idx - 1].time };
    let dt = t - t_prev;
    let s = point.speed * dt + 0.5 * point.acceleration * dt * dt;
    point.start + point.direction.scale(s)
}

/// True when `t` falls exactly on a sub-segment boundary, within the
/// numerics epsilon. Used by tests that check the round-trip invariant at
/// both profile endpoints.
#[cfg(test)]
fn at_boundary(profile: &Profile, t: f64) -> bool {
    use crate::numerics::is_zero;
    profile.points.iter().any(|p| is_zero(p.time - t))
}

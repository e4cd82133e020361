//! Junction-speed computation and the backward feasibility pass.
//!
//! This module turns an `InputPath` plus a starting position into, for
//! each waypoint, the speed the tool actually passes through it at and
//! the cruise cap of the segment leading into it. The result feeds
//! directly into [`crate::segment`].

use tracing::warn;

use crate::limits::{AxisLimits, InputPath};
use crate::numerics::{approx_ge, INF_SENTINEL};
use crate::vec2::Vec2;

/// One waypoint's solved entry into the trapezoid synthesis stage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Junction {
    pub position: Vec2,
    pub max_junction_speed: f64,
    pub final_speed: f64,
    pub max_segment_speed: f64,
}

/// Result of the junction solve: one [`Junction`] per input waypoint, in
/// traversal order, plus the indices (into this same array) where the
/// backward pass had to lower a successor's feasible speed because a
/// single pass could not satisfy it.
pub struct SolveResult {
    pub junctions: Vec<Junction>,
    pub degraded_at: Vec<usize>,
}

/// Computes the maximum speed at which the corner `p1` (between `p0` and
/// `p2`) may be passed without exceeding the centripetal-acceleration
/// bound implied by `junction_deviation`.
fn corner_junction_speed(p0: Vec2, p1: Vec2, p2: Vec2, limits: &AxisLimits) -> f64 {
    const DELTA: f64 = 1e-6;

    let u1 = (p1 - p0).unit();
    let u2 = (p2 - p1).unit();
    let cos_theta = -(u1.dot(u2));

    if cos_theta > 1.0 - DELTA {
        // Reversal: the tool must come to a stop to turn around.
        return limits.min_junction_speed;
    }
    if cos_theta < -1.0 + DELTA {
        // Collinear: no geometric constraint, only the segment caps apply.
        return INF_SENTINEL;
    }

    let a_j = limits.max_accel_along((u2 - u1).unit());
    let sin_half = (0.5 * (1.0 - cos_theta)).sqrt();
    let computed = (a_j * limits.junction_deviation * sin_half / (1.0 - sin_half)).sqrt();
    computed.max(limits.min_junction_speed)
}

/// Runs the junction solver over `path`, starting from `start_position`
/// at rest. `path` must already be free of consecutive duplicate
/// positions (see [`crate::planner::drop_degenerate_waypoints`]).
pub fn solve(path: &InputPath, start_position: Vec2, limits: &AxisLimits) -> SolveResult {
    let n = path.waypoints.len();
    debug_assert!(n > 0, "solve() requires a non-empty, validated path");

    let position = |k: usize| -> Vec2 { path.waypoints[k].position };
    let predecessor = |k: usize| -> Vec2 {
        if k == 0 {
            start_position
        } else {
            position(k - 1)
        }
    };

    // Entering-segment geometry and cruise cap, one per waypoint: the
    // segment from `predecessor(k)` to `position(k)`.
    let mut entering_dir = vec![Vec2::ZERO; n];
    let mut entering_dist = vec![0.0_f64; n];
    let mut max_segment_speed = vec![0.0_f64; n];
    for k in 0..n {
        let delta = position(k) - predecessor(k);
        entering_dir[k] = delta.unit();
        entering_dist[k] = delta.mag();
        let cruise_cap = limits.max_speed_along(entering_dir[k]);
        max_segment_speed[k] = path.waypoints[k].desired_speed.min(cruise_cap);
    }

    // Corner-deviation cap at each waypoint. The last waypoint is a
    // forced stop; the others are computed from the triangle formed by
    // their predecessor, themselves, and their successor.
    let mut max_junction_speed = vec![0.0_f64; n];
    for k in 0..n {
        max_junction_speed[k] = if k == n - 1 {
            0.0
        } else {
            corner_junction_speed(predecessor(k), position(k), position(k + 1), limits)
        };
    }

    // Backward pass: propagate the stopping constraint from the last
    // waypoint back to the first.
    let mut final_speed = vec![0.0_f64; n];
    final_speed[n - 1] = 0.0;
    let mut degraded_at = Vec::new();

    for k in (0..n.saturating_sub(1)).rev() {
        let a = limits.max_accel_along(entering_dir[k + 1]);
        let d = entering_dist[k + 1];
        let desired_final = max_junction_speed[k].min(max_segment_speed[k + 1]);

        let delta_v_achievable =
            ((desired_final * desired_final + 2.0 * a * d).sqrt() - desired_final).abs();
        let required_delta_v = (desired_final - final_speed[k + 1]).abs();

        if approx_ge(delta_v_achievable, required_delta_v) {
            final_speed[k] = desired_final;
        } else if desired_final >= final_speed[k + 1] {
            let target = final_speed[k + 1];
            let v_entry = target + ((target * target + 2.0 * a * d).sqrt() - target).abs();
            final_speed[k] = v_entry;
        } else {
            // Single-pass infeasible: even decelerating all the way from
            // `desired_final` cannot bring us down to the successor's
            // required `final_speed`. Lower the successor to what is
            // actually reachable from `desired_final` and flag it.
            let reachable = (desired_final * desired_final + 2.0 * a * d).sqrt();
            warn!(
                waypoint = k + 1,
                requested = final_speed[k + 1],
                reachable,
                "backward pass could not satisfy successor's final speed in one step; lowering it"
            );
            final_speed[k + 1] = reachable;
            degraded_at.push(k + 1);
            final_speed[k] = desired_final;
        }
    }

    let junctions = (0..n)
        .map(|k| Junction {
            position: position(k),
            max_junction_speed: max_junction_speed[k],
            final_speed: final_speed[k],
            max_segment_speed: max_segment_speed[k],
        })
        .collect();

    degraded_at.sort_unstable();
    degraded_at.dedup();

    SolveResult {
        junctions,
        degraded_at,
    }
}

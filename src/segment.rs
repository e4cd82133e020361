//! Per-pair trapezoid synthesis: turns two consecutive planned waypoints
//! into 1–3 constant-acceleration [`SpeedPoint`]s.

use crate::limits::AxisLimits;
use crate::numerics::is_zero;
use crate::vec2::Vec2;

/// One constant-acceleration sub-segment of the output profile.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-support", derive(serde::Serialize, serde::Deserialize))]
pub struct SpeedPoint {
    pub start: Vec2,
    pub target: Vec2,
    pub direction: Vec2,
    pub speed: f64,
    pub acceleration: f64,
    pub time: f64,
}

/// The planned waypoint a segment starts from.
#[derive(Debug, Clone, Copy)]
pub struct PlannedEntry {
    pub position: Vec2,
    pub speed: f64,
}

/// The planned waypoint a segment ends at.
#[derive(Debug, Clone, Copy)]
pub struct PlannedExit {
    pub position: Vec2,
    pub final_speed: f64,
    pub max_speed: f64,
}

/// Plans the trapezoid (or truncated triangle) connecting `entry` to
/// `exit`, appending its sub-segments to `out` with cumulative timestamps
/// starting at `t0`. Returns the cumulative time at `exit`.
///
/// A zero-length segment (`entry.position == exit.position`, within
/// tolerance) emits nothing and returns `t0` unchanged.
pub fn plan_segment(
    entry: PlannedEntry,
    exit: PlannedExit,
    limits: &AxisLimits,
    t0: f64,
    out: &mut Vec<SpeedPoint>,
) -> f64 {
    let delta = exit.position - entry.position;
    let d = delta.mag();
    if is_zero(d) {
        return t0;
    }
    let u = delta.unit();
    let a = limits.max_accel_along(u);

    let v0 = entry.speed;
    let vf = exit.final_speed;
    let v_c = exit.max_speed;

    let d_accel = (v_c * v_c - v0 * v0) / (2.0 * a);
    let d_decel = (v_c * v_c - vf * vf) / (2.0 * a);

    let mut t = t0;

    if d_accel + d_decel < d {
        // Full trapezoid: accelerate, cruise, decelerate.
        let cruise_len = d - d_accel - d_decel;
        t = emit(out, entry.position, u, v0, a, d_accel, t);
        let cruise_start = entry.position + u.scale(d_accel);
        t = emit(out, cruise_start, u, v_c, 0.0, cruise_len, t);
        let decel_start = cruise_start + u.scale(cruise_len);
        emit(out, decel_start, u, v_c, -a, d_decel, t)
    } else {
        // Cruise is unreachable: truncated triangle, or a single
        // monotone accel/decel leg if the peak falls outside [0, d].
        let v_peak_sq = a * d + (v0 * v0 + vf * vf) / 2.0;
        let v_peak = v_peak_sq.max(0.0).sqrt();
        let d_p = (v_peak * v_peak - v0 * v0) / (2.0 * a);

        if d_p >= 0.0 && d_p <= d {
            t = emit(out, entry.position, u, v0, a, d_p, t);
            let decel_start = entry.position + u.scale(d_p);
            emit(out, decel_start, u, v_peak, -a, d - d_p, t)
        } else {
            let signed_a = if v0 <= vf { a } else { -a };
            emit(out, entry.position, u, v0, signed_a, d, t)
        }
    }
}

/// Appends a single constant-acceleration sub-segment of length `len`
/// starting at `start` with entry speed `speed`, returning the new
/// cumulative time.
fn emit(
    out: &mut Vec<SpeedPoint>,
    start: Vec2,
    direction: Vec2,
    speed: f64,
    acceleration: f64,
    len: f64,
    t_prev: f64,
) -> f64 {
    if is_zero(len) {
        return t_prev;
    }
    let exit_speed_sq = speed * speed + 2.0 * acceleration * len;
    let exit_speed = exit_speed_sq.max(0.0).sqrt();
    let dt = 2.0 * len / (speed + exit_speed);
    let time = t_prev + dt;
    out.push(SpeedPoint {
        start,
        target: start + direction.scale(len),
        direction,
        speed,
        acceleration,
        time,
    });
    time
}

//! The planner façade: composes [`crate::junction`] and [`crate::segment`]
//! into the single entry point, [`plan`].

use tracing::info;

use crate::error::PlannerError;
use crate::junction;
use crate::limits::{AxisLimits, InputPath, InputWaypoint};
use crate::numerics::is_zero;
use crate::profile::Profile;
use crate::segment::{self, PlannedEntry, PlannedExit};
use crate::vec2::Vec2;

/// Plans a full velocity profile for `path`, starting from rest at
/// `start_position` under `limits`.
///
/// Validates `path` and `limits` before doing any work; see
/// [`PlannerError`] for the rejected cases. Consecutive waypoints at the
/// same position (including a leading waypoint coincident with
/// `start_position`) are dropped before planning — they contribute no
/// segment and would otherwise divide by a zero-length direction vector.
pub fn plan(
    path: &InputPath,
    limits: &AxisLimits,
    start_position: Vec2,
) -> Result<Profile, PlannerError> {
    path.validate()?;
    limits.validate()?;

    let deduped = drop_degenerate_waypoints(path, start_position);

    info!(
        waypoints = path.len(),
        planned_waypoints = deduped.len(),
        "planning toolpath"
    );

    if deduped.is_empty() {
        return Ok(Profile {
            start_position,
            points: Vec::new(),
            degraded_at: Vec::new(),
        });
    }

    let solved = junction::solve(&InputPath::new(deduped), start_position, limits);

    let mut points = Vec::new();
    let mut entry = PlannedEntry {
        position: start_position,
        speed: 0.0,
    };
    let mut t = 0.0;

    for j in &solved.junctions {
        let exit = PlannedExit {
            position: j.position,
            final_speed: j.final_speed,
            max_speed: j.max_segment_speed,
        };
        t = segment::plan_segment(entry, exit, limits, t, &mut points);
        entry = PlannedEntry {
            position: j.position,
            speed: j.final_speed,
        };
    }

    Ok(Profile {
        start_position,
        points,
        degraded_at: solved.degraded_at,
    })
}

/// Drops waypoints whose position coincides (within tolerance) with the
/// position immediately before them, including a leading run coincident
/// with `start_position`. The backward pass and trapezoid synthesis both
/// assume every consecutive pair defines a non-degenerate segment.
fn drop_degenerate_waypoints(path: &InputPath, start_position: Vec2) -> Vec<InputWaypoint> {
    let mut out = Vec::with_capacity(path.waypoints.len());
    let mut prev = start_position;
    for wp in &path.waypoints {
        if !is_zero((wp.position - prev).mag()) {
            out.push(*wp);
            prev = wp.position;
        }
    }
    out
}

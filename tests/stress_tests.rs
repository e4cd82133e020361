//! Stress and edge-case tests: larger paths, reversals, and the
//! decelerate-limited "degraded" backward-pass branch.

use toolpath_planner::{plan, total_time, AxisLimits, InputPath, InputWaypoint, PlannerError, Vec2};

fn limits() -> AxisLimits {
    AxisLimits {
        max_speed_x: 500.0,
        max_speed_y: 500.0,
        accel_x: 3000.0,
        accel_y: 3000.0,
        min_junction_speed: 0.0,
        junction_deviation: 0.01,
        ..AxisLimits::default()
    }
}

#[test]
fn many_small_segments_plan_without_panicking() {
    let mut waypoints = Vec::new();
    for i in 1..=2000 {
        let x = (i as f64) * 5.0;
        let y = if i % 2 == 0 { 0.0 } else { 5.0 };
        waypoints.push(InputWaypoint::new(Vec2::new(x, y), 300.0));
    }
    let path = InputPath::new(waypoints);
    let profile = plan(&path, &limits(), Vec2::ZERO).unwrap();
    assert!(!profile.points.is_empty());
    for w in profile.points.windows(2) {
        assert!(w[0].time <= w[1].time + 1e-9);
    }
    assert!(total_time(&profile) > 0.0);
}

#[test]
fn reversal_forces_two_independent_stop_to_stop_triangles() {
    let path = InputPath::new(vec![
        InputWaypoint::new(Vec2::new(100.0, 0.0), 500.0),
        InputWaypoint::new(Vec2::new(0.0, 0.0), 500.0),
    ]);
    let profile = plan(&path, &limits(), Vec2::ZERO).unwrap();
    // First leg decelerates to zero at the turnaround, second leg starts
    // from zero: nowhere in the profile should speed exceed what a single
    // 100-unit triangle at a=3000 can reach (sqrt(3000*100) ~ 547, capped
    // by max_speed 500).
    let peak = profile
        .points
        .iter()
        .map(|p| p.speed)
        .fold(0.0_f64, f64::max);
    assert!(peak <= 500.0 + 1e-6);
}

#[test]
fn degraded_corner_is_flagged_when_a_tiny_leg_cannot_ramp_up_in_time() {
    // wp0 is a reversal off the start (forced final_speed = 0 there), one
    // hundredth of a unit from wp1. wp1 -> wp2 is a long 1000-unit run, so
    // the backward pass wants wp1's final_speed close to what a full
    // deceleration from wp2 over 1000 units allows (~141.4). But wp0 -> wp1
    // is far too short, at this acceleration, to ramp up from 0 to 141.4:
    // the single backward-pass step cannot satisfy it, so wp1's
    // final_speed is lowered to what IS reachable and flagged degraded.
    let path = InputPath::new(vec![
        InputWaypoint::new(Vec2::new(0.01, 0.0), 500.0),
        InputWaypoint::new(Vec2::new(0.0, 0.0), 500.0),
        InputWaypoint::new(Vec2::new(-1000.0, 0.0), 500.0),
    ]);
    let l = AxisLimits {
        max_speed_x: 500.0,
        max_speed_y: 500.0,
        accel_x: 10.0,
        accel_y: 10.0,
        min_junction_speed: 0.0,
        junction_deviation: 0.01,
        ..AxisLimits::default()
    };
    let profile = plan(&path, &l, Vec2::ZERO).unwrap();
    assert_eq!(profile.degraded_at, vec![1]);

    // The profile must still be well-formed: it ends at rest at wp2.
    let last = profile.points.last().unwrap();
    let exit_speed_sq =
        (last.speed * last.speed + 2.0 * last.acceleration * (last.target - last.start).mag())
            .max(0.0);
    assert!(exit_speed_sq.sqrt() < 1e-6);
}

#[test]
fn rejects_empty_path() {
    let path = InputPath::new(vec![]);
    assert_eq!(plan(&path, &limits(), Vec2::ZERO), Err(PlannerError::EmptyPath));
}

#[test]
fn rejects_zero_desired_speed() {
    let path = InputPath::new(vec![InputWaypoint::new(Vec2::new(10.0, 0.0), 0.0)]);
    assert_eq!(
        plan(&path, &limits(), Vec2::ZERO),
        Err(PlannerError::NonPositiveSpeed { index: 0, speed: 0.0 })
    );
}

#[test]
fn rejects_non_positive_axis_limit() {
    let mut bad = limits();
    bad.max_speed_y = 0.0;
    let path = InputPath::new(vec![InputWaypoint::new(Vec2::new(10.0, 0.0), 100.0)]);
    assert_eq!(
        plan(&path, &bad, Vec2::ZERO),
        Err(PlannerError::InvalidAxisLimits { reason: "max_speed_y" })
    );
}

#[test]
fn all_duplicate_waypoints_collapse_to_an_already_arrived_profile() {
    let start = Vec2::new(5.0, 5.0);
    let path = InputPath::new(vec![
        InputWaypoint::new(start, 100.0),
        InputWaypoint::new(start, 100.0),
    ]);
    let profile = plan(&path, &limits(), start).unwrap();
    assert!(profile.is_empty());
    assert_eq!(total_time(&profile), 0.0);
    assert_eq!(toolpath_planner::position_at(&profile, 0.0), start);
}

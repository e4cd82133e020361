//! Exercises the optional `serde-support` feature on the crate's public
//! data types. Only compiled when that feature is enabled.

#![cfg(feature = "serde-support")]

use toolpath_planner::{plan, AxisLimits, InputPath, InputWaypoint, Vec2};

#[test]
fn axis_limits_round_trips_through_json() {
    let limits = AxisLimits::default();
    let json = serde_json::to_string(&limits).unwrap();
    let back: AxisLimits = serde_json::from_str(&json).unwrap();
    assert_eq!(limits, back);
}

#[test]
fn profile_round_trips_through_json() {
    let path = InputPath::new(vec![
        InputWaypoint::new(Vec2::new(100.0, 100.0), 200.0),
        InputWaypoint::new(Vec2::new(700.0, 700.0), 200.0),
    ]);
    let profile = plan(&path, &AxisLimits::default(), Vec2::ZERO).unwrap();

    let json = serde_json::to_string(&profile).unwrap();
    let back: toolpath_planner::Profile = serde_json::from_str(&json).unwrap();
    assert_eq!(profile, back);
}

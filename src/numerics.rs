//! Small epsilon helpers shared across the planner.

/// Absolute tolerance used for "is this effectively zero" checks.
pub const EPSILON: f64 = 1e-9;

/// Relative tolerance used by [`approx_ge`].
pub const EPSILON_REL: f64 = 1e-9;

/// A very large but finite stand-in for "no limit on this axis", used when
/// an axis-limit projection divides by a direction component of zero.
pub const INF_SENTINEL: f64 = 1e9;

pub fn is_zero(x: f64) -> bool {
    x.abs() < EPSILON
}

/// `a >= b`, tolerant of floating-point rounding: true whenever `a` is
/// within a relative+absolute epsilon of `b` from above.
pub fn approx_ge(a: f64, b: f64) -> bool {
    a >= b - EPSILON_REL * 1.0_f64.max(a.abs()).max(b.abs())
}

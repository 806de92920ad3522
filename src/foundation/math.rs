/// Round to the nearest integer, ties toward positive infinity.
///
/// `f64::round` sends `-2.5` to `-3.0`; authored pixel constants expect `-2.0`.
pub fn round_px(x: f64) -> f64 {
    (x + 0.5).floor()
}

/// `round_px(x)` with a lower bound, for sizes that must not shrink below `min` on small canvases.
pub fn px_at_least(min: f64, x: f64) -> f64 {
    round_px(x).max(min)
}

/// Linear blend between `a` and `b`.
pub(crate) fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

//! Keyframe primitives: clamped curves and damped springs.

/// Clamped piecewise-linear curves.
pub mod interpolate;
/// Damped-spring progress.
pub mod spring;

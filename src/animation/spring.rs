use crate::foundation::core::Fps;
use crate::foundation::error::{ReelError, ReelResult};

/// Largest simulated step; low frame rates advance the spring at most this far per frame.
const MAX_STEP_MS: f64 = 64.0;
/// Displacement and velocity magnitude under which the simulation is considered at rest.
const REST_EPSILON: f64 = 1e-12;
/// Upper bound on simulated frames when measuring settle time.
const MEASURE_LIMIT_SECS: f64 = 600.0;

/// Physical parameters of a damped spring animating progress from 0 to 1.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SpringConfig {
    /// Damping coefficient (`c`).
    pub damping: f64,
    /// Mass (`m`).
    pub mass: f64,
    /// Stiffness (`k`).
    pub stiffness: f64,
    /// Never report progress above 1.
    #[serde(default)]
    pub overshoot_clamping: bool,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            damping: 10.0,
            mass: 1.0,
            stiffness: 100.0,
            overshoot_clamping: false,
        }
    }
}

impl SpringConfig {
    /// Spring without overshoot clamping.
    pub const fn new(damping: f64, mass: f64, stiffness: f64) -> Self {
        Self {
            damping,
            mass,
            stiffness,
            overshoot_clamping: false,
        }
    }

    /// Toggle overshoot clamping.
    pub const fn with_overshoot_clamping(mut self, on: bool) -> Self {
        self.overshoot_clamping = on;
        self
    }

    /// Reject configurations the simulation cannot evaluate.
    pub fn validate(&self) -> ReelResult<()> {
        let finite =
            self.damping.is_finite() && self.mass.is_finite() && self.stiffness.is_finite();
        if !finite {
            return Err(ReelError::animation("spring parameters must be finite"));
        }
        if self.mass <= 0.0 {
            return Err(ReelError::animation("spring mass must be > 0"));
        }
        if self.stiffness <= 0.0 {
            return Err(ReelError::animation("spring stiffness must be > 0"));
        }
        if self.damping < 0.0 {
            return Err(ReelError::animation("spring damping must be >= 0"));
        }
        Ok(())
    }

    /// Damping ratio `ζ = c / (2·√(k·m))`; below 1 the spring oscillates.
    pub fn damping_ratio(&self) -> f64 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }

    /// Undamped angular frequency `ω₀ = √(k/m)`.
    pub fn natural_frequency(&self) -> f64 {
        (self.stiffness / self.mass).sqrt()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct SpringState {
    position: f64,
    // Stored negated: `advance` treats `-velocity` as the initial velocity of each step.
    velocity: f64,
    last_ms: f64,
}

impl SpringState {
    fn at_rest() -> Self {
        Self {
            position: 0.0,
            velocity: 0.0,
            last_ms: 0.0,
        }
    }

    fn is_settled(&self) -> bool {
        (1.0 - self.position).abs() < REST_EPSILON && self.velocity.abs() < REST_EPSILON
    }
}

/// Advance the exact solution of the spring ODE from `state.last_ms` to `now_ms`.
fn advance(state: SpringState, now_ms: f64, cfg: &SpringConfig) -> SpringState {
    const TARGET: f64 = 1.0;

    let dt_ms = (now_ms - state.last_ms).min(MAX_STEP_MS);
    let t = dt_ms / 1000.0;
    let v0 = -state.velocity;
    let x0 = TARGET - state.position;
    let zeta = cfg.damping_ratio();
    let w0 = cfg.natural_frequency();

    let (position, velocity) = if zeta < 1.0 {
        // Underdamped.
        let w1 = w0 * (1.0 - zeta * zeta).sqrt();
        let (s1, c1) = (w1 * t).sin_cos();
        let envelope = (-zeta * w0 * t).exp();
        let frag = envelope * (s1 * ((v0 + zeta * w0 * x0) / w1) + x0 * c1);
        let velocity = zeta * w0 * frag - envelope * (c1 * (v0 + zeta * w0 * x0) - w1 * x0 * s1);
        (TARGET - frag, velocity)
    } else {
        // Critically damped; also used for overdamped configurations.
        let envelope = (-w0 * t).exp();
        let position = TARGET - envelope * (x0 + (v0 + w0 * x0) * t);
        let velocity = envelope * (v0 * (t * w0 - 1.0) + t * x0 * w0 * w0);
        (position, velocity)
    };

    SpringState {
        position,
        velocity,
        last_ms: now_ms,
    }
}

fn frame_ms(fps: Fps, frame: u64) -> f64 {
    fps.frames_to_secs(frame) * 1000.0
}

/// Spring progress `local_frame` frames after the spring was released.
///
/// The spring starts at rest at 0 and is simulated one frame at a time at `fps`, so the result
/// depends on the frame rate the same way a sampled animation does. Negative local frames return
/// 0. Cost grows with `local_frame` until the spring comes to rest.
pub fn spring_progress(local_frame: i64, fps: Fps, cfg: &SpringConfig) -> f64 {
    let frames = u64::try_from(local_frame).unwrap_or(0);
    let mut state = SpringState::at_rest();
    for f in 0..=frames {
        state = advance(state, frame_ms(fps, f), cfg);
        if state.is_settled() {
            break;
        }
    }

    if cfg.overshoot_clamping {
        state.position.min(1.0)
    } else {
        state.position
    }
}

/// Number of frames after release until progress stays within `threshold` of 1.
pub fn frames_to_rest(fps: Fps, cfg: &SpringConfig, threshold: f64) -> u64 {
    let limit = (MEASURE_LIMIT_SECS * fps.as_f64()).ceil() as u64;
    let mut state = SpringState::at_rest();
    let mut last_outside = 0u64;
    for f in 0..=limit {
        state = advance(state, frame_ms(fps, f), cfg);
        if (1.0 - state.position).abs() >= threshold {
            last_outside = f;
        }
        if state.is_settled() {
            break;
        }
    }
    last_outside + 1
}

#[cfg(test)]
#[path = "../../tests/unit/animation/spring.rs"]
mod tests;

use smallvec::SmallVec;

use crate::foundation::core::FrameIndex;
use crate::foundation::error::{ReelError, ReelResult};
use crate::foundation::math::lerp;

/// Piecewise-linear mapping from breakpoints to output values, clamped at both ends.
///
/// Inputs before the first breakpoint yield the first output and inputs after the last breakpoint
/// yield the last output; values are never extrapolated.
#[derive(Clone, Debug, PartialEq)]
pub struct Curve {
    input: SmallVec<[f64; 4]>,
    output: SmallVec<[f64; 4]>,
}

impl Curve {
    /// Build a validated curve.
    ///
    /// Requires at least two breakpoints, strictly increasing and finite, and the same number of
    /// finite outputs.
    pub fn new(input: &[f64], output: &[f64]) -> ReelResult<Self> {
        if input.len() < 2 {
            return Err(ReelError::animation(format!(
                "curve needs at least 2 breakpoints, got {}",
                input.len()
            )));
        }
        if input.len() != output.len() {
            return Err(ReelError::animation(format!(
                "curve breakpoints ({}) and outputs ({}) differ in length",
                input.len(),
                output.len()
            )));
        }
        if input.iter().chain(output).any(|v| !v.is_finite()) {
            return Err(ReelError::animation("curve values must be finite"));
        }
        if !input.windows(2).all(|w| w[0] < w[1]) {
            return Err(ReelError::animation(
                "curve breakpoints must be strictly increasing",
            ));
        }
        Ok(Self {
            input: SmallVec::from_slice(input),
            output: SmallVec::from_slice(output),
        })
    }

    /// Two-point curve `[x0, x1] -> [y0, y1]`.
    pub fn linear(x0: f64, x1: f64, y0: f64, y1: f64) -> ReelResult<Self> {
        Self::new(&[x0, x1], &[y0, y1])
    }

    /// Curve mapping unit progress `[0, 1]` onto `[from, to]`.
    pub fn unit(from: f64, to: f64) -> ReelResult<Self> {
        Self::linear(0.0, 1.0, from, to)
    }

    /// Sample the curve at `x`.
    pub fn sample(&self, x: f64) -> f64 {
        let n = self.input.len();
        // `!(x > first)` also routes NaN to the first output.
        if !(x > self.input[0]) {
            return self.output[0];
        }
        if x >= self.input[n - 1] {
            return self.output[n - 1];
        }

        let idx = self.input.partition_point(|&b| b <= x);
        let (x0, x1) = (self.input[idx - 1], self.input[idx]);
        let t = (x - x0) / (x1 - x0);
        lerp(self.output[idx - 1], self.output[idx], t)
    }

    /// Sample the curve with a frame index as input.
    pub fn at_frame(&self, frame: FrameIndex) -> f64 {
        self.sample(frame.as_f64())
    }

    /// Breakpoints in increasing order.
    pub fn breakpoints(&self) -> &[f64] {
        &self.input
    }

    /// Output values matching [`Curve::breakpoints`].
    pub fn outputs(&self) -> &[f64] {
        &self.output
    }
}

/// One-shot clamped interpolation of `x` over `input -> output`.
pub fn interpolate(x: f64, input: &[f64], output: &[f64]) -> ReelResult<f64> {
    Ok(Curve::new(input, output)?.sample(x))
}

#[cfg(test)]
#[path = "../../tests/unit/animation/interpolate.rs"]
mod tests;

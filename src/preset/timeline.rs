use serde::Serialize;

use crate::foundation::core::{FrameIndex, FrameRange};
use crate::preset::config::PresetKind;

/// Named phases of the hero reel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// First screenshot zooms in.
    Intro,
    /// White panel widens to the full stage.
    Expand,
    /// Final screenshot settles.
    Final,
    /// Everything fades out.
    Outro,
    /// Mock UI reveals inside the panel (extended preset only).
    Content,
}

impl Phase {
    /// Lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Intro => "intro",
            Self::Expand => "expand",
            Self::Final => "final",
            Self::Outro => "outro",
            Self::Content => "content",
        }
    }
}

/// `(start, duration)` pair naming when an effect is active.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Interval {
    /// Phase this interval drives.
    pub phase: Phase,
    /// First frame.
    pub start: u64,
    /// Length in frames.
    pub duration: u64,
}

impl Interval {
    /// Interval starting at `start`.
    pub const fn new(phase: Phase, start: u64, duration: u64) -> Self {
        Self {
            phase,
            start,
            duration,
        }
    }

    /// Exclusive end frame.
    pub const fn end(self) -> u64 {
        self.start + self.duration
    }

    /// Frames as a half-open range.
    pub fn range(self) -> FrameRange {
        FrameRange {
            start: FrameIndex(self.start),
            end: FrameIndex(self.end()),
        }
    }

    /// Frame relative to the interval start; negative before it.
    pub fn local(self, frame: FrameIndex) -> i64 {
        frame.local_to(self.start)
    }

    /// Linear progress through the interval, clamped to `[0, 1]`.
    pub fn progress(self, frame: FrameIndex) -> f64 {
        if self.duration == 0 {
            return if frame.0 >= self.start { 1.0 } else { 0.0 };
        }
        (self.local(frame) as f64 / self.duration as f64).clamp(0.0, 1.0)
    }

    /// Start shifted by `delta` frames, as a curve breakpoint.
    pub(crate) fn at(self, delta: i64) -> f64 {
        self.start as f64 + delta as f64
    }
}

pub(crate) const INTRO: Interval = Interval::new(Phase::Intro, 0, 55);
pub(crate) const EXPAND: Interval = Interval::new(Phase::Expand, 38, 60);
pub(crate) const FINAL: Interval = Interval::new(Phase::Final, 92, 80);
pub(crate) const OUTRO: Interval = Interval::new(Phase::Outro, 170, 18);
pub(crate) const CONTENT: Interval = Interval::new(Phase::Content, 56, 30);

/// Frame at which the last authored curve reaches its final value.
pub const AUTHORED_DURATION: u64 = 220;

/// Static table of intervals for a preset.
///
/// Consulted on every evaluation; holds no per-frame state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Timeline {
    intervals: Vec<Interval>,
    duration: u64,
}

impl Timeline {
    /// Interval table for `kind`, ordered by start frame.
    pub fn for_preset(kind: PresetKind) -> Self {
        let mut intervals = vec![INTRO, EXPAND, FINAL, OUTRO];
        if kind == PresetKind::HeroReelMockUi {
            intervals.push(CONTENT);
        }
        intervals.sort_by_key(|i| i.start);
        Self {
            intervals,
            duration: AUTHORED_DURATION,
        }
    }

    /// Every interval, ordered by start frame.
    pub fn intervals(&self) -> &[Interval] {
        &self.intervals
    }

    /// Interval for `phase`, if the preset has one.
    pub fn get(&self, phase: Phase) -> Option<Interval> {
        self.intervals.iter().copied().find(|i| i.phase == phase)
    }

    /// Authored length in frames.
    pub fn duration(&self) -> u64 {
        self.duration
    }

    /// `[0, duration)`.
    pub fn range(&self) -> FrameRange {
        FrameRange {
            start: FrameIndex(0),
            end: FrameIndex(self.duration),
        }
    }

    /// Intervals containing `frame`.
    pub fn active_at(&self, frame: FrameIndex) -> impl Iterator<Item = Interval> + '_ {
        self.intervals
            .iter()
            .copied()
            .filter(move |i| i.range().contains(frame))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/preset/timeline.rs"]
mod tests;

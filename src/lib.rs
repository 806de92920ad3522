//! heroreel computes product-demo "hero reel" animations as pure functions of the frame.
//!
//! Given a frame index, a video config and up to three screenshot handles, a preset produces a
//! deterministic scene graph (layered screenshots, an expanding white panel, a draw-on accent
//! stroke, glow and vignette) for an external compositor to rasterize:
//!
//! - Compile a [`HeroReel`] for a [`PresetKind`] and [`VideoConfig`]
//! - Evaluate [`HeroReel::params`] or [`HeroReel::scene`] per frame
//! - Or [`sweep`] a [`FrameRange`], optionally in parallel, with change detection
#![forbid(unsafe_code)]
#![deny(missing_docs)]

/// Clamped curves and springs.
pub mod animation;
/// Colors and image handles.
pub mod assets;
/// Per-frame values, fingerprints and batch evaluation.
pub mod eval;
/// Frame, canvas and error primitives.
pub mod foundation;
/// Hero reel presets.
pub mod preset;
/// Output scene graph.
pub mod scene;

pub use crate::animation::interpolate::{Curve, interpolate};
pub use crate::animation::spring::{SpringConfig, frames_to_rest, spring_progress};
pub use crate::assets::color::Color;
pub use crate::assets::images::{IMAGE_SLOTS, ImageRef, ImageSlots};
pub use crate::eval::fingerprint::{SceneFingerprint, fingerprint_scene};
pub use crate::eval::params::FrameParams;
pub use crate::eval::sweep::{SweepOpts, SweepStats, SweptFrame, sweep, sweep_each};
pub use crate::foundation::core::{
    Affine, BezPath, Canvas, Fps, FrameIndex, FrameRange, Point, Rect, Size, Vec2,
};
pub use crate::foundation::error::{ReelError, ReelResult};
pub use crate::preset::config::{PresetKind, ReelJob, VideoConfig};
pub use crate::preset::hero_reel::{HeroReel, evaluate};
pub use crate::preset::timeline::{Interval, Phase, Timeline};
pub use crate::scene::dsl::NodeBuilder;
pub use crate::scene::model::{Node, NodeKind, Scene};

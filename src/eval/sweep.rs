use rayon::prelude::*;
use serde::Serialize;

use crate::{
    assets::images::ImageSlots,
    eval::fingerprint::{SceneFingerprint, fingerprint_scene},
    foundation::core::{FrameIndex, FrameRange},
    foundation::error::{ReelError, ReelResult},
    preset::hero_reel::HeroReel,
    scene::model::Scene,
};

#[derive(Clone, Debug)]
/// Threading and chunking controls for batch evaluation.
pub struct SweepOpts {
    /// Evaluate frames on a rayon pool when `true`.
    pub parallel: bool,
    /// Chunk size in frames for batched scheduling.
    pub chunk_size: usize,
    /// Optional explicit worker thread count.
    pub threads: Option<usize>,
}

impl Default for SweepOpts {
    fn default() -> Self {
        Self {
            parallel: false,
            chunk_size: 64,
            threads: None,
        }
    }
}

/// One evaluated frame of a sweep.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SweptFrame {
    /// Frame index.
    pub frame: FrameIndex,
    /// Scene fingerprint.
    pub fingerprint: SceneFingerprint,
    /// `true` when the scene matches the previous frame's.
    pub unchanged: bool,
    /// Evaluated scene.
    pub scene: Scene,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
/// Aggregated sweep counters.
pub struct SweepStats {
    /// Total evaluated frames.
    pub frames_total: u64,
    /// Frames whose scene differs from the previous frame.
    pub frames_changed: u64,
    /// Frames identical to the previous frame.
    pub frames_unchanged: u64,
}

/// Evaluate every frame of `range` in order, flagging frames identical to their predecessor.
///
/// The first frame of the range is always reported as changed. Serial and parallel sweeps
/// produce the same output. Collects every frame; use [`sweep_each`] for long ranges.
pub fn sweep(
    reel: &HeroReel,
    range: FrameRange,
    images: &ImageSlots,
    opts: &SweepOpts,
) -> ReelResult<(Vec<SweptFrame>, SweepStats)> {
    let mut out = Vec::with_capacity(range.len_frames().min(4096) as usize);
    let stats = sweep_each(reel, range, images, opts, |f| {
        out.push(f);
        Ok(())
    })?;
    Ok((out, stats))
}

/// Streaming form of [`sweep`]: hands each frame to `sink` in frame order.
///
/// In parallel mode at most one chunk of scenes is held at a time. The first sink error
/// stops the sweep and is returned.
#[tracing::instrument(skip(reel, images, opts, sink), fields(preset = %reel.kind()))]
pub fn sweep_each<F>(
    reel: &HeroReel,
    range: FrameRange,
    images: &ImageSlots,
    opts: &SweepOpts,
    mut sink: F,
) -> ReelResult<SweepStats>
where
    F: FnMut(SweptFrame) -> ReelResult<()>,
{
    if range.is_empty() {
        return Err(ReelError::validation("sweep range must be non-empty"));
    }

    let mut stats = SweepStats::default();
    let mut prev: Option<SceneFingerprint> = None;

    let mut push = |scene: Scene, fingerprint: SceneFingerprint| -> ReelResult<()> {
        let unchanged = prev == Some(fingerprint);
        prev = Some(fingerprint);
        stats.frames_total += 1;
        if unchanged {
            stats.frames_unchanged += 1;
        } else {
            stats.frames_changed += 1;
        }
        sink(SweptFrame {
            frame: scene.frame,
            fingerprint,
            unchanged,
            scene,
        })
    };

    if !opts.parallel {
        for f in range.frames() {
            let scene = reel.scene(f, images);
            let fp = fingerprint_scene(&scene);
            push(scene, fp)?;
        }
    } else {
        let pool = build_thread_pool(opts.threads)?;
        let chunk_size = normalized_chunk_size(opts.chunk_size);

        let mut chunk_start = range.start.0;
        while chunk_start < range.end.0 {
            let chunk_end = chunk_start.saturating_add(chunk_size).min(range.end.0);
            let frames: Vec<FrameIndex> = (chunk_start..chunk_end).map(FrameIndex).collect();
            let evaluated = pool.install(|| {
                frames
                    .par_iter()
                    .map(|&f| {
                        let scene = reel.scene(f, images);
                        let fp = fingerprint_scene(&scene);
                        (scene, fp)
                    })
                    .collect::<Vec<_>>()
            });
            for (scene, fp) in evaluated {
                push(scene, fp)?;
            }
            chunk_start = chunk_end;
        }
    }

    tracing::debug!(
        frames_total = stats.frames_total,
        frames_unchanged = stats.frames_unchanged,
        "sweep finished"
    );
    Ok(stats)
}

fn build_thread_pool(threads: Option<usize>) -> ReelResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(ReelError::validation(
            "sweep 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| ReelError::Other(anyhow::anyhow!("failed to build rayon thread pool: {e}")))
}

fn normalized_chunk_size(chunk_size: usize) -> u64 {
    if chunk_size == 0 {
        1
    } else {
        chunk_size as u64
    }
}

#[cfg(test)]
#[path = "../../tests/unit/eval/sweep.rs"]
mod tests;

use super::*;
use crate::foundation::core::Fps;
use crate::preset::config::{PresetKind, VideoConfig};

fn reel() -> HeroReel {
    HeroReel::new(
        PresetKind::HeroReel,
        VideoConfig::new(640, 360, Fps::default()).unwrap(),
    )
    .unwrap()
}

fn range(start: u64, end: u64) -> FrameRange {
    FrameRange::new(FrameIndex(start), FrameIndex(end)).unwrap()
}

#[test]
fn empty_range_is_rejected() {
    let r = reel();
    let empty = FrameRange {
        start: FrameIndex(5),
        end: FrameIndex(5),
    };
    let err = sweep(&r, empty, &ImageSlots::empty(), &SweepOpts::default()).unwrap_err();
    assert!(matches!(err, ReelError::Validation(_)));
}

#[test]
fn zero_threads_is_rejected() {
    let opts = SweepOpts {
        parallel: true,
        threads: Some(0),
        ..SweepOpts::default()
    };
    assert!(sweep(&reel(), range(0, 4), &ImageSlots::empty(), &opts).is_err());
}

#[test]
fn serial_and_parallel_agree() {
    let r = reel();
    let imgs = ImageSlots::full("a", "b", "c");
    let (serial, s_stats) = sweep(&r, range(0, 60), &imgs, &SweepOpts::default()).unwrap();
    let opts = SweepOpts {
        parallel: true,
        chunk_size: 7,
        threads: Some(3),
    };
    let (parallel, p_stats) = sweep(&r, range(0, 60), &imgs, &opts).unwrap();
    assert_eq!(serial, parallel);
    assert_eq!(s_stats, p_stats);
    let frames: Vec<u64> = parallel.iter().map(|f| f.frame.0).collect();
    assert_eq!(frames, (0..60).collect::<Vec<_>>());
}

#[test]
fn frames_past_the_timeline_are_unchanged() {
    let r = reel();
    let (frames, stats) = sweep(
        &r,
        range(215, 240),
        &ImageSlots::full("a", "b", "c"),
        &SweepOpts::default(),
    )
    .unwrap();
    assert!(!frames[0].unchanged);
    assert!(frames.iter().skip(7).all(|f| f.unchanged));
    assert_eq!(stats.frames_total, 25);
    assert_eq!(stats.frames_changed + stats.frames_unchanged, 25);
    assert!(stats.frames_unchanged >= 18);
}

#[test]
fn animated_frames_are_changed() {
    let r = reel();
    let (frames, stats) = sweep(
        &r,
        range(30, 50),
        &ImageSlots::full("a", "b", "c"),
        &SweepOpts::default(),
    )
    .unwrap();
    assert!(frames.iter().all(|f| !f.unchanged));
    assert_eq!(stats.frames_changed, 20);
    assert_eq!(frames[3].fingerprint, fingerprint_scene(&frames[3].scene));
}

#[test]
fn zero_chunk_size_still_progresses() {
    let opts = SweepOpts {
        parallel: true,
        chunk_size: 0,
        threads: Some(1),
    };
    let (frames, _) = sweep(&reel(), range(0, 3), &ImageSlots::empty(), &opts).unwrap();
    assert_eq!(frames.len(), 3);
}

#[test]
fn streaming_sweep_matches_collected_sweep() {
    let r = reel();
    let imgs = ImageSlots::full("a", "b", "c");
    let opts = SweepOpts {
        parallel: true,
        chunk_size: 4,
        threads: Some(2),
    };
    let (collected, stats) = sweep(&r, range(40, 58), &imgs, &opts).unwrap();

    let mut streamed = Vec::new();
    let streamed_stats = sweep_each(&r, range(40, 58), &imgs, &opts, |f| {
        streamed.push(f);
        Ok(())
    })
    .unwrap();
    assert_eq!(streamed, collected);
    assert_eq!(streamed_stats, stats);
}

#[test]
fn sink_error_stops_the_sweep() {
    let opts = SweepOpts {
        parallel: true,
        chunk_size: 8,
        threads: Some(2),
    };
    let mut seen = Vec::new();
    let err = sweep_each(&reel(), range(0, 100), &ImageSlots::empty(), &opts, |f| {
        if f.frame.0 == 10 {
            return Err(ReelError::validation("sink full"));
        }
        seen.push(f.frame.0);
        Ok(())
    })
    .unwrap_err();
    assert!(matches!(err, ReelError::Validation(_)));
    assert_eq!(seen, (0..10).collect::<Vec<_>>());
}

use super::*;

#[test]
fn frame_range_contains_boundaries() {
    let r = FrameRange::new(FrameIndex(2), FrameIndex(5)).unwrap();
    assert!(!r.contains(FrameIndex(1)));
    assert!(r.contains(FrameIndex(2)));
    assert!(r.contains(FrameIndex(4)));
    assert!(!r.contains(FrameIndex(5)));
    assert_eq!(r.frames().count(), 3);
}

#[test]
fn frame_range_rejects_inverted_bounds() {
    assert!(FrameRange::new(FrameIndex(5), FrameIndex(2)).is_err());
    assert!(
        FrameRange::new(FrameIndex(3), FrameIndex(3))
            .unwrap()
            .is_empty()
    );
}

#[test]
fn local_frame_is_signed() {
    assert_eq!(FrameIndex(10).local_to(38), -28);
    assert_eq!(FrameIndex(38).local_to(38), 0);
    assert_eq!(FrameIndex(u64::MAX).local_to(0), i64::MAX);
}

#[test]
fn fps_rejects_zero_parts() {
    assert!(Fps::new(0, 1).is_err());
    assert!(Fps::new(30, 0).is_err());
    let fps = Fps::new(30000, 1001).unwrap();
    assert!((fps.as_f64() - 29.97).abs() < 1e-2);
    assert!((fps.frames_to_secs(30) - 30.0 * 1001.0 / 30000.0).abs() < 1e-12);
}

#[test]
fn canvas_rejects_zero_dimensions() {
    assert!(Canvas::new(0, 720).is_err());
    assert!(Canvas::new(1280, 0).is_err());
    let c = Canvas::new(1280, 720).unwrap();
    assert_eq!(c.rect(), Rect::new(0.0, 0.0, 1280.0, 720.0));
}

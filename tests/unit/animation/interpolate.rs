use super::*;

#[test]
fn clamps_outside_breakpoints() {
    let c = Curve::new(&[10.0, 26.0, 94.0], &[0.0, 1.0, 0.35]).unwrap();
    assert_eq!(c.sample(-5.0), 0.0);
    assert_eq!(c.sample(0.0), 0.0);
    assert_eq!(c.sample(10.0), 0.0);
    assert_eq!(c.sample(94.0), 0.35);
    assert_eq!(c.sample(10_000.0), 0.35);
}

#[test]
fn interpolates_within_segments() {
    let c = Curve::new(&[0.0, 26.0, 52.0], &[0.0, 1.0, 0.0]).unwrap();
    assert_eq!(c.sample(13.0), 0.5);
    assert_eq!(c.sample(26.0), 1.0);
    assert_eq!(c.sample(39.0), 0.5);
    assert_eq!(c.at_frame(FrameIndex(52)), 0.0);
}

#[test]
fn monotonic_within_segment() {
    let rising = Curve::linear(16.0, 70.0, 0.0, 1.0).unwrap();
    let falling = Curve::linear(170.0, 188.0, 1.0, 0.0).unwrap();
    let mut prev_up = f64::NEG_INFINITY;
    let mut prev_down = f64::INFINITY;
    for f in 0..250u64 {
        let up = rising.at_frame(FrameIndex(f));
        let down = falling.at_frame(FrameIndex(f));
        assert!(up >= prev_up);
        assert!(down <= prev_down);
        prev_up = up;
        prev_down = down;
    }
}

#[test]
fn output_stays_within_configured_range() {
    let c = Curve::new(&[0.0, 30.0, 160.0, 220.0], &[0.25, 0.18, 0.18, 0.22]).unwrap();
    for f in 0..400u64 {
        let v = c.at_frame(FrameIndex(f));
        assert!((0.18..=0.25).contains(&v), "frame {f} gave {v}");
    }
}

#[test]
fn unit_curve_maps_progress_and_clamps_overshoot() {
    let c = Curve::unit(77.0, 0.0).unwrap();
    assert_eq!(c.sample(0.0), 77.0);
    assert_eq!(c.sample(1.0), 0.0);
    assert_eq!(c.sample(1.02), 0.0);
    assert_eq!(c.sample(0.5), 38.5);
}

#[test]
fn nan_input_yields_first_output() {
    let c = Curve::unit(3.0, 9.0).unwrap();
    assert_eq!(c.sample(f64::NAN), 3.0);
}

#[test]
fn rejects_invalid_definitions() {
    assert!(Curve::new(&[0.0], &[1.0]).is_err());
    assert!(Curve::new(&[0.0, 1.0], &[1.0]).is_err());
    assert!(Curve::new(&[1.0, 1.0], &[0.0, 1.0]).is_err());
    assert!(Curve::new(&[2.0, 1.0], &[0.0, 1.0]).is_err());
    assert!(Curve::new(&[0.0, f64::INFINITY], &[0.0, 1.0]).is_err());
    assert!(matches!(
        Curve::new(&[0.0, 1.0], &[f64::NAN, 1.0]),
        Err(ReelError::Animation(_))
    ));
}

#[test]
fn one_shot_interpolate_matches_curve() {
    assert_eq!(interpolate(55.0, &[34.0, 55.0], &[0.0, 6.0]).unwrap(), 6.0);
    assert!(interpolate(0.0, &[1.0, 0.0], &[0.0, 6.0]).is_err());
}

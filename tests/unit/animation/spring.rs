use super::*;

fn fps30() -> Fps {
    Fps::new(30, 1).unwrap()
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn starts_at_zero_and_ignores_negative_frames() {
    let cfg = SpringConfig::default();
    assert_eq!(spring_progress(0, fps30(), &cfg), 0.0);
    assert_eq!(spring_progress(-12, fps30(), &cfg), 0.0);
    assert_eq!(spring_progress(i64::MIN, fps30(), &cfg), 0.0);
}

#[test]
fn default_spring_matches_reference_samples() {
    let cfg = SpringConfig::default();
    assert!(close(spring_progress(1, fps30(), &cfg), 0.049_415_108_045_101_74));
    assert!(close(spring_progress(5, fps30(), &cfg), 0.695_891_727_212_195_8));
    // Underdamped: overshoots the target.
    assert!(close(spring_progress(10, fps30(), &cfg), 1.155_285_591_377_849_7));
}

#[test]
fn preset_intro_spring_matches_reference_samples() {
    let cfg = SpringConfig::new(16.0, 0.9, 120.0);
    assert!(close(spring_progress(1, fps30(), &cfg), 0.060_653_300_190_219_75));
    assert!(close(spring_progress(5, fps30(), &cfg), 0.665_460_174_880_545_1));
    assert!(close(spring_progress(20, fps30(), &cfg), 1.002_621_173_520_843));
}

#[test]
fn critically_damped_does_not_overshoot() {
    let cfg = SpringConfig::new(20.0, 1.0, 100.0);
    assert!(close(cfg.damping_ratio(), 1.0));
    assert!(close(spring_progress(10, fps30(), &cfg), 0.845_412_695_495_239_6));
    let mut prev = 0.0;
    for f in 0..120 {
        let v = spring_progress(f, fps30(), &cfg);
        assert!(v <= 1.0 + 1e-12, "frame {f} overshot: {v}");
        assert!(v >= prev - 1e-12);
        prev = v;
    }
}

#[test]
fn overdamped_uses_critical_response() {
    let critical = SpringConfig::new(20.0, 1.0, 100.0);
    let overdamped = SpringConfig::new(40.0, 1.0, 100.0);
    assert!(overdamped.damping_ratio() > 1.0);
    for f in [1, 5, 10, 30] {
        assert_eq!(
            spring_progress(f, fps30(), &critical),
            spring_progress(f, fps30(), &overdamped)
        );
    }
}

#[test]
fn converges_to_one() {
    for cfg in [
        SpringConfig::default(),
        SpringConfig::new(16.0, 0.9, 120.0),
        SpringConfig::new(22.0, 0.9, 140.0),
    ] {
        let v = spring_progress(10_000, fps30(), &cfg);
        assert!((v - 1.0).abs() < 1e-9, "{cfg:?} settled at {v}");
    }
}

#[test]
fn huge_local_frames_terminate() {
    let v = spring_progress(i64::MAX, fps30(), &SpringConfig::default());
    assert!((v - 1.0).abs() < 1e-9);
}

#[test]
fn overshoot_clamping_caps_progress() {
    let cfg = SpringConfig::default().with_overshoot_clamping(true);
    for f in 0..60 {
        assert!(spring_progress(f, fps30(), &cfg) <= 1.0);
    }
    assert_eq!(spring_progress(10, fps30(), &cfg), 1.0);
}

#[test]
fn low_frame_rates_cap_step_length() {
    // At 10 fps each frame is 100 ms but the simulation advances at most 64 ms.
    let cfg = SpringConfig::default();
    let fps10 = Fps::new(10, 1).unwrap();
    assert!(close(spring_progress(3, fps10, &cfg), 0.815_036_979_498_267_7));
}

#[test]
fn frames_to_rest_orders_by_stiffness_and_damping() {
    let fps = fps30();
    let loose = frames_to_rest(fps, &SpringConfig::default(), 0.005);
    let firm = frames_to_rest(fps, &SpringConfig::new(22.0, 0.9, 140.0), 0.005);
    assert!(firm < loose, "firm={firm} loose={loose}");
    assert!((20..=40).contains(&loose));
    let v = spring_progress(firm as i64, fps, &SpringConfig::new(22.0, 0.9, 140.0));
    assert!((1.0 - v).abs() < 0.005);
}

#[test]
fn validate_rejects_degenerate_configs() {
    assert!(SpringConfig::default().validate().is_ok());
    assert!(SpringConfig::new(10.0, 0.0, 100.0).validate().is_err());
    assert!(SpringConfig::new(10.0, 1.0, 0.0).validate().is_err());
    assert!(SpringConfig::new(-1.0, 1.0, 100.0).validate().is_err());
    assert!(SpringConfig::new(f64::NAN, 1.0, 100.0).validate().is_err());
}

#[test]
fn config_json_defaults_overshoot_clamping() {
    let cfg: SpringConfig =
        serde_json::from_str(r#"{"damping": 16, "mass": 0.9, "stiffness": 120}"#).unwrap();
    assert_eq!(cfg, SpringConfig::new(16.0, 0.9, 120.0));
}

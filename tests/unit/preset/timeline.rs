use super::*;

#[test]
fn base_preset_has_four_phases() {
    let t = Timeline::for_preset(PresetKind::HeroReel);
    let phases: Vec<Phase> = t.intervals().iter().map(|i| i.phase).collect();
    assert_eq!(
        phases,
        vec![Phase::Intro, Phase::Expand, Phase::Final, Phase::Outro]
    );
    assert!(t.get(Phase::Content).is_none());
    assert_eq!(t.duration(), 220);
}

#[test]
fn mock_ui_preset_adds_content_in_start_order() {
    let t = Timeline::for_preset(PresetKind::HeroReelMockUi);
    let starts: Vec<u64> = t.intervals().iter().map(|i| i.start).collect();
    assert_eq!(starts, vec![0, 38, 56, 92, 170]);
    assert_eq!(t.get(Phase::Content), Some(Interval::new(Phase::Content, 56, 30)));
}

#[test]
fn interval_local_and_progress() {
    let outro = Interval::new(Phase::Outro, 170, 18);
    assert_eq!(outro.end(), 188);
    assert_eq!(outro.local(FrameIndex(160)), -10);
    assert_eq!(outro.progress(FrameIndex(0)), 0.0);
    assert_eq!(outro.progress(FrameIndex(179)), 0.5);
    assert_eq!(outro.progress(FrameIndex(10_000)), 1.0);
    assert_eq!(outro.at(-6), 164.0);

    let instant = Interval::new(Phase::Intro, 5, 0);
    assert_eq!(instant.progress(FrameIndex(4)), 0.0);
    assert_eq!(instant.progress(FrameIndex(5)), 1.0);
}

#[test]
fn active_at_reports_overlapping_phases() {
    let t = Timeline::for_preset(PresetKind::HeroReel);
    let active: Vec<Phase> = t.active_at(FrameIndex(40)).map(|i| i.phase).collect();
    assert_eq!(active, vec![Phase::Intro, Phase::Expand]);
    assert_eq!(t.active_at(FrameIndex(200)).count(), 0);
}

use super::*;
use crate::assets::images::{ImageRef, ImageSlots};
use crate::foundation::core::{FrameIndex, Fps};
use crate::preset::config::{PresetKind, VideoConfig};
use crate::preset::hero_reel::HeroReel;
use crate::scene::dsl::NodeBuilder;

fn reel() -> HeroReel {
    HeroReel::new(
        PresetKind::HeroReelMockUi,
        VideoConfig::new(1280, 720, Fps::default()).unwrap(),
    )
    .unwrap()
}

#[test]
fn equal_scenes_share_fingerprint_across_frames() {
    let r = reel();
    let imgs = ImageSlots::full("a", "b", "c");
    let a = r.scene(FrameIndex(400), &imgs);
    let b = r.scene(FrameIndex(900), &imgs);
    assert_ne!(a.frame, b.frame);
    assert_eq!(fingerprint_scene(&a), fingerprint_scene(&b));
}

#[test]
fn animated_frames_differ() {
    let r = reel();
    let imgs = ImageSlots::full("a", "b", "c");
    let a = fingerprint_scene(&r.scene(FrameIndex(40), &imgs));
    let b = fingerprint_scene(&r.scene(FrameIndex(41), &imgs));
    assert_ne!(a, b);
}

#[test]
fn image_handles_are_hashed() {
    let r = reel();
    let a = fingerprint_scene(&r.scene(FrameIndex(100), &ImageSlots::full("a", "b", "c")));
    let b = fingerprint_scene(&r.scene(FrameIndex(100), &ImageSlots::full("a", "b", "d")));
    assert_ne!(a, b);
}

#[test]
fn small_style_changes_are_detected() {
    let base = |opacity: f64| Scene {
        frame: FrameIndex(0),
        canvas: crate::foundation::core::Canvas::new(10, 10).unwrap(),
        root: NodeBuilder::group("root")
            .child(NodeBuilder::solid("r", Color::WHITE).opacity(opacity).build())
            .build(),
    };
    assert_eq!(fingerprint_scene(&base(0.5)), fingerprint_scene(&base(0.5)));
    assert_ne!(fingerprint_scene(&base(0.5)), fingerprint_scene(&base(0.5000001)));
    assert_eq!(fingerprint_scene(&base(0.0)), fingerprint_scene(&base(-0.0)));
}

#[test]
fn every_image_field_is_hashed() {
    let scene = |source: &str, max_height: f64| Scene {
        frame: FrameIndex(0),
        canvas: crate::foundation::core::Canvas::new(10, 10).unwrap(),
        root: NodeBuilder::group("root")
            .child(NodeBuilder::image("img", ImageRef::new(source), 8.0, max_height).build())
            .build(),
    };
    let base = fingerprint_scene(&scene("a.png", 6.0));
    assert_eq!(base, fingerprint_scene(&scene("a.png", 6.0)));
    assert_ne!(base, fingerprint_scene(&scene("b.png", 6.0)));
    assert_ne!(base, fingerprint_scene(&scene("a.png", 6.5)));

    let tags: Vec<u8> = [ImageFit::Contain].into_iter().map(fit_tag).collect();
    assert_eq!(tags, vec![0]);
}

#[test]
fn displays_as_32_hex_digits() {
    let fp = SceneFingerprint {
        hi: 0xab,
        lo: 0x1,
    };
    let s = fp.to_string();
    assert_eq!(s.len(), 32);
    assert_eq!(s, "00000000000000ab0000000000000001");
    assert_eq!(serde_json::to_string(&fp).unwrap(), format!("\"{s}\""));
}

use super::*;
use crate::foundation::core::{Canvas, Fps};
use crate::foundation::error::ReelError;

fn config(w: u32, h: u32) -> VideoConfig {
    VideoConfig::new(w, h, Fps::default()).unwrap()
}

fn reel(kind: PresetKind) -> HeroReel {
    HeroReel::new(kind, config(1920, 1080)).unwrap()
}

fn images() -> ImageSlots {
    ImageSlots::full("shot-1.png", "shot-2.png", "shot-3.png")
}

fn close(a: f64, b: f64, eps: f64) -> bool {
    (a - b).abs() <= eps
}

#[test]
fn rejects_invalid_config() {
    let zero = VideoConfig {
        canvas: Canvas {
            width: 0,
            height: 1080,
        },
        fps: Fps::default(),
    };
    assert!(matches!(
        HeroReel::new(PresetKind::HeroReel, zero),
        Err(ReelError::Validation(_))
    ));

    let no_fps = VideoConfig {
        canvas: Canvas {
            width: 1920,
            height: 1080,
        },
        fps: Fps { num: 0, den: 1 },
    };
    assert!(HeroReel::new(PresetKind::HeroReel, no_fps).is_err());
}

#[test]
fn first_screenshot_keyframes() {
    let r = reel(PresetKind::HeroReel);

    let p0 = r.params(FrameIndex(0));
    assert_eq!(p0.heroes[0].opacity, 0.0);
    assert_eq!(p0.heroes[0].scale, 1.06);
    assert_eq!(p0.heroes[0].offset, Vec2::new(115.0, 65.0));
    assert_eq!(p0.outro_fade, 1.0);

    assert_eq!(r.params(FrameIndex(26)).heroes[0].opacity, 1.0);
    assert_eq!(r.params(FrameIndex(52)).heroes[0].opacity, 0.0);
}

#[test]
fn far_future_frame_is_settled() {
    let r = reel(PresetKind::HeroReelMockUi);
    let p = r.params(FrameIndex(10_000));
    assert_eq!(p.outro_fade, 0.0);
    assert!(close(p.heroes[2].scale, 1.0, 1e-9));
    assert!(close(p.heroes[2].offset.x, 0.0, 1e-9));
    assert!(close(p.heroes[2].offset.y, 0.0, 1e-9));
    assert!(p.heroes.iter().all(|h| h.opacity == 0.0));
    assert!(p.is_settled(1e-9));

    let stage = r.layout().stage_local();
    assert!(close(p.white_panel.rect.width(), stage.width(), 1e-6));
    assert!(close(p.white_panel.rect.x0, 0.0, 1e-6));
}

#[test]
fn second_screenshot_offset_follows_frame() {
    let r = reel(PresetKind::HeroReel);
    assert_eq!(r.params(FrameIndex(28)).heroes[1].offset, Vec2::new(38.0, 11.0));
    assert_eq!(r.params(FrameIndex(45)).heroes[1].offset, Vec2::new(19.0, 5.5));
    assert_eq!(r.params(FrameIndex(62)).heroes[1].offset, Vec2::ZERO);
    assert_eq!(r.params(FrameIndex(38)).heroes[1].scale, 1.0);
}

#[test]
fn panel_accent_and_highlight_keyframes() {
    let r = reel(PresetKind::HeroReel);
    let l = r.layout().clone();

    let p0 = r.params(FrameIndex(0));
    assert_eq!(p0.white_panel.rect, l.panel_start);
    assert_eq!(p0.white_panel.opacity, 0.0);
    assert_eq!(p0.accent.draw, 0.0);
    assert_eq!(p0.accent.dash_offset, l.dash_length);
    assert_eq!(p0.vignette_opacity, 0.25);
    assert_eq!(p0.glow_offset, Vec2::ZERO);

    assert_eq!(r.params(FrameIndex(39)).white_panel.opacity, 0.5);
    assert_eq!(r.params(FrameIndex(70)).accent.dash_offset, 0.0);
    assert_eq!(r.params(FrameIndex(60)).glow_offset, Vec2::new(-29.0, 11.0));
    assert_eq!(r.params(FrameIndex(120)).glow_offset, l.glow_drift);

    let h48 = r.params(FrameIndex(48)).highlight;
    assert_eq!(h48.opacity, 0.0);
    assert_eq!(h48.band_left, l.band_travel.0);
    assert!(close(r.params(FrameIndex(64)).highlight.opacity, 0.55, 1e-12));
    assert_eq!(r.params(FrameIndex(94)).highlight.band_left, l.band_travel.1);

    assert!(close(r.params(FrameIndex(94)).accent.opacity, 0.35, 1e-12));
    assert!(close(r.params(FrameIndex(100)).vignette_opacity, 0.18, 1e-12));
    assert!(close(r.params(FrameIndex(179)).outro_fade, 0.5, 1e-12));
    assert_eq!(r.params(FrameIndex(200)).vignette_opacity, 0.0);
}

#[test]
fn base_scene_paint_order() {
    let r = reel(PresetKind::HeroReel);
    let s = r.scene(FrameIndex(60), &images());
    assert_eq!(s.frame, FrameIndex(60));
    assert_eq!(
        s.root.child_ids(),
        vec!["glow", "accent_stroke", "stage", "vignette"]
    );
    assert_eq!(
        s.find("stage").unwrap().child_ids(),
        vec![
            "white_panel",
            "hero_image_1",
            "hero_image_2",
            "hero_image_3",
            "highlight_sweep"
        ]
    );
    assert!(s.find("panel_content").is_none());
    assert_eq!(
        s.find("highlight_sweep").unwrap().child_ids(),
        vec!["highlight_band"]
    );
}

#[test]
fn mock_ui_scene_inserts_content_after_panel() {
    let r = reel(PresetKind::HeroReelMockUi);
    let s = r.scene(FrameIndex(90), &images());
    let stage = s.find("stage").unwrap();
    assert_eq!(stage.child_ids()[..2], ["white_panel", "panel_content"]);
    let p = r.params(FrameIndex(90));
    let content = s.find("panel_content").unwrap();
    assert_eq!(content.rect(), Some(p.white_panel.rect));
    assert_eq!(content.style.opacity, p.content.unwrap().opacity);
    assert!(p.content_in.is_some());
    assert!(reel(PresetKind::HeroReel).params(FrameIndex(90)).content.is_none());
}

#[test]
fn missing_image_removes_only_its_layer() {
    let r = reel(PresetKind::HeroReel);
    let full = r.scene(FrameIndex(100), &images());
    let partial = r.scene(FrameIndex(100), &images().without(1));

    assert!(partial.find("hero_image_2").is_none());
    for id in ["hero_image_1", "hero_image_3", "white_panel", "highlight_sweep", "glow"] {
        assert_eq!(full.find(id), partial.find(id), "{id} changed");
    }
    assert_eq!(
        partial.find("stage").unwrap().children.len(),
        full.find("stage").unwrap().children.len() - 1
    );

    let blank = ImageSlots::from_list([Some(""), None, None]).unwrap();
    assert!(r.scene(FrameIndex(10), &blank).find("hero_image_1").is_none());

    let bare = r.scene(FrameIndex(100), &ImageSlots::empty());
    assert_eq!(
        bare.find("stage").unwrap().child_ids(),
        vec!["white_panel", "highlight_sweep"]
    );
}

#[test]
fn hero_nodes_carry_image_params() {
    let r = reel(PresetKind::HeroReel);
    let p = r.params(FrameIndex(100));
    let s = r.scene(FrameIndex(100), &images());
    let n = s.find("hero_image_3").unwrap();
    assert_eq!(n.style.opacity, p.heroes[2].opacity);
    assert_eq!(n.style.blur_px, p.heroes[2].blur_px);
    assert_eq!(n.style.transform.translate, p.heroes[2].offset);
    assert_eq!(n.style.transform.scale, p.heroes[2].scale);
    assert_eq!(n.style.transform.origin, Origin::Center);
    assert_eq!(n.rect(), Some(r.layout().stage_local()));
    let crate::scene::model::NodeKind::Image {
        source,
        max_width,
        max_height,
        ..
    } = &n.kind
    else {
        panic!("expected image");
    };
    assert_eq!(source.as_str(), "shot-3.png");
    assert_eq!((*max_width, *max_height), (1766.0, 864.0));
}

#[test]
fn evaluation_is_deterministic() {
    let eval = || {
        evaluate(
            PresetKind::HeroReelMockUi,
            FrameIndex(77),
            config(1280, 720),
            &images(),
        )
        .unwrap()
    };
    let (a, b) = (eval(), eval());
    assert_eq!(
        serde_json::to_string(&a).unwrap(),
        serde_json::to_string(&b).unwrap()
    );
}

#[test]
fn geometry_scales_with_canvas() {
    let small = HeroReel::new(PresetKind::HeroReel, config(1280, 720)).unwrap();
    let big = HeroReel::new(PresetKind::HeroReel, config(2560, 1440)).unwrap();
    for f in [0, 30, 45, 60, 90, 120, 180] {
        let (a, b) = (small.params(FrameIndex(f)), big.params(FrameIndex(f)));
        assert_eq!(a.intro_in, b.intro_in);
        assert_eq!(a.expand, b.expand);
        assert_eq!(a.final_settle, b.final_settle);
        assert_eq!(a.accent.draw, b.accent.draw);
        assert_eq!(a.white_panel.opacity, b.white_panel.opacity);

        let (ra, rb) = (a.white_panel.rect, b.white_panel.rect);
        for (x, y) in [(ra.x0, rb.x0), (ra.y0, rb.y0), (ra.x1, rb.x1), (ra.y1, rb.y1)] {
            assert!(close(2.0 * x, y, 2.0), "frame {f}: {x} vs {y}");
        }
        for (ha, hb) in a.heroes.iter().zip(&b.heroes) {
            assert_eq!(ha.scale, hb.scale);
            assert!(close(2.0 * ha.offset.x, hb.offset.x, 2.0));
            assert!(close(2.0 * ha.offset.y, hb.offset.y, 2.0));
        }
        assert!(close(2.0 * a.highlight.band_left, b.highlight.band_left, 2.0));
        assert!(close(2.0 * a.accent.dash_offset, b.accent.dash_offset, 2.0));
    }
}

#[test]
fn reel_is_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HeroReel>();
}

use crate::{
    animation::interpolate::Curve,
    animation::spring::{SpringConfig, spring_progress},
    assets::color::Color,
    assets::images::{IMAGE_SLOTS, ImageSlots},
    eval::params::{AccentParams, FrameParams, HeroParams, HighlightParams, WhitePanelParams},
    foundation::core::{FrameIndex, Point, Rect, Vec2},
    foundation::error::ReelResult,
    preset::config::{PresetKind, VideoConfig},
    preset::layout::StageLayout,
    preset::mock_ui::MockUi,
    preset::timeline::{CONTENT, EXPAND, FINAL, INTRO, OUTRO, Phase, Timeline},
    scene::dsl::NodeBuilder,
    scene::model::{ColorStop, Dash, Gradient, LineCap, Node, Origin, Paint, Scene, Shadow, Stroke},
};

/// Intro zoom spring.
pub const INTRO_SPRING: SpringConfig = SpringConfig::new(16.0, 0.9, 120.0);
/// Panel expansion spring.
pub const EXPAND_SPRING: SpringConfig = SpringConfig::new(18.0, 0.9, 130.0);
/// Final screenshot settle spring.
pub const FINAL_SPRING: SpringConfig = SpringConfig::new(22.0, 0.9, 140.0);
/// Mock UI reveal spring.
pub const CONTENT_SPRING: SpringConfig = SpringConfig::new(18.0, 0.9, 140.0);

const BACKGROUND: Color = Color::rgb(11, 122, 69);
const FONT_FAMILY: &str = "Inter, sans-serif";
const ACCENT: Color = Color::rgba(255, 255, 255, 0.9);
const PANEL_SHADOW: Color = Color::rgba(0, 0, 0, 0.18);
const GLOW_OPACITY: f64 = 0.95;
const BAND_ROTATION_DEG: f64 = 18.0;

/// Screenshot scale and offset each follow their own driver.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum HeroDriver {
    IntroSpring,
    Frame,
    FinalSpring,
}

#[derive(Clone, Debug, PartialEq)]
struct HeroTrack {
    driver: HeroDriver,
    fade: Curve,
    blur: Curve,
    offset_x: Curve,
    offset_y: Curve,
}

#[derive(Clone, Debug, PartialEq)]
struct Curves {
    outro_fade: Curve,
    glow_x: Curve,
    glow_y: Curve,
    heroes: [HeroTrack; IMAGE_SLOTS],
    panel_w: Curve,
    panel_h: Curve,
    panel_x: Curve,
    panel_y: Curve,
    panel_opacity: Curve,
    accent_draw: Curve,
    accent_opacity: Curve,
    vignette: Curve,
    highlight_opacity: Curve,
    band_left: Curve,
}

impl Curves {
    fn new(l: &StageLayout) -> ReelResult<Self> {
        let [o1, o2, o3] = l.hero_offsets;
        let (sw, sh) = (l.stage_w(), l.stage_h());
        let start = l.panel_start;

        Ok(Self {
            outro_fade: Curve::linear(OUTRO.at(0), OUTRO.at(OUTRO.duration as i64), 1.0, 0.0)?,
            glow_x: Curve::linear(0.0, 120.0, 0.0, l.glow_drift.x)?,
            glow_y: Curve::linear(0.0, 120.0, 0.0, l.glow_drift.y)?,
            heroes: [
                HeroTrack {
                    driver: HeroDriver::IntroSpring,
                    fade: Curve::new(&[0.0, 26.0, 52.0], &[0.0, 1.0, 0.0])?,
                    blur: Curve::linear(34.0, 55.0, 0.0, 6.0)?,
                    offset_x: Curve::unit(o1.x, 0.0)?,
                    offset_y: Curve::unit(o1.y, 0.0)?,
                },
                HeroTrack {
                    driver: HeroDriver::Frame,
                    fade: Curve::new(&[34.0, 56.0, 108.0], &[0.0, 1.0, 0.0])?,
                    blur: Curve::linear(86.0, 104.0, 0.0, 7.0)?,
                    offset_x: Curve::linear(EXPAND.at(-10), EXPAND.at(24), o2.x, 0.0)?,
                    offset_y: Curve::linear(EXPAND.at(-10), EXPAND.at(24), o2.y, 0.0)?,
                },
                HeroTrack {
                    driver: HeroDriver::FinalSpring,
                    fade: Curve::new(&[88.0, 110.0, 220.0], &[0.0, 1.0, 1.0])?,
                    blur: Curve::linear(88.0, 110.0, 6.0, 0.0)?,
                    offset_x: Curve::unit(o3.x, 0.0)?,
                    offset_y: Curve::unit(o3.y, 0.0)?,
                },
            ],
            panel_w: Curve::unit(start.width(), sw)?,
            panel_h: Curve::unit(start.height(), sh)?,
            panel_x: Curve::unit(start.x0, 0.0)?,
            panel_y: Curve::unit(start.y0, 0.0)?,
            panel_opacity: Curve::linear(EXPAND.at(-6), EXPAND.at(8), 0.0, 1.0)?,
            accent_draw: Curve::linear(16.0, 70.0, 0.0, 1.0)?,
            accent_opacity: Curve::new(&[10.0, 26.0, 94.0], &[0.0, 1.0, 0.35])?,
            vignette: Curve::new(&[0.0, 30.0, 160.0, 220.0], &[0.25, 0.18, 0.18, 0.22])?,
            highlight_opacity: Curve::new(
                &[EXPAND.at(10), EXPAND.at(26), EXPAND.at(56)],
                &[0.0, 0.55, 0.0],
            )?,
            band_left: Curve::linear(
                EXPAND.at(10),
                EXPAND.at(56),
                l.band_travel.0,
                l.band_travel.1,
            )?,
        })
    }
}

/// Compiled hero reel for one preset and video config.
///
/// Construction validates the config and compiles every curve; evaluation afterwards is a pure
/// function of the frame and never fails. The value is immutable and can be shared across
/// threads.
#[derive(Clone, Debug, PartialEq)]
pub struct HeroReel {
    kind: PresetKind,
    config: VideoConfig,
    timeline: Timeline,
    layout: StageLayout,
    curves: Curves,
    mock_ui: Option<MockUi>,
}

impl HeroReel {
    /// Validate `config` and compile the preset.
    pub fn new(kind: PresetKind, config: VideoConfig) -> ReelResult<Self> {
        config.validate()?;
        for spring in [INTRO_SPRING, EXPAND_SPRING, FINAL_SPRING, CONTENT_SPRING] {
            spring.validate()?;
        }

        let timeline = Timeline::for_preset(kind);
        let layout = StageLayout::new(config.canvas);
        let curves = Curves::new(&layout)?;
        let mock_ui = match timeline.get(Phase::Content) {
            Some(content) => Some(MockUi::new(config.canvas, content)?),
            None => None,
        };

        tracing::debug!(
            preset = %kind,
            width = config.canvas.width,
            height = config.canvas.height,
            fps = config.fps.as_f64(),
            dash_length = layout.dash_length,
            "compiled hero reel"
        );

        Ok(Self {
            kind,
            config,
            timeline,
            layout,
            curves,
            mock_ui,
        })
    }

    /// Preset this reel was compiled for.
    pub fn kind(&self) -> PresetKind {
        self.kind
    }

    /// Video config this reel was compiled for.
    pub fn config(&self) -> VideoConfig {
        self.config
    }

    /// Interval table.
    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    /// Derived geometry.
    pub fn layout(&self) -> &StageLayout {
        &self.layout
    }

    /// Every derived scalar at `frame`.
    pub fn params(&self, frame: FrameIndex) -> FrameParams {
        let c = &self.curves;
        let fps = self.config.fps;

        let intro_in = spring_progress(INTRO.local(frame), fps, &INTRO_SPRING);
        let expand = spring_progress(EXPAND.local(frame), fps, &EXPAND_SPRING);
        let final_settle = spring_progress(FINAL.local(frame), fps, &FINAL_SPRING);
        let content_in = self
            .mock_ui
            .as_ref()
            .map(|_| spring_progress(CONTENT.local(frame), fps, &CONTENT_SPRING));

        let outro_fade = c.outro_fade.at_frame(frame);

        let heroes = c.heroes.each_ref().map(|t| {
            let (driver, scale) = match t.driver {
                HeroDriver::IntroSpring => (intro_in, 1.06 - intro_in * 0.06),
                HeroDriver::Frame => (frame.as_f64(), 1.0 + expand * 0.01),
                HeroDriver::FinalSpring => (final_settle, 1.0 - (1.0 - final_settle) * 0.01),
            };
            HeroParams {
                opacity: t.fade.at_frame(frame) * outro_fade,
                blur_px: t.blur.at_frame(frame),
                offset: Vec2::new(t.offset_x.sample(driver), t.offset_y.sample(driver)),
                scale,
            }
        });

        let (px, py) = (c.panel_x.sample(expand), c.panel_y.sample(expand));
        let white_panel = WhitePanelParams {
            rect: Rect::new(
                px,
                py,
                px + c.panel_w.sample(expand),
                py + c.panel_h.sample(expand),
            ),
            opacity: c.panel_opacity.at_frame(frame),
        };

        let draw = c.accent_draw.at_frame(frame);
        let accent = AccentParams {
            draw,
            opacity: c.accent_opacity.at_frame(frame),
            dash_length: self.layout.dash_length,
            dash_offset: (1.0 - draw) * self.layout.dash_length,
        };

        let content = self.mock_ui.as_ref().zip(content_in).map(|(ui, spring)| {
            ui.params(frame, spring, white_panel.opacity, outro_fade)
        });

        FrameParams {
            frame,
            outro_fade,
            intro_in,
            expand,
            final_settle,
            content_in,
            glow_offset: Vec2::new(c.glow_x.at_frame(frame), c.glow_y.at_frame(frame)),
            heroes,
            white_panel,
            accent,
            highlight: HighlightParams {
                opacity: c.highlight_opacity.at_frame(frame) * outro_fade,
                band_left: c.band_left.at_frame(frame),
            },
            vignette_opacity: c.vignette.at_frame(frame) * outro_fade,
            content,
        }
    }

    /// Scene tree at `frame`; hero layers appear only for filled image slots.
    #[tracing::instrument(skip(self, images), fields(preset = %self.kind))]
    pub fn scene(&self, frame: FrameIndex, images: &ImageSlots) -> Scene {
        let p = self.params(frame);
        let l = &self.layout;
        let canvas = self.config.canvas;

        let stage = NodeBuilder::group("stage")
            .at(l.stage)
            .child(self.white_panel(&p))
            .child_opt(
                self.mock_ui
                    .as_ref()
                    .zip(p.content.as_ref())
                    .map(|(ui, cp)| ui.node(cp, p.white_panel.rect, l.card_radius)),
            )
            .children((0..IMAGE_SLOTS).filter_map(|idx| self.hero_image(idx, &p, images)))
            .child(self.highlight_sweep(&p))
            .build();

        let root = NodeBuilder::group("root")
            .at(canvas.rect())
            .background(Paint::Solid(BACKGROUND))
            .text_defaults(FONT_FAMILY, None)
            .child(self.glow(&p))
            .child(self.accent_stroke(&p))
            .child(stage)
            .child(self.vignette(&p))
            .build();

        tracing::debug!(
            nodes = root.descendants().count(),
            images = images.count(),
            "evaluated scene"
        );

        Scene {
            frame,
            canvas,
            root,
        }
    }

    fn glow(&self, p: &FrameParams) -> Node {
        let radial = |cx: f64, cy: f64, color: Color, reach: f64| Gradient::Radial {
            center: Point::new(cx, cy),
            stops: vec![
                ColorStop::new(0.0, color),
                ColorStop::new(reach, color.with_alpha(0.0)),
            ],
        };
        NodeBuilder::gradient(
            "glow",
            vec![
                radial(0.18, 0.52, Color::rgba(178, 255, 170, 0.70), 0.46),
                radial(0.72, 0.64, Color::rgba(110, 255, 208, 0.40), 0.44),
                radial(0.40, 0.18, Color::rgba(210, 255, 190, 0.22), 0.40),
            ],
        )
        .at(self.layout.glow_rect())
        .translate(p.glow_offset)
        .opacity(GLOW_OPACITY)
        .blur(self.layout.glow_blur)
        .build()
    }

    fn accent_stroke(&self, p: &FrameParams) -> Node {
        NodeBuilder::path(
            "accent_stroke",
            &self.layout.accent_path,
            Stroke {
                color: ACCENT,
                width: self.layout.accent_width,
                cap: LineCap::Round,
                dash: Some(Dash {
                    length: p.accent.dash_length,
                    offset: p.accent.dash_offset,
                }),
            },
        )
        .at(self.config.canvas.rect())
        .opacity(p.accent.opacity)
        .build()
    }

    fn white_panel(&self, p: &FrameParams) -> Node {
        NodeBuilder::solid("white_panel", Color::WHITE)
            .at(p.white_panel.rect)
            .radius(self.layout.card_radius)
            .shadow(Shadow {
                offset: Vec2::new(0.0, self.layout.card_shadow_y),
                blur: self.layout.card_shadow_blur,
                color: PANEL_SHADOW,
            })
            .opacity(p.white_panel.opacity)
            .build()
    }

    fn hero_image(&self, idx: usize, p: &FrameParams, images: &ImageSlots) -> Option<Node> {
        let source = images.get(idx)?.clone();
        let h = p.heroes[idx];
        let max = self.layout.hero_max;
        Some(
            NodeBuilder::image(format!("hero_image_{}", idx + 1), source, max.width, max.height)
                .at(self.layout.stage_local())
                .opacity(h.opacity)
                .blur(h.blur_px)
                .translate(h.offset)
                .scale(h.scale, Origin::Center)
                .build(),
        )
    }

    fn highlight_sweep(&self, p: &FrameParams) -> Node {
        let l = &self.layout;
        let glint = Color::WHITE.with_alpha(0.0);
        let band = NodeBuilder::gradient(
            "highlight_band",
            vec![Gradient::Linear {
                angle_deg: 90.0,
                stops: vec![
                    ColorStop::new(0.0, glint),
                    ColorStop::new(0.5, Color::WHITE.with_alpha(0.55)),
                    ColorStop::new(1.0, glint),
                ],
            }],
        )
        .at_xywh(
            p.highlight.band_left,
            l.band_top,
            l.band_size.width,
            l.band_size.height,
        )
        .rotate(BAND_ROTATION_DEG)
        .blur(l.band_blur)
        .build();

        NodeBuilder::group("highlight_sweep")
            .at(l.stage_local())
            .radius(l.card_radius)
            .clip()
            .opacity(p.highlight.opacity)
            .child(band)
            .build()
    }

    fn vignette(&self, p: &FrameParams) -> Node {
        NodeBuilder::gradient(
            "vignette",
            vec![Gradient::Radial {
                center: Point::new(0.5, 0.5),
                stops: vec![
                    ColorStop::new(0.52, Color::BLACK.with_alpha(0.0)),
                    ColorStop::new(1.0, Color::BLACK.with_alpha(0.28)),
                ],
            }],
        )
        .at(self.config.canvas.rect())
        .opacity(p.vignette_opacity)
        .build()
    }
}

/// Compile `kind` for `config` and evaluate a single frame.
pub fn evaluate(
    kind: PresetKind,
    frame: FrameIndex,
    config: VideoConfig,
    images: &ImageSlots,
) -> ReelResult<Scene> {
    Ok(HeroReel::new(kind, config)?.scene(frame, images))
}

#[cfg(test)]
#[path = "../../tests/unit/preset/hero_reel.rs"]
mod tests;

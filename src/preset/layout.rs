use kurbo::{ParamCurveArclen, Shape};

use crate::foundation::core::{BezPath, Canvas, Point, Rect, Size, Vec2};
use crate::foundation::math::{px_at_least, round_px};

const ARCLEN_ACCURACY: f64 = 1e-3;

/// Canvas-proportional geometry of the hero reel, derived once per canvas.
///
/// Every length here is a whole pixel, rounded the way the authored composition rounds. Rects
/// inside the stage are stage-local; `stage` itself and everything else are canvas coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct StageLayout {
    /// Canvas the layout was derived for.
    pub canvas: Canvas,
    /// Horizontal stage inset.
    pub padding_x: f64,
    /// Vertical stage inset.
    pub padding_y: f64,
    /// Corner radius of the white panel and the highlight clip.
    pub card_radius: f64,
    /// Blur radius of the white panel shadow.
    pub card_shadow_blur: f64,
    /// Vertical offset of the white panel shadow.
    pub card_shadow_y: f64,
    /// Padded inner region holding panel and hero images.
    pub stage: Rect,
    /// Upper bound on drawn hero image size.
    pub hero_max: Size,
    /// Start offsets of the three hero images; each settles to zero.
    pub hero_offsets: [Vec2; 3],
    /// White panel before the expand spring runs, stage-local.
    pub panel_start: Rect,
    /// Glow layer overhang on every side of the canvas.
    pub glow_bleed: f64,
    /// Glow blur radius.
    pub glow_blur: f64,
    /// Final glow parallax offset.
    pub glow_drift: Vec2,
    /// Accent stroke geometry in canvas coordinates.
    pub accent_path: BezPath,
    /// Accent stroke width.
    pub accent_width: f64,
    /// Measured arc length of `accent_path`.
    pub dash_length: f64,
    /// Highlight band size before rotation.
    pub band_size: Size,
    /// Highlight band top edge, stage-local.
    pub band_top: f64,
    /// Highlight band left edge at the start and end of its sweep.
    pub band_travel: (f64, f64),
    /// Highlight band blur radius.
    pub band_blur: f64,
}

impl StageLayout {
    /// Derive the layout for `canvas`.
    pub fn new(canvas: Canvas) -> Self {
        let (w, h) = (canvas.w(), canvas.h());

        let padding_x = px_at_least(36.0, w * 0.06);
        let padding_y = px_at_least(36.0, h * 0.06);
        let stage_w = (w - 2.0 * padding_x).max(0.0);
        let stage_h = (h - 2.0 * padding_y).max(0.0);
        let stage = Rect::new(padding_x, padding_y, padding_x + stage_w, padding_y + stage_h);

        let card_radius = px_at_least(18.0, w * 0.02);

        let panel_x = round_px(stage_w * 0.16);
        let panel_y = round_px(stage_h * 0.06);
        let panel_start = Rect::new(
            panel_x,
            panel_y,
            panel_x + round_px(stage_w * 0.28),
            panel_y + round_px(stage_h * 0.78),
        );

        let accent_path = accent_path(w, h);
        let dash_length = accent_path
            .segments()
            .map(|seg| seg.arclen(ARCLEN_ACCURACY))
            .sum();

        Self {
            canvas,
            padding_x,
            padding_y,
            card_radius,
            card_shadow_blur: card_radius,
            card_shadow_y: round_px(h * 0.03),
            stage,
            hero_max: Size::new(px_at_least(900.0, w * 0.92), px_at_least(520.0, h * 0.8)),
            hero_offsets: [
                Vec2::new(round_px(w * 0.06), round_px(h * 0.06)),
                Vec2::new(round_px(w * 0.02), round_px(h * 0.01)),
                Vec2::new(round_px(w * 0.02), round_px(h * 0.02)),
            ],
            panel_start,
            glow_bleed: round_px(w.max(h) * 0.2),
            glow_blur: px_at_least(18.0, w * 0.02),
            glow_drift: Vec2::new(-round_px(w * 0.03), round_px(h * 0.02)),
            accent_path,
            accent_width: px_at_least(4.0, w * 0.004),
            dash_length,
            band_size: Size::new(round_px(stage_w * 0.5), round_px(stage_h * 1.4)),
            band_top: -round_px(stage_h * 0.2),
            band_travel: (-round_px(stage_w * 0.6), stage_w),
            band_blur: px_at_least(8.0, w * 0.008),
        }
    }

    /// Stage width.
    pub fn stage_w(&self) -> f64 {
        self.stage.width()
    }

    /// Stage height.
    pub fn stage_h(&self) -> f64 {
        self.stage.height()
    }

    /// Stage rectangle in its own coordinates.
    pub fn stage_local(&self) -> Rect {
        Rect::from_origin_size(Point::ORIGIN, self.stage.size())
    }

    /// Glow layer rectangle: the canvas grown by `glow_bleed`.
    pub fn glow_rect(&self) -> Rect {
        self.canvas.rect().inflate(self.glow_bleed, self.glow_bleed)
    }

    /// Bounding box of the accent stroke centerline.
    pub fn accent_bounds(&self) -> Rect {
        self.accent_path.bounding_box()
    }
}

/// Sweeping accent curve: a cubic followed by a smooth cubic whose first control point mirrors
/// the previous one about the joint.
fn accent_path(w: f64, h: f64) -> BezPath {
    let pt = |fx: f64, fy: f64| Point::new(round_px(w * fx), round_px(h * fy));

    let start = pt(0.06, 0.62);
    let c1 = pt(0.15, 0.2);
    let c2 = pt(0.55, 0.1);
    let joint = pt(0.72, 0.46);
    let mirrored = joint + (joint - c2);
    let c4 = pt(0.92, 0.86);
    let end = pt(0.96, 0.54);

    let mut path = BezPath::new();
    path.move_to(start);
    path.curve_to(c1, c2, joint);
    path.curve_to(mirrored, c4, end);
    path
}

#[cfg(test)]
#[path = "../../tests/unit/preset/layout.rs"]
mod tests;

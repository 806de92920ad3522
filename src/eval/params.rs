use serde::Serialize;

use crate::foundation::core::{FrameIndex, Rect, Vec2};

/// Every derived scalar of one evaluated frame, keyed by visual element.
///
/// Opacities are the composite values drawn on screen, outro fade included where the element
/// fades with the outro.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FrameParams {
    /// Frame these values belong to.
    pub frame: FrameIndex,
    /// Global fade-out multiplier.
    pub outro_fade: f64,
    /// Intro spring progress.
    pub intro_in: f64,
    /// Panel expansion spring progress.
    pub expand: f64,
    /// Final settle spring progress.
    pub final_settle: f64,
    /// Content reveal spring progress, when the preset has a content block.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_in: Option<f64>,
    /// Background glow parallax offset.
    pub glow_offset: Vec2,
    /// Hero image layers 1 to 3.
    pub heroes: [HeroParams; 3],
    /// Expanding white panel.
    pub white_panel: WhitePanelParams,
    /// Draw-on accent stroke.
    pub accent: AccentParams,
    /// Highlight sweep across the stage.
    pub highlight: HighlightParams,
    /// Vignette opacity.
    pub vignette_opacity: f64,
    /// Mock UI reveal, when the preset has a content block.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<ContentParams>,
}

/// One hero image layer.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct HeroParams {
    /// Fade times outro.
    pub opacity: f64,
    /// Blur radius in pixels.
    pub blur_px: f64,
    /// Translation from the centered rest position.
    pub offset: Vec2,
    /// Center-origin scale.
    pub scale: f64,
}

/// White panel rectangle and opacity.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct WhitePanelParams {
    /// Stage-local rectangle.
    pub rect: Rect,
    /// Opacity.
    pub opacity: f64,
}

/// Accent stroke draw-on state.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct AccentParams {
    /// Drawn fraction in `[0, 1]`.
    pub draw: f64,
    /// Opacity.
    pub opacity: f64,
    /// Dash (and gap) length; equals the path length.
    pub dash_length: f64,
    /// Dash offset hiding the undrawn part.
    pub dash_offset: f64,
}

/// Highlight sweep state.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct HighlightParams {
    /// Opacity times outro.
    pub opacity: f64,
    /// Left edge of the band, stage-local.
    pub band_left: f64,
}

/// Mock UI content block reveal.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ContentParams {
    /// Panel opacity times content fade times outro.
    pub opacity: f64,
    /// Vertical slide in pixels.
    pub translate_y: f64,
    /// Top-left-origin scale.
    pub scale: f64,
    /// Staggered per-card reveal.
    pub items: [ItemReveal; 3],
}

/// Reveal of one library card.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ItemReveal {
    /// Opacity.
    pub opacity: f64,
    /// Vertical slide in pixels.
    pub translate_y: f64,
}

impl FrameParams {
    /// `true` once every animated value has reached its resting value.
    ///
    /// Springs count as settled within `eps` of 1.
    pub fn is_settled(&self, eps: f64) -> bool {
        let near_one = |v: f64| (1.0 - v).abs() <= eps;
        near_one(self.intro_in)
            && near_one(self.expand)
            && near_one(self.final_settle)
            && self.content_in.is_none_or(near_one)
            && self.outro_fade == 0.0
    }
}

#[cfg(test)]
#[path = "../../tests/unit/eval/params.rs"]
mod tests;

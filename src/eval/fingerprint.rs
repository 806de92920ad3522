use std::fmt;

use serde::Serialize;
use xxhash_rust::xxh3::Xxh3;

use crate::assets::color::Color;
use crate::scene::model::{
    Align, Border, BorderSides, Bounds, FlexDirection, FlexLayout, Gradient, ImageFit, Insets,
    Justify, Length, LineCap, Node, NodeKind, Origin, Paint, Scene, Shadow, Stroke, Style,
};

const XXH3_SEED: u64 = 0x4e52_6565_6c5f_7631;

/// Stable 128-bit fingerprint of an evaluated scene.
///
/// The frame index itself is *not* hashed, so visually identical frames share a fingerprint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SceneFingerprint {
    /// High 64 bits.
    pub hi: u64,
    /// Low 64 bits.
    pub lo: u64,
}

impl fmt::Display for SceneFingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}{:016x}", self.hi, self.lo)
    }
}

impl Serialize for SceneFingerprint {
    fn serialize<S: serde::Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.collect_str(self)
    }
}

/// Fingerprint the canvas and node tree of `scene`.
pub fn fingerprint_scene(scene: &Scene) -> SceneFingerprint {
    let mut h = StableHasher::new();
    h.write_u32(scene.canvas.width);
    h.write_u32(scene.canvas.height);
    write_node(&mut h, &scene.root);
    h.finish()
}

struct StableHasher {
    inner: Xxh3,
}

impl StableHasher {
    fn new() -> Self {
        Self {
            inner: Xxh3::with_seed(XXH3_SEED),
        }
    }

    fn write_bytes(&mut self, b: &[u8]) {
        self.inner.update(b);
    }

    fn write_u8(&mut self, v: u8) {
        self.write_bytes(&[v]);
    }

    fn write_bool(&mut self, v: bool) {
        self.write_u8(u8::from(v));
    }

    fn write_u16(&mut self, v: u16) {
        self.write_bytes(&v.to_le_bytes());
    }

    fn write_u32(&mut self, v: u32) {
        self.write_bytes(&v.to_le_bytes());
    }

    fn write_u64(&mut self, v: u64) {
        self.write_bytes(&v.to_le_bytes());
    }

    fn write_f64(&mut self, v: f64) {
        // -0.0 and 0.0 draw the same.
        let v = if v == 0.0 { 0.0 } else { v };
        self.write_u64(v.to_bits());
    }

    fn write_str(&mut self, s: &str) {
        self.write_u32(s.len() as u32);
        self.write_bytes(s.as_bytes());
    }

    fn finish(self) -> SceneFingerprint {
        let v = self.inner.digest128();
        SceneFingerprint {
            hi: (v >> 64) as u64,
            lo: v as u64,
        }
    }
}

fn write_node(h: &mut StableHasher, n: &Node) {
    h.write_str(&n.id);
    write_kind(h, &n.kind);
    write_bounds(h, &n.bounds);
    write_style(h, &n.style);
    h.write_u32(n.children.len() as u32);
    for c in &n.children {
        write_node(h, c);
    }
}

fn write_kind(h: &mut StableHasher, kind: &NodeKind) {
    match kind {
        NodeKind::Group {
            layout,
            background,
            border,
            shadow,
            text,
        } => {
            h.write_u8(0);
            write_opt(h, layout.as_ref(), write_layout);
            write_opt(h, background.as_ref(), write_paint);
            write_opt(h, border.as_ref(), write_border);
            write_opt(h, shadow.as_ref(), write_shadow);
            write_opt(h, text.as_ref(), |h, t| {
                h.write_str(&t.font_family);
                write_opt(h, t.color.as_ref(), write_color);
            });
        }
        NodeKind::Rect {
            fill,
            border,
            shadow,
        } => {
            h.write_u8(1);
            write_paint(h, fill);
            write_opt(h, border.as_ref(), write_border);
            write_opt(h, shadow.as_ref(), write_shadow);
        }
        NodeKind::Gradient { layers } => {
            h.write_u8(2);
            h.write_u32(layers.len() as u32);
            for g in layers {
                write_gradient(h, g);
            }
        }
        NodeKind::Image {
            source,
            fit,
            max_width,
            max_height,
        } => {
            h.write_u8(3);
            h.write_str(source.as_str());
            h.write_u8(fit_tag(*fit));
            h.write_f64(*max_width);
            h.write_f64(*max_height);
        }
        NodeKind::Path { d, stroke } => {
            h.write_u8(4);
            h.write_str(d);
            write_stroke(h, stroke);
        }
        NodeKind::Text {
            text,
            font_size,
            font_weight,
            color,
            line_height,
        } => {
            h.write_u8(5);
            h.write_str(text);
            h.write_f64(*font_size);
            h.write_u16(*font_weight);
            write_opt(h, color.as_ref(), write_color);
            write_opt(h, line_height.as_ref(), |h, v| h.write_f64(*v));
        }
    }
}

fn write_opt<T>(h: &mut StableHasher, v: Option<&T>, f: impl FnOnce(&mut StableHasher, &T)) {
    match v {
        Some(v) => {
            h.write_u8(1);
            f(h, v);
        }
        None => h.write_u8(0),
    }
}

fn write_bounds(h: &mut StableHasher, b: &Bounds) {
    match b {
        Bounds::Absolute(r) => {
            h.write_u8(0);
            for c in [r.x0, r.y0, r.x1, r.y1] {
                h.write_f64(c);
            }
        }
        Bounds::Flow {
            width,
            height,
            margin,
        } => {
            h.write_u8(1);
            write_length(h, *width);
            write_length(h, *height);
            write_insets(h, margin);
        }
    }
}

fn write_length(h: &mut StableHasher, l: Length) {
    match l {
        Length::Auto => h.write_u8(0),
        Length::Px(v) => {
            h.write_u8(1);
            h.write_f64(v);
        }
        Length::Percent(v) => {
            h.write_u8(2);
            h.write_f64(v);
        }
    }
}

fn write_insets(h: &mut StableHasher, i: &Insets) {
    for v in [i.top, i.right, i.bottom, i.left] {
        h.write_f64(v);
    }
}

fn write_layout(h: &mut StableHasher, l: &FlexLayout) {
    match l.direction {
        FlexDirection::Row => h.write_u8(0),
        FlexDirection::Column => h.write_u8(1),
        FlexDirection::Grid { columns } => {
            h.write_u8(2);
            h.write_u32(columns);
        }
    }
    h.write_f64(l.gap);
    write_insets(h, &l.padding);
    h.write_u8(match l.align_items {
        Align::Start => 0,
        Align::Center => 1,
        Align::End => 2,
        Align::Stretch => 3,
    });
    h.write_u8(match l.justify {
        Justify::Start => 0,
        Justify::Center => 1,
        Justify::SpaceBetween => 2,
    });
}

fn write_style(h: &mut StableHasher, s: &Style) {
    h.write_f64(s.opacity);
    h.write_f64(s.blur_px);
    let t = &s.transform;
    h.write_f64(t.translate.x);
    h.write_f64(t.translate.y);
    h.write_f64(t.scale);
    h.write_f64(t.rotation_deg);
    h.write_u8(match t.origin {
        Origin::Center => 0,
        Origin::TopLeft => 1,
    });
    h.write_f64(s.corner_radius);
    h.write_bool(s.clip);
}

fn write_color(h: &mut StableHasher, c: &Color) {
    h.write_bytes(&[c.r, c.g, c.b]);
    h.write_f64(c.a);
}

fn write_paint(h: &mut StableHasher, p: &Paint) {
    match p {
        Paint::Solid(c) => {
            h.write_u8(0);
            write_color(h, c);
        }
        Paint::Gradient(g) => {
            h.write_u8(1);
            write_gradient(h, g);
        }
    }
}

fn write_gradient(h: &mut StableHasher, g: &Gradient) {
    let stops = match g {
        Gradient::Linear { angle_deg, stops } => {
            h.write_u8(0);
            h.write_f64(*angle_deg);
            stops
        }
        Gradient::Radial { center, stops } => {
            h.write_u8(1);
            h.write_f64(center.x);
            h.write_f64(center.y);
            stops
        }
    };
    h.write_u32(stops.len() as u32);
    for s in stops {
        h.write_f64(s.offset);
        write_color(h, &s.color);
    }
}

fn write_border(h: &mut StableHasher, b: &Border) {
    h.write_f64(b.width);
    write_color(h, &b.color);
    h.write_u8(match b.sides {
        BorderSides::All => 0,
        BorderSides::Bottom => 1,
    });
}

fn write_shadow(h: &mut StableHasher, s: &Shadow) {
    h.write_f64(s.offset.x);
    h.write_f64(s.offset.y);
    h.write_f64(s.blur);
    write_color(h, &s.color);
}

fn write_stroke(h: &mut StableHasher, s: &Stroke) {
    write_color(h, &s.color);
    h.write_f64(s.width);
    h.write_u8(match s.cap {
        LineCap::Butt => 0,
        LineCap::Round => 1,
    });
    write_opt(h, s.dash.as_ref(), |h, d| {
        h.write_f64(d.length);
        h.write_f64(d.offset);
    });
}

fn fit_tag(fit: ImageFit) -> u8 {
    match fit {
        ImageFit::Contain => 0,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/eval/fingerprint.rs"]
mod tests;

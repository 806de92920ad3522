use serde::Serialize;

use crate::assets::color::Color;
use crate::assets::images::ImageRef;
use crate::foundation::core::{Canvas, FrameIndex, Point, Rect, Vec2};

/// Fully evaluated scene for one frame, ready to hand to a compositor.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scene {
    /// Frame this scene was evaluated for.
    pub frame: FrameIndex,
    /// Output canvas.
    pub canvas: Canvas,
    /// Root node covering the canvas.
    pub root: Node,
}

impl Scene {
    /// Depth-first lookup of a node by id.
    pub fn find(&self, id: &str) -> Option<&Node> {
        self.root.find(id)
    }

    /// Depth-first iteration over every node, root first.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.root.descendants()
    }
}

/// One element of the scene graph.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Node {
    /// Element name, unique within a scene.
    pub id: String,
    /// What to draw.
    pub kind: NodeKind,
    /// Placement inside the parent.
    pub bounds: Bounds,
    /// Computed per-frame style.
    pub style: Style,
    /// Children in paint order (first is painted first).
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
}

impl Node {
    /// Depth-first lookup of a node by id, including `self`.
    pub fn find(&self, id: &str) -> Option<&Node> {
        if self.id == id {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find(id))
    }

    /// Depth-first iteration, `self` first.
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants { stack: vec![self] }
    }

    /// Ids of the direct children, in paint order.
    pub fn child_ids(&self) -> Vec<&str> {
        self.children.iter().map(|c| c.id.as_str()).collect()
    }

    /// Absolute rectangle, when the node is absolutely positioned.
    pub fn rect(&self) -> Option<Rect> {
        match self.bounds {
            Bounds::Absolute(r) => Some(r),
            Bounds::Flow { .. } => None,
        }
    }
}

/// Pre-order iterator returned by [`Node::descendants`].
pub struct Descendants<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

/// Drawable variants.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NodeKind {
    /// Container box; draws its optional background, border and shadow under the children.
    Group {
        /// Flow layout applied to children with [`Bounds::Flow`].
        #[serde(skip_serializing_if = "Option::is_none")]
        layout: Option<FlexLayout>,
        /// Background fill.
        #[serde(skip_serializing_if = "Option::is_none")]
        background: Option<Paint>,
        /// Border drawn around the group bounds.
        #[serde(skip_serializing_if = "Option::is_none")]
        border: Option<Border>,
        /// Drop shadow of the group box.
        #[serde(skip_serializing_if = "Option::is_none")]
        shadow: Option<Shadow>,
        /// Inherited text defaults.
        #[serde(skip_serializing_if = "Option::is_none")]
        text: Option<TextDefaults>,
    },
    /// Filled rectangle honoring `style.corner_radius`.
    Rect {
        /// Fill paint.
        fill: Paint,
        /// Optional border.
        #[serde(skip_serializing_if = "Option::is_none")]
        border: Option<Border>,
        /// Optional drop shadow.
        #[serde(skip_serializing_if = "Option::is_none")]
        shadow: Option<Shadow>,
    },
    /// Stack of gradients filling the bounds; the first layer is on top.
    Gradient {
        /// Gradient layers, topmost first.
        layers: Vec<Gradient>,
    },
    /// External image.
    Image {
        /// Opaque handle supplied by the caller.
        source: ImageRef,
        /// Fit inside the bounds.
        fit: ImageFit,
        /// Maximum drawn width in pixels.
        max_width: f64,
        /// Maximum drawn height in pixels.
        max_height: f64,
    },
    /// Stroked vector path in the node's coordinate space.
    Path {
        /// SVG path data.
        d: String,
        /// Stroke style.
        stroke: Stroke,
    },
    /// Single run of text.
    Text {
        /// Text content.
        text: String,
        /// Font size in pixels.
        font_size: f64,
        /// CSS-style font weight.
        font_weight: u16,
        /// Color override; inherits from the nearest [`TextDefaults`] when absent.
        #[serde(skip_serializing_if = "Option::is_none")]
        color: Option<Color>,
        /// Line height multiplier.
        #[serde(skip_serializing_if = "Option::is_none")]
        line_height: Option<f64>,
    },
}

/// Where a node sits inside its parent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Bounds {
    /// Absolute rectangle in parent coordinates.
    Absolute(Rect),
    /// Positioned by the parent's [`FlexLayout`].
    Flow {
        /// Requested width.
        width: Length,
        /// Requested height.
        height: Length,
        /// Outer spacing.
        margin: Insets,
    },
}

/// Size request for flow-positioned nodes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Length {
    /// Sized by content.
    Auto,
    /// Pixels.
    Px(f64),
    /// Percentage of the parent's content box.
    Percent(f64),
}

/// Edge spacing in pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Insets {
    /// Top edge.
    pub top: f64,
    /// Right edge.
    pub right: f64,
    /// Bottom edge.
    pub bottom: f64,
    /// Left edge.
    pub left: f64,
}

impl Insets {
    /// Same spacing on every edge.
    pub const fn uniform(v: f64) -> Self {
        Self {
            top: v,
            right: v,
            bottom: v,
            left: v,
        }
    }

    /// Vertical and horizontal spacing.
    pub const fn symmetric(vertical: f64, horizontal: f64) -> Self {
        Self {
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        }
    }
}

/// Flow layout of a group's children.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FlexLayout {
    /// Main axis.
    pub direction: FlexDirection,
    /// Spacing between children.
    pub gap: f64,
    /// Inner spacing.
    pub padding: Insets,
    /// Cross-axis alignment.
    pub align_items: Align,
    /// Main-axis distribution.
    pub justify: Justify,
}

impl FlexLayout {
    /// Layout along `direction` with no spacing, start-aligned.
    pub const fn new(direction: FlexDirection) -> Self {
        Self {
            direction,
            gap: 0.0,
            padding: Insets::uniform(0.0),
            align_items: Align::Stretch,
            justify: Justify::Start,
        }
    }

    /// Set the gap.
    pub const fn gap(mut self, gap: f64) -> Self {
        self.gap = gap;
        self
    }

    /// Set the padding.
    pub const fn padding(mut self, padding: Insets) -> Self {
        self.padding = padding;
        self
    }

    /// Set cross-axis alignment.
    pub const fn align(mut self, align: Align) -> Self {
        self.align_items = align;
        self
    }

    /// Set main-axis distribution.
    pub const fn justify(mut self, justify: Justify) -> Self {
        self.justify = justify;
        self
    }
}

/// Main axis of a [`FlexLayout`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FlexDirection {
    /// Left to right.
    Row,
    /// Top to bottom.
    Column,
    /// Equal-width grid, row-major.
    Grid {
        /// Column count.
        columns: u32,
    },
}

/// Cross-axis alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Align {
    /// Start edge.
    Start,
    /// Centered.
    Center,
    /// End edge.
    End,
    /// Fill the cross axis.
    Stretch,
}

/// Main-axis distribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Justify {
    /// Packed at the start.
    Start,
    /// Packed in the middle.
    Center,
    /// First and last child on the edges, the rest evenly spaced.
    SpaceBetween,
}

/// Per-frame visual attributes shared by every node.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Style {
    /// Opacity in `[0, 1]`, multiplied into descendants.
    pub opacity: f64,
    /// Gaussian blur radius in pixels.
    pub blur_px: f64,
    /// Transform applied around `transform.origin`.
    pub transform: Transform,
    /// Corner radius of the node's bounds.
    pub corner_radius: f64,
    /// Clip children to the (rounded) bounds.
    pub clip: bool,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            opacity: 1.0,
            blur_px: 0.0,
            transform: Transform::default(),
            corner_radius: 0.0,
            clip: false,
        }
    }
}

/// Translate, then rotate and scale about `origin`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Transform {
    /// Offset in pixels.
    pub translate: Vec2,
    /// Uniform scale factor.
    pub scale: f64,
    /// Clockwise rotation in degrees.
    pub rotation_deg: f64,
    /// Pivot for rotation and scale.
    pub origin: Origin,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            translate: Vec2::ZERO,
            scale: 1.0,
            rotation_deg: 0.0,
            origin: Origin::Center,
        }
    }
}

impl Transform {
    /// Equivalent affine map for a node occupying `bounds`.
    pub fn to_affine(&self, bounds: Rect) -> kurbo::Affine {
        let pivot = match self.origin {
            Origin::Center => bounds.center().to_vec2(),
            Origin::TopLeft => bounds.origin().to_vec2(),
        };
        kurbo::Affine::translate(self.translate + pivot)
            * kurbo::Affine::rotate(self.rotation_deg.to_radians())
            * kurbo::Affine::scale(self.scale)
            * kurbo::Affine::translate(-pivot)
    }
}

/// Pivot for [`Transform`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Origin {
    /// Center of the bounds.
    Center,
    /// Top-left corner of the bounds.
    TopLeft,
}

/// Fill for rectangles and group backgrounds.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Paint {
    /// Flat color.
    Solid(Color),
    /// Gradient.
    Gradient(Gradient),
}

/// Gradient definitions; coordinates are fractions of the painted bounds.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum Gradient {
    /// Linear gradient along `angle_deg` (0° points up, 90° points right).
    Linear {
        /// Direction in degrees.
        angle_deg: f64,
        /// Color stops.
        stops: Vec<ColorStop>,
    },
    /// Circular gradient reaching the farthest corner at offset 1.
    Radial {
        /// Center as a fraction of the bounds.
        center: Point,
        /// Color stops.
        stops: Vec<ColorStop>,
    },
}

/// Color at a gradient offset in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ColorStop {
    /// Offset along the gradient.
    pub offset: f64,
    /// Color at the offset.
    pub color: Color,
}

impl ColorStop {
    /// Stop at `offset`.
    pub const fn new(offset: f64, color: Color) -> Self {
        Self { offset, color }
    }
}

/// Rectangle border.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Border {
    /// Stroke width in pixels.
    pub width: f64,
    /// Stroke color.
    pub color: Color,
    /// Which edges are drawn.
    pub sides: BorderSides,
}

/// Edges covered by a [`Border`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BorderSides {
    /// Every edge.
    All,
    /// Bottom edge only.
    Bottom,
}

/// Drop shadow.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Shadow {
    /// Shadow offset.
    pub offset: Vec2,
    /// Blur radius in pixels.
    pub blur: f64,
    /// Shadow color.
    pub color: Color,
}

/// Path stroke.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Stroke {
    /// Stroke color.
    pub color: Color,
    /// Stroke width in pixels.
    pub width: f64,
    /// End cap.
    pub cap: LineCap,
    /// Dash pattern, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dash: Option<Dash>,
}

/// Stroke end cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LineCap {
    /// Flat at the endpoint.
    Butt,
    /// Semicircle past the endpoint.
    Round,
}

/// Single dash/gap pattern, both `length` long.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Dash {
    /// Dash and gap length.
    pub length: f64,
    /// Pattern offset; `length` hides a path of that length entirely, 0 shows it fully.
    pub offset: f64,
}

/// How an image fits its bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageFit {
    /// Scale to fit entirely, preserving aspect ratio, centered.
    Contain,
}

/// Text attributes inherited by descendant text nodes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextDefaults {
    /// Font family list.
    pub font_family: String,
    /// Default text color.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
}

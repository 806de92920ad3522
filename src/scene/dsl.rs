use crate::{
    assets::color::Color,
    assets::images::ImageRef,
    foundation::core::{Rect, Vec2},
    scene::model::{
        Border, Bounds, FlexLayout, Gradient, ImageFit, Insets, Length, Node, NodeKind, Origin,
        Paint, Shadow, Stroke, Style, TextDefaults,
    },
};

/// Fluent builder for [`Node`](crate::Node) trees.
///
/// Nodes start absolutely positioned at an empty rectangle with default style; call
/// [`NodeBuilder::at`] or [`NodeBuilder::flow`] to place them.
pub struct NodeBuilder {
    node: Node,
}

impl NodeBuilder {
    fn with_kind(id: impl Into<String>, kind: NodeKind) -> Self {
        Self {
            node: Node {
                id: id.into(),
                kind,
                bounds: Bounds::Absolute(Rect::ZERO),
                style: Style::default(),
                children: Vec::new(),
            },
        }
    }

    /// Empty container.
    pub fn group(id: impl Into<String>) -> Self {
        Self::with_kind(
            id,
            NodeKind::Group {
                layout: None,
                background: None,
                border: None,
                shadow: None,
                text: None,
            },
        )
    }

    /// Filled rectangle.
    pub fn rect(id: impl Into<String>, fill: Paint) -> Self {
        Self::with_kind(
            id,
            NodeKind::Rect {
                fill,
                border: None,
                shadow: None,
            },
        )
    }

    /// Solid rectangle.
    pub fn solid(id: impl Into<String>, color: Color) -> Self {
        Self::rect(id, Paint::Solid(color))
    }

    /// Gradient stack, topmost layer first.
    pub fn gradient(id: impl Into<String>, layers: Vec<Gradient>) -> Self {
        Self::with_kind(id, NodeKind::Gradient { layers })
    }

    /// Contain-fit image limited to `max_width` x `max_height`.
    pub fn image(id: impl Into<String>, source: ImageRef, max_width: f64, max_height: f64) -> Self {
        Self::with_kind(
            id,
            NodeKind::Image {
                source,
                fit: ImageFit::Contain,
                max_width,
                max_height,
            },
        )
    }

    /// Stroked path from a kurbo path.
    pub fn path(id: impl Into<String>, path: &kurbo::BezPath, stroke: Stroke) -> Self {
        Self::with_kind(
            id,
            NodeKind::Path {
                d: path.to_svg(),
                stroke,
            },
        )
    }

    /// Text run.
    pub fn text(
        id: impl Into<String>,
        text: impl Into<String>,
        font_size: f64,
        font_weight: u16,
    ) -> Self {
        Self::with_kind(
            id,
            NodeKind::Text {
                text: text.into(),
                font_size,
                font_weight,
                color: None,
                line_height: None,
            },
        )
        .flow(Length::Auto, Length::Auto)
    }

    /// Absolute placement in parent coordinates.
    pub fn at(mut self, rect: Rect) -> Self {
        self.node.bounds = Bounds::Absolute(rect);
        self
    }

    /// Absolute placement from origin and size.
    pub fn at_xywh(self, x: f64, y: f64, w: f64, h: f64) -> Self {
        self.at(Rect::new(x, y, x + w, y + h))
    }

    /// Flow placement with a size request.
    pub fn flow(mut self, width: Length, height: Length) -> Self {
        let margin = match self.node.bounds {
            Bounds::Flow { margin, .. } => margin,
            Bounds::Absolute(_) => Insets::default(),
        };
        self.node.bounds = Bounds::Flow {
            width,
            height,
            margin,
        };
        self
    }

    /// Margin for flow placement; switches an absolute node to auto-sized flow.
    pub fn margin(mut self, margin: Insets) -> Self {
        self.node.bounds = match self.node.bounds {
            Bounds::Flow { width, height, .. } => Bounds::Flow {
                width,
                height,
                margin,
            },
            Bounds::Absolute(_) => Bounds::Flow {
                width: Length::Auto,
                height: Length::Auto,
                margin,
            },
        };
        self
    }

    /// Opacity.
    pub fn opacity(mut self, opacity: f64) -> Self {
        self.node.style.opacity = opacity;
        self
    }

    /// Blur radius in pixels.
    pub fn blur(mut self, px: f64) -> Self {
        self.node.style.blur_px = px;
        self
    }

    /// Translation offset.
    pub fn translate(mut self, offset: Vec2) -> Self {
        self.node.style.transform.translate = offset;
        self
    }

    /// Uniform scale about `origin`.
    pub fn scale(mut self, scale: f64, origin: Origin) -> Self {
        self.node.style.transform.scale = scale;
        self.node.style.transform.origin = origin;
        self
    }

    /// Rotation in degrees about the transform origin.
    pub fn rotate(mut self, deg: f64) -> Self {
        self.node.style.transform.rotation_deg = deg;
        self
    }

    /// Corner radius.
    pub fn radius(mut self, r: f64) -> Self {
        self.node.style.corner_radius = r;
        self
    }

    /// Clip children to the rounded bounds.
    pub fn clip(mut self) -> Self {
        self.node.style.clip = true;
        self
    }

    /// Flow layout for a group; ignored on other kinds.
    pub fn layout(mut self, layout: FlexLayout) -> Self {
        if let NodeKind::Group { layout: slot, .. } = &mut self.node.kind {
            *slot = Some(layout);
        }
        self
    }

    /// Background for a group; ignored on other kinds.
    pub fn background(mut self, paint: Paint) -> Self {
        if let NodeKind::Group { background, .. } = &mut self.node.kind {
            *background = Some(paint);
        }
        self
    }

    /// Inherited text defaults for a group; ignored on other kinds.
    pub fn text_defaults(mut self, font_family: impl Into<String>, color: Option<Color>) -> Self {
        if let NodeKind::Group { text, .. } = &mut self.node.kind {
            *text = Some(TextDefaults {
                font_family: font_family.into(),
                color,
            });
        }
        self
    }

    /// Border for a rectangle or group; ignored on other kinds.
    pub fn border(mut self, border: Border) -> Self {
        match &mut self.node.kind {
            NodeKind::Rect { border: slot, .. } | NodeKind::Group { border: slot, .. } => {
                *slot = Some(border);
            }
            _ => {}
        }
        self
    }

    /// Drop shadow for a rectangle or group; ignored on other kinds.
    pub fn shadow(mut self, shadow: Shadow) -> Self {
        match &mut self.node.kind {
            NodeKind::Rect { shadow: slot, .. } | NodeKind::Group { shadow: slot, .. } => {
                *slot = Some(shadow);
            }
            _ => {}
        }
        self
    }

    /// Text color; ignored on non-text kinds.
    pub fn color(mut self, c: Color) -> Self {
        if let NodeKind::Text { color, .. } = &mut self.node.kind {
            *color = Some(c);
        }
        self
    }

    /// Line height multiplier; ignored on non-text kinds.
    pub fn line_height(mut self, lh: f64) -> Self {
        if let NodeKind::Text { line_height, .. } = &mut self.node.kind {
            *line_height = Some(lh);
        }
        self
    }

    /// Append a child.
    pub fn child(mut self, child: Node) -> Self {
        self.node.children.push(child);
        self
    }

    /// Append a child when present.
    pub fn child_opt(mut self, child: Option<Node>) -> Self {
        self.node.children.extend(child);
        self
    }

    /// Append several children.
    pub fn children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.node.children.extend(children);
        self
    }

    /// Finish the node.
    pub fn build(self) -> Node {
        self.node
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/dsl.rs"]
mod tests;

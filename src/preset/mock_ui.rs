use crate::{
    animation::interpolate::Curve,
    assets::color::Color,
    eval::params::{ContentParams, ItemReveal},
    foundation::core::{Canvas, FrameIndex, Rect, Vec2},
    foundation::error::ReelResult,
    foundation::math::px_at_least,
    preset::timeline::Interval,
    scene::dsl::NodeBuilder,
    scene::model::{
        Align, Border, BorderSides, ColorStop, FlexDirection, FlexLayout, Gradient, Insets,
        Justify, Length, Node, Origin, Paint, Shadow,
    },
};

const INK: Color = Color::rgb(17, 24, 39);
const BRAND: Color = Color::rgb(11, 122, 69);
const CREAM: Color = Color::rgb(245, 240, 230);
const FONT_UI: &str = "Inter, system-ui, -apple-system, Segoe UI, Roboto, sans-serif";

/// Frames between successive card reveals.
const ITEM_STAGGER: i64 = 6;
/// Length of one card reveal.
const ITEM_REVEAL: i64 = 18;

/// Preview drawn inside a library card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PreviewKind {
    /// Dialog with a title, body and two buttons.
    Modal,
    /// Stack of list bars.
    List,
    /// Three-by-two tile grid.
    Grid,
}

/// One entry of the scrolling library list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LibraryCard {
    /// Card heading.
    pub title: &'static str,
    /// Short description.
    pub subtitle: &'static str,
    /// Preview contents.
    pub preview: PreviewKind,
}

/// Library cards in list order.
pub const LIBRARY_CARDS: [LibraryCard; 3] = [
    LibraryCard {
        title: "Shadcn Library",
        subtitle: "A fast way to build",
        preview: PreviewKind::Modal,
    },
    LibraryCard {
        title: "Mobile Library",
        subtitle: "Layouts & lists",
        preview: PreviewKind::List,
    },
    LibraryCard {
        title: "Marketing and landing pages library",
        subtitle: "Hero sections",
        preview: PreviewKind::Grid,
    },
];

#[derive(Clone, Debug, PartialEq)]
struct Metrics {
    top_bar_h: f64,
    bar_pad_y: f64,
    pad_x: f64,
    title_size: f64,
    label_size: f64,
    tab_pad_y: f64,
    tab_row_h: f64,
    item_pitch: f64,
    item_title_size: f64,
    preview_h: f64,
    preview_radius: f64,
    preview_inset: f64,
    inner_radius: f64,
}

impl Metrics {
    fn new(canvas: Canvas) -> Self {
        let (w, h) = (canvas.w(), canvas.h());
        Self {
            top_bar_h: px_at_least(62.0, h * 0.085),
            bar_pad_y: px_at_least(14.0, h * 0.02),
            pad_x: px_at_least(18.0, w * 0.028),
            title_size: px_at_least(20.0, w * 0.03),
            label_size: px_at_least(12.0, w * 0.016),
            tab_pad_y: px_at_least(10.0, h * 0.015),
            tab_row_h: px_at_least(46.0, h * 0.06),
            item_pitch: px_at_least(170.0, h * 0.22),
            item_title_size: px_at_least(18.0, w * 0.026),
            preview_h: px_at_least(120.0, h * 0.16),
            preview_radius: px_at_least(14.0, w * 0.016),
            preview_inset: px_at_least(14.0, w * 0.018),
            inner_radius: px_at_least(10.0, w * 0.012),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
struct ItemTrack {
    fade: Curve,
    slide: Curve,
}

/// Static product mock-up revealed inside the white panel.
///
/// The block itself never animates its layout; only the wrapper slides and scales in, and
/// each library card fades in on a staggered schedule.
#[derive(Clone, Debug, PartialEq)]
pub struct MockUi {
    metrics: Metrics,
    fade: Curve,
    slide: Curve,
    scale: Curve,
    items: [ItemTrack; 3],
}

impl MockUi {
    /// Compile the reveal curves for `content` and size the block for `canvas`.
    pub fn new(canvas: Canvas, content: Interval) -> ReelResult<Self> {
        let item = |idx: i64| -> ReelResult<ItemTrack> {
            let (x0, x1) = (
                content.at(idx * ITEM_STAGGER),
                content.at(idx * ITEM_STAGGER + ITEM_REVEAL),
            );
            Ok(ItemTrack {
                fade: Curve::linear(x0, x1, 0.0, 1.0)?,
                slide: Curve::linear(x0, x1, 10.0, 0.0)?,
            })
        };
        Ok(Self {
            metrics: Metrics::new(canvas),
            fade: Curve::linear(
                content.at(0),
                content.at(content.duration as i64),
                0.0,
                1.0,
            )?,
            slide: Curve::unit(18.0, 0.0)?,
            scale: Curve::unit(0.985, 1.0)?,
            items: [item(0)?, item(1)?, item(2)?],
        })
    }

    /// Reveal values at `frame`, given the content spring and the multipliers inherited from
    /// the panel and the outro.
    pub fn params(
        &self,
        frame: FrameIndex,
        content_in: f64,
        panel_opacity: f64,
        outro_fade: f64,
    ) -> ContentParams {
        let reveal = |t: &ItemTrack| ItemReveal {
            opacity: t.fade.at_frame(frame),
            translate_y: t.slide.at_frame(frame),
        };
        ContentParams {
            opacity: panel_opacity * self.fade.at_frame(frame) * outro_fade,
            translate_y: self.slide.sample(content_in),
            scale: self.scale.sample(content_in),
            items: [
                reveal(&self.items[0]),
                reveal(&self.items[1]),
                reveal(&self.items[2]),
            ],
        }
    }

    /// Content block over `panel` (stage-local), clipped to the panel's rounded corners.
    pub fn node(&self, p: &ContentParams, panel: Rect, radius: f64) -> Node {
        let m = &self.metrics;
        let (pw, ph) = (panel.width(), panel.height());
        let scroll_top = m.top_bar_h + m.tab_row_h;

        let surface = NodeBuilder::group("content_surface")
            .at_xywh(0.0, 0.0, pw, ph)
            .background(Paint::Solid(Color::WHITE))
            .text_defaults(FONT_UI, Some(INK))
            .layout(FlexLayout::new(FlexDirection::Column))
            .child(self.top_bar())
            .child(self.tabs())
            .child(
                NodeBuilder::group("content_scroll")
                    .at(Rect::new(0.0, scroll_top, pw, ph.max(scroll_top)))
                    .background(vertical_fade(Color::WHITE, Color::rgb(250, 250, 250)))
                    .clip()
                    .layout(FlexLayout::new(FlexDirection::Column).padding(Insets {
                        left: m.pad_x,
                        right: m.pad_x,
                        ..Insets::default()
                    }))
                    .children(
                        LIBRARY_CARDS
                            .iter()
                            .zip(p.items)
                            .enumerate()
                            .map(|(idx, (card, reveal))| self.library_card(idx, card, reveal)),
                    )
                    .build(),
            )
            .build();

        NodeBuilder::group("panel_content")
            .at(panel)
            .radius(radius)
            .clip()
            .opacity(p.opacity)
            .translate(Vec2::new(0.0, p.translate_y))
            .scale(p.scale, Origin::TopLeft)
            .child(surface)
            .build()
    }

    fn top_bar(&self) -> Node {
        let m = &self.metrics;
        let icon = NodeBuilder::group("content_icon")
            .flow(Length::Px(32.0), Length::Px(32.0))
            .radius(10.0)
            .background(vertical_fade(BRAND.with_alpha(0.18), BRAND.with_alpha(0.05)))
            .border(hairline(BRAND.with_alpha(0.18)))
            .build();
        let heading = NodeBuilder::group("content_heading")
            .flow(Length::Auto, Length::Auto)
            .layout(FlexLayout::new(FlexDirection::Column).gap(4.0))
            .child(
                NodeBuilder::text("content_title", "New Project", m.title_size, 600)
                    .line_height(1.1)
                    .build(),
            )
            .child(
                NodeBuilder::text("content_subtitle", "Components", m.label_size, 400)
                    .color(INK.with_alpha(0.55))
                    .build(),
            )
            .build();
        let action = NodeBuilder::group("content_action")
            .flow(Length::Px(34.0), Length::Px(34.0))
            .radius(12.0)
            .border(hairline(INK.with_alpha(0.14)))
            .background(Paint::Solid(Color::WHITE.with_alpha(0.9)))
            .build();

        NodeBuilder::group("content_top_bar")
            .flow(Length::Percent(100.0), Length::Px(m.top_bar_h))
            .layout(
                FlexLayout::new(FlexDirection::Row)
                    .padding(Insets::symmetric(m.bar_pad_y, m.pad_x))
                    .align(Align::Center)
                    .justify(Justify::SpaceBetween),
            )
            .border(divider())
            .child(
                NodeBuilder::group("content_brand")
                    .flow(Length::Auto, Length::Auto)
                    .layout(
                        FlexLayout::new(FlexDirection::Row)
                            .gap(12.0)
                            .align(Align::Center),
                    )
                    .child(icon)
                    .child(heading)
                    .build(),
            )
            .child(action)
            .build()
    }

    fn tabs(&self) -> Node {
        let m = &self.metrics;
        let tab = |id: &str, label: &str, active: bool| {
            let chip = NodeBuilder::group(id)
                .flow(Length::Auto, Length::Auto)
                .radius(999.0)
                .layout(FlexLayout::new(FlexDirection::Row).padding(Insets::symmetric(8.0, 12.0)));
            let text = NodeBuilder::text(format!("{id}_label"), label, m.label_size, 600);
            if active {
                chip.background(Paint::Solid(INK.with_alpha(0.06)))
                    .child(text.build())
                    .build()
            } else {
                chip.background(Paint::Solid(INK.with_alpha(0.02)))
                    .border(hairline(INK.with_alpha(0.08)))
                    .child(text.color(INK.with_alpha(0.55)).build())
                    .build()
            }
        };

        NodeBuilder::group("content_tabs")
            .flow(Length::Percent(100.0), Length::Auto)
            .layout(
                FlexLayout::new(FlexDirection::Row)
                    .gap(10.0)
                    .padding(Insets::symmetric(m.tab_pad_y, m.pad_x))
                    .align(Align::Center),
            )
            .border(divider())
            .child(tab("content_tab_components", "Components", true))
            .child(tab("content_tab_libraries", "Libraries", false))
            .build()
    }

    fn library_card(&self, idx: usize, card: &LibraryCard, reveal: ItemReveal) -> Node {
        let m = &self.metrics;
        let id = format!("content_item_{idx}");

        let body = match card.preview {
            PreviewKind::Modal => modal_preview(&id),
            PreviewKind::List => list_preview(&id),
            PreviewKind::Grid => grid_preview(&id),
        };
        let inner = NodeBuilder::group(format!("{id}_inner"))
            .flow(Length::Percent(100.0), Length::Percent(100.0))
            .radius(m.inner_radius)
            .background(Paint::Solid(Color::WHITE))
            .border(hairline(INK.with_alpha(0.06)))
            .layout(
                FlexLayout::new(FlexDirection::Row)
                    .align(Align::Center)
                    .justify(Justify::Center),
            )
            .child(body)
            .build();
        let preview = NodeBuilder::group(format!("{id}_preview"))
            .flow(Length::Percent(100.0), Length::Px(m.preview_h))
            .radius(m.preview_radius)
            .background(Paint::Solid(CREAM))
            .border(hairline(INK.with_alpha(0.06)))
            .shadow(Shadow {
                offset: Vec2::new(0.0, 10.0),
                blur: 30.0,
                color: INK.with_alpha(0.06),
            })
            .clip()
            .layout(
                FlexLayout::new(FlexDirection::Column).padding(Insets::uniform(m.preview_inset)),
            )
            .child(inner)
            .build();

        NodeBuilder::group(id.clone())
            .flow(Length::Percent(100.0), Length::Px(m.item_pitch))
            .opacity(reveal.opacity)
            .translate(Vec2::new(0.0, reveal.translate_y))
            .layout(FlexLayout::new(FlexDirection::Column).align(Align::Start))
            .child(
                NodeBuilder::text(format!("{id}_title"), card.title, m.item_title_size, 700)
                    .margin(Insets {
                        bottom: 10.0,
                        ..Insets::default()
                    })
                    .build(),
            )
            .child(preview)
            .build()
    }
}

fn modal_preview(id: &str) -> Node {
    let button = |suffix: &str, label: &str, primary: bool| {
        let chip = NodeBuilder::group(format!("{id}_{suffix}"))
            .flow(Length::Auto, Length::Auto)
            .radius(10.0)
            .layout(FlexLayout::new(FlexDirection::Row).padding(Insets::symmetric(8.0, 12.0)));
        let text = NodeBuilder::text(format!("{id}_{suffix}_label"), label, 12.0, 700);
        if primary {
            chip.background(Paint::Solid(BRAND))
                .child(text.color(Color::WHITE).build())
                .build()
        } else {
            chip.background(Paint::Solid(INK.with_alpha(0.02)))
                .border(hairline(INK.with_alpha(0.12)))
                .child(text.color(INK.with_alpha(0.75)).build())
                .build()
        }
    };

    NodeBuilder::group(format!("{id}_modal"))
        .flow(Length::Percent(62.0), Length::Auto)
        .radius(14.0)
        .background(Paint::Solid(Color::WHITE))
        .border(hairline(INK.with_alpha(0.08)))
        .shadow(Shadow {
            offset: Vec2::new(0.0, 14.0),
            blur: 36.0,
            color: INK.with_alpha(0.10),
        })
        .layout(
            FlexLayout::new(FlexDirection::Column)
                .gap(10.0)
                .padding(Insets::uniform(18.0)),
        )
        .child(
            NodeBuilder::text(format!("{id}_modal_title"), "A fast way to build", 14.0, 700)
                .build(),
        )
        .child(
            NodeBuilder::text(
                format!("{id}_modal_body"),
                "Use ready components, colors, and layouts.",
                12.0,
                400,
            )
            .color(INK.with_alpha(0.55))
            .line_height(1.35)
            .build(),
        )
        .child(
            NodeBuilder::group(format!("{id}_modal_actions"))
                .flow(Length::Auto, Length::Auto)
                .margin(Insets {
                    top: 4.0,
                    ..Insets::default()
                })
                .layout(FlexLayout::new(FlexDirection::Row).gap(10.0))
                .child(button("import_button", "Import", true))
                .child(button("preview_button", "Preview", false))
                .build(),
        )
        .build()
}

fn list_preview(id: &str) -> Node {
    let bars = (0..4u8).map(|r| {
        let tint = if r == 1 {
            BRAND.with_alpha(0.22)
        } else {
            INK.with_alpha(0.10)
        };
        NodeBuilder::solid(format!("{id}_bar_{r}"), tint)
            .flow(Length::Percent(92.0 - f64::from(r) * 12.0), Length::Px(10.0))
            .margin(Insets {
                bottom: 10.0,
                ..Insets::default()
            })
            .radius(999.0)
            .build()
    });

    NodeBuilder::group(format!("{id}_list"))
        .flow(Length::Percent(86.0), Length::Auto)
        .layout(FlexLayout::new(FlexDirection::Column).align(Align::Start))
        .children(bars)
        .child(
            NodeBuilder::solid(format!("{id}_bar_trailer"), INK.with_alpha(0.06))
                .flow(Length::Percent(44.0), Length::Px(10.0))
                .margin(Insets {
                    top: 6.0,
                    ..Insets::default()
                })
                .radius(999.0)
                .build(),
        )
        .build()
}

fn grid_preview(id: &str) -> Node {
    NodeBuilder::group(format!("{id}_grid"))
        .flow(Length::Percent(86.0), Length::Auto)
        .layout(FlexLayout::new(FlexDirection::Grid { columns: 3 }).gap(10.0))
        .children((0..6).map(|c| {
            NodeBuilder::solid(format!("{id}_tile_{c}"), INK.with_alpha(0.08))
                .flow(Length::Auto, Length::Px(22.0))
                .radius(10.0)
                .build()
        }))
        .build()
}

fn hairline(color: Color) -> Border {
    Border {
        width: 1.0,
        color,
        sides: BorderSides::All,
    }
}

fn divider() -> Border {
    Border {
        width: 1.0,
        color: INK.with_alpha(0.08),
        sides: BorderSides::Bottom,
    }
}

fn vertical_fade(top: Color, bottom: Color) -> Paint {
    Paint::Gradient(Gradient::Linear {
        angle_deg: 180.0,
        stops: vec![ColorStop::new(0.0, top), ColorStop::new(1.0, bottom)],
    })
}

#[cfg(test)]
#[path = "../../tests/unit/preset/mock_ui.rs"]
mod tests;

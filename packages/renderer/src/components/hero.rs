use super::button::button_node;
use super::link_wrap;
use crate::context::RenderContext;
use crate::vdom::VNode;
use pagecraft_model::{ButtonSize, ButtonVariant, HeroHeight, HeroProperties, HorizontalAlign, Rgb};

pub(super) fn render(props: &HeroProperties, ctx: &RenderContext) -> VNode {
    let (justify, text_align) = match props.alignment {
        HorizontalAlign::Left => ("flex-start", "left"),
        HorizontalAlign::Center => ("center", "center"),
        HorizontalAlign::Right => ("flex-end", "right"),
    };

    let section = VNode::element("section")
        .with_class("pb-hero")
        .with_style("position", "relative")
        .with_style("display", "flex")
        .with_style("align-items", "center")
        .with_style("justify-content", justify)
        .with_style("text-align", text_align)
        .with_style("min-height", min_height(props.height))
        .with_style("color", Rgb::from_hex(&props.text_color).to_rgb_css());

    let section = if props.background_image.trim().is_empty() {
        section
    } else {
        section
            .with_style(
                "background-image",
                format!("url(\"{}\")", props.background_image.trim()),
            )
            .with_style("background-size", "cover")
            .with_style("background-position", "center")
    };

    let section = if props.overlay_opacity > 0.0 {
        section.with_child(
            VNode::element("div")
                .with_class("pb-hero-overlay")
                .with_style("position", "absolute")
                .with_style("inset", "0")
                .with_style("background-color", Rgb::BLACK.to_rgba_css(props.overlay_opacity)),
        )
    } else {
        section
    };

    let mut content = VNode::element("div")
        .with_class("pb-hero-content")
        .with_style("position", "relative")
        .with_child(
            VNode::element("h1")
                .with_class("pb-hero-title")
                .with_child(VNode::text(props.title.as_str())),
        );

    if !props.subtitle.is_empty() {
        content = content.with_child(
            VNode::element("p")
                .with_class("pb-hero-subtitle")
                .with_child(VNode::text(props.subtitle.as_str())),
        );
    }

    if !props.cta_text.is_empty() {
        let cta = button_node(&props.cta_text, ButtonVariant::Primary, ButtonSize::Lg, false)
            .with_class("pb-hero-cta");
        content = content.with_child(link_wrap(cta, &props.cta_link, ctx));
    }

    section.with_child(content)
}

fn min_height(height: HeroHeight) -> &'static str {
    match height {
        HeroHeight::Sm => "300px",
        HeroHeight::Md => "400px",
        HeroHeight::Lg => "500px",
        HeroHeight::Full => "100vh",
    }
}

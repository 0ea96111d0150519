use super::button::button_node;
use super::link_wrap;
use crate::context::RenderContext;
use crate::vdom::VNode;
use pagecraft_model::{ButtonSize, ButtonVariant, CardProperties};

pub(super) fn render(props: &CardProperties, ctx: &RenderContext) -> VNode {
    let mut card = VNode::element("article")
        .with_class("pb-card")
        .with_style("overflow", "hidden");

    if !props.image_src.trim().is_empty() {
        card = card.with_child(
            VNode::element("img")
                .with_class("pb-card-image")
                .with_attr("src", props.image_src.trim())
                .with_attr("alt", props.image_alt.as_str())
                .with_attr("loading", "lazy")
                .with_style("width", "100%")
                .with_style("object-fit", "cover"),
        );
    }

    let mut body = VNode::element("div").with_class("pb-card-body").with_child(
        VNode::element("h3")
            .with_class("pb-card-title")
            .with_child(VNode::text(props.title.as_str())),
    );

    if !props.description.is_empty() {
        body = body.with_child(
            VNode::element("p")
                .with_class("pb-card-description")
                .with_child(VNode::text(props.description.as_str())),
        );
    }

    if !props.button_text.is_empty() {
        let button = button_node(&props.button_text, ButtonVariant::Primary, ButtonSize::Md, false);
        body = body.with_child(link_wrap(button, &props.button_link, ctx));
    }

    card.with_child(body)
}

use super::link_wrap;
use crate::context::RenderContext;
use crate::vdom::VNode;
use pagecraft_model::{ButtonProperties, ButtonSize, ButtonVariant};

pub(super) fn render(props: &ButtonProperties, ctx: &RenderContext) -> VNode {
    let button = button_node(&props.text, props.variant, props.size, props.full_width);

    VNode::element("div")
        .with_class("pb-button")
        .with_child(link_wrap(button, &props.link, ctx))
}

/// The `<button>` element shared by button, hero and card renderers
pub(super) fn button_node(
    text: &str,
    variant: ButtonVariant,
    size: ButtonSize,
    full_width: bool,
) -> VNode {
    let node = VNode::element("button")
        .with_attr("type", "button")
        .with_classes([
            "pb-btn".to_string(),
            format!("pb-btn-{}", variant.as_str()),
            format!("pb-btn-{}", size.as_str()),
        ])
        .with_child(VNode::text(text));

    if full_width {
        node.with_class("pb-btn-full").with_style("width", "100%")
    } else {
        node
    }
}

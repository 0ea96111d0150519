use crate::vdom::VNode;
use pagecraft_model::{FontWeight, Rgb, TextProperties};

pub(super) fn render(props: &TextProperties) -> VNode {
    VNode::element(props.tag.as_str())
        .with_class("pb-text")
        .with_style("font-size", format!("{}px", props.font_size))
        .with_style("font-weight", font_weight(props.font_weight))
        .with_style("color", Rgb::from_hex(&props.color).to_rgb_css())
        .with_style("text-align", props.align.as_str())
        .with_child(VNode::text(props.content.as_str()))
}

fn font_weight(weight: FontWeight) -> &'static str {
    match weight {
        FontWeight::Normal => "400",
        FontWeight::Medium => "500",
        FontWeight::Semibold => "600",
        FontWeight::Bold => "700",
    }
}

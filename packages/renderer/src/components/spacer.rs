use crate::vdom::VNode;
use pagecraft_model::SpacerProperties;

pub(super) fn render(props: &SpacerProperties) -> VNode {
    VNode::element("div")
        .with_class("pb-spacer")
        .with_attr("aria-hidden", "true")
        .with_style("height", format!("{}px", props.height))
}

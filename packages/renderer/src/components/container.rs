use super::{placeholder, render_component};
use crate::context::RenderContext;
use crate::vdom::VNode;
use pagecraft_model::{
    AlignItems, Component, ContainerLayout, ContainerProperties, JustifyContent, MaxWidth,
};

/// The only recursive renderer: children come from the tree view
pub(super) fn render(component: &Component, props: &ContainerProperties, ctx: &RenderContext) -> VNode {
    let node = VNode::element("div")
        .with_classes(["pb-container".to_string(), format!("pb-layout-{}", props.layout.as_str())])
        .with_style("width", "100%")
        .with_style("max-width", max_width(props.max_width));

    let node = match props.layout {
        ContainerLayout::Block => node.with_style("display", "block"),
        ContainerLayout::Row => flex(node, "row", props),
        ContainerLayout::Column => flex(node, "column", props),
        ContainerLayout::Grid => node
            .with_style("display", "grid")
            .with_style(
                "grid-template-columns",
                format!("repeat({}, minmax(0, 1fr))", props.columns.max(1)),
            )
            .with_style("gap", format!("{}px", props.gap))
            .with_style("align-items", align_items(props.align_items)),
    };

    let children: Vec<VNode> = ctx
        .tree
        .children(component.id.as_str())
        .iter()
        .filter_map(|child| render_component(child, ctx))
        .collect();

    if children.is_empty() && ctx.is_editing() {
        return node.with_child(placeholder("pb-drop-zone", "Drop components here"));
    }

    node.with_children(children)
}

fn flex(node: VNode, direction: &str, props: &ContainerProperties) -> VNode {
    let node = node
        .with_style("display", "flex")
        .with_style("flex-direction", direction)
        .with_style("gap", format!("{}px", props.gap))
        .with_style("align-items", align_items(props.align_items))
        .with_style("justify-content", justify_content(props.justify_content));

    if direction == "row" {
        node.with_style("flex-wrap", "wrap")
    } else {
        node
    }
}

fn align_items(align: AlignItems) -> &'static str {
    match align {
        AlignItems::Start => "flex-start",
        AlignItems::Center => "center",
        AlignItems::End => "flex-end",
        AlignItems::Stretch => "stretch",
    }
}

fn justify_content(justify: JustifyContent) -> &'static str {
    match justify {
        JustifyContent::Start => "flex-start",
        JustifyContent::Center => "center",
        JustifyContent::End => "flex-end",
        JustifyContent::Between => "space-between",
        JustifyContent::Around => "space-around",
    }
}

fn max_width(width: MaxWidth) -> &'static str {
    match width {
        MaxWidth::Sm => "640px",
        MaxWidth::Md => "768px",
        MaxWidth::Lg => "1024px",
        MaxWidth::Xl => "1280px",
        MaxWidth::Full => "100%",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::{RenderMode, RenderOptions};
    use pagecraft_model::{
        ComponentId, ComponentKind, PropertySchema, SpacerProperties, TextProperties, TreeView,
    };

    fn grid() -> Component {
        let props = ContainerProperties {
            layout: ContainerLayout::Grid,
            columns: 3,
            gap: 24,
            ..ContainerProperties::default()
        };
        Component::new(ComponentId::from("grid"), props.into_kind())
    }

    fn child(id: &str, order: i64) -> Component {
        Component::new(ComponentId::from(id), TextProperties::default_kind())
            .with_parent(Some(ComponentId::from("grid")))
            .with_order(order)
    }

    fn render_grid(components: &[Component], mode: RenderMode) -> VNode {
        let tree = TreeView::build(components);
        let options = RenderOptions {
            mode,
            ..RenderOptions::default()
        };
        let ctx = RenderContext::new(&tree, &options);
        let props = match components[0].kind() {
            ComponentKind::Container(props) => props.clone(),
            other => panic!("Expected container, got {:?}", other),
        };
        render(&components[0], &props, &ctx)
    }

    #[test]
    fn test_grid_layout() {
        let node = render_grid(&[grid()], RenderMode::Static);

        assert_eq!(node.style("display"), Some("grid"));
        assert_eq!(node.style("grid-template-columns"), Some("repeat(3, minmax(0, 1fr))"));
        assert_eq!(node.style("gap"), Some("24px"));
        assert!(node.children().is_empty());
    }

    #[test]
    fn test_empty_container_placeholder_when_editing() {
        let node = render_grid(&[grid()], RenderMode::Editing);
        assert_eq!(node.text_content(), "Drop components here");
    }

    #[test]
    fn test_children_rendered_in_order() {
        let mut first = child("b", 0);
        first.replace_properties(
            TextProperties {
                content: "first".to_string(),
                ..TextProperties::default()
            }
            .into_kind(),
        )
        .unwrap();
        let second = Component::new(ComponentId::from("a"), SpacerProperties::default_kind())
            .with_parent(Some(ComponentId::from("grid")))
            .with_order(1);

        let node = render_grid(&[grid(), second, first], RenderMode::Static);

        assert_eq!(node.children().len(), 2);
        assert_eq!(node.children()[0].text_content(), "first");
        assert!(node.children()[1].has_class("pb-spacer"));
    }

    #[test]
    fn test_children_framed_when_editing() {
        let node = render_grid(&[grid(), child("c", 0)], RenderMode::Editing);

        assert_eq!(node.children().len(), 1);
        assert_eq!(node.children()[0].attr("data-component-id"), Some("c"));
    }
}

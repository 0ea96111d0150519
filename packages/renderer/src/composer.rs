//! Canvas / tree composer.
//!
//! Builds the parent→children map once, renders the root components in
//! order and wraps them in the canvas (editing) or page (static) root.

use crate::components::render_component;
use crate::context::{RenderContext, RenderMode, RenderOptions};
use crate::vdom::VNode;
use pagecraft_model::Document;
use tracing::debug;

pub fn render_document(document: &Document, options: &RenderOptions) -> VNode {
    let tree = document.tree();
    let ctx = RenderContext::new(&tree, options);

    let children: Vec<VNode> = tree
        .roots()
        .iter()
        .filter_map(|component| render_component(component, &ctx))
        .collect();

    debug!(
        components = document.len(),
        roots = tree.roots().len(),
        mode = ?options.mode,
        breakpoint = options.breakpoint.map(|bp| bp.as_str()),
        "Rendered document"
    );

    let root = match options.mode {
        RenderMode::Editing => VNode::element("div").with_class("pb-canvas"),
        RenderMode::Static => VNode::element("div").with_class("pb-page"),
    };

    let root = match options.breakpoint {
        Some(breakpoint) => root
            .with_attr("data-breakpoint", breakpoint.as_str())
            .with_style("width", format!("{}px", breakpoint.width_px()))
            .with_style("max-width", "100%"),
        None => root,
    };

    if children.is_empty() && options.mode == RenderMode::Editing {
        return root.with_child(
            VNode::element("div")
                .with_classes(["pb-placeholder", "pb-canvas-empty"])
                .with_child(VNode::text("Drag components here to start building")),
        );
    }

    root.with_children(children)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagecraft_model::{
        Breakpoint, Component, ComponentId, ContainerProperties, PropertySchema, TextProperties,
    };

    #[test]
    fn test_empty_document() {
        let doc = Document::new();

        let canvas = render_document(&doc, &RenderOptions::editing());
        assert!(canvas.has_class("pb-canvas"));
        assert_eq!(canvas.text_content(), "Drag components here to start building");

        let page = render_document(&doc, &RenderOptions::static_page());
        assert!(page.has_class("pb-page"));
        assert!(page.children().is_empty());
    }

    #[test]
    fn test_roots_in_order_with_nested_children() {
        let doc = Document::with_components(vec![
            Component::new(ComponentId::from("t-2"), TextProperties::default_kind()).with_order(1),
            Component::new(ComponentId::from("c-1"), ContainerProperties::default_kind()).with_order(0),
            Component::new(ComponentId::from("t-1"), TextProperties::default_kind())
                .with_parent(Some(ComponentId::from("c-1"))),
        ]);

        let page = render_document(&doc, &RenderOptions::static_page());
        assert_eq!(page.children().len(), 2);
        assert!(page.children()[0].has_class("pb-container"));
        assert_eq!(page.children()[0].children().len(), 1);
        assert_eq!(page.children()[1].tag(), Some("p"));
    }

    #[test]
    fn test_breakpoint_width() {
        let doc = Document::new();
        let page = render_document(&doc, &RenderOptions::static_page().at_breakpoint(Breakpoint::Tablet));

        assert_eq!(page.style("width"), Some("768px"));
        assert_eq!(page.attr("data-breakpoint"), Some("tablet"));
    }
}

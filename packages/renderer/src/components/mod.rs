//! Per-type component renderers.
//!
//! Each renderer builds the *visual* node for one component type from its
//! typed properties. [`render_component`] then runs the shared box-model
//! step and, in editing mode, wraps the result in an edit frame.

mod button;
mod card;
mod container;
mod hero;
mod image;
mod spacer;
mod text;

use crate::box_model;
use crate::context::{RenderContext, RenderMode};
use crate::vdom::{EditorAction, EventBinding, VNode};
use pagecraft_model::{Component, ComponentKind, Link};
use tracing::trace;

/// Render one component (and, for containers, its subtree)
///
/// Returns `None` when nothing should be emitted: the component is hidden
/// at the simulated breakpoint, or it is of an unknown type in static mode.
pub fn render_component(component: &Component, ctx: &RenderContext) -> Option<VNode> {
    if let Some(breakpoint) = ctx.breakpoint {
        if !component.styles.responsive.is_visible(breakpoint) {
            trace!(component_id = %component.id, breakpoint = breakpoint.as_str(), "Hidden at breakpoint");
            return None;
        }
    }

    let visual = match component.kind() {
        ComponentKind::Text(props) => text::render(props),
        ComponentKind::Image(props) => image::render(props, ctx),
        ComponentKind::Button(props) => button::render(props, ctx),
        ComponentKind::Hero(props) => hero::render(props, ctx),
        ComponentKind::Card(props) => card::render(props, ctx),
        ComponentKind::Container(props) => container::render(component, props, ctx),
        ComponentKind::Spacer(props) => spacer::render(props),
        ComponentKind::Unknown { type_name, .. } => {
            return match ctx.mode {
                RenderMode::Editing => Some(edit_frame(
                    component,
                    VNode::error(
                        format!("Unknown component type: {}", type_name),
                        Some(component.id.clone()),
                    ),
                    ctx,
                )),
                RenderMode::Static => None,
            };
        }
    };

    let visual = box_model::apply(visual, &component.styles);

    Some(match ctx.mode {
        RenderMode::Editing => edit_frame(component, visual, ctx),
        RenderMode::Static => visual,
    })
}

/// Selection wrapper used in editing mode
fn edit_frame(component: &Component, visual: VNode, ctx: &RenderContext) -> VNode {
    let frame = VNode::element("div")
        .with_class("pb-editable")
        .with_attr("data-component-id", component.id.as_str())
        .with_attr("data-component-type", component.type_name())
        .with_event(EventBinding::click(EditorAction::Select(component.id.clone())));

    let frame = if ctx.is_selected(&component.id) {
        frame.with_class("pb-selected")
    } else {
        frame
    };

    frame.with_child(visual)
}

/// Wrap `node` in an anchor when publishing a navigable link
fn link_wrap(node: VNode, link: &Link, ctx: &RenderContext) -> VNode {
    if ctx.is_editing() || !link.is_navigable() {
        return node;
    }

    let anchor = VNode::element("a")
        .with_class("pb-link")
        .with_attr("href", link.url.trim());

    let anchor = if link.open_in_new_tab {
        anchor
            .with_attr("target", "_blank")
            .with_attr("rel", "noopener noreferrer")
    } else {
        anchor
    };

    anchor.with_child(node)
}

/// Editing-only hint shown in place of missing content
fn placeholder(class: &str, message: &str) -> VNode {
    VNode::element("div")
        .with_class("pb-placeholder")
        .with_class(class)
        .with_child(VNode::text(message))
}

use super::placeholder;
use crate::context::RenderContext;
use crate::vdom::VNode;
use pagecraft_model::ImageProperties;

pub(super) fn render(props: &ImageProperties, ctx: &RenderContext) -> VNode {
    if props.src.trim().is_empty() {
        if ctx.is_editing() {
            return placeholder("pb-image-placeholder", "Click to upload an image");
        }
        return VNode::element("div").with_classes(["pb-image", "pb-image-empty"]);
    }

    let img = VNode::element("img")
        .with_class("pb-image")
        .with_attr("src", props.src.trim())
        .with_attr("alt", props.alt.as_str())
        .with_attr("loading", "lazy")
        .with_style("object-fit", props.object_fit.as_str())
        .with_style("max-width", "100%");

    let img = match props.width {
        Some(width) => img.with_style("width", format!("{}px", width)),
        None => img,
    };
    let img = match props.height {
        Some(height) => img.with_style("height", format!("{}px", height)),
        None => img,
    };

    if props.border_radius > 0 {
        img.with_style("border-radius", format!("{}px", props.border_radius))
    } else {
        img
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::RenderOptions;
    use pagecraft_model::{Component, ObjectFit, TreeView};

    fn render_with(props: &ImageProperties, options: &RenderOptions) -> VNode {
        let components: Vec<Component> = Vec::new();
        let tree = TreeView::build(&components);
        let ctx = RenderContext::new(&tree, options);
        render(props, &ctx)
    }

    #[test]
    fn test_missing_src_placeholder_only_when_editing() {
        let props = ImageProperties::default();

        let editing = render_with(&props, &RenderOptions::editing());
        assert_eq!(editing.text_content(), "Click to upload an image");

        let published = render_with(&props, &RenderOptions::static_page());
        assert_eq!(published.text_content(), "");
        assert!(published.has_class("pb-image-empty"));
    }

    #[test]
    fn test_sized_image() {
        let props = ImageProperties {
            src: "/img/shoe.jpg".to_string(),
            alt: "Red shoe".to_string(),
            object_fit: ObjectFit::Contain,
            width: Some(320),
            height: None,
            border_radius: 8,
        };

        let node = render_with(&props, &RenderOptions::static_page());
        assert_eq!(node.tag(), Some("img"));
        assert_eq!(node.attr("alt"), Some("Red shoe"));
        assert_eq!(node.style("width"), Some("320px"));
        assert_eq!(node.style("height"), None);
        assert_eq!(node.style("object-fit"), Some("contain"));
        assert_eq!(node.style("border-radius"), Some("8px"));
    }
}

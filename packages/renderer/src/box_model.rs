//! Shared style step.
//!
//! Turns a component's [`Styles`] into inline CSS declarations and
//! responsive visibility classes. Both render modes run exactly this code,
//! so the visual node of a component does not depend on the mode.

use crate::vdom::VNode;
use pagecraft_model::{Breakpoint, Rgb, Spacing, Styles};

/// Inline declarations, in a fixed order
pub fn inline_styles(styles: &Styles) -> Vec<(String, String)> {
    let mut declarations = Vec::new();

    if !styles.margin.is_zero() {
        declarations.push(("margin".to_string(), spacing_css(&styles.margin)));
    }
    if !styles.padding.is_zero() {
        declarations.push(("padding".to_string(), spacing_css(&styles.padding)));
    }
    if let Some(background) = styles.background_color.as_deref().filter(|c| !c.trim().is_empty()) {
        declarations.push((
            "background-color".to_string(),
            Rgb::from_hex(background).to_rgb_css(),
        ));
    }
    if styles.border.is_visible() {
        declarations.push((
            "border".to_string(),
            format!(
                "{}px {} {}",
                styles.border.width,
                styles.border.style.as_str(),
                Rgb::from_hex(&styles.border.color).to_rgb_css()
            ),
        ));
    }
    if styles.shadow.enabled {
        let shadow = &styles.shadow;
        declarations.push((
            "box-shadow".to_string(),
            format!(
                "{}px {}px {}px {}px {}",
                shadow.offset_x,
                shadow.offset_y,
                shadow.blur,
                shadow.spread,
                Rgb::from_hex(&shadow.color).to_rgba_css(shadow.opacity)
            ),
        ));
    }

    declarations
}

/// `pb-hidden-<breakpoint>` for every breakpoint the component is hidden at
pub fn visibility_classes(styles: &Styles) -> Vec<String> {
    Breakpoint::ALL
        .into_iter()
        .filter(|bp| !styles.responsive.is_visible(*bp))
        .map(|bp| format!("pb-hidden-{}", bp.as_str()))
        .collect()
}

/// Apply the box model to a freshly built visual node
pub fn apply(node: VNode, styles: &Styles) -> VNode {
    node.with_styles(inline_styles(styles))
        .with_classes(visibility_classes(styles))
}

fn spacing_css(spacing: &Spacing) -> String {
    format!(
        "{}px {}px {}px {}px",
        spacing.top, spacing.right, spacing.bottom, spacing.left
    )
}

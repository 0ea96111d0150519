//! VNode → HTML serializer.

use crate::composer::render_document;
use crate::context::RenderOptions;
use crate::vdom::VNode;
use pagecraft_model::Document;

/// Options for HTML output
#[derive(Debug, Clone)]
pub struct HtmlOptions {
    /// Pretty print HTML
    pub pretty: bool,
    /// Indentation string
    pub indent: String,
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self {
            pretty: true,
            indent: "  ".to_string(),
        }
    }
}

impl HtmlOptions {
    pub fn compact() -> Self {
        Self {
            pretty: false,
            ..Self::default()
        }
    }
}

/// Stylesheet every published page carries
pub const BASE_CSS: &str = "\
*, *::before, *::after { box-sizing: border-box; }
body { margin: 0; font-family: system-ui, -apple-system, sans-serif; }
.pb-page { margin: 0 auto; }
.pb-link { text-decoration: none; color: inherit; }
.pb-btn { cursor: pointer; border-radius: 6px; font-weight: 500; border: 1px solid transparent; }
.pb-btn-sm { padding: 4px 12px; font-size: 14px; }
.pb-btn-md { padding: 8px 16px; font-size: 16px; }
.pb-btn-lg { padding: 12px 24px; font-size: 18px; }
.pb-btn-primary { background: rgb(37, 99, 235); color: rgb(255, 255, 255); }
.pb-btn-secondary { background: rgb(229, 231, 235); color: rgb(17, 24, 39); }
.pb-btn-outline { background: transparent; border-color: currentColor; }
.pb-btn-ghost { background: transparent; }
.pb-card { border-radius: 8px; background: rgb(255, 255, 255); }
.pb-card-body { padding: 16px; }
";

/// Hides components per viewport class
pub const RESPONSIVE_CSS: &str = "\
@media (max-width: 767px) { .pb-hidden-mobile { display: none !important; } }
@media (min-width: 768px) and (max-width: 1279px) { .pb-hidden-tablet { display: none !important; } }
@media (min-width: 1280px) { .pb-hidden-desktop { display: none !important; } }
";

const VOID_TAGS: &[&str] = &["area", "br", "col", "hr", "img", "input", "meta", "source", "wbr"];

struct Context {
    options: HtmlOptions,
    depth: usize,
    buffer: String,
}

impl Context {
    fn new(options: HtmlOptions) -> Self {
        Self {
            options,
            depth: 0,
            buffer: String::new(),
        }
    }

    fn add(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    fn add_line(&mut self, text: &str) {
        if self.options.pretty {
            self.add_indent();
        }
        self.add(text);
        if self.options.pretty {
            self.add("\n");
        }
    }

    fn add_indent(&mut self) {
        for _ in 0..self.depth {
            self.buffer.push_str(&self.options.indent);
        }
    }

    fn indent(&mut self) {
        self.depth += 1;
    }

    fn dedent(&mut self) {
        if self.depth > 0 {
            self.depth -= 1;
        }
    }

    fn get_output(self) -> String {
        self.buffer
    }
}

/// Serialize a node tree to an HTML fragment
pub fn to_html(node: &VNode, options: HtmlOptions) -> String {
    let mut ctx = Context::new(options);
    write_node(node, &mut ctx);
    ctx.get_output()
}

/// Render `document` and wrap it in a complete HTML page
pub fn render_page(document: &Document, render_options: &RenderOptions, options: HtmlOptions) -> String {
    let root = render_document(document, render_options);
    let title = document.metadata.title.as_deref().unwrap_or("Untitled page");

    let mut ctx = Context::new(options);
    ctx.add_line("<!DOCTYPE html>");
    ctx.add_line("<html>");
    ctx.indent();

    ctx.add_line("<head>");
    ctx.indent();
    ctx.add_line("<meta charset=\"UTF-8\">");
    ctx.add_line("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">");
    ctx.add_line(&format!("<title>{}</title>", escape(title)));
    if let Some(description) = &document.metadata.description {
        ctx.add_line(&format!(
            "<meta name=\"description\" content=\"{}\">",
            escape(description)
        ));
    }
    ctx.add_line("<style>");
    for line in BASE_CSS.lines().chain(RESPONSIVE_CSS.lines()) {
        ctx.add_line(line);
    }
    ctx.add_line("</style>");
    ctx.dedent();
    ctx.add_line("</head>");

    ctx.add_line("<body>");
    ctx.indent();
    write_node(&root, &mut ctx);
    ctx.dedent();
    ctx.add_line("</body>");

    ctx.dedent();
    ctx.add_line("</html>");

    ctx.get_output()
}

fn write_node(node: &VNode, ctx: &mut Context) {
    match node {
        VNode::Element {
            tag,
            children,
            ..
        } => {
            let open = open_tag(node);

            if VOID_TAGS.contains(&tag.as_str()) {
                ctx.add_line(&open);
            } else if children.is_empty() {
                ctx.add_line(&format!("{}</{}>", open, tag));
            } else if children.iter().all(|c| matches!(c, VNode::Text { .. })) {
                // Keep inline text on one line so pretty printing adds no whitespace
                let text: String = children.iter().map(|c| escape(&c.text_content())).collect();
                ctx.add_line(&format!("{}{}</{}>", open, text, tag));
            } else {
                ctx.add_line(&open);
                ctx.indent();
                for child in children {
                    write_node(child, ctx);
                }
                ctx.dedent();
                ctx.add_line(&format!("</{}>", tag));
            }
        }

        VNode::Text { content } => {
            ctx.add_line(&escape(content));
        }

        VNode::Error {
            message,
            component_id,
        } => {
            let id_attr = component_id
                .as_ref()
                .map(|id| format!(" data-component-id=\"{}\"", escape(id.as_str())))
                .unwrap_or_default();
            ctx.add_line(&format!(
                "<div class=\"pb-error\" role=\"alert\"{}>{}</div>",
                id_attr,
                escape(message)
            ));
        }
    }
}

fn open_tag(node: &VNode) -> String {
    let VNode::Element {
        tag,
        classes,
        attributes,
        styles,
        events,
        ..
    } = node
    else {
        return String::new();
    };

    let mut html = format!("<{}", tag);

    if !classes.is_empty() {
        html.push_str(&format!(" class=\"{}\"", escape(&classes.join(" "))));
    }

    for (name, value) in attributes {
        html.push_str(&format!(" {}=\"{}\"", name, escape(value)));
    }

    if !styles.is_empty() {
        let css = styles
            .iter()
            .map(|(property, value)| format!("{}: {}", property, value))
            .collect::<Vec<_>>()
            .join("; ");
        html.push_str(&format!(" style=\"{}\"", escape(&css)));
    }

    for binding in events {
        html.push_str(&format!(
            " data-on-{}=\"{}\"",
            binding.event.as_str(),
            escape(&binding.action.encode())
        ));
    }

    html.push('>');
    html
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vdom::{EditorAction, EventBinding};
    use pagecraft_model::ComponentId;

    #[test]
    fn test_compact_element() {
        let node = VNode::element("p")
            .with_class("pb-text")
            .with_attr("id", "x")
            .with_style("color", "rgb(0, 0, 0)")
            .with_child(VNode::text("Fish & <chips>"));

        assert_eq!(
            to_html(&node, HtmlOptions::compact()),
            "<p class=\"pb-text\" id=\"x\" style=\"color: rgb(0, 0, 0)\">Fish &amp; &lt;chips&gt;</p>"
        );
    }

    #[test]
    fn test_void_and_nested() {
        let node = VNode::element("div")
            .with_child(VNode::element("img").with_attr("src", "/a.png"))
            .with_child(VNode::element("span"));

        assert_eq!(
            to_html(&node, HtmlOptions::default()),
            "<div>\n  <img src=\"/a.png\">\n  <span></span>\n</div>\n"
        );
    }

    #[test]
    fn test_event_binding_attribute() {
        let node = VNode::element("div").with_event(EventBinding::click(EditorAction::Select(
            ComponentId::from("t-1"),
        )));

        assert_eq!(
            to_html(&node, HtmlOptions::compact()),
            "<div data-on-click=\"select:t-1\"></div>"
        );
    }

    #[test]
    fn test_error_node() {
        let node = VNode::error("Unknown component type: quiz", Some(ComponentId::from("q-1")));

        assert_eq!(
            to_html(&node, HtmlOptions::compact()),
            "<div class=\"pb-error\" role=\"alert\" data-component-id=\"q-1\">Unknown component type: quiz</div>"
        );
    }

    #[test]
    fn test_page_shell() {
        let mut doc = Document::new();
        doc.metadata.title = Some("Summer <Sale>".to_string());

        let html = render_page(&doc, &RenderOptions::static_page(), HtmlOptions::default());
        assert!(html.starts_with("<!DOCTYPE html>\n<html>\n"));
        assert!(html.contains("<title>Summer &lt;Sale&gt;</title>"));
        assert!(html.contains(".pb-hidden-mobile"));
        assert!(html.contains("<div class=\"pb-page\"></div>"));
    }
}

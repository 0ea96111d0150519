//! # Pagecraft Renderer
//!
//! Turns a [`Document`](pagecraft_model::Document) into a virtual node tree
//! and, from there, into HTML.
//!
//! ## Pipeline
//!
//! ```text
//! Document ──tree()──→ TreeView ──components──→ VNode ──html──→ String
//!                         │
//!                  built once per render
//! ```
//!
//! ## Modes
//!
//! - [`RenderMode::Editing`]: every component sits in an edit frame that
//!   carries its id and a click binding reporting selection. Empty
//!   containers and images show placeholders. Unknown component types
//!   render an error node.
//! - [`RenderMode::Static`]: no bindings, no placeholders. Links become
//!   anchors. Unknown component types render nothing.
//!
//! Rendering cannot fail: malformed colors fall back to black and anything
//! that cannot be drawn is either an error node or omitted.

pub mod box_model;
pub mod components;
pub mod composer;
pub mod context;
pub mod html;
pub mod vdom;

pub use components::render_component;
pub use composer::render_document;
pub use context::{RenderContext, RenderMode, RenderOptions};
pub use html::{render_page, to_html, HtmlOptions};
pub use vdom::{EditorAction, EventBinding, EventKind, VNode};

//! # Pagecraft Model
//!
//! Data model for the page builder: typed components, shared styles, the
//! component registry and the persisted document.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ model: Document + Registry                  │
//! │  - Flat component list (parentId + order)   │
//! │  - Typed properties per component type      │
//! │  - Schema validation at the JSON edge       │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ renderer: Document → VNode tree → HTML      │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: mutations, history, drag-and-drop   │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use pagecraft_model::{Document, IdGenerator, Registry};
//!
//! let registry = Registry::builtin();
//! let mut ids = IdGenerator::new();
//!
//! let hero = registry.create("hero", &mut ids)?;
//! let doc = Document::with_components(vec![hero]);
//! let json = doc.to_json()?;
//! ```

pub mod color;
pub mod component;
pub mod document;
pub mod id_generator;
pub mod properties;
pub mod registry;
pub mod schema;
pub mod styles;
pub mod tree;

pub use color::Rgb;
pub use component::{Component, ComponentId, ComponentKind, ComponentType};
pub use document::{Document, DocumentError, IntegrityViolation, Metadata, DOCUMENT_VERSION};
pub use id_generator::IdGenerator;
pub use properties::*;
pub use registry::{Category, ComponentDefinition, Registry, RegistryError};
pub use schema::{FieldKind, FieldSpec, PropertySchema, SchemaError};
pub use styles::{Border, BorderStyle, Breakpoint, ResponsiveDisplay, Shadow, Spacing, Styles, Visibility};
pub use tree::TreeView;

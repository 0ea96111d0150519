//! # Pagecraft Editor
//!
//! Editing engine for the page builder.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ model: Document + Registry                  │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: EditSession                         │
//! │  - Mutations with validation                │
//! │  - Snapshot undo/redo                       │
//! │  - Drag-and-drop gesture resolution         │
//! │  - Debounced auto-save to a host handler    │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ renderer: editing canvas / static page      │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **Document is source of truth**: rendered trees are derived views
//! 2. **Every edit is a mutation**: palette drops, sorting and the
//!    properties panel all go through [`Mutation::apply`]
//! 3. **Rejected edits change nothing**: validation runs before any write
//! 4. **The host owns storage**: the editor only calls [`SaveHandler`]
//!
//! ## Usage
//!
//! ```rust,ignore
//! use pagecraft_editor::{BuilderConfig, EditSession};
//! use pagecraft_model::Registry;
//!
//! let mut session = EditSession::new(Arc::new(Registry::builtin()), None, BuilderConfig::default());
//!
//! let hero = session.insert("hero", None, None)?;
//! session.update_properties(&hero.id, json!({ "title": "Spring sale" }))?;
//! session.undo();
//!
//! let canvas = session.render();
//! ```

mod autosave;
mod config;
mod drag;
mod errors;
mod history;
mod mutations;
mod session;

pub use autosave::{AutoSaver, SaveError, SaveHandler};
pub use config::{BuilderConfig, ConfigError, DEFAULT_CONFIG_NAME};
pub use drag::{
    DragController, DragSource, DragState, DropAction, DropIntent, DropTarget, Point,
    DEFAULT_ACTIVATION_DISTANCE,
};
pub use errors::EditorError;
pub use history::{History, Snapshot};
pub use mutations::{ComponentPatch, Mutation, MutationContext, MutationError, MutationOutcome};
pub use session::{EditSession, Inspector, PaletteView, PreviewCallback};

// Re-export common types for convenience
pub use pagecraft_model::{Component, ComponentId, Document, Registry};
pub use pagecraft_renderer::VNode;

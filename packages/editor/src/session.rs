//! # Edit Session
//!
//! One editor working on one document. The session owns the document,
//! the undo history, the selection and the drag gesture, and routes every
//! edit (palette drops, sortable moves, properties panel patches) through
//! the same mutation path:
//!
//! ```text
//! gesture / panel → Mutation → validate → write → history snapshot
//!                                                   → auto-save schedule
//! ```

use crate::autosave::{AutoSaver, SaveError, SaveHandler};
use crate::config::BuilderConfig;
use crate::drag::{DragController, DragSource, DragState, DropAction, DropTarget, Point};
use crate::errors::EditorError;
use crate::history::History;
use crate::mutations::{ComponentPatch, Mutation, MutationContext, MutationError, MutationOutcome};
use futures::future::BoxFuture;
use pagecraft_model::{
    Breakpoint, Category, Component, ComponentDefinition, ComponentId, Document, FieldSpec,
    IdGenerator, Registry,
};
use pagecraft_renderer::{render_document, RenderOptions, VNode};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Callback fired when the editor asks for a live preview
pub type PreviewCallback = Box<dyn Fn() + Send + Sync>;

/// Palette as the host should draw it
#[derive(Debug)]
pub enum PaletteView<'a> {
    /// Plain grid in registration order
    Grid(Vec<&'a ComponentDefinition>),
    /// Search-filtered entries grouped by category
    Categorized(Vec<(Category, Vec<&'a ComponentDefinition>)>),
}

/// What the properties panel needs for the selected component
#[derive(Debug)]
pub struct Inspector<'a> {
    pub component: &'a Component,
    /// Empty for component types this build does not know
    pub fields: &'a [FieldSpec],
    pub properties: Value,
}

pub struct EditSession {
    registry: Arc<Registry>,
    document: Document,
    history: History,
    selection: Option<ComponentId>,
    drag: DragController,
    config: BuilderConfig,
    ids: IdGenerator,
    save_handler: Option<Arc<dyn SaveHandler>>,
    auto_saver: Option<AutoSaver>,
    on_preview: Option<PreviewCallback>,
    batch_depth: usize,
    batch_dirty: bool,
}

impl EditSession {
    /// Open `initial_data` (or an empty page)
    ///
    /// Structural problems in the loaded document are repaired by
    /// re-rooting the affected components; each repair is logged.
    pub fn new(registry: Arc<Registry>, initial_data: Option<Document>, config: BuilderConfig) -> Self {
        let mut document = initial_data.unwrap_or_else(Document::new);
        for violation in document.repair() {
            warn!(%violation, "Repaired loaded document");
        }

        let history = History::with_max_levels(document.components.clone(), config.history_limit);
        let drag = DragController::new(config.drag_activation_distance);

        info!(
            components = document.len(),
            auto_save = config.auto_save,
            "Opened edit session"
        );

        Self {
            registry,
            document,
            history,
            selection: None,
            drag,
            config,
            ids: IdGenerator::new(),
            save_handler: None,
            auto_saver: None,
            on_preview: None,
            batch_depth: 0,
            batch_dirty: false,
        }
    }

    /// Use a fixed id generator (predictable ids)
    pub fn with_id_generator(mut self, ids: IdGenerator) -> Self {
        self.ids = ids;
        self
    }

    /// Install the persistence callback
    ///
    /// With `autoSave` on this also starts the debounce task, which needs a
    /// running tokio runtime; without one auto-save stays off.
    pub fn with_save_handler(mut self, handler: Arc<dyn SaveHandler>) -> Self {
        if self.config.auto_save {
            match tokio::runtime::Handle::try_current() {
                Ok(_) => {
                    self.auto_saver = Some(AutoSaver::spawn(
                        handler.clone(),
                        self.config.auto_save_delay(),
                    ));
                }
                Err(_) => warn!("Auto-save requested outside a tokio runtime; disabled"),
            }
        }
        self.save_handler = Some(handler);
        self
    }

    pub fn with_preview_callback(mut self, callback: PreviewCallback) -> Self {
        self.on_preview = Some(callback);
        self
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn config(&self) -> &BuilderConfig {
        &self.config
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn to_json(&self) -> Result<String, EditorError> {
        Ok(self.document.to_json()?)
    }

    // Selection

    pub fn selection(&self) -> Option<&ComponentId> {
        self.selection.as_ref()
    }

    pub fn selected_component(&self) -> Option<&Component> {
        self.selection
            .as_ref()
            .and_then(|id| self.document.get(id.as_str()))
    }

    /// Select a component; unknown ids clear the selection
    pub fn select(&mut self, id: Option<ComponentId>) {
        self.selection = id.filter(|id| self.document.contains(id.as_str()));
    }

    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    /// Properties panel data for a component
    pub fn inspect(&self, id: &str) -> Option<Inspector<'_>> {
        let component = self.document.get(id)?;
        let fields = self
            .registry
            .lookup(component.type_name())
            .map(|d| d.fields.as_slice())
            .unwrap_or(&[]);

        Some(Inspector {
            component,
            fields,
            properties: component.kind().properties_json(),
        })
    }

    // Mutations

    /// Apply any mutation through validation and history
    pub fn apply(&mut self, mutation: Mutation) -> Result<MutationOutcome, EditorError> {
        let mut ctx = MutationContext::new(&self.registry, &mut self.ids);
        let outcome = mutation.apply(&mut self.document, &mut ctx)?;

        if outcome.changed() {
            self.after_change(&outcome);
        }
        Ok(outcome)
    }

    pub fn insert(
        &mut self,
        component_type: &str,
        parent_id: Option<ComponentId>,
        index: Option<usize>,
    ) -> Result<Component, EditorError> {
        let outcome = self.apply(Mutation::Insert {
            component_type: component_type.to_string(),
            parent_id,
            index,
        })?;
        Ok(expect_created(outcome)?)
    }

    pub fn update(&mut self, id: &ComponentId, patch: ComponentPatch) -> Result<Component, EditorError> {
        match self.apply(Mutation::Update {
            id: id.clone(),
            patch,
        })? {
            MutationOutcome::Updated(component) => Ok(component),
            _ => Err(MutationError::NotFound(id.clone()).into()),
        }
    }

    /// Properties panel shortcut: patch properties only
    pub fn update_properties(&mut self, id: &ComponentId, properties: Value) -> Result<Component, EditorError> {
        let patch = ComponentPatch::from_json(serde_json::json!({ "properties": properties }))?;
        self.update(id, patch)
    }

    /// Properties panel shortcut: patch styles only
    pub fn update_styles(&mut self, id: &ComponentId, styles: Value) -> Result<Component, EditorError> {
        let patch = ComponentPatch::from_json(serde_json::json!({ "styles": styles }))?;
        self.update(id, patch)
    }

    /// Remove a component and its subtree; returns every removed id
    pub fn remove(&mut self, id: &ComponentId) -> Result<Vec<ComponentId>, EditorError> {
        match self.apply(Mutation::Remove { id: id.clone() })? {
            MutationOutcome::Removed(ids) => Ok(ids),
            _ => Ok(Vec::new()),
        }
    }

    pub fn duplicate(&mut self, id: &ComponentId) -> Result<Component, EditorError> {
        let outcome = self.apply(Mutation::Duplicate { id: id.clone() })?;
        Ok(expect_created(outcome)?)
    }

    pub fn move_component(&mut self, active_id: &ComponentId, over_id: &ComponentId) -> Result<(), EditorError> {
        self.apply(Mutation::Move {
            active_id: active_id.clone(),
            over_id: over_id.clone(),
        })?;
        Ok(())
    }

    pub fn reparent(
        &mut self,
        id: &ComponentId,
        new_parent_id: Option<ComponentId>,
        index: Option<usize>,
    ) -> Result<(), EditorError> {
        self.apply(Mutation::Reparent {
            id: id.clone(),
            new_parent_id,
            index,
        })?;
        Ok(())
    }

    fn after_change(&mut self, outcome: &MutationOutcome) {
        match outcome {
            MutationOutcome::Inserted(component) | MutationOutcome::Duplicated(component) => {
                self.selection = Some(component.id.clone());
            }
            MutationOutcome::Removed(ids) => {
                if self.selection.as_ref().is_some_and(|s| ids.contains(s)) {
                    self.selection = None;
                }
            }
            _ => {}
        }

        if self.batch_depth > 0 {
            self.batch_dirty = true;
        } else {
            self.commit();
        }
    }

    fn commit(&mut self) {
        self.history.commit(self.document.components.clone());
        self.schedule_auto_save();
    }

    fn schedule_auto_save(&self) {
        if let Some(saver) = &self.auto_saver {
            saver.schedule(self.document.clone());
        }
    }

    // Batching

    /// Group the following mutations into one undo step
    pub fn begin_batch(&mut self) {
        self.batch_depth += 1;
    }

    /// Close a batch; the outermost close commits one snapshot
    pub fn end_batch(&mut self) {
        if self.batch_depth == 0 {
            return;
        }
        self.batch_depth -= 1;
        if self.batch_depth == 0 && self.batch_dirty {
            self.batch_dirty = false;
            self.commit();
        }
    }

    // History

    pub fn undo(&mut self) -> bool {
        let Some(snapshot) = self.history.undo() else {
            return false;
        };
        self.document.components = snapshot.to_vec();
        self.after_time_travel("Undo");
        true
    }

    pub fn redo(&mut self) -> bool {
        let Some(snapshot) = self.history.redo() else {
            return false;
        };
        self.document.components = snapshot.to_vec();
        self.after_time_travel("Redo");
        true
    }

    fn after_time_travel(&mut self, action: &'static str) {
        self.selection = None;
        self.schedule_auto_save();
        debug!(
            action,
            undo_levels = self.history.undo_levels(),
            redo_levels = self.history.redo_levels(),
            "History step"
        );
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    // Drag and drop

    pub fn drag_state(&self) -> &DragState {
        self.drag.state()
    }

    /// Press on a palette entry or component; false while another gesture runs
    pub fn pointer_down(&mut self, source: DragSource, at: Point) -> bool {
        self.drag.pointer_down(source, at)
    }

    pub fn pointer_move(&mut self, at: Point, over: Option<DropTarget>) {
        self.drag.pointer_move(at, over);
    }

    /// Release the pointer and apply whatever the drop means
    ///
    /// Returns `None` when the gesture was abandoned: a click, a release
    /// outside any target, or a drop the document rejects (unknown palette
    /// type, invalid parent, cycle). Abandoned gestures never change the
    /// document.
    pub fn pointer_up(&mut self, at: Point, over: Option<DropTarget>) -> Option<MutationOutcome> {
        let intent = self.drag.pointer_up(at, over)?;

        let mutation = match intent.resolve(&self.document) {
            DropAction::Insert {
                component_type,
                parent_id,
            } => Mutation::Insert {
                component_type,
                parent_id,
                index: None,
            },
            DropAction::Move { active_id, over_id } => Mutation::Move { active_id, over_id },
            DropAction::Reparent {
                id,
                new_parent_id,
                index,
            } => Mutation::Reparent {
                id,
                new_parent_id,
                index,
            },
            DropAction::Noop => return None,
        };

        match self.apply(mutation) {
            Ok(outcome) => Some(outcome),
            Err(error) => {
                warn!(%error, "Drop abandoned");
                None
            }
        }
    }

    pub fn cancel_drag(&mut self) {
        self.drag.cancel();
    }

    // Views

    /// Editing canvas with the current selection highlighted
    pub fn render(&self) -> VNode {
        render_document(
            &self.document,
            &RenderOptions::editing().with_selection(self.selection.clone()),
        )
    }

    /// What a visitor would see
    pub fn render_static(&self) -> VNode {
        render_document(&self.document, &RenderOptions::static_page())
    }

    /// Palette per the `enhancedPalette` flag; `query` only filters the enhanced view
    pub fn palette_view(&self, query: &str) -> PaletteView<'_> {
        if !self.config.enhanced_palette {
            return PaletteView::Grid(self.registry.palette().iter().collect());
        }

        let matches = self.registry.search(query);
        let groups = self
            .registry
            .by_category()
            .into_iter()
            .map(|(category, members)| {
                let members = members
                    .into_iter()
                    .filter(|d| matches.iter().any(|m| m.component_type == d.component_type))
                    .collect::<Vec<_>>();
                (category, members)
            })
            .filter(|(_, members)| !members.is_empty())
            .collect();

        PaletteView::Categorized(groups)
    }

    /// Fire the preview callback and return the static render
    ///
    /// `None` when preview mode is disabled.
    pub fn preview(&self) -> Option<VNode> {
        if !self.config.enable_preview_mode {
            return None;
        }
        if let Some(callback) = &self.on_preview {
            callback();
        }
        Some(self.render_static())
    }

    /// Static render as seen at `breakpoint`; `None` unless the tester is enabled
    pub fn responsive_preview(&self, breakpoint: Breakpoint) -> Option<VNode> {
        if !self.config.show_responsive_tester {
            return None;
        }
        Some(render_document(
            &self.document,
            &RenderOptions::static_page().at_breakpoint(breakpoint),
        ))
    }

    // Persistence

    /// Stamp `lastModified` and hand a copy to the save handler
    ///
    /// The returned future owns everything it needs, so the session stays
    /// usable while the save is in flight.
    pub fn save(&mut self) -> Result<BoxFuture<'static, Result<(), SaveError>>, EditorError> {
        let handler = self.save_handler.clone().ok_or(EditorError::NoSaveHandler)?;

        self.document.touch();
        info!(components = self.document.len(), "Saving document");
        Ok(handler.save(self.document.clone()))
    }
}

fn expect_created(outcome: MutationOutcome) -> Result<Component, MutationError> {
    match outcome {
        MutationOutcome::Inserted(component) | MutationOutcome::Duplicated(component) => Ok(component),
        other => Err(MutationError::Schema(pagecraft_model::SchemaError::InvalidValue {
            field: "outcome".to_string(),
            reason: format!("expected a new component, got {:?}", other),
        })),
    }
}

//! # Document Mutations
//!
//! The primitive edits a page builder performs on a [`Document`].
//!
//! ## Semantics
//!
//! ### Insert
//! - Builds a default component through the registry
//! - Parent, if given, must exist and be a container
//! - Placed at `index` among the parent's sorted children (default end)
//!
//! ### Update
//! - Shallow-merges a JSON patch into `properties` and/or `styles`
//! - `id` and `type` keys in a patch are ignored
//! - The merged record is decoded and range-checked before anything is written
//!
//! ### Remove
//! - Deletes the component and every transitive descendant
//! - Removing a missing id succeeds and changes nothing
//!
//! ### Duplicate
//! - Copies the component (not its children) right after the original
//!
//! ### Move
//! - Sortable reorder among siblings: `active` takes `over`'s position
//!
//! ### Reparent
//! - Relocates a component into a container (or to the root)
//! - Fails if the new parent is the component itself or one of its descendants
//!
//! Every mutation validates first and writes second, so a failed mutation
//! leaves the document exactly as it was.

use pagecraft_model::{
    Component, ComponentId, ComponentKind, Document, IdGenerator, Registry, RegistryError,
    SchemaError, Styles,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::{HashMap, HashSet};
use thiserror::Error;
use tracing::debug;

/// Keys a patch may never change
const PROTECTED_KEYS: &[&str] = &["id", "type"];

/// Partial update coming from the properties panel
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ComponentPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<Map<String, Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub styles: Option<Map<String, Value>>,
}

impl ComponentPatch {
    pub fn properties(properties: Map<String, Value>) -> Self {
        Self {
            properties: Some(properties),
            styles: None,
        }
    }

    pub fn styles(styles: Map<String, Value>) -> Self {
        Self {
            properties: None,
            styles: Some(styles),
        }
    }

    /// Build a patch from `{ "properties": {...}, "styles": {...} }`
    pub fn from_json(value: Value) -> Result<Self, SchemaError> {
        serde_json::from_value(value).map_err(|e| SchemaError::InvalidValue {
            field: "patch".to_string(),
            reason: e.to_string(),
        })
    }
}

/// Page builder edits
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Mutation {
    /// Create a default component of `component_type`
    Insert {
        component_type: String,
        parent_id: Option<ComponentId>,
        index: Option<usize>,
    },

    /// Patch properties and/or styles
    Update {
        id: ComponentId,
        patch: ComponentPatch,
    },

    /// Delete a component and its subtree
    Remove { id: ComponentId },

    /// Shallow copy placed right after the original
    Duplicate { id: ComponentId },

    /// Reorder among siblings
    Move {
        active_id: ComponentId,
        over_id: ComponentId,
    },

    /// Move into another container or to the root
    Reparent {
        id: ComponentId,
        new_parent_id: Option<ComponentId>,
        index: Option<usize>,
    },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MutationError {
    #[error("Component not found: {0}")]
    NotFound(ComponentId),

    #[error("Invalid parent {parent_id}: {reason}")]
    InvalidParent { parent_id: ComponentId, reason: String },

    #[error("Moving {id} under {parent_id} would create a cycle")]
    CycleDetected { id: ComponentId, parent_id: ComponentId },

    #[error("{active_id} and {over_id} do not share a parent")]
    NotSiblings { active_id: ComponentId, over_id: ComponentId },

    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error(transparent)]
    Registry(#[from] RegistryError),
}

/// What a mutation did
#[derive(Debug, Clone, PartialEq)]
pub enum MutationOutcome {
    Inserted(Component),
    Updated(Component),
    /// Ids of every deleted component, target first; empty when nothing matched
    Removed(Vec<ComponentId>),
    Duplicated(Component),
    Moved,
    Reparented,
    /// Valid request that required no change
    Unchanged,
}

impl MutationOutcome {
    /// Whether the document was modified
    pub fn changed(&self) -> bool {
        match self {
            MutationOutcome::Removed(ids) => !ids.is_empty(),
            MutationOutcome::Unchanged => false,
            _ => true,
        }
    }

    /// Component created by the mutation, if any
    pub fn created(&self) -> Option<&Component> {
        match self {
            MutationOutcome::Inserted(c) | MutationOutcome::Duplicated(c) => Some(c),
            _ => None,
        }
    }
}

/// Collaborators a mutation may need besides the document
pub struct MutationContext<'a> {
    pub registry: &'a Registry,
    pub ids: &'a mut IdGenerator,
}

impl<'a> MutationContext<'a> {
    pub fn new(registry: &'a Registry, ids: &'a mut IdGenerator) -> Self {
        Self { registry, ids }
    }

    fn fresh_id(&mut self, doc: &Document) -> ComponentId {
        self.ids.new_id_avoiding(|id| doc.contains(id.as_str()))
    }
}

impl Mutation {
    /// Apply mutation to the document with validation
    pub fn apply(
        &self,
        doc: &mut Document,
        ctx: &mut MutationContext,
    ) -> Result<MutationOutcome, MutationError> {
        // Validate first
        self.validate(doc, ctx.registry)?;

        let outcome = match self {
            Mutation::Insert {
                component_type,
                parent_id,
                index,
            } => Self::apply_insert(doc, ctx, component_type, parent_id.as_ref(), *index)?,

            Mutation::Update { id, patch } => Self::apply_update(doc, id, patch)?,

            Mutation::Remove { id } => Self::apply_remove(doc, id),

            Mutation::Duplicate { id } => Self::apply_duplicate(doc, ctx, id)?,

            Mutation::Move { active_id, over_id } => Self::apply_move(doc, active_id, over_id)?,

            Mutation::Reparent {
                id,
                new_parent_id,
                index,
            } => Self::apply_reparent(doc, id, new_parent_id.as_ref(), *index)?,
        };

        debug!(mutation = self.name(), changed = outcome.changed(), "Applied mutation");
        Ok(outcome)
    }

    /// Validate without applying
    ///
    /// Structural checks only; patch contents are checked when the merged
    /// record is decoded.
    pub fn validate(&self, doc: &Document, registry: &Registry) -> Result<(), MutationError> {
        match self {
            Mutation::Insert {
                component_type,
                parent_id,
                ..
            } => {
                registry.lookup(component_type)?;
                if let Some(parent_id) = parent_id {
                    check_container(doc, parent_id)?;
                }
                Ok(())
            }

            Mutation::Update { id, .. } | Mutation::Duplicate { id } => {
                require(doc, id)?;
                Ok(())
            }

            // Missing ids are a successful no-op
            Mutation::Remove { .. } => Ok(()),

            Mutation::Move { active_id, over_id } => {
                let active = require(doc, active_id)?;
                let over = require(doc, over_id)?;

                if active.parent_id != over.parent_id {
                    return Err(MutationError::NotSiblings {
                        active_id: active_id.clone(),
                        over_id: over_id.clone(),
                    });
                }
                Ok(())
            }

            Mutation::Reparent {
                id, new_parent_id, ..
            } => {
                require(doc, id)?;

                if let Some(parent_id) = new_parent_id {
                    if doc.would_create_cycle(id.as_str(), parent_id.as_str()) {
                        return Err(MutationError::CycleDetected {
                            id: id.clone(),
                            parent_id: parent_id.clone(),
                        });
                    }
                    check_container(doc, parent_id)?;
                }
                Ok(())
            }
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Mutation::Insert { .. } => "insert",
            Mutation::Update { .. } => "update",
            Mutation::Remove { .. } => "remove",
            Mutation::Duplicate { .. } => "duplicate",
            Mutation::Move { .. } => "move",
            Mutation::Reparent { .. } => "reparent",
        }
    }

    fn apply_insert(
        doc: &mut Document,
        ctx: &mut MutationContext,
        component_type: &str,
        parent_id: Option<&ComponentId>,
        index: Option<usize>,
    ) -> Result<MutationOutcome, MutationError> {
        let kind = ctx.registry.lookup(component_type)?.default_kind();

        let mut siblings = doc.sibling_ids(parent_id.map(ComponentId::as_str));
        let index = index.unwrap_or(siblings.len()).min(siblings.len());

        let component = Component::new(ctx.fresh_id(doc), kind)
            .with_parent(parent_id.cloned())
            .with_order(index as i64);

        siblings.insert(index, component.id.clone());
        doc.components.push(component.clone());
        reindex(doc, &siblings);

        debug!(
            component_id = %component.id,
            component_type,
            parent_id = parent_id.map(ComponentId::as_str),
            index,
            "Inserted component"
        );
        Ok(MutationOutcome::Inserted(component))
    }

    fn apply_update(
        doc: &mut Document,
        id: &ComponentId,
        patch: &ComponentPatch,
    ) -> Result<MutationOutcome, MutationError> {
        let current = require(doc, id)?;

        let kind = match &patch.properties {
            Some(properties) => {
                let mut merged = current.kind().properties_json();
                merge_shallow(&mut merged, properties);
                ComponentKind::from_parts(current.type_name(), merged)
                    .map_err(|e| e.in_component(id.as_str()))?
            }
            None => current.kind().clone(),
        };

        let styles = match &patch.styles {
            Some(styles) => merged_styles(&current.styles, styles)
                .map_err(|e| e.in_component(id.as_str()))?,
            None => current.styles.clone(),
        };

        // Everything is validated; write
        let target = doc
            .get_mut(id.as_str())
            .ok_or_else(|| MutationError::NotFound(id.clone()))?;
        target.replace_properties(kind)?;
        target.styles = styles;

        debug!(component_id = %id, "Updated component");
        Ok(MutationOutcome::Updated(target.clone()))
    }

    fn apply_remove(doc: &mut Document, id: &ComponentId) -> MutationOutcome {
        if !doc.contains(id.as_str()) {
            debug!(component_id = %id, "Remove of missing component ignored");
            return MutationOutcome::Removed(Vec::new());
        }

        let mut removed = vec![id.clone()];
        removed.extend(doc.descendant_ids(id.as_str()));

        let doomed: HashSet<&str> = removed.iter().map(ComponentId::as_str).collect();
        doc.components.retain(|c| !doomed.contains(c.id.as_str()));

        debug!(component_id = %id, count = removed.len(), "Removed component subtree");
        MutationOutcome::Removed(removed)
    }

    fn apply_duplicate(
        doc: &mut Document,
        ctx: &mut MutationContext,
        id: &ComponentId,
    ) -> Result<MutationOutcome, MutationError> {
        let original = require(doc, id)?.clone();
        let position = doc
            .position(id.as_str())
            .ok_or_else(|| MutationError::NotFound(id.clone()))?;

        let mut copy = original.clone();
        copy.id = ctx.fresh_id(doc);
        copy.order = original.order + 1;

        for sibling in doc
            .components
            .iter_mut()
            .filter(|c| c.parent_id == original.parent_id && c.order > original.order)
        {
            sibling.order += 1;
        }
        doc.components.insert(position + 1, copy.clone());

        debug!(component_id = %id, copy_id = %copy.id, "Duplicated component");
        Ok(MutationOutcome::Duplicated(copy))
    }

    fn apply_move(
        doc: &mut Document,
        active_id: &ComponentId,
        over_id: &ComponentId,
    ) -> Result<MutationOutcome, MutationError> {
        if active_id == over_id {
            return Ok(MutationOutcome::Unchanged);
        }

        let parent_id = require(doc, active_id)?.parent_id.clone();
        let mut siblings = doc.sibling_ids(parent_id.as_ref().map(ComponentId::as_str));

        let from = index_of(&siblings, active_id)?;
        let to = index_of(&siblings, over_id)?;

        let moved = siblings.remove(from);
        siblings.insert(to, moved);
        reindex(doc, &siblings);

        debug!(component_id = %active_id, from, to, "Moved component");
        Ok(MutationOutcome::Moved)
    }

    fn apply_reparent(
        doc: &mut Document,
        id: &ComponentId,
        new_parent_id: Option<&ComponentId>,
        index: Option<usize>,
    ) -> Result<MutationOutcome, MutationError> {
        let old_parent_id = require(doc, id)?.parent_id.clone();

        let mut old_siblings = doc.sibling_ids(old_parent_id.as_ref().map(ComponentId::as_str));
        old_siblings.retain(|sibling| sibling != id);

        let same_parent = old_parent_id.as_ref() == new_parent_id;
        let mut new_siblings = if same_parent {
            old_siblings.clone()
        } else {
            doc.sibling_ids(new_parent_id.map(ComponentId::as_str))
        };
        let index = index.unwrap_or(new_siblings.len()).min(new_siblings.len());
        new_siblings.insert(index, id.clone());

        let target = doc
            .get_mut(id.as_str())
            .ok_or_else(|| MutationError::NotFound(id.clone()))?;
        target.parent_id = new_parent_id.cloned();

        if !same_parent {
            reindex(doc, &old_siblings);
        }
        reindex(doc, &new_siblings);

        debug!(
            component_id = %id,
            parent_id = new_parent_id.map(ComponentId::as_str),
            index,
            "Reparented component"
        );
        Ok(MutationOutcome::Reparented)
    }
}

fn require<'a>(doc: &'a Document, id: &ComponentId) -> Result<&'a Component, MutationError> {
    doc.get(id.as_str())
        .ok_or_else(|| MutationError::NotFound(id.clone()))
}

fn check_container(doc: &Document, parent_id: &ComponentId) -> Result<(), MutationError> {
    match doc.get(parent_id.as_str()) {
        Some(parent) if parent.is_container() => Ok(()),
        Some(parent) => Err(MutationError::InvalidParent {
            parent_id: parent_id.clone(),
            reason: format!("{} components cannot have children", parent.type_name()),
        }),
        None => Err(MutationError::InvalidParent {
            parent_id: parent_id.clone(),
            reason: "no such component".to_string(),
        }),
    }
}

fn index_of(siblings: &[ComponentId], id: &ComponentId) -> Result<usize, MutationError> {
    siblings
        .iter()
        .position(|sibling| sibling == id)
        .ok_or_else(|| MutationError::NotFound(id.clone()))
}

/// Give every listed sibling `order` = its position
fn reindex(doc: &mut Document, ordered: &[ComponentId]) {
    let positions: HashMap<&str, i64> = ordered
        .iter()
        .enumerate()
        .map(|(position, id)| (id.as_str(), position as i64))
        .collect();

    for component in doc.components.iter_mut() {
        if let Some(position) = positions.get(component.id.as_str()) {
            component.order = *position;
        }
    }
}

fn merge_shallow(target: &mut Value, patch: &Map<String, Value>) {
    if !target.is_object() {
        *target = Value::Object(Map::new());
    }
    if let Value::Object(object) = target {
        for (key, value) in patch {
            if PROTECTED_KEYS.contains(&key.as_str()) {
                continue;
            }
            object.insert(key.clone(), value.clone());
        }
    }
}

fn merged_styles(current: &Styles, patch: &Map<String, Value>) -> Result<Styles, SchemaError> {
    let invalid = |e: serde_json::Error| SchemaError::InvalidValue {
        field: "styles".to_string(),
        reason: e.to_string(),
    };

    let mut merged = serde_json::to_value(current).map_err(invalid)?;
    merge_shallow(&mut merged, patch);

    let styles: Styles = serde_json::from_value(merged).map_err(invalid)?;
    styles.validate()?;
    Ok(styles)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagecraft_model::{
        ContainerProperties, PropertySchema, SpacerProperties, TextProperties,
    };
    use serde_json::json;

    struct Fixture {
        doc: Document,
        registry: Registry,
        ids: IdGenerator,
    }

    impl Fixture {
        fn new(components: Vec<Component>) -> Self {
            Self {
                doc: Document::with_components(components),
                registry: Registry::builtin(),
                ids: IdGenerator::from_seed("n"),
            }
        }

        fn apply(&mut self, mutation: Mutation) -> Result<MutationOutcome, MutationError> {
            let mut ctx = MutationContext::new(&self.registry, &mut self.ids);
            mutation.apply(&mut self.doc, &mut ctx)
        }

        fn order_of(&self, parent: Option<&str>) -> Vec<String> {
            self.doc
                .sibling_ids(parent)
                .into_iter()
                .map(|id| id.to_string())
                .collect()
        }
    }

    fn text(id: &str, parent: Option<&str>, order: i64) -> Component {
        Component::new(ComponentId::from(id), TextProperties::default_kind())
            .with_parent(parent.map(ComponentId::from))
            .with_order(order)
    }

    fn container(id: &str, parent: Option<&str>, order: i64) -> Component {
        Component::new(ComponentId::from(id), ContainerProperties::default_kind())
            .with_parent(parent.map(ComponentId::from))
            .with_order(order)
    }

    fn patch(value: Value) -> ComponentPatch {
        ComponentPatch::from_json(value).unwrap()
    }

    #[test]
    fn test_mutation_serialization() {
        let mutation = Mutation::Move {
            active_id: ComponentId::from("a"),
            over_id: ComponentId::from("b"),
        };

        let json = serde_json::to_value(&mutation).unwrap();
        assert_eq!(json, json!({ "kind": "move", "activeId": "a", "overId": "b" }));

        let deserialized: Mutation = serde_json::from_value(json).unwrap();
        assert_eq!(mutation, deserialized);
    }

    #[test]
    fn test_insert_at_index_reindexes() {
        let mut f = Fixture::new(vec![text("a", None, 0), text("b", None, 5)]);

        let outcome = f
            .apply(Mutation::Insert {
                component_type: "spacer".to_string(),
                parent_id: None,
                index: Some(1),
            })
            .unwrap();

        let new_id = outcome.created().unwrap().id.to_string();
        assert_eq!(f.order_of(None), vec!["a".to_string(), new_id, "b".to_string()]);
        let orders: Vec<i64> = f.doc.tree().roots().iter().map(|c| c.order).collect();
        assert_eq!(orders, vec![0, 1, 2]);
    }

    #[test]
    fn test_insert_index_is_clamped() {
        let mut f = Fixture::new(vec![text("a", None, 0)]);

        f.apply(Mutation::Insert {
            component_type: "text".to_string(),
            parent_id: None,
            index: Some(99),
        })
        .unwrap();

        assert_eq!(f.order_of(None)[0], "a");
    }

    #[test]
    fn test_insert_into_non_container() {
        let mut f = Fixture::new(vec![text("a", None, 0)]);
        let before = f.doc.clone();

        let err = f
            .apply(Mutation::Insert {
                component_type: "text".to_string(),
                parent_id: Some(ComponentId::from("a")),
                index: None,
            })
            .unwrap_err();

        assert!(matches!(err, MutationError::InvalidParent { .. }));
        assert_eq!(f.doc, before);
    }

    #[test]
    fn test_insert_unknown_type() {
        let mut f = Fixture::new(vec![]);
        let err = f
            .apply(Mutation::Insert {
                component_type: "carousel".to_string(),
                parent_id: None,
                index: None,
            })
            .unwrap_err();

        assert_eq!(
            err,
            MutationError::Registry(RegistryError::NotRegistered("carousel".to_string()))
        );
        assert!(f.doc.is_empty());
    }

    #[test]
    fn test_insert_skips_taken_ids() {
        let mut f = Fixture::new(vec![text("n-1", None, 0)]);

        let outcome = f
            .apply(Mutation::Insert {
                component_type: "text".to_string(),
                parent_id: None,
                index: None,
            })
            .unwrap();

        assert_eq!(outcome.created().unwrap().id.as_str(), "n-2");
    }

    #[test]
    fn test_update_merges_properties() {
        let mut f = Fixture::new(vec![text("a", None, 0)]);

        let outcome = f
            .apply(Mutation::Update {
                id: ComponentId::from("a"),
                patch: patch(json!({ "properties": { "content": "Hi", "id": "evil", "type": "spacer" } })),
            })
            .unwrap();

        let MutationOutcome::Updated(component) = outcome else {
            panic!("Expected update outcome");
        };
        assert_eq!(component.id.as_str(), "a");
        assert_eq!(component.type_name(), "text");
        match component.kind() {
            ComponentKind::Text(props) => {
                assert_eq!(props.content, "Hi");
                assert_eq!(props.font_size, 16);
            }
            other => panic!("Expected text, got {:?}", other),
        }
    }

    #[test]
    fn test_update_rejects_out_of_range() {
        let mut f = Fixture::new(vec![text("a", None, 0)]);
        let before = f.doc.clone();

        let err = f
            .apply(Mutation::Update {
                id: ComponentId::from("a"),
                patch: patch(json!({
                    "properties": { "content": "Changed" },
                    "styles": { "shadow": { "enabled": true, "opacity": 2.0 } }
                })),
            })
            .unwrap_err();

        match err {
            MutationError::Schema(schema) => assert_eq!(schema.field(), "styles.shadow.opacity"),
            other => panic!("Expected schema error, got {:?}", other),
        }
        assert_eq!(f.doc, before);
    }

    #[test]
    fn test_update_styles() {
        let mut f = Fixture::new(vec![text("a", None, 0)]);

        f.apply(Mutation::Update {
            id: ComponentId::from("a"),
            patch: patch(json!({ "styles": { "backgroundColor": "#fafafa", "padding": { "top": 8 } } })),
        })
        .unwrap();

        let styles = &f.doc.get("a").unwrap().styles;
        assert_eq!(styles.background_color.as_deref(), Some("#fafafa"));
        assert_eq!(styles.padding.top, 8);
        assert_eq!(styles.padding.left, 0);
    }

    #[test]
    fn test_update_missing() {
        let mut f = Fixture::new(vec![]);
        let err = f
            .apply(Mutation::Update {
                id: ComponentId::from("ghost"),
                patch: ComponentPatch::default(),
            })
            .unwrap_err();

        assert_eq!(err, MutationError::NotFound(ComponentId::from("ghost")));
    }

    #[test]
    fn test_remove_cascades() {
        let mut f = Fixture::new(vec![
            container("outer", None, 0),
            container("inner", Some("outer"), 0),
            text("leaf", Some("inner"), 0),
            text("other", None, 1),
        ]);

        let outcome = f.apply(Mutation::Remove { id: ComponentId::from("outer") }).unwrap();

        assert_eq!(
            outcome,
            MutationOutcome::Removed(vec![
                ComponentId::from("outer"),
                ComponentId::from("inner"),
                ComponentId::from("leaf"),
            ])
        );
        assert_eq!(f.doc.len(), 1);
        assert!(f.doc.check_integrity().is_empty());
    }

    #[test]
    fn test_remove_in_unrepaired_cycle_lists_each_id_once() {
        let mut f = Fixture::new(vec![
            container("a", Some("b"), 0),
            container("b", Some("a"), 0),
            text("other", None, 0),
        ]);

        let outcome = f.apply(Mutation::Remove { id: ComponentId::from("a") }).unwrap();

        assert_eq!(
            outcome,
            MutationOutcome::Removed(vec![ComponentId::from("a"), ComponentId::from("b")])
        );
        assert_eq!(f.doc.len(), 1);
    }

    #[test]
    fn test_remove_is_idempotent() {
        let mut f = Fixture::new(vec![text("a", None, 0)]);

        assert!(f.apply(Mutation::Remove { id: ComponentId::from("a") }).unwrap().changed());
        let again = f.apply(Mutation::Remove { id: ComponentId::from("a") }).unwrap();
        assert!(!again.changed());
        assert!(f.doc.is_empty());
    }

    #[test]
    fn test_duplicate_is_shallow_and_shifts() {
        let mut f = Fixture::new(vec![
            container("box", None, 0),
            text("child", Some("box"), 0),
            text("after", None, 1),
        ]);

        let outcome = f.apply(Mutation::Duplicate { id: ComponentId::from("box") }).unwrap();
        let copy = outcome.created().unwrap().clone();

        assert_eq!(copy.order, 1);
        assert!(copy.parent_id.is_none());
        assert_eq!(f.doc.get("after").unwrap().order, 2);
        assert!(f.doc.tree().children(copy.id.as_str()).is_empty());
        assert_eq!(f.doc.len(), 4);
    }

    #[test]
    fn test_move_reorders_siblings() {
        let mut f = Fixture::new(vec![
            text("a", None, 0),
            text("b", None, 1),
            text("c", None, 2),
        ]);

        f.apply(Mutation::Move {
            active_id: ComponentId::from("a"),
            over_id: ComponentId::from("c"),
        })
        .unwrap();
        assert_eq!(f.order_of(None), vec!["b", "c", "a"]);

        f.apply(Mutation::Move {
            active_id: ComponentId::from("a"),
            over_id: ComponentId::from("b"),
        })
        .unwrap();
        assert_eq!(f.order_of(None), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_move_missing_over_leaves_document() {
        let mut f = Fixture::new(vec![text("a", None, 0), text("b", None, 1)]);
        let before = f.doc.clone();

        let err = f
            .apply(Mutation::Move {
                active_id: ComponentId::from("a"),
                over_id: ComponentId::from("zzz"),
            })
            .unwrap_err();

        assert_eq!(err, MutationError::NotFound(ComponentId::from("zzz")));
        assert_eq!(f.doc, before);
    }

    #[test]
    fn test_move_across_parents_rejected() {
        let mut f = Fixture::new(vec![
            container("box", None, 0),
            text("inside", Some("box"), 0),
            text("outside", None, 1),
        ]);

        let err = f
            .apply(Mutation::Move {
                active_id: ComponentId::from("outside"),
                over_id: ComponentId::from("inside"),
            })
            .unwrap_err();

        assert!(matches!(err, MutationError::NotSiblings { .. }));
    }

    #[test]
    fn test_reparent_into_container() {
        let mut f = Fixture::new(vec![
            text("a", None, 0),
            container("box", None, 1),
            text("b", None, 2),
            text("inside", Some("box"), 0),
        ]);

        f.apply(Mutation::Reparent {
            id: ComponentId::from("b"),
            new_parent_id: Some(ComponentId::from("box")),
            index: Some(0),
        })
        .unwrap();

        assert_eq!(f.order_of(Some("box")), vec!["b", "inside"]);
        assert_eq!(f.order_of(None), vec!["a", "box"]);
        assert_eq!(f.doc.get("box").unwrap().order, 1);
    }

    #[test]
    fn test_reparent_into_descendant_rejected() {
        let mut f = Fixture::new(vec![
            container("outer", None, 0),
            container("inner", Some("outer"), 0),
        ]);
        let before = f.doc.clone();

        let err = f
            .apply(Mutation::Reparent {
                id: ComponentId::from("outer"),
                new_parent_id: Some(ComponentId::from("inner")),
                index: None,
            })
            .unwrap_err();

        assert!(matches!(err, MutationError::CycleDetected { .. }));
        assert_eq!(f.doc, before);

        let err = f
            .apply(Mutation::Reparent {
                id: ComponentId::from("outer"),
                new_parent_id: Some(ComponentId::from("outer")),
                index: None,
            })
            .unwrap_err();
        assert!(matches!(err, MutationError::CycleDetected { .. }));
    }

    #[test]
    fn test_reparent_to_root() {
        let mut f = Fixture::new(vec![
            container("box", None, 0),
            Component::new(ComponentId::from("gap"), SpacerProperties::default_kind())
                .with_parent(Some(ComponentId::from("box"))),
        ]);

        f.apply(Mutation::Reparent {
            id: ComponentId::from("gap"),
            new_parent_id: None,
            index: None,
        })
        .unwrap();

        assert_eq!(f.order_of(None), vec!["box", "gap"]);
        assert!(f.doc.tree().children("box").is_empty());
    }
}

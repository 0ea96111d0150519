//! # Page Document
//!
//! The single unit of persistence and of undo/redo.
//!
//! ```text
//! JSON blob → from_json → Document → (edit) → to_json → JSON blob
//!               ↓
//!        schema + duplicate-id checks
//! ```
//!
//! Structural problems a stored blob may carry (dangling parents, parents
//! that are not containers, cycles) are reported by [`Document::check_integrity`]
//! and fixed by [`Document::repair`], which re-roots the offending components.

use crate::component::{Component, ComponentId};
use crate::tree::TreeView;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;
use tracing::{debug, warn};

/// Version literal written to every document
pub const DOCUMENT_VERSION: &str = "1.0";

#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("Invalid document JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Duplicate component id: {0}")]
    DuplicateId(ComponentId),
}

/// A structural problem in the component list
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IntegrityViolation {
    #[error("component id {0} is used more than once")]
    DuplicateId(ComponentId),

    #[error("component {id} references missing parent {parent_id}")]
    DanglingParent { id: ComponentId, parent_id: ComponentId },

    #[error("component {id} has non-container parent {parent_id}")]
    NonContainerParent { id: ComponentId, parent_id: ComponentId },

    #[error("component {id} is its own ancestor")]
    Cycle { id: ComponentId },
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    #[serde(default = "default_version")]
    pub version: String,
    #[serde(default)]
    pub components: Vec<Component>,
    #[serde(default)]
    pub metadata: Metadata,
}

fn default_version() -> String {
    DOCUMENT_VERSION.to_string()
}

impl Document {
    pub fn new() -> Self {
        Self::with_components(Vec::new())
    }

    pub fn with_components(components: Vec<Component>) -> Self {
        Self {
            version: default_version(),
            components,
            metadata: Metadata::default(),
        }
    }

    /// Parse the persisted JSON shape
    ///
    /// Every component is schema-checked while decoding. Duplicate ids are
    /// rejected since no repair can tell the components apart.
    pub fn from_json(json: &str) -> Result<Self, DocumentError> {
        let document: Document = serde_json::from_str(json)?;

        let mut seen = HashSet::with_capacity(document.components.len());
        for component in &document.components {
            if !seen.insert(component.id.as_str()) {
                return Err(DocumentError::DuplicateId(component.id.clone()));
            }
        }

        debug!(
            components = document.components.len(),
            version = %document.version,
            "Parsed document"
        );
        Ok(document)
    }

    pub fn to_json(&self) -> Result<String, DocumentError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> Result<String, DocumentError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Component> {
        self.components.iter().find(|c| c.id.as_str() == id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Component> {
        self.components.iter_mut().find(|c| c.id.as_str() == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Index of the component in the flat list
    pub fn position(&self, id: &str) -> Option<usize> {
        self.components.iter().position(|c| c.id.as_str() == id)
    }

    pub fn tree(&self) -> TreeView<'_> {
        TreeView::build(&self.components)
    }

    /// Ids of the siblings under `parent`, in render order
    pub fn sibling_ids(&self, parent: Option<&str>) -> Vec<ComponentId> {
        self.tree()
            .siblings(parent)
            .iter()
            .map(|c| c.id.clone())
            .collect()
    }

    /// Ids of every transitive child of `id`
    pub fn descendant_ids(&self, id: &str) -> Vec<ComponentId> {
        self.tree()
            .descendants(id)
            .into_iter()
            .map(|c| c.id.clone())
            .collect()
    }

    /// Whether `ancestor` appears on the parent chain of `id`
    pub fn is_ancestor(&self, ancestor: &str, id: &str) -> bool {
        let mut visited = HashSet::new();
        let mut current = self.get(id).and_then(|c| c.parent_id.as_ref());

        while let Some(parent) = current {
            if parent.as_str() == ancestor {
                return true;
            }
            if !visited.insert(parent.as_str()) {
                return false;
            }
            current = self.get(parent.as_str()).and_then(|c| c.parent_id.as_ref());
        }

        false
    }

    /// Whether parenting `node_id` under `new_parent_id` would close a loop
    pub fn would_create_cycle(&self, node_id: &str, new_parent_id: &str) -> bool {
        node_id == new_parent_id || self.is_ancestor(node_id, new_parent_id)
    }

    /// Stamp `metadata.last_modified` with the current time
    pub fn touch(&mut self) {
        self.metadata.last_modified = Some(Utc::now());
    }

    /// Report every structural problem without changing anything
    pub fn check_integrity(&self) -> Vec<IntegrityViolation> {
        let mut violations = Vec::new();

        let mut seen = HashSet::new();
        for component in &self.components {
            if !seen.insert(component.id.as_str()) {
                violations.push(IntegrityViolation::DuplicateId(component.id.clone()));
            }
        }

        for component in &self.components {
            if let Some(violation) = self.parent_violation(component) {
                violations.push(violation);
            }
        }

        for component in &self.components {
            if self.is_ancestor(component.id.as_str(), component.id.as_str()) {
                violations.push(IntegrityViolation::Cycle {
                    id: component.id.clone(),
                });
            }
        }

        violations
    }

    /// Re-root components with invalid parents and break cycles
    ///
    /// Returns what was changed. Duplicate ids are reported but left alone.
    pub fn repair(&mut self) -> Vec<IntegrityViolation> {
        let mut fixed = Vec::new();

        for index in 0..self.components.len() {
            if let Some(violation) = self.parent_violation(&self.components[index]) {
                warn!(%violation, "Re-rooting component");
                self.components[index].parent_id = None;
                fixed.push(violation);
            }
        }

        for index in 0..self.components.len() {
            let id = self.components[index].id.clone();
            if self.is_ancestor(id.as_str(), id.as_str()) {
                warn!(component_id = %id, "Breaking parent cycle");
                self.components[index].parent_id = None;
                fixed.push(IntegrityViolation::Cycle { id });
            }
        }

        let mut seen = HashSet::new();
        for component in &self.components {
            if !seen.insert(component.id.as_str()) {
                warn!(component_id = %component.id, "Duplicate component id left in place");
                fixed.push(IntegrityViolation::DuplicateId(component.id.clone()));
            }
        }

        fixed
    }

    fn parent_violation(&self, component: &Component) -> Option<IntegrityViolation> {
        let parent_id = component.parent_id.as_ref()?;
        match self.get(parent_id.as_str()) {
            None => Some(IntegrityViolation::DanglingParent {
                id: component.id.clone(),
                parent_id: parent_id.clone(),
            }),
            Some(parent) if !parent.is_container() => Some(IntegrityViolation::NonContainerParent {
                id: component.id.clone(),
                parent_id: parent_id.clone(),
            }),
            Some(_) => None,
        }
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

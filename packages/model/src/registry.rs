//! # Component Registry
//!
//! Maps a type tag to its palette entry, property fields and factory.
//!
//! The registry is an ordinary value: build one with [`Registry::builtin`]
//! (or [`Registry::new`] plus [`Registry::register`]) and hand it to whoever
//! needs it. Two builders never share registrations.

use crate::component::{Component, ComponentKind, ComponentType};
use crate::id_generator::IdGenerator;
use crate::properties::*;
use crate::schema::{FieldSpec, PropertySchema};
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Component type not registered: {0}")]
    NotRegistered(String),
}

/// Palette grouping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Layout,
    Basic,
    Media,
    Marketing,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Layout,
        Category::Basic,
        Category::Media,
        Category::Marketing,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Layout => "Layout",
            Category::Basic => "Basic",
            Category::Media => "Media",
            Category::Marketing => "Marketing",
        }
    }
}

/// Everything the builder knows about one component type
#[derive(Debug, Clone, Serialize)]
pub struct ComponentDefinition {
    #[serde(rename = "type")]
    pub component_type: ComponentType,
    pub label: String,
    pub icon: String,
    pub category: Category,
    pub description: String,
    pub fields: Vec<FieldSpec>,
    #[serde(skip)]
    factory: fn() -> ComponentKind,
}

impl ComponentDefinition {
    /// Definition whose factory yields `P::default()`
    pub fn of<P: PropertySchema>(
        label: impl Into<String>,
        icon: impl Into<String>,
        category: Category,
        description: impl Into<String>,
    ) -> Self {
        Self {
            component_type: P::TYPE,
            label: label.into(),
            icon: icon.into(),
            category,
            description: description.into(),
            fields: P::fields(),
            factory: P::default_kind,
        }
    }

    /// Replace the default-instance factory
    pub fn with_factory(mut self, factory: fn() -> ComponentKind) -> Self {
        self.factory = factory;
        self
    }

    pub fn default_kind(&self) -> ComponentKind {
        (self.factory)()
    }

    fn matches(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.label.to_lowercase().contains(&query)
            || self.component_type.as_str().contains(&query)
            || self.description.to_lowercase().contains(&query)
    }
}

#[derive(Debug, Clone, Default)]
pub struct Registry {
    definitions: Vec<ComponentDefinition>,
}

impl Registry {
    /// Empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the seven built-in component types
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.register(ComponentDefinition::of::<ContainerProperties>(
            "Container",
            "layout",
            Category::Layout,
            "Groups other components in a row, column or grid",
        ));
        registry.register(ComponentDefinition::of::<SpacerProperties>(
            "Spacer",
            "move-vertical",
            Category::Layout,
            "Adds vertical whitespace",
        ));
        registry.register(ComponentDefinition::of::<TextProperties>(
            "Text",
            "type",
            Category::Basic,
            "Paragraphs and headings",
        ));
        registry.register(ComponentDefinition::of::<ButtonProperties>(
            "Button",
            "mouse-pointer",
            Category::Basic,
            "Call to action linking to a page",
        ));
        registry.register(ComponentDefinition::of::<ImageProperties>(
            "Image",
            "image",
            Category::Media,
            "A single picture",
        ));
        registry.register(ComponentDefinition::of::<HeroProperties>(
            "Hero",
            "star",
            Category::Marketing,
            "Full-width banner with title and call to action",
        ));
        registry.register(ComponentDefinition::of::<CardProperties>(
            "Card",
            "credit-card",
            Category::Marketing,
            "Image, title, description and button in a box",
        ));
        registry
    }

    /// Add a definition, replacing any existing one for the same type
    pub fn register(&mut self, definition: ComponentDefinition) {
        match self
            .definitions
            .iter_mut()
            .find(|d| d.component_type == definition.component_type)
        {
            Some(existing) => *existing = definition,
            None => self.definitions.push(definition),
        }
    }

    pub fn get(&self, component_type: ComponentType) -> Option<&ComponentDefinition> {
        self.definitions
            .iter()
            .find(|d| d.component_type == component_type)
    }

    /// Look up a definition by its type tag
    pub fn lookup(&self, type_tag: &str) -> Result<&ComponentDefinition, RegistryError> {
        type_tag
            .parse::<ComponentType>()
            .ok()
            .and_then(|t| self.get(t))
            .ok_or_else(|| RegistryError::NotRegistered(type_tag.to_string()))
    }

    pub fn is_registered(&self, type_tag: &str) -> bool {
        self.lookup(type_tag).is_ok()
    }

    /// Build a fully populated default component with a fresh id
    pub fn create(&self, type_tag: &str, ids: &mut IdGenerator) -> Result<Component, RegistryError> {
        let definition = self.lookup(type_tag)?;
        let component = Component::new(ids.new_id(), definition.default_kind());

        debug!(component_id = %component.id, component_type = type_tag, "Created component");
        Ok(component)
    }

    /// Definitions in registration order (the plain palette grid)
    pub fn palette(&self) -> &[ComponentDefinition] {
        &self.definitions
    }

    /// Case-insensitive match on label, type tag and description
    pub fn search(&self, query: &str) -> Vec<&ComponentDefinition> {
        let query = query.trim();
        self.definitions
            .iter()
            .filter(|d| query.is_empty() || d.matches(query))
            .collect()
    }

    /// Non-empty categories, each with its definitions in registration order
    pub fn by_category(&self) -> Vec<(Category, Vec<&ComponentDefinition>)> {
        Category::ALL
            .into_iter()
            .map(|category| {
                let members = self
                    .definitions
                    .iter()
                    .filter(|d| d.category == category)
                    .collect::<Vec<_>>();
                (category, members)
            })
            .filter(|(_, members)| !members.is_empty())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

//! # Components
//!
//! The atomic unit of a page. A component is a node in a flat list; the
//! tree is implied by `parent_id` back-references and sibling `order`.
//!
//! ## Persisted shape
//!
//! ```json
//! {
//!   "id": "a1b2c3d4-1",
//!   "type": "button",
//!   "order": 0,
//!   "parentId": "a1b2c3d4-0",
//!   "properties": { "text": "Buy", "link": { "url": "/cart" } },
//!   "styles": { "padding": { "top": 8 } }
//! }
//! ```
//!
//! Unrecognized `type` tags survive as [`ComponentKind::Unknown`] so a page
//! saved by a newer builder can still be opened, rendered and saved back.

use crate::properties::*;
use crate::schema::{decode_properties, PropertySchema, SchemaError};
use crate::styles::Styles;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

/// Globally unique component identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComponentId(String);

impl ComponentId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for ComponentId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ComponentId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ComponentId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// The closed set of component type tags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentType {
    Text,
    Image,
    Button,
    Hero,
    Card,
    Container,
    Spacer,
}

impl ComponentType {
    pub const ALL: [ComponentType; 7] = [
        ComponentType::Text,
        ComponentType::Image,
        ComponentType::Button,
        ComponentType::Hero,
        ComponentType::Card,
        ComponentType::Container,
        ComponentType::Spacer,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ComponentType::Text => "text",
            ComponentType::Image => "image",
            ComponentType::Button => "button",
            ComponentType::Hero => "hero",
            ComponentType::Card => "card",
            ComponentType::Container => "container",
            ComponentType::Spacer => "spacer",
        }
    }
}

impl fmt::Display for ComponentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComponentType {
    type Err = String;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        ComponentType::ALL
            .into_iter()
            .find(|t| t.as_str() == tag)
            .ok_or_else(|| tag.to_string())
    }
}

/// Type tag plus the matching property record
#[derive(Debug, Clone, PartialEq)]
pub enum ComponentKind {
    Text(TextProperties),
    Image(ImageProperties),
    Button(ButtonProperties),
    Hero(HeroProperties),
    Card(CardProperties),
    Container(ContainerProperties),
    Spacer(SpacerProperties),
    /// A tag this build does not know; kept verbatim
    Unknown { type_name: String, properties: Value },
}

impl ComponentKind {
    /// Decode and validate `properties` for the given type tag
    pub fn from_parts(type_name: &str, properties: Value) -> Result<Self, SchemaError> {
        let Ok(component_type) = type_name.parse::<ComponentType>() else {
            return Ok(ComponentKind::Unknown {
                type_name: type_name.to_string(),
                properties,
            });
        };

        Ok(match component_type {
            ComponentType::Text => decode_properties::<TextProperties>(properties)?.into_kind(),
            ComponentType::Image => decode_properties::<ImageProperties>(properties)?.into_kind(),
            ComponentType::Button => decode_properties::<ButtonProperties>(properties)?.into_kind(),
            ComponentType::Hero => decode_properties::<HeroProperties>(properties)?.into_kind(),
            ComponentType::Card => decode_properties::<CardProperties>(properties)?.into_kind(),
            ComponentType::Container => {
                decode_properties::<ContainerProperties>(properties)?.into_kind()
            }
            ComponentType::Spacer => decode_properties::<SpacerProperties>(properties)?.into_kind(),
        })
    }

    pub fn type_name(&self) -> &str {
        match self.component_type() {
            Some(t) => t.as_str(),
            None => match self {
                ComponentKind::Unknown { type_name, .. } => type_name,
                _ => "",
            },
        }
    }

    /// `None` for unknown tags
    pub fn component_type(&self) -> Option<ComponentType> {
        match self {
            ComponentKind::Text(_) => Some(ComponentType::Text),
            ComponentKind::Image(_) => Some(ComponentType::Image),
            ComponentKind::Button(_) => Some(ComponentType::Button),
            ComponentKind::Hero(_) => Some(ComponentType::Hero),
            ComponentKind::Card(_) => Some(ComponentType::Card),
            ComponentKind::Container(_) => Some(ComponentType::Container),
            ComponentKind::Spacer(_) => Some(ComponentType::Spacer),
            ComponentKind::Unknown { .. } => None,
        }
    }

    pub fn is_container(&self) -> bool {
        matches!(self, ComponentKind::Container(_))
    }

    /// Properties in their persisted JSON form
    pub fn properties_json(&self) -> Value {
        let value = match self {
            ComponentKind::Text(p) => serde_json::to_value(p),
            ComponentKind::Image(p) => serde_json::to_value(p),
            ComponentKind::Button(p) => serde_json::to_value(p),
            ComponentKind::Hero(p) => serde_json::to_value(p),
            ComponentKind::Card(p) => serde_json::to_value(p),
            ComponentKind::Container(p) => serde_json::to_value(p),
            ComponentKind::Spacer(p) => serde_json::to_value(p),
            ComponentKind::Unknown { properties, .. } => return properties.clone(),
        };
        value.unwrap_or(Value::Null)
    }

    pub fn validate(&self) -> Result<(), SchemaError> {
        match self {
            ComponentKind::Text(p) => p.validate(),
            ComponentKind::Image(p) => p.validate(),
            ComponentKind::Button(p) => p.validate(),
            ComponentKind::Hero(p) => p.validate(),
            ComponentKind::Card(p) => p.validate(),
            ComponentKind::Container(p) => p.validate(),
            ComponentKind::Spacer(p) => p.validate(),
            ComponentKind::Unknown { .. } => Ok(()),
        }
    }
}

/// A page component
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawComponent", into = "RawComponent")]
pub struct Component {
    pub id: ComponentId,
    pub order: i64,
    pub parent_id: Option<ComponentId>,
    pub styles: Styles,
    kind: ComponentKind,
}

impl Component {
    pub fn new(id: ComponentId, kind: ComponentKind) -> Self {
        Self {
            id,
            order: 0,
            parent_id: None,
            styles: Styles::default(),
            kind,
        }
    }

    pub fn with_parent(mut self, parent_id: Option<ComponentId>) -> Self {
        self.parent_id = parent_id;
        self
    }

    pub fn with_order(mut self, order: i64) -> Self {
        self.order = order;
        self
    }

    pub fn with_styles(mut self, styles: Styles) -> Self {
        self.styles = styles;
        self
    }

    pub fn kind(&self) -> &ComponentKind {
        &self.kind
    }

    pub fn type_name(&self) -> &str {
        self.kind.type_name()
    }

    pub fn is_container(&self) -> bool {
        self.kind.is_container()
    }

    /// Swap in new properties of the same type
    ///
    /// The type tag is fixed for a component's lifetime; a record of another
    /// type is rejected and the component is left untouched.
    pub fn replace_properties(&mut self, kind: ComponentKind) -> Result<(), SchemaError> {
        if kind.type_name() != self.kind.type_name() {
            return Err(SchemaError::InvalidValue {
                field: "type".to_string(),
                reason: format!(
                    "cannot change type from {} to {}",
                    self.kind.type_name(),
                    kind.type_name()
                ),
            });
        }
        kind.validate()?;
        self.kind = kind;
        Ok(())
    }

    /// Validate properties and styles
    pub fn validate(&self) -> Result<(), SchemaError> {
        self.kind
            .validate()
            .and_then(|_| self.styles.validate())
            .map_err(|e| e.in_component(self.id.as_str()))
    }
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawComponent {
    id: ComponentId,
    #[serde(rename = "type")]
    type_name: String,
    #[serde(default)]
    order: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    parent_id: Option<ComponentId>,
    #[serde(default = "empty_object")]
    properties: Value,
    #[serde(default)]
    styles: Value,
}

fn empty_object() -> Value {
    Value::Object(Default::default())
}

impl TryFrom<RawComponent> for Component {
    type Error = SchemaError;

    fn try_from(raw: RawComponent) -> Result<Self, Self::Error> {
        let id = raw.id;
        let kind = ComponentKind::from_parts(&raw.type_name, raw.properties)
            .map_err(|e| e.in_component(id.as_str()))?;

        let styles: Styles = match raw.styles {
            Value::Null => Styles::default(),
            value => serde_json::from_value(value).map_err(|e| {
                SchemaError::InvalidValue {
                    field: "styles".to_string(),
                    reason: e.to_string(),
                }
                .in_component(id.as_str())
            })?,
        };
        styles.validate().map_err(|e| e.in_component(id.as_str()))?;

        Ok(Component {
            id,
            order: raw.order,
            parent_id: raw.parent_id,
            styles,
            kind,
        })
    }
}

impl From<Component> for RawComponent {
    fn from(component: Component) -> Self {
        RawComponent {
            type_name: component.kind.type_name().to_string(),
            properties: component.kind.properties_json(),
            styles: serde_json::to_value(&component.styles).unwrap_or(Value::Null),
            id: component.id,
            order: component.order,
            parent_id: component.parent_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_component_type_tags_round_trip() {
        for t in ComponentType::ALL {
            assert_eq!(t.as_str().parse::<ComponentType>(), Ok(t));
        }
        assert_eq!("carousel".parse::<ComponentType>(), Err("carousel".to_string()));
    }

    #[test]
    fn test_deserialize_known_component() {
        let component: Component = serde_json::from_value(json!({
            "id": "b-1",
            "type": "button",
            "order": 2,
            "properties": { "text": "Buy", "link": { "url": "/cart" } }
        }))
        .unwrap();

        assert_eq!(component.id.as_str(), "b-1");
        assert_eq!(component.order, 2);
        assert!(component.parent_id.is_none());
        match component.kind() {
            ComponentKind::Button(button) => {
                assert_eq!(button.text, "Buy");
                assert_eq!(button.link.url, "/cart");
                assert_eq!(button.variant, ButtonVariant::Primary);
            }
            other => panic!("Expected button, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_type_is_preserved() {
        let raw = json!({
            "id": "x-1",
            "type": "carousel",
            "order": 0,
            "properties": { "slides": [1, 2, 3] }
        });

        let component: Component = serde_json::from_value(raw).unwrap();
        assert_eq!(component.type_name(), "carousel");
        assert!(component.kind().component_type().is_none());

        let back = serde_json::to_value(&component).unwrap();
        assert_eq!(back["type"], "carousel");
        assert_eq!(back["properties"]["slides"], json!([1, 2, 3]));
    }

    #[test]
    fn test_invalid_styles_name_the_component() {
        let err = serde_json::from_value::<Component>(json!({
            "id": "s-1",
            "type": "spacer",
            "properties": { "height": 10 },
            "styles": { "shadow": { "opacity": 3.0 } }
        }))
        .unwrap_err();

        let message = err.to_string();
        assert!(message.contains("s-1"), "{}", message);
        assert!(message.contains("styles.shadow.opacity"), "{}", message);
    }

    #[test]
    fn test_replace_properties_keeps_type() {
        let mut component = Component::new(ComponentId::from("t-1"), TextProperties::default_kind());

        let err = component
            .replace_properties(SpacerProperties::default_kind())
            .unwrap_err();
        assert_eq!(err.field(), "type");
        assert_eq!(component.type_name(), "text");

        let updated = TextProperties {
            content: "Hello".to_string(),
            ..TextProperties::default()
        };
        component.replace_properties(updated.into_kind()).unwrap();
        match component.kind() {
            ComponentKind::Text(text) => assert_eq!(text.content, "Hello"),
            other => panic!("Expected text, got {:?}", other),
        }
    }

    #[test]
    fn test_parent_id_skipped_when_root() {
        let component = Component::new(ComponentId::from("s-1"), SpacerProperties::default_kind());
        let value = serde_json::to_value(&component).unwrap();

        assert!(value.get("parentId").is_none());
        assert_eq!(value["type"], "spacer");
        assert_eq!(value["properties"]["height"], 40);
    }
}

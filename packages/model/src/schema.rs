//! Property schemas and validation.
//!
//! Shapes are checked by the type system; this module covers what types
//! cannot: required keys in untrusted JSON, and numeric ranges.

use crate::component::{ComponentKind, ComponentType};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SchemaError {
    #[error("{field}: required field is missing")]
    MissingField { field: String },

    #[error("{field}: {value} is outside the allowed range {min}..={max}")]
    OutOfRange {
        field: String,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("{field}: {reason}")]
    InvalidValue { field: String, reason: String },

    #[error("{0}: expected a JSON object")]
    NotAnObject(String),

    #[error("component {id}: {error}")]
    InComponent { id: String, error: Box<SchemaError> },
}

impl SchemaError {
    pub fn in_component(self, id: impl Into<String>) -> Self {
        SchemaError::InComponent {
            id: id.into(),
            error: Box::new(self),
        }
    }

    /// Path of the offending field, e.g. `styles.shadow.opacity`
    pub fn field(&self) -> &str {
        match self {
            SchemaError::MissingField { field }
            | SchemaError::OutOfRange { field, .. }
            | SchemaError::InvalidValue { field, .. }
            | SchemaError::NotAnObject(field) => field,
            SchemaError::InComponent { error, .. } => error.field(),
        }
    }
}

/// Check `value` is within `min..=max` (NaN is always out of range)
pub fn check_range<T: Into<f64>>(field: &str, value: T, min: T, max: T) -> Result<(), SchemaError> {
    let (value, min, max) = (value.into(), min.into(), max.into());
    if value.is_nan() || value < min || value > max {
        return Err(SchemaError::OutOfRange {
            field: field.to_string(),
            value,
            min,
            max,
        });
    }
    Ok(())
}

/// How the properties panel edits a field
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum FieldKind {
    Text,
    TextArea,
    Url,
    Color,
    Number { min: f64, max: f64 },
    Select { options: &'static [&'static str] },
    Toggle,
    Link,
}

/// Descriptor for one property field (JSON key, label, editor kind)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

impl FieldSpec {
    pub fn required(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            label,
            kind,
            required: true,
        }
    }

    pub fn optional(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            label,
            kind,
            required: false,
        }
    }
}

/// Typed property record for one component type
pub trait PropertySchema: Sized + Default + Serialize + DeserializeOwned {
    const TYPE: ComponentType;

    /// Field descriptors, in panel order
    fn fields() -> Vec<FieldSpec>;

    /// Range checks the type system cannot express
    fn validate(&self) -> Result<(), SchemaError>;

    fn into_kind(self) -> ComponentKind;

    fn default_kind() -> ComponentKind {
        Self::default().into_kind()
    }
}

/// Decode untrusted JSON into a validated property record
pub fn decode_properties<P: PropertySchema>(value: Value) -> Result<P, SchemaError> {
    let object = value
        .as_object()
        .ok_or_else(|| SchemaError::NotAnObject("properties".to_string()))?;

    for field in P::fields().iter().filter(|f| f.required) {
        if !object.contains_key(field.name) {
            return Err(SchemaError::MissingField {
                field: format!("properties.{}", field.name),
            });
        }
    }

    let properties: P = serde_json::from_value(value).map_err(|e| SchemaError::InvalidValue {
        field: "properties".to_string(),
        reason: e.to_string(),
    })?;

    properties.validate()?;
    Ok(properties)
}

//! Error types for the editor

use crate::autosave::SaveError;
use crate::config::ConfigError;
use crate::mutations::MutationError;
use pagecraft_model::{DocumentError, RegistryError, SchemaError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EditorError {
    #[error("Mutation error: {0}")]
    Mutation(#[from] MutationError),

    #[error("Document error: {0}")]
    Document(#[from] DocumentError),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Save error: {0}")]
    Save(#[from] SaveError),

    #[error("No save handler configured")]
    NoSaveHandler,
}

impl From<SchemaError> for EditorError {
    fn from(e: SchemaError) -> Self {
        EditorError::Mutation(MutationError::Schema(e))
    }
}

impl From<RegistryError> for EditorError {
    fn from(e: RegistryError) -> Self {
        EditorError::Mutation(MutationError::Registry(e))
    }
}

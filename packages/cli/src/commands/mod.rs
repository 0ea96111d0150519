pub mod init;
pub mod palette;
pub mod render;
pub mod validate;

pub use init::{init, InitArgs};
pub use palette::{palette, PaletteArgs};
pub use render::{render, RenderArgs};
pub use validate::{validate, ValidateArgs};

use anyhow::{Context, Result};
use pagecraft_model::Document;
use std::path::Path;

/// Read and schema-check a stored document
pub(crate) fn load_document(path: &Path) -> Result<Document> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Cannot read {}", path.display()))?;
    Document::from_json(&json).with_context(|| format!("Invalid document {}", path.display()))
}

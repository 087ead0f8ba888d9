//! JSON import and export of inventory, forces and lance templates.
//!
//! Each exchange service works on typed documents from [`crate::model::exchange`] and offers
//! `_json` variants taking or returning the serialized text. Reading and writing files is left
//! to the caller, see [`read_document`] and [`write_document`].

pub mod force;
pub mod miniature;
pub mod template;

use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};
use serde_json::error::Category;

use crate::error::{import::ImportError, Error};

/// Parses an import document
///
/// Text that is not JSON at all is reported as malformed, JSON of the wrong shape as an
/// invalid document.
pub fn parse_document<T: DeserializeOwned>(json: &str) -> Result<T, Error> {
    serde_json::from_str(json).map_err(|err| match err.classify() {
        Category::Data => ImportError::InvalidDocument(err.to_string()).into(),
        Category::Io | Category::Syntax | Category::Eof => ImportError::MalformedJson(err).into(),
    })
}

/// Renders an export document as pretty-printed JSON
pub fn render_document<T: Serialize>(document: &T) -> Result<String, Error> {
    serde_json::to_string_pretty(document).map_err(Error::SerializeError)
}

/// Reads a UTF-8 JSON document from disk
pub async fn read_document(path: impl AsRef<Path>) -> Result<String, Error> {
    Ok(tokio::fs::read_to_string(path).await?)
}

/// Writes a JSON document to disk, creating the parent directory when needed
pub async fn write_document(path: impl AsRef<Path>, json: &str) -> Result<(), Error> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent).await?;
        }
    }
    tokio::fs::write(path, json).await?;

    Ok(())
}

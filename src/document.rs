//! JSON document loading and saving

use anyhow::Result;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Value};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// A template or configuration document: string keys to arbitrary JSON values.
///
/// Backed by serde_json's default map, so keys iterate in lexicographic order.
pub type Document = Map<String, Value>;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed reading {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid JSON object in {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl LoadError {
    /// True when the file simply isn't there.
    pub fn is_not_found(&self) -> bool {
        matches!(self, LoadError::Read { source, .. } if source.kind() == io::ErrorKind::NotFound)
    }
}

/// Read and parse a JSON object from `path`.
pub fn load_document(path: &Path) -> std::result::Result<Document, LoadError> {
    let content = fs::read_to_string(path)
        .map_err(|source| LoadError::Read { path: path.to_path_buf(), source })?;
    serde_json::from_str(&content)
        .map_err(|source| LoadError::Parse { path: path.to_path_buf(), source })
}

/// Like [`load_document`], but a missing or malformed file yields `None`.
pub fn load_document_or_absent(path: &Path) -> Option<Document> {
    match load_document(path) {
        Ok(doc) => Some(doc),
        Err(e) if e.is_not_found() => {
            tracing::debug!("No existing document at {}", path.display());
            None
        }
        Err(e) => {
            tracing::warn!("Ignoring unreadable document: {}", e);
            None
        }
    }
}

/// Pretty-print `doc` with two-space indentation and a trailing newline.
pub fn to_pretty_json(doc: &Document) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"  ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    doc.serialize(&mut ser)?;
    buf.push(b'\n');
    Ok(String::from_utf8(buf)?)
}

/// Overwrite `path` with the pretty-printed document.
pub fn save_document(path: &Path, doc: &Document) -> Result<()> {
    fs::write(path, to_pretty_json(doc)?)?;
    tracing::debug!("Wrote {} keys to {}", doc.len(), path.display());
    Ok(())
}

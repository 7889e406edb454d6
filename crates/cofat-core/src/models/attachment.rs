//! Attachment and edit buffer models

use std::fmt;

use serde::Deserialize;

/// A new file to attach to the item.
#[derive(Clone, PartialEq, Eq)]
pub struct Attachment {
    /// Original file name; the upload keeps it unchanged.
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl Attachment {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
        }
    }
}

impl fmt::Debug for Attachment {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Attachment")
            .field("file_name", &self.file_name)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// An attachment already stored on the item.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AttachmentFile {
    #[serde(rename = "FileName")]
    pub file_name: String,
    /// Concurrency token sent as `IF-MATCH` on delete.
    #[serde(rename = "odata.etag", alias = "@odata.etag", default)]
    pub etag: Option<String>,
}

impl AttachmentFile {
    /// Value for the `IF-MATCH` header; `*` when the listing carried no etag.
    pub fn if_match(&self) -> &str {
        self.etag
            .as_deref()
            .map(str::trim)
            .filter(|etag| !etag.is_empty())
            .unwrap_or("*")
    }
}

/// Draft edits held while the edit session is open.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditBuffer {
    pub title: String,
    pub content: String,
    pub attachment: Option<Attachment>,
}

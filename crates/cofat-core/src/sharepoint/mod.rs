//! SharePoint list item API.
//!
//! `ListItemApi` is the seam between the workflows and the remote list:
//! one method per REST call the workflows make. `SharePointClient` is the
//! `reqwest` implementation.

mod client;

use async_trait::async_trait;

use crate::models::{Attachment, AttachmentFile, FormDigest, ItemFields, ItemTarget};
use crate::Result;

pub use client::SharePointClient;

/// Result of a single attachment delete that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttachmentDeletion {
    Deleted,
    /// The server answered 409; tolerated and logged.
    Conflict,
}

#[async_trait]
pub trait ListItemApi: Send + Sync {
    /// `POST /_api/contextinfo`
    async fn request_digest(&self, web_url: &str) -> Result<FormDigest>;

    /// MERGE the item fields with `IF-MATCH: *`.
    async fn update_item(
        &self,
        target: &ItemTarget,
        digest: &FormDigest,
        fields: &ItemFields,
    ) -> Result<()>;

    /// Current attachments of the item, fetched fresh.
    async fn list_attachments(&self, target: &ItemTarget) -> Result<Vec<AttachmentFile>>;

    /// Delete one attachment keyed by file name and etag.
    ///
    /// A 409 response is `Ok(AttachmentDeletion::Conflict)`; every other
    /// non-success status is an error.
    async fn delete_attachment(
        &self,
        target: &ItemTarget,
        digest: &FormDigest,
        file: &AttachmentFile,
    ) -> Result<AttachmentDeletion>;

    /// Upload a new attachment under its own file name.
    async fn upload_attachment(
        &self,
        target: &ItemTarget,
        digest: &FormDigest,
        attachment: &Attachment,
    ) -> Result<()>;

    /// Delete the item with `IF-MATCH: *`.
    async fn delete_item(&self, target: &ItemTarget, digest: &FormDigest) -> Result<()>;
}

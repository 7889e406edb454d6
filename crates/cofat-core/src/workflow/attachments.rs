//! Attachment replacement: delete every existing attachment, then upload
//! the new one.
//!
//! Attachments are identified by file name, so the old files have to go
//! before a same-named file can be added without the server renaming it.

use futures::future::join_all;

use crate::models::{Attachment, AttachmentFile, FormDigest, ItemTarget};
use crate::sharepoint::{AttachmentDeletion, ListItemApi};
use crate::{Error, Result};

/// What the replacement did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttachmentReport {
    pub deleted: usize,
    /// Deletes answered with 409 and skipped.
    pub conflicts: usize,
    pub uploaded_file_name: String,
}

/// Replace the item's attachments with `attachment`.
///
/// Deletes run concurrently and are all awaited before the upload. A
/// non-conflict delete failure fails the replacement without uploading; an
/// upload failure leaves the item with whatever the deletes left behind.
pub async fn replace_attachments<A>(
    api: &A,
    target: &ItemTarget,
    digest: &FormDigest,
    attachment: &Attachment,
) -> Result<AttachmentReport>
where
    A: ListItemApi + ?Sized,
{
    let existing = api.list_attachments(target).await?;
    tracing::info!(
        "Replacing {} existing attachment(s) on item {}",
        existing.len(),
        target.item_id
    );

    let summary = delete_all(api, target, digest, &existing).await;
    if summary.failed > 0 {
        return Err(Error::AttachmentDeletion {
            failed: summary.failed,
            total: existing.len(),
        });
    }

    api.upload_attachment(target, digest, attachment).await?;
    tracing::info!("Uploaded attachment {}", attachment.file_name);

    Ok(AttachmentReport {
        deleted: summary.deleted,
        conflicts: summary.conflicts,
        uploaded_file_name: attachment.file_name.clone(),
    })
}

#[derive(Debug, Default, PartialEq, Eq)]
struct DeletionSummary {
    deleted: usize,
    conflicts: usize,
    failed: usize,
}

async fn delete_all<A>(
    api: &A,
    target: &ItemTarget,
    digest: &FormDigest,
    files: &[AttachmentFile],
) -> DeletionSummary
where
    A: ListItemApi + ?Sized,
{
    let results = join_all(files.iter().map(|file| async move {
        let result = api.delete_attachment(target, digest, file).await;
        match &result {
            Ok(AttachmentDeletion::Deleted) => {
                tracing::debug!("Deleted attachment {}", file.file_name);
            }
            Ok(AttachmentDeletion::Conflict) => {
                tracing::warn!("Conflict deleting attachment: {}", file.file_name);
            }
            Err(error) => {
                tracing::error!("Error deleting attachment {}: {error}", file.file_name);
            }
        }
        result
    }))
    .await;

    results
        .into_iter()
        .fold(DeletionSummary::default(), |mut summary, result| {
            match result {
                Ok(AttachmentDeletion::Deleted) => summary.deleted += 1,
                Ok(AttachmentDeletion::Conflict) => summary.conflicts += 1,
                Err(_) => summary.failed += 1,
            }
            summary
        })
}

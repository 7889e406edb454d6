//! Delete workflow: confirm, delete the item unconditionally, and hand the
//! caller the site root to navigate to.

use super::context::RequestContext;
use crate::sharepoint::ListItemApi;
use crate::Result;

pub const DELETE_CONFIRMATION_PROMPT: &str = "Are you sure you want to delete this item?";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The item is gone; the host should navigate to `redirect_to`.
    Deleted { redirect_to: String },
    /// The user declined; nothing was sent.
    Declined,
}

/// Delete the item named by `ctx` after `confirm` accepts the prompt.
///
/// Identifiers are checked before prompting. Declining makes no request.
pub async fn delete_item<A, F>(api: &A, ctx: &RequestContext, confirm: F) -> Result<DeleteOutcome>
where
    A: ListItemApi + ?Sized,
    F: FnOnce(&str) -> bool,
{
    let target = ctx.target().inspect_err(|error| {
        tracing::error!("{error}");
    })?;

    if !confirm(DELETE_CONFIRMATION_PROMPT) {
        tracing::info!("Delete of item {} canceled", target.item_id);
        return Ok(DeleteOutcome::Declined);
    }

    let result = async {
        let digest = api.request_digest(&target.web_url).await?;
        api.delete_item(&target, &digest).await
    }
    .await;

    match result {
        Ok(()) => {
            tracing::info!("Deleted item {} from {}", target.item_id, target.list_name);
            Ok(DeleteOutcome::Deleted {
                redirect_to: target.web_url,
            })
        }
        Err(error) => {
            tracing::error!("DELETE Item Error: {error}");
            Err(error)
        }
    }
}

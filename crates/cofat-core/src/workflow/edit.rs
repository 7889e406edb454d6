//! Edit workflow: update the item fields, then replace its attachment when
//! the draft carries one.

use super::attachments::{replace_attachments, AttachmentReport};
use super::context::RequestContext;
use crate::models::{Attachment, EditBuffer, ItemFields, DEFAULT_TEXT_COLOR};
use crate::sharepoint::ListItemApi;
use crate::{Error, Result};

/// Lifecycle of an edit session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditState {
    Idle,
    ModalOpen,
    Saving,
    Succeeded,
    Failed,
}

/// What a successful save changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveReport {
    /// Present when the draft carried an attachment.
    pub attachment: Option<AttachmentReport>,
}

/// Holds the draft between `open` and `save`/`cancel`.
///
/// `save` always returns the session to `Idle` and discards the draft,
/// whether it succeeded or not.
#[derive(Debug, Clone)]
pub struct EditSession {
    state: EditState,
    buffer: EditBuffer,
    text_color: String,
    last_outcome: Option<EditState>,
}

impl Default for EditSession {
    fn default() -> Self {
        Self::new()
    }
}

impl EditSession {
    pub fn new() -> Self {
        Self {
            state: EditState::Idle,
            buffer: EditBuffer::default(),
            text_color: DEFAULT_TEXT_COLOR.to_string(),
            last_outcome: None,
        }
    }

    #[must_use]
    pub fn with_text_color(mut self, text_color: impl Into<String>) -> Self {
        self.text_color = text_color.into();
        self
    }

    pub const fn state(&self) -> EditState {
        self.state
    }

    pub const fn buffer(&self) -> &EditBuffer {
        &self.buffer
    }

    /// `Succeeded` or `Failed` for the most recent save.
    pub const fn last_outcome(&self) -> Option<EditState> {
        self.last_outcome
    }

    pub const fn is_open(&self) -> bool {
        matches!(self.state, EditState::ModalOpen)
    }

    /// Open the session with an empty draft.
    pub fn open(&mut self) {
        self.buffer = EditBuffer::default();
        self.state = EditState::ModalOpen;
    }

    /// Close without saving.
    pub fn cancel(&mut self) {
        self.close();
    }

    pub fn set_title(&mut self, title: impl Into<String>) -> Result<()> {
        self.ensure_open()?;
        self.buffer.title = title.into();
        Ok(())
    }

    pub fn set_content(&mut self, content: impl Into<String>) -> Result<()> {
        self.ensure_open()?;
        self.buffer.content = content.into();
        Ok(())
    }

    pub fn set_attachment(&mut self, attachment: Attachment) -> Result<()> {
        self.ensure_open()?;
        self.buffer.attachment = Some(attachment);
        Ok(())
    }

    pub fn clear_attachment(&mut self) -> Result<()> {
        self.ensure_open()?;
        self.buffer.attachment = None;
        Ok(())
    }

    /// Persist the draft, then close the session.
    pub async fn save<A>(&mut self, api: &A, ctx: &RequestContext) -> Result<SaveReport>
    where
        A: ListItemApi + ?Sized,
    {
        self.ensure_open()?;
        self.state = EditState::Saving;
        let buffer = std::mem::take(&mut self.buffer);

        let result = save_item(api, ctx, &buffer, &self.text_color).await;
        self.last_outcome = Some(if result.is_ok() {
            EditState::Succeeded
        } else {
            EditState::Failed
        });
        self.close();
        result
    }

    fn close(&mut self) {
        self.buffer = EditBuffer::default();
        self.state = EditState::Idle;
    }

    fn ensure_open(&self) -> Result<()> {
        if self.is_open() {
            Ok(())
        } else {
            Err(Error::InvalidInput("No edit session is open".to_string()))
        }
    }
}

/// Fetch a digest, update the fields, then replace the attachment if the
/// draft has one. Stops at the first failure.
pub async fn save_item<A>(
    api: &A,
    ctx: &RequestContext,
    buffer: &EditBuffer,
    text_color: &str,
) -> Result<SaveReport>
where
    A: ListItemApi + ?Sized,
{
    let target = ctx.target().inspect_err(|error| {
        tracing::error!("{error}");
    })?;

    let result = async {
        let digest = api.request_digest(&target.web_url).await?;

        let fields = ItemFields::new(&buffer.title, &buffer.content).with_text_color(text_color);
        api.update_item(&target, &digest, &fields).await?;
        tracing::info!(
            "Updated fields of item {} in {}",
            target.item_id,
            target.list_name
        );

        let attachment = match &buffer.attachment {
            Some(attachment) => {
                Some(replace_attachments(api, &target, &digest, attachment).await?)
            }
            None => None,
        };

        Ok::<_, Error>(SaveReport { attachment })
    }
    .await;

    match &result {
        Ok(_) => tracing::info!("Item updated successfully."),
        Err(error) => tracing::error!("Update Item Error: {error}"),
    }
    result
}

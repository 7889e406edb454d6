//! Recording `ListItemApi` fake for workflow tests.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::Barrier;

use crate::models::{Attachment, AttachmentFile, FormDigest, ItemFields, ItemTarget};
use crate::sharepoint::{AttachmentDeletion, ListItemApi};
use crate::{Error, Result};

pub const WEB_URL: &str = "https://contoso.sharepoint.com/sites/cofat";
pub const DIGEST: &str = "0xDIGEST";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    RequestDigest,
    UpdateItem(ItemFields),
    ListAttachments,
    /// Recorded when the delete settles, not when it starts.
    DeleteAttachment { file_name: String, if_match: String },
    UploadAttachment(String),
    DeleteItem(u64),
}

#[derive(Default)]
pub struct RecordingApi {
    calls: Mutex<Vec<Call>>,
    pub attachments: Vec<AttachmentFile>,
    pub digest_status: Option<u16>,
    pub update_status: Option<u16>,
    pub list_status: Option<u16>,
    pub delete_statuses: HashMap<String, u16>,
    pub upload_status: Option<u16>,
    pub delete_item_status: Option<u16>,
    /// When set, every attachment delete waits here before settling.
    pub delete_barrier: Option<Arc<Barrier>>,
}

impl RecordingApi {
    pub fn with_attachments(names: &[&str]) -> Self {
        Self {
            attachments: names
                .iter()
                .enumerate()
                .map(|(index, name)| AttachmentFile {
                    file_name: (*name).to_string(),
                    etag: Some(format!("\"{}\"", index + 1)),
                })
                .collect(),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().expect("calls lock").clone()
    }

    fn record(&self, call: Call) {
        self.calls.lock().expect("calls lock").push(call);
    }

    fn fail_with(operation: &'static str, status: Option<u16>) -> Result<()> {
        match status {
            Some(status) => Err(Error::Api {
                operation,
                status,
                detail: "simulated failure".to_string(),
            }),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl ListItemApi for RecordingApi {
    async fn request_digest(&self, web_url: &str) -> Result<FormDigest> {
        assert_eq!(web_url, WEB_URL);
        self.record(Call::RequestDigest);
        Self::fail_with("Request digest", self.digest_status)?;
        Ok(FormDigest::new(DIGEST))
    }

    async fn update_item(
        &self,
        _target: &ItemTarget,
        digest: &FormDigest,
        fields: &ItemFields,
    ) -> Result<()> {
        assert_eq!(digest.value, DIGEST);
        self.record(Call::UpdateItem(fields.clone()));
        Self::fail_with("Update item", self.update_status)
    }

    async fn list_attachments(&self, _target: &ItemTarget) -> Result<Vec<AttachmentFile>> {
        self.record(Call::ListAttachments);
        Self::fail_with("Get attachments", self.list_status)?;
        Ok(self.attachments.clone())
    }

    async fn delete_attachment(
        &self,
        _target: &ItemTarget,
        digest: &FormDigest,
        file: &AttachmentFile,
    ) -> Result<AttachmentDeletion> {
        assert_eq!(digest.value, DIGEST);
        if let Some(barrier) = &self.delete_barrier {
            barrier.wait().await;
        }
        self.record(Call::DeleteAttachment {
            file_name: file.file_name.clone(),
            if_match: file.if_match().to_string(),
        });

        match self.delete_statuses.get(&file.file_name) {
            None => Ok(AttachmentDeletion::Deleted),
            Some(409) => Ok(AttachmentDeletion::Conflict),
            Some(status) => Err(Error::Api {
                operation: "Delete attachment",
                status: *status,
                detail: "simulated failure".to_string(),
            }),
        }
    }

    async fn upload_attachment(
        &self,
        _target: &ItemTarget,
        digest: &FormDigest,
        attachment: &Attachment,
    ) -> Result<()> {
        assert_eq!(digest.value, DIGEST);
        self.record(Call::UploadAttachment(attachment.file_name.clone()));
        Self::fail_with("Upload attachment", self.upload_status)
    }

    async fn delete_item(&self, target: &ItemTarget, digest: &FormDigest) -> Result<()> {
        assert_eq!(digest.value, DIGEST);
        self.record(Call::DeleteItem(target.item_id));
        Self::fail_with("Delete item", self.delete_item_status)
    }
}

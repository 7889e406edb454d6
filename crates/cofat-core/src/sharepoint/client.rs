//! `reqwest` client for the SharePoint list item REST API.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::Deserialize;

use super::{AttachmentDeletion, ListItemApi};
use crate::config::SiteConfig;
use crate::models::{Attachment, AttachmentFile, FormDigest, ItemFields, ItemTarget};
use crate::util::normalize_text_option;
use crate::{Error, Result};

const ACCEPT_JSON: &str = "application/json;odata=minimal";
const HEADER_HTTP_METHOD: &str = "X-HTTP-Method";
const HEADER_IF_MATCH: &str = "IF-MATCH";
const HEADER_REQUEST_DIGEST: &str = "X-RequestDigest";

/// HTTP client for list items on a SharePoint site.
///
/// No request timeout is configured: a hung request stalls the calling
/// workflow.
#[derive(Clone)]
pub struct SharePointClient {
    client: Client,
    access_token: Option<String>,
}

impl SharePointClient {
    pub fn new(access_token: Option<String>) -> Result<Self> {
        Ok(Self {
            client: Client::builder().build()?,
            access_token: normalize_text_option(access_token),
        })
    }

    pub fn from_config(config: &SiteConfig) -> Result<Self> {
        Self::new(config.access_token.clone())
    }

    fn get(&self, url: &str) -> RequestBuilder {
        self.authorize(self.client.get(url))
    }

    fn post(&self, url: &str) -> RequestBuilder {
        self.authorize(self.client.post(url))
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        let request = request.header(reqwest::header::ACCEPT, ACCEPT_JSON);
        match &self.access_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }
}

impl std::fmt::Debug for SharePointClient {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("SharePointClient")
            .field(
                "access_token",
                &self.access_token.as_ref().map(|_| "[REDACTED]"),
            )
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl ListItemApi for SharePointClient {
    async fn request_digest(&self, web_url: &str) -> Result<FormDigest> {
        let url = format!("{}/_api/contextinfo", web_url.trim_end_matches('/'));
        tracing::debug!("POST {url}");

        let response = self.post(&url).send().await?;
        if !response.status().is_success() {
            return Err(body_error("Request digest", response).await);
        }

        let payload = response.json::<ContextInfoResponse>().await?;
        payload.into_digest()
    }

    async fn update_item(
        &self,
        target: &ItemTarget,
        digest: &FormDigest,
        fields: &ItemFields,
    ) -> Result<()> {
        let url = target.item_url();
        tracing::debug!("MERGE {url}");

        let response = self
            .post(&url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .header(HEADER_HTTP_METHOD, "MERGE")
            .header(HEADER_REQUEST_DIGEST, &digest.value)
            .header(HEADER_IF_MATCH, "*")
            .body(serde_json::to_vec(fields)?)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(body_error("Update item", response).await);
        }
        Ok(())
    }

    async fn list_attachments(&self, target: &ItemTarget) -> Result<Vec<AttachmentFile>> {
        let url = target.attachments_url();
        tracing::debug!("GET {url}");

        let response = self.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(status_error("Get attachments", response.status()));
        }

        let payload = response.json::<AttachmentListResponse>().await?;
        Ok(payload.into_files())
    }

    async fn delete_attachment(
        &self,
        target: &ItemTarget,
        digest: &FormDigest,
        file: &AttachmentFile,
    ) -> Result<AttachmentDeletion> {
        let url = target.attachment_url(&file.file_name);
        tracing::debug!("DELETE {url}");

        let response = self
            .post(&url)
            .header(HEADER_HTTP_METHOD, "DELETE")
            .header(HEADER_REQUEST_DIGEST, &digest.value)
            .header(HEADER_IF_MATCH, file.if_match())
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            Ok(AttachmentDeletion::Deleted)
        } else if status == StatusCode::CONFLICT {
            Ok(AttachmentDeletion::Conflict)
        } else {
            Err(status_error("Delete attachment", status))
        }
    }

    async fn upload_attachment(
        &self,
        target: &ItemTarget,
        digest: &FormDigest,
        attachment: &Attachment,
    ) -> Result<()> {
        let url = target.attachment_add_url(&attachment.file_name);
        tracing::debug!("POST {url} ({} bytes)", attachment.bytes.len());

        let response = self
            .post(&url)
            .header(HEADER_REQUEST_DIGEST, &digest.value)
            .body(attachment.bytes.clone())
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(body_error("Upload attachment", response).await);
        }
        Ok(())
    }

    async fn delete_item(&self, target: &ItemTarget, digest: &FormDigest) -> Result<()> {
        let url = target.item_url();
        tracing::debug!("DELETE {url}");

        let response = self
            .post(&url)
            .header(HEADER_HTTP_METHOD, "DELETE")
            .header(HEADER_REQUEST_DIGEST, &digest.value)
            .header(HEADER_IF_MATCH, "*")
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(status_error("Delete item", response.status()));
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ContextInfoResponse {
    Verbose { d: VerboseContextInfo },
    Flat(FormDigest),
}

#[derive(Debug, Deserialize)]
struct VerboseContextInfo {
    #[serde(rename = "GetContextWebInformation")]
    info: FormDigest,
}

impl ContextInfoResponse {
    fn into_digest(self) -> Result<FormDigest> {
        let digest = match self {
            Self::Flat(digest) => digest,
            Self::Verbose { d } => d.info,
        };
        if digest.value.trim().is_empty() {
            return Err(Error::InvalidPayload(
                "contextinfo response had an empty FormDigestValue".to_string(),
            ));
        }
        Ok(digest)
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum AttachmentListResponse {
    Minimal { value: Vec<AttachmentFile> },
    Verbose { d: VerboseResults },
}

#[derive(Debug, Deserialize)]
struct VerboseResults {
    results: Vec<VerboseAttachment>,
}

#[derive(Debug, Deserialize)]
struct VerboseAttachment {
    #[serde(rename = "FileName")]
    file_name: String,
    #[serde(rename = "__metadata", default)]
    metadata: Option<VerboseMetadata>,
}

#[derive(Debug, Deserialize)]
struct VerboseMetadata {
    #[serde(default)]
    etag: Option<String>,
}

impl AttachmentListResponse {
    fn into_files(self) -> Vec<AttachmentFile> {
        match self {
            Self::Minimal { value } => value,
            Self::Verbose { d } => d
                .results
                .into_iter()
                .map(|attachment| AttachmentFile {
                    file_name: attachment.file_name,
                    etag: attachment.metadata.and_then(|metadata| metadata.etag),
                })
                .collect(),
        }
    }
}

/// Error whose detail is the full trimmed response body.
async fn body_error(operation: &'static str, response: Response) -> Error {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    let detail = body.trim().to_string();
    Error::Api {
        operation,
        status: status.as_u16(),
        detail: if detail.is_empty() {
            status_text(status)
        } else {
            detail
        },
    }
}

/// Error whose detail is the status text.
fn status_error(operation: &'static str, status: StatusCode) -> Error {
    Error::Api {
        operation,
        status: status.as_u16(),
        detail: status_text(status),
    }
}

fn status_text(status: StatusCode) -> String {
    status
        .canonical_reason()
        .map_or_else(|| format!("HTTP {}", status.as_u16()), ToString::to_string)
}

//! List item target and field models

use serde::Serialize;

use crate::util::odata_literal;

/// Placeholder written to `CouleurTexte` on every field update.
pub const DEFAULT_TEXT_COLOR: &str = "aa";

/// A resolved list item: site, list title, and numeric item id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemTarget {
    /// Absolute site URL without a trailing slash.
    pub web_url: String,
    pub list_name: String,
    pub item_id: u64,
}

impl ItemTarget {
    pub fn new(web_url: impl Into<String>, list_name: impl Into<String>, item_id: u64) -> Self {
        Self {
            web_url: web_url.into().trim_end_matches('/').to_string(),
            list_name: list_name.into(),
            item_id,
        }
    }

    /// `…/_api/web/lists/getbytitle('{list}')/items({id})`
    pub fn item_url(&self) -> String {
        format!(
            "{}/_api/web/lists/getbytitle('{}')/items({})",
            self.web_url,
            odata_literal(&self.list_name),
            self.item_id
        )
    }

    pub fn attachments_url(&self) -> String {
        format!("{}/AttachmentFiles", self.item_url())
    }

    pub fn attachment_url(&self, file_name: &str) -> String {
        format!(
            "{}/AttachmentFiles('{}')",
            self.item_url(),
            odata_literal(file_name)
        )
    }

    pub fn attachment_add_url(&self, file_name: &str) -> String {
        format!(
            "{}/AttachmentFiles/add(FileName='{}')",
            self.item_url(),
            odata_literal(file_name)
        )
    }
}

/// Body of the MERGE update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemFields {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Contenu")]
    pub content: String,
    #[serde(rename = "CouleurTexte")]
    pub text_color: String,
}

impl ItemFields {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            text_color: DEFAULT_TEXT_COLOR.to_string(),
        }
    }

    #[must_use]
    pub fn with_text_color(mut self, text_color: impl Into<String>) -> Self {
        self.text_color = text_color.into();
        self
    }
}

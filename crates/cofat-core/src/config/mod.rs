//! Site configuration for the list item client.
//!
//! Values come from the environment (optionally seeded from `.env` by the
//! host) and can be overridden by explicit values from the caller.

use std::env;
use std::fmt;

use crate::models::DEFAULT_TEXT_COLOR;
use crate::util::{is_http_url, normalize_text_option};
use crate::{Error, Result};

pub const ENV_WEB_URL: &str = "SHAREPOINT_WEB_URL";
pub const ENV_ACCESS_TOKEN: &str = "SHAREPOINT_ACCESS_TOKEN";
pub const ENV_TEXT_COLOR: &str = "SHAREPOINT_TEXT_COLOR";

/// Connection settings for a SharePoint site.
#[derive(Clone, PartialEq, Eq)]
pub struct SiteConfig {
    /// Absolute site URL. `None` means no site context: workflows abort
    /// before any request.
    pub web_url: Option<String>,
    /// Bearer token sent on every request.
    pub access_token: Option<String>,
    /// Value written to `CouleurTexte` on update.
    pub text_color: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            web_url: None,
            access_token: None,
            text_color: DEFAULT_TEXT_COLOR.to_string(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        parse_config(|key| env::var(key).ok())
    }

    /// Apply explicit values over the loaded ones.
    pub fn with_overrides(
        mut self,
        web_url: Option<String>,
        access_token: Option<String>,
        text_color: Option<String>,
    ) -> Result<Self> {
        if let Some(web_url) = normalize_text_option(web_url) {
            self.web_url = Some(normalize_web_url(&web_url)?);
        }
        if let Some(access_token) = normalize_text_option(access_token) {
            self.access_token = Some(access_token);
        }
        if let Some(text_color) = normalize_text_option(text_color) {
            self.text_color = text_color;
        }
        Ok(self)
    }
}

impl fmt::Debug for SiteConfig {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("SiteConfig")
            .field("web_url", &self.web_url)
            .field(
                "access_token",
                &self.access_token.as_ref().map(|_| "[REDACTED]"),
            )
            .field("text_color", &self.text_color)
            .finish()
    }
}

fn parse_config(lookup: impl Fn(&str) -> Option<String>) -> Result<SiteConfig> {
    let web_url = normalize_text_option(lookup(ENV_WEB_URL))
        .map(|value| normalize_web_url(&value))
        .transpose()?;
    let access_token = normalize_text_option(lookup(ENV_ACCESS_TOKEN));
    let text_color = normalize_text_option(lookup(ENV_TEXT_COLOR))
        .unwrap_or_else(|| DEFAULT_TEXT_COLOR.to_string());

    Ok(SiteConfig {
        web_url,
        access_token,
        text_color,
    })
}

fn normalize_web_url(value: &str) -> Result<String> {
    let value = value.trim();
    if !is_http_url(value) {
        return Err(Error::InvalidConfiguration(format!(
            "{ENV_WEB_URL} must start with http:// or https://"
        )));
    }
    Ok(value.trim_end_matches('/').to_string())
}

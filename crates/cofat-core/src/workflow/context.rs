//! Request context: resolves the site and page identifiers into the target
//! list item.

use crate::config::SiteConfig;
use crate::models::ItemTarget;
use crate::params::PageParameters;
use crate::{Error, Result};

/// Site context plus the identifiers read from the page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestContext {
    pub web_url: Option<String>,
    pub params: PageParameters,
}

impl RequestContext {
    pub fn new(web_url: Option<String>, params: PageParameters) -> Self {
        Self { web_url, params }
    }

    pub fn from_page_url(config: &SiteConfig, page_url: &str) -> Self {
        Self::new(config.web_url.clone(), PageParameters::from_page_url(page_url))
    }

    /// Resolve the target item, or fail without touching the network when
    /// the site context, item id, or list name is missing.
    pub fn target(&self) -> Result<ItemTarget> {
        let (Some(web_url), Some(item_id), Some(list_name)) = (
            self.web_url.as_deref(),
            self.params.actualite_id.as_deref(),
            self.params.cofat_list.as_deref(),
        ) else {
            return Err(Error::MissingPrecondition(
                "Context, actualiteId, or cofatList is not defined.".to_string(),
            ));
        };

        let item_id = item_id.parse::<u64>().map_err(|_| {
            Error::MissingPrecondition(format!("actualiteId {item_id} is not a valid item id"))
        })?;

        Ok(ItemTarget::new(web_url, list_name, item_id))
    }
}

//! Page parameter reader.
//!
//! The actions run against the list item named by the hosting page's query
//! string: `ActualiteId` carries the item id (possibly wrapped in other
//! text) and `CofatList` carries the list title.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use url::Url;

const ACTUALITE_ID_KEY: &str = "ActualiteId";
const COFAT_LIST_KEY: &str = "CofatList";

static DIGIT_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+").expect("digit run regex is valid"));

/// Identifiers extracted from a page URL.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PageParameters {
    pub actualite_id: Option<String>,
    pub cofat_list: Option<String>,
}

impl PageParameters {
    /// Read parameters from a raw query string, with or without a leading `?`.
    pub fn from_query(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let mut actualite_id = None;
        let mut cofat_list = None;
        let mut seen_id = false;
        let mut seen_list = false;

        for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
            if key == ACTUALITE_ID_KEY && !seen_id {
                seen_id = true;
                actualite_id = extract_id(&value);
            } else if key == COFAT_LIST_KEY && !seen_list {
                seen_list = true;
                cofat_list = extract_list(&value);
            }
        }

        Self {
            actualite_id,
            cofat_list,
        }
    }

    /// Read parameters from a full page URL.
    ///
    /// Input that does not parse as an absolute URL is treated as a bare
    /// query string.
    pub fn from_page_url(page_url: &str) -> Self {
        let page_url = page_url.trim();
        match Url::parse(page_url) {
            Ok(url) => Self::from_query(url.query().unwrap_or_default()),
            Err(_) => {
                let query = page_url
                    .split_once('?')
                    .map_or(page_url, |(_, query)| query);
                Self::from_query(query.split('#').next().unwrap_or_default())
            }
        }
    }

    /// Whether both identifiers are present.
    pub const fn is_complete(&self) -> bool {
        self.actualite_id.is_some() && self.cofat_list.is_some()
    }
}

/// First run of digits in the parameter value.
fn extract_id(value: &str) -> Option<String> {
    DIGIT_RUN
        .find(value)
        .map(|digits| digits.as_str().to_string())
}

fn extract_list(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

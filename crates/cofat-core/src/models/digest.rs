//! Request digest model

use std::fmt;

use serde::Deserialize;

/// Security token required on state-changing requests.
///
/// Obtained once per workflow from `/_api/contextinfo` and assumed valid
/// for the rest of that workflow.
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct FormDigest {
    #[serde(rename = "FormDigestValue")]
    pub value: String,
    #[serde(rename = "FormDigestTimeoutSeconds", default)]
    pub timeout_seconds: Option<u64>,
}

impl FormDigest {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            timeout_seconds: None,
        }
    }
}

impl fmt::Debug for FormDigest {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("FormDigest")
            .field("value", &"[REDACTED]")
            .field("timeout_seconds", &self.timeout_seconds)
            .finish()
    }
}

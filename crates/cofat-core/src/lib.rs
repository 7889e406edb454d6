//! cofat-core - Core library for cofat
//!
//! This crate contains the page parameter reader, the SharePoint list item
//! REST client, and the edit/delete workflows used by the cofat interfaces.

pub mod config;
pub mod error;
pub mod models;
pub mod params;
pub mod sharepoint;
pub mod util;
pub mod workflow;

pub use config::SiteConfig;
pub use error::{Error, Result};
pub use models::{Attachment, AttachmentFile, EditBuffer, FormDigest, ItemFields, ItemTarget};
pub use params::PageParameters;
pub use sharepoint::{AttachmentDeletion, ListItemApi, SharePointClient};
pub use workflow::{DeleteOutcome, EditSession, EditState, RequestContext, SaveReport};

//! Edit and delete workflows for a single list item.
//!
//! Every workflow takes the API and a `RequestContext` explicitly; none of
//! them hold state between calls except `EditSession`, which owns the
//! draft while it is open.

mod attachments;
mod context;
mod delete;
mod edit;

#[cfg(test)]
pub(crate) mod testing;

pub use attachments::{replace_attachments, AttachmentReport};
pub use context::RequestContext;
pub use delete::{delete_item, DeleteOutcome, DELETE_CONFIRMATION_PROMPT};
pub use edit::{save_item, EditSession, EditState, SaveReport};

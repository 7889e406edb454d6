//! Data models for cofat

mod attachment;
mod digest;
mod item;

pub use attachment::{Attachment, AttachmentFile, EditBuffer};
pub use digest::FormDigest;
pub use item::{ItemFields, ItemTarget, DEFAULT_TEXT_COLOR};

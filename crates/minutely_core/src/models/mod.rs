//! Data models for generated artifacts and wire payloads.

/// Meeting artifacts and the processing request payload.
pub mod meeting;

pub use meeting::{ActionItem, GeneratedDocument, Minutes, Priority, ProcessRequest};

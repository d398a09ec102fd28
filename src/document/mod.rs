pub mod author;
pub mod document;

pub use crate::types::identifiers::DocumentId;
pub use author::{Author, AuthorBuilder};
pub use document::{Document, DocumentBuilder};

//! In-memory document store with id assignment and filtered search.
//!
//! `document-store` keeps documents in insertion order, assigns sequential
//! ids on first save, looks documents up by exact id, and filters them by
//! title prefix, content substring, author id and an open created-date
//! interval. Everything runs synchronously on the caller's thread; nothing
//! is persisted.

pub mod document;
pub mod search;
pub mod store;
pub mod types;

pub use document::{Author, Document, DocumentId};
pub use search::SearchRequest;
pub use store::{DocumentStore, SearchError, StoreConfig};

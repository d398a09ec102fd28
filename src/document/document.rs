use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::identifiers::DocumentId;
use super::author::Author;

/// The unit of storage.
///
/// A document starts life without an id; the store assigns one on first save.
/// `created` belongs to the caller and is never touched by the store.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Document {
    pub id: DocumentId,
    pub title: String,
    pub content: String,
    pub author: Author,
    pub created: Option<DateTime<Utc>>,
}

impl Document {
    pub fn builder() -> DocumentBuilder {
        DocumentBuilder::default()
    }

    pub fn has_id(&self) -> bool {
        self.id.is_assigned()
    }
}

/// Named-field construction for [`Document`].
///
/// Every field is optional; omitted ones take their empty value.
#[derive(Debug, Default)]
pub struct DocumentBuilder {
    id: DocumentId,
    title: String,
    content: String,
    author: Author,
    created: Option<DateTime<Utc>>,
}

impl DocumentBuilder {
    pub fn id(mut self, id: impl Into<DocumentId>) -> Self {
        self.id = id.into();
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn author(mut self, author: Author) -> Self {
        self.author = author;
        self
    }

    pub fn created(mut self, created: DateTime<Utc>) -> Self {
        self.created = Some(created);
        self
    }

    pub fn build(self) -> Document {
        Document {
            id: self.id,
            title: self.title,
            content: self.content,
            author: self.author,
            created: self.created,
        }
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Filter criteria for [`DocumentStore::search`](crate::store::DocumentStore::search).
///
/// Each criterion is independent. An empty list or an absent bound matches
/// everything. Values within a list are OR-ed; criteria are AND-ed.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchRequest {
    pub title_prefixes: Vec<String>,
    pub contains_contents: Vec<String>,
    pub author_ids: Vec<String>,
    /// Exclusive lower bound on `created`.
    pub created_from: Option<DateTime<Utc>>,
    /// Exclusive upper bound on `created`.
    pub created_to: Option<DateTime<Utc>>,
}

impl SearchRequest {
    pub fn builder() -> SearchRequestBuilder {
        SearchRequestBuilder::default()
    }

    pub fn is_unfiltered(&self) -> bool {
        self.title_prefixes.is_empty()
            && self.contains_contents.is_empty()
            && self.author_ids.is_empty()
            && self.created_from.is_none()
            && self.created_to.is_none()
    }
}

#[derive(Debug, Default)]
pub struct SearchRequestBuilder {
    request: SearchRequest,
}

impl SearchRequestBuilder {
    pub fn title_prefixes<I, S>(mut self, prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.request.title_prefixes = prefixes.into_iter().map(Into::into).collect();
        self
    }

    pub fn contains_contents<I, S>(mut self, fragments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.request.contains_contents = fragments.into_iter().map(Into::into).collect();
        self
    }

    pub fn author_ids<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.request.author_ids = ids.into_iter().map(Into::into).collect();
        self
    }

    pub fn created_from(mut self, from: DateTime<Utc>) -> Self {
        self.request.created_from = Some(from);
        self
    }

    pub fn created_to(mut self, to: DateTime<Utc>) -> Self {
        self.request.created_to = Some(to);
        self
    }

    pub fn build(self) -> SearchRequest {
        self.request
    }
}

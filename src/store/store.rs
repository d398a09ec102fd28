use tracing::{debug, instrument, warn};

use crate::document::Document;
use crate::search::{Predicate, RequestMatcher, SearchRequest};
use crate::store::config::{BoundsPolicy, SavePolicy, StoreConfig};
use crate::store::error::{MissingBound, SearchError};
use crate::types::identifiers::DocumentId;

/// Insertion-ordered, in-memory document collection.
///
/// The store keeps its own copy of every saved document. Values returned by
/// `save` are clones, so mutating them afterwards does not reach the store.
///
/// Single caller at a time: no interior mutability, no locking.
#[derive(Debug, Clone, Default)]
pub struct DocumentStore {
    config: StoreConfig,
    documents: Vec<Document>,
}

impl DocumentStore {
    pub fn new() -> Self {
        Self::with_config(StoreConfig::v0())
    }

    pub fn with_config(config: StoreConfig) -> Self {
        Self {
            config,
            documents: Vec::new(),
        }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Store a document, assigning an id if it has none.
    ///
    /// A document that already carries an id is handled by the configured
    /// [`SavePolicy`]. Under the default policy it is returned as-is and
    /// not stored. `created` is never modified.
    #[instrument(skip(self, document))]
    pub fn save(&mut self, mut document: Document) -> Document {
        if !document.has_id() {
            document.id = self.next_id();
            debug!(doc_id = %document.id, "Appending new document");
            self.documents.push(document.clone());
            return document;
        }

        match self.config.save_policy {
            SavePolicy::AppendIfUnassigned => {
                warn!(doc_id = %document.id, "Document already has an id, not stored");
            }
            SavePolicy::UpsertById => match self.position_of(document.id.as_str()) {
                Some(index) => {
                    debug!(doc_id = %document.id, index, "Replacing stored document");
                    self.documents[index] = document.clone();
                }
                None => {
                    debug!(doc_id = %document.id, "Appending document with caller-supplied id");
                    self.documents.push(document.clone());
                }
            },
        }

        document
    }

    /// First document, in insertion order, whose id equals `id`.
    #[instrument(skip(self))]
    pub fn find_by_id(&self, id: &str) -> Option<&Document> {
        self.position_of(id).map(|index| &self.documents[index])
    }

    /// Every stored document matching all criteria of `request`, in
    /// insertion order.
    #[instrument(skip(self, request))]
    pub fn search(&self, request: &SearchRequest) -> Result<Vec<&Document>, SearchError> {
        self.check_bounds(request)?;

        let matcher = RequestMatcher::new(request);
        let matched: Vec<&Document> = self
            .documents
            .iter()
            .filter(|doc| matcher.matches(doc))
            .collect();

        debug!(
            documents_considered = self.documents.len(),
            documents_matched = matched.len(),
            "Search complete"
        );

        Ok(matched)
    }

    fn check_bounds(&self, request: &SearchRequest) -> Result<(), SearchError> {
        if self.config.bounds_policy == BoundsPolicy::Unbounded {
            return Ok(());
        }

        match (request.created_from, request.created_to) {
            (Some(_), None) => Err(SearchError::IncompleteBounds {
                missing: MissingBound::To,
            }),
            (None, Some(_)) => Err(SearchError::IncompleteBounds {
                missing: MissingBound::From,
            }),
            _ => Ok(()),
        }
    }

    fn position_of(&self, id: &str) -> Option<usize> {
        self.documents.iter().position(|doc| doc.id == id)
    }

    /// `len + 1`, skipping past any id a caller already claimed under
    /// upsert. Append-only stores only ever hold generated ids, so the first
    /// candidate is always free there.
    fn next_id(&self) -> DocumentId {
        let mut sequence = self.documents.len() + 1;
        loop {
            let candidate = DocumentId::from_sequence(sequence);
            if self.position_of(candidate.as_str()).is_none() {
                return candidate;
            }
            sequence += 1;
        }
    }
}

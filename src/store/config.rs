use serde::{Deserialize, Serialize};

/// What `save` does with a document that already carries an id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SavePolicy {
    /// Return it unchanged without storing it. Only id-less documents are
    /// ever appended.
    #[default]
    AppendIfUnassigned,
    /// Replace the stored document with the same id, or append when none
    /// matches.
    UpsertById,
}

/// How `search` treats a request carrying only one of its two date bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoundsPolicy {
    /// A missing bound is open on that side.
    #[default]
    Unbounded,
    /// One bound without the other is a validation error.
    Reject,
}

/// Behaviour switches for a [`DocumentStore`](super::DocumentStore).
///
/// `v0()` and `Default` both give the append-only, open-bounds behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StoreConfig {
    pub save_policy: SavePolicy,
    pub bounds_policy: BoundsPolicy,
}

impl StoreConfig {
    pub fn v0() -> Self {
        Self {
            save_policy: SavePolicy::AppendIfUnassigned,
            bounds_policy: BoundsPolicy::Unbounded,
        }
    }

    pub fn with_save_policy(mut self, save_policy: SavePolicy) -> Self {
        self.save_policy = save_policy;
        self
    }

    pub fn with_bounds_policy(mut self, bounds_policy: BoundsPolicy) -> Self {
        self.bounds_policy = bounds_policy;
        self
    }
}

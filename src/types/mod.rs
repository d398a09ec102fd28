pub mod identifiers;

pub use identifiers::DocumentId;

pub mod config;
pub mod error;
pub mod store;

pub use config::{BoundsPolicy, SavePolicy, StoreConfig};
pub use error::{MissingBound, SearchError};
pub use store::DocumentStore;

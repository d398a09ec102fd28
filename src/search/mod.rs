pub mod request;
mod predicates;

pub(crate) use predicates::{Predicate, RequestMatcher};
pub use request::{SearchRequest, SearchRequestBuilder};

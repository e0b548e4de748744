pub mod criteria;
pub mod query;

pub use criteria::{CabinClass, FilterState, SearchCriteria, SortKey};
pub use query::QueryError;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    ValidationError(String),
    #[error(transparent)]
    Query(#[from] query::QueryError),
}

pub type CoreResult<T> = Result<T, CoreError>;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("Unique ID must be a positive integer, got {0}")]
    NonPositiveUniqueId(i32),
    #[error("Unique ID must be an integer, got {0:?}")]
    InvalidUniqueId(String),
    #[error("At least one chassis pattern is required")]
    EmptyPatternList,
    #[error("Unknown sort column {0:?}")]
    UnknownSortKey(String),
    #[error("Unknown sort direction {0:?}, expected asc or desc")]
    UnknownSortDirection(String),
    #[error("No {0} is left to assign after {max}", max = i32::MAX)]
    SequenceExhausted(&'static str),
}

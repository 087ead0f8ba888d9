use super::Error;

/// Machine-checkable failure class of an [`Error`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// Referenced id absent
    NotFound,
    /// Uniqueness or exclusivity violation
    Conflict,
    /// Missing or invalid input value
    Validation,
    /// Malformed or structurally invalid import document
    ImportFormat,
    /// Configuration, persistence or file system failure
    Internal,
}

impl Error {
    /// Determine the failure class of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFoundError(_) => ErrorKind::NotFound,
            Self::ConflictError(_) => ErrorKind::Conflict,
            Self::ValidationError(_) => ErrorKind::Validation,
            Self::ImportError(_) => ErrorKind::ImportFormat,
            // Raised by sea-orm when an update targets a row that no longer exists
            Self::DbErr(sea_orm::DbErr::RecordNotFound(_)) => ErrorKind::NotFound,
            Self::ConfigError(_)
            | Self::DbErr(_)
            | Self::IoError(_)
            | Self::SerializeError(_) => ErrorKind::Internal,
        }
    }
}

use thiserror::Error;

#[derive(Error, Debug)]
pub enum NotFoundError {
    #[error("Miniature ID {0} not found")]
    Miniature(i32),
    #[error("Force ID {0} not found")]
    Force(i32),
    #[error("Lance ID {0} not found")]
    Lance(i32),
    #[error("Lance template ID {0} not found")]
    Template(i32),
    #[error("Miniature ID {miniature_id} is not assigned to any lance in force ID {force_id}")]
    MiniatureNotInForce { miniature_id: i32, force_id: i32 },
}

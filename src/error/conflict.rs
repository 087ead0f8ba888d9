use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConflictError {
    #[error("Unique ID {unique_id} already exists in series {series}")]
    DuplicateMiniature { series: String, unique_id: i32 },
    #[error("Miniature ID {miniature_id} already in force (Lance: {lance_name})")]
    AlreadyInForce {
        miniature_id: i32,
        force_id: i32,
        lance_id: i32,
        lance_name: String,
    },
    #[error("Import document lists unique ID {unique_id} in series {series} more than once")]
    DuplicateImportRecord { series: String, unique_id: i32 },
}

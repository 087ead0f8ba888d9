//! Data access layer repositories.
//!
//! Repositories are thin per-table query objects generic over [`sea_orm::ConnectionTrait`], so
//! the same repository runs against a plain connection or inside a transaction opened by the
//! service layer. They return raw [`sea_orm::DbErr`]s and enforce no business rules.

pub mod force;
pub mod lance_template;
pub mod miniature;

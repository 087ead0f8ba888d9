//! Domain and exchange types passed between the service layer and its callers.
//!
//! - `db` - aliases for the generated entity models
//! - `miniature` - inventory input, query and deletion types
//! - `force` - fully materialized force aggregates
//! - `template` - template aggregates and matcher results
//! - `exchange` - JSON import/export documents and import reports

pub mod db;
pub mod exchange;
pub mod force;
pub mod miniature;
pub mod template;

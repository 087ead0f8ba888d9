//! MechBay keeps an inventory of tabletop miniatures, organizes them into forces made of
//! lances, builds lances from chassis templates and moves all of it in and out as JSON.
//!
//! - `data` - per-table repositories over any sea-orm connection or transaction
//! - `service` - the inventory, force, template and exchange operations
//! - `model` - inputs, aggregates and exchange documents
//! - `error` - the error type and its machine-checkable kinds
//! - `config` and `startup` - environment configuration, database and logging setup

pub mod config;
pub mod data;
pub mod error;
pub mod model;
pub mod service;
pub mod startup;

//! # stockroom-entity
//!
//! Domain entity models for Stockroom. Every struct in this crate
//! represents a database table row, a typed write input, or a query view.
//! All entities derive `Debug`, `Clone`, `Serialize`, `Deserialize`, and
//! database entities additionally derive `sqlx::FromRow`.

pub mod category;
pub mod item;

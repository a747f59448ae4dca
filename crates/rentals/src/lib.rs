//! Data model and query layer for the RentDaddy property-management store.
//!
//! The schema itself is owned by the backend's migrations; this crate only
//! mirrors the tables it reads and writes.

pub mod database;
pub mod errors;
pub mod models;

pub use database::Database;
pub use errors::AppError;

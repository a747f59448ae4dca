//! Database integration for seeding.
//!
//! [`SeedStore`] is the query capability the seeders run against; it is
//! implemented for [`rentals::Database`]. The [`Seeder`] wraps a store with the
//! batch seeding and apartment assignment routines.

mod seeder;
mod store;

pub use seeder::{DEFAULT_BATCH_SIZE, SeedError, Seeder};
pub use store::SeedStore;

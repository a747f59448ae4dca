//! Baseline data seeding for the RentDaddy property-management backend.
//!
//! Populates work orders and complaints for a configured set of accounts, and
//! can mark a random available apartment as taken. Seeding is idempotent per
//! account and record kind: a batch only runs when the account has fewer
//! records than the configured threshold.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use seed_data::prelude::*;
//!
//! let db = Database::new(pool);
//! let run = SeedRun::new(db, SeedConfig::from_env()?);
//! let report = run.execute(&mut rand::thread_rng()).await?;
//! println!("{}", report.to_json()?);
//! ```

pub mod config;
pub mod db;
pub mod generators;
pub mod orchestrator;
pub mod report;

#[cfg(test)]
pub(crate) mod testing;

// Re-export core types from rentals crate
pub use rentals::models::{
    Apartment, Complaint, ComplaintCategory, Role, Status, User, WorkCategory, WorkOrder,
};
pub use rentals::{AppError, Database};

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::config::{SeedConfig, SeedTarget};
    pub use crate::db::{SeedError, SeedStore, Seeder};
    pub use crate::generators::{ComplaintGenerator, RandomCategory, WorkOrderGenerator};
    pub use crate::orchestrator::SeedRun;
    pub use crate::report::{BatchOutcome, RecordKind, SeedReport, UserReport};
    pub use crate::{Database, Role, User};
}

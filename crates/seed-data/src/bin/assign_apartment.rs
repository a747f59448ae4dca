//! Marks one random available apartment as unavailable.
//!
//! The apartment is not tied to any particular tenant; the admin account only
//! fills in the management entity when the apartment has none.
//!
//! Run with:
//! ```
//! PG_URL=postgres://... cargo run -p seed-data --bin assign-apartment
//! ```

use anyhow::Context;
use seed_data::Database;
use seed_data::config::{self, SeedConfig};
use seed_data::db::Seeder;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let database_url = config::database_url(|var| std::env::var(var).ok())?;
    let seed_config = SeedConfig::from_env()?;

    let manager_target = seed_config
        .targets
        .iter()
        .find(|t| t.label == "admin")
        .or_else(|| seed_config.targets.first())
        .context("no seed targets configured")?;

    let pool = PgPoolOptions::new()
        .max_connections(1)
        .connect(&database_url)
        .await
        .context("error initializing pg pool")?;

    let seeder = Seeder::new(Database::new(pool.clone()));
    let manager = seeder
        .store()
        .get_user_by_clerk_id(&manager_target.clerk_id)
        .await
        .with_context(|| format!("error getting {} user", manager_target.label))?;

    let assigned = seeder.assign_apartment(&manager).await;
    pool.close().await;

    match assigned? {
        Some(apartment) => tracing::info!(
            apartment_id = apartment.id,
            unit_number = apartment.unit_number,
            "Apartment assigned"
        ),
        None => tracing::info!("No available apartments, nothing to assign"),
    }

    Ok(())
}

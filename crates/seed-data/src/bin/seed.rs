//! Production seed script - tops up work orders and complaints for the
//! configured accounts.
//!
//! Run with:
//! ```
//! PG_URL=postgres://... cargo run -p seed-data --bin seed
//! ```

use anyhow::Context;
use rand::{SeedableRng, rngs::StdRng};
use seed_data::Database;
use seed_data::config::{self, SeedConfig};
use seed_data::orchestrator::SeedRun;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("Starting production data seeding...");

    let database_url = config::database_url(|var| std::env::var(var).ok())?;
    let seed_config = SeedConfig::from_env()?;

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await
        .context("error initializing pg pool")?;

    tracing::info!("Connected to database");

    let mut rng = match seed_config.rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let run = SeedRun::new(Database::new(pool.clone()), seed_config);
    let result = run.execute(&mut rng).await;
    pool.close().await;

    let report = result.context("error seeding production data")?;

    let summary = report.to_json()?;
    tracing::info!(report = %summary, "Seed report");
    tracing::info!("Production data seeding completed successfully!");

    Ok(())
}

//! Configuration for seeding runs.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::db::DEFAULT_BATCH_SIZE;

/// Clerk id of the production admin account.
pub const ADMIN_CLERK_ID: &str = "user_33bWcFij7GfSChr9WtEFrffNRtq";

/// Clerk id of the production client (tenant) account.
pub const CLIENT_CLERK_ID: &str = "user_33bWeJ1zCXC0iliXr5TgRZVYX1R";

/// Environment variable holding the Postgres connection string.
pub const DATABASE_URL_VAR: &str = "PG_URL";

/// Optional `label=clerk_id` list overriding the default targets.
pub const TARGETS_VAR: &str = "SEED_TARGETS";

/// Optional u64 seed for reproducible runs.
pub const RNG_SEED_VAR: &str = "SEED_RNG_SEED";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} environment variable is required")]
    Missing(&'static str),
    #[error("invalid {var}: {reason}")]
    Invalid { var: &'static str, reason: String },
}

/// An account the seeder populates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedTarget {
    /// Human-readable name used in logs and the report.
    pub label: String,
    /// External identity id used for the lookup.
    pub clerk_id: String,
}

impl SeedTarget {
    pub fn new(label: impl Into<String>, clerk_id: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            clerk_id: clerk_id.into(),
        }
    }
}

/// Configuration for a seeding run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedConfig {
    /// Accounts to seed, processed in order.
    pub targets: Vec<SeedTarget>,

    /// Records created per batch.
    pub batch_size: usize,

    /// A batch runs only when the existing count is below this.
    pub threshold: usize,

    /// Fixed RNG seed; `None` draws from the OS.
    pub rng_seed: Option<u64>,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            targets: vec![
                SeedTarget::new("admin", ADMIN_CLERK_ID),
                SeedTarget::new("client", CLIENT_CLERK_ID),
            ],
            batch_size: DEFAULT_BATCH_SIZE,
            threshold: 10,
            rng_seed: None,
        }
    }
}

impl SeedConfig {
    /// Builds a config from the process environment, falling back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Builds a config from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(raw) = lookup(TARGETS_VAR).filter(|v| !v.trim().is_empty()) {
            config.targets = parse_targets(&raw)?;
        }

        if let Some(raw) = lookup(RNG_SEED_VAR).filter(|v| !v.trim().is_empty()) {
            let seed = raw.trim().parse::<u64>().map_err(|e| ConfigError::Invalid {
                var: RNG_SEED_VAR,
                reason: e.to_string(),
            })?;
            config.rng_seed = Some(seed);
        }

        Ok(config)
    }

    pub fn with_targets(mut self, targets: Vec<SeedTarget>) -> Self {
        self.targets = targets;
        self
    }
}

/// Parses `label=clerk_id` pairs separated by commas.
pub fn parse_targets(raw: &str) -> Result<Vec<SeedTarget>, ConfigError> {
    let targets = raw
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| {
            let (label, clerk_id) = entry.split_once('=').ok_or_else(|| ConfigError::Invalid {
                var: TARGETS_VAR,
                reason: format!("expected label=clerk_id, got {entry:?}"),
            })?;
            let (label, clerk_id) = (label.trim(), clerk_id.trim());
            if label.is_empty() || clerk_id.is_empty() {
                return Err(ConfigError::Invalid {
                    var: TARGETS_VAR,
                    reason: format!("empty label or clerk id in {entry:?}"),
                });
            }
            Ok(SeedTarget::new(label, clerk_id))
        })
        .collect::<Result<Vec<_>, _>>()?;

    if targets.is_empty() {
        return Err(ConfigError::Invalid {
            var: TARGETS_VAR,
            reason: "no targets listed".to_string(),
        });
    }

    Ok(targets)
}

/// Reads the required database connection string.
pub fn database_url(lookup: impl Fn(&str) -> Option<String>) -> Result<String, ConfigError> {
    lookup(DATABASE_URL_VAR)
        .filter(|url| !url.trim().is_empty())
        .ok_or(ConfigError::Missing(DATABASE_URL_VAR))
}

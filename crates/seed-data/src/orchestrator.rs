//! Top-level seeding run over the configured accounts.
//!
//! A run resolves every target up front (any lookup failure aborts the run),
//! then walks the users in order. For each user the existing record count is
//! the only idempotency check: a batch runs when the count is below the
//! threshold and is skipped otherwise. Count and creation failures are logged
//! and recorded in the [`SeedReport`]; they never stop the remaining users.
//!
//! Counting and creating are separate statements with no lock between them,
//! so two concurrent runs can both pass the threshold check.

use rand::Rng;
use tracing::{error, info};

use rentals::models::User;

use crate::config::{SeedConfig, SeedTarget};
use crate::db::{SeedError, SeedStore, Seeder};
use crate::report::{BatchOutcome, RecordKind, SeedReport, UserReport};

pub struct SeedRun<S> {
    seeder: Seeder<S>,
    config: SeedConfig,
}

impl<S: SeedStore> SeedRun<S> {
    pub fn new(store: S, config: SeedConfig) -> Self {
        let seeder = Seeder::new(store).with_batch_size(config.batch_size);
        Self { seeder, config }
    }

    pub fn seeder(&self) -> &Seeder<S> {
        &self.seeder
    }

    /// Runs one full pass over the configured targets.
    pub async fn execute(&self, rng: &mut impl Rng) -> Result<SeedReport, SeedError> {
        info!("Starting production user data seeding...");

        let users = self.resolve_targets().await?;
        info!("Found {} production users to seed data for", users.len());

        let mut report = SeedReport::default();
        for (target, user) in self.config.targets.iter().zip(&users) {
            info!(
                label = %target.label,
                user_id = user.id,
                "Seeding data for user: {} ({})",
                user.full_name(),
                user.email
            );

            let work_orders = self.seed_kind(RecordKind::WorkOrders, user, rng).await;

            let complaints = if user.is_tenant() {
                self.seed_kind(RecordKind::Complaints, user, rng).await
            } else {
                info!(
                    "User {} is not a tenant, skipping complaints seeding",
                    user.email
                );
                BatchOutcome::NotApplicable
            };

            report.users.push(UserReport {
                label: target.label.clone(),
                clerk_id: user.clerk_id.clone(),
                user_id: user.id,
                email: user.email.clone(),
                role: user.role,
                work_orders,
                complaints,
            });
        }

        info!(
            created = report.records_created(),
            failures = report.failures(),
            "Production user data seeding completed!"
        );
        Ok(report)
    }

    async fn resolve_targets(&self) -> Result<Vec<User>, SeedError> {
        let mut users = Vec::with_capacity(self.config.targets.len());
        for SeedTarget { label, clerk_id } in &self.config.targets {
            let user = self
                .seeder
                .store()
                .get_user_by_clerk_id(clerk_id)
                .await
                .map_err(|source| SeedError::UserLookup {
                    label: label.clone(),
                    clerk_id: clerk_id.clone(),
                    source,
                })?;
            users.push(user);
        }
        Ok(users)
    }

    async fn seed_kind(&self, kind: RecordKind, user: &User, rng: &mut impl Rng) -> BatchOutcome {
        let existing = match self.seeder.count(kind, user).await {
            Ok(existing) => existing,
            Err(e) => {
                error!("error counting {} for user {}: {}", kind, user.email, e);
                return BatchOutcome::CountFailed {
                    error: e.to_string(),
                };
            }
        };

        if existing >= self.config.threshold {
            info!(
                "User {} already has {} {}, skipping",
                user.email, existing, kind
            );
            return BatchOutcome::Skipped { existing };
        }

        info!(
            "Creating {} for user {} (current: {})",
            kind, user.email, existing
        );
        let result = match kind {
            RecordKind::WorkOrders => self.seeder.seed_work_orders(user, rng).await,
            RecordKind::Complaints => self.seeder.seed_complaints(user, rng).await,
        };

        match result {
            Ok(created) => BatchOutcome::Seeded { existing, created },
            Err(e) => {
                error!("error creating {} for user {}: {}", kind, user.email, e);
                BatchOutcome::Failed {
                    existing,
                    created: e.created(),
                    error: e.to_string(),
                }
            }
        }
    }
}

//! Batch seeding and apartment assignment.

use rand::Rng;
use thiserror::Error;
use tracing::{debug, info};

use rentals::{
    AppError,
    models::{Apartment, UpdateApartmentParams, User},
};

use super::store::SeedStore;
use crate::generators::{ComplaintGenerator, WorkOrderGenerator};
use crate::report::RecordKind;

/// Records created per batch unless overridden.
pub const DEFAULT_BATCH_SIZE: usize = 10;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("error getting {label} user {clerk_id}: {source}")]
    UserLookup {
        label: String,
        clerk_id: String,
        #[source]
        source: AppError,
    },
    #[error("user {clerk_id} has no valid id ({id})")]
    InvalidUser { clerk_id: String, id: i64 },
    #[error("error counting {kind}: {source}")]
    Count {
        kind: RecordKind,
        #[source]
        source: AppError,
    },
    #[error("error creating work order ({created} created before failure): {source}")]
    WorkOrder {
        created: usize,
        #[source]
        source: AppError,
    },
    #[error("error creating complaint ({created} created before failure): {source}")]
    Complaint {
        created: usize,
        #[source]
        source: AppError,
    },
    #[error("error getting random apartment: {0}")]
    ApartmentQuery(#[source] AppError),
    #[error("error updating apartment availability: {0}")]
    ApartmentUpdate(#[source] AppError),
}

impl SeedError {
    /// Records that were persisted before the failure.
    pub fn created(&self) -> usize {
        match self {
            SeedError::WorkOrder { created, .. } | SeedError::Complaint { created, .. } => *created,
            _ => 0,
        }
    }
}

/// Seeder for inserting generated records through a [`SeedStore`].
///
/// Batches are not transactional: a failure leaves the records created so far
/// in place and skips the remaining iterations.
pub struct Seeder<S> {
    store: S,
    batch_size: usize,
    work_orders: WorkOrderGenerator,
    complaints: ComplaintGenerator,
}

impl<S: SeedStore> Seeder<S> {
    /// Creates a new seeder over the given store.
    pub fn new(store: S) -> Self {
        Self {
            store,
            batch_size: DEFAULT_BATCH_SIZE,
            work_orders: WorkOrderGenerator::new(),
            complaints: ComplaintGenerator::new(),
        }
    }

    /// Sets the number of records created per batch.
    pub fn with_batch_size(mut self, size: usize) -> Self {
        self.batch_size = size;
        self
    }

    /// Replaces the work order generator.
    pub fn with_work_order_generator(mut self, generator: WorkOrderGenerator) -> Self {
        self.work_orders = generator;
        self
    }

    pub fn with_complaint_generator(mut self, generator: ComplaintGenerator) -> Self {
        self.complaints = generator;
        self
    }

    /// Returns a reference to the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Counts existing records of `kind` created by `user`.
    pub async fn count(&self, kind: RecordKind, user: &User) -> Result<usize, SeedError> {
        let count = match kind {
            RecordKind::WorkOrders => self
                .store
                .list_work_orders_by_user(user.id)
                .await
                .map(|rows| rows.len()),
            RecordKind::Complaints => self
                .store
                .list_tenant_complaints(user.id)
                .await
                .map(|rows| rows.len()),
        };

        count.map_err(|source| SeedError::Count { kind, source })
    }

    /// Creates one batch of work orders for `user`.
    pub async fn seed_work_orders(
        &self,
        user: &User,
        rng: &mut impl Rng,
    ) -> Result<usize, SeedError> {
        ensure_identity(user)?;

        for created in 0..self.batch_size {
            let params = self.work_orders.generate(user, rng);
            self.store
                .create_work_order(&params)
                .await
                .map_err(|source| SeedError::WorkOrder { created, source })?;
        }

        info!(
            user_id = user.id,
            count = self.batch_size,
            "work orders seeded successfully"
        );
        Ok(self.batch_size)
    }

    /// Creates one batch of complaints for `user`.
    ///
    /// Role gating is the caller's job; this only checks identity.
    pub async fn seed_complaints(
        &self,
        user: &User,
        rng: &mut impl Rng,
    ) -> Result<usize, SeedError> {
        ensure_identity(user)?;

        for created in 0..self.batch_size {
            let params = self.complaints.generate(user, rng);
            self.store
                .create_complaint(&params)
                .await
                .map_err(|source| SeedError::Complaint { created, source })?;
        }

        info!(
            user_id = user.id,
            count = self.batch_size,
            "complaints seeded successfully"
        );
        Ok(self.batch_size)
    }

    /// Marks one randomly chosen available apartment as taken.
    ///
    /// `manager` does not narrow the selection: any available apartment in the
    /// store may be picked. Its id only fills in the management entity when the
    /// chosen row has none, so it must be a valid identity. Returns the updated
    /// apartment, or `None` when nothing is available.
    pub async fn assign_apartment(&self, manager: &User) -> Result<Option<Apartment>, SeedError> {
        ensure_identity(manager)?;

        let candidates = self
            .store
            .random_available_apartments()
            .await
            .map_err(SeedError::ApartmentQuery)?;

        let mut assigned = None;
        for apartment in candidates {
            let management_id = apartment.management_id.unwrap_or(manager.id);

            self.store
                .update_apartment(&UpdateApartmentParams {
                    id: apartment.id,
                    price: apartment.price,
                    management_id,
                    availability: false,
                })
                .await
                .map_err(SeedError::ApartmentUpdate)?;

            info!(
                apartment_id = apartment.id,
                unit_number = apartment.unit_number,
                management_id,
                "apartment marked unavailable"
            );

            assigned = Some(Apartment {
                management_id: Some(management_id),
                availability: false,
                ..apartment
            });
        }

        if assigned.is_none() {
            debug!("no available apartment to assign");
        }

        Ok(assigned)
    }
}

fn ensure_identity(user: &User) -> Result<(), SeedError> {
    if user.id <= 0 {
        return Err(SeedError::InvalidUser {
            clerk_id: user.clerk_id.clone(),
            id: user.id,
        });
    }
    Ok(())
}

//! Query capability used by the seeders.

use async_trait::async_trait;

use rentals::{
    AppError, Database,
    models::{
        Apartment, Complaint, CreateComplaintParams, CreateWorkOrderParams,
        UpdateApartmentParams, User, WorkOrder,
    },
};

/// Persistence operations the seeding routines depend on.
#[async_trait]
pub trait SeedStore: Send + Sync {
    /// Looks up a user by external identity id. Missing users are [`AppError::NotFound`].
    async fn get_user_by_clerk_id(&self, clerk_id: &str) -> Result<User, AppError>;

    async fn create_work_order(
        &self,
        params: &CreateWorkOrderParams,
    ) -> Result<WorkOrder, AppError>;

    async fn list_work_orders_by_user(&self, user_id: i64) -> Result<Vec<WorkOrder>, AppError>;

    async fn create_complaint(
        &self,
        params: &CreateComplaintParams,
    ) -> Result<Complaint, AppError>;

    async fn list_tenant_complaints(&self, user_id: i64) -> Result<Vec<Complaint>, AppError>;

    /// Returns at most one apartment whose availability flag is set, chosen at random.
    async fn random_available_apartments(&self) -> Result<Vec<Apartment>, AppError>;

    async fn update_apartment(&self, params: &UpdateApartmentParams) -> Result<(), AppError>;
}

#[async_trait]
impl SeedStore for Database {
    async fn get_user_by_clerk_id(&self, clerk_id: &str) -> Result<User, AppError> {
        Database::get_user_by_clerk_id(self, clerk_id).await
    }

    async fn create_work_order(
        &self,
        params: &CreateWorkOrderParams,
    ) -> Result<WorkOrder, AppError> {
        Database::create_work_order(self, params).await
    }

    async fn list_work_orders_by_user(&self, user_id: i64) -> Result<Vec<WorkOrder>, AppError> {
        Database::list_work_orders_by_user(self, user_id).await
    }

    async fn create_complaint(
        &self,
        params: &CreateComplaintParams,
    ) -> Result<Complaint, AppError> {
        Database::create_complaint(self, params).await
    }

    async fn list_tenant_complaints(&self, user_id: i64) -> Result<Vec<Complaint>, AppError> {
        Database::list_tenant_complaints(self, user_id).await
    }

    async fn random_available_apartments(&self) -> Result<Vec<Apartment>, AppError> {
        Database::random_available_apartments(self).await
    }

    async fn update_apartment(&self, params: &UpdateApartmentParams) -> Result<(), AppError> {
        Database::update_apartment(self, params).await
    }
}

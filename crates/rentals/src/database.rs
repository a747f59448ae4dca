use crate::errors::AppError;
use crate::models::{
    Apartment, Complaint, CreateComplaintParams, CreateWorkOrderParams, UpdateApartmentParams,
    User, WorkOrder,
};
use sqlx::PgPool;

#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn get_user_by_clerk_id(&self, clerk_id: &str) -> Result<User, AppError> {
        let user: Option<User> = sqlx::query_as(
            r#"
            SELECT id, clerk_id, first_name, last_name, email, phone, role, status, created_at
            FROM users
            WHERE clerk_id = $1
            LIMIT 1
            "#,
        )
        .bind(clerk_id)
        .fetch_optional(&self.pool)
        .await?;

        user.ok_or(AppError::NotFound)
    }

    pub async fn create_work_order(
        &self,
        params: &CreateWorkOrderParams,
    ) -> Result<WorkOrder, AppError> {
        if params.unit_number < 1 {
            return Err(AppError::InvalidInput(format!(
                "unit number must be positive, got {}",
                params.unit_number
            )));
        }

        let work_order = sqlx::query_as(
            r#"
            INSERT INTO work_orders (created_by, category, title, description, unit_number)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, created_by, category, title, description, unit_number, status, created_at
            "#,
        )
        .bind(params.created_by)
        .bind(params.category)
        .bind(&params.title)
        .bind(&params.description)
        .bind(params.unit_number)
        .fetch_one(&self.pool)
        .await?;

        Ok(work_order)
    }

    pub async fn list_work_orders_by_user(&self, user_id: i64) -> Result<Vec<WorkOrder>, AppError> {
        let work_orders = sqlx::query_as(
            r#"
            SELECT id, created_by, category, title, description, unit_number, status, created_at
            FROM work_orders
            WHERE created_by = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(work_orders)
    }

    pub async fn create_complaint(
        &self,
        params: &CreateComplaintParams,
    ) -> Result<Complaint, AppError> {
        let complaint = sqlx::query_as(
            r#"
            INSERT INTO complaints (created_by, category, title, description, unit_number)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, created_by, category, title, description, unit_number, status, created_at
            "#,
        )
        .bind(params.created_by)
        .bind(params.category)
        .bind(&params.title)
        .bind(&params.description)
        .bind(params.unit_number)
        .fetch_one(&self.pool)
        .await?;

        Ok(complaint)
    }

    pub async fn list_tenant_complaints(&self, user_id: i64) -> Result<Vec<Complaint>, AppError> {
        let complaints = sqlx::query_as(
            r#"
            SELECT id, created_by, category, title, description, unit_number, status, created_at
            FROM complaints
            WHERE created_by = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(complaints)
    }

    /// Picks at most one available apartment at random.
    ///
    /// Nothing locks the row between this select and a later update, so two
    /// concurrent callers can receive the same apartment.
    pub async fn random_available_apartments(&self) -> Result<Vec<Apartment>, AppError> {
        let apartments = sqlx::query_as(
            r#"
            SELECT id, unit_number, price, size, management_id, lease_id, availability
            FROM apartments
            WHERE availability = true
            ORDER BY RANDOM()
            LIMIT 1
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(apartments)
    }

    pub async fn update_apartment(&self, params: &UpdateApartmentParams) -> Result<(), AppError> {
        let result = sqlx::query(
            r#"
            UPDATE apartments
            SET price = $2, management_id = $3, availability = $4, updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(params.id)
        .bind(params.price)
        .bind(params.management_id)
        .bind(params.availability)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound);
        }

        Ok(())
    }
}

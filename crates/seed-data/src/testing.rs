//! In-memory [`SeedStore`] with failure injection for unit tests.

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use async_trait::async_trait;
use rust_decimal::Decimal;
use time::OffsetDateTime;

use rentals::{
    AppError,
    models::{
        AccountStatus, Apartment, Complaint, ComplaintCategory, CreateComplaintParams,
        CreateWorkOrderParams, Role, Status, UpdateApartmentParams, User, WorkCategory, WorkOrder,
    },
};

use crate::db::SeedStore;

#[derive(Default)]
struct State {
    next_id: i64,
    users: Vec<User>,
    work_orders: Vec<WorkOrder>,
    complaints: Vec<Complaint>,
    apartments: Vec<Apartment>,
    apartment_updates: usize,
    work_order_limits: HashMap<i64, usize>,
    failing_counts: HashSet<i64>,
    failing_apartment_updates: bool,
}

impl State {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }
}

#[derive(Default)]
pub struct MemoryStore {
    state: Mutex<State>,
}

fn injected() -> AppError {
    AppError::Database(sqlx::Error::PoolTimedOut)
}

impl MemoryStore {
    pub fn with_users(users: Vec<User>) -> Self {
        let store = Self::default();
        store.state.lock().unwrap().users = users;
        store
    }

    pub fn add_apartment(&self, apartment: Apartment) {
        self.state.lock().unwrap().apartments.push(apartment);
    }

    /// Fails work order creation for `user_id` once it owns `limit` rows.
    pub fn fail_work_orders_after(&self, user_id: i64, limit: usize) {
        self.state
            .lock()
            .unwrap()
            .work_order_limits
            .insert(user_id, limit);
    }

    /// Makes both list queries fail for `user_id`.
    pub fn fail_counts_for(&self, user_id: i64) {
        self.state.lock().unwrap().failing_counts.insert(user_id);
    }

    pub fn fail_apartment_updates(&self) {
        self.state.lock().unwrap().failing_apartment_updates = true;
    }

    pub fn preload_work_orders(&self, user_id: i64, count: usize) {
        let mut state = self.state.lock().unwrap();
        for _ in 0..count {
            let id = state.next_id();
            state.work_orders.push(WorkOrder {
                id,
                created_by: user_id,
                category: WorkCategory::Other,
                title: "Existing".into(),
                description: "Existing work order".into(),
                unit_number: 1,
                status: Status::Open,
                created_at: OffsetDateTime::now_utc(),
            });
        }
    }

    pub fn preload_complaints(&self, user_id: i64, count: usize) {
        let mut state = self.state.lock().unwrap();
        for _ in 0..count {
            let id = state.next_id();
            state.complaints.push(Complaint {
                id,
                created_by: user_id,
                category: ComplaintCategory::Other,
                title: "Existing".into(),
                description: "Existing complaint".into(),
                unit_number: None,
                status: Status::Open,
                created_at: OffsetDateTime::now_utc(),
            });
        }
    }

    pub fn work_orders_for(&self, user_id: i64) -> Vec<WorkOrder> {
        let state = self.state.lock().unwrap();
        state
            .work_orders
            .iter()
            .filter(|w| w.created_by == user_id)
            .cloned()
            .collect()
    }

    pub fn complaints_for(&self, user_id: i64) -> Vec<Complaint> {
        let state = self.state.lock().unwrap();
        state
            .complaints
            .iter()
            .filter(|c| c.created_by == user_id)
            .cloned()
            .collect()
    }

    pub fn apartment(&self, id: i64) -> Option<Apartment> {
        let state = self.state.lock().unwrap();
        state.apartments.iter().find(|a| a.id == id).cloned()
    }

    pub fn apartment_updates(&self) -> usize {
        self.state.lock().unwrap().apartment_updates
    }
}

#[async_trait]
impl SeedStore for MemoryStore {
    async fn get_user_by_clerk_id(&self, clerk_id: &str) -> Result<User, AppError> {
        let state = self.state.lock().unwrap();
        state
            .users
            .iter()
            .find(|u| u.clerk_id == clerk_id)
            .cloned()
            .ok_or(AppError::NotFound)
    }

    async fn create_work_order(
        &self,
        params: &CreateWorkOrderParams,
    ) -> Result<WorkOrder, AppError> {
        let mut state = self.state.lock().unwrap();
        if let Some(limit) = state.work_order_limits.get(&params.created_by).copied() {
            let existing = state
                .work_orders
                .iter()
                .filter(|w| w.created_by == params.created_by)
                .count();
            if existing >= limit {
                return Err(injected());
            }
        }

        let id = state.next_id();
        let work_order = WorkOrder {
            id,
            created_by: params.created_by,
            category: params.category,
            title: params.title.clone(),
            description: params.description.clone(),
            unit_number: params.unit_number,
            status: Status::Open,
            created_at: OffsetDateTime::now_utc(),
        };
        state.work_orders.push(work_order.clone());
        Ok(work_order)
    }

    async fn list_work_orders_by_user(&self, user_id: i64) -> Result<Vec<WorkOrder>, AppError> {
        if self.state.lock().unwrap().failing_counts.contains(&user_id) {
            return Err(injected());
        }
        Ok(self.work_orders_for(user_id))
    }

    async fn create_complaint(
        &self,
        params: &CreateComplaintParams,
    ) -> Result<Complaint, AppError> {
        let mut state = self.state.lock().unwrap();
        let id = state.next_id();
        let complaint = Complaint {
            id,
            created_by: params.created_by,
            category: params.category,
            title: params.title.clone(),
            description: params.description.clone(),
            unit_number: params.unit_number,
            status: Status::Open,
            created_at: OffsetDateTime::now_utc(),
        };
        state.complaints.push(complaint.clone());
        Ok(complaint)
    }

    async fn list_tenant_complaints(&self, user_id: i64) -> Result<Vec<Complaint>, AppError> {
        if self.state.lock().unwrap().failing_counts.contains(&user_id) {
            return Err(injected());
        }
        Ok(self.complaints_for(user_id))
    }

    async fn random_available_apartments(&self) -> Result<Vec<Apartment>, AppError> {
        let state = self.state.lock().unwrap();
        Ok(state
            .apartments
            .iter()
            .filter(|a| a.availability)
            .take(1)
            .cloned()
            .collect())
    }

    async fn update_apartment(&self, params: &UpdateApartmentParams) -> Result<(), AppError> {
        let mut state = self.state.lock().unwrap();
        if state.failing_apartment_updates {
            return Err(injected());
        }

        let apartment = state
            .apartments
            .iter_mut()
            .find(|a| a.id == params.id)
            .ok_or(AppError::NotFound)?;
        apartment.price = params.price;
        apartment.management_id = Some(params.management_id);
        apartment.availability = params.availability;
        state.apartment_updates += 1;
        Ok(())
    }
}

fn user(id: i64, clerk_id: &str, role: Role) -> User {
    User {
        id,
        clerk_id: clerk_id.to_string(),
        first_name: "Test".into(),
        last_name: format!("User{id}"),
        email: format!("user{id}@example.com"),
        phone: None,
        role,
        status: AccountStatus::Active,
        created_at: OffsetDateTime::now_utc(),
    }
}

pub fn tenant(id: i64) -> User {
    user(id, &format!("user_tenant_{id}"), Role::Tenant)
}

pub fn admin(id: i64) -> User {
    user(id, &format!("user_admin_{id}"), Role::Admin)
}

pub fn tenant_with_clerk(id: i64, clerk_id: &str) -> User {
    user(id, clerk_id, Role::Tenant)
}

pub fn admin_with_clerk(id: i64, clerk_id: &str) -> User {
    user(id, clerk_id, Role::Admin)
}

pub fn apartment(id: i64, management_id: Option<i64>) -> Apartment {
    Apartment {
        id,
        unit_number: id,
        price: Decimal::new(185_000, 2),
        size: 850,
        management_id,
        lease_id: None,
        availability: true,
    }
}

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "role", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Tenant,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Tenant => "tenant",
            Role::Admin => "admin",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "account_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum AccountStatus {
    Active,
    Inactive,
}

/// Work order trade category, matching the `work_category` database enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "work_category", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum WorkCategory {
    Plumbing,
    Electric,
    Carpentry,
    Hvac,
    Other,
}

impl WorkCategory {
    pub const ALL: [WorkCategory; 5] = [
        WorkCategory::Plumbing,
        WorkCategory::Electric,
        WorkCategory::Carpentry,
        WorkCategory::Hvac,
        WorkCategory::Other,
    ];

    /// Returns the database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkCategory::Plumbing => "plumbing",
            WorkCategory::Electric => "electric",
            WorkCategory::Carpentry => "carpentry",
            WorkCategory::Hvac => "hvac",
            WorkCategory::Other => "other",
        }
    }
}

/// Complaint category, matching the `complaint_category` database enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "complaint_category", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ComplaintCategory {
    Noise,
    Maintenance,
    Other,
}

impl ComplaintCategory {
    pub const ALL: [ComplaintCategory; 3] = [
        ComplaintCategory::Noise,
        ComplaintCategory::Maintenance,
        ComplaintCategory::Other,
    ];

    /// Returns the database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            ComplaintCategory::Noise => "noise",
            ComplaintCategory::Maintenance => "maintenance",
            ComplaintCategory::Other => "other",
        }
    }
}

/// Lifecycle status shared by work orders and complaints.
///
/// New records take the database default, so seeding never sets this directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Open,
    InProgress,
    Resolved,
    Closed,
}

impl Status {
    pub const ALL: [Status; 4] = [
        Status::Closed,
        Status::InProgress,
        Status::Open,
        Status::Resolved,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Open => "open",
            Status::InProgress => "in_progress",
            Status::Resolved => "resolved",
            Status::Closed => "closed",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i64,
    pub clerk_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub role: Role,
    pub status: AccountStatus,
    pub created_at: OffsetDateTime,
}

impl User {
    pub fn is_tenant(&self) -> bool {
        self.role == Role::Tenant
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct WorkOrder {
    pub id: i64,
    pub created_by: i64,
    pub category: WorkCategory,
    pub title: String,
    pub description: String,
    pub unit_number: i64,
    pub status: Status,
    pub created_at: OffsetDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Complaint {
    pub id: i64,
    pub created_by: i64,
    pub category: ComplaintCategory,
    pub title: String,
    pub description: String,
    pub unit_number: Option<i64>,
    pub status: Status,
    pub created_at: OffsetDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Apartment {
    pub id: i64,
    pub unit_number: i64,
    pub price: Decimal,
    pub size: i16,
    pub management_id: Option<i64>,
    pub lease_id: Option<i64>,
    pub availability: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateWorkOrderParams {
    pub created_by: i64,
    pub category: WorkCategory,
    pub title: String,
    pub description: String,
    pub unit_number: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateComplaintParams {
    pub created_by: i64,
    pub category: ComplaintCategory,
    pub title: String,
    pub description: String,
    pub unit_number: Option<i64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateApartmentParams {
    pub id: i64,
    pub price: Decimal,
    pub management_id: i64,
    pub availability: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enum_labels_match_database() {
        let work: Vec<&str> = WorkCategory::ALL.iter().map(|c| c.as_str()).collect();
        assert_eq!(
            work,
            ["plumbing", "electric", "carpentry", "hvac", "other"]
        );

        let complaint: Vec<&str> = ComplaintCategory::ALL.iter().map(|c| c.as_str()).collect();
        assert_eq!(complaint, ["noise", "maintenance", "other"]);

        assert_eq!(Status::InProgress.as_str(), "in_progress");
        assert_eq!(Status::ALL.len(), 4);
        assert_eq!(Role::Tenant.as_str(), "tenant");
    }

    #[test]
    fn test_user_helpers() {
        let user = User {
            id: 1,
            clerk_id: "user_1".into(),
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            email: "ada@example.com".into(),
            phone: None,
            role: Role::Tenant,
            status: AccountStatus::Active,
            created_at: OffsetDateTime::now_utc(),
        };

        assert!(user.is_tenant());
        assert_eq!(user.full_name(), "Ada Lovelace");
    }
}

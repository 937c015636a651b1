use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt::{Display, Formatter, Result as FmtResult};
use utoipa::ToSchema;
use validator::Validate;

/// Subscription plan tier an organization is on.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, ToSchema, sqlx::Type)]
pub enum OrganizationPlan {
    Enterprise,
    Business,
    Starter,
}

impl Display for OrganizationPlan {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            OrganizationPlan::Enterprise => write!(f, "Enterprise"),
            OrganizationPlan::Business => write!(f, "Business"),
            OrganizationPlan::Starter => write!(f, "Starter"),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, ToSchema, sqlx::Type)]
pub enum OrganizationStatus {
    Active,
    Inactive,
}

impl Display for OrganizationStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            OrganizationStatus::Active => write!(f, "Active"),
            OrganizationStatus::Inactive => write!(f, "Inactive"),
        }
    }
}

/// Organization entity. `domain` is unique at the storage level; `users` is
/// a denormalized member count, not a relation.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    pub id: String,
    pub name: String,
    pub domain: String,
    pub plan: OrganizationPlan,
    pub users: i64,
    pub status: OrganizationStatus,
    pub created_at: String,
}

#[derive(Debug, Clone, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrganizationRequest {
    #[validate(length(min = 2, message = "Name must be at least 2 characters"))]
    pub name: String,
    #[validate(length(min = 3, message = "Domain must be at least 3 characters"))]
    pub domain: String,
    pub plan: OrganizationPlan,
    #[validate(range(min = 1, message = "Users must be a positive integer"))]
    pub users: i64,
    pub status: OrganizationStatus,
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOrganizationRequest {
    #[validate(length(min = 2, message = "Name must be at least 2 characters"))]
    pub name: Option<String>,
    #[validate(length(min = 3, message = "Domain must be at least 3 characters"))]
    pub domain: Option<String>,
    pub plan: Option<OrganizationPlan>,
    #[validate(range(min = 1, message = "Users must be a positive integer"))]
    pub users: Option<i64>,
    pub status: Option<OrganizationStatus>,
}

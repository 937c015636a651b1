use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use super::user::{UserRole, UserStatus};

/// Per-organization membership record, distinct from the global user list.
/// `organization_id` references the organizations table.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationMember {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub department: String,
    pub status: UserStatus,
    pub last_active: String,
    pub avatar: Option<String>,
    pub organization_id: String,
}

#[derive(Debug, Clone, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrganizationMemberRequest {
    #[validate(length(min = 2, message = "Name must be at least 2 characters"))]
    pub name: String,
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    pub role: UserRole,
    pub department: String,
    pub status: UserStatus,
    pub avatar: Option<String>,
    #[validate(length(min = 1, message = "Organization is required"))]
    pub organization_id: String,
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOrganizationMemberRequest {
    #[validate(length(min = 2, message = "Name must be at least 2 characters"))]
    pub name: Option<String>,
    #[validate(email(message = "Invalid email address"))]
    pub email: Option<String>,
    pub role: Option<UserRole>,
    pub department: Option<String>,
    pub status: Option<UserStatus>,
    pub avatar: Option<String>,
    #[validate(length(min = 1, message = "Organization is required"))]
    pub organization_id: Option<String>,
}

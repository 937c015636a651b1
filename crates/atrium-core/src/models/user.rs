use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt::{Display, Formatter, Result as FmtResult};
use utoipa::ToSchema;
use validator::Validate;

/// User role
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, ToSchema, sqlx::Type)]
pub enum UserRole {
    Admin,
    Manager,
    User,
}

impl Display for UserRole {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            UserRole::Admin => write!(f, "Admin"),
            UserRole::Manager => write!(f, "Manager"),
            UserRole::User => write!(f, "User"),
        }
    }
}

/// User account status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, ToSchema, sqlx::Type)]
pub enum UserStatus {
    Active,
    Inactive,
    Suspended,
}

impl Display for UserStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            UserStatus::Active => write!(f, "Active"),
            UserStatus::Inactive => write!(f, "Inactive"),
            UserStatus::Suspended => write!(f, "Suspended"),
        }
    }
}

/// User entity. `email` is unique at the storage level; `organization` is a
/// display name, not a foreign key.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub organization: String,
    pub status: UserStatus,
    pub last_active: String,
    pub avatar: Option<String>,
    pub created_at: String,
}

/// Full create contract for users.
#[derive(Debug, Clone, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    #[validate(length(min = 2, message = "Name must be at least 2 characters"))]
    pub name: String,
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    pub role: UserRole,
    #[validate(length(min = 2, message = "Organization must be at least 2 characters"))]
    pub organization: String,
    pub status: UserStatus,
    pub avatar: Option<String>,
}

/// Partial update contract for users; only supplied fields are checked and
/// only supplied fields are written.
#[derive(Debug, Clone, Default, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    #[validate(length(min = 2, message = "Name must be at least 2 characters"))]
    pub name: Option<String>,
    #[validate(email(message = "Invalid email address"))]
    pub email: Option<String>,
    pub role: Option<UserRole>,
    #[validate(length(min = 2, message = "Organization must be at least 2 characters"))]
    pub organization: Option<String>,
    pub status: Option<UserStatus>,
    pub avatar: Option<String>,
}

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt::{Display, Formatter, Result as FmtResult};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, ToSchema, sqlx::Type)]
pub enum AuditStatus {
    Success,
    Failed,
}

impl Display for AuditStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            AuditStatus::Success => write!(f, "Success"),
            AuditStatus::Failed => write!(f, "Failed"),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, ToSchema, sqlx::Type)]
pub enum AuditSeverity {
    Info,
    Warning,
    Critical,
}

impl Display for AuditSeverity {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            AuditSeverity::Info => write!(f, "Info"),
            AuditSeverity::Warning => write!(f, "Warning"),
            AuditSeverity::Critical => write!(f, "Critical"),
        }
    }
}

/// Audit log entry. Append-only: there is no update contract for this
/// entity, only create and administrative delete.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AuditLog {
    pub id: String,
    pub user_id: String,
    pub user_name: String,
    pub user_email: String,
    pub user_avatar: Option<String>,
    pub action: String,
    pub resource: String,
    pub ip_address: String,
    pub timestamp: String,
    pub status: AuditStatus,
    pub severity: AuditSeverity,
}

#[derive(Debug, Clone, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateAuditLogRequest {
    pub user_id: String,
    pub user_name: String,
    #[validate(email(message = "Invalid email address"))]
    pub user_email: String,
    pub user_avatar: Option<String>,
    pub action: String,
    pub resource: String,
    pub ip_address: String,
    pub timestamp: String,
    pub status: AuditStatus,
    pub severity: AuditSeverity,
}

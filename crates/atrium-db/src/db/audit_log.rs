use atrium_core::models::{AuditLog, CreateAuditLogRequest};
use atrium_core::{AppError, PageQuery, Paginated};
use sqlx::SqlitePool;
use uuid::Uuid;
use validator::Validate;

use super::crud::{self, Filter};

/// Repository for audit log entries. The table is append-only from the
/// application's perspective: there is no update path, only create and
/// administrative delete.
#[derive(Clone)]
pub struct AuditLogRepository {
    pool: SqlitePool,
}

impl AuditLogRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// List audit logs, searched by action, optionally narrowed by severity
    /// and status.
    pub async fn list(
        &self,
        query: &PageQuery,
        severity: Option<&str>,
        status: Option<&str>,
    ) -> Result<Paginated<AuditLog>, AppError> {
        let filters = [
            Filter::new("severity", severity),
            Filter::new("status", status),
        ];
        crud::list_page(&self.pool, "audit_logs", "action", query, &filters).await
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Option<AuditLog>, AppError> {
        crud::fetch_by_id(&self.pool, "audit_logs", id).await
    }

    pub async fn create(&self, input: CreateAuditLogRequest) -> Result<AuditLog, AppError> {
        input.validate()?;

        let id = Uuid::new_v4().to_string();

        sqlx::query(
            r#"
            INSERT INTO audit_logs (id, user_id, user_name, user_email, user_avatar, action, resource, ip_address, timestamp, status, severity)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&id)
        .bind(&input.user_id)
        .bind(&input.user_name)
        .bind(&input.user_email)
        .bind(&input.user_avatar)
        .bind(&input.action)
        .bind(&input.resource)
        .bind(&input.ip_address)
        .bind(&input.timestamp)
        .bind(input.status.to_string())
        .bind(input.severity.to_string())
        .execute(&self.pool)
        .await?;

        self.get_by_id(&id)
            .await?
            .ok_or_else(|| AppError::Internal("Failed to load created audit log".to_string()))
    }

    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        crud::delete_by_id(&self.pool, "audit_logs", id).await
    }
}

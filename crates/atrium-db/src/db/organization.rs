use atrium_core::models::{CreateOrganizationRequest, Organization, UpdateOrganizationRequest};
use atrium_core::{AppError, PageQuery, Paginated};
use sqlx::SqlitePool;
use uuid::Uuid;
use validator::Validate;

use super::crud::{self, Filter, SqlValue};

/// Display format for organization/team creation dates, e.g. "Jan 15, 2023".
pub(crate) const DISPLAY_DATE_FORMAT: &str = "%b %-d, %Y";

#[derive(Clone)]
pub struct OrganizationRepository {
    pool: SqlitePool,
}

impl OrganizationRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// List organizations, searched by name, optionally narrowed by plan
    /// and status.
    pub async fn list(
        &self,
        query: &PageQuery,
        plan: Option<&str>,
        status: Option<&str>,
    ) -> Result<Paginated<Organization>, AppError> {
        let filters = [Filter::new("plan", plan), Filter::new("status", status)];
        crud::list_page(&self.pool, "organizations", "name", query, &filters).await
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Option<Organization>, AppError> {
        crud::fetch_by_id(&self.pool, "organizations", id).await
    }

    pub async fn create(
        &self,
        input: CreateOrganizationRequest,
    ) -> Result<Organization, AppError> {
        input.validate()?;

        let id = Uuid::new_v4().to_string();
        let created_at = chrono::Utc::now().format(DISPLAY_DATE_FORMAT).to_string();

        sqlx::query(
            r#"
            INSERT INTO organizations (id, name, domain, plan, users, status, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&id)
        .bind(&input.name)
        .bind(&input.domain)
        .bind(input.plan.to_string())
        .bind(input.users)
        .bind(input.status.to_string())
        .bind(&created_at)
        .execute(&self.pool)
        .await?;

        tracing::info!(organization_id = %id, "Created organization");
        self.get_by_id(&id)
            .await?
            .ok_or_else(|| AppError::Internal("Failed to load created organization".to_string()))
    }

    pub async fn update(
        &self,
        id: &str,
        input: UpdateOrganizationRequest,
    ) -> Result<Option<Organization>, AppError> {
        input.validate()?;

        let mut sets = Vec::new();
        if let Some(v) = input.name {
            sets.push(("name", SqlValue::Text(v)));
        }
        if let Some(v) = input.domain {
            sets.push(("domain", SqlValue::Text(v)));
        }
        if let Some(v) = input.plan {
            sets.push(("plan", SqlValue::Text(v.to_string())));
        }
        if let Some(v) = input.users {
            sets.push(("users", SqlValue::Int(v)));
        }
        if let Some(v) = input.status {
            sets.push(("status", SqlValue::Text(v.to_string())));
        }

        crud::update_by_id(&self.pool, "organizations", id, sets).await?;
        self.get_by_id(id).await
    }

    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        crud::delete_by_id(&self.pool, "organizations", id).await
    }
}

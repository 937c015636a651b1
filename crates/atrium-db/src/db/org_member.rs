use atrium_core::models::{
    CreateOrganizationMemberRequest, OrganizationMember, UpdateOrganizationMemberRequest,
};
use atrium_core::{AppError, PageQuery, Paginated};
use sqlx::SqlitePool;
use uuid::Uuid;
use validator::Validate;

use super::crud::{self, Filter, SqlValue};

#[derive(Clone)]
pub struct OrganizationMemberRepository {
    pool: SqlitePool,
}

impl OrganizationMemberRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// List members, searched by name, optionally narrowed by role,
    /// department, status, and owning organization.
    pub async fn list(
        &self,
        query: &PageQuery,
        role: Option<&str>,
        department: Option<&str>,
        status: Option<&str>,
        organization_id: Option<&str>,
    ) -> Result<Paginated<OrganizationMember>, AppError> {
        let filters = [
            Filter::new("role", role),
            Filter::new("department", department),
            Filter::new("status", status),
            Filter::new("organization_id", organization_id),
        ];
        crud::list_page(&self.pool, "organization_members", "name", query, &filters).await
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Option<OrganizationMember>, AppError> {
        crud::fetch_by_id(&self.pool, "organization_members", id).await
    }

    pub async fn create(
        &self,
        input: CreateOrganizationMemberRequest,
    ) -> Result<OrganizationMember, AppError> {
        input.validate()?;

        let id = Uuid::new_v4().to_string();

        sqlx::query(
            r#"
            INSERT INTO organization_members (id, name, email, role, department, status, last_active, avatar, organization_id)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&id)
        .bind(&input.name)
        .bind(&input.email)
        .bind(input.role.to_string())
        .bind(&input.department)
        .bind(input.status.to_string())
        .bind("Just now")
        .bind(&input.avatar)
        .bind(&input.organization_id)
        .execute(&self.pool)
        .await?;

        tracing::info!(member_id = %id, organization_id = %input.organization_id, "Created organization member");
        self.get_by_id(&id)
            .await?
            .ok_or_else(|| AppError::Internal("Failed to load created member".to_string()))
    }

    pub async fn update(
        &self,
        id: &str,
        input: UpdateOrganizationMemberRequest,
    ) -> Result<Option<OrganizationMember>, AppError> {
        input.validate()?;

        let mut sets = Vec::new();
        if let Some(v) = input.name {
            sets.push(("name", SqlValue::Text(v)));
        }
        if let Some(v) = input.email {
            sets.push(("email", SqlValue::Text(v)));
        }
        if let Some(v) = input.role {
            sets.push(("role", SqlValue::Text(v.to_string())));
        }
        if let Some(v) = input.department {
            sets.push(("department", SqlValue::Text(v)));
        }
        if let Some(v) = input.status {
            sets.push(("status", SqlValue::Text(v.to_string())));
        }
        if let Some(v) = input.avatar {
            sets.push(("avatar", SqlValue::Text(v)));
        }
        if let Some(v) = input.organization_id {
            sets.push(("organization_id", SqlValue::Text(v)));
        }

        crud::update_by_id(&self.pool, "organization_members", id, sets).await?;
        self.get_by_id(id).await
    }

    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        crud::delete_by_id(&self.pool, "organization_members", id).await
    }
}

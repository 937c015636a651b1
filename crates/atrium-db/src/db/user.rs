use atrium_core::models::{CreateUserRequest, UpdateUserRequest, User};
use atrium_core::{AppError, PageQuery, Paginated};
use sqlx::SqlitePool;
use uuid::Uuid;
use validator::Validate;

use super::crud::{self, Filter, SqlValue};

#[derive(Clone)]
pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// List users, searched by name, optionally narrowed by role and status.
    pub async fn list(
        &self,
        query: &PageQuery,
        role: Option<&str>,
        status: Option<&str>,
    ) -> Result<Paginated<User>, AppError> {
        let filters = [Filter::new("role", role), Filter::new("status", status)];
        crud::list_page(&self.pool, "users", "name", query, &filters).await
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Option<User>, AppError> {
        crud::fetch_by_id(&self.pool, "users", id).await
    }

    /// Validate, assign a generated id and computed defaults, persist, and
    /// return the stored record.
    pub async fn create(&self, input: CreateUserRequest) -> Result<User, AppError> {
        input.validate()?;

        let id = Uuid::new_v4().to_string();
        let created_at = chrono::Utc::now().to_rfc3339();

        sqlx::query(
            r#"
            INSERT INTO users (id, name, email, role, organization, status, last_active, avatar, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&id)
        .bind(&input.name)
        .bind(&input.email)
        .bind(input.role.to_string())
        .bind(&input.organization)
        .bind(input.status.to_string())
        .bind("Just now")
        .bind(&input.avatar)
        .bind(&created_at)
        .execute(&self.pool)
        .await?;

        tracing::info!(user_id = %id, "Created user");
        self.get_by_id(&id)
            .await?
            .ok_or_else(|| AppError::Internal("Failed to load created user".to_string()))
    }

    /// Apply only the supplied fields, then return the re-fetched row.
    pub async fn update(
        &self,
        id: &str,
        input: UpdateUserRequest,
    ) -> Result<Option<User>, AppError> {
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
        if let Some(v) = input.organization {
            sets.push(("organization", SqlValue::Text(v)));
        }
        if let Some(v) = input.status {
            sets.push(("status", SqlValue::Text(v.to_string())));
        }
        if let Some(v) = input.avatar {
            sets.push(("avatar", SqlValue::Text(v)));
        }

        crud::update_by_id(&self.pool, "users", id, sets).await?;
        self.get_by_id(id).await
    }

    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        crud::delete_by_id(&self.pool, "users", id).await
    }
}

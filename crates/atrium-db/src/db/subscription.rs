use atrium_core::models::{CreateSubscriptionRequest, Subscription, UpdateSubscriptionRequest};
use atrium_core::{AppError, PageQuery, Paginated};
use sqlx::SqlitePool;
use uuid::Uuid;
use validator::Validate;

use super::crud::{self, Filter, SqlValue};

#[derive(Clone)]
pub struct SubscriptionRepository {
    pool: SqlitePool,
}

impl SubscriptionRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// List subscriptions, searched by organization name, optionally
    /// narrowed by plan and status.
    pub async fn list(
        &self,
        query: &PageQuery,
        plan: Option<&str>,
        status: Option<&str>,
    ) -> Result<Paginated<Subscription>, AppError> {
        let filters = [Filter::new("plan", plan), Filter::new("status", status)];
        crud::list_page(&self.pool, "subscriptions", "organization", query, &filters).await
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Option<Subscription>, AppError> {
        crud::fetch_by_id(&self.pool, "subscriptions", id).await
    }

    pub async fn create(
        &self,
        input: CreateSubscriptionRequest,
    ) -> Result<Subscription, AppError> {
        input.validate()?;

        let id = Uuid::new_v4().to_string();

        sqlx::query(
            r#"
            INSERT INTO subscriptions (id, organization, plan, status, amount, billing_cycle, next_billing, payment_method)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&id)
        .bind(&input.organization)
        .bind(input.plan.to_string())
        .bind(input.status.to_string())
        .bind(&input.amount)
        .bind(&input.billing_cycle)
        .bind(&input.next_billing)
        .bind(&input.payment_method)
        .execute(&self.pool)
        .await?;

        tracing::info!(subscription_id = %id, "Created subscription");
        self.get_by_id(&id)
            .await?
            .ok_or_else(|| AppError::Internal("Failed to load created subscription".to_string()))
    }

    pub async fn update(
        &self,
        id: &str,
        input: UpdateSubscriptionRequest,
    ) -> Result<Option<Subscription>, AppError> {
        input.validate()?;

        let mut sets = Vec::new();
        if let Some(v) = input.organization {
            sets.push(("organization", SqlValue::Text(v)));
        }
        if let Some(v) = input.plan {
            sets.push(("plan", SqlValue::Text(v.to_string())));
        }
        if let Some(v) = input.status {
            sets.push(("status", SqlValue::Text(v.to_string())));
        }
        if let Some(v) = input.amount {
            sets.push(("amount", SqlValue::Text(v)));
        }
        if let Some(v) = input.billing_cycle {
            sets.push(("billing_cycle", SqlValue::Text(v)));
        }
        if let Some(v) = input.next_billing {
            sets.push(("next_billing", SqlValue::Text(v)));
        }
        if let Some(v) = input.payment_method {
            sets.push(("payment_method", SqlValue::Text(v)));
        }

        crud::update_by_id(&self.pool, "subscriptions", id, sets).await?;
        self.get_by_id(id).await
    }

    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        crud::delete_by_id(&self.pool, "subscriptions", id).await
    }
}

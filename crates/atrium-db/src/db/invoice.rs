use atrium_core::models::{CreateInvoiceRequest, Invoice, UpdateInvoiceRequest};
use atrium_core::{AppError, PageQuery, Paginated};
use rand::Rng;
use sqlx::SqlitePool;
use validator::Validate;

use super::crud::{self, Filter, SqlValue};

#[derive(Clone)]
pub struct InvoiceRepository {
    pool: SqlitePool,
}

impl InvoiceRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// List invoices, searched by organization name, optionally narrowed by
    /// status.
    pub async fn list(
        &self,
        query: &PageQuery,
        status: Option<&str>,
    ) -> Result<Paginated<Invoice>, AppError> {
        let filters = [Filter::new("status", status)];
        crud::list_page(&self.pool, "invoices", "organization", query, &filters).await
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Option<Invoice>, AppError> {
        crud::fetch_by_id(&self.pool, "invoices", id).await
    }

    /// Create an invoice under a generated human-readable `INV-###` code.
    pub async fn create(&self, input: CreateInvoiceRequest) -> Result<Invoice, AppError> {
        input.validate()?;

        let id = format!("INV-{:03}", rand::rng().random_range(0..1000));

        sqlx::query(
            r#"
            INSERT INTO invoices (id, organization, amount, status, date)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(&id)
        .bind(&input.organization)
        .bind(&input.amount)
        .bind(input.status.to_string())
        .bind(&input.date)
        .execute(&self.pool)
        .await?;

        tracing::info!(invoice_id = %id, "Created invoice");
        self.get_by_id(&id)
            .await?
            .ok_or_else(|| AppError::Internal("Failed to load created invoice".to_string()))
    }

    pub async fn update(
        &self,
        id: &str,
        input: UpdateInvoiceRequest,
    ) -> Result<Option<Invoice>, AppError> {
        input.validate()?;

        let mut sets = Vec::new();
        if let Some(v) = input.organization {
            sets.push(("organization", SqlValue::Text(v)));
        }
        if let Some(v) = input.amount {
            sets.push(("amount", SqlValue::Text(v)));
        }
        if let Some(v) = input.status {
            sets.push(("status", SqlValue::Text(v.to_string())));
        }
        if let Some(v) = input.date {
            sets.push(("date", SqlValue::Text(v)));
        }

        crud::update_by_id(&self.pool, "invoices", id, sets).await?;
        self.get_by_id(id).await
    }

    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        crud::delete_by_id(&self.pool, "invoices", id).await
    }
}

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt::{Display, Formatter, Result as FmtResult};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, ToSchema, sqlx::Type)]
pub enum InvoiceStatus {
    Paid,
    Unpaid,
    Refunded,
}

impl Display for InvoiceStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            InvoiceStatus::Paid => write!(f, "Paid"),
            InvoiceStatus::Unpaid => write!(f, "Unpaid"),
            InvoiceStatus::Refunded => write!(f, "Refunded"),
        }
    }
}

/// Invoice entity. The id is a human-readable `INV-###` code assigned at
/// creation; `amount` and `date` are display-formatted strings.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    pub id: String,
    pub organization: String,
    pub amount: String,
    pub status: InvoiceStatus,
    pub date: String,
}

#[derive(Debug, Clone, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateInvoiceRequest {
    #[validate(length(min = 2, message = "Organization must be at least 2 characters"))]
    pub organization: String,
    pub amount: String,
    pub status: InvoiceStatus,
    pub date: String,
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateInvoiceRequest {
    #[validate(length(min = 2, message = "Organization must be at least 2 characters"))]
    pub organization: Option<String>,
    pub amount: Option<String>,
    pub status: Option<InvoiceStatus>,
    pub date: Option<String>,
}

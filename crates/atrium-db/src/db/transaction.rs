//! Database transaction utilities for multi-row operations that need
//! atomicity (the paired Team/TeamLead writes).

use atrium_core::AppError;
use sqlx::{Sqlite, SqlitePool, Transaction};
use std::ops::{Deref, DerefMut};

/// A transaction wrapper that rolls back on drop unless committed.
///
/// Either every statement issued through the guard persists, or none does:
/// an early return or error path drops the inner transaction, which sqlx
/// rolls back.
pub struct TransactionGuard<'a> {
    transaction: Option<Transaction<'a, Sqlite>>,
}

impl<'a> TransactionGuard<'a> {
    /// Begin a new database transaction.
    pub async fn begin(pool: &'a SqlitePool) -> Result<Self, AppError> {
        let transaction = pool.begin().await?;
        Ok(Self {
            transaction: Some(transaction),
        })
    }

    /// Commit the transaction, consuming the guard.
    pub async fn commit(mut self) -> Result<(), AppError> {
        if let Some(tx) = self.transaction.take() {
            tx.commit().await?;
        }
        Ok(())
    }

    /// Roll back explicitly, consuming the guard.
    pub async fn rollback(mut self) -> Result<(), AppError> {
        if let Some(tx) = self.transaction.take() {
            tx.rollback().await?;
        }
        Ok(())
    }
}

impl<'a> Deref for TransactionGuard<'a> {
    type Target = Transaction<'a, Sqlite>;

    fn deref(&self) -> &Self::Target {
        self.transaction
            .as_ref()
            .expect("transaction already consumed")
    }
}

impl<'a> DerefMut for TransactionGuard<'a> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.transaction
            .as_mut()
            .expect("transaction already consumed")
    }
}

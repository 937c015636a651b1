//! Shared CRUD plumbing used by every repository.
//!
//! The per-entity repositories all page, filter, search, fetch, and delete
//! the same way; this module holds that shape once. Search is a `LIKE`
//! substring match on the entity's designated text column; every other
//! filter is exact equality and a no-op when absent. The count query reuses
//! the exact WHERE clause of the page query so `total` always reflects the
//! filtered set.

use atrium_core::{AppError, PageQuery, Paginated};
use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, QueryBuilder, Sqlite, SqlitePool};

/// Exact-equality filter on one column. Empty values count as absent.
pub struct Filter {
    column: &'static str,
    value: Option<String>,
}

impl Filter {
    pub fn new(column: &'static str, value: Option<&str>) -> Self {
        Self {
            column,
            value: value.filter(|v| !v.is_empty()).map(str::to_string),
        }
    }
}

/// A value for a dynamic `SET` clause.
pub enum SqlValue {
    Text(String),
    NullableText(Option<String>),
    Int(i64),
}

fn push_where(
    qb: &mut QueryBuilder<'_, Sqlite>,
    search_column: &str,
    query: &PageQuery,
    filters: &[Filter],
) {
    let mut prefix = " WHERE ";
    if let Some(search) = query.search() {
        qb.push(prefix);
        qb.push(search_column);
        qb.push(" LIKE ");
        qb.push_bind(format!("%{}%", search));
        prefix = " AND ";
    }
    for filter in filters {
        if let Some(value) = &filter.value {
            qb.push(prefix);
            qb.push(filter.column);
            qb.push(" = ");
            qb.push_bind(value.clone());
            prefix = " AND ";
        }
    }
}

/// Filtered count plus the requested page slice, wrapped in the list
/// envelope. `data.len() <= limit` always holds; an empty result is valid.
pub async fn list_page<T>(
    pool: &SqlitePool,
    table: &str,
    search_column: &str,
    query: &PageQuery,
    filters: &[Filter],
) -> Result<Paginated<T>, AppError>
where
    T: for<'r> FromRow<'r, SqliteRow> + Send + Unpin,
{
    let mut count_qb = QueryBuilder::<Sqlite>::new(format!("SELECT COUNT(*) FROM {}", table));
    push_where(&mut count_qb, search_column, query, filters);
    let total: i64 = count_qb.build_query_scalar().fetch_one(pool).await?;

    let mut qb = QueryBuilder::<Sqlite>::new(format!("SELECT * FROM {}", table));
    push_where(&mut qb, search_column, query, filters);
    qb.push(" LIMIT ");
    qb.push_bind(query.limit() as i64);
    qb.push(" OFFSET ");
    qb.push_bind(query.offset());
    let rows = qb.build_query_as::<T>().fetch_all(pool).await?;

    Ok(Paginated::new(rows, total, query))
}

/// Fetch one row by primary key; absence is `None`, never an error.
pub async fn fetch_by_id<T>(pool: &SqlitePool, table: &str, id: &str) -> Result<Option<T>, AppError>
where
    T: for<'r> FromRow<'r, SqliteRow> + Send + Unpin,
{
    let mut qb = QueryBuilder::<Sqlite>::new(format!("SELECT * FROM {} WHERE id = ", table));
    qb.push_bind(id.to_string());
    let row = qb.build_query_as::<T>().fetch_optional(pool).await?;
    Ok(row)
}

/// Delete by primary key. Deleting a missing row is not an error here;
/// existence checks are the caller's concern.
pub async fn delete_by_id(pool: &SqlitePool, table: &str, id: &str) -> Result<(), AppError> {
    let mut qb = QueryBuilder::<Sqlite>::new(format!("DELETE FROM {} WHERE id = ", table));
    qb.push_bind(id.to_string());
    qb.build().execute(pool).await?;
    Ok(())
}

/// Apply a dynamic partial update. Only the supplied `(column, value)` pairs
/// are written; an empty set is a no-op so an empty PATCH body leaves the
/// row untouched.
pub async fn update_by_id(
    pool: &SqlitePool,
    table: &str,
    id: &str,
    sets: Vec<(&'static str, SqlValue)>,
) -> Result<(), AppError> {
    if sets.is_empty() {
        return Ok(());
    }

    let mut qb = QueryBuilder::<Sqlite>::new(format!("UPDATE {} SET ", table));
    {
        let mut separated = qb.separated(", ");
        for (column, value) in sets {
            separated.push(column);
            separated.push_unseparated(" = ");
            match value {
                SqlValue::Text(v) => separated.push_bind_unseparated(v),
                SqlValue::NullableText(v) => separated.push_bind_unseparated(v),
                SqlValue::Int(v) => separated.push_bind_unseparated(v),
            };
        }
    }
    qb.push(" WHERE id = ");
    qb.push_bind(id.to_string());
    qb.build().execute(pool).await?;
    Ok(())
}

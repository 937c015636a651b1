use atrium_core::models::{CreateTeamRequest, Team, TeamLead, TeamWithLead, UpdateTeamRequest};
use atrium_core::{AppError, PageQuery, Paginated};
use sqlx::{QueryBuilder, Sqlite, SqlitePool};
use std::collections::HashMap;
use uuid::Uuid;
use validator::Validate;

use super::crud::{self, Filter, SqlValue};
use super::organization::DISPLAY_DATE_FORMAT;
use super::transaction::TransactionGuard;

/// Repository for teams and their paired lead records. A team and its
/// TeamLead row are created and deleted together; no partial pair persists.
#[derive(Clone)]
pub struct TeamRepository {
    pool: SqlitePool,
}

impl TeamRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// List teams with their leads joined in, searched by name, optionally
    /// narrowed by organization.
    pub async fn list(
        &self,
        query: &PageQuery,
        organization: Option<&str>,
    ) -> Result<Paginated<TeamWithLead>, AppError> {
        let filters = [Filter::new("organization", organization)];
        let page: Paginated<Team> =
            crud::list_page(&self.pool, "teams", "name", query, &filters).await?;

        let mut leads = self.leads_for(&page.data).await?;
        let data = page
            .data
            .into_iter()
            .map(|team| {
                let lead = leads.remove(&team.id);
                TeamWithLead { team, lead }
            })
            .collect();

        Ok(Paginated {
            data,
            pagination: page.pagination,
        })
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Option<TeamWithLead>, AppError> {
        let team: Option<Team> = crud::fetch_by_id(&self.pool, "teams", id).await?;
        let Some(team) = team else {
            return Ok(None);
        };

        let lead = sqlx::query_as::<_, TeamLead>("SELECT * FROM team_leads WHERE team_id = ?")
            .bind(&team.id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(Some(TeamWithLead { team, lead }))
    }

    /// Create a team together with its lead record. Both inserts run in one
    /// transaction; a failure after the first write rolls it back.
    pub async fn create(&self, input: CreateTeamRequest) -> Result<TeamWithLead, AppError> {
        input.validate()?;

        let team_id = Uuid::new_v4().to_string();
        let lead_id = Uuid::new_v4().to_string();
        let created_at = chrono::Utc::now().format(DISPLAY_DATE_FORMAT).to_string();

        let mut tx = TransactionGuard::begin(&self.pool).await?;

        sqlx::query(
            r#"
            INSERT INTO teams (id, name, description, members, organization, lead_id, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&team_id)
        .bind(&input.name)
        .bind(&input.description)
        .bind(input.members)
        .bind(&input.organization)
        .bind(&lead_id)
        .bind(&created_at)
        .execute(&mut **tx)
        .await?;

        sqlx::query(
            r#"
            INSERT INTO team_leads (id, team_id, user_id, name, email, avatar)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&lead_id)
        .bind(&team_id)
        .bind(&input.lead.user_id)
        .bind(&input.lead.name)
        .bind(&input.lead.email)
        .bind(&input.lead.avatar)
        .execute(&mut **tx)
        .await?;

        tx.commit().await?;

        tracing::info!(team_id = %team_id, lead_id = %lead_id, "Created team with lead");
        self.get_by_id(&team_id)
            .await?
            .ok_or_else(|| AppError::Internal("Failed to load created team".to_string()))
    }

    pub async fn update(
        &self,
        id: &str,
        input: UpdateTeamRequest,
    ) -> Result<Option<TeamWithLead>, AppError> {
        input.validate()?;

        let mut sets = Vec::new();
        if let Some(v) = input.name {
            sets.push(("name", SqlValue::Text(v)));
        }
        if let Some(v) = input.description {
            sets.push(("description", SqlValue::Text(v)));
        }
        if let Some(v) = input.members {
            sets.push(("members", SqlValue::Int(v)));
        }
        if let Some(v) = input.organization {
            sets.push(("organization", SqlValue::Text(v)));
        }

        crud::update_by_id(&self.pool, "teams", id, sets).await?;
        self.get_by_id(id).await
    }

    /// Delete the team and its lead record together. Lead rows go first so
    /// the child/parent relation holds at every point in the transaction.
    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        let mut tx = TransactionGuard::begin(&self.pool).await?;

        sqlx::query("DELETE FROM team_leads WHERE team_id = ?")
            .bind(id)
            .execute(&mut **tx)
            .await?;
        sqlx::query("DELETE FROM teams WHERE id = ?")
            .bind(id)
            .execute(&mut **tx)
            .await?;

        tx.commit().await?;
        Ok(())
    }

    /// Fetch the lead rows for a page of teams, keyed by team id.
    async fn leads_for(&self, teams: &[Team]) -> Result<HashMap<String, TeamLead>, AppError> {
        let mut leads = HashMap::new();
        if teams.is_empty() {
            return Ok(leads);
        }

        let mut qb = QueryBuilder::<Sqlite>::new("SELECT * FROM team_leads WHERE team_id IN (");
        {
            let mut separated = qb.separated(", ");
            for team in teams {
                separated.push_bind(team.id.clone());
            }
        }
        qb.push(")");

        let rows: Vec<TeamLead> = qb.build_query_as().fetch_all(&self.pool).await?;
        for lead in rows {
            leads.insert(lead.team_id.clone(), lead);
        }
        Ok(leads)
    }
}

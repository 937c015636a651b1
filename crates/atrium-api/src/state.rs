use atrium_db::{
    AuditLogRepository, InvoiceRepository, OrganizationMemberRepository, OrganizationRepository,
    SubscriptionRepository, TeamRepository, UserRepository,
};
use sqlx::SqlitePool;

/// Repository set, one per entity. Repositories receive the pool by
/// injection at startup; the application holds no other database handles.
#[derive(Clone)]
pub struct DbState {
    pub pool: SqlitePool,
    pub users: UserRepository,
    pub organizations: OrganizationRepository,
    pub teams: TeamRepository,
    pub subscriptions: SubscriptionRepository,
    pub invoices: InvoiceRepository,
    pub audit_logs: AuditLogRepository,
    pub org_members: OrganizationMemberRepository,
}

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub db: DbState,
}

impl AppState {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            db: DbState {
                users: UserRepository::new(pool.clone()),
                organizations: OrganizationRepository::new(pool.clone()),
                teams: TeamRepository::new(pool.clone()),
                subscriptions: SubscriptionRepository::new(pool.clone()),
                invoices: InvoiceRepository::new(pool.clone()),
                audit_logs: AuditLogRepository::new(pool.clone()),
                org_members: OrganizationMemberRepository::new(pool.clone()),
                pool,
            },
        }
    }
}
